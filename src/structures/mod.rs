//! Core theoretical structures: atoms, literals, clauses, formulas, valuations, and consequences.

pub mod atom;
pub mod clause;
pub mod cnf;
pub mod consequence;
pub mod literal;
pub mod valuation;
