//! Methods to build a context: adding clauses and loading formulas.
//!
//! Clauses may be added only before any decision is made, so the watch scheme sees every clause against an (at most) level-0 valuation.
//!
//! Duplicate literals are removed at the door, and a tautological clause (a clause containing complementary literals) is skipped without storage, as it holds on every valuation.
//! The empty clause is noted as an immediate contradiction, and a unit clause queues its literal as a decision-free consequence.

use std::collections::HashSet;

use crate::{
    context::{ContextState, GenericContext},
    db::ClauseKey,
    misc::log::targets,
    structures::{clause::Clause, cnf::Cnf, consequence::AssignmentSource, literal::CLiteral},
    types::err::{ErrorKind, StateError},
};

/// The result of adding a clause to a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was stored at the given key.
    Added(ClauseKey),

    /// The clause holds on every valuation, and was skipped.
    Tautology,

    /// The clause was empty, and the context is unsatisfiable.
    Contradiction,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Adds a clause to the context, as part of the formula.
    ///
    /// Errs if a decision has been made.
    pub fn add_clause(&mut self, clause: impl Clause) -> Result<ClauseOk, ErrorKind> {
        if self.trail.level() > 0 {
            return Err(StateError::DecisionsMade.into());
        }

        let mut literals: Vec<CLiteral> = Vec::with_capacity(clause.size());
        let mut seen: HashSet<CLiteral> = HashSet::with_capacity(clause.size());

        for literal in clause.literals() {
            if seen.contains(&-literal) {
                log::trace!(target: targets::CLAUSE_DB, "Tautology skipped: {}", clause.as_string());
                return Ok(ClauseOk::Tautology);
            }
            if seen.insert(literal) {
                literals.push(literal);
            }
        }

        if literals.is_empty() {
            self.state = ContextState::Unsatisfiable;
            return Ok(ClauseOk::Contradiction);
        }

        for atom in literals.atoms() {
            self.observe_atom(atom);
        }

        if self.state == ContextState::Configuration {
            self.state = ContextState::Input;
        }

        let unit = match literals.len() {
            1 => Some(literals[0]),
            _ => None,
        };

        let key = self
            .clause_db
            .store(literals, true, &self.atom_db, &mut self.watches);

        if let Some(literal) = unit {
            self.q_assignment(literal, AssignmentSource::BCP(key));
        }

        Ok(ClauseOk::Added(key))
    }

    /// Loads `cnf` into the context, clause by clause, preserving the formula's universe order.
    pub fn load(&mut self, cnf: &Cnf) -> Result<(), ErrorKind> {
        for &atom in cnf.universe() {
            self.observe_atom(atom);
        }

        for clause in cnf.clauses() {
            self.add_clause(clause.clone())?;
        }

        Ok(())
    }
}
