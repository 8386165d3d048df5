//! A library for deciding the satisfiability of boolean formulas written in conjunctive normal form, alone or modulo a background theory.
//!
//! stoat_smt pairs a conflict-driven clause-learning (CDCL) propositional engine with a lazy theory-combination loop in the DPLL(T) style.
//! Theory decision procedures are external collaborators, supplied through the [TheorySolver](crate::theory::TheorySolver) trait.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context](crate::context).
//!
//! Contexts are built from an explicit [configuration](crate::config) and hold a handful of databases which instantiate core theoretical objects:
//! - A formula is stored in a [clause database](crate::db::clause).
//! - A valuation, and per-atom assignment metadata, is stored in an [atom database](crate::db::atom).
//! - The history of assignments, grouped by decision level, is stored on the [trail](crate::db::trail).
//! - Clauses watching an atom are recorded in a [watch database](crate::db::watches).
//!
//! The algorithm for determining satisfiability is factored into a collection of [procedures]:
//! boolean constraint propagation, conflict analysis, backjumping, decision, and the solve loop.
//!
//! A solved context is a generator of models.
//! [next_model](crate::context::GenericContext::next_model) returns successive distinct satisfying assignments by feeding the negation of each model back through the conflict-analysis path, and [next_partial_assignment](crate::context::GenericContext::next_partial_assignment) exposes the trail at decision-level granularity for use by the less-lazy combination loop.
//!
//! The theory side lives in [theory]:
//! - A [bridge](crate::theory::bridge) interns theory constraints as boolean atoms and derives the boolean skeleton of a theory formula.
//! - The [combination](crate::theory::combination) module drives a context and an external theory solver together, with a full-lazy and a less-lazy strategy.
//! - A [registry](crate::theory::registry) resolves a theory kind to its collaborators once, at configuration time.
//!
//! # Example
//!
//! ```rust
//! use stoat_smt::config::Config;
//! use stoat_smt::context::Context;
//! use stoat_smt::reports::Report;
//! use stoat_smt::structures::literal::{CLiteral, Literal};
//!
//! let mut ctx = Context::from_config(Config::default());
//!
//! let p = ctx.fresh_atom();
//! let q = ctx.fresh_atom();
//!
//! let p_or_q = vec![CLiteral::new(p, true), CLiteral::new(q, true)];
//! assert!(ctx.add_clause(p_or_q).is_ok());
//! assert!(ctx.add_clause(CLiteral::new(p, false)).is_ok());
//!
//! assert!(ctx.solve().is_ok());
//! assert_eq!(ctx.report(), Report::Satisfiable);
//! assert_eq!(ctx.atom_db.value_of(q), Some(true));
//! ```
//!
//! # Simplifications
//!
//! Decisions take the first atom without a value in discovery order and assign false, by default.
//! This is a deterministic placeholder for an activity heuristic, and is swappable through the configuration (see [random_decision_bias](crate::config::Config::random_decision_bias), [polarity_lean](crate::config::Config::polarity_lean), and [phase_saving](crate::config::Config::phase_saving)).
//!
//! A context is not reentrant.
//! Independent queries require independent contexts (and independent theory solver instances), one per query.
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout, grouped by the targets listed in [misc::log].
//! No log implementation is provided.

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod generic;

pub mod db;

pub mod misc;
pub mod reports;

pub mod theory;
