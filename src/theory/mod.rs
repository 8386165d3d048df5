//! Solving modulo a background theory.
//!
//! The boolean engine knows nothing of theories.
//! Instead, a [Bridge](bridge::Bridge) interns each distinct theory constraint as a boolean atom, and a [Combination](combination::Combination) drives the boolean engine and an external decision procedure together, lazily: the engine proposes (partial) models of the boolean skeleton, and the decision procedure accepts them or explains why not.
//!
//! Decision procedures are supplied through the [TheorySolver] trait, with one instance per query.
//! The [registry](registry) resolves a named theory kind to its collaborators at configuration time.

pub mod bridge;
pub mod combination;
pub mod registry;

use std::fmt::Debug;
use std::hash::Hash;

/// A clause of theory constraints, read disjunctively.
pub type TheoryClause<C> = Vec<C>;

/// A formula of theory constraints in conjunctive normal form.
pub type TheoryCnf<C> = Vec<TheoryClause<C>>;

/// The verdict of a theory solver on the constraints it holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TheoryVerdict<C, A> {
    /// The constraints are jointly satisfiable, witnessed by a theory assignment.
    Satisfiable(A),

    /// The constraints are jointly unsatisfiable, for the (sub)set of constraints given in explanation.
    Unsatisfiable(Vec<C>),

    /// The solver could not determine satisfiability.
    Unknown,
}

/// A decision procedure for some theory.
///
/// The solver holds a set of asserted constraints, grown with [add_constraint](TheorySolver::add_constraint) and emptied with [clear](TheorySolver::clear).
/// A call to [solve](TheorySolver::solve) judges the conjunction of the constraints held.
/// Asserting a constraint already held is permitted, and must not change any verdict.
///
/// An explanation returned with an unsatisfiable verdict must be a subset of the constraints held, jointly unsatisfiable in the theory.
/// The smaller the explanation, the stronger the clause learned from it, though any sound explanation will do.
pub trait TheorySolver {
    /// The constraints of the theory, as the consumer expresses them.
    type Constraint: Clone + Eq + Hash + Debug;

    /// A satisfying assignment in the theory, whatever form suits.
    type Assignment;

    /// Empties the solver of constraints.
    fn clear(&mut self);

    /// Asserts `constraint`, conjoined with those already held.
    fn add_constraint(&mut self, constraint: Self::Constraint);

    /// Judges the conjunction of the constraints held.
    fn solve(&mut self) -> TheoryVerdict<Self::Constraint, Self::Assignment>;
}
