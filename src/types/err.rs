//! Errors, external and internal.
//!
//! Each subsystem has its own error enum, wrapped into [ErrorKind] for callers who only care that something went wrong.
//!
//! Errors split into two families:
//! - Misuse of the API, e.g. adding a clause after a decision has been made, recoverable by the caller.
//! - Corruption of an internal invariant, e.g. a conflict with no assignment to resolve against, from which no recovery is possible.

use crate::db::ClauseKey;

/// A top-level error, wrapping the subsystem enums.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// An error during conflict analysis.
    Analysis(AnalysisError),

    /// An error during boolean constraint propagation.
    BCP(BCPError),

    /// An error from the clause database.
    ClauseDB(ClauseDBError),

    /// An error from inspection or mutation of context state.
    State(StateError),

    /// An error from the theory layer.
    Theory(TheoryError),
}

/// Errors during conflict analysis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnalysisError {
    /// Resolution produced the empty clause at a level above 0.
    EmptyResolution,

    /// The clause to resolve with has no assignment on the current level.
    MissingAntecedent,

    /// The derived clause asserts no literal.
    NoAssertion,
}

/// Errors during boolean constraint propagation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BCPError {
    /// The keyed clause is unsatisfiable on the current valuation.
    Conflict(ClauseKey),

    /// A queued decision or assumption conflicts with the valuation.
    CorruptQueue,
}

/// Errors from the clause database.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseDBError {
    /// No clause is stored at the key used.
    Missing,
}

/// Errors from inspection or mutation of context state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateError {
    /// Clauses may only be added before any decision is made.
    DecisionsMade,

    /// A literal was expected to have a value, and does not.
    UnvaluedLiteral,
}

/// Errors from the theory layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TheoryError {
    /// An explanation mentions a constraint the bridge did not intern.
    UnknownConstraint,
}

impl From<AnalysisError> for ErrorKind {
    fn from(e: AnalysisError) -> Self {
        ErrorKind::Analysis(e)
    }
}

impl From<BCPError> for ErrorKind {
    fn from(e: BCPError) -> Self {
        ErrorKind::BCP(e)
    }
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}

impl From<StateError> for ErrorKind {
    fn from(e: StateError) -> Self {
        ErrorKind::State(e)
    }
}

impl From<TheoryError> for ErrorKind {
    fn from(e: TheoryError) -> Self {
        ErrorKind::Theory(e)
    }
}
