//! Reports on the outcome of a solve, or a step of one.

use crate::{db::LevelIndex, structures::literal::CLiteral};

/// A high-level report on a context or combination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Report {
    /// The formula is satisfiable.
    Satisfiable,

    /// The formula is unsatisfiable.
    Unsatisfiable,

    /// Satisfiability could not be determined.
    Unknown,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// The trail after a single decide-and-propagate step, for inspection between steps.
///
/// Returned by [next_partial_assignment](crate::context::GenericContext::next_partial_assignment), and driving the less-lazy [combination](crate::theory::combination) loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartialAssignment {
    /// The decision level of the step.
    pub level: LevelIndex,

    /// True when every atom of the universe has a value.
    pub complete: bool,

    /// Every literal true on the valuation, in trail order.
    pub literals: Vec<CLiteral>,
}
