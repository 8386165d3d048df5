//! Sources of assignments.
//!
//! Every assignment made to the [trail](crate::db::trail) carries its source: a free decision, or a consequence of boolean constraint propagation together with the antecedent clause which forced the assignment.
//! Antecedents are what [conflict analysis](crate::procedures::analysis) resolves against.

use crate::db::ClauseKey;

/// The source of an assignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignmentSource {
    /// A free decision, opening a decision level.
    Decision,

    /// A consequence of boolean constraint propagation, forced by the keyed clause.
    BCP(ClauseKey),
}

impl std::fmt::Display for AssignmentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Decision => write!(f, "Decision"),
            Self::BCP(key) => write!(f, "BCP({key})"),
        }
    }
}
