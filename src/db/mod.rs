//! Databases for holding the dynamic state of a solve: clauses, the valuation, the trail, watches, and queued consequences.
//!
//! Each database is owned by a [context](crate::context) and addressed through plain integer keys.
//! [ClauseKey]s are stable for the lifetime of a context, as the clause stores are append-only.

pub mod atom;
pub mod clause;
pub mod consequence_q;
pub mod trail;
pub mod watches;

/// A decision level, counted from 0 for decision-free assignments.
pub type LevelIndex = u32;

/// A key to a stored clause.
///
/// Original clauses and additions (learned or otherwise derived clauses) are stored separately, with keys indexing into the respective store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ClauseKey {
    /// A key to a clause of the formula as given.
    Original(u32),

    /// A key to a clause derived during a solve.
    Addition(u32),
}

impl std::fmt::Display for ClauseKey {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Original(index) => write!(f, "Original({index})"),
            Self::Addition(index) => write!(f, "Addition({index})"),
        }
    }
}
