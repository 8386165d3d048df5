//! A queue of observed consequences, to be applied by [propagation](crate::procedures::bcp).
//!
//! Entries pair a literal with the source which forced (or decided) it.
//! Literals are *not* valued when queued; the value is recorded at the moment the entry is popped.
//! An entry may therefore be stale by the time it is examined, as the atom may have gained the queued value through some earlier entry, and stale entries are skipped.
//! An entry whose atom gained the *opposing* value marks a conflict.

use std::collections::VecDeque;

use crate::structures::{consequence::AssignmentSource, literal::CLiteral};

/// A FIFO queue of pending (literal, source) pairs.
pub type ConsequenceQ = VecDeque<(CLiteral, AssignmentSource)>;
