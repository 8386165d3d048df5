//! Procedures over a context, together making up the solve.
//!
//! - [bcp]: boolean constraint propagation.
//! - [analysis]: resolution-based conflict analysis.
//! - [backjump]: non-chronological backtracking.
//! - [decision]: choice of an atom and value when propagation settles.
//! - [solve]: the driving loop, model enumeration, and stepwise search.

pub mod analysis;
pub mod backjump;
pub mod bcp;
pub mod decision;
pub mod solve;
