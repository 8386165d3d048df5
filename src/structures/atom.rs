//! Atoms, indices into the various atom-keyed databases.
//!
//! Atoms are created in discovery order, and the order of creation fixes the order in which unvalued atoms are considered when a decision is made.
//!
//! An atom is true, false, or unvalued on a [valuation](crate::structures::valuation), and a [literal](crate::structures::literal) pairs an atom with the polarity required of it.

/// An atom, implemented as a (32 bit) unsigned integer.
pub type Atom = u32;
