//! Valuations, maps from atoms to values.
//!
//! A valuation assigns each atom one of three things: true, false, or no value.
//! The canonical representation is a vector of optional booleans indexed by atom, [VValuation].
//!
//! Most inspection of the current valuation happens through the [atom database](crate::db::atom), which owns the valuation of a context and keeps it in sync with per-atom metadata.

use crate::structures::atom::Atom;

/// The canonical representation of a valuation.
pub type VValuation = Vec<Option<bool>>;

/// Methods common to structures which may be interpreted as valuations.
pub trait Valuation {
    /// The value of `atom` on the valuation.
    ///
    /// No check is made that the valuation extends to `atom`.
    fn value_of(&self, atom: Atom) -> Option<bool>;

    /// An iterator through every atom without a value, in atom order.
    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom>;

    /// The count of atoms the valuation extends to.
    fn atom_count(&self) -> usize;

    /// The valuation as a [VValuation].
    fn canonical(&self) -> VValuation;
}

impl Valuation for [Option<bool>] {
    fn value_of(&self, atom: Atom) -> Option<bool> {
        self[atom as usize]
    }

    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter()
            .enumerate()
            .filter_map(|(atom, value)| match value {
                None => Some(atom as Atom),
                Some(_) => None,
            })
    }

    fn atom_count(&self) -> usize {
        self.len()
    }

    fn canonical(&self) -> VValuation {
        self.to_vec()
    }
}

impl Valuation for VValuation {
    fn value_of(&self, atom: Atom) -> Option<bool> {
        self.as_slice().value_of(atom)
    }

    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom> {
        self.as_slice().unvalued_atoms()
    }

    fn atom_count(&self) -> usize {
        self.len()
    }

    fn canonical(&self) -> VValuation {
        self.clone()
    }
}
