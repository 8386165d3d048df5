//! A database of atoms and their assignment metadata.
//!
//! The atom database owns the valuation of a context, and for each valued atom records:
//! - The decision level the value was assigned at.
//! - The source of the assignment (a decision, or the antecedent clause).
//! - The value previously assigned, if any, for phase saving.
//!
//! Atoms enter the database either through [fresh_atom](AtomDB::fresh_atom), which mints an unused atom, or through [observe_atom](AtomDB::observe_atom), which extends the database to cover an externally chosen atom.
//! The order in which atoms are first observed is kept as the universe, and is the order in which [decisions](crate::procedures::decision) consider atoms.

use std::collections::HashSet;

use crate::{
    db::LevelIndex,
    misc::log::targets,
    structures::{
        atom::Atom,
        consequence::AssignmentSource,
        literal::{CLiteral, Literal},
        valuation::{VValuation, Valuation},
    },
};

/// The result of calling [set_value](AtomDB::set_value).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AtomValue {
    /// The atom had no value, and now has the given value.
    NotSet,

    /// The atom already had the given value.
    Same,

    /// The atom has the opposing value.
    Different,
}

/// A database of atoms, their values, and their assignment metadata.
#[derive(Debug, Default)]
pub struct AtomDB {
    /// The current (partial) valuation.
    valuation: VValuation,

    /// The value of each atom the last time it had a value, for phase saving.
    previous: Vec<bool>,

    /// The decision level of each valued atom.
    levels: Vec<Option<LevelIndex>>,

    /// The source of each valued atom's assignment.
    sources: Vec<Option<AssignmentSource>>,

    /// The atoms of the database, in order of first observation.
    universe: Vec<Atom>,

    /// The atoms of the universe, for constant-time membership checks.
    seen: HashSet<Atom>,
}

impl AtomDB {
    /// A fresh atom, unused by any clause so far.
    pub fn fresh_atom(&mut self) -> Atom {
        let atom = self.valuation.len() as Atom;
        self.valuation.push(None);
        self.previous.push(false);
        self.levels.push(None);
        self.sources.push(None);
        self.seen.insert(atom);
        self.universe.push(atom);
        atom
    }

    /// Extends the database to cover `atom`, if it does not already.
    ///
    /// Atoms between the current maximum and `atom` are covered too, though only `atom` joins the universe.
    pub fn observe_atom(&mut self, atom: Atom) {
        let required = atom as usize + 1;
        if self.valuation.len() < required {
            self.valuation.resize(required, None);
            self.previous.resize(required, false);
            self.levels.resize(required, None);
            self.sources.resize(required, None);
        }
        if self.seen.insert(atom) {
            self.universe.push(atom);
        }
    }

    /// The value of `atom` on the current valuation.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.valuation.value_of(atom)
    }

    /// The value `atom` held the last time it held a value.
    ///
    /// Defaults to false for a never-valued atom.
    pub fn previous_value_of(&self, atom: Atom) -> bool {
        self.previous[atom as usize]
    }

    /// Sets the value of the atom of `literal` to the polarity of `literal`, at `level`, from `source`.
    ///
    /// If the atom already has a value nothing is recorded, and the returned [AtomValue] distinguishes agreement from disagreement.
    pub fn set_value(
        &mut self,
        literal: CLiteral,
        level: LevelIndex,
        source: AssignmentSource,
    ) -> AtomValue {
        let atom = literal.atom();
        match self.value_of(atom) {
            None => {
                log::trace!(target: targets::VALUATION, "{literal} set at level {level} from {source}");
                self.valuation[atom as usize] = Some(literal.polarity());
                self.levels[atom as usize] = Some(level);
                self.sources[atom as usize] = Some(source);
                AtomValue::NotSet
            }

            Some(value) if value == literal.polarity() => AtomValue::Same,

            Some(_) => AtomValue::Different,
        }
    }

    /// Removes any value of `atom`, recording the dropped value for phase saving.
    pub fn drop_value(&mut self, atom: Atom) {
        if let Some(value) = self.value_of(atom) {
            log::trace!(target: targets::VALUATION, "Value of {atom} dropped");
            self.previous[atom as usize] = value;
        }
        self.valuation[atom as usize] = None;
        self.levels[atom as usize] = None;
        self.sources[atom as usize] = None;
    }

    /// The decision level `atom` was valued at, if valued.
    pub fn level_of(&self, atom: Atom) -> Option<LevelIndex> {
        self.levels[atom as usize]
    }

    /// The source of the value of `atom`, if valued.
    pub fn source_of(&self, atom: Atom) -> Option<AssignmentSource> {
        self.sources[atom as usize]
    }

    /// The current valuation, as a slice.
    pub fn valuation(&self) -> &[Option<bool>] {
        &self.valuation
    }

    /// The current valuation, cloned.
    pub fn valuation_canonical(&self) -> VValuation {
        self.valuation.clone()
    }

    /// The atoms of the database, in order of first observation.
    pub fn universe(&self) -> &[Atom] {
        &self.universe
    }

    /// The count of atoms the database covers.
    pub fn atom_count(&self) -> usize {
        self.valuation.len()
    }
}

#[cfg(test)]
mod atom_db_tests {
    use super::*;

    #[test]
    fn set_drop_set() {
        let mut db = AtomDB::default();
        let a = db.fresh_atom();
        let literal = CLiteral::new(a, true);

        assert_eq!(
            db.set_value(literal, 0, AssignmentSource::Decision),
            AtomValue::NotSet
        );
        assert_eq!(
            db.set_value(literal, 0, AssignmentSource::Decision),
            AtomValue::Same
        );
        assert_eq!(
            db.set_value(-literal, 0, AssignmentSource::Decision),
            AtomValue::Different
        );

        db.drop_value(a);
        assert_eq!(db.value_of(a), None);
        assert!(db.previous_value_of(a));
        assert_eq!(db.level_of(a), None);
    }

    #[test]
    fn observation_order_is_universe_order() {
        let mut db = AtomDB::default();
        db.observe_atom(3);
        db.observe_atom(1);
        db.observe_atom(3);
        assert_eq!(db.universe(), &[3, 1]);
        assert_eq!(db.atom_count(), 4);
    }
}
