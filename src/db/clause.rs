//! A database of clauses, indexed by [ClauseKey]s.
//!
//! Original clauses and additions are kept in separate append-only stores.
//! Additions cover every clause derived during a solve: learned clauses, theory explanations, and blocking clauses.
//!
//! # Watched literals
//!
//! Each stored clause of two or more literals maintains two watched literals, following [Optimal implementation of watched literals and more general techniques](https://www.jair.org/index.php/jair/article/view/10839):
//!
//! - Watch A is the literal at index 0 of the clause.
//! - Watch B is the literal at a mutable index, the watch pointer.
//!
//! When a watched literal is falsified, watch A is first swapped to be the *other* watched literal, and the watch pointer then sweeps forward circularly (skipping index 0) in search of a replacement candidate, an unassigned or true literal.
//! If the sweep completes without a candidate the pointer is unchanged and the watches stay put, at which point the clause is unit or unsatisfiable and watch A tells which.
//!
//! Invariant: if no watched literal is true and not every watched literal is unassigned, any transition of the clause to unit or unsatisfiable happens on a watched literal.

use crate::{
    db::{atom::AtomDB, watches::Watches, ClauseKey},
    misc::log::targets,
    structures::{
        atom::Atom,
        clause::CClause,
        literal::{CLiteral, Literal},
    },
    types::err::ClauseDBError,
};

/// The result of a watch update on a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WatchUpdate {
    /// A replacement watch was found, and the clause no longer watches the given atom.
    Moved,

    /// No replacement watch exists, and the clause is unit or unsatisfiable.
    Unmoved,
}

/// A clause, its key, and its watch pointer.
#[derive(Debug)]
pub struct StoredClause {
    /// The key of the clause.
    key: ClauseKey,

    /// The literals of the clause, with watch A at index 0.
    clause: CClause,

    /// The index of watch B.
    watch_ptr: usize,
}

impl StoredClause {
    /// The key of the clause.
    pub fn key(&self) -> ClauseKey {
        self.key
    }

    /// The literals of the clause, as a slice.
    pub fn literals(&self) -> &[CLiteral] {
        &self.clause
    }

    /// Watch A, the literal at index 0.
    pub fn watch_a(&self) -> CLiteral {
        self.clause[0]
    }

    /// Chooses initial watches, preferring unassigned or true literals for each.
    ///
    /// With every literal false, as when a blocking clause or theory explanation is stored, the watches fall on the false literals of highest decision level.
    /// Those literals are the last to be unset on a backjump, so the watch invariant survives any backjump which unsets part of the clause.
    ///
    /// Requires two or more literals.
    fn initialise_watches(&mut self, atom_db: &AtomDB, watches: &mut Watches) {
        let index_a = self.watch_candidate(atom_db, 0);
        self.clause.swap(0, index_a);
        let watch_a = self.clause[0];
        watches.add_watch(watch_a.atom(), watch_a.polarity(), self.key);

        self.watch_ptr = self.watch_candidate(atom_db, 1);
        let watch_b = self.clause[self.watch_ptr];
        watches.add_watch(watch_b.atom(), watch_b.polarity(), self.key);
    }

    /// The index of the first unassigned or true literal at `from` or later, else of the false literal with the highest decision level.
    fn watch_candidate(&self, atom_db: &AtomDB, from: usize) -> usize {
        let mut fallback = from;
        let mut fallback_level = None;

        for index in from..self.clause.len() {
            let literal = self.clause[index];
            match atom_db.value_of(literal.atom()) {
                Some(value) if value != literal.polarity() => {
                    let level = atom_db.level_of(literal.atom());
                    if level > fallback_level {
                        fallback_level = level;
                        fallback = index;
                    }
                }
                _ => return index,
            }
        }
        fallback
    }

    /// Updates the watches of the clause, on the assumption the watched literal of `atom` has been falsified.
    ///
    /// Watch A is first made the other watched literal, so after the call watch A is unassigned or true whenever possible.
    /// The watch pointer then sweeps for a replacement candidate.
    pub fn update_watch(
        &mut self,
        atom: Atom,
        atom_db: &AtomDB,
        watches: &mut Watches,
    ) -> WatchUpdate {
        if self.clause[0].atom() == atom {
            self.clause.swap(0, self.watch_ptr);
        }

        let watch_ptr_cache = self.watch_ptr;
        let clause_length = self.clause.len();
        loop {
            self.watch_ptr += 1;
            if self.watch_ptr == clause_length {
                self.watch_ptr = 1; // skip 0
            }
            if self.watch_ptr == watch_ptr_cache {
                break WatchUpdate::Unmoved;
            }
            let literal = self.clause[self.watch_ptr];
            match atom_db.value_of(literal.atom()) {
                Some(value) if value != literal.polarity() => {}
                _ => {
                    watches.add_watch(literal.atom(), literal.polarity(), self.key);
                    break WatchUpdate::Moved;
                }
            }
        }
    }
}

/// A database of clauses, indexed by [ClauseKey]s.
#[derive(Debug, Default)]
pub struct ClauseDB {
    /// Clauses of the formula as given.
    originals: Vec<StoredClause>,

    /// Clauses derived during a solve.
    additions: Vec<StoredClause>,
}

impl ClauseDB {
    /// Stores `clause` and returns its key.
    ///
    /// Clauses of two or more literals have watches initialised against the current valuation.
    /// Unit clauses take no watches, as their consequence is queued directly by the caller.
    pub fn store(
        &mut self,
        clause: CClause,
        original: bool,
        atom_db: &AtomDB,
        watches: &mut Watches,
    ) -> ClauseKey {
        let key = match original {
            true => ClauseKey::Original(self.originals.len() as u32),
            false => ClauseKey::Addition(self.additions.len() as u32),
        };
        log::trace!(target: targets::CLAUSE_DB, "{key}: {clause:?}");

        let mut stored = StoredClause {
            key,
            clause,
            watch_ptr: 0,
        };
        if stored.clause.len() > 1 {
            stored.initialise_watches(atom_db, watches);
        }

        match original {
            true => self.originals.push(stored),
            false => self.additions.push(stored),
        }
        key
    }

    /// The stored clause at `key`.
    pub fn get(&self, key: ClauseKey) -> Result<&StoredClause, ClauseDBError> {
        let stored = match key {
            ClauseKey::Original(index) => self.originals.get(index as usize),
            ClauseKey::Addition(index) => self.additions.get(index as usize),
        };
        stored.ok_or(ClauseDBError::Missing)
    }

    /// The stored clause at `key`, mutably.
    pub fn get_mut(&mut self, key: ClauseKey) -> Result<&mut StoredClause, ClauseDBError> {
        let stored = match key {
            ClauseKey::Original(index) => self.originals.get_mut(index as usize),
            ClauseKey::Addition(index) => self.additions.get_mut(index as usize),
        };
        stored.ok_or(ClauseDBError::Missing)
    }

    /// An iterator over every stored clause, originals first.
    pub fn all_clauses(&self) -> impl Iterator<Item = &StoredClause> {
        self.originals.iter().chain(self.additions.iter())
    }

    /// The count of stored clauses.
    pub fn clause_count(&self) -> usize {
        self.originals.len() + self.additions.len()
    }
}
