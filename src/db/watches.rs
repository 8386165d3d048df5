//! A database of watchers, indexed by atom and polarity.
//!
//! For each atom two lists of clause keys are kept, one per polarity.
//! A clause watching a literal appears in the list for the literal's atom and polarity, and is visited whenever the complementary literal is assigned during [propagation](crate::procedures::bcp).
//!
//! Propagation takes a list out of the database with [take_list](Watches::take_list) and returns the clauses which kept their watch with [restore_list](Watches::restore_list).
//! This is sound as a replacement watch is always on some *other* literal: a clause moves its watch only to an unassigned or true literal, and the watched literal being processed is false.

use std::mem;

use crate::{db::ClauseKey, structures::atom::Atom};

/// Watch lists, per atom and polarity.
#[derive(Debug, Default)]
pub struct Watches {
    /// For each atom, the clauses watching the positive literal of the atom.
    positive: Vec<Vec<ClauseKey>>,

    /// For each atom, the clauses watching the negative literal of the atom.
    negative: Vec<Vec<ClauseKey>>,
}

impl Watches {
    /// Extends the watch lists to cover `atom`.
    pub fn ensure_atom(&mut self, atom: Atom) {
        let required = atom as usize + 1;
        if self.positive.len() < required {
            self.positive.resize_with(required, Vec::default);
            self.negative.resize_with(required, Vec::default);
        }
    }

    /// Notes `key` watches the literal of `atom` with `polarity`.
    pub fn add_watch(&mut self, atom: Atom, polarity: bool, key: ClauseKey) {
        match polarity {
            true => self.positive[atom as usize].push(key),
            false => self.negative[atom as usize].push(key),
        }
    }

    /// Takes the list of clauses watching the literal of `atom` with `polarity`, leaving an empty list.
    pub fn take_list(&mut self, atom: Atom, polarity: bool) -> Vec<ClauseKey> {
        match polarity {
            true => mem::take(&mut self.positive[atom as usize]),
            false => mem::take(&mut self.negative[atom as usize]),
        }
    }

    /// Returns a taken list, merging any watches added while the list was out.
    pub fn restore_list(&mut self, atom: Atom, polarity: bool, mut list: Vec<ClauseKey>) {
        let slot = match polarity {
            true => &mut self.positive[atom as usize],
            false => &mut self.negative[atom as usize],
        };
        list.append(slot);
        *slot = list;
    }
}

#[cfg(test)]
mod watch_tests {
    use super::*;

    #[test]
    fn take_and_restore() {
        let mut watches = Watches::default();
        watches.ensure_atom(2);
        watches.add_watch(2, true, ClauseKey::Original(0));
        watches.add_watch(2, true, ClauseKey::Original(1));
        watches.add_watch(2, false, ClauseKey::Original(2));

        let mut list = watches.take_list(2, true);
        assert_eq!(list.len(), 2);

        list.swap_remove(0);
        watches.restore_list(2, true, list);

        assert_eq!(watches.take_list(2, true), vec![ClauseKey::Original(1)]);
        assert_eq!(watches.take_list(2, false), vec![ClauseKey::Original(2)]);
    }
}
