/*!
Boolean constraint propagation.

See [GenericContext::propagate] for the relevant context method.

# Overview

Propagation drains the consequence queue.
Each queued literal is checked against the valuation: a stale entry (the atom already holds the queued value) is skipped, a clashing entry marks a conflict, and a fresh entry is recorded on the trail with its source before every clause watching the opposing literal is visited.

A visited clause tries to move its watch to some other unassigned or true literal.
When no replacement exists, watch A tells the status of the clause: true means the clause is satisfied, unvalued means the clause has become unit and watch A is queued as a consequence, and false means the clause is unsatisfiable on the valuation.

Propagation terminates at fixpoint (the queue is empty) or at the first conflict.

# Complications

A watch list is taken out of the watch database while it is traversed, so a call to [update_watch](crate::db::clause::StoredClause::update_watch) may freely mutate other lists.
The *taken* list will not be mutated through such a call: the literal propagation is processing has a value conflicting with the watched polarity, and so is not a candidate for a replacement watch.

Clauses which moved their watch are removed from the taken list by swapping to the end and truncating, preserving the remainder.
*/

use crate::{
    context::GenericContext,
    db::clause::WatchUpdate,
    misc::log::targets,
    structures::{
        atom::Atom,
        consequence::AssignmentSource,
        literal::{CLiteral, Literal},
    },
    types::err::BCPError,
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Propagates queued consequences until the queue is exhausted or a conflict is found.
    ///
    /// On conflict the queue is left as-is; conflict analysis clears it after backjumping.
    pub fn propagate(&mut self) -> Result<(), BCPError> {
        while let Some((literal, source)) = self.consequence_q.pop_front() {
            match self.atom_db.value_of(literal.atom()) {
                Some(value) if value == literal.polarity() => {
                    log::trace!(target: targets::PROPAGATION, "Stale entry {literal} skipped");
                    continue;
                }

                Some(_) => match source {
                    AssignmentSource::BCP(key) => {
                        log::trace!(target: targets::PROPAGATION, "Consequence of {key} and the valuation is contradiction");
                        return Err(BCPError::Conflict(key));
                    }

                    AssignmentSource::Decision => return Err(BCPError::CorruptQueue),
                },

                None => {
                    let level = self.trail.level();
                    self.atom_db.set_value(literal, level, source);
                    self.trail.store_assignment(literal);
                    self.propagate_assignment(literal)?;
                }
            }
        }
        Ok(())
    }

    /// Visits every clause watching the falsified polarity of the atom of `literal`.
    fn propagate_assignment(&mut self, literal: CLiteral) -> Result<(), BCPError> {
        let atom: Atom = literal.atom();
        let falsified_polarity = !literal.polarity();

        let mut list = self.watches.take_list(atom, falsified_polarity);

        let mut index = 0;
        let mut length = list.len();
        let mut conflict = None;

        'watch_loop: while index < length {
            let key = list[index];

            let stored = match self.clause_db.get_mut(key) {
                Ok(stored) => stored,
                Err(_) => {
                    length -= 1;
                    list.swap(index, length);
                    continue 'watch_loop;
                }
            };

            match stored.update_watch(atom, &self.atom_db, &mut self.watches) {
                WatchUpdate::Moved => {
                    length -= 1;
                    list.swap(index, length);
                    continue 'watch_loop;
                }

                WatchUpdate::Unmoved => {
                    // After the call to update_watch, any unvalued watched literal is at position 0.
                    let watch = stored.watch_a();

                    match self.atom_db.value_of(watch.atom()) {
                        Some(value) if value == watch.polarity() => {}

                        None => {
                            log::trace!(target: targets::PROPAGATION, "Consequence of {key}: {watch}");
                            self.consequence_q
                                .push_back((watch, AssignmentSource::BCP(key)));
                        }

                        Some(_) => {
                            log::trace!(target: targets::PROPAGATION, "Conflict on {key}");
                            conflict = Some(key);
                            break 'watch_loop;
                        }
                    }
                }
            }

            index += 1;
        }

        // Clauses beyond `length` moved their watch; everything before, visited or not, stays.
        list.truncate(length);
        self.watches.restore_list(atom, falsified_polarity, list);

        match conflict {
            None => Ok(()),
            Some(key) => Err(BCPError::Conflict(key)),
        }
    }
}
