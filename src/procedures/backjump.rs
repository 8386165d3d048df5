/*!
Backjumping, non-chronological backtracking to a prior decision level.

See [GenericContext::backjump] for the relevant context method.

A backjump pops every decision level above the target, dropping the value of each atom assigned on a popped level, most recent first.
Pending consequences are cleared alongside, as any queued literal may have been forced by an assignment no longer on the trail.

The target of a backjump after learning a clause is the second-highest decision level among the literals of the clause (level 0 for a unit clause).
At that level every other literal of the clause is false and the asserted literal is unvalued, so the clause propagates immediately.
*/

use crate::{
    context::GenericContext,
    db::LevelIndex,
    misc::log::targets,
    structures::literal::{CLiteral, Literal},
    types::err::{AnalysisError, ErrorKind},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Pops every decision level above `target`, dropping the value of each assignment made.
    pub fn backjump(&mut self, target: LevelIndex) {
        log::trace!(target: targets::BACKJUMP, "Backjump from {} to {target}", self.trail.level());

        while self.trail.level() > target {
            for literal in self.trail.forget_top_level() {
                self.atom_db.drop_value(literal.atom());
            }
        }

        self.consequence_q.clear();
    }

    /// Pops the current decision level in full.
    pub fn undo_last_decision(&mut self) {
        let level = self.trail.level();
        if level > 0 {
            self.backjump(level - 1);
        }
    }

    /// Removes the propagated entries of the current level, keeping the decision.
    ///
    /// At level 0 every assignment is decision-free, and all are removed.
    pub fn undo_propagations(&mut self) {
        for literal in self.trail.forget_top_propagations() {
            self.atom_db.drop_value(literal.atom());
        }
        self.consequence_q.clear();
    }

    /// The appropriate backjump level to apply an asserting clause: the second-highest decision level among the literals of `clause`.
    ///
    /// Unvalued literals are ignored; with fewer than two valued levels the target is 0.
    pub fn non_chronological_backjump_level(
        &self,
        clause: &[CLiteral],
    ) -> Result<LevelIndex, ErrorKind> {
        match clause.len() {
            0 => Err(AnalysisError::EmptyResolution.into()),

            1 => Ok(0),

            _ => {
                // A top-two scan, as the clause is unsorted.
                let mut top_two: (Option<LevelIndex>, Option<LevelIndex>) = (None, None);
                for literal in clause {
                    let Some(level) = self.atom_db.level_of(literal.atom()) else {
                        continue;
                    };

                    match top_two {
                        (_, None) => top_two.1 = Some(level),

                        (_, Some(the_top)) if level > the_top => {
                            top_two.0 = top_two.1;
                            top_two.1 = Some(level);
                        }

                        (None, _) => top_two.0 = Some(level),

                        (Some(second), _) if level > second => top_two.0 = Some(level),

                        _ => {}
                    }
                }

                match top_two {
                    (Some(second), _) => Ok(second),
                    _ => Ok(0),
                }
            }
        }
    }
}
