/*!
Conflict analysis, the derivation of an asserting clause from a conflict by resolution.

See [GenericContext::conflict_analysis] for the relevant context method.

# Overview

Analysis begins with the conflicting clause and repeatedly resolves with antecedents until the clause is *asserting*: exactly one literal of the clause was valued on the conflicting level.

Each resolution step takes the most recent current-level trail entry whose atom occurs in the clause, and resolves the clause with the antecedent of that entry on the entry's atom.
Every such entry is a consequence of propagation: a decision has no antecedent, but a clause whose sole current-level literal is the decision is already asserting, so the loop stops first.

After the asserting clause is found:
- A unit clause prompts a backjump to level 0, with the clause stored as a fact.
- Otherwise the context backjumps to the second-highest level among the clause's literals, the clause is stored and watched, and the asserted literal queued with the stored clause as antecedent.

A conflict with no decision on the trail establishes unsatisfiability.
*/

use crate::{
    context::{ContextState, GenericContext},
    db::{ClauseKey, LevelIndex},
    misc::log::targets,
    structures::{
        clause::{resolve_on, CClause, Clause},
        consequence::AssignmentSource,
        literal::{CLiteral, Literal},
    },
    types::err::{AnalysisError, ErrorKind},
};

/// The result of conflict analysis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnalysisResult {
    /// The conflict does not rest on any decision, and the formula is unsatisfiable.
    FundamentalConflict,

    /// Analysis derived a unit clause, now stored, with the asserted literal queued at level 0.
    UnitClause(CLiteral),

    /// Analysis derived an asserting clause, stored at `key`, with `literal` queued as its consequence.
    AssertingClause(ClauseKey, CLiteral),
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Analyses the conflict in the clause at `key`, backjumping and learning as appropriate.
    pub fn conflict_analysis(&mut self, key: ClauseKey) -> Result<AnalysisResult, ErrorKind> {
        self.counters.total_conflicts += 1;
        log::trace!(target: targets::ANALYSIS, "Analysis of {key} at level {}", self.trail.level());

        if self.trail.level() == 0 {
            self.state = ContextState::Unsatisfiable;
            return Ok(AnalysisResult::FundamentalConflict);
        }

        let conflict_level = self.trail.level();
        let mut clause: CClause = self.clause_db.get(key)?.literals().to_vec();
        let mut resolutions: usize = 0;

        while self.on_level_count(&clause, conflict_level) > 1 {
            let Some(pivot_assignment) = self.trail.last_assignment_on_current_level(&clause)
            else {
                return Err(AnalysisError::MissingAntecedent.into());
            };

            let antecedent_key = match self.atom_db.source_of(pivot_assignment.atom()) {
                Some(AssignmentSource::BCP(antecedent)) => antecedent,
                _ => return Err(AnalysisError::MissingAntecedent.into()),
            };

            let antecedent = self.clause_db.get(antecedent_key)?.literals();
            clause = resolve_on(&clause, antecedent, pivot_assignment.atom());
            resolutions += 1;
        }

        let Some(asserted) = clause
            .literals()
            .find(|literal| self.atom_db.level_of(literal.atom()) == Some(conflict_level))
        else {
            return Err(AnalysisError::NoAssertion.into());
        };

        match clause.len() {
            0 => Err(AnalysisError::EmptyResolution.into()),

            1 => {
                self.backjump(0);

                // With no resolution steps the conflicting clause is already stored at `key`.
                let unit_key = match resolutions {
                    0 => key,
                    _ => self
                        .clause_db
                        .store(clause, false, &self.atom_db, &mut self.watches),
                };
                self.q_assignment(asserted, AssignmentSource::BCP(unit_key));
                Ok(AnalysisResult::UnitClause(asserted))
            }

            _ => {
                let target = self.non_chronological_backjump_level(&clause)?;
                debug_assert!(target < conflict_level);
                self.backjump(target);

                // With no resolution steps the conflicting clause is itself asserting after the backjump.
                let asserting_key = match resolutions {
                    0 => key,
                    _ => self
                        .clause_db
                        .store(clause, false, &self.atom_db, &mut self.watches),
                };
                self.q_assignment(asserted, AssignmentSource::BCP(asserting_key));
                Ok(AnalysisResult::AssertingClause(asserting_key, asserted))
            }
        }
    }

    /// The count of literals of `clause` valued on `level`.
    fn on_level_count(&self, clause: &[CLiteral], level: LevelIndex) -> usize {
        clause
            .iter()
            .filter(|literal| self.atom_db.level_of(literal.atom()) == Some(level))
            .count()
    }
}
