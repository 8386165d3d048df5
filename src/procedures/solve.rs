/*!
The solve loop, model enumeration, and stepwise search.

See [GenericContext::solve] for the primary context method.

# Overview

A solve interleaves propagation and decision:
- Propagation settles the consequences of the assignments so far, with any conflict routed through [conflict analysis](crate::procedures::analysis) and the search resumed from the backjump level.
- With propagation settled, a decision extends the valuation, or exhaustion establishes satisfiability.

The solve loop generalises to a generator of models: [next_model](GenericContext::next_model) blocks the previous model with the negation of its decisions, learned through the conflict path, and re-enters the loop.
Likewise, [next_partial_assignment](GenericContext::next_partial_assignment) steps the same loop one decision at a time, for callers who inspect the trail between steps.

[resume_with_conflict](GenericContext::resume_with_conflict) is the shared re-entry point: a clause false on the current valuation (a blocking clause, or a theory explanation) is stored and treated exactly as a conflicting clause.
*/

use crate::{
    context::{ContextState, GenericContext},
    misc::log::targets,
    procedures::{analysis::AnalysisResult, decision::DecisionOk},
    reports::PartialAssignment,
    structures::{
        clause::Clause,
        consequence::AssignmentSource,
        literal::Literal,
        valuation::VValuation,
    },
    types::err::{BCPError, ErrorKind, StateError},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Determines the satisfiability of the formula, leaving the outcome in the state of the context.
    ///
    /// On a satisfiable formula the trail holds a complete valuation, read through [valuation_canonical](GenericContext::valuation_canonical) or the atom database.
    pub fn solve(&mut self) -> Result<(), ErrorKind> {
        if self.state == ContextState::Unsatisfiable {
            return Ok(());
        }
        self.state = ContextState::Solving;

        loop {
            self.counters.total_iterations += 1;

            if !self.propagate_resolving_conflicts()? {
                return Ok(());
            }

            match self.make_decision() {
                DecisionOk::Exhausted => return Ok(()),

                DecisionOk::Literal(literal) => {
                    log::trace!(target: targets::PROPAGATION, "Decision {literal} at level {}", self.trail.level() + 1);
                    self.trail.open_level();
                    self.q_assignment(literal, AssignmentSource::Decision);
                }
            }
        }
    }

    /// Propagates until fixpoint, resolving any conflicts found.
    ///
    /// Returns false when a fundamental conflict establishes unsatisfiability.
    pub fn propagate_resolving_conflicts(&mut self) -> Result<bool, ErrorKind> {
        loop {
            match self.propagate() {
                Ok(()) => return Ok(true),

                Err(BCPError::Conflict(key)) => match self.conflict_analysis(key)? {
                    AnalysisResult::FundamentalConflict => return Ok(false),

                    AnalysisResult::UnitClause(_) | AnalysisResult::AssertingClause(_, _) => {
                        continue;
                    }
                },

                Err(error) => return Err(error.into()),
            }
        }
    }

    /// The next model of the formula, if any.
    ///
    /// The first call solves the formula.
    /// Later calls block the previous model and resume the search, so successive models are distinct.
    /// Enumeration ends with `None`, on an unsatisfiable formula, on exhaustion of models, or at the configured model limit.
    pub fn next_model(&mut self) -> Result<Option<VValuation>, ErrorKind> {
        match self.state {
            ContextState::Unsatisfiable => return Ok(None),

            ContextState::Satisfiable => {
                if self.counters.total_models >= self.config.model_limit.value {
                    return Ok(None);
                }

                let blocking = self.trail.blocking_clause();
                log::trace!(target: targets::ANALYSIS, "Blocking clause: {}", blocking.as_string());
                if !self.resume_with_conflict(blocking)? {
                    return Ok(None);
                }
            }

            _ => {}
        }

        self.solve()?;

        match self.state {
            ContextState::Satisfiable => {
                self.counters.total_models += 1;
                Ok(Some(self.valuation_canonical()))
            }
            _ => Ok(None),
        }
    }

    /// Stores `clause`, which must be false on the current valuation, and resolves the conflict it raises.
    ///
    /// The context first backjumps to the highest level among the clause's literals, so the clause conflicts *at* the level analysis runs on.
    /// Returns false when the conflict is terminal.
    pub fn resume_with_conflict(
        &mut self,
        clause: impl Clause,
    ) -> Result<bool, ErrorKind> {
        let mut clause = clause.canonical();
        clause.sort_unstable();
        clause.dedup();

        if clause.is_empty() {
            self.state = ContextState::Unsatisfiable;
            return Ok(false);
        }

        let mut conflict_level = 0;
        for literal in clause.literals() {
            match self.atom_db.level_of(literal.atom()) {
                Some(level) => conflict_level = conflict_level.max(level),
                None => return Err(StateError::UnvaluedLiteral.into()),
            }
        }

        if conflict_level == 0 {
            self.state = ContextState::Unsatisfiable;
            return Ok(false);
        }

        self.backjump(conflict_level);
        let key = self
            .clause_db
            .store(clause, false, &self.atom_db, &mut self.watches);

        match self.conflict_analysis(key)? {
            AnalysisResult::FundamentalConflict => Ok(false),

            AnalysisResult::UnitClause(_) | AnalysisResult::AssertingClause(_, _) => {
                self.state = ContextState::Solving;
                Ok(true)
            }
        }
    }

    /// Steps the solve loop by a single decision, returning the trail for inspection.
    ///
    /// Each call settles propagation and then, while atoms remain unvalued, extends the trail with one decision and its consequences.
    /// Enumeration ends with `None` once the formula is unsatisfiable.
    pub fn next_partial_assignment(
        &mut self,
    ) -> Result<Option<PartialAssignment>, ErrorKind> {
        match self.state {
            ContextState::Unsatisfiable => return Ok(None),

            ContextState::Satisfiable => {
                let blocking = self.trail.blocking_clause();
                if !self.resume_with_conflict(blocking)? {
                    return Ok(None);
                }
            }

            _ => self.state = ContextState::Solving,
        }

        self.counters.total_iterations += 1;

        if !self.propagate_resolving_conflicts()? {
            return Ok(None);
        }

        if !self.assignment_complete() {
            match self.make_decision() {
                DecisionOk::Exhausted => {}

                DecisionOk::Literal(literal) => {
                    self.trail.open_level();
                    self.q_assignment(literal, AssignmentSource::Decision);
                    if !self.propagate_resolving_conflicts()? {
                        return Ok(None);
                    }
                }
            }
        }

        let complete = self.assignment_complete();
        if complete {
            self.state = ContextState::Satisfiable;
        }

        Ok(Some(PartialAssignment {
            level: self.trail.level(),
            complete,
            literals: self.trail.assignments().to_vec(),
        }))
    }
}
