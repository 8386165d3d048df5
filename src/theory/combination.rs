//! Combination of the boolean engine with an external theory solver.
//!
//! A [Combination] owns a [context](crate::context) over the boolean skeleton of a theory formula, a [bridge](crate::theory::bridge) for translation, and a [TheorySolver].
//! Two strategies are offered, chosen through the [configuration](crate::config):
//!
//! - **Full-lazy**: the engine produces a complete boolean model, the solver judges the constraints the model asserts, and an unsatisfiable verdict feeds the explanation back as a learned clause before the next model is requested.
//! - **Less-lazy**: the solver judges after every decision step, so theory conflicts prune the boolean search early.
//!   On backtrack the solver is cleared and every constraint of a currently-true atom re-added from scratch, a deliberate simplification over per-level retraction.
//!
//! In either strategy an unknown verdict is latched: boolean exhaustion after an unknown reports unknown, never unsatisfiable, as the unjudged branch may have held a solution.

use crate::{
    config::{Config, Strategy},
    context::Context,
    misc::log::targets,
    structures::valuation::VValuation,
    theory::{bridge::Bridge, TheoryCnf, TheorySolver, TheoryVerdict},
    types::err::ErrorKind,
};

/// A solution to a theory formula: a boolean model of the skeleton and the theory assignment witnessing it.
pub struct SmtSolution<A> {
    /// The valuation of the skeleton.
    pub valuation: VValuation,

    /// The witnessing assignment, as the theory solver expresses one.
    pub assignment: A,
}

/// The report of a combined solve.
pub enum SmtReport<A> {
    /// The formula is satisfiable, with a witnessing solution.
    Satisfiable(SmtSolution<A>),

    /// The formula is unsatisfiable.
    Unsatisfiable,

    /// Satisfiability could not be determined, as some theory verdict was unknown.
    Unknown,
}

/// A context, a bridge, and a theory solver, combined.
pub struct Combination<T: TheorySolver> {
    /// The boolean engine, over the skeleton.
    pub context: Context,

    /// The constraint↔atom bridge.
    pub bridge: Bridge<T::Constraint>,

    /// The theory solver.
    theory: T,

    /// Whether any theory verdict so far was unknown.
    unknown_seen: bool,
}

impl<T: TheorySolver> Combination<T> {
    /// A combination over `theory_cnf`, with the skeleton loaded into a fresh context.
    pub fn new(config: Config, theory_cnf: &TheoryCnf<T::Constraint>, theory: T) -> Result<Self, ErrorKind> {
        let bridge = Bridge::new(theory_cnf);
        let mut context = Context::from_config(config);
        context.load(bridge.skeleton())?;

        Ok(Combination {
            context,
            bridge,
            theory,
            unknown_seen: false,
        })
    }

    /// Solves the theory formula with the configured strategy.
    pub fn solve(&mut self) -> Result<SmtReport<T::Assignment>, ErrorKind> {
        match self.context.config.strategy.value {
            Strategy::FullLazy => self.solve_full_lazy(),
            Strategy::LessLazy => self.solve_less_lazy(),
        }
    }

    /// Complete boolean models, judged one at a time.
    fn solve_full_lazy(&mut self) -> Result<SmtReport<T::Assignment>, ErrorKind> {
        loop {
            let Some(valuation) = self.context.next_model()? else {
                return Ok(self.exhausted_report());
            };

            self.theory.clear();
            for constraint in self.bridge.constraints_of(self.context.true_literals()) {
                self.theory.add_constraint(constraint.clone());
            }

            match self.theory.solve() {
                TheoryVerdict::Satisfiable(assignment) => {
                    log::trace!(target: targets::COMBINATION, "Model accepted by the theory");
                    return Ok(SmtReport::Satisfiable(SmtSolution {
                        valuation,
                        assignment,
                    }));
                }

                TheoryVerdict::Unsatisfiable(explanation) => {
                    log::trace!(target: targets::COMBINATION, "Model rejected: {explanation:?}");
                    let clause = self.bridge.explanation_clause(&explanation)?;
                    if !self.context.resume_with_conflict(clause)? {
                        return Ok(self.exhausted_report());
                    }
                }

                TheoryVerdict::Unknown => {
                    self.unknown_seen = true;
                    return Ok(SmtReport::Unknown);
                }
            }
        }
    }

    /// Decision steps, each judged as made.
    fn solve_less_lazy(&mut self) -> Result<SmtReport<T::Assignment>, ErrorKind> {
        // The sentinel forces a full (re)load of the theory solver on the first step.
        let mut last_level = usize::MAX;

        loop {
            let Some(step) = self.context.next_partial_assignment()? else {
                return Ok(self.exhausted_report());
            };

            if (step.level as usize) < last_level {
                self.theory.clear();
                for constraint in self.bridge.constraints_of(&step.literals) {
                    self.theory.add_constraint(constraint.clone());
                }
            } else {
                let current = self.context.true_literals_on_current_level();
                for constraint in self.bridge.constraints_of(current) {
                    self.theory.add_constraint(constraint.clone());
                }
            }
            last_level = step.level as usize;

            match self.theory.solve() {
                TheoryVerdict::Satisfiable(assignment) => {
                    if step.complete {
                        return Ok(SmtReport::Satisfiable(SmtSolution {
                            valuation: self.context.valuation_canonical(),
                            assignment,
                        }));
                    }
                }

                TheoryVerdict::Unknown => {
                    self.unknown_seen = true;
                    if step.complete {
                        return Ok(SmtReport::Unknown);
                    }
                }

                TheoryVerdict::Unsatisfiable(explanation) => {
                    log::trace!(target: targets::COMBINATION, "Step rejected: {explanation:?}");
                    let clause = self.bridge.explanation_clause(&explanation)?;
                    if !self.context.resume_with_conflict(clause)? {
                        return Ok(self.exhausted_report());
                    }
                    last_level = usize::MAX;
                }
            }
        }
    }

    /// The report when the boolean search is exhausted: unsatisfiable, softened to unknown if any verdict was.
    fn exhausted_report(&self) -> SmtReport<T::Assignment> {
        match self.unknown_seen {
            true => SmtReport::Unknown,
            false => SmtReport::Unsatisfiable,
        }
    }
}
