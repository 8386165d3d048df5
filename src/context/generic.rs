use crate::{
    config::Config,
    db::{
        atom::AtomDB, clause::ClauseDB, consequence_q::ConsequenceQ, trail::Trail,
        watches::Watches, LevelIndex,
    },
    misc::log::targets,
    reports::Report,
    structures::{
        atom::Atom, consequence::AssignmentSource, literal::CLiteral, valuation::Valuation,
    },
};

use super::{ContextState, Counters};

/// A generic context, parameterised to a source of randomness.
///
/// Requires a source of [rng](rand::Rng) which (also) implements [Default].
///
/// [Default] is used in calls to [make_decision](GenericContext::make_decision) to appease the borrow checker, and may be relaxed with a different implementation.
///
/// # Example
///
/// ```rust
/// # use stoat_smt::context::GenericContext;
/// # use stoat_smt::generic::minimal_pcg::MinimalPCG32;
/// # use stoat_smt::config::Config;
/// let context = GenericContext::<MinimalPCG32>::from_config(Config::default());
/// ```
pub struct GenericContext<R: rand::Rng + std::default::Default> {
    /// The configuration of the context.
    pub config: Config,

    /// Counters related to the context/solve.
    pub counters: Counters,

    /// The atom database.
    /// See [db::atom](crate::db::atom) for details.
    pub atom_db: AtomDB,

    /// The clause database.
    /// See [db::clause](crate::db::clause) for details.
    pub clause_db: ClauseDB,

    /// Watch lists for each atom.
    pub watches: Watches,

    /// The trail of assignments, grouped by decision level.
    pub trail: Trail,

    /// A queue of observed consequences, yet to be applied.
    pub consequence_q: ConsequenceQ,

    /// The status of the context.
    pub state: ContextState,

    /// The source of rng.
    pub rng: R,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Self {
            config,
            counters: Counters::default(),
            atom_db: AtomDB::default(),
            clause_db: ClauseDB::default(),
            watches: Watches::default(),
            trail: Trail::default(),
            consequence_q: ConsequenceQ::default(),
            state: ContextState::Configuration,
            rng: R::default(),
        }
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        match self.state {
            ContextState::Configuration | ContextState::Input | ContextState::Solving => {
                Report::Unknown
            }
            ContextState::Satisfiable => Report::Satisfiable,
            ContextState::Unsatisfiable => Report::Unsatisfiable,
        }
    }

    /// A fresh atom, covered by every database of the context.
    pub fn fresh_atom(&mut self) -> Atom {
        let atom = self.atom_db.fresh_atom();
        self.watches.ensure_atom(atom);
        atom
    }

    /// Extends every database of the context to cover `atom`.
    pub fn observe_atom(&mut self, atom: Atom) {
        self.atom_db.observe_atom(atom);
        self.watches.ensure_atom(atom);
    }

    /// The current decision level.
    pub fn decision_level(&self) -> LevelIndex {
        self.trail.level()
    }

    /// True when every atom of the universe has a value.
    pub fn assignment_complete(&self) -> bool {
        self.atom_db
            .universe()
            .iter()
            .all(|&atom| self.atom_db.value_of(atom).is_some())
    }

    /// Every literal true on the current valuation, in trail order.
    pub fn true_literals(&self) -> &[CLiteral] {
        self.trail.assignments()
    }

    /// The literals true on the current valuation made true on the current level, in trail order.
    pub fn true_literals_on_current_level(&self) -> &[CLiteral] {
        self.trail.top_level_assignments()
    }

    /// Queues `literal` for propagation, from `source`.
    ///
    /// The value of the literal's atom is recorded when the entry is popped, not when queued.
    pub fn q_assignment(&mut self, literal: CLiteral, source: AssignmentSource) {
        log::trace!(target: targets::QUEUE, "{literal} from {source} queued");
        self.consequence_q.push_back((literal, source));
    }

    /// The current valuation, canonicalised.
    pub fn valuation_canonical(&self) -> Vec<Option<bool>> {
        self.atom_db.valuation().canonical()
    }
}
