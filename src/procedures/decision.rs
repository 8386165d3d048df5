/*!
Decisions, the choice of an unvalued atom and a value for it.

See [GenericContext::make_decision] for the relevant context method.

The default choice is deterministic: the first unvalued atom in universe (discovery) order, assigned false.
This is a placeholder for an activity heuristic, and the configuration bends it three ways:
- `random_decision_bias` is the probability of choosing a random unvalued atom instead.
- `phase_saving` reuses the value the atom last held.
- `polarity_lean` is the probability of assigning true when choosing a value freely.

With no unvalued atom the valuation is complete, and as propagation has settled, every clause is satisfied.
*/

use rand::{seq::IteratorRandom, Rng};

use crate::{
    context::{ContextState, GenericContext},
    misc::log::targets,
    structures::{atom::Atom, literal::CLiteral},
};

/// Possible 'Ok' results from asking for a decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecisionOk {
    /// Some truth value was chosen for some atom.
    Literal(CLiteral),

    /// Every atom already has a value, so no decision could be made.
    Exhausted,
}

/// Methods related to making decisions.
impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Chooses an unvalued atom and a value for it, or notes exhaustion.
    ///
    /// The caller opens a decision level and queues the returned literal.
    pub fn make_decision(&mut self) -> DecisionOk {
        // Takes ownership of rng to satisfy the borrow checker.
        let mut rng = std::mem::take(&mut self.rng);
        let chosen_atom = self.atom_without_value(&mut rng);
        self.rng = rng;

        match chosen_atom {
            Some(chosen_atom) => {
                self.counters.total_decisions += 1;

                let decision_literal = match self.config.phase_saving.value {
                    true => {
                        let previous_value = self.atom_db.previous_value_of(chosen_atom);
                        CLiteral::new(chosen_atom, previous_value)
                    }
                    false => {
                        let random_value = self.rng.random_bool(self.config.polarity_lean.value);
                        CLiteral::new(chosen_atom, random_value)
                    }
                };
                log::trace!(target: targets::VALUATION, "Decision {decision_literal}");

                DecisionOk::Literal(decision_literal)
            }

            None => {
                self.state = ContextState::Satisfiable;
                DecisionOk::Exhausted
            }
        }
    }

    /// An atom without a value on the current valuation, the first in universe order or (sometimes) at random.
    pub fn atom_without_value(&self, rng: &mut impl Rng) -> Option<Atom> {
        let mut unvalued = self
            .atom_db
            .universe()
            .iter()
            .copied()
            .filter(|&atom| self.atom_db.value_of(atom).is_none());

        match rng.random_bool(self.config.random_decision_bias.value) {
            true => unvalued.choose(rng),
            false => unvalued.next(),
        }
    }
}
