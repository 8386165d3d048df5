//! Configuration of a context.
//!
//! All configuration is explicit and passed at construction.
//! Nothing is read from ambient state, so two contexts built from equal configurations behave identically.

mod config_option;
pub use config_option::ConfigOption;

mod strategy;
pub use strategy::Strategy;

/// The probability of assigning true when a decision assigns a value freely.
pub type PolarityLean = f64;

/// The probability of a decision choosing a random unvalued atom over the first in universe order.
pub type RandomDecisionBias = f64;

/// The primary configuration structure.
#[derive(Clone)]
pub struct Config {
    /// The probability of assigning positive polarity to an atom when freely choosing a value for the atom.
    pub polarity_lean: ConfigOption<PolarityLean>,

    /// The probability of deciding on a random unvalued atom rather than the first in universe order.
    pub random_decision_bias: ConfigOption<RandomDecisionBias>,

    /// Default to the last held value of an atom when choosing a value for the atom.
    pub phase_saving: ConfigOption<bool>,

    /// An upper bound on the count of models enumerated through `next_model`.
    pub model_limit: ConfigOption<usize>,

    /// Which combination strategy to use when solving modulo a theory.
    pub strategy: ConfigOption<Strategy>,
}

impl Default for Config {
    /// The default configuration is deterministic: first-unassigned decisions, polarity false.
    fn default() -> Self {
        Config {
            polarity_lean: ConfigOption {
                name: "polarity_lean",
                min: 0.0,
                max: 1.0,
                value: 0.0,
            },

            random_decision_bias: ConfigOption {
                name: "random_decision_bias",
                min: 0.0,
                max: 1.0,
                value: 0.0,
            },

            phase_saving: ConfigOption {
                name: "phase_saving",
                min: false,
                max: true,
                value: false,
            },

            model_limit: ConfigOption {
                name: "model_limit",
                min: usize::MIN,
                max: usize::MAX,
                value: usize::MAX,
            },

            strategy: ConfigOption {
                name: "strategy",
                min: Strategy::MIN,
                max: Strategy::MAX,
                value: Strategy::FullLazy,
            },
        }
    }
}
