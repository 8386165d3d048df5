use crate::generic::minimal_pcg::MinimalPCG32;

use super::GenericContext;

/// A context which uses [MinimalPCG32] as a source of randomness.
///
/// [MinimalPCG32::default] seeds with a constant, so a context built through [from_config](GenericContext::from_config) is deterministic.
pub type Context = GenericContext<MinimalPCG32>;
