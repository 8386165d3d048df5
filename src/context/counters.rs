/// Counters over the life of a context.
#[derive(Clone, Copy, Debug, Default)]
pub struct Counters {
    /// The count of conflicts seen.
    pub total_conflicts: usize,

    /// The count of decisions made.
    pub total_decisions: usize,

    /// The count of iterations of the solve loop.
    pub total_iterations: usize,

    /// The count of models returned.
    pub total_models: usize,
}
