//! Log targets, for filtering by subsystem.
//!
//! No log implementation is shipped; a consumer supplies one through the [log] facade, or the calls compile away.

/// Targets passed with each log, grouped here for easy adjustment.
pub mod targets {
    /// Conflict analysis.
    pub const ANALYSIS: &str = "analysis";

    /// Backjumping.
    pub const BACKJUMP: &str = "backjump";

    /// The clause database.
    pub const CLAUSE_DB: &str = "clause_db";

    /// The theory combination loops.
    pub const COMBINATION: &str = "combination";

    /// Boolean constraint propagation.
    pub const PROPAGATION: &str = "propagation";

    /// The consequence queue.
    pub const QUEUE: &str = "queue";

    /// The theory bridge and solver interaction.
    pub const THEORY: &str = "theory";

    /// The valuation.
    pub const VALUATION: &str = "valuation";
}
