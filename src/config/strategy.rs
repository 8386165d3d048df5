/// The strategy used when combining the boolean engine with a theory solver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strategy {
    /// Check complete boolean models against the theory.
    FullLazy,

    /// Check the theory after each decision step.
    LessLazy,
}

impl Strategy {
    pub const MIN: Self = Self::FullLazy;
    pub const MAX: Self = Self::LessLazy;
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::FullLazy => write!(f, "full_lazy"),
            Self::LessLazy => write!(f, "less_lazy"),
        }
    }
}
