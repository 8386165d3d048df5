//! A registry of theory kinds and their solver factories.
//!
//! Collaborators are resolved by name once, at configuration time, and never through ambient state: a consumer registers a factory for each [TheoryKind] their solver type supports, and [resolve](Registry::resolve) yields a fresh solver instance per query.

use std::collections::HashMap;

use crate::{
    config::Config,
    theory::{combination::Combination, TheoryCnf, TheorySolver},
    types::err::ErrorKind,
};

/// A supported theory, by SMT-LIB-style name.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TheoryKind {
    /// Quantifier-free linear real arithmetic.
    QF_LRA,

    /// Quantifier-free uninterpreted functions.
    QF_UF,

    /// Quantifier-free bit-vectors.
    QF_BV,

    /// Quantifier-free non-linear real arithmetic.
    QF_NRA,
}

impl std::fmt::Display for TheoryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::QF_LRA => write!(f, "QF_LRA"),
            Self::QF_UF => write!(f, "QF_UF"),
            Self::QF_BV => write!(f, "QF_BV"),
            Self::QF_NRA => write!(f, "QF_NRA"),
        }
    }
}

/// A registry of solver factories, keyed by theory kind.
///
/// One instance of the solver is made per query, as solvers are stateful.
pub struct Registry<T: TheorySolver> {
    factories: HashMap<TheoryKind, Box<dyn Fn() -> T>>,
}

impl<T: TheorySolver> Registry<T> {
    /// An empty registry.
    pub fn new() -> Self {
        Registry {
            factories: HashMap::default(),
        }
    }

    /// Registers `factory` for `kind`, replacing any factory already registered.
    pub fn register(&mut self, kind: TheoryKind, factory: impl Fn() -> T + 'static) {
        self.factories.insert(kind, Box::new(factory));
    }

    /// A fresh solver for `kind`, if a factory is registered.
    pub fn resolve(&self, kind: TheoryKind) -> Option<T> {
        self.factories.get(&kind).map(|factory| factory())
    }

    /// A combination over `theory_cnf` for `kind`, if a factory is registered.
    pub fn combination(
        &self,
        kind: TheoryKind,
        config: Config,
        theory_cnf: &TheoryCnf<T::Constraint>,
    ) -> Option<Result<Combination<T>, ErrorKind>> {
        self.resolve(kind)
            .map(|solver| Combination::new(config, theory_cnf, solver))
    }
}
