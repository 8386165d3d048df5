//! Literals, atoms paired with a required polarity.
//!
//! A literal with polarity true asks its atom to be true, and a literal with polarity false asks its atom to be false.
//! Negation swaps the polarity and keeps the atom.
//!
//! [CLiteral] is the canonical representation, and the [Literal] trait abstracts over anything literal-like.
//! Equality is by value, so the same atom/polarity pair compares equal however it was obtained.

use std::{borrow::Borrow, ops::Neg};

use crate::structures::atom::Atom;

/// The canonical representation of a literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CLiteral {
    /// The atom of the literal.
    atom: Atom,

    /// The polarity the literal requires of its atom.
    polarity: bool,
}

impl CLiteral {
    pub fn new(atom: Atom, polarity: bool) -> Self {
        CLiteral { atom, polarity }
    }
}

/// Methods common to structures which may be interpreted as literals.
pub trait Literal {
    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// The literal as a [CLiteral].
    fn canonical(&self) -> CLiteral;

    /// The negation of the literal, as a [CLiteral].
    fn negate(&self) -> CLiteral;
}

impl Literal for CLiteral {
    fn atom(&self) -> Atom {
        self.atom
    }

    fn polarity(&self) -> bool {
        self.polarity
    }

    fn canonical(&self) -> CLiteral {
        *self
    }

    fn negate(&self) -> CLiteral {
        -*self
    }
}

impl Neg for CLiteral {
    type Output = CLiteral;

    fn neg(self) -> Self::Output {
        CLiteral {
            atom: self.atom,
            polarity: !self.polarity,
        }
    }
}

impl Borrow<Atom> for CLiteral {
    fn borrow(&self) -> &Atom {
        &self.atom
    }
}

impl std::fmt::Display for CLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.atom),
            false => write!(f, "-{}", self.atom),
        }
    }
}

#[cfg(test)]
mod literal_tests {
    use super::*;

    #[test]
    fn negation_involutes() {
        let literal = CLiteral::new(7, true);
        assert_eq!(literal, -(-literal));
        assert_eq!(-literal, CLiteral::new(7, false));
        assert_ne!(literal, -literal);
    }

    #[test]
    fn value_equality() {
        assert_eq!(CLiteral::new(3, false), CLiteral::new(3, false));
        assert_ne!(CLiteral::new(3, false), CLiteral::new(4, false));
    }
}
