//! The bridge between theory constraints and boolean atoms.
//!
//! A bridge interns one atom per distinct constraint, in discovery order, and holds the boolean skeleton of a theory formula: each theory clause becomes a clause of the positive literals of its constraints' atoms.
//!
//! With the bijection in hand the bridge translates in both directions:
//! - A (partial) boolean valuation projects to the set of constraints whose atoms are true.
//! - A theory explanation translates to a clause of negated atoms, pronouncing the explained constraints jointly untenable.

use std::collections::HashMap;

use crate::{
    misc::log::targets,
    structures::{
        atom::Atom,
        clause::CClause,
        cnf::Cnf,
        literal::{CLiteral, Literal},
    },
    theory::TheoryCnf,
    types::err::TheoryError,
};

/// The atom↔constraint bijection and the boolean skeleton of a theory formula.
#[derive(Clone, Debug)]
pub struct Bridge<C: Clone + Eq + std::hash::Hash> {
    /// The atom of each interned constraint.
    atom_of: HashMap<C, Atom>,

    /// The constraint of each atom, indexed by atom.
    constraint_of: Vec<C>,

    /// The boolean skeleton of the theory formula.
    skeleton: Cnf,
}

impl<C: Clone + Eq + std::hash::Hash + std::fmt::Debug> Bridge<C> {
    /// Builds the bridge for `theory_cnf`, interning constraints in discovery order.
    pub fn new(theory_cnf: &TheoryCnf<C>) -> Self {
        let mut atom_of: HashMap<C, Atom> = HashMap::default();
        let mut constraint_of: Vec<C> = Vec::default();

        let mut skeleton_clauses: Vec<CClause> = Vec::with_capacity(theory_cnf.len());
        for theory_clause in theory_cnf {
            let mut clause: CClause = Vec::with_capacity(theory_clause.len());
            for constraint in theory_clause {
                let atom = match atom_of.get(constraint) {
                    Some(&atom) => atom,
                    None => {
                        let atom = constraint_of.len() as Atom;
                        log::trace!(target: targets::THEORY, "{constraint:?} interned as {atom}");
                        atom_of.insert(constraint.clone(), atom);
                        constraint_of.push(constraint.clone());
                        atom
                    }
                };
                clause.push(CLiteral::new(atom, true));
            }
            skeleton_clauses.push(clause);
        }

        Bridge {
            atom_of,
            constraint_of,
            skeleton: Cnf::new(skeleton_clauses),
        }
    }

    /// The boolean skeleton of the theory formula.
    pub fn skeleton(&self) -> &Cnf {
        &self.skeleton
    }

    /// The atom of `constraint`, if interned.
    pub fn atom_of(&self, constraint: &C) -> Option<Atom> {
        self.atom_of.get(constraint).copied()
    }

    /// The constraint of `atom`, if the atom interns one.
    pub fn constraint_of(&self, atom: Atom) -> Option<&C> {
        self.constraint_of.get(atom as usize)
    }

    /// The constraints of the true literals among `literals`.
    ///
    /// A false literal carries no constraint: the skeleton is built from positive literals only, so falsity merely declines to assert.
    pub fn constraints_of<'b>(&'b self, literals: &'b [CLiteral]) -> impl Iterator<Item = &'b C> {
        literals
            .iter()
            .filter(|literal| literal.polarity())
            .filter_map(|literal| self.constraint_of(literal.atom()))
    }

    /// The clause of negated atoms for `explanation`, pronouncing its constraints jointly untenable.
    pub fn explanation_clause(&self, explanation: &[C]) -> Result<CClause, TheoryError> {
        let mut clause: CClause = Vec::with_capacity(explanation.len());
        for constraint in explanation {
            match self.atom_of(constraint) {
                Some(atom) => clause.push(CLiteral::new(atom, false)),
                None => return Err(TheoryError::UnknownConstraint),
            }
        }
        Ok(clause)
    }
}

#[cfg(test)]
mod bridge_tests {
    use super::*;

    #[test]
    fn interning_in_discovery_order() {
        let cnf: TheoryCnf<&str> = vec![vec!["b", "a"], vec!["a", "c"]];
        let bridge = Bridge::new(&cnf);

        assert_eq!(bridge.atom_of(&"b"), Some(0));
        assert_eq!(bridge.atom_of(&"a"), Some(1));
        assert_eq!(bridge.atom_of(&"c"), Some(2));
        assert_eq!(bridge.constraint_of(1), Some(&"a"));
        assert_eq!(bridge.skeleton().clause_count(), 2);
    }

    #[test]
    fn projection_takes_true_literals() {
        let cnf: TheoryCnf<&str> = vec![vec!["a", "b"]];
        let bridge = Bridge::new(&cnf);

        let literals = vec![CLiteral::new(0, true), CLiteral::new(1, false)];
        let constraints: Vec<&&str> = bridge.constraints_of(&literals).collect();
        assert_eq!(constraints, vec![&"a"]);
    }

    #[test]
    fn explanations_negate() {
        let cnf: TheoryCnf<&str> = vec![vec!["a", "b"]];
        let bridge = Bridge::new(&cnf);

        let clause = bridge.explanation_clause(&["a", "b"]);
        assert_eq!(
            clause,
            Ok(vec![CLiteral::new(0, false), CLiteral::new(1, false)])
        );

        assert_eq!(
            bridge.explanation_clause(&["z"]),
            Err(TheoryError::UnknownConstraint)
        );
    }
}
