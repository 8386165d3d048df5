//! Formulas in conjunctive normal form.
//!
//! A [Cnf] holds an initial clause set fixed at construction together with a growing set of learned clauses.
//! The structure is append-only: clauses are learned through [learn_clause](Cnf::learn_clause) and never removed.
//!
//! The formula also records its atom universe, the atoms occurring in some clause, in order of first occurrence.
//! Invariant: every literal of a stored clause has its atom in the universe.
//!
//! Within a [context](crate::context) the formula is held in the [clause database](crate::db::clause), which extends clauses with watch information.
//! [Cnf] is the plain term model, used for the boolean [skeleton](crate::theory::bridge) of a theory formula and wherever a formula is inspected without solving.

use std::collections::HashSet;

use crate::structures::{
    atom::Atom,
    clause::{CClause, Clause},
    valuation::Valuation,
};

/// A formula in conjunctive normal form, split into initial and learned clauses.
#[derive(Clone, Debug, Default)]
pub struct Cnf {
    /// The clauses the formula was built from.
    initial: Vec<CClause>,

    /// Clauses learned after construction.
    learned: Vec<CClause>,

    /// The atoms of the formula, in order of first occurrence.
    universe: Vec<Atom>,

    /// The atoms of the formula, for constant-time membership checks.
    seen: HashSet<Atom>,
}

impl Cnf {
    /// A formula made of `clauses`, with the universe in clause-then-literal order.
    pub fn new(clauses: Vec<CClause>) -> Self {
        let mut cnf = Cnf::default();
        for clause in &clauses {
            cnf.observe_atoms(clause);
        }
        cnf.initial = clauses;
        cnf
    }

    /// Appends `clause` to the learned clauses, extending the universe as required.
    pub fn learn_clause(&mut self, clause: CClause) {
        self.observe_atoms(&clause);
        self.learned.push(clause);
    }

    /// The atoms of the formula, in order of first occurrence.
    pub fn universe(&self) -> &[Atom] {
        &self.universe
    }

    /// An iterator over every clause of the formula, initial clauses first.
    pub fn clauses(&self) -> impl Iterator<Item = &CClause> {
        self.initial.iter().chain(self.learned.iter())
    }

    /// The count of clauses in the formula.
    pub fn clause_count(&self) -> usize {
        self.initial.len() + self.learned.len()
    }

    /// True when every clause of the formula is satisfied on `valuation`.
    pub fn satisfied_on(&self, valuation: &impl Valuation) -> bool {
        self.clauses().all(|clause| clause.satisfied_on(valuation))
    }

    fn observe_atoms(&mut self, clause: &CClause) {
        for atom in clause.atoms() {
            if self.seen.insert(atom) {
                self.universe.push(atom);
            }
        }
    }
}

#[cfg(test)]
mod cnf_tests {
    use super::*;
    use crate::structures::literal::CLiteral;

    fn lit(atom: Atom, polarity: bool) -> CLiteral {
        CLiteral::new(atom, polarity)
    }

    #[test]
    fn universe_in_discovery_order() {
        let cnf = Cnf::new(vec![
            vec![lit(4, true), lit(2, false)],
            vec![lit(2, true), lit(0, true)],
        ]);
        assert_eq!(cnf.universe(), &[4, 2, 0]);
    }

    #[test]
    fn learning_extends_universe() {
        let mut cnf = Cnf::new(vec![vec![lit(0, true)]]);
        cnf.learn_clause(vec![lit(0, false), lit(3, true)]);

        assert_eq!(cnf.universe(), &[0, 3]);
        assert_eq!(cnf.clause_count(), 2);
    }

    #[test]
    fn satisfaction_over_all_clauses() {
        let cnf = Cnf::new(vec![
            vec![lit(0, true), lit(1, true)],
            vec![lit(1, false)],
        ]);

        assert!(cnf.satisfied_on(&vec![Some(true), Some(false)]));
        assert!(!cnf.satisfied_on(&vec![Some(false), Some(false)]));
    }
}
