//! The trail of assignments, grouped by decision level.
//!
//! Assignments are pushed to the trail as they are made, and levels are marked by recording the index at which each decision was pushed.
//! Level 0 holds decision-free assignments, those forced by unit clauses or learned facts, and has no marker.
//!
//! Invariants:
//! - An atom appears at most once on the trail.
//! - The level of an entry is the level of the decision whose propagation chain produced it.
//! - Undoing a level removes exactly the entries of that level, most recent first.

use crate::{
    db::LevelIndex,
    structures::{
        clause::CClause,
        literal::{CLiteral, Literal},
    },
};

/// The trail: assignments in order, with level start indices.
#[derive(Debug, Default)]
pub struct Trail {
    /// Assignments, in the order they were made.
    literals: Vec<CLiteral>,

    /// For each decision level, the index into `literals` at which the level opens.
    level_indicies: Vec<usize>,
}

impl Trail {
    /// The current decision level.
    pub fn level(&self) -> LevelIndex {
        self.level_indicies.len() as LevelIndex
    }

    /// Opens a fresh decision level, to hold the next decision and its consequences.
    pub fn open_level(&mut self) {
        self.level_indicies.push(self.literals.len());
    }

    /// Pushes `literal` to the current level.
    pub fn store_assignment(&mut self, literal: CLiteral) {
        self.literals.push(literal);
    }

    /// Every assignment on the trail, in order.
    pub fn assignments(&self) -> &[CLiteral] {
        &self.literals
    }

    /// The assignments of the current level, in order.
    pub fn top_level_assignments(&self) -> &[CLiteral] {
        match self.level_indicies.last() {
            Some(&start) => &self.literals[start..],
            None => &self.literals,
        }
    }

    /// Closes the current level, returning its assignments most recent first.
    ///
    /// At level 0 every assignment is returned.
    pub fn forget_top_level(&mut self) -> Vec<CLiteral> {
        let start = self.level_indicies.pop().unwrap_or(0);
        self.literals.split_off(start).into_iter().rev().collect()
    }

    /// Removes the propagated entries of the current level, keeping the decision, returned most recent first.
    ///
    /// At level 0 there is no decision, and every assignment is removed.
    pub fn forget_top_propagations(&mut self) -> Vec<CLiteral> {
        let start = match self.level_indicies.last() {
            Some(&index) => index + 1,
            None => 0,
        };
        if start > self.literals.len() {
            return Vec::default();
        }
        self.literals.split_off(start).into_iter().rev().collect()
    }

    /// The negation of every decision on the trail, as a clause.
    ///
    /// Empty when no decision has been made, as then every assignment is forced.
    pub fn blocking_clause(&self) -> CClause {
        self.level_indicies
            .iter()
            .map(|&index| -self.literals[index])
            .collect()
    }

    /// The most recent current-level assignment whose atom occurs in `clause`.
    pub fn last_assignment_on_current_level(&self, clause: &[CLiteral]) -> Option<CLiteral> {
        self.top_level_assignments()
            .iter()
            .rev()
            .find(|assignment| clause.iter().any(|literal| literal.atom() == assignment.atom()))
            .copied()
    }
}

#[cfg(test)]
mod trail_tests {
    use super::*;
    use crate::structures::atom::Atom;

    fn lit(atom: Atom, polarity: bool) -> CLiteral {
        CLiteral::new(atom, polarity)
    }

    #[test]
    fn levels_open_and_close() {
        let mut trail = Trail::default();
        trail.store_assignment(lit(0, true));

        trail.open_level();
        trail.store_assignment(lit(1, false));
        trail.store_assignment(lit(2, true));
        assert_eq!(trail.level(), 1);
        assert_eq!(trail.top_level_assignments(), &[lit(1, false), lit(2, true)]);

        let popped = trail.forget_top_level();
        assert_eq!(popped, vec![lit(2, true), lit(1, false)]);
        assert_eq!(trail.level(), 0);
        assert_eq!(trail.assignments(), &[lit(0, true)]);
    }

    #[test]
    fn propagations_forgotten_decision_kept() {
        let mut trail = Trail::default();
        trail.open_level();
        trail.store_assignment(lit(0, true));
        trail.store_assignment(lit(1, true));
        trail.store_assignment(lit(2, false));

        let popped = trail.forget_top_propagations();
        assert_eq!(popped, vec![lit(2, false), lit(1, true)]);
        assert_eq!(trail.top_level_assignments(), &[lit(0, true)]);
        assert_eq!(trail.level(), 1);
    }

    #[test]
    fn blocking_clause_negates_decisions() {
        let mut trail = Trail::default();
        trail.store_assignment(lit(9, true));
        trail.open_level();
        trail.store_assignment(lit(0, true));
        trail.store_assignment(lit(1, true));
        trail.open_level();
        trail.store_assignment(lit(2, false));

        assert_eq!(trail.blocking_clause(), vec![lit(0, false), lit(2, true)]);
    }

    #[test]
    fn last_assignment_search() {
        let mut trail = Trail::default();
        trail.open_level();
        trail.store_assignment(lit(0, true));
        trail.store_assignment(lit(1, true));
        trail.store_assignment(lit(2, true));

        let clause = vec![lit(1, false), lit(0, false)];
        assert_eq!(
            trail.last_assignment_on_current_level(&clause),
            Some(lit(1, true))
        );

        let absent = vec![lit(7, false)];
        assert_eq!(trail.last_assignment_on_current_level(&absent), None);
    }
}
