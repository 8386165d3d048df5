//! Clauses, disjunctions of literals.
//!
//! The canonical representation of a clause is a vector of distinct literals, [CClause], with the order of literals irrelevant to the meaning of the clause.
//! An empty clause is unsatisfiable, and a clause with a single literal is a unit clause.
//!
//! The [Clause] trait abstracts over anything clause-like, and is implemented both for [CClause] and for [CLiteral] (a literal read as a unit clause), so procedures such as [add_clause](crate::context::GenericContext::add_clause) take either.
//!
//! Evaluation against a partial valuation is three-valued:
//! - A clause is *satisfied* when some literal is true.
//! - A clause is *unsatisfiable* when every literal is false.
//! - Otherwise the clause is undetermined, as some unvalued atom may yet satisfy it.
//!
//! [resolve_on] implements binary resolution on a pivot atom, the single inference used during [conflict analysis](crate::procedures::analysis).

use std::collections::HashSet;

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
    valuation::Valuation,
};

/// The canonical representation of a clause.
pub type CClause = Vec<CLiteral>;

/// Methods common to structures which may be interpreted as clauses.
pub trait Clause {
    /// The literals of the clause, in order.
    fn literals(&self) -> impl Iterator<Item = CLiteral>;

    /// The atoms of the clause, in literal order.
    fn atoms(&self) -> impl Iterator<Item = Atom>;

    /// The count of literals in the clause.
    fn size(&self) -> usize;

    /// True when some literal of the clause is true on `valuation`.
    fn satisfied_on(&self, valuation: &impl Valuation) -> bool;

    /// True when every literal of the clause is false on `valuation`.
    fn unsatisfiable_on(&self, valuation: &impl Valuation) -> bool;

    /// The single literal the clause forces on `valuation`, if there is one.
    ///
    /// A clause asserts a literal when that literal is unvalued and every other literal is false.
    fn asserts(&self, valuation: &impl Valuation) -> Option<CLiteral>;

    /// The clause as a [CClause].
    fn canonical(&self) -> CClause;

    /// The clause as a string of space-separated literals.
    fn as_string(&self) -> String;
}

impl Clause for [CLiteral] {
    fn literals(&self) -> impl Iterator<Item = CLiteral> {
        self.iter().copied()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().map(|literal| literal.atom())
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn satisfied_on(&self, valuation: &impl Valuation) -> bool {
        self.iter()
            .any(|literal| valuation.value_of(literal.atom()) == Some(literal.polarity()))
    }

    fn unsatisfiable_on(&self, valuation: &impl Valuation) -> bool {
        self.iter()
            .all(|literal| valuation.value_of(literal.atom()) == Some(!literal.polarity()))
    }

    fn asserts(&self, valuation: &impl Valuation) -> Option<CLiteral> {
        let mut the_literal = None;

        for literal in self {
            match valuation.value_of(literal.atom()) {
                None => match the_literal {
                    None => the_literal = Some(*literal),
                    Some(_) => return None,
                },

                Some(value) if value == literal.polarity() => return None,

                Some(_) => {}
            }
        }

        the_literal
    }

    fn canonical(&self) -> CClause {
        self.to_vec()
    }

    fn as_string(&self) -> String {
        let mut the_string = String::new();
        for literal in self {
            the_string.push_str(format!("{literal} ").as_str());
        }
        the_string.pop();
        the_string
    }
}

impl Clause for CClause {
    fn literals(&self) -> impl Iterator<Item = CLiteral> {
        self.as_slice().literals()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.as_slice().atoms()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn satisfied_on(&self, valuation: &impl Valuation) -> bool {
        self.as_slice().satisfied_on(valuation)
    }

    fn unsatisfiable_on(&self, valuation: &impl Valuation) -> bool {
        self.as_slice().unsatisfiable_on(valuation)
    }

    fn asserts(&self, valuation: &impl Valuation) -> Option<CLiteral> {
        self.as_slice().asserts(valuation)
    }

    fn canonical(&self) -> CClause {
        self.clone()
    }

    fn as_string(&self) -> String {
        self.as_slice().as_string()
    }
}

impl Clause for CLiteral {
    fn literals(&self) -> impl Iterator<Item = CLiteral> {
        std::iter::once(*self)
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        std::iter::once(self.atom())
    }

    fn size(&self) -> usize {
        1
    }

    fn satisfied_on(&self, valuation: &impl Valuation) -> bool {
        valuation.value_of(self.atom()) == Some(self.polarity())
    }

    fn unsatisfiable_on(&self, valuation: &impl Valuation) -> bool {
        valuation.value_of(self.atom()) == Some(!self.polarity())
    }

    fn asserts(&self, valuation: &impl Valuation) -> Option<CLiteral> {
        match valuation.value_of(self.atom()) {
            None => Some(*self),
            Some(_) => None,
        }
    }

    fn canonical(&self) -> CClause {
        vec![*self]
    }

    fn as_string(&self) -> String {
        format!("{self}")
    }
}

/// The resolution of `left` and `right` on `pivot`.
///
/// Every occurrence of the pivot atom is dropped from both clauses, and the remaining literals are combined, deduplicated, preserving order of first occurrence (left before right).
///
/// No check is made that the clauses contain the pivot with complementary polarity, as callers resolve only against a known antecedent.
pub fn resolve_on(left: &[CLiteral], right: &[CLiteral], pivot: Atom) -> CClause {
    let mut resolvent = CClause::with_capacity(left.len() + right.len());
    let mut present: HashSet<CLiteral> = HashSet::with_capacity(left.len() + right.len());

    for literal in left.iter().chain(right.iter()) {
        if literal.atom() != pivot && present.insert(*literal) {
            resolvent.push(*literal);
        }
    }

    resolvent
}

#[cfg(test)]
mod clause_tests {
    use super::*;
    use crate::structures::valuation::VValuation;

    fn lit(atom: Atom, polarity: bool) -> CLiteral {
        CLiteral::new(atom, polarity)
    }

    #[test]
    fn three_valued_evaluation() {
        let clause = vec![lit(0, true), lit(1, false)];

        let satisfying: VValuation = vec![Some(false), Some(false)];
        assert!(clause.satisfied_on(&satisfying));

        let falsifying: VValuation = vec![Some(false), Some(true)];
        assert!(clause.unsatisfiable_on(&falsifying));

        let open: VValuation = vec![Some(false), None];
        assert!(!clause.satisfied_on(&open));
        assert!(!clause.unsatisfiable_on(&open));
    }

    #[test]
    fn asserts_unique_unvalued() {
        let clause = vec![lit(0, true), lit(1, true), lit(2, true)];

        let valuation: VValuation = vec![Some(false), None, Some(false)];
        assert_eq!(clause.asserts(&valuation), Some(lit(1, true)));

        let two_open: VValuation = vec![Some(false), None, None];
        assert_eq!(clause.asserts(&two_open), None);

        let satisfied: VValuation = vec![Some(true), None, Some(false)];
        assert_eq!(clause.asserts(&satisfied), None);
    }

    #[test]
    fn resolution_drops_pivot_and_duplicates() {
        let left = vec![lit(0, true), lit(1, true), lit(2, false)];
        let right = vec![lit(1, false), lit(2, false), lit(3, true)];

        let resolvent = resolve_on(&left, &right, 1);
        assert_eq!(resolvent, vec![lit(0, true), lit(2, false), lit(3, true)]);
    }
}
