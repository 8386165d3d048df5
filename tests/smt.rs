use std::collections::HashMap;

use stoat_smt::{
    config::{Config, Strategy},
    theory::{
        combination::{Combination, SmtReport},
        registry::{Registry, TheoryKind},
        TheoryCnf, TheorySolver, TheoryVerdict,
    },
};

/// An integer bound on a named variable.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum Bound {
    Ge(&'static str, i64),
    Le(&'static str, i64),
}

/// A toy bounds checker: satisfiable exactly when every variable's greatest
/// lower bound is at most its least upper bound.
#[derive(Default)]
struct BoundsSolver {
    constraints: Vec<Bound>,
}

impl TheorySolver for BoundsSolver {
    type Constraint = Bound;
    type Assignment = HashMap<&'static str, i64>;

    fn clear(&mut self) {
        self.constraints.clear();
    }

    fn add_constraint(&mut self, constraint: Bound) {
        if !self.constraints.contains(&constraint) {
            self.constraints.push(constraint);
        }
    }

    fn solve(&mut self) -> TheoryVerdict<Bound, Self::Assignment> {
        let mut lower: HashMap<&'static str, (i64, Bound)> = HashMap::new();
        let mut upper: HashMap<&'static str, (i64, Bound)> = HashMap::new();

        for constraint in &self.constraints {
            match *constraint {
                Bound::Ge(var, bound) => {
                    let entry = lower.entry(var).or_insert((bound, constraint.clone()));
                    if bound >= entry.0 {
                        *entry = (bound, constraint.clone());
                    }
                }
                Bound::Le(var, bound) => {
                    let entry = upper.entry(var).or_insert((bound, constraint.clone()));
                    if bound <= entry.0 {
                        *entry = (bound, constraint.clone());
                    }
                }
            }
        }

        let mut assignment: HashMap<&'static str, i64> = HashMap::new();
        for (var, (lo, ge)) in &lower {
            if let Some((hi, le)) = upper.get(var) {
                if lo > hi {
                    return TheoryVerdict::Unsatisfiable(vec![ge.clone(), le.clone()]);
                }
            }
            assignment.insert(*var, *lo);
        }
        for (var, (hi, _)) in &upper {
            assignment.entry(*var).or_insert((*hi).min(0));
        }

        TheoryVerdict::Satisfiable(assignment)
    }
}

/// A solver which never commits.
#[derive(Default)]
struct UnknownSolver;

impl TheorySolver for UnknownSolver {
    type Constraint = Bound;
    type Assignment = ();

    fn clear(&mut self) {}

    fn add_constraint(&mut self, _constraint: Bound) {}

    fn solve(&mut self) -> TheoryVerdict<Bound, ()> {
        TheoryVerdict::Unknown
    }
}

fn config_with(strategy: Strategy) -> Config {
    let mut config = Config::default();
    config.strategy.value = strategy;
    config
}

mod combination {
    use super::*;

    fn in_bounds_cnf() -> TheoryCnf<Bound> {
        vec![vec![Bound::Ge("x", 0)], vec![Bound::Le("x", 10)]]
    }

    fn out_of_bounds_cnf() -> TheoryCnf<Bound> {
        vec![vec![Bound::Ge("x", 11)], vec![Bound::Le("x", 10)]]
    }

    #[test]
    fn full_lazy_satisfiable() {
        let mut combination = Combination::new(
            config_with(Strategy::FullLazy),
            &in_bounds_cnf(),
            BoundsSolver::default(),
        )
        .expect("combination ok");

        match combination.solve().expect("solve ok") {
            SmtReport::Satisfiable(solution) => {
                let x = solution.assignment["x"];
                assert!((0..=10).contains(&x));
            }
            _ => panic!("satisfiable bounds reported otherwise"),
        }
    }

    #[test]
    fn full_lazy_unsatisfiable() {
        let mut combination = Combination::new(
            config_with(Strategy::FullLazy),
            &out_of_bounds_cnf(),
            BoundsSolver::default(),
        )
        .expect("combination ok");

        assert!(matches!(
            combination.solve().expect("solve ok"),
            SmtReport::Unsatisfiable
        ));
    }

    #[test]
    fn less_lazy_satisfiable() {
        let mut combination = Combination::new(
            config_with(Strategy::LessLazy),
            &in_bounds_cnf(),
            BoundsSolver::default(),
        )
        .expect("combination ok");

        match combination.solve().expect("solve ok") {
            SmtReport::Satisfiable(solution) => {
                let x = solution.assignment["x"];
                assert!((0..=10).contains(&x));
            }
            _ => panic!("satisfiable bounds reported otherwise"),
        }
    }

    #[test]
    fn less_lazy_unsatisfiable() {
        let mut combination = Combination::new(
            config_with(Strategy::LessLazy),
            &out_of_bounds_cnf(),
            BoundsSolver::default(),
        )
        .expect("combination ok");

        assert!(matches!(
            combination.solve().expect("solve ok"),
            SmtReport::Unsatisfiable
        ));
    }

    #[test]
    fn explanations_redirect_the_search() {
        // With decisions leaning true, the first model asserts the untenable pair
        // x ≥ 11 ∧ x ≤ 10, and the learned explanation pushes the search to x ≥ 11 ∧ y ≥ 0.
        let cnf: TheoryCnf<Bound> = vec![
            vec![Bound::Ge("x", 11)],
            vec![Bound::Le("x", 10), Bound::Ge("y", 0)],
        ];

        let mut config = config_with(Strategy::FullLazy);
        config.polarity_lean.value = 1.0;

        let mut combination =
            Combination::new(config, &cnf, BoundsSolver::default()).expect("combination ok");

        match combination.solve().expect("solve ok") {
            SmtReport::Satisfiable(solution) => {
                assert!(solution.assignment["x"] >= 11);
                assert_eq!(solution.assignment["y"], 0);
            }
            _ => panic!("satisfiable formula reported otherwise"),
        }
        assert!(combination.context.counters.total_conflicts >= 1);
    }

    #[test]
    fn unknown_is_latched_full_lazy() {
        let mut combination = Combination::new(
            config_with(Strategy::FullLazy),
            &in_bounds_cnf(),
            UnknownSolver,
        )
        .expect("combination ok");

        assert!(matches!(
            combination.solve().expect("solve ok"),
            SmtReport::Unknown
        ));
    }

    #[test]
    fn unknown_is_latched_less_lazy() {
        let mut combination = Combination::new(
            config_with(Strategy::LessLazy),
            &in_bounds_cnf(),
            UnknownSolver,
        )
        .expect("combination ok");

        assert!(matches!(
            combination.solve().expect("solve ok"),
            SmtReport::Unknown
        ));
    }
}

mod registry {
    use super::*;

    #[test]
    fn kinds_resolve_to_registered_factories() {
        let mut registry: Registry<BoundsSolver> = Registry::new();
        registry.register(TheoryKind::QF_LRA, BoundsSolver::default);

        assert!(registry.resolve(TheoryKind::QF_LRA).is_some());
        assert!(registry.resolve(TheoryKind::QF_UF).is_none());

        let cnf: TheoryCnf<Bound> = vec![vec![Bound::Ge("x", 0)], vec![Bound::Le("x", 10)]];
        let combination = registry.combination(TheoryKind::QF_LRA, Config::default(), &cnf);

        let mut combination = combination.expect("registered").expect("combination ok");
        assert!(matches!(
            combination.solve().expect("solve ok"),
            SmtReport::Satisfiable(_)
        ));
    }
}
