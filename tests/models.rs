use std::collections::HashSet;

use stoat_smt::{
    config::Config,
    context::Context,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
};

fn lit(atom: Atom, polarity: bool) -> CLiteral {
    CLiteral::new(atom, polarity)
}

mod enumeration {
    use super::*;

    #[test]
    fn all_models_of_free_atoms() {
        // Three unconstrained atoms admit exactly eight models.
        let mut ctx = Context::from_config(Config::default());
        for _ in 0..3 {
            ctx.fresh_atom();
        }

        let mut models = HashSet::new();
        while let Some(model) = ctx.next_model().expect("solve ok") {
            assert!(models.insert(model), "a model repeated");
        }
        assert_eq!(models.len(), 8);
    }

    #[test]
    fn five_by_five_bijections() {
        // Atoms x_{i,j} for a 5×5 matrix, constrained to permutation matrices.
        let mut ctx = Context::from_config(Config::default());
        let mut x = [[0; 5]; 5];
        for row in x.iter_mut() {
            for cell in row.iter_mut() {
                *cell = ctx.fresh_atom();
            }
        }

        for i in 0..5 {
            // At least one per row.
            let row: Vec<_> = (0..5).map(|j| lit(x[i][j], true)).collect();
            assert!(ctx.add_clause(row).is_ok());

            for j in 0..5 {
                for k in (j + 1)..5 {
                    // At most one per row.
                    assert!(ctx
                        .add_clause(vec![lit(x[i][j], false), lit(x[i][k], false)])
                        .is_ok());
                    // At most one per column.
                    assert!(ctx
                        .add_clause(vec![lit(x[j][i], false), lit(x[k][i], false)])
                        .is_ok());
                }
            }
        }

        let mut count = 0;
        let mut seen = HashSet::new();
        while let Some(model) = ctx.next_model().expect("solve ok") {
            assert!(seen.insert(model), "a model repeated");
            count += 1;
            assert!(count <= 120, "more models than bijections");
        }
        assert_eq!(count, 120);

        // Enumeration stays exhausted.
        assert_eq!(ctx.next_model().expect("solve ok"), None);
    }

    #[test]
    fn models_satisfy_the_formula() {
        let mut ctx = Context::from_config(Config::default());
        let a = ctx.fresh_atom();
        let b = ctx.fresh_atom();
        let c = ctx.fresh_atom();

        let clauses = [
            vec![lit(a, true), lit(b, true)],
            vec![lit(b, false), lit(c, true)],
            vec![lit(a, false), lit(c, false)],
        ];
        for clause in &clauses {
            assert!(ctx.add_clause(clause.clone()).is_ok());
        }

        let mut count = 0;
        while let Some(model) = ctx.next_model().expect("solve ok") {
            for clause in &clauses {
                assert!(
                    clause
                        .iter()
                        .any(|l| model[l.atom() as usize] == Some(l.polarity())),
                    "returned model falsifies a clause"
                );
            }
            count += 1;
        }
        assert!(count > 0);
    }

    #[test]
    fn first_model_is_deterministic() {
        let build = || {
            let mut ctx = Context::from_config(Config::default());
            let a = ctx.fresh_atom();
            let b = ctx.fresh_atom();
            let c = ctx.fresh_atom();
            ctx.add_clause(vec![lit(a, true), lit(b, true), lit(c, true)])
                .expect("clause ok");
            ctx
        };

        let first = build().next_model().expect("solve ok");
        let second = build().next_model().expect("solve ok");
        assert_eq!(first, second);
    }

    #[test]
    fn model_limit_caps_enumeration() {
        let mut config = Config::default();
        config.model_limit.value = 2;

        let mut ctx = Context::from_config(config);
        for _ in 0..3 {
            ctx.fresh_atom();
        }

        assert!(ctx.next_model().expect("solve ok").is_some());
        assert!(ctx.next_model().expect("solve ok").is_some());
        assert_eq!(ctx.next_model().expect("solve ok"), None);
    }

    #[test]
    fn unsatisfiable_formula_has_no_model() {
        let mut ctx = Context::from_config(Config::default());
        let a = ctx.fresh_atom();

        assert!(ctx.add_clause(lit(a, true)).is_ok());
        assert!(ctx.add_clause(lit(a, false)).is_ok());

        assert_eq!(ctx.next_model().expect("solve ok"), None);
    }
}
