use stoat_smt::{builder::ClauseOk, config::Config, context::Context, reports::Report};

mod basic {

    use stoat_smt::structures::literal::{CLiteral, Literal};

    use super::*;

    #[test]
    fn one_literal() {
        let mut ctx = Context::from_config(Config::default());
        let p = CLiteral::new(ctx.fresh_atom(), true);

        assert!(ctx.add_clause(p).is_ok());

        assert!(ctx.solve().is_ok());

        assert_eq!(ctx.report(), Report::Satisfiable)
    }

    #[test]
    fn conflict() {
        let mut ctx = Context::from_config(Config::default());

        let p = CLiteral::new(ctx.fresh_atom(), true);
        let q = CLiteral::new(ctx.fresh_atom(), true);

        let p_q_clause = vec![p, q];
        assert!(ctx.add_clause(p_q_clause).is_ok());

        let not_p_not_q_clause = vec![-p, -q];
        assert!(ctx.add_clause(not_p_not_q_clause).is_ok());

        let p_not_q_clause = vec![p, -q];
        assert!(ctx.add_clause(p_not_q_clause).is_ok());

        let not_p_q_clause = vec![-p, q];
        assert!(ctx.add_clause(not_p_q_clause).is_ok());

        assert!(ctx.solve().is_ok());
        assert!(matches!(ctx.report(), Report::Unsatisfiable))
    }

    #[test]
    fn unit_conjunct() {
        let mut ctx = Context::from_config(Config::default());

        let p = CLiteral::new(ctx.fresh_atom(), true);
        let q = CLiteral::new(ctx.fresh_atom(), true);

        assert!(ctx.add_clause(vec![p, q]).is_ok());
        assert!(ctx.add_clause(-p).is_ok());

        assert!(ctx.solve().is_ok());
        assert_eq!(ctx.report(), Report::Satisfiable);

        assert_eq!(ctx.atom_db.value_of(p.atom()), Some(false));
        assert_eq!(ctx.atom_db.value_of(q.atom()), Some(true));
    }

    #[test]
    fn duplicates() {
        let mut ctx = Context::from_config(Config::default());

        let p = CLiteral::new(ctx.fresh_atom(), true);
        let q = CLiteral::new(ctx.fresh_atom(), true);

        assert!(ctx.add_clause(vec![p, p, q, q]).is_ok());

        let stored = ctx.clause_db.all_clauses().collect::<Vec<_>>();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].literals().len(), 2);
    }

    #[test]
    fn tautology_skip() {
        let mut ctx = Context::from_config(Config::default());

        let p = CLiteral::new(ctx.fresh_atom(), true);
        let q = CLiteral::new(ctx.fresh_atom(), true);

        assert_eq!(ctx.add_clause(vec![p, -q, -p]), Ok(ClauseOk::Tautology));
        assert_eq!(ctx.clause_db.clause_count(), 0);
    }

    #[test]
    fn empty_clause_is_contradiction() {
        let mut ctx = Context::from_config(Config::default());

        let empty: Vec<CLiteral> = vec![];
        assert_eq!(ctx.add_clause(empty), Ok(ClauseOk::Contradiction));

        assert!(ctx.solve().is_ok());
        assert_eq!(ctx.report(), Report::Unsatisfiable);
    }

    #[test]
    fn undo_operations() {
        let mut ctx = Context::from_config(Config::default());

        let a = CLiteral::new(ctx.fresh_atom(), true);
        let b = CLiteral::new(ctx.fresh_atom(), true);
        assert!(ctx.add_clause(vec![a, b]).is_ok());

        // One decision step: a decided false, b propagated true.
        let step = ctx
            .next_partial_assignment()
            .expect("step ok")
            .expect("assignment available");
        assert_eq!(step.level, 1);
        assert!(step.complete);

        ctx.undo_propagations();
        assert_eq!(ctx.atom_db.value_of(b.atom()), None);
        assert_eq!(ctx.atom_db.value_of(a.atom()), Some(false));
        assert_eq!(ctx.decision_level(), 1);

        ctx.undo_last_decision();
        assert_eq!(ctx.atom_db.value_of(a.atom()), None);
        assert_eq!(ctx.decision_level(), 0);
    }

    #[test]
    fn five_atom_contradiction() {
        // (a ∨ b ∨ c ∨ d ∨ e) with pairwise forcing clauses squeezing every branch.
        let mut ctx = Context::from_config(Config::default());

        let atoms: Vec<_> = (0..5).map(|_| ctx.fresh_atom()).collect();
        let lits: Vec<CLiteral> = atoms.iter().map(|&a| CLiteral::new(a, true)).collect();

        assert!(ctx.add_clause(lits.clone()).is_ok());
        for i in 0..5 {
            for j in (i + 1)..5 {
                assert!(ctx.add_clause(vec![-lits[i], -lits[j]]).is_ok());
            }
        }
        // Exactly one of the five is true, and each choice drags in its successor.
        for i in 0..5 {
            assert!(ctx.add_clause(vec![-lits[i], lits[(i + 1) % 5]]).is_ok());
        }

        assert!(ctx.solve().is_ok());
        assert_eq!(ctx.report(), Report::Unsatisfiable);
    }
}
