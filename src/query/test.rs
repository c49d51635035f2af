//! Tests over solve queries.
//!
//! Tests that actually talk to a solver are skipped when no `z3` binary is reachable: the solver
//! is an external collaborator, not part of this crate.

crate::prelude!();

use clause::Decls;
use query::{solve, solve_greater_than_three, Outcome, Query};

/// Z3 command used by the solver-backed tests.
const Z3_CMD: &str = "z3";

/// True if a Z3 binary answers on the PATH.
fn z3_available() -> bool {
    std::process::Command::new(Z3_CMD)
        .arg("-version")
        .output()
        .is_ok()
}

macro_rules! needs_z3 {
    () => {
        if !z3_available() {
            eprintln!("no `z3` binary in PATH, skipping");
            return;
        }
    };
}

#[test]
fn clause_undeclared() {
    let decls = Decls::of_ints(&["x"]).unwrap();
    let mut query = Query::new(decls);
    let err = query.clause("(> y 3)").unwrap_err();
    assert_eq!(
        err.to_string(),
        "undeclared variable `y` in clause `(> y 3)`",
    );
    assert!(query.clauses().is_empty());
}

#[test]
fn expr_type_mismatch() {
    let mut decls = Decls::new();
    let _ = decls.bool("x").unwrap();
    let mut query = Query::new(decls);

    let err = query.expr(&build_expr!((> (x: int) 3))).unwrap_err();
    assert_eq!(
        err.to_string(),
        "variable `x` has type `int` in expression `(> x 3)` but is declared with type `bool`",
    );
}

#[test]
fn expr_undeclared() {
    let decls = Decls::of_ints(&["x"]).unwrap();
    let mut query = Query::new(decls);

    let err = query.expr(&build_expr!((> (y: int) 3))).unwrap_err();
    assert_eq!(err.to_string(), "undeclared variable `y` in clause `(> y 3)`");
}

#[test]
fn run_no_decls() {
    let query = Query::new(Decls::new());
    let err = query.run(Z3_CMD, None).unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot solve a query that declares no variables",
    );
}

#[test]
fn fixed_greater_than_three() {
    needs_z3!();

    let val = solve_greater_than_three(Z3_CMD)
        .unwrap()
        .expect("`x > 3` must be satisfiable");
    assert!(val > Int::from(3));
}

#[test]
fn bounded_chain() {
    needs_z3!();

    let outcome = solve(
        &["x", "y"],
        &["(> x 3)", "(> y x)", "(< y 10)"],
        Z3_CMD,
    )
    .unwrap();

    let model = outcome.model().expect("conjunction must be satisfiable");
    let x = model.int_value("x").unwrap().clone();
    let y = model.int_value("y").unwrap().clone();

    assert!(Int::from(4) <= x);
    assert!(x < y);
    assert!(y < Int::from(10));
}

#[test]
fn unsat_conjunction() {
    needs_z3!();

    let outcome = solve(&["x"], &["(> x 3)", "(< x 2)"], Z3_CMD).unwrap();
    assert!(!outcome.is_sat());
    assert!(outcome.model().is_none());
    assert_eq!(&outcome.to_string(), "unsat");
}

#[test]
fn expression_built_query() {
    needs_z3!();

    let mut decls = Decls::new();
    let _ = decls.int("x").unwrap();
    let _ = decls.int("y").unwrap();
    let mut query = Query::new(decls);
    let _ = query.expr(&build_expr!((> (x: int) 3))).unwrap();
    let _ = query.expr(&build_expr!((> (y: int) (x: int)))).unwrap();
    let _ = query.expr(&build_expr!((< (y: int) 10))).unwrap();

    match query.run(Z3_CMD, None).unwrap() {
        Outcome::Sat(model) => {
            assert_eq!(model.len(), 2);
            let x = model.int_value("x").unwrap();
            let y = model.int_value("y").unwrap();
            assert!(x < y);
        }
        Outcome::Unsat => panic!("satisfiable conjunction reported unsat"),
    }
}
