//! Tests over clauses and declarations.

crate::prelude!();

use clause::{check, Clause, Decls};
use expr::HasTyp;

#[test]
fn of_expr() {
    let expr = build_expr!((and (> (x: int) 3) (< (y: int) 10)));
    let clause = Clause::of_expr(&expr).unwrap();
    assert_eq!(clause.as_smt2(), "(and (> x 3) (< y 10))");
}

#[test]
fn of_expr_non_boolean() {
    let expr = build_expr!((+ (x: int) 1));
    let err = Clause::of_expr(&expr).unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot build a clause from non-boolean expression `(+ x 1)` of type `int`",
    );
}

#[test]
fn decls() {
    let mut decls = Decls::new();
    assert!(decls.is_empty());
    let _ = decls.int("x").unwrap();
    let _ = decls.bool("flag").unwrap();
    assert_eq!(decls.len(), 2);

    assert_eq!(decls.get("x").unwrap().typ(), expr::Typ::Int);
    assert_eq!(decls.get("flag").unwrap().typ(), expr::Typ::Bool);
    assert!(decls.get("y").is_none());

    let ids: Vec<&str> = decls.iter().map(|var| var.id()).collect();
    assert_eq!(ids, vec!["x", "flag"]);

    assert_eq!(&decls.to_string(), "x: int, flag: bool");
}

#[test]
fn decls_duplicate() {
    let mut decls = Decls::new();
    let _ = decls.int("x").unwrap();
    let err = decls.int("x").unwrap_err();
    assert_eq!(err.to_string(), "variable `x` is declared twice");

    let err = Decls::of_ints(&["x", "y", "x"]).unwrap_err();
    assert_eq!(err.to_string(), "variable `x` is declared twice");
}

#[test]
fn check_ok() {
    let decls = Decls::of_ints(&["x", "y"]).unwrap();
    check(&decls, "(> x 3)").unwrap();
    check(&decls, "(and (> y x) (< y 10))").unwrap();
    check(&decls, "(= x (- 7))").unwrap();
    check(&decls, "(or (= x y) (not (>= x 0)) true)").unwrap();
}

#[test]
fn check_undeclared() {
    let decls = Decls::of_ints(&["x"]).unwrap();
    let err = check(&decls, "(> z 3)").unwrap_err();
    assert_eq!(
        err.to_string(),
        "undeclared variable `z` in clause `(> z 3)`",
    );
}

#[test]
fn check_unbalanced() {
    let decls = Decls::of_ints(&["x"]).unwrap();

    let err = check(&decls, "(> x 3").unwrap_err();
    assert_eq!(
        err.to_string(),
        "ill-formed clause `(> x 3`: unbalanced opening parenthesis",
    );

    let err = check(&decls, "(> x 3))").unwrap_err();
    assert_eq!(
        err.to_string(),
        "ill-formed clause `(> x 3))`: unbalanced closing parenthesis",
    );
}

#[test]
fn check_junk() {
    let decls = Decls::of_ints(&["x"]).unwrap();

    let err = check(&decls, "").unwrap_err();
    assert_eq!(err.to_string(), "ill-formed clause ``: empty clause");

    let err = check(&decls, "(?! x 3)").unwrap_err();
    assert_eq!(
        err.to_string(),
        "ill-formed clause `(?! x 3)`: unexpected token `?!`",
    );
}
