//! Tests over expressions.

crate::prelude!();

use expr::HasTyp;
use rsmt2::print::Expr2Smt;

/// Serializes an expression to SMT-LIB 2.
fn to_smt2(expr: &expr::Expr) -> String {
    let mut buff = vec![];
    expr.expr_to_smt2(&mut buff, ()).unwrap();
    String::from_utf8_lossy(&buff).into_owned()
}

#[test]
fn typing_implies() {
    let lft = build_expr!((a: bool));
    let rgt = build_expr!((> (n: int) 7));

    let typ = expr::Op::Implies.type_check(&[lft, rgt]).unwrap();

    assert_eq!(typ, expr::Typ::Bool);
}

#[test]
fn typing_cmp() {
    let a_1 = build_expr!((+ (a: int) 2));
    let a_2 = build_expr!((-(b: int)(c: int)));
    let a_3 = build_expr!((* (n: int) 7));

    let typ = expr::Op::Ge.type_check(&[a_1, a_2, a_3]).unwrap();
    assert_eq!(typ, expr::Typ::Bool);
}

#[test]
fn typing_cmp_fail() {
    let lft = build_expr!((a: bool));
    let rgt = build_expr!((n: int));

    let err = expr::Op::Gt.type_check(&[lft, rgt]).unwrap_err();

    assert_eq!(
        err.to_string(),
        "`>`'s arguments must have an arithmetic type, unexpected type `bool`",
    );
}

#[test]
fn typing_and_fail() {
    let args = [
        build_expr!((a: bool)),
        build_expr!((b: bool)),
        build_expr!((c: int)),
    ];

    let err = expr::Op::And.type_check(&args).unwrap_err();

    assert_eq!(
        err.to_string(),
        "`and`'s arguments must all be boolean expressions",
    );
}

#[test]
fn typing_eq_fail() {
    let args = [build_expr!((n: int)), build_expr!((a: bool))];

    let err = expr::Op::Eq.type_check(&args).unwrap_err();

    assert_eq!(
        err.to_string(),
        "`=`'s arguments must all have the same type, found `int` and `bool`",
    );
}

#[test]
fn typing_arity_fail() {
    let args = [build_expr!((n: int))];

    let err = expr::Op::Mod.type_check(&args).unwrap_err();

    assert_eq!(err.to_string(), "`mod` expects at least 2 argument(s)");

    let args = [build_expr!(1), build_expr!(2), build_expr!(3)];

    let err = expr::Op::IDiv.type_check(&args).unwrap_err();

    assert_eq!(err.to_string(), "`div` expects at most 2 argument(s)");
}

#[test]
fn app_typ() {
    let expr = build_expr!((> (x: int) 3));
    assert_eq!(expr.typ(), expr::Typ::Bool);

    let expr = build_expr!((+ (x: int) (y: int) 1));
    assert_eq!(expr.typ(), expr::Typ::Int);
}

#[test]
fn serialize() {
    let expr = build_expr!((> (x: int) 3));
    assert_eq!(&to_smt2(&expr), "(> x 3)");

    let expr = build_expr!((and (>= (x: int) 0) (b: bool)));
    assert_eq!(&to_smt2(&expr), "(and (>= x 0) b)");

    let expr = build_expr!((=> (b: bool) (= (% (x: int) 2) 0)));
    assert_eq!(&to_smt2(&expr), "(=> b (= (mod x 2) 0))");
}

#[test]
fn serialize_negated() {
    let expr = build_expr!((< (y: int) 10));
    let not_expr = expr.negated();

    let mut buff = vec![];
    not_expr.expr_to_smt2(&mut buff, ()).unwrap();
    let s = String::from_utf8_lossy(&buff);

    assert_eq!(&s, "(not (< y 10))");
}

#[test]
fn simplify_unary_minus() {
    let minus_seven = expr::Expr::new_op(expr::Op::Sub, vec![build_expr!(7)]).unwrap();
    assert!(minus_seven.is_cst());
    assert_eq!(&to_smt2(&minus_seven), "(- 7)");
    assert_eq!(&minus_seven.to_string(), "(- 7)");
}

#[test]
fn vars() {
    let expr = build_expr!((and (> (x: int) 3) (or (b: bool) (< (y: int) (x: int)))));
    let vars = expr.vars();

    let ids: Vec<&str> = vars.iter().map(|var| var.id()).collect();
    assert_eq!(ids, vec!["b", "x", "y"]);
}
