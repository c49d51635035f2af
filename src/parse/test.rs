//! Tests over the mini parser.

crate::prelude!();

use expr::Cst;
use parse::Parser;

#[test]
fn tags() {
    let mut parser = Parser::new("(assert (> x 3))");
    assert!(parser.try_tag("("));
    assert!(!parser.try_tag("(")); // cursor moved past the first paren
    assert!(parser.try_tag("assert"));
    parser.ws();
    parser.tag("(> x 3))").unwrap();
    assert!(parser.is_at_eoi());
}

#[test]
fn tag_fail() {
    let mut parser = Parser::new("sat");
    let err = parser.tag("unsat").unwrap_err();
    assert_eq!(err.to_string(), "expected token `unsat` at `sat`");
}

#[test]
fn ids() {
    let mut parser = Parser::new("my_identifier 470not_an_id x.0");
    assert_eq!(parser.try_id().unwrap(), "my_identifier");
    parser.ws();
    assert!(parser.try_id().is_none());
    let _ = parser.parse_until(char::is_whitespace, true);
    assert_eq!(parser.try_id().unwrap(), "x.0");
}

#[test]
fn ints() {
    let mut parser = Parser::new("72 (- 7) (+ 3)");
    assert_eq!(parser.try_int().unwrap(), Int::from(72));
    parser.ws();
    assert_eq!(parser.try_int().unwrap(), Int::from(-7));
    parser.ws();
    // `(+ 3)` is not an integer, the parser must backtrack.
    assert!(parser.try_int().is_none());
    assert_eq!(parser.rest(), "(+ 3)");
}

#[test]
fn csts() {
    let mut parser = Parser::new("7405,false,(- 11),true");
    assert_eq!(parser.try_cst().unwrap(), 7405.into());
    parser.tag(",").unwrap();
    assert_eq!(parser.try_cst().unwrap(), Cst::B(false));
    parser.tag(",").unwrap();
    assert_eq!(parser.try_cst().unwrap(), Cst::I(Int::from(-11)));
    parser.tag(",").unwrap();
    assert_eq!(parser.try_cst().unwrap(), Cst::B(true));
    assert!(parser.is_at_eoi());
}

#[test]
fn eoi() {
    let mut parser = Parser::new("  ");
    parser.ws();
    assert!(parser.is_at_eoi());
    assert!(parser.try_cst().is_none());
    let err = parser.fail("expected constant");
    assert_eq!(err.to_string(), "expected constant at end of input");
}
