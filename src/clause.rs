//! Clauses and variable declarations, the data that crosses the solver boundary.
//!
//! A solve query ships two things to the external solver: an ordered list of typed variable
//! declarations ([`Decls`]) and an ordered list of serialized constraints ([`Clause`]s, SMT-LIB 2
//! text). Clauses are checked *before* crossing the boundary: every symbol they mention must be a
//! declared variable, an operator or a literal, and parentheses must balance. This way an
//! undeclared variable is a local error instead of an opaque solver message.

crate::prelude!();

use rsmt2::print::Expr2Smt;

use expr::{Expr, HasTyp, Typ, Var};
use parse::Parser;

#[cfg(test)]
mod test;

/// A single constraint, serialized to SMT-LIB 2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    /// Serialized representation.
    smt2: String,
}
impl Clause {
    /// Constructor from raw SMT-LIB 2 text.
    ///
    /// Performs no validation, see [`check`].
    pub fn new<S: Into<String>>(smt2: S) -> Self {
        Self { smt2: smt2.into() }
    }

    /// Serializes an expression into a clause.
    ///
    /// Fails when `expr` is not a boolean expression.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use qflia::{expr, clause::Clause};
    /// let expr = expr::build!((> (x: int) 3));
    /// let clause = Clause::of_expr(&expr).unwrap();
    /// assert_eq!(clause.as_smt2(), "(> x 3)");
    /// ```
    pub fn of_expr(expr: &Expr) -> Res<Self> {
        if expr.typ() != Typ::Bool {
            bail!(
                "cannot build a clause from non-boolean expression `{}` of type `{}`",
                expr,
                expr.typ(),
            )
        }
        let mut buff = vec![];
        expr.expr_to_smt2(&mut buff, ())
            .chain_err(|| format!("while serializing expression `{}`", expr))?;
        let smt2 = String::from_utf8(buff)
            .map_err(|e| format!("clause serialization produced illegal utf8: {}", e))?;
        Ok(Self { smt2 })
    }

    /// The serialized SMT-LIB 2 representation.
    pub fn as_smt2(&self) -> &str {
        &self.smt2
    }
}
impl Expr2Smt<()> for Clause {
    fn expr_to_smt2<W: Write>(&self, w: &mut W, _: ()) -> SmtRes<()> {
        write!(w, "{}", self.smt2)?;
        Ok(())
    }
}
impl fmt::Display for Clause {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        self.smt2.fmt(fmt)
    }
}
impl From<&str> for Clause {
    fn from(smt2: &str) -> Self {
        Self::new(smt2)
    }
}
impl From<String> for Clause {
    fn from(smt2: String) -> Self {
        Self::new(smt2)
    }
}

/// An ordered list of variable declarations.
///
/// Declaration order is preserved, duplicates are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decls {
    /// Declared variables, in declaration order.
    vars: Vec<Var>,
}
impl Decls {
    /// Constructor for an empty declaration list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructor for a list of integer variables.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use qflia::clause::Decls;
    /// let decls = Decls::of_ints(&["x", "y"]).unwrap();
    /// assert_eq!(decls.len(), 2);
    /// assert!(Decls::of_ints(&["x", "x"]).is_err());
    /// ```
    pub fn of_ints<S: AsRef<str>>(names: &[S]) -> Res<Self> {
        let mut decls = Self::new();
        for name in names {
            decls.int(name.as_ref())?;
        }
        Ok(decls)
    }

    /// Declares a variable.
    pub fn var(&mut self, id: impl Into<String>, typ: Typ) -> Res<&mut Self> {
        let id = id.into();
        if id.is_empty() {
            bail!("cannot declare a variable with an empty name")
        }
        if self.get(&id).is_some() {
            bail!("variable `{}` is declared twice", id)
        }
        self.vars.push(Var::new(id, typ));
        Ok(self)
    }
    /// Declares an integer variable.
    pub fn int(&mut self, id: impl Into<String>) -> Res<&mut Self> {
        self.var(id, Typ::Int)
    }
    /// Declares a boolean variable.
    pub fn bool(&mut self, id: impl Into<String>) -> Res<&mut Self> {
        self.var(id, Typ::Bool)
    }

    /// Retrieves a declared variable by name.
    pub fn get(&self, id: &str) -> Option<&Var> {
        self.vars.iter().find(|var| var.id() == id)
    }

    /// Number of declared variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }
    /// True if nothing is declared.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Iterator over the declared variables, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Var> {
        self.vars.iter()
    }
}
impl fmt::Display for Decls {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        for (idx, var) in self.vars.iter().enumerate() {
            if idx > 0 {
                write!(fmt, ", ")?
            }
            write!(fmt, "{}: {}", var.id(), var.typ())?
        }
        Ok(())
    }
}

/// Checks that a clause is well-formed with respect to some declarations.
///
/// Verifies that parentheses balance and that every symbol is either an operator, a boolean
/// literal, an integer literal, or a declared variable.
///
/// # Examples
///
/// ```rust
/// # use qflia::clause::{check, Decls};
/// let decls = Decls::of_ints(&["x"]).unwrap();
/// assert!(check(&decls, "(> x 3)").is_ok());
/// assert!(check(&decls, "(> y 3)").is_err());
/// assert!(check(&decls, "(> x 3").is_err());
/// ```
pub fn check(decls: &Decls, clause: &str) -> Res<()> {
    let mut parser = Parser::new(clause);
    let mut depth = 0usize;
    let mut tokens = 0usize;

    loop {
        parser.ws();
        if parser.is_at_eoi() {
            break;
        }
        tokens += 1;

        if parser.try_tag("(") {
            depth += 1
        } else if parser.try_tag(")") {
            if depth == 0 {
                bail!(ErrorKind::BadClause(
                    clause.into(),
                    "unbalanced closing parenthesis".into(),
                ))
            }
            depth -= 1
        } else if let Some(id) = parser.try_id() {
            let known = id == "true" || id == "false" || expr::Op::of_str(id).is_some();
            if !known && decls.get(id).is_none() {
                bail!(ErrorKind::UndeclaredVar(id.into(), clause.into()))
            }
        } else if parser.try_int().is_some() {
            // Integer literal, nothing to check.
        } else {
            let sym = parser.parse_until(|c| c.is_whitespace() || c == '(' || c == ')', false);
            if sym.is_empty() || expr::Op::of_str(sym).is_none() {
                bail!(ErrorKind::BadClause(
                    clause.into(),
                    format!("unexpected token `{}`", sym),
                ))
            }
        }
    }

    if depth > 0 {
        bail!(ErrorKind::BadClause(
            clause.into(),
            "unbalanced opening parenthesis".into(),
        ))
    }
    if tokens == 0 {
        bail!(ErrorKind::BadClause(clause.into(), "empty clause".into()))
    }

    Ok(())
}
