//! Defines the expression structure used to build constraints.
//!
//! Only the quantifier-free linear integer arithmetic fragment is supported: integer and boolean
//! constants, integer-typed variables, arithmetic operators, comparisons and propositional
//! connectives. Expressions serialize to SMT-LIB 2 through [`rsmt2`]'s printing traits; the
//! [`clause`](crate::clause) module turns them into the textual clauses that actually cross the
//! solver boundary.

crate::prelude!();

use rsmt2::print::{Expr2Smt, Sort2Smt, Sym2Smt};

#[cfg(test)]
mod test;

pub use crate::{build_expr as build, build_typ};

/// A type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Typ {
    /// Bool type.
    Bool,
    /// Integer type.
    Int,
}
impl Typ {
    /// Creates a bool type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use qflia::expr::Typ;
    /// let bool_typ = Typ::bool();
    /// assert_eq!(&bool_typ.to_string(), "bool")
    /// ```
    pub fn bool() -> Self {
        Self::Bool
    }
    /// Creates an integer type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use qflia::expr::Typ;
    /// let int_typ = Typ::int();
    /// assert_eq!(&int_typ.to_string(), "int")
    /// ```
    pub fn int() -> Self {
        Self::Int
    }

    /// True if the type is an arithmetic one.
    pub fn is_arith(self) -> bool {
        match self {
            Self::Bool => false,
            Self::Int => true,
        }
    }
}
impl Sort2Smt for Typ {
    fn sort_to_smt2<W: Write>(&self, w: &mut W) -> SmtRes<()> {
        write!(
            w,
            "{}",
            match self {
                Self::Bool => "Bool",
                Self::Int => "Int",
            }
        )?;
        Ok(())
    }
}

/// Constants.
///
/// Currently only booleans and integers are supported.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Cst {
    /// Bool constant.
    B(bool),
    /// Integer constant.
    I(Int),
}
impl HasTyp for Cst {
    fn typ(&self) -> Typ {
        match self {
            Self::B(_) => Typ::Bool,
            Self::I(_) => Typ::Int,
        }
    }
}
impl Cst {
    /// Creates a boolean constant.
    pub fn bool(b: bool) -> Self {
        Cst::B(b)
    }
    /// Creates an integer constant.
    pub fn int<I: Into<Int>>(i: I) -> Self {
        Cst::I(i.into())
    }

    /// Integer value accessor, `None` on booleans.
    pub fn as_int(&self) -> Option<&Int> {
        match self {
            Self::I(i) => Some(i),
            Self::B(_) => None,
        }
    }
    /// Boolean value accessor, `None` on integers.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::B(b) => Some(*b),
            Self::I(_) => None,
        }
    }
}
impl Expr2Smt<()> for Cst {
    fn expr_to_smt2<W: Write>(&self, w: &mut W, _: ()) -> SmtRes<()> {
        match self {
            Self::B(b) => write!(w, "{}", b)?,
            Self::I(i) => {
                if i.sign() == Sign::Minus {
                    write!(w, "(- {})", -i)?
                } else {
                    write!(w, "{}", i)?
                }
            }
        }
        Ok(())
    }
}

/// Operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Op {
    /// Implication.
    Implies,
    /// Addition.
    Add,
    /// Subtraction, unary or n-ary.
    Sub,
    /// Multiplication.
    Mul,
    /// Integer division.
    IDiv,
    /// Modulo.
    Mod,
    /// Greater than or equal to.
    Ge,
    /// Less than or equal to.
    Le,
    /// Greater than.
    Gt,
    /// Less than.
    Lt,
    /// Equality.
    Eq,
    /// Negation.
    Not,
    /// Conjunction.
    And,
    /// Disjunction.
    Or,
}
impl Op {
    /// Tries to parse an operator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use qflia::expr::Op;
    /// assert_eq!(Op::of_str("+"), Some(Op::Add));
    /// assert_eq!(Op::of_str("and"), Some(Op::And));
    /// assert_eq!(Op::of_str("add"), None);
    /// ```
    pub fn of_str<Str: AsRef<str>>(s: Str) -> Option<Self> {
        use Op::*;
        let res = match s.as_ref() {
            "=>" | "implies" => Implies,
            "+" => Add,
            "-" => Sub,
            "*" => Mul,
            "div" => IDiv,
            "mod" => Mod,
            ">=" => Ge,
            "<=" => Le,
            ">" => Gt,
            "<" => Lt,
            "=" => Eq,
            "not" | "!" => Not,
            "and" | "&&" => And,
            "or" | "||" => Or,
            _ => return None,
        };
        Some(res)
    }

    /// SMT-LIB string representation.
    pub fn smt_str(self) -> &'static str {
        match self {
            Self::Implies => "=>",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::IDiv => "div",
            Self::Mod => "mod",
            Self::Ge => ">=",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::Eq => "=",
            Self::Not => "not",
            Self::And => "and",
            Self::Or => "or",
        }
    }

    /// True if `self` is an arithmetic relation.
    pub fn is_arith_relation(self) -> bool {
        match self {
            Self::Ge | Self::Le | Self::Gt | Self::Lt => true,
            Self::Implies
            | Self::Add
            | Self::Sub
            | Self::Mul
            | Self::IDiv
            | Self::Mod
            | Self::Eq
            | Self::Not
            | Self::And
            | Self::Or => false,
        }
    }

    /// Minimal arity of `self`.
    pub fn min_arity(self) -> usize {
        match self {
            Self::Not | Self::Add | Self::Sub => 1,
            Self::Mod
            | Self::Mul
            | Self::IDiv
            | Self::And
            | Self::Or
            | Self::Implies
            | Self::Eq
            | Self::Le
            | Self::Lt
            | Self::Ge
            | Self::Gt => 2,
        }
    }

    /// Maximal arity for `self`, `None` if infinite.
    pub fn max_arity(self) -> Option<usize> {
        match self {
            Self::Not => Some(1),
            Self::Add
            | Self::Sub
            | Self::Mul
            | Self::And
            | Self::Or
            | Self::Implies
            | Self::Eq
            | Self::Le
            | Self::Lt
            | Self::Ge
            | Self::Gt => None,
            Self::Mod | Self::IDiv => Some(2),
        }
    }

    /// Type-checks an operator application.
    pub fn type_check(self, args: &[Expr]) -> Res<Typ> {
        if args.len() < self.min_arity() {
            bail!(
                "`{}` expects at least {} argument(s)",
                self,
                self.min_arity(),
            )
        }
        if let Some(max) = self.max_arity() {
            if args.len() > max {
                bail!("`{}` expects at most {} argument(s)", self, max)
            }
        }

        let typ = match self {
            Self::Implies | Self::And | Self::Or | Self::Not => {
                if args.iter().any(|e| e.typ() != Typ::Bool) {
                    bail!("`{}`'s arguments must all be boolean expressions", self)
                }
                Typ::Bool
            }

            Self::Add
            | Self::Sub
            | Self::Mul
            | Self::IDiv
            | Self::Mod
            | Self::Le
            | Self::Ge
            | Self::Lt
            | Self::Gt => {
                for arg in args {
                    let typ = arg.typ();
                    if !typ.is_arith() {
                        bail!(
                            "`{}`'s arguments must have an arithmetic type, unexpected type `{}`",
                            self,
                            typ,
                        )
                    }
                }
                if self.is_arith_relation() {
                    Typ::Bool
                } else {
                    Typ::Int
                }
            }

            Self::Eq => {
                let mut typs = args.iter().map(Expr::typ);
                let first = typs.next().expect("at least two arguments");
                for typ in typs {
                    if typ != first {
                        bail!(
                            "`{}`'s arguments must all have the same type, found `{}` and `{}`",
                            self,
                            first,
                            typ,
                        )
                    }
                }
                Typ::Bool
            }
        };

        Ok(typ)
    }
}
impl Expr2Smt<()> for Op {
    fn expr_to_smt2<W: Write>(&self, w: &mut W, _: ()) -> SmtRes<()> {
        write!(w, "{}", self.smt_str())?;
        Ok(())
    }
}

/// Trait implemented by everything that has a type.
pub trait HasTyp: fmt::Display {
    /// Type accessor.
    fn typ(&self) -> Typ;
}

/// A variable.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Var {
    /// Variable identifier.
    id: String,
    /// Type of the variable.
    typ: Typ,
}
impl Var {
    /// Constructor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use qflia::expr::{Var, Typ};
    /// # #[allow(dead_code)]
    /// let var = Var::new("x", Typ::Int);
    /// ```
    pub fn new<S: Into<String>>(id: S, typ: Typ) -> Self {
        Self { id: id.into(), typ }
    }

    /// Identifier accessor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use qflia::expr::{Var, Typ};
    /// let var = Var::new("x", Typ::Int);
    /// assert_eq!(var.id(), "x");
    /// ```
    pub fn id(&self) -> &str {
        &self.id
    }
}
impl HasTyp for Var {
    /// Type accessor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use qflia::expr::{Var, Typ, HasTyp};
    /// let var = Var::new("x", Typ::Int);
    /// assert_eq!(var.typ(), Typ::Int);
    /// ```
    fn typ(&self) -> Typ {
        self.typ
    }
}
impl Sym2Smt<()> for Var {
    fn sym_to_smt2<W: Write>(&self, w: &mut W, _: ()) -> SmtRes<()> {
        write!(w, "{}", self.id)?;
        Ok(())
    }
}

/// The expression structure.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Expr {
    /// A constant.
    Cst(Cst),
    /// A variable.
    Var(Var),
    /// An operator application.
    App {
        /// The operator.
        op: Op,
        /// The arguments.
        args: Vec<Expr>,
    },
}
impl Expr {
    /// Variable constructor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use qflia::expr::{Expr, Var, Typ};
    /// let var = Var::new("x", Typ::Int);
    /// let expr = Expr::new_var(var.clone());
    /// assert_eq!(expr, Expr::Var(var));
    /// ```
    pub fn new_var(var: Var) -> Self {
        Self::Var(var)
    }

    /// Constant constructor.
    pub fn new_cst(cst: Cst) -> Self {
        Self::Cst(cst)
    }

    /// Operator application constructor.
    ///
    /// Type-checks the application, see [`Op::type_check`].
    pub fn new_op(op: Op, args: Vec<Self>) -> Res<Self> {
        op.type_check(&args)?;
        Ok(Self::simplify_app(op, args))
    }

    /// Simplifies the application of `op` to `args`, **non-recursively**.
    fn simplify_app(op: Op, args: Vec<Self>) -> Self {
        match (op, args.len()) {
            (Op::Sub, 1) if args[0].is_cst() => match &args[0] {
                Self::Cst(Cst::I(i)) => Cst::I(-i).into(),
                Self::Cst(Cst::B(_)) => panic!("trying to apply `{}` to a boolean", op),
                _ => Self::App { op, args },
            },
            _ => Self::App { op, args },
        }
    }

    /// True if `self` is a constant.
    pub fn is_cst(&self) -> bool {
        match self {
            Self::Cst(_) => true,
            Self::Var(_) | Self::App { .. } => false,
        }
    }
    /// True if `self` is a variable.
    pub fn is_var(&self) -> bool {
        match self {
            Self::Var(_) => true,
            Self::Cst(_) | Self::App { .. } => false,
        }
    }
    /// True if `self` is an application.
    pub fn is_app(&self) -> bool {
        match self {
            Self::App { .. } => true,
            Self::Cst(_) | Self::Var(_) => false,
        }
    }

    /// Iterates over all variables appearing in `self`.
    pub fn vars(&self) -> Set<&Var> {
        let mut set = Set::new();
        let mut stack = vec![self];
        while let Some(expr) = stack.pop() {
            match expr {
                Self::Cst(_) => (),
                Self::Var(var) => {
                    let _ = set.insert(var);
                }
                Self::App { args, .. } => stack.extend(args.iter()),
            }
        }
        set
    }

    /// Negation of a reference to an expression.
    ///
    /// This is mostly useful in cases when we have a reference to an expression we don't want to
    /// clone, and want to assert the negation.
    pub fn negated(&self) -> NotExpr {
        self.into()
    }
}
impl HasTyp for Expr {
    fn typ(&self) -> Typ {
        match self {
            Self::Var(var) => var.typ(),
            Self::Cst(cst) => cst.typ(),
            Self::App { op, args } => match op.type_check(args) {
                Ok(typ) => typ,
                Err(e) => panic!("illegal operator application `{}`: {}", self, e),
            },
        }
    }
}
impl Expr2Smt<()> for Expr {
    fn expr_to_smt2<W: Write>(&self, w: &mut W, _: ()) -> SmtRes<()> {
        match self {
            Self::Cst(cst) => cst.expr_to_smt2(w, ()),
            Self::Var(var) => var.sym_to_smt2(w, ()),
            Self::App { op, args } => {
                write!(w, "(")?;
                op.expr_to_smt2(w, ())?;
                for arg in args {
                    write!(w, " ")?;
                    arg.expr_to_smt2(w, ())?
                }
                write!(w, ")")?;
                Ok(())
            }
        }
    }
}

/// Represents the negation of a borrowed expression.
///
/// # Examples
///
/// ```rust
/// # use qflia::expr::{self, NotExpr};
/// use qflia::rsmt2::print::Expr2Smt;
/// let expr = expr::build!(
///     (and (>= (x: int) 0) (b: bool))
/// );
/// let not_expr: NotExpr = expr.negated();
///
/// use std::io::Write;
/// let mut buff = vec![];
/// not_expr.expr_to_smt2(&mut buff, ()).unwrap();
/// let s = String::from_utf8_lossy(&buff);
/// assert_eq!(&s, "(not (and (>= x 0) b))")
/// ```
pub struct NotExpr<'a> {
    /// Internal expression reference.
    expr: &'a Expr,
}
impl<'a> From<&'a Expr> for NotExpr<'a> {
    fn from(expr: &'a Expr) -> Self {
        Self { expr }
    }
}
impl<'a> Expr2Smt<()> for NotExpr<'a> {
    fn expr_to_smt2<W: Write>(&self, w: &mut W, _: ()) -> SmtRes<()> {
        write!(w, "(not ")?;
        self.expr.expr_to_smt2(w, ())?;
        write!(w, ")")?;
        Ok(())
    }
}

/// Packs basic trait implementations.
mod trait_impls {
    use super::*;

    impl fmt::Display for Typ {
        fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
            match self {
                Self::Bool => write!(fmt, "bool"),
                Self::Int => write!(fmt, "int"),
            }
        }
    }

    impl fmt::Display for Op {
        fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
            write!(fmt, "{}", self.smt_str())
        }
    }

    impl fmt::Display for Cst {
        fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
            match self {
                Self::B(b) => b.fmt(fmt),
                Self::I(i) => {
                    if i.sign() == Sign::Minus {
                        write!(fmt, "(- {})", -i)
                    } else {
                        i.fmt(fmt)
                    }
                }
            }
        }
    }
    impl From<bool> for Cst {
        fn from(b: bool) -> Self {
            Self::B(b)
        }
    }
    impl From<Int> for Cst {
        fn from(i: Int) -> Self {
            Self::I(i)
        }
    }
    impl From<usize> for Cst {
        fn from(n: usize) -> Self {
            Int::from_bytes_be(Sign::Plus, &n.to_be_bytes()).into()
        }
    }
    impl fmt::Display for Var {
        fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
            write!(fmt, "{}", self.id)
        }
    }

    impl fmt::Display for Expr {
        fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
            match self {
                Self::Cst(cst) => cst.fmt(fmt),
                Self::Var(var) => var.fmt(fmt),
                Self::App { op, args } => {
                    write!(fmt, "({}", op)?;
                    for arg in args {
                        write!(fmt, " {}", arg)?
                    }
                    write!(fmt, ")")
                }
            }
        }
    }
    impl<C> From<C> for Expr
    where
        C: Into<Cst>,
    {
        fn from(cst: C) -> Self {
            Self::Cst(cst.into())
        }
    }
    impl From<(Op, Vec<Expr>)> for Expr {
        fn from((op, args): (Op, Vec<Expr>)) -> Self {
            Self::App { op, args }
        }
    }
}
