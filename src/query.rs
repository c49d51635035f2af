//! High-level solve queries.
//!
//! A [`Query`] aggregates variable declarations and clauses, and [`Query::run`] ships them to a
//! fresh solver process: declare every variable, assert every clause, check-sat, and
//! retrieve the model on `sat`. The free functions cover the two call shapes of the demos:
//! [`solve`] for the names-plus-clause-strings form and [`solve_greater_than_three`] for the fixed
//! hardcoded constraint.

crate::prelude!();

use std::path::PathBuf;

use clause::{Clause, Decls};
use expr::{Expr, HasTyp};
use model::Model;
use solver::Solver;

#[cfg(test)]
mod test;

/// Verdict of a solve query.
///
/// An `unknown` answer or any solver-level failure surfaces as an [`Error`], carrying the solver's
/// message verbatim.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// The constraints are satisfiable, here is a satisfying assignment.
    Sat(Model),
    /// The constraints are unsatisfiable.
    Unsat,
}
impl Outcome {
    /// True on [`Outcome::Sat`].
    pub fn is_sat(&self) -> bool {
        match self {
            Self::Sat(_) => true,
            Self::Unsat => false,
        }
    }
    /// Model accessor, `None` on [`Outcome::Unsat`].
    pub fn model(&self) -> Option<&Model> {
        match self {
            Self::Sat(model) => Some(model),
            Self::Unsat => None,
        }
    }
    /// Extracts the model, `None` on [`Outcome::Unsat`].
    pub fn into_model(self) -> Option<Model> {
        match self {
            Self::Sat(model) => Some(model),
            Self::Unsat => None,
        }
    }
}
impl fmt::Display for Outcome {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Sat(model) => {
                if model.is_empty() {
                    write!(fmt, "sat")
                } else {
                    write!(fmt, "sat: {}", model)
                }
            }
            Self::Unsat => write!(fmt, "unsat"),
        }
    }
}

/// A solve query: variable declarations and the clauses constraining them.
#[derive(Debug, Clone, Default)]
pub struct Query {
    /// Variable declarations.
    decls: Decls,
    /// Clauses, in assertion order.
    clauses: Vec<Clause>,
}
impl Query {
    /// Constructor.
    pub fn new(decls: Decls) -> Self {
        Self {
            decls,
            clauses: vec![],
        }
    }

    /// Declaration accessor.
    pub fn decls(&self) -> &Decls {
        &self.decls
    }
    /// Clause accessor.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Adds a clause given as raw SMT-LIB 2 text.
    ///
    /// Fails when the clause is ill-formed or mentions undeclared variables, see
    /// [`clause::check`].
    pub fn clause(&mut self, smt2: impl Into<String>) -> Res<&mut Self> {
        let clause = Clause::new(smt2);
        clause::check(&self.decls, clause.as_smt2())?;
        self.clauses.push(clause);
        Ok(self)
    }

    /// Adds a clause built with the expression API.
    ///
    /// Fails when the expression is not boolean, or mentions variables that are undeclared or
    /// declared with a different type.
    pub fn expr(&mut self, expr: &Expr) -> Res<&mut Self> {
        for var in expr.vars() {
            match self.decls.get(var.id()) {
                Some(decl) if decl.typ() == var.typ() => (),
                Some(decl) => bail!(
                    "variable `{}` has type `{}` in expression `{}` but is declared with type `{}`",
                    var.id(),
                    var.typ(),
                    expr,
                    decl.typ(),
                ),
                None => bail!(ErrorKind::UndeclaredVar(
                    var.id().into(),
                    expr.to_string(),
                )),
            }
        }
        self.clauses.push(Clause::of_expr(expr)?);
        Ok(self)
    }

    /// Runs the query against a fresh solver process.
    ///
    /// Blocks until the solver answers. `z3_cmd` is the Z3 binary plus options, whitespace
    /// separated; `tee` optionally copies the SMT-LIB 2 transcript to a file.
    pub fn run(&self, z3_cmd: impl Into<String>, tee: Option<PathBuf>) -> Res<Outcome> {
        if self.decls.is_empty() {
            bail!(ErrorKind::NoDecls)
        }

        let mut solver = Solver::of_cmd(z3_cmd, tee)?;
        solver.declare(&self.decls)?;
        for clause in &self.clauses {
            solver.assert_clause(clause)?
        }

        let outcome = match solver
            .check_sat_or_unk()
            .chain_err(|| "during check-sat query")?
        {
            Some(true) => {
                let mut model = Model::new();
                model.populate(&mut solver)?;
                Outcome::Sat(model)
            }
            Some(false) => Outcome::Unsat,
            None => bail!("solver answered `unknown`"),
        };

        solver.kill().chain_err(|| "while killing the solver")?;
        Ok(outcome)
    }
}

/// Solves a list of clauses over a list of integer variables.
///
/// This is the string-passing call shape: variable names plus clauses in the solver's native
/// textual syntax. Clauses are validated before anything crosses the solver boundary.
///
/// # Examples
///
/// ```rust,no_run
/// # use qflia::query::solve;
/// let outcome = solve(&["x", "y"], &["(> x 3)", "(> y x)", "(< y 10)"], "z3").unwrap();
/// let model = outcome.model().unwrap();
/// println!("x = {}", model.int_value("x").unwrap());
/// ```
pub fn solve<S1, S2>(var_names: &[S1], clauses: &[S2], z3_cmd: impl Into<String>) -> Res<Outcome>
where
    S1: AsRef<str>,
    S2: AsRef<str>,
{
    let decls = Decls::of_ints(var_names)?;
    let mut query = Query::new(decls);
    for clause in clauses {
        let _ = query.clause(clause.as_ref())?;
    }
    query.run(z3_cmd, None)
}

/// Solves the fixed constraint `x > 3` over a single integer variable.
///
/// Returns the value of `x` in some satisfying assignment, or `None` when the constraint is
/// unsatisfiable (which cannot happen here, but the solver's verdict is taken at face value).
pub fn solve_greater_than_three(z3_cmd: impl Into<String>) -> Res<Option<Int>> {
    let mut decls = Decls::new();
    let _ = decls.int("x")?;
    let mut query = Query::new(decls);
    let _ = query.expr(&expr::build!((> (x: int) 3)))?;

    match query.run(z3_cmd, None)? {
        Outcome::Sat(model) => {
            let val = model
                .int_value("x")
                .ok_or_else(|| format!("model produced by solver has no value for `x`"))?
                .clone();
            Ok(Some(val))
        }
        Outcome::Unsat => Ok(None),
    }
}
