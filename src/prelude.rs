//! Common imports throughout this project.

pub use std::{
    collections::{BTreeMap as Map, BTreeSet as Set},
    fmt,
    io::Write,
    ops::{Deref, DerefMut},
};

pub use either::Either;
pub use error_chain::bail;
pub use num::{bigint::Sign, BigInt as Int, Zero};
pub use rsmt2::{parse::SmtParser as RSmtParser, SmtConf, SmtRes, Solver as SmtSolver};

pub use crate::{build_expr, build_typ, clause, expr, model, parse, query, solver};

error_chain::error_chain! {
    types {
        Error, ErrorKind, ResExt, Res;
    }

    links {
        Smt2(rsmt2::errors::Error, rsmt2::errors::ErrorKind)
        /// An error from the `rsmt2` crate.
        ;
    }

    foreign_links {
        Io(std::io::Error)
        /// I/O error.
        ;
    }

    errors {
        /// A clause mentions a variable that was never declared.
        UndeclaredVar(var: String, clause: String) {
            description("undeclared variable in clause")
            display("undeclared variable `{}` in clause `{}`", var, clause)
        }
        /// A clause is not a well-formed SMT-LIB 2 expression.
        BadClause(clause: String, msg: String) {
            description("ill-formed clause")
            display("ill-formed clause `{}`: {}", clause, msg)
        }
        /// A solve query with no variable declarations.
        NoDecls {
            description("empty declaration list")
            display("cannot solve a query that declares no variables")
        }
    }
}
