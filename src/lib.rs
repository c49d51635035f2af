//! A small front-end for solving linear integer arithmetic constraints.
//!
//! This crate builds quantifier-free linear integer arithmetic (QF_LIA) formulas, serializes them
//! to SMT-LIB 2 clauses, and hands them to an external SMT solver (Z3) through [`rsmt2`]. All
//! actual solving happens in the solver process; this crate only assembles the problem, drives the
//! declare/assert/check-sat/get-model sequence, and decodes the answer.
//!
//! The main entry points live in the [`query`] module:
//!
//! - [`query::solve_greater_than_three`] solves the fixed constraint `x > 3`;
//! - [`query::solve`] takes variable names and raw SMT-LIB clause strings;
//! - [`query::Query`] additionally accepts expressions built with the [`expr`] API.
//!
//! # Examples
//!
//! ```rust,no_run
//! qflia::prelude!();
//!
//! fn demo() -> Res<()> {
//!     let outcome = query::solve(&["x", "y"], &["(> x 3)", "(> y x)", "(< y 10)"], "z3")?;
//!     match outcome {
//!         query::Outcome::Sat(model) => println!("sat: {}", model),
//!         query::Outcome::Unsat => println!("unsat"),
//!     }
//!     Ok(())
//! }
//! ```

#![forbid(missing_docs)]

pub extern crate rsmt2;

mod macros;

pub mod prelude;

pub mod clause;
pub mod expr;
pub mod model;
pub mod parse;
pub mod query;
pub mod solver;
