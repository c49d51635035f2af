//! Builds `x > 3 ∧ y > x ∧ y < 10` with the expression API and prints a satisfying assignment.
//!
//! The expressions are serialized to SMT-LIB 2 clauses before they cross the solver boundary,
//! which is what the printed clause list shows.
//!
//! Set `Z3_CMD` to point at a specific Z3 binary, otherwise `z3` is taken from the PATH.

qflia::prelude!();

fn run() -> Res<()> {
    let z3_cmd = std::env::var("Z3_CMD").unwrap_or_else(|_| "z3".into());

    let mut decls = clause::Decls::new();
    let _ = decls.int("x")?;
    let _ = decls.int("y")?;

    let mut query = query::Query::new(decls);
    let _ = query.expr(&expr::build!((> (x: int) 3)))?;
    let _ = query.expr(&expr::build!((> (y: int) (x: int))))?;
    let _ = query.expr(&expr::build!((< (y: int) 10)))?;

    println!("clauses:");
    for clause in query.clauses() {
        println!("    {}", clause);
    }

    match query.run(z3_cmd, None)? {
        query::Outcome::Sat(model) => println!("Solution found: {}", model),
        query::Outcome::Unsat => println!("No solution found"),
    }

    Ok(())
}

fn main() {
    match run() {
        Ok(()) => (),
        Err(e) => {
            for (idx, err) in e.iter().enumerate() {
                let pref = if idx == 0 { "- " } else { "  " };
                println!("{}{}", pref, err);
            }
            std::process::exit(2);
        }
    }
}
