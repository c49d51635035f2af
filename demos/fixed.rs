//! Solves the fixed constraint `x > 3` and prints the result.
//!
//! Set `Z3_CMD` to point at a specific Z3 binary, otherwise `z3` is taken from the PATH.

qflia::prelude!();

fn run() -> Res<()> {
    let z3_cmd = std::env::var("Z3_CMD").unwrap_or_else(|_| "z3".into());

    match query::solve_greater_than_three(z3_cmd)? {
        Some(val) => println!("Solution found: x = {}", val),
        None => println!("No solution found"),
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
