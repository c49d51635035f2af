//! Passes raw clause strings across the solver boundary, once satisfiable and once not.
//!
//! Set `Z3_CMD` to point at a specific Z3 binary, otherwise `z3` is taken from the PATH.

qflia::prelude!();

fn run() -> Res<()> {
    let z3_cmd = std::env::var("Z3_CMD").unwrap_or_else(|_| "z3".into());

    let vars = ["x", "y"];
    let clauses = ["(> x 3)", "(> y x)", "(< y 10)"];
    println!("solving {:?} over {:?}", clauses, vars);
    println!("> {}", query::solve(&vars, &clauses, z3_cmd.as_str())?);

    let clauses = ["(> x 3)", "(< x 2)"];
    println!("solving {:?} over {:?}", clauses, vars);
    println!("> {}", query::solve(&vars, &clauses, z3_cmd.as_str())?);

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
