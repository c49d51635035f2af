//! Satisfying assignment extraction.

crate::prelude!();

use expr::{Cst, HasTyp};

/// A satisfying assignment.
#[derive(Debug, Clone, Default)]
pub struct Model {
    /// Value for each declared variable, keyed by variable name.
    pub values: Map<String, Cst>,
    /// Unexpected entries produced by Z3.
    ///
    /// Z3 can produce additional definitions when asked for a model. This can happen when there is
    /// a potential division by zero for instance.
    pub unexpected: Map<String, String>,
}
impl Model {
    /// Constructor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value for a variable.
    pub fn insert(&mut self, var: impl Into<String>, cst: Cst) -> Res<()> {
        let var = var.into();
        let prev = self.values.insert(var.clone(), cst);
        if prev.is_some() {
            bail!(
                "trying to insert a value for `{}` twice while constructing model",
                var
            )
        } else {
            Ok(())
        }
    }

    /// Inserts a value for an unexpected entry.
    pub fn insert_unexpected(
        &mut self,
        desc: impl Into<String>,
        val: impl Into<String>,
    ) -> Res<()> {
        let desc = desc.into();
        let prev = self.unexpected.insert(desc.clone(), val.into());
        if prev.is_some() {
            bail!("trying to insert a value for `{}` twice", desc)
        } else {
            Ok(())
        }
    }

    /// Value of a variable, if any.
    pub fn value(&self, var: &str) -> Option<&Cst> {
        self.values.get(var)
    }
    /// Integer value of a variable, if any.
    pub fn int_value(&self, var: &str) -> Option<&Int> {
        self.value(var).and_then(Cst::as_int)
    }
    /// Boolean value of a variable, if any.
    pub fn bool_value(&self, var: &str) -> Option<bool> {
        self.value(var).and_then(Cst::as_bool)
    }

    /// True if the model assigns no variable.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
    /// Number of assigned variables.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Populates itself given a solver.
    ///
    /// Uses `get_model` to retrieve the assignment. The solver must have answered `sat` to a
    /// check-sat query right before it is passed to this function.
    pub fn populate(&mut self, solver: &mut solver::Solver) -> Res<()> {
        let model = solver.get_model().chain_err(|| "while retrieving model")?;
        for (var, args, typ, val) in model {
            match val {
                Either::Left(cst) if args.is_empty() && cst.typ() == typ => {
                    self.insert(var, cst)?;
                }
                val => {
                    let val = val.map_left(|c| c.to_string()).into_inner();
                    let mut desc = var;
                    if !args.is_empty() {
                        desc.push_str(" (");
                        for (idx, (arg, typ)) in args.into_iter().enumerate() {
                            if idx > 0 {
                                desc.push(' ');
                            }
                            desc.push_str(&format!("({} {})", arg, typ));
                        }
                        desc.push(')');
                    }
                    desc.push_str(&format!(" {}", typ));
                    self.insert_unexpected(desc, val)?;
                }
            }
        }
        Ok(())
    }
}
impl fmt::Display for Model {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        for (idx, (var, cst)) in self.values.iter().enumerate() {
            if idx > 0 {
                write!(fmt, ", ")?
            }
            write!(fmt, "{} = {}", var, cst)?
        }
        Ok(())
    }
}
