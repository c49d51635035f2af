//! Provides a parser-equipped [`rsmt2::Solver`].

crate::prelude!();

use std::path::PathBuf;

use expr::{Cst, HasTyp, Typ};
use parse::Parser;

/// SMT-LIB parser for model idents, types and values.
#[derive(Debug, Clone, Copy)]
pub struct ValueParser;

impl<'a> rsmt2::parse::IdentParser<String, Typ, &'a str> for ValueParser {
    fn parse_ident(self, input: &'a str) -> SmtRes<String> {
        Ok(input.trim().into())
    }
    fn parse_type(self, input: &'a str) -> SmtRes<Typ> {
        match input.trim() {
            "Bool" => Ok(Typ::Bool),
            "Int" => Ok(Typ::Int),
            _ => bail!("unexpected type string `{}`", input),
        }
    }
}
impl<'a, Br: std::io::BufRead>
    rsmt2::parse::ModelParser<String, Typ, Either<Cst, String>, &'a mut RSmtParser<Br>>
    for ValueParser
{
    fn parse_value(
        self,
        input: &'a mut RSmtParser<Br>,
        _: &String,
        _: &[(String, Typ)],
        _: &Typ,
    ) -> SmtRes<Either<Cst, String>> {
        let sexpr = input.get_sexpr()?;
        let mut parser = Parser::new(sexpr);
        if let Some(cst) = parser.try_cst() {
            Ok(Either::Left(cst))
        } else {
            Ok(Either::Right(sexpr.into()))
        }
    }
}

/// Wrapper for rsmt2's solver equipped with our parser.
pub struct Solver {
    /// Underlying rsmt2 solver.
    solver: SmtSolver<ValueParser>,
}

impl Solver {
    /// Constructor.
    ///
    /// Spawns the solver process. If `tee` is set, the full SMT-LIB 2 transcript of the session is
    /// copied to that file.
    pub fn new(mut conf: SmtConf, tee: Option<PathBuf>) -> Res<Self> {
        conf.check_success();

        let mut solver = conf
            .spawn(ValueParser)
            .chain_err(|| "while spawning z3 solver")?;
        if let Some(path) = tee {
            solver.path_tee(path)?
        }
        Ok(Self { solver })
    }

    /// Constructor from a Z3 command string.
    ///
    /// The first whitespace-separated token is the Z3 binary, the rest are options passed to it.
    pub fn of_cmd(z3_cmd: impl Into<String>, tee: Option<PathBuf>) -> Res<Self> {
        Self::new(conf_of_cmd(z3_cmd)?, tee)
    }

    /// Declares all variables of some declaration list.
    ///
    /// Fails on an empty declaration list.
    pub fn declare(&mut self, decls: &clause::Decls) -> Res<()> {
        if decls.is_empty() {
            bail!(ErrorKind::NoDecls)
        }
        for var in decls.iter() {
            self.solver
                .declare_const(var, &var.typ())
                .chain_err(|| format!("while declaring variable `{}`", var))?
        }
        Ok(())
    }

    /// Asserts a clause.
    pub fn assert_clause(&mut self, clause: &clause::Clause) -> Res<()> {
        self.solver
            .assert(clause)
            .chain_err(|| format!("while asserting clause `{}`", clause))?;
        Ok(())
    }
}
impl Deref for Solver {
    type Target = SmtSolver<ValueParser>;
    fn deref(&self) -> &Self::Target {
        &self.solver
    }
}
impl DerefMut for Solver {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.solver
    }
}

/// Builds a solver configuration from a Z3 command string.
pub fn conf_of_cmd(z3_cmd: impl Into<String>) -> Res<SmtConf> {
    let z3_cmd = z3_cmd.into();
    let mut split_cmd = z3_cmd.split(|c: char| c.is_whitespace());
    let cmd = split_cmd
        .next()
        .ok_or_else(|| format!("illegal Z3 command `{}`", z3_cmd))?
        .trim();
    if cmd.is_empty() {
        bail!("illegal empty Z3 command")
    }
    let mut conf = SmtConf::z3(cmd);

    for opt in split_cmd {
        let opt = opt.trim();
        if !opt.is_empty() {
            conf.option(opt);
        }
    }

    Ok(conf)
}
