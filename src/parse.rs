//! Mini parser for SMT-LIB level tokens.
//!
//! The solver boundary only ever needs to read back *constants* (model values) and to scan clause
//! strings token by token (validation, see [`clause::check`](crate::clause::check)). This module
//! provides a small cursor-based parser for exactly that, nothing more.

crate::prelude!();

use expr::Cst;

#[cfg(test)]
mod test;

/// A cursor over some input text.
#[derive(Debug, Clone)]
pub struct Parser<'txt> {
    /// Text to parse.
    txt: &'txt str,
    /// Current position in the text.
    cursor: usize,
}

impl<'txt> Parser<'txt> {
    /// Constructor.
    pub fn new(txt: &'txt str) -> Self {
        Self { txt, cursor: 0 }
    }

    /// True if there is no more text to parse.
    pub fn is_at_eoi(&self) -> bool {
        self.cursor >= self.txt.len()
    }

    /// The text left to parse.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use qflia::parse::Parser;
    /// let mut parser = Parser::new("some stuff");
    /// parser.parse_until(char::is_whitespace, true);
    /// assert_eq!(parser.rest(), "stuff")
    /// ```
    pub fn rest(&self) -> &'txt str {
        &self.txt[self.cursor..]
    }

    /// Backtracks to a previous position.
    fn backtrack(&mut self, cursor: usize) {
        debug_assert!(cursor <= self.cursor);
        self.cursor = cursor
    }

    /// Generates a parse error at the current position.
    pub fn fail(&self, msg: impl Into<String>) -> Error {
        let msg = msg.into();
        if self.is_at_eoi() {
            format!("{} at end of input", msg).into()
        } else {
            format!("{} at `{}`", msg, self.rest()).into()
        }
    }

    /// Parses some whitespaces.
    pub fn ws(&mut self) -> bool {
        let mut changed = false;
        if self.cursor < self.txt.len() {
            for c in self.txt[self.cursor..].chars() {
                if c.is_whitespace() {
                    changed = true;
                    self.cursor += c.len_utf8()
                } else {
                    break;
                }
            }
        }
        changed
    }

    /// Consumes characters until some predicate is true or we reach EOI.
    ///
    /// Boolean flag `inclusive` specifies whether the first character `c` on which `stop(c)` is
    /// true should be consumed or not.
    pub fn parse_until<F: Fn(char) -> bool>(&mut self, stop: F, inclusive: bool) -> &'txt str {
        if self.cursor >= self.txt.len() {
            return &self.txt[0..0];
        }
        let start = self.cursor;
        let mut chars = self.txt[self.cursor..].chars();
        while let Some(c) = chars.next() {
            if stop(c) {
                if inclusive {
                    self.cursor += c.len_utf8()
                }
                break;
            } else {
                self.cursor += c.len_utf8()
            }
        }
        &self.txt[start..self.cursor]
    }

    /// Tries to parse a tag.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use qflia::parse::Parser;
    /// let mut parser = Parser::new("some stuff");
    /// assert!(parser.try_tag("some"));
    /// assert!(!parser.try_tag("stuff"));
    /// parser.ws();
    /// assert!(parser.try_tag("stuff"))
    /// ```
    pub fn try_tag(&mut self, tag: &str) -> bool {
        if self.cursor >= self.txt.len() {
            false
        } else {
            let mut chars = self.txt[self.cursor..].chars();
            for c in tag.chars() {
                let next = chars.next();
                if Some(c) != next {
                    return false;
                }
            }
            self.cursor += tag.len();
            true
        }
    }
    /// Parses a tag or fails.
    pub fn tag(&mut self, tag: &str) -> Res<()> {
        if self.try_tag(tag) {
            Ok(())
        } else {
            bail!(self.fail(format!("expected token `{}`", tag)))
        }
    }

    /// Tries to parse an identifier.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use qflia::parse::Parser;
    /// let mut parser = Parser::new("my_identifier 470not_an_identifier");
    /// assert_eq!(parser.try_id().unwrap(), "my_identifier");
    /// parser.ws();
    /// assert!(parser.try_id().is_none());
    /// ```
    pub fn try_id(&mut self) -> Option<&'txt str> {
        if self.cursor >= self.txt.len() {
            return None;
        }

        let start = self.cursor;
        let mut chars = self.txt[self.cursor..].chars();
        if let Some(c) = chars.next() {
            if c.is_alphabetic() || c == '_' {
                self.cursor += c.len_utf8()
            } else {
                return None;
            }
        }
        let _ = self.parse_until(|c| !c.is_alphanumeric() && c != '_' && c != '.', false);
        Some(&self.txt[start..self.cursor])
    }

    /// Tries to parse an integer.
    ///
    /// Handles both plain integers and the `(- 7)` form Z3 uses for negative model values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use qflia::parse::Parser;
    /// let mut parser = Parser::new("72 (- 7)");
    /// assert_eq!(&parser.try_int().unwrap().to_string(), "72");
    /// parser.ws();
    /// assert_eq!(&parser.try_int().unwrap().to_string(), "-7");
    /// ```
    pub fn try_int(&mut self) -> Option<Int> {
        let start = self.cursor;
        macro_rules! abort {
            () => {{
                self.backtrack(start);
                return None;
            }};
        }

        let neg = if self.try_tag("(") {
            self.ws();
            if self.try_tag("-") {
                self.ws();
                true
            } else {
                abort!()
            }
        } else {
            false
        };

        let int = self.parse_until(|c| !c.is_numeric(), false);
        if !int.is_empty() {
            let mut int =
                Int::parse_bytes(int.as_bytes(), 10).expect("parsing an integer cannot fail");
            if neg {
                self.ws();
                if !self.try_tag(")") {
                    abort!()
                }
                int = -int
            }
            Some(int)
        } else {
            abort!()
        }
    }

    /// Tries to parse a boolean.
    pub fn try_bool(&mut self) -> Option<bool> {
        if self.try_tag("true") {
            Some(true)
        } else if self.try_tag("false") {
            Some(false)
        } else {
            None
        }
    }

    /// Tries to parse a constant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use qflia::parse::Parser;
    /// # use qflia::expr::Cst;
    /// let mut parser = Parser::new("7405,false");
    /// assert_eq!(parser.try_cst().unwrap(), 7405.into());
    /// parser.tag(",").unwrap();
    /// assert_eq!(parser.try_cst().unwrap(), false.into());
    /// ```
    pub fn try_cst(&mut self) -> Option<Cst> {
        if let Some(b) = self.try_bool() {
            Some(Cst::B(b))
        } else if let Some(i) = self.try_int() {
            Some(Cst::I(i))
        } else {
            None
        }
    }
}
