//! Lark Parse - turns source lines into an instruction tree.
//!
//! There is no tokenizer. Source is split into lines, each line is trimmed,
//! and the grammar is recognized one line at a time:
//!
//! ```text
//! function <name>(<params>)      block, closed by a matching `end`
//! if <expr> then                 block, optional same-depth `else`, `end`
//! if <expr> then <stmt> [else <stmt>] end     one-line conditional
//! <name>                         bare expression statement
//! <name> = <expr>                assignment
//! <name>(<args>)                 call statement
//! ```
//!
//! Blank lines and lines starting with `--` are skipped. Expressions are
//! `or`-separated clauses of `and`-separated, optionally `not`-prefixed
//! primaries; every split goes through [`split_with_wrapping_context`] so
//! separators inside string literals or call parentheses are never split on.

mod error;
mod expr;
mod ident;
mod parser;
mod split;

pub use error::{ParseError, ParseErrorKind};
pub use expr::parse_expr;
pub use ident::scan_identifier;
pub use split::split_with_wrapping_context;

use lark_ir::Instr;

/// Parse a whole program.
pub fn parse(source: &str) -> Result<Vec<Instr>, ParseError> {
    let lines: Vec<&str> = source.lines().collect();
    parse_lines(&lines)
}

/// Parse a program that has already been split into lines.
///
/// Lines are trimmed before parsing; error line numbers are 1-based indices
/// into `lines`.
pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> Result<Vec<Instr>, ParseError> {
    let trimmed: Vec<&str> = lines.iter().map(|l| l.as_ref().trim()).collect();
    let instrs = parser::Parser::new(&trimmed).parse_program()?;
    tracing::debug!(instructions = instrs.len(), lines = trimmed.len(), "parsed program");
    Ok(instrs)
}
