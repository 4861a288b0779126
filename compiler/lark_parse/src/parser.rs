//! Line and block structure.
//!
//! The parser walks a range of trimmed lines. Block constructs
//! (`function ... end`, `if ... then ... end`) are located with a depth
//! counter, and their bodies are parsed recursively as sub-ranges.

use lark_ir::{keyword, FunctionDef, Instr};
use lark_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::expr::{parse_expr, parse_statement};
use crate::ident::{ends_with_keyword, scan_identifier, starts_with_keyword};
use crate::split::split_once_top_level;
use crate::{ParseError, ParseErrorKind};

pub(crate) struct Parser<'src> {
    lines: &'src [&'src str],
}

impl<'src> Parser<'src> {
    pub(crate) fn new(lines: &'src [&'src str]) -> Self {
        Parser { lines }
    }

    pub(crate) fn parse_program(&self) -> Result<Vec<Instr>, ParseError> {
        self.parse_range(0, self.lines.len(), 0)
    }

    /// Parse `lines[start..end]`. `fn_depth` is the number of enclosing
    /// function definitions.
    fn parse_range(
        &self,
        start: usize,
        end: usize,
        fn_depth: usize,
    ) -> Result<Vec<Instr>, ParseError> {
        ensure_sufficient_stack(|| {
            let mut instrs = Vec::new();
            let mut i = start;
            while i < end {
                let line = self.lines[i];
                let line_no = i + 1;
                let at = move |kind| ParseError::new(line_no, kind);

                if line.is_empty() || line.starts_with(keyword::COMMENT) {
                    i += 1;
                    continue;
                }

                if starts_with_keyword(line, keyword::FUNCTION) {
                    let close = self.find_block_end(i, end, keyword::FUNCTION)?;
                    instrs.push(self.parse_function(i, close, fn_depth)?);
                    i = close + 1;
                    continue;
                }

                if starts_with_keyword(line, keyword::IF) {
                    if opens_block(line) {
                        let close = self.find_block_end(i, end, keyword::IF)?;
                        instrs.push(self.parse_if_block(i, close, fn_depth)?);
                        i = close + 1;
                    } else {
                        instrs.push(parse_inline_if(line).map_err(at)?);
                        i += 1;
                    }
                    continue;
                }

                if line == keyword::END {
                    return Err(at(ParseErrorKind::UnexpectedKeyword(keyword::END)));
                }
                if line == keyword::ELSE {
                    return Err(at(ParseErrorKind::UnexpectedKeyword(keyword::ELSE)));
                }
                if scan_identifier(line) == 0 {
                    return Err(at(ParseErrorKind::UnexpectedLine(line.to_owned())));
                }

                instrs.push(parse_statement(line).map_err(at)?);
                i += 1;
            }
            Ok(instrs)
        })
    }

    /// Index of the `end` line closing the block opened at `open`.
    fn find_block_end(
        &self,
        open: usize,
        limit: usize,
        opener: &'static str,
    ) -> Result<usize, ParseError> {
        let mut depth = 0usize;
        for (i, line) in self.lines.iter().enumerate().take(limit).skip(open) {
            if opens_block(line) {
                depth += 1;
            } else if *line == keyword::END {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Ok(i);
                }
            }
        }
        Err(ParseError::new(
            open + 1,
            ParseErrorKind::UnclosedBlock { keyword: opener },
        ))
    }

    /// Index of the `else` line belonging to the `if` block `open..close`.
    fn find_else(&self, open: usize, close: usize) -> Result<Option<usize>, ParseError> {
        let mut depth = 0usize;
        let mut found = None;
        for (i, line) in self.lines.iter().enumerate().take(close).skip(open + 1) {
            if opens_block(line) {
                depth += 1;
            } else if *line == keyword::END {
                depth = depth.saturating_sub(1);
            } else if *line == keyword::ELSE && depth == 0 {
                if found.is_some() {
                    return Err(ParseError::new(i + 1, ParseErrorKind::DuplicateElse));
                }
                found = Some(i);
            }
        }
        Ok(found)
    }

    fn parse_function(
        &self,
        open: usize,
        close: usize,
        fn_depth: usize,
    ) -> Result<Instr, ParseError> {
        let at = |kind| ParseError::new(open + 1, kind);
        let header = self.lines[open][keyword::FUNCTION.len()..].trim_start();

        let name_len = scan_identifier(header);
        if name_len == 0 {
            return Err(at(ParseErrorKind::EmptyIdentifier));
        }
        let name = &header[..name_len];
        let params = header[name_len..]
            .strip_prefix('(')
            .ok_or_else(|| at(ParseErrorKind::ExpectedOpenParen(name.to_owned())))?
            .strip_suffix(')')
            .ok_or_else(|| at(ParseErrorKind::ExpectedCloseParen))?;
        let params = params
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(|p| {
                if scan_identifier(p) == p.len() {
                    Ok(p.to_owned())
                } else {
                    Err(at(ParseErrorKind::InvalidParameter(p.to_owned())))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        let level = fn_depth + 1;
        let body = self.parse_range(open + 1, close, level)?;
        trace!(name, level, params = params.len(), "function definition");
        Ok(Instr::define(name, FunctionDef::new(params, body, level)))
    }

    fn parse_if_block(
        &self,
        open: usize,
        close: usize,
        fn_depth: usize,
    ) -> Result<Instr, ParseError> {
        let line = self.lines[open];
        let cond_text = &line[keyword::IF.len()..line.len() - keyword::THEN.len()];
        let cond = parse_expr(cond_text).map_err(|kind| ParseError::new(open + 1, kind))?;

        let (then_branch, else_branch) = match self.find_else(open, close)? {
            Some(else_line) => (
                self.parse_range(open + 1, else_line, fn_depth)?,
                self.parse_range(else_line + 1, close, fn_depth)?,
            ),
            None => (self.parse_range(open + 1, close, fn_depth)?, Vec::new()),
        };
        Ok(Instr::if_else(cond, then_branch, else_branch))
    }
}

/// Whether `line` opens a block that a later `end` line closes.
fn opens_block(line: &str) -> bool {
    starts_with_keyword(line, keyword::FUNCTION)
        || (starts_with_keyword(line, keyword::IF) && ends_with_keyword(line, keyword::THEN))
}

/// `if <expr> then <stmt> [else <stmt>] end` on a single line.
fn parse_inline_if(line: &str) -> Result<Instr, ParseErrorKind> {
    if !ends_with_keyword(line, keyword::END) {
        return Err(ParseErrorKind::MissingThen);
    }
    let body = &line[keyword::IF.len()..line.len() - keyword::END.len()];
    let (cond_text, branches) =
        split_once_top_level(body, keyword::THEN).ok_or(ParseErrorKind::MissingThen)?;
    let (then_text, else_text) = match split_once_top_level(branches, keyword::ELSE) {
        Some((then_text, else_text)) => (then_text, Some(else_text)),
        None => (branches, None),
    };

    let cond = parse_expr(cond_text)?;
    let then_branch = vec![parse_branch_statement(then_text)?];
    let else_branch = match else_text {
        Some(text) => vec![parse_branch_statement(text)?],
        None => Vec::new(),
    };
    Ok(Instr::if_else(cond, then_branch, else_branch))
}

fn parse_branch_statement(text: &str) -> Result<Instr, ParseErrorKind> {
    let text = text.trim();
    let block_keyword = [
        keyword::FUNCTION,
        keyword::IF,
        keyword::THEN,
        keyword::ELSE,
        keyword::END,
    ]
    .into_iter()
    .any(|kw| starts_with_keyword(text, kw));
    if block_keyword || scan_identifier(text) == 0 {
        return Err(ParseErrorKind::ExpectedStatement(text.to_owned()));
    }
    parse_statement(text)
}
