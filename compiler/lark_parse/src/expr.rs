//! Expressions, calls and single-line statements.
//!
//! Precedence, lowest first: `or`, `and`, `not`, primary.

use lark_ir::{keyword, Instr, Value};
use lark_stack::ensure_sufficient_stack;

use crate::ident::{scan_identifier, strip_keyword_prefix};
use crate::split::{matching_close, split_with_wrapping_context};
use crate::ParseErrorKind;

type ExprResult = Result<Instr, ParseErrorKind>;

/// Parse an expression.
pub fn parse_expr(text: &str) -> ExprResult {
    ensure_sufficient_stack(|| {
        let mut ors = split_with_wrapping_context(text, keyword::OR)
            .into_iter()
            .map(parse_and)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(if ors.len() == 1 {
            ors.swap_remove(0)
        } else {
            Instr::Or(ors)
        })
    })
}

fn parse_and(text: &str) -> ExprResult {
    let mut ands = split_with_wrapping_context(text, keyword::AND)
        .into_iter()
        .map(parse_unary)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(if ands.len() == 1 {
        ands.swap_remove(0)
    } else {
        Instr::And(ands)
    })
}

fn parse_unary(text: &str) -> ExprResult {
    let text = text.trim();
    match strip_keyword_prefix(text, keyword::NOT) {
        Some(inner) => Ok(Instr::not(parse_unary(inner)?)),
        None => parse_primary(text),
    }
}

fn parse_primary(text: &str) -> ExprResult {
    if text == keyword::TRUE {
        return Ok(Instr::literal(true));
    }
    if text == keyword::FALSE {
        return Ok(Instr::literal(false));
    }
    if text.starts_with(|c: char| c.is_ascii_digit()) {
        return text
            .parse::<i64>()
            .map(Instr::literal)
            .map_err(|_| ParseErrorKind::InvalidInteger(text.to_owned()));
    }

    let name_len = scan_identifier(text);
    if name_len == text.len() && name_len > 0 {
        return Ok(Instr::var(text));
    }
    if name_len > 0 {
        return parse_call(text, name_len);
    }

    if let Some(inner) = text
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    {
        if !inner.contains('"') {
            return Ok(Instr::Literal(Value::str(inner)));
        }
    }

    Err(ParseErrorKind::ExpressionExpected(text.to_owned()))
}

/// Parse `<name>(<args>)`, where the name is the first `name_len` bytes.
pub(crate) fn parse_call(text: &str, name_len: usize) -> ExprResult {
    let name = &text[..name_len];
    if !text[name_len..].starts_with('(') {
        return Err(ParseErrorKind::ExpectedOpenParen(name.to_owned()));
    }
    if !text.ends_with(')') {
        return Err(ParseErrorKind::ExpectedCloseParen);
    }
    match matching_close(text, name_len) {
        Some(close) if close == text.len() - 1 => {}
        Some(_) => return Err(ParseErrorKind::TrailingAfterCall(name.to_owned())),
        None => return Err(ParseErrorKind::ExpectedCloseParen),
    }

    let inner = &text[name_len + 1..text.len() - 1];
    let args = if inner.trim().is_empty() {
        Vec::new()
    } else {
        split_with_wrapping_context(inner, ",")
            .into_iter()
            .map(parse_expr)
            .collect::<Result<Vec<_>, _>>()?
    };
    Ok(Instr::call(name, args))
}

/// Parse a statement that starts with an identifier: a bare expression, an
/// assignment, or a call.
pub(crate) fn parse_statement(text: &str) -> ExprResult {
    let name_len = scan_identifier(text);
    if name_len == 0 {
        return Err(ParseErrorKind::EmptyIdentifier);
    }
    if name_len == text.len() {
        return parse_expr(text);
    }

    let name = &text[..name_len];
    if let Some(expr) = text[name_len..].trim_start().strip_prefix('=') {
        if name.starts_with(|c: char| c.is_ascii_digit()) || is_reserved(name) {
            return Err(ParseErrorKind::InvalidAssignTarget(name.to_owned()));
        }
        return Ok(Instr::assign(name, parse_expr(expr)?));
    }

    parse_call(text, name_len)
}

fn is_reserved(name: &str) -> bool {
    [
        keyword::FUNCTION,
        keyword::IF,
        keyword::THEN,
        keyword::ELSE,
        keyword::END,
        keyword::AND,
        keyword::OR,
        keyword::NOT,
        keyword::TRUE,
        keyword::FALSE,
    ]
    .contains(&name)
}
