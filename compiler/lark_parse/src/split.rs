//! Context-aware splitting.
//!
//! One scanner serves every split the grammar needs (`or`, `and`, call-argument
//! `,`, the `then`/`else` of a one-line `if`). It tracks two pieces of state:
//! whether the cursor is inside a double-quoted string, and how many call
//! parentheses are open outside strings. A separator only counts when both
//! are at rest.

use crate::ident::is_ident_char;

/// Scanner state at one byte offset.
#[derive(Clone, Copy, Debug, Default)]
struct Context {
    in_string: bool,
    paren_depth: usize,
}

impl Context {
    #[inline]
    fn at_top_level(self) -> bool {
        !self.in_string && self.paren_depth == 0
    }

    #[inline]
    fn step(&mut self, byte: u8) {
        match byte {
            b'"' => self.in_string = !self.in_string,
            b'(' if !self.in_string => self.paren_depth += 1,
            b')' if !self.in_string => self.paren_depth = self.paren_depth.saturating_sub(1),
            _ => {}
        }
    }
}

/// Byte offsets of every top-level occurrence of `sep` in `s`.
///
/// Word separators (those starting with a letter) must also stand alone: the
/// characters on either side may not be identifier characters, so `or` never
/// matches inside `order`.
fn separator_positions(s: &str, sep: &str) -> Vec<usize> {
    let bytes = s.as_bytes();
    let sep_bytes = sep.as_bytes();
    let is_word = sep.starts_with(|c: char| c.is_ascii_alphabetic());

    let mut positions = Vec::new();
    let mut ctx = Context::default();
    let mut i = 0;
    while i < bytes.len() {
        if ctx.at_top_level() && !sep_bytes.is_empty() && bytes[i..].starts_with(sep_bytes) {
            let end = i + sep_bytes.len();
            // ASCII bytes never occur inside multi-byte sequences, so `i` and
            // `end` are char boundaries here.
            let standalone = !is_word
                || (!s[..i].ends_with(is_ident_char) && !s[end..].starts_with(is_ident_char));
            if standalone {
                positions.push(i);
                i = end;
                continue;
            }
        }
        ctx.step(bytes[i]);
        i += 1;
    }
    positions
}

/// Split `s` on every top-level `sep`, leaving segments untrimmed.
///
/// Separators inside double-quoted strings or inside parentheses are kept.
/// A string without separators yields a single segment (itself), and a
/// leading or trailing separator yields an empty segment at that end.
pub fn split_with_wrapping_context<'a>(s: &'a str, sep: &str) -> Vec<&'a str> {
    let mut segments = Vec::new();
    let mut start = 0;
    for pos in separator_positions(s, sep) {
        segments.push(&s[start..pos]);
        start = pos + sep.len();
    }
    segments.push(&s[start..]);
    segments
}

/// Split `s` at the first top-level `sep`, if there is one.
pub(crate) fn split_once_top_level<'a>(s: &'a str, sep: &str) -> Option<(&'a str, &'a str)> {
    let pos = *separator_positions(s, sep).first()?;
    Some((&s[..pos], &s[pos + sep.len()..]))
}

/// Offset of the `)` that closes the `(` at `open`, skipping string contents.
pub(crate) fn matching_close(s: &str, open: usize) -> Option<usize> {
    let mut ctx = Context::default();
    for (i, &byte) in s.as_bytes().iter().enumerate().skip(open) {
        ctx.step(byte);
        if byte == b')' && !ctx.in_string && ctx.paren_depth == 0 {
            return Some(i);
        }
    }
    None
}
