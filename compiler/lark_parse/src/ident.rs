//! Identifier and keyword scanning.

/// Characters an identifier may contain.
#[inline]
pub(crate) fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '?'
}

/// Byte length of the identifier token at the start of `s`.
///
/// Scanning stops at the first character that is not a letter, digit, `_`
/// or `?`. Returns 0 when `s` does not start with an identifier.
pub fn scan_identifier(s: &str) -> usize {
    s.char_indices()
        .find(|&(_, c)| !is_ident_char(c))
        .map_or(s.len(), |(i, _)| i)
}

/// Whether `line` starts with `keyword` as a whole word.
pub(crate) fn starts_with_keyword(line: &str, keyword: &str) -> bool {
    line.strip_prefix(keyword)
        .is_some_and(|rest| !rest.starts_with(is_ident_char))
}

/// Whether `line` ends with `keyword` as a whole word.
pub(crate) fn ends_with_keyword(line: &str, keyword: &str) -> bool {
    line.strip_suffix(keyword)
        .is_some_and(|rest| !rest.ends_with(is_ident_char))
}

/// `line` with a leading `keyword` and the whitespace after it removed, if
/// the keyword is followed by whitespace.
pub(crate) fn strip_keyword_prefix<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(keyword)?;
    rest.starts_with(char::is_whitespace)
        .then(|| rest.trim_start())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_stops_at_punctuation() {
        assert_eq!(scan_identifier("equals?(a, b)"), 7);
        assert_eq!(scan_identifier("snake_case = 1"), 10);
        assert_eq!(scan_identifier("(x)"), 0);
        assert_eq!(scan_identifier(""), 0);
        assert_eq!(scan_identifier("größe"), "größe".len());
    }

    #[test]
    fn keywords_match_whole_words_only() {
        assert!(starts_with_keyword("if x then", "if"));
        assert!(starts_with_keyword("end", "end"));
        assert!(!starts_with_keyword("iffy = 1", "if"));
        assert!(!starts_with_keyword("functional()", "function"));
        assert!(ends_with_keyword("if x then", "then"));
        assert!(!ends_with_keyword("x = strengthen", "then"));
    }

    #[test]
    fn keyword_prefix_requires_whitespace() {
        assert_eq!(strip_keyword_prefix("not  done", "not"), Some("done"));
        assert_eq!(strip_keyword_prefix("nothing", "not"), None);
        assert_eq!(strip_keyword_prefix("not", "not"), None);
    }
}
