//! Parse errors.

use thiserror::Error;

/// A parse failure, tagged with the 1-based line it was detected on.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

impl ParseError {
    #[cold]
    pub fn new(line: usize, kind: ParseErrorKind) -> Self {
        ParseError { line, kind }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("{keyword} was not closed by \"end\"")]
    UnclosedBlock { keyword: &'static str },
    #[error("expected \"then\" at the end of the if line")]
    MissingThen,
    #[error("\"else\" appears twice in one if block")]
    DuplicateElse,
    #[error("unexpected \"{0}\"")]
    UnexpectedKeyword(&'static str),
    #[error("cannot parse line \"{0}\"")]
    UnexpectedLine(String),
    #[error("token cannot be empty")]
    EmptyIdentifier,
    #[error("invalid parameter name \"{0}\"")]
    InvalidParameter(String),
    #[error("cannot assign to \"{0}\"")]
    InvalidAssignTarget(String),
    #[error("expected \"(\" after {0}")]
    ExpectedOpenParen(String),
    #[error("expected \")\"")]
    ExpectedCloseParen,
    #[error("unexpected text after call to {0}")]
    TrailingAfterCall(String),
    #[error("expression expected, found \"{0}\"")]
    ExpressionExpected(String),
    #[error("invalid integer literal {0}")]
    InvalidInteger(String),
    #[error("expected a statement, found \"{0}\"")]
    ExpectedStatement(String),
}
