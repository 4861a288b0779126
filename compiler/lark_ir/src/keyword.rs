//! Surface keywords.

pub const FUNCTION: &str = "function";
pub const IF: &str = "if";
pub const THEN: &str = "then";
pub const ELSE: &str = "else";
pub const END: &str = "end";
pub const AND: &str = "and";
pub const OR: &str = "or";
pub const NOT: &str = "not";
pub const TRUE: &str = "true";
pub const FALSE: &str = "false";

/// Line prefix that marks a comment.
pub const COMMENT: &str = "--";
