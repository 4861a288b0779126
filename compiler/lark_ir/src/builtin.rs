//! Native operations.

/// One of the eight native operations every runtime starts with.
///
/// The evaluator installs each as an ordinary function whose body is a single
/// [`Instr::Builtin`](crate::Instr::Builtin), so user code calls them exactly
/// like user-defined functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Builtin {
    Print,
    Equals,
    GreaterThan,
    LessThan,
    Contains,
    Concat,
    Plus,
    Minus,
}

impl Builtin {
    pub const ALL: [Builtin; 8] = [
        Builtin::Print,
        Builtin::Equals,
        Builtin::GreaterThan,
        Builtin::LessThan,
        Builtin::Contains,
        Builtin::Concat,
        Builtin::Plus,
        Builtin::Minus,
    ];

    /// Name the function is registered under.
    pub fn name(self) -> &'static str {
        match self {
            Builtin::Print => "print",
            Builtin::Equals => "equals?",
            Builtin::GreaterThan => "greaterThan?",
            Builtin::LessThan => "lessThan?",
            Builtin::Contains => "contains?",
            Builtin::Concat => "concat",
            Builtin::Plus => "plus",
            Builtin::Minus => "minus",
        }
    }

    /// Parameter names the arguments are bound to before the native body runs.
    pub fn params(self) -> &'static [&'static str] {
        match self {
            Builtin::Print => &["value"],
            _ => &["a", "b"],
        }
    }
}
