//! Evaluation errors.
//!
//! Every message is phrased in the language's own vocabulary: values are
//! quoted by their `print` rendering, never by a Rust type name.

use lark_ir::Value;
use thiserror::Error;

/// Result of running an instruction: a value, no value, or an error.
pub type EvalResult = Result<Option<Value>, EvalError>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("{0} function is not defined")]
    UndefinedFunction(String),
    #[error("arg count mismatch {given} != {expected}")]
    ArgCountMismatch { given: usize, expected: usize },
    #[error("{0} is not defined")]
    UndefinedVariable(String),
    #[error("{0} is not reachable on this stack")]
    Unreachable(String),
    #[error("{0} refers back to itself")]
    CyclicReference(String),
    #[error("condition expression was not a bool")]
    NonBoolCondition,
    #[error("expected bool")]
    ExpectedBool,
    #[error("cannot compare {left} to {right}")]
    CannotCompare { left: String, right: String },
    #[error("{position} argument must be {expected}, got {found}")]
    TypeMismatch {
        position: &'static str,
        expected: &'static str,
        found: String,
    },
    #[error("integer overflow in {0}")]
    IntegerOverflow(&'static str),
    #[error("{0} produced no value")]
    NoValue(String),
    #[error("maximum call depth of {0} exceeded")]
    CallDepthExceeded(usize),
}
