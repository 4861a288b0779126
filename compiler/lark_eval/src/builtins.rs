//! Native bodies of the built-in functions.
//!
//! Each built-in is installed as an ordinary function whose parameters are
//! bound like any other call. The native body reads those parameters back,
//! resolved, and pattern-matches on their variants.

use lark_ir::{Builtin, Value};

use crate::{EvalError, EvalResult, Runtime};

pub(crate) fn run(runtime: &mut Runtime, builtin: Builtin) -> EvalResult {
    let args = builtin
        .params()
        .iter()
        .map(|param| runtime.resolve(&Value::var(*param)))
        .collect::<Result<Vec<_>, _>>()?;

    match (builtin, args.as_slice()) {
        (Builtin::Print, values) => {
            let line = values
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            runtime.print_line(&line);
            Ok(None)
        }
        (Builtin::Equals, [a, b]) => {
            if !a.same_kind(b) {
                return Err(EvalError::CannotCompare {
                    left: a.to_string(),
                    right: b.to_string(),
                });
            }
            Ok(Some(Value::Bool(a == b)))
        }
        (Builtin::GreaterThan, [a, b]) => {
            let (a, b) = two_ints(a, b)?;
            Ok(Some(Value::Bool(a > b)))
        }
        (Builtin::LessThan, [a, b]) => {
            let (a, b) = two_ints(a, b)?;
            Ok(Some(Value::Bool(a < b)))
        }
        (Builtin::Contains, [a, b]) => {
            let (a, b) = two_strs(a, b)?;
            Ok(Some(Value::Bool(a.contains(b))))
        }
        (Builtin::Concat, [a, b]) => {
            let (a, b) = two_strs(a, b)?;
            Ok(Some(Value::Str(format!("{a}{b}"))))
        }
        (Builtin::Plus, [a, b]) => {
            let (a, b) = two_ints(a, b)?;
            a.checked_add(b)
                .map(|sum| Some(Value::Int(sum)))
                .ok_or(EvalError::IntegerOverflow("plus"))
        }
        (Builtin::Minus, [a, b]) => {
            let (a, b) = two_ints(a, b)?;
            a.checked_sub(b)
                .map(|diff| Some(Value::Int(diff)))
                .ok_or(EvalError::IntegerOverflow("minus"))
        }
        (_, args) => Err(EvalError::ArgCountMismatch {
            given: args.len(),
            expected: 2,
        }),
    }
}

fn two_ints(a: &Value, b: &Value) -> Result<(i64, i64), EvalError> {
    let first = a.as_int().ok_or_else(|| mismatch("first", "an int", a))?;
    let second = b.as_int().ok_or_else(|| mismatch("second", "an int", b))?;
    Ok((first, second))
}

fn two_strs<'v>(a: &'v Value, b: &'v Value) -> Result<(&'v str, &'v str), EvalError> {
    let first = a.as_str().ok_or_else(|| mismatch("first", "a string", a))?;
    let second = b.as_str().ok_or_else(|| mismatch("second", "a string", b))?;
    Ok((first, second))
}

#[cold]
fn mismatch(position: &'static str, expected: &'static str, found: &Value) -> EvalError {
    EvalError::TypeMismatch {
        position,
        expected,
        found: found.to_string(),
    }
}
