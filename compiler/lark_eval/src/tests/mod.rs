//! Whole-program tests: source is parsed with `lark_parse` and run against a
//! runtime that captures `print` output.


use crate::{EvalError, PrintHandler, Runtime};

/// Parse and run `source`; returns captured output and the run's outcome.
pub(crate) fn run(source: &str) -> (String, Result<(), String>) {
    let print = PrintHandler::buffer();
    let mut runtime = Runtime::new().with_print_handler(print.clone());
    let outcome = match lark_parse::parse(source) {
        Ok(program) => runtime
            .exec(&program)
            .map(|_| ())
            .map_err(|e: EvalError| e.to_string()),
        Err(e) => Err(e.to_string()),
    };
    (print.output(), outcome)
}
