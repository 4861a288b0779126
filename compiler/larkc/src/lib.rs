//! Lark - a tiny line-oriented scripting language.
//!
//! ```text
//! source ──► lark_parse::parse ──► [Instr] ──► Runtime::exec ──► print output
//! ```
//!
//! This crate glues the pipeline together for the `lark` binary and for
//! embedders: [`parse_source`] checks a program, [`run_source`] parses and
//! runs it against a caller-supplied [`Runtime`], and [`run_file`] does the
//! same for a file on disk.

use std::path::Path;

pub use lark_eval::{EvalConfig, EvalError, PrintHandler, Runtime};
pub use lark_ir::{Instr, Value};
pub use lark_parse::ParseError;

pub mod cli;
pub mod tracing_setup;

/// Any failure a program run can end with.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Parse(#[from] ParseError),
    #[error("{0}")]
    Eval(#[from] EvalError),
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Parse `source` without running it.
pub fn parse_source(source: &str) -> Result<Vec<Instr>, Error> {
    Ok(lark_parse::parse(source)?)
}

/// Parse and run `source`. Yields the value of the program's last
/// instruction, if it has one.
pub fn run_source(source: &str, runtime: &mut Runtime) -> Result<Option<Value>, Error> {
    let program = parse_source(source)?;
    Ok(runtime.exec(&program)?)
}

/// Read a source file.
pub fn read_source(path: &Path) -> Result<String, Error> {
    std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Read, parse and run the file at `path` on a fresh runtime.
pub fn run_file(path: &Path, config: EvalConfig) -> Result<Option<Value>, Error> {
    let source = read_source(path)?;
    let mut runtime = Runtime::new().with_config(config);
    tracing::debug!(path = %path.display(), "running");
    run_source(&source, &mut runtime)
}
