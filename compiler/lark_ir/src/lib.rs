//! Lark IR - values and instructions.
//!
//! This crate holds the data the parser produces and the evaluator consumes:
//! - [`Value`]: the closed set of runtime values, including unresolved
//!   variable references
//! - [`Instr`]: the instruction tree, one node per executable construct
//! - [`FunctionDef`]: parameter list, body and call level of a function
//! - [`Builtin`]: identifiers of the native operations installed at startup
//! - [`keyword`]: the surface keywords shared by parser and renderer
//!
//! Nothing here evaluates anything; `lark_eval` gives the instructions their
//! meaning.

mod builtin;
mod instr;
pub mod keyword;
mod value;

pub use builtin::Builtin;
pub use instr::{FunctionDef, Instr};
pub use value::Value;
