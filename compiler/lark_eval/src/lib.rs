//! Lark Eval - the instruction engine.
//!
//! A [`Runtime`] holds everything one program run mutates:
//! - the function table (user definitions and the eight built-ins)
//! - the scope stack, an append-only list of `(name, value, level)` bindings
//! - the active call level, used to fence off bindings made by deeper calls
//! - the print handler `print` writes to
//!
//! Variables are dynamically scoped. A reference resolves to the most
//! recently pushed binding with that name, and fails if that binding was made
//! at a level above the active one. Every call and every `if` branch runs
//! inside a scope guard that truncates the stack back to its entry length on
//! exit, including error exits and unwinding.

mod builtins;
mod config;
mod errors;
mod print_handler;
mod runtime;
mod scope;

pub use config::EvalConfig;
pub use errors::{EvalError, EvalResult};
pub use print_handler::{PrintHandler, SharedPrintHandler};
pub use runtime::{Runtime, ScopedRuntime};
pub use scope::{Binding, ScopeStack};

#[cfg(test)]
mod tests;
