//! The evaluation context.

use std::rc::Rc;

use lark_ir::{Builtin, FunctionDef, Value};
use rustc_hash::FxHashMap;

use crate::{EvalConfig, EvalError, PrintHandler, ScopeStack, SharedPrintHandler};

mod exec;
mod scope_guard;

pub use scope_guard::ScopedRuntime;

/// Mutable state of one program run.
///
/// Create a fresh runtime per program; nothing carries over between runs
/// except what the host deliberately keeps.
#[derive(Debug)]
pub struct Runtime {
    functions: FxHashMap<String, Rc<FunctionDef>>,
    stack: ScopeStack,
    /// Active call level. Top-level code runs at 0.
    level: usize,
    /// Number of user-visible calls currently executing.
    call_depth: usize,
    config: EvalConfig,
    print: SharedPrintHandler,
}

impl Runtime {
    /// A runtime with the built-ins installed, printing to stdout.
    pub fn new() -> Self {
        let mut runtime = Runtime {
            functions: FxHashMap::default(),
            stack: ScopeStack::new(),
            level: 0,
            call_depth: 0,
            config: EvalConfig::default(),
            print: PrintHandler::stdout(),
        };
        for builtin in Builtin::ALL {
            runtime.define_function(builtin.name(), Rc::new(FunctionDef::builtin(builtin)));
        }
        runtime
    }

    #[must_use]
    pub fn with_config(mut self, config: EvalConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_print_handler(mut self, print: SharedPrintHandler) -> Self {
        self.print = print;
        self
    }

    /// Register `def` under `name`. A later definition replaces an earlier one.
    pub fn define_function(&mut self, name: impl Into<String>, def: Rc<FunctionDef>) {
        self.functions.insert(name.into(), def);
    }

    pub fn function(&self, name: &str) -> Option<&FunctionDef> {
        self.functions.get(name).map(Rc::as_ref)
    }

    pub fn scope(&self) -> &ScopeStack {
        &self.stack
    }

    #[inline]
    pub fn level(&self) -> usize {
        self.level
    }

    /// Captured `print` output (empty when printing to stdout).
    pub fn output(&self) -> String {
        self.print.output()
    }

    /// Bind `name` at the active level.
    pub fn assign(&mut self, name: impl Into<String>, value: Value) {
        self.stack.push(name, value, self.level);
    }

    /// Follow variable references until a concrete value is reached.
    ///
    /// Every hop looks its name up in the whole stack as it is now, so a
    /// reference sees assignments made after it was stored. Every binding on
    /// the chain must be at or below the active level. A chain longer than
    /// the stack revisits a binding and is reported as a cycle.
    pub fn resolve(&self, value: &Value) -> Result<Value, EvalError> {
        let mut current = value;
        for _ in 0..=self.stack.len() {
            let Value::VarRef(name) = current else {
                return Ok(current.clone());
            };
            let binding = self
                .stack
                .lookup(name)
                .ok_or_else(|| EvalError::UndefinedVariable(name.clone()))?;
            if binding.level > self.level {
                return Err(EvalError::Unreachable(name.clone()));
            }
            current = &binding.value;
        }
        match (value, current) {
            (Value::VarRef(start), Value::VarRef(_)) => {
                Err(EvalError::CyclicReference(start.clone()))
            }
            (_, concrete) => Ok(concrete.clone()),
        }
    }

    /// The `print` rendering of `value` after resolution.
    pub fn show(&self, value: &Value) -> Result<String, EvalError> {
        Ok(self.resolve(value)?.to_string())
    }

    pub(crate) fn print_line(&self, line: &str) {
        self.print.println(line);
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
