//! Instruction semantics.

use lark_ir::{Instr, Value};
use lark_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

use super::Runtime;
use crate::{builtins, EvalError, EvalResult};

impl Runtime {
    /// Run a sequence, stopping at the first error. Yields the value of the
    /// last instruction, or no value for an empty sequence.
    pub fn exec(&mut self, instrs: &[Instr]) -> EvalResult {
        let mut last = None;
        for instr in instrs {
            last = self.eval(instr)?;
        }
        Ok(last)
    }

    /// Run a single instruction.
    pub fn eval(&mut self, instr: &Instr) -> EvalResult {
        match instr {
            Instr::DefineFunction { name, def } => {
                debug!(name = name.as_str(), level = def.level, "define function");
                self.define_function(name.clone(), def.clone());
                Ok(None)
            }
            Instr::InvokeFunction { name, args } => {
                ensure_sufficient_stack(|| self.invoke(name, args))
            }
            Instr::If {
                cond,
                then_branch,
                else_branch,
            } => {
                let taken = self.eval_bool(cond, || EvalError::NonBoolCondition)?;
                let branch = if taken { then_branch } else { else_branch };
                if branch.is_empty() {
                    return Ok(None);
                }
                self.with_scope(|scoped| scoped.exec_resolved(branch))
            }
            Instr::AssignVar { name, expr } => {
                let value = self
                    .eval(expr)?
                    .ok_or_else(|| EvalError::NoValue(format!("assignment to {name}")))?;
                self.assign(name.clone(), value);
                Ok(None)
            }
            Instr::Literal(value) => Ok(Some(value.clone())),
            Instr::Not(inner) => {
                let b = self.eval_bool(inner, || EvalError::ExpectedBool)?;
                Ok(Some(Value::Bool(!b)))
            }
            Instr::Or(operands) => {
                for operand in operands {
                    if self.eval_bool(operand, || EvalError::ExpectedBool)? {
                        return Ok(Some(Value::Bool(true)));
                    }
                }
                Ok(Some(Value::Bool(false)))
            }
            Instr::And(operands) => {
                let mut result = true;
                for operand in operands {
                    result &= self.eval_bool(operand, || EvalError::ExpectedBool)?;
                }
                Ok(Some(Value::Bool(result)))
            }
            Instr::Builtin(builtin) => builtins::run(self, *builtin),
        }
    }

    /// Run a scoped body and resolve its value while the body's bindings are
    /// still on the stack, so no reference outlives the scope it points into.
    fn exec_resolved(&mut self, body: &[Instr]) -> EvalResult {
        self.exec(body)?
            .map(|value| self.resolve(&value))
            .transpose()
    }

    /// Evaluate `instr` and resolve it to a boolean, or fail with `not_bool`.
    fn eval_bool(
        &mut self,
        instr: &Instr,
        not_bool: impl FnOnce() -> EvalError,
    ) -> Result<bool, EvalError> {
        let Some(value) = self.eval(instr)? else {
            return Err(not_bool());
        };
        self.resolve(&value)?.as_bool().ok_or_else(not_bool)
    }

    fn invoke(&mut self, name: &str, args: &[Instr]) -> EvalResult {
        let def = self
            .functions
            .get(name)
            .cloned()
            .ok_or_else(|| EvalError::UndefinedFunction(name.to_owned()))?;
        if args.len() != def.arity() {
            return Err(EvalError::ArgCountMismatch {
                given: args.len(),
                expected: def.arity(),
            });
        }
        if let Some(max) = self.config.max_call_depth {
            if self.call_depth >= max {
                return Err(EvalError::CallDepthExceeded(max));
            }
        }

        // Arguments are resolved at the caller's level, before any parameter
        // is bound.
        let values = self.eval_args(name, args)?;
        trace!(
            name,
            level = def.level,
            depth = self.call_depth,
            stack = self.stack.len(),
            "call"
        );
        self.with_scope(|scoped| {
            for (param, value) in def.params.iter().zip(values) {
                scoped.bind(param, value, def.level);
            }
            scoped.enter_call(def.level);
            scoped.exec_resolved(&def.body)
        })
    }

    fn eval_args(&mut self, name: &str, args: &[Instr]) -> Result<Vec<Value>, EvalError> {
        args.iter()
            .enumerate()
            .map(|(i, arg)| {
                let value = self.eval(arg)?.ok_or_else(|| {
                    EvalError::NoValue(format!("argument {} of {name}", i + 1))
                })?;
                self.resolve(&value)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests;
