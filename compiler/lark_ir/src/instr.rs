//! The instruction tree.
//!
//! Every statement and expression of a Lark program becomes an [`Instr`].
//! An instruction is a suspended computation: run against a runtime it yields
//! a value, no value, or an error. A sequence of instructions (`[Instr]`) is
//! executed in order and yields the value of its last instruction.

use std::rc::Rc;

use crate::{Builtin, Value};

/// A single executable node.
#[derive(Clone, Debug, PartialEq)]
pub enum Instr {
    /// Register `def` under `name`, replacing any earlier definition.
    DefineFunction { name: String, def: Rc<FunctionDef> },
    /// Call `name` with one argument expression per parameter.
    InvokeFunction { name: String, args: Vec<Instr> },
    /// Conditional; an empty `else_branch` means there was no `else`.
    If {
        cond: Box<Instr>,
        then_branch: Vec<Instr>,
        else_branch: Vec<Instr>,
    },
    /// Push a new binding for `name` at the current level.
    AssignVar { name: String, expr: Box<Instr> },
    Literal(Value),
    Not(Box<Instr>),
    /// Short-circuits on the first `true` operand.
    Or(Vec<Instr>),
    /// Evaluates every operand.
    And(Vec<Instr>),
    /// Native body of a built-in function; reads its bound parameters.
    Builtin(Builtin),
}

impl Instr {
    pub fn literal(value: impl Into<Value>) -> Self {
        Instr::Literal(value.into())
    }

    pub fn var(name: impl Into<String>) -> Self {
        Instr::Literal(Value::var(name))
    }

    pub fn call(name: impl Into<String>, args: Vec<Instr>) -> Self {
        Instr::InvokeFunction {
            name: name.into(),
            args,
        }
    }

    pub fn assign(name: impl Into<String>, expr: Instr) -> Self {
        Instr::AssignVar {
            name: name.into(),
            expr: Box::new(expr),
        }
    }

    pub fn not(inner: Instr) -> Self {
        Instr::Not(Box::new(inner))
    }

    pub fn define(name: impl Into<String>, def: FunctionDef) -> Self {
        Instr::DefineFunction {
            name: name.into(),
            def: Rc::new(def),
        }
    }

    pub fn if_else(cond: Instr, then_branch: Vec<Instr>, else_branch: Vec<Instr>) -> Self {
        Instr::If {
            cond: Box::new(cond),
            then_branch,
            else_branch,
        }
    }
}

/// A callable function: user-defined, or a wrapper around a [`Builtin`].
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionDef {
    /// Parameter names in declaration order.
    pub params: Vec<String>,
    pub body: Vec<Instr>,
    /// Call level the body runs at. Parameters are bound at this level and
    /// bindings above the active level are unreachable.
    pub level: usize,
}

impl FunctionDef {
    pub fn new(params: Vec<String>, body: Vec<Instr>, level: usize) -> Self {
        FunctionDef {
            params,
            body,
            level,
        }
    }

    /// Wrap a native operation. Built-ins run at level 0.
    pub fn builtin(builtin: Builtin) -> Self {
        FunctionDef {
            params: builtin.params().iter().map(|p| (*p).to_owned()).collect(),
            body: vec![Instr::Builtin(builtin)],
            level: 0,
        }
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}
