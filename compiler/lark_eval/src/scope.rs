//! The scope stack.
//!
//! Bindings are never updated in place. Assigning a name again pushes a new
//! binding that shadows the old one, and leaving a call or branch truncates
//! the stack back to where it was.

use lark_ir::Value;

/// One variable assignment or bound parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    pub name: String,
    pub value: Value,
    /// Call level the binding was made at.
    pub level: usize,
}

#[derive(Clone, Debug, Default)]
pub struct ScopeStack {
    bindings: Vec<Binding>,
}

impl ScopeStack {
    pub fn new() -> Self {
        ScopeStack::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    #[inline]
    pub fn push(&mut self, name: impl Into<String>, value: Value, level: usize) {
        self.bindings.push(Binding {
            name: name.into(),
            value,
            level,
        });
    }

    /// Drop every binding pushed after the stack had `len` entries.
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        self.bindings.truncate(len);
    }

    /// Most recent binding of `name`.
    pub fn lookup(&self, name: &str) -> Option<&Binding> {
        self.bindings.iter().rev().find(|b| b.name == name)
    }

    /// Distinct names with at least one binding, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.bindings.iter().map(|b| b.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        names
    }
}

#[cfg(test)]
mod tests;
