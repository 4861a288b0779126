//! RAII scope guard for the scope stack.
//!
//! [`ScopedRuntime`] records the stack length, active level and call depth
//! when it is created and puts all three back when dropped. Because the
//! restore lives in `Drop`, it runs on normal exit, on `?` propagation and
//! during unwinding alike.
//!
//! ```text
//! runtime.with_scope(|scoped| {
//!     scoped.assign(name, value);
//!     scoped.exec(body)
//! }) // bindings pushed inside are gone here
//! ```

use std::ops::{Deref, DerefMut};

use super::Runtime;

pub struct ScopedRuntime<'rt> {
    runtime: &'rt mut Runtime,
    stack_len: usize,
    level: usize,
    call_depth: usize,
}

impl Drop for ScopedRuntime<'_> {
    fn drop(&mut self) {
        self.runtime.stack.truncate(self.stack_len);
        self.runtime.level = self.level;
        self.runtime.call_depth = self.call_depth;
    }
}

impl Deref for ScopedRuntime<'_> {
    type Target = Runtime;

    fn deref(&self) -> &Self::Target {
        self.runtime
    }
}

impl DerefMut for ScopedRuntime<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.runtime
    }
}

impl ScopedRuntime<'_> {
    /// Enter a call: later bindings and lookups use `level`.
    pub(crate) fn enter_call(&mut self, level: usize) {
        self.runtime.level = level;
        self.runtime.call_depth += 1;
    }

    /// Bind `name` at an explicit level.
    pub(crate) fn bind(&mut self, name: &str, value: lark_ir::Value, level: usize) {
        self.runtime.stack.push(name, value, level);
    }
}

impl Runtime {
    /// Open a scope that is closed when the returned guard drops.
    pub fn scoped(&mut self) -> ScopedRuntime<'_> {
        ScopedRuntime {
            stack_len: self.stack.len(),
            level: self.level,
            call_depth: self.call_depth,
            runtime: self,
        }
    }

    /// Run `f` inside a fresh scope.
    pub fn with_scope<T, F>(&mut self, f: F) -> T
    where
        F: FnOnce(&mut ScopedRuntime<'_>) -> T,
    {
        let mut scoped = self.scoped();
        f(&mut scoped)
    }
}

#[cfg(test)]
mod tests;
