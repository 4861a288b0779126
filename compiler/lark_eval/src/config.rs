//! Runtime configuration.

/// Evaluation policy for a [`Runtime`](crate::Runtime).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalConfig {
    /// Maximum number of nested function calls, or `None` for no limit.
    ///
    /// Without a limit, runaway recursion is bounded only by memory: the
    /// evaluator grows the native stack as needed.
    pub max_call_depth: Option<usize>,
}

impl EvalConfig {
    #[must_use]
    pub fn with_max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = Some(depth);
        self
    }
}
