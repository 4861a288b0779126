//! Stack growth for recursive descent.
//!
//! Both the parser (nested `function`/`if` blocks, nested call arguments) and
//! the evaluator (user-level recursion through `InvokeFunction`) recurse on
//! the native stack. Wrapping each recursive step in
//! [`ensure_sufficient_stack`] lets a Lark program recurse as deep as memory
//! allows instead of aborting the process with a stack overflow.
//!
//! A hard limit on user recursion is a runtime policy, not a stack concern;
//! see `EvalConfig::max_call_depth` in `lark_eval`.

/// Run `f`, first growing the stack when the red zone has been reached.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    /// If less than this much stack remains, grow before recursing.
    const RED_ZONE: usize = 128 * 1024;

    /// Size of each newly allocated stack segment.
    const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// wasm32 manages its own stack; just run `f`.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
