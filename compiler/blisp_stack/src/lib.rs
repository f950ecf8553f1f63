//! Stack safety for the recursive evaluator.
//!
//! `eval` recurses once per nested S-expression and once per closure call, so a
//! deeply nested program or a deeply recursive user function can run the
//! native stack dry. Every recursive step is wrapped in
//! [`ensure_sufficient_stack`], which grows the stack on demand instead.
//!
//! # Platform Support
//!
//! - **Native targets**: the `stacker` crate allocates a fresh stack segment
//!   when the remaining space drops below the red zone.
//! - **WASM targets**: no-op passthrough.
//!
//! Growth is unbounded here; the interpreter bounds call depth on its
//! own and reports the overflow as an ordinary error value.

/// Remaining stack below which a new segment is allocated (100KB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn eval(&mut self, env: &Environment, value: Value) -> Value {
///     ensure_sufficient_stack(|| self.eval_inner(env, value))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly (WASM has its own stack management).
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
