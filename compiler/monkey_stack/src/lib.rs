//! Recursion guard for the Monkey front end and evaluator.
//!
//! The Pratt parser recurses once per nested sub-expression and the
//! tree-walking evaluator recurses once per nested node and per user
//! function call. Input such as `((((...))))` or a deeply recursive Monkey
//! function would otherwise exhaust the native thread stack.
//!
//! Wrap each recursive step in [`ensure_sufficient_stack`]. On native
//! targets the closure runs on a freshly allocated stack segment when the
//! current one is nearly full; on wasm32 it runs directly.
//!
//! Unbounded user recursion still terminates eventually, by exhausting
//! memory rather than the stack.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if fewer than [`RED_ZONE`] bytes remain.
///
/// ```
/// use monkey_stack::ensure_sufficient_stack;
///
/// fn nesting(depth: u32) -> u32 {
///     ensure_sufficient_stack(|| if depth == 0 { 0 } else { 1 + nesting(depth - 1) })
/// }
///
/// assert_eq!(nesting(1_000), 1_000);
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
