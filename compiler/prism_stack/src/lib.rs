//! Stack guard for recursion whose depth is chosen by the input.
//!
//! Decoding a serialized tree recurses once per nesting level, and so does
//! every walk over the decoded tree. A buffer can nest as deep as the load
//! limit allows, so each level checks the remaining native stack first and
//! moves onto a fresh segment when it runs low.
//!
//! One decode level is a handful of frames: the node header read, the
//! out-of-line decoder for that kind, and the child reader. Together they
//! stay in the low kilobytes in unoptimized builds. [`RED_ZONE`] leaves room
//! for many such levels, so a level never starts on a nearly exhausted stack.
//!
//! On `wasm32` the guard calls straight through.

/// Stack that must remain before another level starts (1 MiB).
///
/// Sized against the deepest single decode level in a debug build with room
/// to spare for the newline pass and drop glue that run on the same stack.
pub const RED_ZONE: usize = 1024 * 1024;

/// Size of each new stack segment (8 MiB).
///
/// A segment holds well over a thousand decode levels, so the default
/// nesting limit needs only a few segments.
pub const STACK_PER_RECURSION: usize = 8 * 1024 * 1024;

const _: () = assert!(STACK_PER_RECURSION > RED_ZONE);

/// Run `f`, first moving to a new stack segment if less than [`RED_ZONE`]
/// remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// Run `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
