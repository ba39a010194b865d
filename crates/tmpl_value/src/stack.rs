//! Stack headroom for recursive walks over nested values.
//!
//! Template authors can nest arrays and objects as deeply as they like.
//! Equality, token conversion and serialization all recurse one level per
//! nesting step, and each step enters through [`ensure_sufficient_stack`].

/// Headroom below which the next level moves to a fresh segment.
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 128 * 1024;

/// Size of a freshly allocated segment.
#[cfg(not(target_arch = "wasm32"))]
const SEGMENT: usize = 1024 * 1024;

/// Run one level of a structural walk.
///
/// On native targets the walk continues on a new `SEGMENT`-sized stack when
/// less than `RED_ZONE` remains. On wasm32 the runtime owns the stack and
/// `walk` runs in place.
#[inline]
pub fn ensure_sufficient_stack<R>(walk: impl FnOnce() -> R) -> R {
    #[cfg(not(target_arch = "wasm32"))]
    {
        stacker::maybe_grow(RED_ZONE, SEGMENT, walk)
    }
    #[cfg(target_arch = "wasm32")]
    {
        walk()
    }
}
