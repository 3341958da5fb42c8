//! Engine-level error types.
//!
//! A small, exhaustive enum rather than a boxed `dyn Error`, using
//! `thiserror` for the `Display`/`std::error::Error` boilerplate.
//! Preconditions this crate treats as unreachable (e.g. inverting zero,
//! indexing past an arena region) stay `debug_assert!`/panics, not variants
//! here — only genuinely recoverable outcomes get a `Result`.

use thiserror::Error;

/// Errors [`crate::engine::Engine`] can return.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// A requested worker count was zero or exceeded the configured limit.
    #[error("invalid thread count: {0}")]
    InvalidThreadCount(usize),

    /// A point or scalar count passed to an MSM call did not match.
    #[error("point count ({points}) does not match scalar count ({scalars})")]
    LengthMismatch {
        /// Number of points supplied.
        points: usize,
        /// Number of scalars supplied.
        scalars: usize,
    },

    /// The requested input size `N` falls outside the engine's configured
    /// tuning table (see `msm::tuning`).
    #[error("input size {0} is outside the supported range")]
    UnsupportedSize(usize),
}
