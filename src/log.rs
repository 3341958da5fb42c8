//! Phase timing for one `Engine::msm` call.
//!
//! `tracing` spans/events are the live telemetry, subscribed to by the
//! caller; [`MsmLog`] is the structured summary every `msm` call returns
//! regardless of whether a subscriber is installed.

use std::time::{Duration, Instant};

/// Per-phase timings for one multi-scalar multiplication.
#[derive(Debug, Clone, Copy, Default)]
pub struct MsmLog {
    /// Number of (point, scalar) pairs processed.
    pub n: usize,
    /// Window width used for this run.
    pub c: u32,
    /// Time spent in the prepare/sort phase.
    pub prepare: Duration,
    /// Time spent accumulating buckets.
    pub accumulate: Duration,
    /// Time spent reducing buckets into per-window sums.
    pub reduce: Duration,
    /// Time spent combining window sums into the final point.
    pub combine: Duration,
}

impl MsmLog {
    /// Total wall time across all four phases.
    pub fn total(&self) -> Duration {
        self.prepare + self.accumulate + self.reduce + self.combine
    }
}

/// Times a phase closure and records it via `tracing::debug!` plus the
/// returned [`Duration`], which the caller folds into an [`MsmLog`] field.
pub(crate) fn timed_phase<R>(phase: &str, n: usize, f: impl FnOnce() -> R) -> (R, Duration) {
    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed();
    tracing::debug!(phase, n, elapsed_us = elapsed.as_micros() as u64, "msm phase complete");
    (result, elapsed)
}
