//! Fixed worker pool and phase barriers.
//!
//! `Pool` picks a `rayon::ThreadPool` once in `start` and routes every
//! subsequent phase through `pool.install`. Each `phase` call is the
//! bulk-synchronous barrier this engine's concurrency model requires:
//! `rayon::Scope`/`join`/parallel iterators never return control until every
//! spawned unit of work has completed, so the call boundary itself is the
//! barrier — there is no separate `barrier()` primitive to implement.

use crate::error::EngineError;

/// A fixed-size worker pool wrapping a `rayon::ThreadPool`.
///
/// `T = 1` degrades to a pool of one thread rather than a special-cased
/// sequential path — rayon's scheduler still runs, so every contract holds
/// with `T = 1` without a second code path.
pub struct Pool {
    inner: Option<rayon::ThreadPool>,
}

impl Pool {
    /// An unstarted pool. Phases run on the calling thread until
    /// [`Pool::start`] is called.
    pub fn new() -> Self {
        Pool { inner: None }
    }

    /// Starts `threads` workers. Fails if already started.
    pub fn start(&mut self, threads: usize) -> Result<(), EngineError> {
        if self.inner.is_some() {
            return Err(EngineError::InvalidThreadCount(threads));
        }
        if threads == 0 {
            return Err(EngineError::InvalidThreadCount(threads));
        }
        let built = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|_| EngineError::InvalidThreadCount(threads))?;
        self.inner = Some(built);
        Ok(())
    }

    /// Tears the pool down; subsequent phases run on the calling thread.
    pub fn stop(&mut self) {
        self.inner = None;
    }

    /// Runs `f` inside the pool (or on the calling thread if unstarted),
    /// blocking until `f` and everything it spawns completes. This is the
    /// phase barrier: nothing past this call observes partial work from `f`.
    pub fn phase<R: Send>(&self, f: impl FnOnce() -> R + Send) -> R {
        match &self.inner {
            Some(pool) => pool.install(f),
            None => f(),
        }
    }

    /// Splits `[0, n)` into `parts` contiguous, roughly equal ranges.
    pub fn range(&self, n: usize, parts: usize) -> Vec<(usize, usize)> {
        if parts == 0 || n == 0 {
            return Vec::new();
        }
        let chunk = n.div_ceil(parts);
        (0..n)
            .step_by(chunk.max(1))
            .map(|start| (start, (start + chunk).min(n)))
            .collect()
    }

    /// Number of workers currently configured (1 if unstarted).
    pub fn thread_count(&self) -> usize {
        self.inner.as_ref().map(|p| p.current_num_threads()).unwrap_or(1)
    }
}

impl Default for Pool {
    fn default() -> Self {
        Self::new()
    }
}
