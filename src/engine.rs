//! Top-level engine API.
//!
//! A "detect once, dispatch forever" shape at the API
//! level: [`Engine::create`] does all curve/kernel setup once
//! (`CurveParams::kernel` is already chosen by the time `CurveParams`
//! reaches here; this layer owns the thread pool and the generator's arena
//! slot), and every subsequent `msm` call reuses that state.

use crate::arena::{Arena, GlobalPtr};
use crate::curve::affine::PointAffine;
use crate::curve::projective::PointProjective;
use crate::error::EngineError;
use crate::log::MsmLog;
use crate::msm;
use crate::params::CurveParams;
use crate::rng::deterministic::DeterministicRng;
use crate::scalar::Sc;
use crate::threadpool::Pool;
use std::sync::Arc;

/// Caller-tunable knobs for one `msm` call.
#[derive(Debug, Clone, Copy)]
pub struct MsmOptions {
    /// Window width. `None` defers to `msm::tuning::choose_window`.
    pub c: Option<u32>,
    /// Sub-window width for bucket reduction. Currently unused by
    /// `msm::reduce` (which reduces each window as a single column, see its
    /// module doc comment) but kept on the options struct for source
    /// compatibility with callers that set it anyway.
    pub c0: Option<u32>,
    /// Whether bucket accumulation uses the degenerate-pair-checking path.
    pub use_safe_additions: bool,
}

impl Default for MsmOptions {
    fn default() -> Self {
        MsmOptions { c: None, c0: None, use_safe_additions: true }
    }
}

/// A configured MSM engine for one curve.
pub struct Engine {
    params: Arc<CurveParams>,
    pool: Pool,
    arena: Arena<PointAffine>,
    generator: GlobalPtr<PointAffine>,
}

impl Engine {
    /// Builds the arena, selects the multiplication kernel (already encoded
    /// in `params.kernel`), and stores the generator. Threads are not
    /// started; call [`Engine::start_threads`] before `msm`.
    pub fn create(params: Arc<CurveParams>) -> Self {
        let mut arena = Arena::new();
        let generator = arena.alloc_global(PointAffine::generator(params.clone()));
        Engine { params, pool: Pool::new(), arena, generator }
    }

    /// The curve's generator point.
    pub fn generator(&self) -> &PointAffine {
        self.arena.get_global(self.generator)
    }

    /// Starts `threads` workers. Spec.md §7: starting an already-started
    /// pool is a configuration error.
    pub fn start_threads(&mut self, threads: usize) -> Result<(), EngineError> {
        self.pool.start(threads)
    }

    /// Tears down the worker pool; subsequent `msm` calls run single-threaded.
    pub fn stop_threads(&mut self) {
        self.pool.stop();
    }

    /// Computes `sum(scalars[i] * points[i])`.
    ///
    /// `points` and `scalars` must be the same length — and equal to `n` —
    /// or [`EngineError::LengthMismatch`] is returned.
    #[tracing::instrument(skip(self, points, scalars), fields(n))]
    pub fn msm(
        &self,
        scalars: &[Sc],
        points: &[PointAffine],
        n: usize,
        opts: MsmOptions,
    ) -> Result<(PointProjective, MsmLog), EngineError> {
        if points.len() != scalars.len() || points.len() != n {
            return Err(EngineError::LengthMismatch { points: points.len(), scalars: scalars.len() });
        }
        let c = opts.c.unwrap_or_else(|| msm::tuning::choose_window(n.max(1)).0);
        let params = self.params.clone();
        let (points, scalars) = (points.to_vec(), scalars.to_vec());
        Ok(self.pool.phase(move || msm::run(&points, &scalars, c, opts.use_safe_additions, params)))
    }

    /// `msm` with `opts.use_safe_additions = false`.
    pub fn msm_unsafe(
        &self,
        scalars: &[Sc],
        points: &[PointAffine],
        n: usize,
        opts: MsmOptions,
    ) -> Result<(PointProjective, MsmLog), EngineError> {
        self.msm(scalars, points, n, MsmOptions { use_safe_additions: false, ..opts })
    }

    /// `n` points of the form `r * G` for random scalars `r`, for
    /// tests/benches only. `seed` makes the sequence reproducible.
    pub fn random_points_fast(&self, n: usize, seed: u64) -> Vec<PointAffine> {
        self.random_scalars(n, seed)
            .iter()
            .map(|s| scalar_mul(self.generator(), s).to_affine())
            .collect()
    }

    /// `n` uniformly random scalars `< q`, reproducible from `seed`.
    pub fn random_scalars(&self, n: usize, seed: u64) -> Vec<Sc> {
        let mut rng = DeterministicRng::from_seed(seed);
        (0..n)
            .map(|_| loop {
                let mut bytes = [0u8; 32];
                rng.fill_bytes(&mut bytes);
                let value = crate::params::bytes_be_to_u256(&bytes);
                if crate::params::u256_lt(&value, &self.params.group_order) {
                    return Sc::from_canonical(value, self.params.clone());
                }
            })
            .collect()
    }

    /// Projects a Jacobian point to affine.
    pub fn to_affine(&self, p: &PointProjective) -> PointAffine {
        p.to_affine()
    }

    /// Encodes an affine point's coordinates as big-endian canonical bytes,
    /// for tests/benches comparing against an arbitrary-precision reference.
    pub fn to_bigint(&self, p: &PointAffine) -> ([u8; 32], [u8; 32], bool) {
        (p.x.to_canonical_bytes(), p.y.to_canonical_bytes(), p.infinity)
    }

    /// The curve parameters this engine was created with.
    pub fn params(&self) -> &Arc<CurveParams> {
        &self.params
    }
}

/// Double-and-add scalar multiplication, used as the independent reference
/// path for `random_points_fast` and for checking `msm([s],[G]) == s*G`.
pub fn scalar_mul(point: &PointAffine, scalar: &Sc) -> PointProjective {
    let params = point.x.params_arc();
    let mut acc = PointProjective::identity(params.clone());
    let base = PointProjective::from_affine(point, params);
    for bit in (0..256).rev() {
        acc = acc.double();
        if scalar.extract_bit_slice(bit, 1) == 1 {
            acc = acc.add(&base);
        }
    }
    acc
}
