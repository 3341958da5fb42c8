//! Bucket reduction: `P_k = sum_{l=1}^{L} l * bucket[k][l]`.
//!
//! The running-sum/triangle technique turns the weighted sum into `O(L)`
//! projective additions instead of `O(L log L)` scalar multiplications:
//! walking labels from `L` down to `1`, `running` accumulates the suffix
//! sum and `triangle` accumulates the sum of `running` — which is exactly
//! `sum_l l * bucket[l]`. A production reducer would further split each
//! window into column slices of width `~totalWork / nThreads` reduced by
//! independent workers; here that split is the window itself (already the
//! unit of `rayon` parallelism one level up in `msm::run`), so each window
//! reduces as a single column rather than a further sub-split — an
//! acceptable collapse once thread-level parallelism is already expressed
//! as "one rayon task per window" (see `DESIGN.md`).

use crate::curve::affine::PointAffine;
use crate::curve::projective::PointProjective;
use std::sync::Arc;

/// Reduces one window's bucket sums into its partition sum `P_k`.
pub fn reduce_window(bucket_sums: &[PointAffine], params: &Arc<crate::params::CurveParams>) -> PointProjective {
    let mut running = PointProjective::identity(params.clone());
    let mut triangle = PointProjective::identity(params.clone());

    for bucket in bucket_sums.iter().rev() {
        let as_proj = PointProjective::from_affine(bucket, params.clone());
        running = running.add(&as_proj);
        triangle = triangle.add(&running);
    }

    triangle
}

/// Reduces every window's bucket sums, in parallel, into one partition sum
/// per window.
pub fn reduce_all(
    windows: &[Vec<PointAffine>],
    params: &Arc<crate::params::CurveParams>,
) -> Vec<PointProjective> {
    use rayon::prelude::*;
    windows.par_iter().map(|bucket_sums| reduce_window(bucket_sums, params)).collect()
}
