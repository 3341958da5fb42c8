//! The MSM pipeline: `prepare -> accumulate -> reduce -> combine`.

pub mod bucket;
pub mod combine;
pub mod prepare;
pub mod reduce;
pub mod tuning;

use crate::curve::affine::PointAffine;
use crate::curve::projective::PointProjective;
use crate::log::{timed_phase, MsmLog};
use crate::params::CurveParams;
use crate::scalar::Sc;
use std::sync::Arc;

/// Runs one multi-scalar multiplication, returning the result and phase
/// timings as a `(result, log)` pair.
///
/// `points`/`scalars` must be the same length. `c` is the window width
/// (`tuning::choose_window` picks a default when the caller doesn't
/// override it — see `crate::engine`). `safe` selects
/// [`bucket::accumulate_buckets`]'s degenerate-pair handling.
pub fn run(
    points: &[PointAffine],
    scalars: &[Sc],
    c: u32,
    safe: bool,
    params: Arc<CurveParams>,
) -> (PointProjective, MsmLog) {
    let n = points.len();
    let mut log = MsmLog { n, c, ..Default::default() };

    let (prepared, prepare_time) =
        timed_phase("prepare", n, || prepare::prepare(points, scalars, c, params.clone()));
    log.prepare = prepare_time;

    let windows_per_half = prepared.windows.len() / 2;
    let (bucket_sums, accumulate_time) = timed_phase("accumulate", n, || {
        bucket::accumulate_buckets(prepared.windows, safe, params.clone())
    });
    log.accumulate = accumulate_time;

    let (partitions, reduce_time) =
        timed_phase("reduce", n, || reduce::reduce_all(&bucket_sums, &params));
    log.reduce = reduce_time;

    let (result, combine_time) = timed_phase("combine", n, || {
        let (p0, p1) = partitions.split_at(windows_per_half);
        let s0_sum = combine::horner_combine(p0, c, &params);
        let s1_sum = combine::horner_combine(p1, c, &params);
        s0_sum.add(&s1_sum)
    });
    log.combine = combine_time;

    (result, log)
}
