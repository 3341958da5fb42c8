//! Horner-style final reduction of partition sums into one point.
//!
//! Deliberately serial: this stage is a negligible fraction of total
//! runtime, so parallelizing it would only add overhead. `K` partition
//! sums fold right-to-left, each step doubling the accumulator `c` times
//! before
//! adding the next partition, which is exactly evaluating
//! `sum_k 2^(c*k) * P_k` by Horner's rule instead of `K` independent
//! scalar multiplications.

use crate::curve::projective::PointProjective;
use crate::params::CurveParams;
use std::sync::Arc;

/// Folds `partitions[0..K]` (one per window, same window order
/// [`super::reduce::reduce_all`] produced) into `sum_k 2^(c*k) * partitions[k]`.
pub fn horner_combine(partitions: &[PointProjective], c: u32, params: &Arc<CurveParams>) -> PointProjective {
    let Some((last, rest)) = partitions.split_last() else {
        return PointProjective::identity(params.clone());
    };
    let mut s = last.clone();
    for partition in rest.iter().rev() {
        for _ in 0..c {
            s = s.double();
        }
        s = s.add(partition);
    }
    s
}
