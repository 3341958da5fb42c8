//! Batch affine addition: amortizes the one inversion Montgomery's trick
//! needs (`field::batch_inverse`) across an entire round of pairwise sums,
//! the same trade the bucket accumulation stage leans on to avoid a
//! per-point inversion. Grounded on `field::batch_inverse` plus the
//! mixed-addition shape used by arkworks' `VariableBaseMSM::msm` bucket
//! loop, adapted here from Jacobian-mixed-affine back to pure affine pairs.

use super::affine::{add_affine, double_affine, PointAffine};
use super::projective::PointProjective;
use crate::field::{batch_inverse, Fe};
use crate::params::CurveParams;
use std::sync::Arc;

/// Adds `pairs[i].0 + pairs[i].1` for every pair in one batch-inverted pass.
///
/// `safe` controls how degenerate pairs (`p == q`, `p == -q`, either
/// infinite) are handled:
/// - `true` (the engine's `use_safe_additions` option): each degenerate pair is
///   detected and routed through [`PointProjective`] addition instead,
///   so the result is correct for arbitrary input.
/// - `false`: degenerate pairs are *not* checked; the caller must already
///   know every pair is a genuine, non-doubling, non-identity addition
///   (true by construction in the common case where bucket inputs are
///   drawn from distinct points with independent random scalars).
///   Violating this silently produces a wrong point instead of panicking.
pub fn batch_add(pairs: &[(PointAffine, PointAffine)], safe: bool) -> Vec<PointAffine> {
    if pairs.is_empty() {
        return Vec::new();
    }
    let params = pairs[0].0.x.params_arc();

    if safe {
        return batch_add_safe(pairs, &params);
    }

    let mut denom: Vec<Fe> = pairs.iter().map(|(p, q)| q.x.sub(&p.x)).collect();
    batch_inverse(&mut denom);

    pairs
        .iter()
        .zip(denom.iter())
        .map(|((p, q), inv_dx)| add_affine(p, q, inv_dx))
        .collect()
}

fn batch_add_safe(pairs: &[(PointAffine, PointAffine)], params: &Arc<CurveParams>) -> Vec<PointAffine> {
    // Degenerate pairs (equal x, or either infinite) get a zero denominator
    // placeholder here and are recomputed below via projective addition;
    // `batch_inverse` leaves zero entries untouched rather than aborting.
    let mut denom: Vec<Fe> = pairs
        .iter()
        .map(|(p, q)| {
            if p.infinity || q.infinity {
                Fe::zero(params.clone())
            } else {
                q.x.sub(&p.x)
            }
        })
        .collect();
    batch_inverse(&mut denom);

    pairs
        .iter()
        .zip(denom.iter())
        .map(|((p, q), inv_dx)| {
            if p.infinity {
                return q.clone();
            }
            if q.infinity {
                return p.clone();
            }
            if p.x.eq(&q.x) {
                let jp = PointProjective::from_affine(p, params.clone());
                let jq = PointProjective::from_affine(q, params.clone());
                return jp.add(&jq).to_affine();
            }
            add_affine(p, q, inv_dx)
        })
        .collect()
}

/// Doubles every point in `points` in one batch-inverted pass (inverting
/// `2y` for each). Points at infinity double to infinity without entering
/// the batch inversion.
pub fn batch_double(points: &[PointAffine]) -> Vec<PointAffine> {
    if points.is_empty() {
        return Vec::new();
    }
    let params = points[0].x.params_arc();
    let mut denom: Vec<Fe> = points
        .iter()
        .map(|p| if p.infinity { Fe::zero(params.clone()) } else { p.y.add(&p.y) })
        .collect();
    batch_inverse(&mut denom);

    points
        .iter()
        .zip(denom.iter())
        .map(|(p, inv_2y)| if p.infinity { p.clone() } else { double_affine(p, inv_2y) })
        .collect()
}
