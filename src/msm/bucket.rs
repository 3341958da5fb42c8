//! Bucket accumulation via tree-paired batch addition.
//!
//! One formulation walks an explicit doubling stride `m` over a flat
//! bucket array. With buckets represented as `Vec<PointAffine>`
//! ([`super::prepare::Prepared`]) the same tree shape is simpler to express
//! as recursive pairwise folding: each round pairs up adjacent elements
//! *within* every bucket, runs one [`crate::curve::batch::batch_add`] across
//! every pair from every bucket at once (the batch that amortizes the
//! round's single inversion), and carries any odd leftover unchanged into
//! the next round. A bucket of size `n` reaches size 1 after
//! `ceil(log2(n))` rounds — the same work bound as the strided version.

use crate::curve::affine::PointAffine;
use crate::curve::batch::batch_add;
use crate::params::CurveParams;
use std::sync::Arc;

/// Collapses every bucket in every window down to a single sum, returning
/// `sums[window][label - 1]`.
///
/// `safe` is the per-MSM degenerate-pair-checking flag: unsafe (no checks)
/// is appropriate for the first round, where bucket members are
/// statistically independent random points; the caller is expected to pass
/// `true` once collisions become likely (late rounds, adversarial input).
pub fn accumulate_buckets(
    windows: Vec<super::prepare::WindowBuckets>,
    safe: bool,
    params: Arc<CurveParams>,
) -> Vec<Vec<PointAffine>> {
    windows.into_iter().map(|buckets| accumulate_window(buckets, safe, &params)).collect()
}

fn accumulate_window(mut current: Vec<Vec<PointAffine>>, safe: bool, params: &Arc<CurveParams>) -> Vec<PointAffine> {
    loop {
        let max_len = current.iter().map(|b| b.len()).max().unwrap_or(0);
        if max_len <= 1 {
            break;
        }

        let mut pairs: Vec<(PointAffine, PointAffine)> = Vec::new();
        let mut dest: Vec<usize> = Vec::new();
        let mut next: Vec<Vec<PointAffine>> = current.iter().map(|_| Vec::new()).collect();

        for (bi, bucket) in current.into_iter().enumerate() {
            let mut it = bucket.into_iter();
            while let Some(a) = it.next() {
                match it.next() {
                    Some(b) => {
                        pairs.push((a, b));
                        dest.push(bi);
                    }
                    None => next[bi].push(a),
                }
            }
        }

        let results = batch_add(&pairs, safe);
        for (bi, r) in dest.into_iter().zip(results.into_iter()) {
            next[bi].push(r);
        }
        current = next;
    }

    current
        .into_iter()
        .map(|mut b| b.pop().unwrap_or_else(|| PointAffine::identity(params.clone())))
        .collect()
}
