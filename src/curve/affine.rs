//! Affine short-Weierstrass points and batch-friendly mixed addition.
//!
//! `signatures::ed25519::group`/`ge` split twisted-Edwards points the same
//! way: one representation for storage/output (here, affine), one for the
//! hot accumulation loop (`super::projective`). The addition law below is
//! the textbook affine formula, but takes the `1/(x2-x1)` (or `1/(2y)` for
//! doubling) denominator as a precomputed input rather than calling
//! `field::inverse::inverse` itself — callers batch-invert denominators
//! across many pairs at once (`super::batch`) since a single inversion
//! dominates a whole accumulation round otherwise.

use crate::field::Fe;
use crate::params::CurveParams;
use std::sync::Arc;

/// A point on `y^2 = x^3 + b` in affine coordinates, or the identity.
#[derive(Clone)]
pub struct PointAffine {
    pub x: Fe,
    pub y: Fe,
    pub infinity: bool,
}

impl PointAffine {
    /// The point at infinity (additive identity).
    pub fn identity(params: Arc<CurveParams>) -> Self {
        PointAffine { x: Fe::zero(params.clone()), y: Fe::zero(params), infinity: true }
    }

    /// The curve's configured generator.
    pub fn generator(params: Arc<CurveParams>) -> Self {
        PointAffine {
            x: Fe::from_limbs(params.generator_x_mont, params.clone()),
            y: Fe::from_limbs(params.generator_y_mont, params.clone()),
            infinity: false,
        }
    }

    /// `true` iff `self` and `other` have equal coordinates (or are both
    /// the point at infinity).
    pub fn eq(&self, other: &PointAffine) -> bool {
        match (self.infinity, other.infinity) {
            (true, true) => true,
            (true, false) | (false, true) => false,
            (false, false) => self.x.eq(&other.x) && self.y.eq(&other.y),
        }
    }

    /// `-self`.
    pub fn neg(&self) -> PointAffine {
        PointAffine { x: self.x.clone(), y: self.y.neg(), infinity: self.infinity }
    }
}

/// Adds two distinct, non-identity affine points given the precomputed
/// inverse of their x-coordinate difference (`1 / (q.x - p.x)`).
///
/// Callers must ensure `p.x != q.x` (i.e. `q != p` and `q != -p`); mixed
/// batches that might contain such collisions fall back to
/// [`super::projective`] addition instead (the `use_safe_additions` toggle
/// selects that fallback globally).
pub fn add_affine(p: &PointAffine, q: &PointAffine, inv_dx: &Fe) -> PointAffine {
    debug_assert!(!p.infinity && !q.infinity, "add_affine requires non-identity operands");
    let lambda = q.y.sub(&p.y).mul(inv_dx);
    let x3 = lambda.square().sub(&p.x).sub(&q.x);
    let y3 = lambda.mul(&p.x.sub(&x3)).sub(&p.y);
    PointAffine { x: x3, y: y3, infinity: false }
}

/// Doubles an affine point given the precomputed inverse of `2y`.
pub fn double_affine(p: &PointAffine, inv_2y: &Fe) -> PointAffine {
    debug_assert!(!p.infinity, "double_affine requires a non-identity operand");
    let params = p.x.params_arc();
    let one = Fe::one(params.clone());
    let three = one.add(&one).add(&one);
    let lambda = three.mul(&p.x.square()).mul(inv_2y);
    let x3 = lambda.square().sub(&p.x).sub(&p.x);
    let y3 = lambda.mul(&p.x.sub(&x3)).sub(&p.y);
    PointAffine { x: x3, y: y3, infinity: false }
}
