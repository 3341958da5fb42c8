//! Projective (Jacobian) short-Weierstrass points.
//!
//! Jacobian coordinates `(X:Y:Z)` with affine `x = X/Z^2`, `y = Y/Z^3`;
//! `Z = 0` is the point at infinity. Used wherever a per-addition
//! inversion would be too costly to batch away — the bucket reduction
//! reduce and final combine stages accumulate a small, varying number
//! of points and don't get the large, uniform batches `curve::batch`
//! needs to pay off.
//!
//! [`PointProjective::add`] and [`PointProjective::double`] are the
//! standard `a = 0` Jacobian addition/doubling laws (the curve25519-style
//! "field-ops-first, branch-on-coordinates-only-for-the-degenerate-cases"
//! shape `signatures::ed25519::group` also follows for its own projective
//! representation, adapted here from twisted Edwards to short
//! Weierstrass).

use crate::field::Fe;
use crate::params::CurveParams;
use std::sync::Arc;

/// A point on `y^2 = x^3 + b` in Jacobian coordinates.
#[derive(Clone)]
pub struct PointProjective {
    pub x: Fe,
    pub y: Fe,
    pub z: Fe,
}

impl PointProjective {
    /// The point at infinity.
    pub fn identity(params: Arc<CurveParams>) -> Self {
        PointProjective {
            x: Fe::one(params.clone()),
            y: Fe::one(params.clone()),
            z: Fe::zero(params),
        }
    }

    /// Lifts an affine point into Jacobian coordinates.
    pub fn from_affine(p: &crate::curve::affine::PointAffine, params: Arc<CurveParams>) -> Self {
        if p.infinity {
            PointProjective::identity(params)
        } else {
            PointProjective { x: p.x.clone(), y: p.y.clone(), z: Fe::one(params) }
        }
    }

    /// Projects back to affine coordinates using two inversions worth of
    /// work (`z^-1`, then its square/cube). Prefer
    /// `curve::batch::batch_to_affine` when converting many points.
    pub fn to_affine(&self) -> crate::curve::affine::PointAffine {
        if self.z.is_zero() {
            return crate::curve::affine::PointAffine::identity(self.x.params_arc());
        }
        let z_inv = crate::field::inverse::inverse(&self.z);
        let z_inv2 = z_inv.square();
        let z_inv3 = z_inv2.mul(&z_inv);
        crate::curve::affine::PointAffine {
            x: self.x.mul(&z_inv2),
            y: self.y.mul(&z_inv3),
            infinity: false,
        }
    }

    /// Doubles `self` (`a = 0` specialization: `M = 3*X^2`).
    pub fn double(&self) -> PointProjective {
        let params = self.x.params_arc();
        if self.z.is_zero() || self.y.is_zero() {
            return PointProjective::identity(params);
        }

        let xx = self.x.square();
        let yy = self.y.square();
        let yyyy = yy.square();
        let s = self.x.add(&yy).square().sub(&xx).sub(&yyyy);
        let s = s.add(&s); // S = 4*X*Y^2
        let m = xx.add(&xx).add(&xx); // M = 3*X^2 (a = 0)
        let t = m.square().sub(&s).sub(&s); // X3 before assignment
        let x3 = t.clone();
        let eight_yyyy = yyyy.add(&yyyy).add(&yyyy).add(&yyyy).add(&yyyy).add(&yyyy).add(&yyyy).add(&yyyy);
        let y3 = m.mul(&s.sub(&t)).sub(&eight_yyyy);
        let z3 = self.y.mul(&self.z);
        let z3 = z3.add(&z3);

        PointProjective { x: x3, y: y3, z: z3 }
    }

    /// `self + other`, falling back to [`double`] or the identity for the
    /// degenerate cases (`self == other`, either operand infinite).
    pub fn add(&self, other: &PointProjective) -> PointProjective {
        let params = self.x.params_arc();
        if self.z.is_zero() {
            return other.clone();
        }
        if other.z.is_zero() {
            return self.clone();
        }

        let z1z1 = self.z.square();
        let z2z2 = other.z.square();
        let u1 = self.x.mul(&z2z2);
        let u2 = other.x.mul(&z1z1);
        let s1 = self.y.mul(&other.z).mul(&z2z2);
        let s2 = other.y.mul(&self.z).mul(&z1z1);

        if u1.eq(&u2) {
            if !s1.eq(&s2) {
                return PointProjective::identity(params);
            }
            return self.double();
        }

        let h = u2.sub(&u1);
        let i = h.add(&h).square();
        let j = h.mul(&i);
        let r = s2.sub(&s1);
        let r = r.add(&r);
        let v = u1.mul(&i);

        let x3 = r.square().sub(&j).sub(&v).sub(&v);
        let s1j = s1.mul(&j);
        let y3 = r.mul(&v.sub(&x3)).sub(&s1j).sub(&s1j);
        let z3 = self.z.add(&other.z).square().sub(&z1z1).sub(&z2z2).mul(&h);

        PointProjective { x: x3, y: y3, z: z3 }
    }

    /// Additive inverse.
    pub fn neg(&self) -> PointProjective {
        PointProjective { x: self.x.clone(), y: self.y.neg(), z: self.z.clone() }
    }
}
