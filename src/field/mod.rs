//! Prime field arithmetic over a runtime-supplied ~255-bit modulus.
//!
//! Unlike `signatures::ed25519::field`, which is hard-coded to
//! `2^255 - 19`, [`Fe`] carries its modulus alongside its limbs via
//! [`crate::params::CurveParams`] so the same kernel serves any curve the
//! caller configures. The limb layout and Montgomery reduction are exactly
//! [`kernel`]/[`limb51`]; this module adds the field-level operations
//! (equality, ordering, batch inversion, square roots) on top.

pub mod inverse;
pub mod kernel;
pub mod limb51;
pub mod sqrt;

use crate::params::CurveParams;
use limb51::{carry_propagate, Limbs, LIMBS};
use std::sync::Arc;

/// A field element in Montgomery form, tied to the [`CurveParams`] it was
/// created from.
///
/// "Weakly reduced" per the module invariant: each limb fits in 51 bits and
/// the represented integer is `< p + 2^204`, but may not be the canonical
/// representative in `[0, p)` until [`Fe::fully_reduce`] is called. All
/// arithmetic below accepts and returns weakly reduced values; only
/// encoding to bytes and equality comparisons require a full reduction.
#[derive(Clone)]
pub struct Fe {
    pub(crate) limbs: Limbs,
    pub(crate) params: Arc<CurveParams>,
}

impl Fe {
    /// Wraps already-Montgomery-form, weakly reduced limbs.
    pub fn from_limbs(limbs: Limbs, params: Arc<CurveParams>) -> Self {
        Fe { limbs, params }
    }

    /// Returns a clone of the [`CurveParams`] this element belongs to.
    pub fn params_arc(&self) -> Arc<CurveParams> {
        self.params.clone()
    }

    /// The additive identity.
    pub fn zero(params: Arc<CurveParams>) -> Self {
        Fe { limbs: [0; LIMBS], params }
    }

    /// The multiplicative identity, in Montgomery form (`R mod p`).
    pub fn one(params: Arc<CurveParams>) -> Self {
        let limbs = params.montgomery_r;
        Fe { limbs, params }
    }

    /// Converts a big-endian byte array (standard integer encoding, not
    /// Montgomery form) into a field element.
    ///
    /// Panics if `bytes` does not represent a value `< p`; callers reading
    /// untrusted input should validate with [`CurveParams::fits_modulus`]
    /// first (§7: this is a genuine precondition violation, not a
    /// recoverable error, since a non-canonical scalar of this size
    /// indicates caller misuse rather than malformed network input).
    pub fn from_canonical_bytes(bytes: &[u8; 32], params: Arc<CurveParams>) -> Self {
        let value = crate::params::bytes_be_to_u256(bytes);
        debug_assert!(
            crate::params::u256_lt(&value, &params.modulus_u256),
            "field element must be canonical, i.e. < p"
        );
        let limbs = crate::params::u256_to_limbs51(&value);
        let mont = to_montgomery(&limbs, &params);
        Fe { limbs: mont, params }
    }

    /// Encodes this element as big-endian canonical bytes (out of
    /// Montgomery form, fully reduced).
    pub fn to_canonical_bytes(&self) -> [u8; 32] {
        let standard = from_montgomery(&self.limbs, &self.params);
        let mut reduced = standard;
        reduce_full(&mut reduced, &self.params);
        crate::params::limbs51_to_bytes_be(&reduced)
    }

    /// `self + other`, weakly reduced.
    pub fn add(&self, other: &Fe) -> Fe {
        let mut out = [0u64; LIMBS];
        for i in 0..LIMBS {
            out[i] = self.limbs[i] + other.limbs[i];
        }
        carry_propagate(&mut out, &self.params.montgomery_r);
        reduce_weak(&mut out, &self.params);
        Fe { limbs: out, params: self.params.clone() }
    }

    /// `self - other`, weakly reduced. Adds a multiple of `p` before
    /// subtracting so limbs never underflow `u64`.
    pub fn sub(&self, other: &Fe) -> Fe {
        let mut out = [0u64; LIMBS];
        for i in 0..LIMBS {
            // `2p` bias guarantees non-negativity regardless of how the
            // two weakly-reduced operands compare limb-by-limb.
            out[i] = self.limbs[i] + 2 * self.params.modulus_limbs[i] - other.limbs[i];
        }
        carry_propagate(&mut out, &self.params.montgomery_r);
        reduce_weak(&mut out, &self.params);
        Fe { limbs: out, params: self.params.clone() }
    }

    /// Additive inverse.
    pub fn neg(&self) -> Fe {
        Fe::zero(self.params.clone()).sub(self)
    }

    /// `self * other` via the curve's configured [`kernel::KernelKind`].
    pub fn mul(&self, other: &Fe) -> Fe {
        let mont_params = self.params.montgomery_params();
        let limbs = self.params.kernel.mul(&mont_params, &self.limbs, &other.limbs);
        Fe { limbs, params: self.params.clone() }
    }

    /// `self * self`.
    pub fn square(&self) -> Fe {
        self.mul(self)
    }

    /// `self^e mod p` via left-to-right binary exponentiation.
    pub fn pow(&self, exponent: &[u64]) -> Fe {
        let mut acc = Fe::one(self.params.clone());
        for &word in exponent.iter().rev() {
            for bit in (0..64).rev() {
                acc = acc.square();
                if (word >> bit) & 1 == 1 {
                    acc = acc.mul(self);
                }
            }
        }
        acc
    }

    /// `true` iff the fully reduced value is zero.
    pub fn is_zero(&self) -> bool {
        let mut standard = from_montgomery(&self.limbs, &self.params);
        reduce_full(&mut standard, &self.params);
        standard.iter().all(|&l| l == 0)
    }

    /// Constant-structure equality: compares fully reduced canonical forms.
    pub fn eq(&self, other: &Fe) -> bool {
        let mut a = from_montgomery(&self.limbs, &self.params);
        let mut b = from_montgomery(&other.limbs, &other.params);
        reduce_full(&mut a, &self.params);
        reduce_full(&mut b, &other.params);
        a == b
    }

    /// `true` iff `self`'s canonical value is strictly greater than
    /// `other`'s, comparing limbs from the most significant down.
    pub fn is_greater(&self, other: &Fe) -> bool {
        let mut a = from_montgomery(&self.limbs, &self.params);
        let mut b = from_montgomery(&other.limbs, &other.params);
        reduce_full(&mut a, &self.params);
        reduce_full(&mut b, &other.params);
        for i in (0..LIMBS).rev() {
            if a[i] != b[i] {
                return a[i] > b[i];
            }
        }
        false
    }

    /// Forces this element into its canonical representative `< p` in
    /// place, collapsing the weakly-reduced invariant to the strict one.
    pub fn fully_reduce(&mut self) {
        let mut standard = from_montgomery(&self.limbs, &self.params);
        reduce_full(&mut standard, &self.params);
        self.limbs = to_montgomery(&standard, &self.params);
    }
}

/// Converts standard-form limbs into Montgomery form: `x * R mod p`.
pub(crate) fn to_montgomery(x: &Limbs, params: &CurveParams) -> Limbs {
    let mont_params = params.montgomery_params();
    params.kernel.mul(&mont_params, x, &params.montgomery_r2)
}

/// Converts Montgomery-form limbs back to standard form: `x * R^-1 mod p`.
pub(crate) fn from_montgomery(x: &Limbs, params: &CurveParams) -> Limbs {
    let mont_params = params.montgomery_params();
    let one_std = {
        let mut l = [0u64; LIMBS];
        l[0] = 1;
        l
    };
    params.kernel.mul(&mont_params, x, &one_std)
}

/// Subtracts `p` once if `limbs >= p`. `carry_propagate` leaves `limbs`
/// `< 2^255`, comfortably under `2p`, so a single conditional subtraction
/// always lands back under `p`. Cheap enough to call after every add/sub.
fn reduce_weak(limbs: &mut Limbs, params: &CurveParams) {
    if limbs_geq(limbs, &params.modulus_limbs) {
        borrow_sub(limbs, &params.modulus_limbs);
    }
}

/// Repeatedly subtracts `p` until `limbs < p`. Only needed where the
/// strict invariant is required (encoding, equality, ordering); the hot
/// arithmetic path only ever needs [`reduce_weak`].
fn reduce_full(limbs: &mut Limbs, params: &CurveParams) {
    while limbs_geq(limbs, &params.modulus_limbs) {
        borrow_sub(limbs, &params.modulus_limbs);
    }
}

fn limbs_geq(a: &Limbs, b: &Limbs) -> bool {
    for i in (0..LIMBS).rev() {
        if a[i] != b[i] {
            return a[i] > b[i];
        }
    }
    true
}

fn borrow_sub(a: &mut Limbs, b: &Limbs) {
    let mut borrow: i64 = 0;
    for i in 0..LIMBS {
        let diff = a[i] as i64 - b[i] as i64 - borrow;
        if diff < 0 {
            a[i] = (diff + (1i64 << limb51::LIMB_BITS)) as u64;
            borrow = 1;
        } else {
            a[i] = diff as u64;
            borrow = 0;
        }
    }
    debug_assert_eq!(borrow, 0, "borrow_sub called on a < b");
}

/// Batch-inverts `values` in place using Montgomery's trick: one field
/// inversion plus `3n` multiplications instead of `n` inversions.
///
/// Any zero element in the batch is left as zero (matching the
/// single-element [`inverse::inverse`] convention) rather than aborting
/// the whole batch — a single degenerate point should not poison an
/// otherwise-valid accumulation pass.
pub fn batch_inverse(values: &mut [Fe]) {
    if values.is_empty() {
        return;
    }
    let params = values[0].params.clone();
    let n = values.len();
    let mut prefix: Vec<Fe> = Vec::with_capacity(n);
    let mut acc = Fe::one(params.clone());
    for v in values.iter() {
        if v.is_zero() {
            prefix.push(acc.clone());
        } else {
            acc = acc.mul(v);
            prefix.push(acc.clone());
        }
    }

    let mut inv = inverse::inverse(&acc);

    for i in (0..n).rev() {
        if values[i].is_zero() {
            continue;
        }
        let prev = if i == 0 { Fe::one(params.clone()) } else { prefix[i - 1].clone() };
        let vi_inv = inv.mul(&prev);
        inv = inv.mul(&values[i]);
        values[i] = vi_inv;
    }
}
