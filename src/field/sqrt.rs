//! Tonelli-Shanks square roots.
//!
//! Mirrors the shape of `signatures::ed25519::field::FieldElement::pow22523`
//! (a fixed addition chain for a field where `p mod 4 == 1`, which also
//! describes our curves): since `p mod 4 == 1` here too, the cheap
//! `p mod 4 == 3` shortcut does not apply and the general algorithm with a
//! precomputed roots-of-unity table is required.
//!
//! The non-residue `z` and `c = z^q_odd mod p` are supplied once via
//! [`crate::params::CurveParams`] (found by Euler's criterion when the
//! parameter set was derived); this module only builds the
//! `c, c^2, c^4, ..., c^(2^(s-1))` table and runs the main loop.

use super::Fe;

/// `Some(r)` with `r^2 == x mod p` if `x` is a quadratic residue (or
/// zero), `None` if `x` is a non-residue — a non-residue input is a
/// recoverable outcome here, not a panic.
pub fn sqrt(x: &Fe) -> Option<Fe> {
    if x.is_zero() {
        return Some(x.clone());
    }

    let params = x.params.clone();
    let legendre = x.pow(&params.ts_q_odd);
    // Euler's criterion: x^((p-1)/2) must be +-1; q_odd * 2^(s-1) == (p-1)/2.
    let mut check = legendre.clone();
    for _ in 0..(params.ts_s - 1) {
        check = check.square();
    }
    if check.eq(&Fe::one(params.clone()).neg()) {
        return None;
    }

    let mut m = params.ts_s;
    let mut c = Fe::from_limbs(params.ts_c_mont, params.clone());
    let mut t = x.pow(&params.ts_q_odd);
    let mut r = {
        // r = x^((q_odd+1)/2); q_odd is odd so (q_odd+1)/2 is an exact
        // integer shift, computed here as (q_odd >> 1) + 1 on the word array.
        let exp = shr1_plus_one(&params.ts_q_odd);
        x.pow(&exp)
    };

    loop {
        if t.eq(&Fe::one(params.clone())) {
            return Some(r);
        }

        // Find the least `i` in (0, m) with t^(2^i) == 1.
        let mut i = 0u32;
        let mut t2i = t.clone();
        while !t2i.eq(&Fe::one(params.clone())) {
            t2i = t2i.square();
            i += 1;
            debug_assert!(i < m, "non-residue slipped past the Euler's criterion check");
        }

        let mut b = c.clone();
        for _ in 0..(m - i - 1) {
            b = b.square();
        }
        m = i;
        c = b.square();
        t = t.mul(&c);
        r = r.mul(&b);
    }
}

/// Computes `(q >> 1) + 1` for an odd 256-bit little-endian word array,
/// i.e. `(q+1)/2` without overflowing into a fifth word.
fn shr1_plus_one(q: &crate::params::U256) -> crate::params::U256 {
    let mut out = [0u64; 4];
    let mut carry = 0u64;
    for i in (0..4).rev() {
        out[i] = (q[i] >> 1) | (carry << 63);
        carry = q[i] & 1;
    }
    out[0] += 1;
    out
}
