//! Field-layer property and scenario tests.

use msm_engine::bigint;
use msm_engine::field::limb51::{mul_fallback, mul_fma};
use msm_engine::field::{batch_inverse, inverse::inverse, sqrt::sqrt, Fe};
use msm_engine::params::{u256_lt, u256_to_bytes_be, u256_to_limbs51, CurveParams, U256};
use proptest::prelude::*;

fn params() -> std::sync::Arc<CurveParams> {
    CurveParams::test_curve()
}

/// Reduces an arbitrary 256-bit value mod `q` by repeated subtraction.
/// `q` is ~255 bits, so `v < 2^256` needs at most two or three
/// subtractions to land `< q` — cheap enough for property-test inputs.
fn reduce_mod(mut v: U256, q: &U256) -> U256 {
    while !u256_lt(&v, q) {
        v = bigint::sub(&v, q);
    }
    v
}

/// A field element from four arbitrary 64-bit words, covering the full
/// canonical range `[0, p)` (not just values `< 2^64`) so tests actually
/// exercise limb combinations that overflow into the top 51-bit limb.
fn fe_from_words(a: u64, b: u64, c: u64, d: u64, params: std::sync::Arc<CurveParams>) -> Fe {
    let value = reduce_mod([a, b, c, d], &params.modulus_u256);
    let bytes = u256_to_bytes_be(&value);
    Fe::from_canonical_bytes(&bytes, params)
}

/// Standard-form 5x51 limbs for an arbitrary 256-bit value reduced `< p`.
fn limbs_from_words(a: u64, b: u64, c: u64, d: u64, params: &CurveParams) -> [u64; 5] {
    let value = reduce_mod([a, b, c, d], &params.modulus_u256);
    u256_to_limbs51(&value)
}

proptest! {
    #[test]
    fn mul_fma_matches_integer_fallback(
        a0 in any::<u64>(), a1 in any::<u64>(), a2 in any::<u64>(), a3 in any::<u64>(),
        b0 in any::<u64>(), b1 in any::<u64>(), b2 in any::<u64>(), b3 in any::<u64>(),
    ) {
        let p = params();
        let mp = p.montgomery_params();
        let a = limbs_from_words(a0, a1, a2, a3, &p);
        let b = limbs_from_words(b0, b1, b2, b3, &p);

        let via_fma = mul_fma(&mp, &a, &b);
        let via_int = mul_fallback(&mp, &a, &b);
        prop_assert_eq!(via_fma, via_int);
    }

    #[test]
    fn mul_then_inverse_is_one(a0 in any::<u64>(), a1 in any::<u64>(), a2 in any::<u64>(), a3 in any::<u64>()) {
        let p = params();
        let x = fe_from_words(a0, a1, a2, a3, p.clone());
        prop_assume!(!x.is_zero());
        let inv = inverse(&x);
        let mut product = x.mul(&inv);
        product.fully_reduce();
        prop_assert!(product.eq(&Fe::one(p)));
    }

    #[test]
    fn sqrt_of_square_is_a_root(a0 in any::<u64>(), a1 in any::<u64>(), a2 in any::<u64>(), a3 in any::<u64>()) {
        let p = params();
        let x = fe_from_words(a0, a1, a2, a3, p.clone());
        let x2 = x.square();
        match sqrt(&x2) {
            Some(r) => {
                let mut lhs = r.square();
                let mut rhs = x2.clone();
                lhs.fully_reduce();
                rhs.fully_reduce();
                prop_assert!(lhs.eq(&rhs));
            }
            None => prop_assert!(false, "a square must have a root"),
        }
    }

    #[test]
    fn add_sub_roundtrip(
        a0 in any::<u64>(), a1 in any::<u64>(), a2 in any::<u64>(), a3 in any::<u64>(),
        b0 in any::<u64>(), b1 in any::<u64>(), b2 in any::<u64>(), b3 in any::<u64>(),
    ) {
        let p = params();
        let x = fe_from_words(a0, a1, a2, a3, p.clone());
        let y = fe_from_words(b0, b1, b2, b3, p.clone());
        let mut sum = x.add(&y).sub(&y);
        let mut xr = x.clone();
        sum.fully_reduce();
        xr.fully_reduce();
        prop_assert!(sum.eq(&xr));
    }
}

#[test]
fn batch_inverse_matches_pointwise_inverse() {
    let p = params();
    let mut values: Vec<Fe> = (1u64..8)
        .map(|i| fe_from_words(i * 0x1234_5678_9abc_def1, i * 0xdead_beef_cafe_babe, i, !i, p.clone()))
        .collect();
    let expected: Vec<Fe> = values.iter().map(inverse).collect();

    batch_inverse(&mut values);

    for (got, want) in values.iter().zip(expected.iter()) {
        let mut g = got.clone();
        let mut w = want.clone();
        g.fully_reduce();
        w.fully_reduce();
        assert!(g.eq(&w));
    }
}

#[test]
fn sqrt_non_residue_returns_none() {
    let p = params();
    // ts_c_mont = z^q_odd for a non-residue z, so it has order exactly 2^s
    // and is itself never a square (else z would need order 2^(s+1)).
    let c = Fe::from_limbs(p.ts_c_mont, p.clone());
    assert!(sqrt(&c).is_none());
}

#[test]
fn zero_is_its_own_square_root() {
    let p = params();
    let zero = Fe::zero(p);
    let root = sqrt(&zero).expect("zero is a square");
    assert!(root.is_zero());
}

#[test]
fn add_overflows_top_limb_and_still_matches_sub_roundtrip() {
    // A value just under `p`: added to itself, the raw limb-wise sum
    // overflows the top 51-bit limb, which is exactly the case the
    // carry-fold scaling constant must get right.
    let p = params();
    let near_p = bigint::sub(&p.modulus_u256, &[1, 0, 0, 0]);
    let bytes = u256_to_bytes_be(&near_p);
    let x = Fe::from_canonical_bytes(&bytes, p.clone());

    let mut doubled = x.add(&x);
    doubled.fully_reduce();

    let (sum, overflow) = bigint::add(&near_p, &near_p);
    assert!(!overflow, "2*(p-1) fits in 256 bits for this modulus");
    let expected = reduce_mod(sum, &p.modulus_u256);

    let got = msm_engine::params::bytes_be_to_u256(&doubled.to_canonical_bytes());
    assert_eq!(got, expected);
}
