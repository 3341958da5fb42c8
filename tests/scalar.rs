//! Scalar-layer property tests: GLV decomposition and signed-window
//! recoding.

use msm_engine::bigint;
use msm_engine::params::{bytes_be_to_u256, CurveParams, U256};
use msm_engine::scalar::{signed_window_digits, Sc};
use proptest::prelude::*;

fn params() -> std::sync::Arc<CurveParams> {
    CurveParams::test_curve()
}

fn scalar_from_seed(lo: u64, hi: u64) -> Sc {
    let p = params();
    // group_order's top word is non-zero, so any 128-bit value is < q.
    let value: U256 = [lo, hi, 0, 0];
    Sc::from_canonical(value, p)
}

fn value_of(s: &Sc) -> U256 {
    bytes_be_to_u256(&s.to_bytes_be())
}

/// `2^exp mod q`, built by repeated doubling so windowed-digit weights of
/// any magnitude can be checked without risking a fixed-width overflow.
fn pow2_mod(exp: u32, q: &U256) -> U256 {
    let mut acc: U256 = [1, 0, 0, 0];
    for _ in 0..exp {
        acc = bigint::double_mod(&acc, q);
    }
    acc
}

proptest! {
    #[test]
    fn decompose_satisfies_defining_equation(lo in any::<u64>(), hi in any::<u64>()) {
        let p = params();
        let s = scalar_from_seed(lo, hi);
        let (s0, s1) = s.decompose();

        let lambda_s1 = bigint::mul_mod(&p.lambda, &value_of(&s1), &p.group_order);
        let rebuilt = bigint::add_mod(&value_of(&s0), &lambda_s1, &p.group_order);

        prop_assert_eq!(rebuilt, value_of(&s));
    }

    #[test]
    fn decompose_halves_bit_length(lo in any::<u64>(), hi in any::<u64>()) {
        let s = scalar_from_seed(lo, hi);
        let (_, s1) = s.decompose();
        // s1 is the top 128 bits of a value below q (~255 bits), so it
        // must fit comfortably under 2^128.
        let v = value_of(&s1);
        prop_assert_eq!(v[2], 0);
        prop_assert_eq!(v[3], 0);
    }

    #[test]
    fn signed_window_digits_recompose_the_scalar(lo in any::<u64>(), hi in any::<u64>()) {
        let p = params();
        let s = scalar_from_seed(lo, hi);
        let c = 16u32;
        let bits = 128u32;
        let digits = signed_window_digits(&s, c, bits);

        let mut acc: U256 = [0, 0, 0, 0];
        for (i, d) in digits.iter().enumerate() {
            let weight = pow2_mod((c * i as u32) as u32, &p.group_order);
            let magnitude: U256 = [d.magnitude as u64, 0, 0, 0];
            let term = bigint::mul_mod(&magnitude, &weight, &p.group_order);
            acc = if d.negative {
                bigint::sub_mod(&acc, &term, &p.group_order)
            } else {
                bigint::add_mod(&acc, &term, &p.group_order)
            };
        }

        prop_assert_eq!(acc, value_of(&s));
    }
}

#[test]
fn decompose_zero_is_zero_zero() {
    let p = params();
    let zero = Sc::from_canonical([0, 0, 0, 0], p);
    let (s0, s1) = zero.decompose();
    assert_eq!(value_of(&s0), [0, 0, 0, 0]);
    assert_eq!(value_of(&s1), [0, 0, 0, 0]);
}
