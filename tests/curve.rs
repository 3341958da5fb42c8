//! Curve-layer scenario tests: batch addition/doubling must agree with
//! sequential Jacobian arithmetic.

use msm_engine::curve::batch::{batch_add, batch_double};
use msm_engine::curve::{PointAffine, PointProjective};
use msm_engine::params::CurveParams;

fn params() -> std::sync::Arc<CurveParams> {
    CurveParams::test_curve()
}

#[test]
fn batch_add_matches_sequential_addition() {
    let p = params();
    let g = PointAffine::generator(p.clone());
    let two_g = PointProjective::from_affine(&g, p.clone()).double().to_affine();

    let expected =
        PointProjective::from_affine(&g, p.clone()).add(&PointProjective::from_affine(&two_g, p.clone())).to_affine();

    let got = batch_add(&[(g.clone(), two_g.clone())], true);
    assert!(got[0].eq(&expected));

    let got_unsafe = batch_add(&[(g, two_g)], false);
    assert!(got_unsafe[0].eq(&expected));
}

#[test]
fn batch_double_matches_sequential_doubling() {
    let p = params();
    let g = PointAffine::generator(p.clone());
    let two_g = PointProjective::from_affine(&g, p.clone()).double().to_affine();
    let four_g = PointProjective::from_affine(&two_g, p.clone()).double().to_affine();

    let got = batch_double(&[g, two_g]);
    assert!(got[1].eq(&four_g));
}

#[test]
fn batch_add_safe_handles_identity_operands() {
    let p = params();
    let g = PointAffine::generator(p.clone());
    let id = PointAffine::identity(p.clone());

    let got = batch_add(&[(id.clone(), g.clone())], true);
    assert!(got[0].eq(&g));

    let got = batch_add(&[(g.clone(), id)], true);
    assert!(got[0].eq(&g));
}

#[test]
fn batch_add_safe_handles_doubling_pair() {
    let p = params();
    let g = PointAffine::generator(p.clone());
    let expected = PointProjective::from_affine(&g, p.clone()).double().to_affine();

    let got = batch_add(&[(g.clone(), g)], true);
    assert!(got[0].eq(&expected));
}

#[test]
fn batch_add_safe_handles_inverse_pair() {
    let p = params();
    let g = PointAffine::generator(p.clone());
    let neg_g = g.neg();

    let got = batch_add(&[(g, neg_g)], true);
    assert!(got[0].infinity);
}

#[test]
fn generator_is_on_curve() {
    let p = params();
    let g = PointAffine::generator(p.clone());
    let lhs = g.y.square();
    let rhs = g.x.square().mul(&g.x).add(&msm_engine::field::Fe::from_limbs(p.curve_b_mont, p));
    assert!(lhs.eq(&rhs));
}
