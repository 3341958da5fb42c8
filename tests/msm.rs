//! End-to-end `Engine::msm` scenarios.

use msm_engine::bigint;
use msm_engine::curve::projective::PointProjective;
use msm_engine::curve::PointAffine;
use msm_engine::engine::{scalar_mul, Engine, MsmOptions};
use msm_engine::params::CurveParams;
use msm_engine::scalar::Sc;

fn params() -> std::sync::Arc<CurveParams> {
    CurveParams::test_curve()
}

fn assert_points_eq(a: &PointProjective, b: &PointProjective) {
    assert!(a.to_affine().eq(&b.to_affine()));
}

/// Independent reference MSM via double-and-add plus projective summation,
/// used to check `Engine::msm` end to end without trusting its own pipeline.
fn reference_msm(points: &[PointAffine], scalars: &[Sc], params: std::sync::Arc<CurveParams>) -> PointProjective {
    let mut acc = PointProjective::identity(params);
    for (p, s) in points.iter().zip(scalars.iter()) {
        acc = acc.add(&scalar_mul(p, s));
    }
    acc
}

#[test]
fn single_zero_scalar_is_identity() {
    let p = params();
    let engine = Engine::create(p.clone());
    let g = engine.generator().clone();
    let zero = Sc::from_canonical([0, 0, 0, 0], p);

    let (result, _log) = engine.msm(&[zero], &[g], 1, MsmOptions::default()).unwrap();
    assert!(result.to_affine().infinity);
}

#[test]
fn opposite_scalars_on_the_same_point_cancel() {
    let p = params();
    let engine = Engine::create(p.clone());
    let g = engine.generator().clone();

    let one = Sc::from_canonical([1, 0, 0, 0], p.clone());
    let minus_one = Sc::from_canonical(bigint::sub(&p.group_order, &[1, 0, 0, 0]), p.clone());

    let (result, _log) =
        engine.msm(&[one, minus_one], &[g.clone(), g], 2, MsmOptions::default()).unwrap();
    assert!(result.to_affine().infinity);
}

#[test]
fn identity_points_are_skipped() {
    let p = params();
    let engine = Engine::create(p.clone());
    let g = engine.generator().clone();
    let id = PointAffine::identity(p.clone());

    let one = Sc::from_canonical([1, 0, 0, 0], p.clone());
    let seven = Sc::from_canonical([7, 0, 0, 0], p.clone());

    let (with_identity, _) =
        engine.msm(&[one.clone(), seven.clone()], &[id, g.clone()], 2, MsmOptions::default()).unwrap();
    let (without_identity, _) = engine.msm(&[seven], &[g], 1, MsmOptions::default()).unwrap();

    assert_points_eq(&with_identity, &without_identity);
}

#[test]
fn scalar_at_group_order_minus_one_does_not_overflow_windows() {
    let p = params();
    let engine = Engine::create(p.clone());
    let g = engine.generator().clone();
    let max_scalar = Sc::from_canonical(bigint::sub(&p.group_order, &[1, 0, 0, 0]), p.clone());

    let (result, _log) = engine.msm(&[max_scalar.clone()], &[g.clone()], 1, MsmOptions::default()).unwrap();
    let expected = scalar_mul(&g, &max_scalar);
    assert_points_eq(&result, &expected);
}

#[test]
fn length_mismatch_is_an_error() {
    let p = params();
    let engine = Engine::create(p);
    let g = engine.generator().clone();
    let err = engine.msm(&[], &[g], 1, MsmOptions::default()).unwrap_err();
    assert_eq!(err, msm_engine::EngineError::LengthMismatch { points: 1, scalars: 0 });
}

#[test]
fn matches_reference_single_threaded() {
    let p = params();
    let engine = Engine::create(p.clone());
    let n = 257;
    let scalars = engine.random_scalars(n, 0x5eed_0001);
    let points = engine.random_points_fast(n, 0x5eed_0002);

    let (result, log) = engine.msm(&scalars, &points, n, MsmOptions::default()).unwrap();
    let expected = reference_msm(&points, &scalars, p);

    assert_points_eq(&result, &expected);
    assert_eq!(log.n, n);
}

#[test]
fn matches_reference_multi_threaded() {
    let p = params();
    let mut engine = Engine::create(p.clone());
    engine.start_threads(4).unwrap();

    let n = 1024;
    let scalars = engine.random_scalars(n, 0xc0ffee01);
    let points = engine.random_points_fast(n, 0xc0ffee02);

    let (result, _log) = engine.msm(&scalars, &points, n, MsmOptions::default()).unwrap();
    let expected = reference_msm(&points, &scalars, p);

    assert_points_eq(&result, &expected);
}

#[test]
fn unsafe_additions_match_safe_additions_on_independent_points() {
    let p = params();
    let engine = Engine::create(p.clone());
    let n = 300;
    let scalars = engine.random_scalars(n, 0xaaaa_bbbb);
    let points = engine.random_points_fast(n, 0xcccc_dddd);

    let (safe, _) = engine.msm(&scalars, &points, n, MsmOptions::default()).unwrap();
    let (unsafe_result, _) = engine.msm_unsafe(&scalars, &points, n, MsmOptions::default()).unwrap();

    assert_points_eq(&safe, &unsafe_result);
}

#[test]
fn explicit_window_width_is_honored() {
    let p = params();
    let engine = Engine::create(p.clone());
    let n = 64;
    let scalars = engine.random_scalars(n, 7);
    let points = engine.random_points_fast(n, 8);

    let opts = MsmOptions { c: Some(6), ..MsmOptions::default() };
    let (result, log) = engine.msm(&scalars, &points, n, opts).unwrap();
    let expected = reference_msm(&points, &scalars, p);

    assert_eq!(log.c, 6);
    assert_points_eq(&result, &expected);
}
