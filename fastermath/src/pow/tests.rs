use common::float_ext::FloatExt;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;

fn is_negative_zero(x: f64) -> bool {
    x == 0.0 && x.is_sign_negative()
}

fn is_positive_zero(x: f64) -> bool {
    x == 0.0 && x.is_sign_positive()
}

// =============================================================================
// Special-case ladder
// =============================================================================

#[test]
fn test_zero_exponent_is_one() {
    for &x in &[0.0, -0.0, 1.5, -2.0, 1e300, f64::MIN_POSITIVE, f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
        assert_eq!(pow(x, 0.0), 1.0, "pow({}, 0)", x);
        assert_eq!(pow(x, -0.0), 1.0, "pow({}, -0)", x);
    }
}

#[test]
fn test_nan_propagates() {
    assert!(pow(f64::NAN, 2.0).is_nan());
    assert!(pow(2.0, f64::NAN).is_nan());
    assert!(pow(1.0, f64::NAN).is_nan());
    assert!(pow(f64::NAN, 1.0).is_nan());
}

#[test]
fn test_unit_exponent_returns_base() {
    for &x in &[0.0, -0.0, 3.25, -7.0, 1e-310, f64::INFINITY] {
        assert_eq!(pow(x, 1.0).to_bits(), x.to_bits(), "pow({}, 1)", x);
    }
}

#[test]
fn test_unit_base() {
    assert_eq!(pow(1.0, 12345.678), 1.0);
    assert_eq!(pow(1.0, -1e300), 1.0);
    assert!(pow(1.0, f64::INFINITY).is_nan());
    assert!(pow(-1.0, f64::NEG_INFINITY).is_nan());
    assert_eq!(pow(-1.0, 3.0), -1.0);
    assert_eq!(pow(-1.0, 1e10), 1.0);
    assert_eq!(pow(-1.0, f64::MAX), 1.0);
}

#[test]
fn test_infinite_exponent() {
    assert_eq!(pow(2.0, f64::INFINITY), f64::INFINITY);
    assert_eq!(pow(0.5, f64::INFINITY), 0.0);
    assert_eq!(pow(-2.0, f64::INFINITY), f64::INFINITY);
    assert_eq!(pow(-0.5, f64::INFINITY), 0.0);
    assert_eq!(pow(2.0, f64::NEG_INFINITY), 0.0);
    assert_eq!(pow(0.5, f64::NEG_INFINITY), f64::INFINITY);
    assert_eq!(pow(-0.5, f64::NEG_INFINITY), f64::INFINITY);
    assert_eq!(pow(0.0, f64::INFINITY), 0.0);
    assert_eq!(pow(0.0, f64::NEG_INFINITY), f64::INFINITY);
    assert_eq!(pow(1.5, f64::MAX), f64::INFINITY);
    assert_eq!(pow(1.5, -f64::MAX), 0.0);
}

#[test]
fn test_infinite_base() {
    assert_eq!(pow(f64::INFINITY, 2.0), f64::INFINITY);
    assert_eq!(pow(f64::INFINITY, 0.5), f64::INFINITY);
    assert_eq!(pow(f64::INFINITY, -2.0), 0.0);
    assert_eq!(pow(f64::NEG_INFINITY, 3.0), f64::NEG_INFINITY);
    assert_eq!(pow(f64::NEG_INFINITY, 2.0), f64::INFINITY);
    assert!(is_negative_zero(pow(f64::NEG_INFINITY, -3.0)));
    assert!(is_positive_zero(pow(f64::NEG_INFINITY, -2.0)));
}

#[test]
fn test_signed_zero_base() {
    assert_eq!(pow(0.0, -3.0), f64::INFINITY);
    assert_eq!(pow(-0.0, -3.0), f64::NEG_INFINITY);
    assert_eq!(pow(-0.0, -2.0), f64::INFINITY);
    assert_eq!(pow(-0.0, -0.5), f64::INFINITY);
    assert!(is_negative_zero(pow(-0.0, 3.0)));
    assert!(is_positive_zero(pow(-0.0, 2.0)));
    assert!(is_positive_zero(pow(0.0, 3.0)));
    assert!(is_positive_zero(pow(-0.0, 0.5)));
}

#[test]
fn test_negative_base() {
    assert!(pow(-8.0, 1.0 / 3.0).is_nan());
    assert!(pow(-2.5, 0.5).is_nan());
    assert_eq!(pow(-8.0, 3.0), -512.0);
    assert_eq!(pow(-2.0, -2.0), 0.25);
    assert_eq!(pow(-2.0, -3.0), -0.125);
    assert!(pow(-1.5, 3.0).relatively_eq(-3.375, 1e-15));
    assert!(pow(-1.5, 4.0).relatively_eq(5.0625, 1e-15));
}

#[test]
fn test_large_integer_exponents_of_negative_bases() {
    assert_eq!(pow(-2.0, 40001.0), f64::NEG_INFINITY);
    assert_eq!(pow(-2.0, 40000.0), f64::INFINITY);
    assert!(is_negative_zero(pow(-2.0, -40001.0)));
    assert!(is_positive_zero(pow(-2.0, -40000.0)));

    let expected = -(1.0001f64.powf(40001.0));
    assert!(pow(-1.0001, 40001.0).relatively_eq(expected, 1e-12));
}

#[test]
fn test_huge_finite_exponent_saturates() {
    let y = 2.0f64.powi(70);
    assert_eq!(pow(2.0, y), f64::INFINITY);
    assert_eq!(pow(0.5, y), 0.0);
    assert_eq!(pow(2.0, -y), 0.0);
    assert_eq!(pow(0.5, -y), f64::INFINITY);
    assert_eq!(pow(-2.0, y), f64::INFINITY);
    assert_eq!(pow(1.0 + f64::EPSILON, y), f64::INFINITY);
}

#[test]
fn test_overflow_and_underflow() {
    assert_eq!(pow(2.0, 1024.0), f64::INFINITY);
    assert_eq!(pow(2.0, -1074.0), 5e-324);
    assert_eq!(pow(2.0, -1076.0), 0.0);
    assert_eq!(pow(1.5, 2000.5), f64::INFINITY);
    assert_eq!(pow(1.5, -2000.5), 0.0);
    assert_eq!(pow(10.0, 309.0), f64::INFINITY);
    assert!(pow(10.0, 308.0).relatively_eq(1e308, 1e-13));
}

// =============================================================================
// Accuracy
// =============================================================================

#[test]
fn test_general_path_accuracy() {
    let mut rng = StdRng::seed_from_u64(31);
    for _ in 0..20_000 {
        let x: f64 = rng.random_range(0.01..100.0);
        let y: f64 = rng.random_range(-100.0..100.0);
        let expected = x.powf(y);
        if !expected.is_normal() {
            continue;
        }
        let err = pow(x, y).rel_error(expected);
        assert!(err < 1e-13, "pow({}, {}) rel error {:e}", x, y, err);
    }
}

#[test]
fn test_near_one_series() {
    for &(x, y) in &[(1.0005, 0.7), (0.9995, -0.3), (1.0 + 1e-9, 1e5), (1.0 - 1e-7, -2500.5)] {
        let err = pow(x, y).rel_error(f64::powf(x, y));
        assert!(err < 1e-14, "pow({}, {}) rel error {:e}", x, y, err);
    }
}

#[test]
fn test_fractional_exponents() {
    assert!(pow(2.0, 0.5).relatively_eq(std::f64::consts::SQRT_2, 1e-15));
    assert!(pow(27.0, 1.0 / 3.0).relatively_eq(3.0, 1e-15));
    assert!(pow(10.0, -2.5).relatively_eq(10f64.powf(-2.5), 1e-15));
}

#[test]
fn test_pow_agrees_with_powi() {
    let mut exponents = vec![-32768, -32767, -1000, -37, -3, -2, -1, 0, 1, 2, 3, 17, 255, 1000, 32767, 32768];
    let mut rng = StdRng::seed_from_u64(32);
    exponents.extend((0..64).map(|_| rng.random_range(-32768..=32768)));

    for &x in &[0.999, 1.0001, 1.5, 0.75, -1.25, 2.0, 3.0, -0.9] {
        for &n in &exponents {
            let via_pow = pow(x, n as f64);
            let via_powi = powi(x, n);
            let err = via_pow.rel_error(via_powi);
            assert!(err < 1e-10, "pow({}, {}) = {:e}, powi = {:e}", x, n, via_pow, via_powi);
        }
    }
}

// =============================================================================
// powi
// =============================================================================

#[test]
fn test_powi_basics() {
    assert_eq!(powi(-8.0, 3), -512.0);
    assert_eq!(powi(3.0, 4), 81.0);
    assert_eq!(powi(2.0, -3), 0.125);
    assert_eq!(powi(7.0, 0), 1.0);
    assert_eq!(powi(4.0, -1), 0.25);
    assert_eq!(powi(-1.0, i32::MAX), -1.0);
    assert_eq!(powi(-1.0, i32::MIN), 1.0);
    assert!(powi(1.1, 100).relatively_eq(1.1f64.powi(100), 1e-13));
}

#[test]
fn test_powi_zero_base() {
    assert_eq!(powi(0.0, 0), 1.0);
    assert_eq!(powi(-0.0, 0), 1.0);
    assert_eq!(powi(0.0, -2), f64::INFINITY);
    assert_eq!(powi(0.0, -3), f64::INFINITY);
    assert_eq!(powi(-0.0, -3), f64::NEG_INFINITY);
    assert_eq!(powi(-0.0, -2), f64::INFINITY);
    assert!(is_negative_zero(powi(-0.0, 3)));
    assert!(is_positive_zero(powi(-0.0, 2)));
}

#[test]
fn test_powi_saturates_without_intermediate_overflow() {
    assert_eq!(powi(10.0, 309), f64::INFINITY);
    assert!(powi(10.0, 308).relatively_eq(1e308, 1e-13));
    assert_eq!(powi(1e-300, -2), f64::INFINITY);
    assert_eq!(powi(1e300, -2), 0.0);
    assert_eq!(powi(2.0, i32::MIN), 0.0);
    assert_eq!(powi(0.5, i32::MIN), f64::INFINITY);
    assert_eq!(powi(-2.0, 2001), f64::NEG_INFINITY);
    assert!(is_negative_zero(powi(-2.0, -2001)));
    assert_eq!(powi(2.0, -1074), 5e-324);
    assert_eq!(powi(0.5, 1074), 5e-324);
}

#[test]
fn test_powi_reaches_the_edges_of_the_range() {
    // Results within a few ulps of the largest finite value.
    let expected = 1.9f64.powf(1105.0);
    assert!(expected.is_finite() && expected > 1e308);
    assert!(powi(1.9, 1105).relatively_eq(expected, 1e-12));
    assert!(pow(-1.9, 1105.0).relatively_eq(-expected, 1e-12));
    assert!(pow(3.0, 646.0).relatively_eq(3f64.powf(646.0), 1e-12));
    assert_eq!(powi(0.5, -1023), 2f64.powf(1023.0));
    assert_eq!(powi(0.5, -1024), f64::INFINITY);
    assert_eq!(powi(1.9, 1106), f64::INFINITY);

    // And down into the subnormals.
    assert!(powi(3.0, -646).relatively_eq(3f64.powf(-646.0), 1e-12));
    assert_eq!(pow(3.0, -678.0), 5e-324);
    assert_eq!(pow(3.0, -680.0), 0.0);
    assert!(is_negative_zero(pow(-3.0, -681.0)));
}

// =============================================================================
// Single precision
// =============================================================================

#[test]
fn test_single_precision_wrappers() {
    assert_eq!(powif(-2.0, 3), -8.0);
    assert_eq!(powf(-8.0, 3.0), -512.0);
    assert!(powf(-8.0, 0.5).is_nan());
    assert_eq!(powf(2.0, 128.0), f32::INFINITY);
    assert_eq!(powf(0.0, -1.0), f32::INFINITY);

    let mut rng = StdRng::seed_from_u64(33);
    for _ in 0..5_000 {
        let x: f32 = rng.random_range(0.1..10.0);
        let y: f32 = rng.random_range(-30.0..30.0);
        let expected = (x as f64).powf(y as f64);
        let err = (powf(x, y) as f64).rel_error(expected);
        assert!(err < 1e-6, "powf({}, {}) rel error {:e}", x, y, err);
    }
}
