use common::float_ext::FloatExt;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;
use crate::bit_view::FloatView;

#[test]
fn test_constants_match_std() {
    let c = init_constants();
    assert_eq!(c.infinity, f64::INFINITY);
    assert!(c.nan.is_nan());
    assert!(c.negative_zero == 0.0 && c.negative_zero.is_sign_negative());
    assert_eq!(c.max_value, f64::MAX);
    assert_eq!(c.ln2, std::f64::consts::LN_2);
    assert!(c.max_log.relatively_eq(f64::MAX.ln(), 1e-15));
    // Below ln(2^-1075) even the smallest subnormal rounds to zero.
    assert!(c.min_log.relatively_eq(-1075.0 * std::f64::consts::LN_2, 1e-15));
    assert!(c.min_log < 5e-324f64.ln());
    assert_eq!((c.min_log + 1e-9).exp(), 5e-324);
    assert_eq!((c.min_log - 1e-9).exp(), 0.0);
}

#[test]
fn test_init_constants_is_idempotent() {
    let first = init_constants();
    let second = init_constants();
    assert!(std::ptr::eq(first, second));
    // NaN fields rule out `==` on the whole struct.
    let bits = |c: &ReferenceConstants| {
        [c.infinity, c.nan, c.negative_zero, c.max_value, c.max_log, c.min_log, c.ln2].map(f64::to_bits)
    };
    assert_eq!(bits(first), bits(second));

    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| init_constants().max_log))
        .collect();
    for handle in handles {
        let max_log = handle.join().unwrap();
        assert_eq!(max_log, first.max_log);
    }
}

#[test]
fn test_log_domain() {
    assert!(log(f64::NAN).is_nan());
    assert_eq!(log(f64::INFINITY), f64::INFINITY);
    assert_eq!(log(0.0), f64::NEG_INFINITY);
    assert_eq!(log(-0.0), f64::NEG_INFINITY);
    assert!(log(-1.0).is_nan());
    assert!(log(f64::NEG_INFINITY).is_nan());
}

#[test]
fn test_log_exact_points() {
    assert_eq!(log(1.0), 0.0);
    assert!(log(std::f64::consts::E).relatively_eq(1.0, 1e-15));
    assert!(log(2.0).relatively_eq(std::f64::consts::LN_2, 1e-15));
    assert!(log(0.5).relatively_eq(-std::f64::consts::LN_2, 1e-15));
}

#[test]
fn test_log_random_accuracy_both_branches() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..20_000 {
        // Mantissa-only range exercises the log(1+x) branch.
        let x: f64 = rng.random_range(0.5..4.0);
        let err = log(x).rel_error(x.ln());
        assert!(err < 1e-15, "log({}) rel error {:e}", x, err);

        // Wide exponents exercise the z = 2(x-1)/(x+1) branch.
        let exponent: i32 = rng.random_range(-1070..1020);
        let x = rng.random_range(1.0f64..2.0).scalbn(exponent);
        let err = log(x).rel_error(x.ln());
        assert!(err < 1e-15, "log({:e}) rel error {:e}", x, err);
    }
}

#[test]
fn test_log_subnormal_and_extremes() {
    assert!(log(5e-324).relatively_eq(5e-324f64.ln(), 1e-15));
    assert!(log(1e-310).relatively_eq(1e-310f64.ln(), 1e-15));
    assert!(log(f64::MAX).relatively_eq(f64::MAX.ln(), 1e-15));
}

#[test]
fn test_log_near_one() {
    for &x in &[1.0 + 1e-12, 1.0 - 1e-12, 1.0 + 1e-6, 0.999] {
        let err = log(x).rel_error((x - 1.0f64).ln_1p());
        assert!(err < 1e-14, "log({}) rel error {:e}", x, err);
    }
}
