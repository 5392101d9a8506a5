//! `x^y` with extra working precision.
//!
//! Special operands are settled by an ordered ladder of checks. Integral
//! exponents of small magnitude go to [`powi`]. Bases close to 1 use a short
//! series in `x - 1`. Everything else forms `y · log2(x)` from an antilog-table
//! logarithm, keeps the product as sixteenths plus a remainder and rebuilds the
//! result from the remainder's exponential, a table entry and an exponent shift.

#![allow(clippy::excessive_precision)]

mod antilog;
mod powi;
mod split;

#[cfg(test)]
mod tests;

use crate::bit_view::FloatView;
use crate::poly;
use crate::reference::{init_constants, ReferenceConstants};

pub use powi::{powi, powif};

/// Exponents below this magnitude go through repeated squaring.
const POWI_LIMIT: f64 = 32768.0;
/// From here on `y · log2(x)` saturates for every base other than 1.
const SATURATING_EXPONENT: f64 = 18_446_744_073_709_551_616.0;
/// Overflow and underflow bounds of `16 · y · log2(x)`.
const MAX_SIXTEENTHS: f64 = 16383.0;
const MIN_SIXTEENTHS: f64 = -17183.0;

// 2^h - 1 = h·R(h) on [-1/16, 0].
const EXP2M1_R: [f64; 7] = [
    f64::from_bits(0x3eef_6307_d7f2_937f),
    f64::from_bits(0x3f24_2fbe_60fc_9259),
    f64::from_bits(0x3f55_d87e_c84a_ef1d),
    f64::from_bits(0x3f83_b2ab_6ef1_33b7),
    f64::from_bits(0x3fac_6b08_d704_1a92),
    f64::from_bits(0x3fce_bfbd_ff82_c56d),
    f64::from_bits(0x3fe6_2e42_fefa_39ef),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Parity {
    NonInteger,
    Even,
    Odd,
}

impl Parity {
    fn of(y: f64) -> Self {
        let w = y.floor();
        if w != y {
            Parity::NonInteger
        } else if (0.5 * y.abs()).floor() != 0.5 * w.abs() {
            Parity::Odd
        } else {
            Parity::Even
        }
    }

    fn is_integer(self) -> bool {
        self != Parity::NonInteger
    }
}

/// `x^y`.
///
/// Follows the C99 conventions for signed zeros and infinities, except that
/// `(±1)^(±∞)` is NaN. Negative bases with non-integral exponents give NaN.
pub fn pow(x: f64, y: f64) -> f64 {
    let c = init_constants();

    if y == 0.0 {
        return 1.0;
    }
    if x.is_nan() {
        return x;
    }
    if y.is_nan() {
        return y;
    }
    if y == 1.0 {
        return x;
    }
    if !y.is_finite() && (x == 1.0 || x == -1.0) {
        return c.nan;
    }
    if x == 1.0 {
        return 1.0;
    }

    if y >= c.max_value || y <= -c.max_value {
        if let Some(saturated) = saturate_huge_exponent(x, y, c) {
            return saturated;
        }
    }
    if x >= c.max_value {
        return if y > 0.0 { c.infinity } else { 0.0 };
    }

    let parity = Parity::of(y);
    let odd = parity == Parity::Odd;

    if x <= -c.max_value {
        return match (y > 0.0, odd) {
            (true, true) => -c.infinity,
            (true, false) => c.infinity,
            (false, true) => c.negative_zero,
            (false, false) => 0.0,
        };
    }

    let mut negate = false;
    if x <= 0.0 {
        if x == 0.0 {
            let keep_sign = x.is_sign_negative() && odd;
            return match (y < 0.0, keep_sign) {
                (true, true) => -c.infinity,
                (true, false) => c.infinity,
                (false, true) => c.negative_zero,
                (false, false) => 0.0,
            };
        }
        if !parity.is_integer() {
            return c.nan;
        }
        negate = odd;
    }

    if parity.is_integer() && y.abs() < POWI_LIMIT && (x < 0.0 || x.floor() == x) {
        return powi(x, y as i32);
    }

    let magnitude = magnitude_pow(x.abs(), y, c);
    if negate {
        -magnitude
    } else {
        magnitude
    }
}

#[inline]
pub fn powf(x: f32, y: f32) -> f32 {
    pow(x as f64, y as f64) as f32
}

/// `|y|` at the largest finite magnitude: only the side of 1 that `|x|` is on
/// matters. Zero and unit bases are left to the rest of the ladder.
fn saturate_huge_exponent(x: f64, y: f64, c: &ReferenceConstants) -> Option<f64> {
    let a = x.abs();
    if a == 0.0 || a == 1.0 {
        return None;
    }
    Some(if (a > 1.0) == (y > 0.0) { c.infinity } else { 0.0 })
}

/// `x^y` for positive finite `x`.
fn magnitude_pow(x: f64, y: f64, c: &ReferenceConstants) -> f64 {
    let w = x - 1.0;
    let wy = w * y;
    let ay = y.abs();
    if (w.abs() <= 1.0e-3 && ay <= 1.0) || (wy.abs() <= 1.0e-3 && ay >= 1.0) {
        return near_one_series(w, y, wy);
    }

    if ay >= SATURATING_EXPONENT {
        return if (x > 1.0) == (y > 0.0) {
            c.infinity
        } else {
            0.0
        };
    }

    let (coarse, fine) = antilog::log2_split(x);
    let product = split::multiply(y, coarse, fine);

    let sixteenths = product.coarse * 16.0;
    if sixteenths > MAX_SIXTEENTHS {
        return c.infinity;
    }
    if sixteenths < MIN_SIXTEENTHS - 1.0 {
        return 0.0;
    }

    // y·log2(x) = e/16 + h with h in [-1/16, 0].
    let mut e = sixteenths as i32;
    let mut h = product.fine;
    if h > 0.0 {
        e += 1;
        h -= 0.0625;
    }
    let exp2m1 = h * poly::evaluate(h, &EXP2M1_R);

    // e/16 = k - j/16 with j in 0..=16.
    let k = e / 16 + i32::from(e >= 0);
    let j = (16 * k - e) as usize;
    let anchor = antilog::ANCHORS[j];
    (anchor + anchor * exp2m1).scalbn(k)
}

/// `(1 + w)^y` by its binomial series, for `w·y` small.
#[inline]
fn near_one_series(w: f64, y: f64, wy: f64) -> f64 {
    let mut s = w * (y - 5.0) / 720.0 + 1.0 / 120.0;
    s = s * w * (y - 4.0) + 1.0 / 24.0;
    s = s * w * (y - 3.0) + 1.0 / 6.0;
    s = s * w * (y - 2.0) + 0.5;
    s = s * w * (y - 1.0);
    s * wy + wy + 1.0
}
