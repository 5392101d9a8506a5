//! Base-2 exponential kernels.
//!
//! `x` is split as `ipart = floor(x + 0.5)`, `fpart = x - ipart` in `[-0.5, 0.5)`.
//! `2^ipart` is written straight into the exponent field and `2^fpart` comes from
//! a minimax fit: a Padé form in double precision, a plain polynomial in single
//! precision where the division isn't worth its latency.

#![allow(clippy::excessive_precision)]

use crate::bit_view::FloatView;
use crate::poly;

/// `2^x ≈ 1 + 2·x·P(x²) / (Q(x²) − x·P(x²))` on `[-0.5, 0.5]`.
const EXP2_P: [f64; 3] = [
    2.30933477057345225087e-2,
    2.02020656693165307700e1,
    1.51390680115615096133e3,
];
/// Monic, leading 1 omitted.
const EXP2_Q: [f64; 2] = [2.33184211722314911771e2, 4.36821166879210612817e3];

/// `2^x` on `[-0.5, 0.5]`, constant term included.
const EXP2F_P: [f32; 7] = [
    1.535336188319500e-4,
    1.339887440266574e-3,
    9.618437357674640e-3,
    5.550332471162809e-2,
    2.402264791363012e-1,
    6.931472028550421e-1,
    1.0,
];

/// Round-to-nearest split into integer and fractional parts.
#[inline(always)]
pub(crate) fn split_round_f64(x: f64) -> (f64, f64) {
    let ipart = (x + 0.5).floor();
    (ipart, x - ipart)
}

#[inline(always)]
pub(crate) fn split_round_f32(x: f32) -> (f32, f32) {
    let ipart = (x + 0.5).floor();
    (ipart, x - ipart)
}

/// `2^fpart` for `fpart` in `[-0.5, 0.5]`.
#[inline(always)]
pub(crate) fn exp2_residual_f64(fpart: f64) -> f64 {
    let xx = fpart * fpart;
    let px = fpart * poly::evaluate(xx, &EXP2_P);
    let qx = poly::evaluate_monic(xx, &EXP2_Q);
    1.0 + 2.0 * (px / (qx - px))
}

#[inline(always)]
pub(crate) fn exp2_residual_f32(fpart: f32) -> f32 {
    poly::evaluate(fpart, &EXP2F_P)
}

/// `2^x` without any range handling.
///
/// The integer part must stay in `-1022..=1023`, i.e. `x` in `[-1022.5, 1023.5)`;
/// outside it the exponent field wraps and the result is garbage. Use
/// [`crate::exp2`] when saturation is needed.
#[inline]
pub fn exp2_kernel(x: f64) -> f64 {
    let (ipart, fpart) = split_round_f64(x);
    f64::make_power_of_two(ipart as i32) * exp2_residual_f64(fpart)
}

/// `2^x` without any range handling; `x` must lie in `[-126.5, 127.5)`.
#[inline]
pub fn exp2f_kernel(x: f32) -> f32 {
    let (ipart, fpart) = split_round_f32(x);
    f32::make_power_of_two(ipart as i32) * exp2_residual_f32(fpart)
}
