//! Argument reduction for the natural and decimal exponentials.
//!
//! [`Naive`] rescales into base 2 with one multiply and hands off to the base-2
//! path. [`CodyWaite`] computes the integer part in base 2 as well, but removes
//! `n·ln2` (or `n·log10 2`) from the argument in two steps with a split constant
//! and evaluates a dedicated fit on the residual.

#![allow(clippy::excessive_precision)]

use crate::bit_view::FloatView;
use crate::consts::{double, single};
use crate::exp::kernel::{split_round_f32, split_round_f64};
use crate::exp::{exp2, exp2f, Saturation};
use crate::poly;

/// A way of computing `e^x` and `10^x` on top of the base-2 machinery.
///
/// Implementors are zero-sized; the active one is picked at compile time.
pub trait ExpReduction {
    fn exp(x: f64) -> f64;
    fn expf(x: f32) -> f32;
    fn exp10(x: f64) -> f64;
    fn exp10f(x: f32) -> f32;
}

/// `e^x = 2^(x·log2 e)`. The rounding of the product grows with `|x|`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Naive;

/// Two-constant reduction with its own residual fit per base.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodyWaite;

impl ExpReduction for Naive {
    #[inline]
    fn exp(x: f64) -> f64 {
        exp2(double::LOG2_E * x)
    }

    #[inline]
    fn expf(x: f32) -> f32 {
        exp2f(single::LOG2_E * x)
    }

    #[inline]
    fn exp10(x: f64) -> f64 {
        exp2(double::LOG2_10 * x)
    }

    #[inline]
    fn exp10f(x: f32) -> f32 {
        exp2f(single::LOG2_10 * x)
    }
}

// e^r ≈ 1 + 2·r·P(r²) / (Q(r²) − r·P(r²)) on [-ln2/2, ln2/2].
const EXP_P: [f64; 3] = [
    1.26177193074810590878e-4,
    3.02994407707441961300e-2,
    9.99999999999999999910e-1,
];
const EXP_Q: [f64; 4] = [
    3.00198505138664455042e-6,
    2.52448340349684104192e-3,
    2.27265548208155028766e-1,
    2.00000000000000000009e0,
];
const EXP_C1: f64 = 6.93145751953125e-1;
const EXP_C2: f64 = 1.42860682030941723212e-6;

// e^r ≈ 1 + r + r²·P(r).
const EXPF_P: [f32; 6] = [
    1.9875691500e-4,
    1.3981999507e-3,
    8.3334519073e-3,
    4.1665795894e-2,
    1.6666665459e-1,
    5.0000001201e-1,
];

// 10^r ≈ 1 + 2·r·P(r²) / (Q(r²) − r·P(r²)) on [-log10(2)/2, log10(2)/2], Q monic.
const EXP10_P: [f64; 4] = [
    4.09962519798587023075e-2,
    1.17452732554344059015e1,
    4.06717289936872725516e2,
    2.39423741207388267439e3,
];
const EXP10_Q: [f64; 3] = [
    8.50936160849306532625e1,
    1.27209271178345121210e3,
    2.07960819286001865907e3,
];
const EXP10_C1: f64 = 3.01025390625e-1;
const EXP10_C2: f64 = 4.60503898119521373889e-6;

// 10^r ≈ 1 + r·P(r).
const EXP10F_P: [f32; 6] = [
    2.063216740311022e-1,
    5.420251702225484e-1,
    1.171292686296281,
    2.034649854009453,
    2.650948748208892,
    2.302585167056758,
];

#[inline(always)]
fn pade_residual(r: f64, p: &[f64], q: &[f64], monic: bool) -> f64 {
    let rr = r * r;
    let px = r * poly::evaluate(rr, p);
    let qx = if monic {
        poly::evaluate_monic(rr, q)
    } else {
        poly::evaluate(rr, q)
    };
    1.0 + 2.0 * (px / (qx - px))
}

impl ExpReduction for CodyWaite {
    #[inline]
    fn exp(x: f64) -> f64 {
        if let Some(saturated) = Saturation::<f64>::EXP.check(x) {
            return saturated;
        }
        let (ipart, _) = split_round_f64(double::LOG2_E * x);
        let r = x - ipart * EXP_C1 - ipart * EXP_C2;
        pade_residual(r, &EXP_P, &EXP_Q, false).scale_by_pow2(ipart as i32)
    }

    #[inline]
    fn expf(x: f32) -> f32 {
        if let Some(saturated) = Saturation::<f32>::EXPF.check(x) {
            return saturated;
        }
        let (ipart, _) = split_round_f32(single::LOG2_E * x);
        let r = x - ipart * single::LN2_HI - ipart * single::LN2_LO;
        let value = poly::evaluate(r, &EXPF_P) * r * r + r + 1.0;
        value.scale_by_pow2(ipart as i32)
    }

    #[inline]
    fn exp10(x: f64) -> f64 {
        if let Some(saturated) = Saturation::<f64>::EXP10.check(x) {
            return saturated;
        }
        let (ipart, _) = split_round_f64(double::LOG2_10 * x);
        let r = x - ipart * EXP10_C1 - ipart * EXP10_C2;
        pade_residual(r, &EXP10_P, &EXP10_Q, true).scale_by_pow2(ipart as i32)
    }

    #[inline]
    fn exp10f(x: f32) -> f32 {
        if let Some(saturated) = Saturation::<f32>::EXP10F.check(x) {
            return saturated;
        }
        let (ipart, _) = split_round_f32(single::LOG2_10 * x);
        let r = x - ipart * single::LOG10_2_HI - ipart * single::LOG10_2_LO;
        let value = poly::evaluate(r, &EXP10F_P) * r + 1.0;
        value.scale_by_pow2(ipart as i32)
    }
}
