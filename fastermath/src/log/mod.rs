//! Logarithms in base 2, e and 10.
//!
//! A positive finite argument is split into its unbiased exponent and a mantissa
//! whose natural logarithm comes from a residual strategy. The exponent and the
//! residual are scaled by the change-of-base constants separately, low halves
//! first, and only then summed.
//!
//! The fast path has no domain handling: zero, negative, infinite and NaN
//! arguments give unspecified finite results. [`crate::reference::log`] is the
//! checked variant.

mod rational;
mod spline;


use num_traits::Float;

use crate::consts::{double, single};

pub use rational::Rational;
pub use spline::{
    build_spline_table, build_spline_table_f32, spline_table, spline_table_f32, Spline,
    SplineBoundary, SplineTable, DEFAULT_INDEX_BITS, MAX_INDEX_BITS,
};

/// Residual used by [`log2`], [`log`], [`log10`] and their single-precision
/// variants.
#[cfg(not(feature = "log-spline"))]
pub type ActiveResidual = Rational;
#[cfg(feature = "log-spline")]
pub type ActiveResidual = Spline;

/// Split change-of-base constants of one precision and the compensated
/// combinations built from them.
pub trait LogSplit: Float {
    const LOG2_E_M1: Self;
    const LN2_HI: Self;
    const LN2_LO: Self;
    const LOG10_2_HI: Self;
    const LOG10_2_LO: Self;
    const LOG10_E_HI: Self;
    const LOG10_E_LO: Self;

    fn from_exponent(e: i32) -> Self;

    /// `e + r·log2(e)`.
    #[inline(always)]
    fn combine_log2(e: i32, r: Self) -> Self {
        r * Self::LOG2_E_M1 + r + Self::from_exponent(e)
    }

    /// `e·ln2 + r`.
    #[inline(always)]
    fn combine_ln(e: i32, r: Self) -> Self {
        let e = Self::from_exponent(e);
        e * Self::LN2_LO + r + e * Self::LN2_HI
    }

    /// `e·log10(2) + r·log10(e)`.
    #[inline(always)]
    fn combine_log10(e: i32, r: Self) -> Self {
        let e = Self::from_exponent(e);
        r * Self::LOG10_E_LO + e * Self::LOG10_2_LO + r * Self::LOG10_E_HI + e * Self::LOG10_2_HI
    }
}

impl LogSplit for f64 {
    const LOG2_E_M1: f64 = double::LOG2_E_M1;
    const LN2_HI: f64 = double::LN2_HI;
    const LN2_LO: f64 = double::LN2_LO;
    const LOG10_2_HI: f64 = double::LOG10_2_HI;
    const LOG10_2_LO: f64 = double::LOG10_2_LO;
    const LOG10_E_HI: f64 = double::LOG10_E_HI;
    const LOG10_E_LO: f64 = double::LOG10_E_LO;

    #[inline(always)]
    fn from_exponent(e: i32) -> f64 {
        e as f64
    }
}

impl LogSplit for f32 {
    const LOG2_E_M1: f32 = single::LOG2_E_M1;
    const LN2_HI: f32 = single::LN2_HI;
    const LN2_LO: f32 = single::LN2_LO;
    const LOG10_2_HI: f32 = single::LOG10_2_HI;
    const LOG10_2_LO: f32 = single::LOG10_2_LO;
    const LOG10_E_HI: f32 = single::LOG10_E_HI;
    const LOG10_E_LO: f32 = single::LOG10_E_LO;

    #[inline(always)]
    fn from_exponent(e: i32) -> f32 {
        e as f32
    }
}

/// A way of obtaining `ln m` for the reduced mantissa.
///
/// Implementors are zero-sized; the active one is picked at compile time.
pub trait LogResidual {
    /// `(e, ln m)` with `x = 2^e · m` for positive finite `x`.
    fn reduce(x: f64) -> (i32, f64);
    fn reducef(x: f32) -> (i32, f32);

    #[inline]
    fn log2(x: f64) -> f64 {
        let (e, r) = Self::reduce(x);
        f64::combine_log2(e, r)
    }

    #[inline]
    fn log2f(x: f32) -> f32 {
        let (e, r) = Self::reducef(x);
        f32::combine_log2(e, r)
    }

    #[inline]
    fn log(x: f64) -> f64 {
        let (e, r) = Self::reduce(x);
        f64::combine_ln(e, r)
    }

    #[inline]
    fn logf(x: f32) -> f32 {
        let (e, r) = Self::reducef(x);
        f32::combine_ln(e, r)
    }

    #[inline]
    fn log10(x: f64) -> f64 {
        let (e, r) = Self::reduce(x);
        f64::combine_log10(e, r)
    }

    #[inline]
    fn log10f(x: f32) -> f32 {
        let (e, r) = Self::reducef(x);
        f32::combine_log10(e, r)
    }
}

/// `log2(x)` for positive finite `x`.
#[inline]
pub fn log2(x: f64) -> f64 {
    ActiveResidual::log2(x)
}

#[inline]
pub fn log2f(x: f32) -> f32 {
    ActiveResidual::log2f(x)
}

/// `ln(x)` for positive finite `x`.
#[inline]
pub fn log(x: f64) -> f64 {
    ActiveResidual::log(x)
}

#[inline]
pub fn logf(x: f32) -> f32 {
    ActiveResidual::logf(x)
}

/// `log10(x)` for positive finite `x`.
#[inline]
pub fn log10(x: f64) -> f64 {
    ActiveResidual::log10(x)
}

#[inline]
pub fn log10f(x: f32) -> f32 {
    ActiveResidual::log10f(x)
}
