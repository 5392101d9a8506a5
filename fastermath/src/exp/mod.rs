//! Exponentials in base 2, e and 10.
//!
//! Everything funnels into the base-2 kernel: the argument is split into an
//! integer part, which becomes an exponent field, and a small residual that a
//! rational or polynomial fit handles. The public functions add saturation on
//! top: NaN propagates, large arguments give infinity, small ones give zero and
//! integer parts past the normal exponent range are scaled in two steps.

#![allow(clippy::excessive_precision)]

mod kernel;
mod reduction;


use num_traits::Float;

use crate::bit_view::FloatView;

pub use kernel::{exp2_kernel, exp2f_kernel};
pub use reduction::{CodyWaite, ExpReduction, Naive};

/// Reduction used by [`exp`], [`expf`], [`exp10`] and [`exp10f`].
#[cfg(not(feature = "exp-naive"))]
pub type ActiveReduction = CodyWaite;
#[cfg(feature = "exp-naive")]
pub type ActiveReduction = Naive;

/// Input range outside of which a result is a constant.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Saturation<T> {
    /// Anything above overflows to infinity.
    pub(crate) max: T,
    /// Anything below underflows to zero.
    pub(crate) min: T,
}

impl<T: Float> Saturation<T> {
    #[inline(always)]
    pub(crate) fn check(&self, x: T) -> Option<T> {
        if x.is_nan() {
            Some(x)
        } else if x > self.max {
            Some(T::infinity())
        } else if x < self.min {
            Some(T::zero())
        } else {
            None
        }
    }
}

impl Saturation<f64> {
    /// `2^1024` is the first overflowing power, `2^-1075` rounds to zero.
    pub(crate) const EXP2: Self = Self {
        max: 1023.999_999_999_999_886_3,
        min: -1075.0,
    };
    pub(crate) const EXP: Self = Self {
        max: 7.09782712893383996843e2,
        min: -7.45133219101941108420e2,
    };
    pub(crate) const EXP10: Self = Self {
        max: 3.08254715559916743851e2,
        min: -3.23607245338779784854e2,
    };
}

impl Saturation<f32> {
    pub(crate) const EXP2F: Self = Self {
        max: 127.999_992,
        min: -150.0,
    };
    pub(crate) const EXPF: Self = Self {
        max: 88.72283905206835,
        min: -103.972077083991796,
    };
    pub(crate) const EXP10F: Self = Self {
        max: 38.53183944498959,
        min: -45.15449934959718,
    };
}

/// `2^x`.
///
/// Exact for integral `x` in the normal range. Relative error stays below `1e-9`
/// elsewhere; results in the subnormal range lose precision with the mantissa.
#[inline]
pub fn exp2(x: f64) -> f64 {
    if let Some(saturated) = Saturation::<f64>::EXP2.check(x) {
        return saturated;
    }
    let (ipart, fpart) = kernel::split_round_f64(x);
    kernel::exp2_residual_f64(fpart).scale_by_pow2(ipart as i32)
}

/// `2^x` in single precision.
#[inline]
pub fn exp2f(x: f32) -> f32 {
    if let Some(saturated) = Saturation::<f32>::EXP2F.check(x) {
        return saturated;
    }
    let (ipart, fpart) = kernel::split_round_f32(x);
    kernel::exp2_residual_f32(fpart).scale_by_pow2(ipart as i32)
}

/// `e^x`.
#[inline]
pub fn exp(x: f64) -> f64 {
    ActiveReduction::exp(x)
}

#[inline]
pub fn expf(x: f32) -> f32 {
    ActiveReduction::expf(x)
}

/// `10^x`.
#[inline]
pub fn exp10(x: f64) -> f64 {
    ActiveReduction::exp10(x)
}

#[inline]
pub fn exp10f(x: f32) -> f32 {
    ActiveReduction::exp10f(x)
}
