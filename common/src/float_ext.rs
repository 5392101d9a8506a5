use num_traits::Float;

/// Comparison helpers for floating-point results.
pub trait FloatExt: Float {
    /// Relative error of `self` measured against `expected`.
    ///
    /// Identical values (including matching infinities and two NaNs) have zero error.
    /// When `expected` is below the smallest normal magnitude the absolute difference
    /// is returned instead, so denormal and zero references don't blow up the ratio.
    fn rel_error(self, expected: Self) -> Self;

    /// `true` when [`FloatExt::rel_error`] is strictly below `tolerance`.
    fn relatively_eq(self, expected: Self, tolerance: Self) -> bool {
        self.rel_error(expected) < tolerance
    }
}

impl<T: Float> FloatExt for T {
    fn rel_error(self, expected: Self) -> Self {
        if self == expected || (self.is_nan() && expected.is_nan()) {
            return T::zero();
        }
        let diff = (self - expected).abs();
        if diff.is_nan() {
            return T::infinity();
        }
        if expected.abs() < T::min_positive_value() {
            diff
        } else {
            diff / expected.abs()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rel_error_scales_with_magnitude() {
        let err = 1.0e300_f64.rel_error(1.0000001e300);
        assert!(err < 1.1e-7 && err > 0.9e-7, "rel_error = {:e}", err);
        assert!(1.0e-300_f64.relatively_eq(1.0e-300, 1e-15));
    }

    #[test]
    fn rel_error_special_values() {
        assert_eq!(f64::INFINITY.rel_error(f64::INFINITY), 0.0);
        assert_eq!(f32::NAN.rel_error(f32::NAN), 0.0);
        assert_eq!(f64::INFINITY.rel_error(1.0), f64::INFINITY);
        assert_eq!(f64::NAN.rel_error(1.0), f64::INFINITY);
        assert_eq!(0.0_f64.rel_error(-0.0), 0.0);
    }

    #[test]
    fn rel_error_uses_absolute_difference_near_zero() {
        let err = 1.0e-310_f64.rel_error(0.0);
        assert_eq!(err, 1.0e-310);
    }

    #[test]
    fn nan_against_a_number_never_matches() {
        assert!(!f32::NAN.relatively_eq(0.0, 1.0));
        assert!(!0.0_f32.relatively_eq(f32::NAN, 1.0));
    }
}
