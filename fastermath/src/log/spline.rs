//! Cubic-spline tables of `ln m` over the mantissa interval `[1, 2]`.
//!
//! The top mantissa bits of the argument index a uniform grid; between two knots
//! the value is the linear blend of the bracketing samples plus the cubic
//! correction from their second derivatives.
//!
//! Each table also samples `ln(m / 2)` on the same knots. Mantissas above
//! `sqrt 2` are read from that half, so results on both sides of 1 stay
//! relatively accurate instead of cancelling against the exponent.

use std::sync::OnceLock;

use num_traits::{AsPrimitive, Float};

use crate::bit_view::FloatView;
use crate::error::{Error, Result};
use crate::log::{LogResidual, LogSplit};
use crate::reference;

/// Index bits of the default tables, 4097 knots.
pub const DEFAULT_INDEX_BITS: u32 = 12;
/// Upper bound on the table resolution regardless of precision.
pub const MAX_INDEX_BITS: u32 = 20;

/// End conditions for the second-derivative system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SplineBoundary {
    /// Zero second derivative at both ends.
    Natural,
    /// Prescribed first derivative at both ends.
    Clamped { start: f64, end: f64 },
}

impl SplineBoundary {
    /// `d/dm ln m` at `m = 1` and `m = 2`.
    pub const LN: SplineBoundary = SplineBoundary::Clamped {
        start: 1.0,
        end: 0.5,
    };
}

#[derive(Debug, Clone)]
pub struct SplineTable<T> {
    index_bits: u32,
    /// `ln m` at the knots.
    values: Box<[T]>,
    /// `ln(m / 2)` at the same knots, ending in an exact zero.
    halved_values: Box<[T]>,
    /// Shared by both halves: they differ by the constant `ln 2`.
    second_derivatives: Box<[T]>,
    pivot: T,
    inv_delta: T,
    delta_sq6: T,
}

impl<T> SplineTable<T>
where
    T: Float + FloatView + LogSplit + 'static,
    f64: AsPrimitive<T>,
{
    /// Table of `ln m` with `2^index_bits` intervals and clamped ends.
    pub fn with_index_bits(index_bits: u32) -> Result<Self> {
        Self::with_boundary(index_bits, SplineBoundary::LN)
    }

    pub fn with_boundary(index_bits: u32, boundary: SplineBoundary) -> Result<Self> {
        let max = T::MANTISSA_BITS.min(MAX_INDEX_BITS);
        if index_bits == 0 || index_bits > max {
            return Err(Error::InvalidSplineResolution {
                bits: index_bits,
                max,
            });
        }
        Ok(Self::build(index_bits, boundary))
    }

    fn build(index_bits: u32, boundary: SplineBoundary) -> Self {
        let intervals = 1usize << index_bits;
        let delta = 1.0 / intervals as f64;

        let mut values: Vec<f64> = (0..intervals)
            .map(|i| reference::log(1.0 + i as f64 * delta))
            .collect();
        values.push(reference::init_constants().ln2);

        let mut halved_values: Vec<f64> = (0..intervals)
            .map(|i| reference::log(0.5 * (1.0 + i as f64 * delta)))
            .collect();
        halved_values.push(0.0);

        let second_derivatives = second_derivatives(&values, delta, boundary);

        let footprint = 3 * values.len() * std::mem::size_of::<T>();
        ::log::debug!(
            "Built log spline table: {} index bits, delta {:e}, {:.1} KiB",
            index_bits,
            delta,
            footprint as f64 / 1024.0
        );

        Self {
            index_bits,
            values: values.iter().map(|&v| v.as_()).collect(),
            halved_values: halved_values.iter().map(|&v| v.as_()).collect(),
            second_derivatives: second_derivatives.iter().map(|&v| v.as_()).collect(),
            pivot: std::f64::consts::SQRT_2.as_(),
            inv_delta: (intervals as f64).as_(),
            delta_sq6: (delta * delta / 6.0).as_(),
        }
    }

    pub fn index_bits(&self) -> u32 {
        self.index_bits
    }

    /// Number of knots, `2^index_bits + 1`.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `ln m` for `m` in `[1, 2)`.
    #[inline]
    pub fn ln_mantissa(&self, m: T) -> T {
        self.interpolate(&self.values, m)
    }

    /// `(k, ln(m / 2^k))` for `m` in `[1, 2)`, with `k = 1` above `sqrt 2`.
    #[inline]
    pub fn ln_pivoted(&self, m: T) -> (i32, T) {
        if m > self.pivot {
            (1, self.interpolate(&self.halved_values, m))
        } else {
            (0, self.interpolate(&self.values, m))
        }
    }

    /// Base-2 logarithm of a positive finite `x` through this table.
    #[inline]
    pub fn log2(&self, x: T) -> T {
        let (e, m) = x.exponent_mantissa();
        let (k, r) = self.ln_pivoted(m);
        T::combine_log2(e + k, r)
    }

    #[inline(always)]
    fn interpolate(&self, values: &[T], m: T) -> T {
        let i = m.mantissa_top_bits(self.index_bits);
        let b = (m - m.truncate_mantissa(self.index_bits)) * self.inv_delta;
        let a = T::one() - b;

        let linear = a * values[i] + b * values[i + 1];
        // a³ - a = -a·b·(1 + a) and b³ - b = -a·b·(1 + b); the common factor
        // keeps the correction relative to the distance from either knot.
        let cubic = (T::one() + a) * self.second_derivatives[i]
            + (T::one() + b) * self.second_derivatives[i + 1];
        linear - a * b * cubic * self.delta_sq6
    }
}

/// Second derivatives of the interpolating cubic spline through `y` on a grid
/// of spacing `delta`, by forward elimination and back substitution of the
/// tridiagonal system.
fn second_derivatives(y: &[f64], delta: f64, boundary: SplineBoundary) -> Vec<f64> {
    let n = y.len();
    debug_assert!(n >= 3, "spline needs at least three knots, got {}", n);

    let mut y2 = vec![0.0; n];
    let mut u = vec![0.0; n];

    if let SplineBoundary::Clamped { start, .. } = boundary {
        y2[0] = -0.5;
        u[0] = (3.0 / delta) * ((y[1] - y[0]) / delta - start);
    }

    for i in 1..n - 1 {
        let p = 0.5 * y2[i - 1] + 2.0;
        y2[i] = -0.5 / p;
        let curvature = (y[i + 1] - 2.0 * y[i] + y[i - 1]) / delta;
        u[i] = (3.0 * curvature / delta - 0.5 * u[i - 1]) / p;
    }

    let (qn, un) = match boundary {
        SplineBoundary::Natural => (0.0, 0.0),
        SplineBoundary::Clamped { end, .. } => {
            (0.5, (3.0 / delta) * (end - (y[n - 1] - y[n - 2]) / delta))
        }
    };
    y2[n - 1] = (un - qn * u[n - 2]) / (qn * y2[n - 2] + 1.0);
    for k in (0..n - 1).rev() {
        y2[k] = y2[k] * y2[k + 1] + u[k];
    }
    y2
}

/// Double-precision table at the default resolution.
pub fn build_spline_table() -> SplineTable<f64> {
    SplineTable::build(DEFAULT_INDEX_BITS, SplineBoundary::LN)
}

/// Single-precision table at the default resolution.
pub fn build_spline_table_f32() -> SplineTable<f32> {
    SplineTable::build(DEFAULT_INDEX_BITS, SplineBoundary::LN)
}

static SPLINE_TABLE: OnceLock<SplineTable<f64>> = OnceLock::new();
static SPLINE_TABLE_F32: OnceLock<SplineTable<f32>> = OnceLock::new();

/// Shared double-precision table, built on first use.
pub fn spline_table() -> &'static SplineTable<f64> {
    SPLINE_TABLE.get_or_init(build_spline_table)
}

/// Shared single-precision table, built on first use.
pub fn spline_table_f32() -> &'static SplineTable<f32> {
    SPLINE_TABLE_F32.get_or_init(build_spline_table_f32)
}

/// Table lookup on the mantissa, pivoted at `sqrt 2` like [`crate::log::Rational`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Spline;

impl LogResidual for Spline {
    #[inline]
    fn reduce(x: f64) -> (i32, f64) {
        let (e, m) = x.exponent_mantissa();
        let (k, r) = spline_table().ln_pivoted(m);
        (e + k, r)
    }

    #[inline]
    fn reducef(x: f32) -> (i32, f32) {
        let (e, m) = x.exponent_mantissa();
        let (k, r) = spline_table_f32().ln_pivoted(m);
        (e + k, r)
    }
}
