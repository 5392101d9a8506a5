//! Fastermath - fast, reduced-accuracy transcendental functions.
//!
//! Drop-in replacements for `exp2`, `exp`, `exp10`, `log2`, `log`, `log10`,
//! `pow` and `powi` in double and single precision. Each function splits its
//! argument into an exactly representable power of two and a bounded residual,
//! approximates the function on the residual and recombines the two parts.
//!
//! ```rust,ignore
//! use fastermath::{exp2, log2, pow};
//!
//! let y = exp2(log2(10.0) * 0.5);
//! assert!((y - 10f64.sqrt()).abs() < 1e-9);
//! assert_eq!(pow(-2.0, 3.0), -8.0);
//! ```
//!
//! The reduction strategy behind `exp`/`exp10` and the residual behind the
//! logarithms are chosen with the `exp-naive` and `log-spline` cargo features.
//! [`build_config`] reports the selection.

pub mod bit_view;
pub(crate) mod consts;
mod error;
pub mod exp;
pub mod log;
pub(crate) mod poly;
pub mod pow;
pub mod reference;
pub mod strategy;

// ============================================================================
// Numeric entry points
// ============================================================================

pub use exp::{exp, exp10, exp10f, exp2, exp2_kernel, exp2f, exp2f_kernel, expf};
pub use crate::log::{log, log10, log10f, log2, log2f, logf};
pub use pow::{pow, powf, powi, powif};

// ============================================================================
// Tables, constants and configuration
// ============================================================================

pub use bit_view::FloatView;
pub use error::{Error, Result};
pub use crate::log::{build_spline_table, build_spline_table_f32, SplineBoundary, SplineTable};
pub use reference::{init_constants, ReferenceConstants};
pub use strategy::{build_config, BuildConfig, ExpReductionKind, LogResidualKind};
