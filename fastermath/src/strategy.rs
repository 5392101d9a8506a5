//! Runtime view of the interchangeable reduction strategies.
//!
//! The public `exp`/`exp10`/`log*` functions are bound to one strategy at build
//! time through cargo features. The kinds here reach every strategy by name,
//! which is what benchmarks and comparison tools need.

use std::fmt;
use std::str::FromStr;

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::error::{Error, Result};
use crate::exp::{CodyWaite, ExpReduction, Naive};
use crate::log::{LogResidual, Rational, Spline};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum ExpReductionKind {
    /// `exp2(x · log2(base))`.
    Naive,
    /// Two-constant subtraction of `ipart · log_base(2)` before the residual.
    CodyWaite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum LogResidualKind {
    /// Minimax rational function of `m - 1`.
    Rational,
    /// Cubic spline table indexed by the top mantissa bits.
    Spline,
}

impl ExpReductionKind {
    /// The strategy behind the public `exp` and `exp10`.
    pub const ACTIVE: ExpReductionKind = if cfg!(feature = "exp-naive") {
        ExpReductionKind::Naive
    } else {
        ExpReductionKind::CodyWaite
    };

    pub fn exp(self, x: f64) -> f64 {
        match self {
            ExpReductionKind::Naive => Naive::exp(x),
            ExpReductionKind::CodyWaite => CodyWaite::exp(x),
        }
    }

    pub fn expf(self, x: f32) -> f32 {
        match self {
            ExpReductionKind::Naive => Naive::expf(x),
            ExpReductionKind::CodyWaite => CodyWaite::expf(x),
        }
    }

    pub fn exp10(self, x: f64) -> f64 {
        match self {
            ExpReductionKind::Naive => Naive::exp10(x),
            ExpReductionKind::CodyWaite => CodyWaite::exp10(x),
        }
    }

    pub fn exp10f(self, x: f32) -> f32 {
        match self {
            ExpReductionKind::Naive => Naive::exp10f(x),
            ExpReductionKind::CodyWaite => CodyWaite::exp10f(x),
        }
    }
}

impl LogResidualKind {
    /// The strategy behind the public `log2`, `log` and `log10`.
    pub const ACTIVE: LogResidualKind = if cfg!(feature = "log-spline") {
        LogResidualKind::Spline
    } else {
        LogResidualKind::Rational
    };

    pub fn log2(self, x: f64) -> f64 {
        match self {
            LogResidualKind::Rational => Rational::log2(x),
            LogResidualKind::Spline => Spline::log2(x),
        }
    }

    pub fn log2f(self, x: f32) -> f32 {
        match self {
            LogResidualKind::Rational => Rational::log2f(x),
            LogResidualKind::Spline => Spline::log2f(x),
        }
    }

    pub fn log(self, x: f64) -> f64 {
        match self {
            LogResidualKind::Rational => Rational::log(x),
            LogResidualKind::Spline => Spline::log(x),
        }
    }

    pub fn logf(self, x: f32) -> f32 {
        match self {
            LogResidualKind::Rational => Rational::logf(x),
            LogResidualKind::Spline => Spline::logf(x),
        }
    }

    pub fn log10(self, x: f64) -> f64 {
        match self {
            LogResidualKind::Rational => Rational::log10(x),
            LogResidualKind::Spline => Spline::log10(x),
        }
    }

    pub fn log10f(self, x: f32) -> f32 {
        match self {
            LogResidualKind::Rational => Rational::log10f(x),
            LogResidualKind::Spline => Spline::log10f(x),
        }
    }
}

fn parse_kind<K: IntoEnumIterator + fmt::Display>(s: &str) -> Result<K> {
    let wanted = s.trim();
    K::iter()
        .find(|kind| kind.to_string().eq_ignore_ascii_case(wanted))
        .ok_or_else(|| Error::UnknownStrategy(s.to_string()))
}

impl FromStr for ExpReductionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_kind(s)
    }
}

impl FromStr for LogResidualKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_kind(s)
    }
}

/// Strategies compiled into the public entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildConfig {
    pub exp_reduction: ExpReductionKind,
    pub log_residual: LogResidualKind,
}

impl fmt::Display for BuildConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "exp reduction: {}, log residual: {}",
            self.exp_reduction, self.log_residual
        )
    }
}

pub fn build_config() -> BuildConfig {
    BuildConfig {
        exp_reduction: ExpReductionKind::ACTIVE,
        log_residual: LogResidualKind::ACTIVE,
    }
}
