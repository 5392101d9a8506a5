//! Change-of-base constants, plain and split for compensated arithmetic.
//!
//! Split constants are written `X = X_HI + X_LO` where `X_HI` has few significant
//! bits, so `n * X_HI` is exact for every integer `n` that can reach it.

#![allow(clippy::excessive_precision)]

pub(crate) mod double {
    pub(crate) const LOG2_E: f64 = std::f64::consts::LOG2_E;
    pub(crate) const LOG2_10: f64 = std::f64::consts::LOG2_10;

    /// `log2(e) - 1`, so `y * log2(e)` can be formed as `y * LOG2_E_M1 + y`.
    pub(crate) const LOG2_E_M1: f64 = 0.44269504088896340736;

    pub(crate) const LN2_HI: f64 = 0.693359375;
    pub(crate) const LN2_LO: f64 = -2.121944400546905827679e-4;

    pub(crate) const LOG10_2_HI: f64 = 0.30078125;
    pub(crate) const LOG10_2_LO: f64 = 2.48745663981195213739e-4;

    pub(crate) const LOG10_E_HI: f64 = 0.43359375;
    pub(crate) const LOG10_E_LO: f64 = 7.00731903251827651129e-4;

    pub(crate) const SQRT_2: f64 = std::f64::consts::SQRT_2;
}

pub(crate) mod single {
    pub(crate) const LOG2_E: f32 = std::f32::consts::LOG2_E;
    pub(crate) const LOG2_10: f32 = std::f32::consts::LOG2_10;
    pub(crate) const LOG2_E_M1: f32 = 0.44269504088896340736;

    pub(crate) const LN2_HI: f32 = 0.693359375;
    pub(crate) const LN2_LO: f32 = -2.12194440e-4;

    pub(crate) const LOG10_2_HI: f32 = 0.30078125;
    pub(crate) const LOG10_2_LO: f32 = 2.48745663981195213739e-4;

    pub(crate) const LOG10_E_HI: f32 = 0.43359375;
    pub(crate) const LOG10_E_LO: f32 = 7.00731903251827651129e-4;

    pub(crate) const SQRT_2: f32 = std::f32::consts::SQRT_2;
}
