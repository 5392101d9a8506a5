//! Accurate reference path.
//!
//! Bit-exact IEEE 754 constants and a full-precision natural logarithm with
//! complete domain handling. The spline tables are sampled from this logarithm
//! and the power function reads its saturation bounds from these constants.

#![allow(clippy::excessive_precision)]

#[cfg(test)]
mod tests;

use crate::bit_view::FloatView;
use crate::poly;

/// Constants shared by the reference logarithm and the power function, each
/// taken from its exact bit pattern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceConstants {
    pub infinity: f64,
    pub nan: f64,
    pub negative_zero: f64,
    /// Largest finite double.
    pub max_value: f64,
    /// `ln(max_value)`.
    pub max_log: f64,
    /// `ln(2^-1075)`, half the smallest subnormal: anything below rounds to zero.
    pub min_log: f64,
    pub ln2: f64,
}

static CONSTANTS: ReferenceConstants = ReferenceConstants {
    infinity: f64::from_bits(0x7ff0_0000_0000_0000),
    nan: f64::from_bits(0x7ffc_0000_0000_0000),
    negative_zero: f64::from_bits(0x8000_0000_0000_0000),
    max_value: f64::from_bits(0x7fef_ffff_ffff_ffff),
    max_log: f64::from_bits(0x4086_2e42_fefa_39ef),
    min_log: f64::from_bits(0xc087_4910_d52d_3052),
    ln2: f64::from_bits(0x3fe6_2e42_fefa_39ef),
};

/// The reference constants. Built at compile time; every call returns the same
/// instance.
#[inline]
pub fn init_constants() -> &'static ReferenceConstants {
    &CONSTANTS
}

const SQRT_HALF: f64 = std::f64::consts::FRAC_1_SQRT_2;
const LN2_HI: f64 = 0.693359375;
const LN2_LO: f64 = 2.121944400546905827679e-4;

// log(1+x) = x - x²/2 + x³·P(x)/Q(x) on [1/sqrt(2) - 1, sqrt(2) - 1].
const LOG_P: [f64; 6] = [
    f64::from_bits(0x3f1a_b4c2_93c3_1bb0),
    f64::from_bits(0x3fdf_d6f5_3f56_52f2),
    f64::from_bits(0x4012_d2ba_ed92_6911),
    f64::from_bits(0x402c_ff72_c63e_eb2e),
    f64::from_bits(0x4031_efd6_924b_c84d),
    f64::from_bits(0x401e_d563_7d7e_dcf8),
];
const LOG_Q: [f64; 5] = [
    f64::from_bits(0x4026_9320_ae97_ef8e),
    f64::from_bits(0x4046_9d2c_4e19_c033),
    f64::from_bits(0x4054_bf33_a326_bdbd),
    f64::from_bits(0x4051_c9e2_eb5e_ae21),
    f64::from_bits(0x4037_200a_9e1f_25b2),
];

// log(x) = z + z³·R(z²)/S(z²) with z = 2(x-1)/(x+1).
const LOG_R: [f64; 3] = [
    f64::from_bits(0xbfe9_443d_dc6c_0e84),
    f64::from_bits(0x4030_62fc_7302_7b6b),
    f64::from_bits(0xc050_0906_1122_2a20),
];
const LOG_S: [f64; 3] = [
    f64::from_bits(0xc041_d60d_43ec_6d0a),
    f64::from_bits(0x4073_8180_112a_e40e),
    f64::from_bits(0xc088_0d89_19b3_3f3b),
];

/// Natural logarithm, accurate to about one ulp.
///
/// `NaN → NaN`, `+∞ → +∞`, `±0 → −∞`, negative input `→ NaN`.
pub fn log(x: f64) -> f64 {
    let c = init_constants();
    if x.is_nan() || x == c.infinity {
        return x;
    }
    if x <= 0.0 {
        return if x == 0.0 { -c.infinity } else { c.nan };
    }

    let (mut m, mut e) = x.frexp();

    if !(-2..=2).contains(&e) {
        let (z, y) = if m < SQRT_HALF {
            e -= 1;
            let z = m - 0.5;
            (z, 0.5 * z + 0.5)
        } else {
            let z = m - 0.5 - 0.5;
            (z, 0.5 * m + 0.5)
        };
        let x = z / y;
        let zz = x * x;
        let r = x * (zz * poly::evaluate(zz, &LOG_R) / poly::evaluate_monic(zz, &LOG_S));
        let e = e as f64;
        return r - e * LN2_LO + x + e * LN2_HI;
    }

    if m < SQRT_HALF {
        e -= 1;
        m = m + m - 1.0;
    } else {
        m -= 1.0;
    }
    let z = m * m;
    let mut y = m * (z * poly::evaluate(m, &LOG_P) / poly::evaluate_monic(m, &LOG_Q));
    let e = e as f64;
    y -= e * LN2_LO;
    y -= 0.5 * z;
    m + y + e * LN2_HI
}
