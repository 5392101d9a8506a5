//! Base-2 logarithm with a few guard bits, anchored on a table of `2^(-i/16)`.

use crate::bit_view::FloatView;
use crate::consts::double;
use crate::poly;

/// `A[i] = 2^(-i/16)`, `i = 0..=16`.
pub(crate) const ANCHORS: [f64; 17] = [
    f64::from_bits(0x3ff0_0000_0000_0000),
    f64::from_bits(0x3fee_a4af_a2a4_90da),
    f64::from_bits(0x3fed_5818_dcfb_a487),
    f64::from_bits(0x3fec_199b_dd85_529c),
    f64::from_bits(0x3fea_e89f_995a_d3ad),
    f64::from_bits(0x3fe9_c491_82a3_f090),
    f64::from_bits(0x3fe8_ace5_422a_a0db),
    f64::from_bits(0x3fe7_a114_73eb_0187),
    f64::from_bits(0x3fe6_a09e_667f_3bcd),
    f64::from_bits(0x3fe5_ab07_dd48_5429),
    f64::from_bits(0x3fe4_bfda_d536_2a27),
    f64::from_bits(0x3fe3_dea6_4c12_3422),
    f64::from_bits(0x3fe3_06fe_0a31_b715),
    f64::from_bits(0x3fe2_387a_6e75_6238),
    f64::from_bits(0x3fe1_72b8_3c7d_517b),
    f64::from_bits(0x3fe0_b558_6cf9_890f),
    f64::from_bits(0x3fe0_0000_0000_0000),
];

/// Low words of the even-indexed anchors: `2^(-2i/16) ≈ A[2i] + B[i]`.
pub(crate) const LOW_WORDS: [f64; 9] = [
    0.0,
    f64::from_bits(0x3c72_ed02_d75b_3707),
    f64::from_bits(0x3c87_a1cd_345d_cc81),
    f64::from_bits(0x3c86_e9f1_5686_4b27),
    f64::from_bits(0xbc8b_dd34_13b2_6456),
    f64::from_bits(0x3c6d_4397_afec_42e2),
    f64::from_bits(0x3c76_f46a_d231_82e4),
    f64::from_bits(0xbc71_9041_b9d7_8a76),
    0.0,
];

// ln(1+v) = v - v²/2 + v³·P(v)/Q(v), |v| < 1/32, Q monic.
const LOG1P_P: [f64; 4] = [
    f64::from_bits(0x3fdf_db99_7f5b_5cf0),
    f64::from_bits(0x400d_ddef_ea9e_df15),
    f64::from_bits(0x401e_ccbd_7f78_eb6f),
    f64::from_bits(0x4012_aa83_b65c_9b74),
];
const LOG1P_Q: [f64; 4] = [
    f64::from_bits(0x4022_aab4_9b20_914e),
    f64::from_bits(0x403b_ffff_41c1_c9f5),
    f64::from_bits(0x4040_ccbc_1b17_6402),
    f64::from_bits(0x402b_ffc5_918a_e92e),
];

/// Even index `i` of the anchor closest to `m` in `[0.5, 1)` from above,
/// found with four comparisons.
#[inline(always)]
pub(crate) fn anchor_index(m: f64) -> usize {
    let mut i = 1;
    if m <= ANCHORS[9] {
        i = 9;
    }
    if m <= ANCHORS[i + 4] {
        i += 4;
    }
    if m <= ANCHORS[i + 2] {
        i += 2;
    }
    if m >= ANCHORS[1] {
        0
    } else {
        i + 1
    }
}

/// `log2(x) = coarse + fine` for positive finite `x`.
///
/// `coarse` is the exponent minus the anchor's sixteenths and is exact; `fine`
/// is `log2` of the mantissa relative to the anchor, `|fine| < 1/16`.
#[inline]
pub(crate) fn log2_split(x: f64) -> (f64, f64) {
    let (m, e) = x.frexp();
    let i = anchor_index(m);

    let v = (m - ANCHORS[i] - LOW_WORDS[i / 2]) / ANCHORS[i];
    let z = v * v;
    let mut w = v * (z * poly::evaluate(v, &LOG1P_P) / poly::evaluate_monic(v, &LOG1P_Q));
    w -= 0.5 * z;

    // Fold in log2(e) = 1 + LOG2_E_M1 without rounding v·log2(e) as one product.
    w += double::LOG2_E_M1 * w;
    let fine = w + double::LOG2_E_M1 * v + v;

    let coarse = e as f64 - i as f64 * 0.0625;
    (coarse, fine)
}
