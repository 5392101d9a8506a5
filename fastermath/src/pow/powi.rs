use super::antilog::log2_split;
use crate::reference::init_constants;

/// `x^n` by repeated squaring.
///
/// The natural log of the result is estimated from `log2 |x|` before any
/// multiplication. Results well outside the representable range return `±∞`
/// or `±0` directly; inside a one-unit margin of the limits the squaring runs
/// and overflows or underflows on its own. Odd powers keep the sign of `x`,
/// including a signed zero base.
pub fn powi(x: f64, n: i32) -> f64 {
    let c = init_constants();

    if x == 0.0 {
        let odd = n & 1 == 1;
        return match n {
            0 => 1.0,
            n if n < 0 => {
                if odd && x.is_sign_negative() {
                    -c.infinity
                } else {
                    c.infinity
                }
            }
            _ => {
                if odd {
                    x
                } else {
                    0.0
                }
            }
        };
    }
    if n == 0 {
        return 1.0;
    }
    if n == -1 {
        return 1.0 / x;
    }

    let negate = x < 0.0 && n & 1 == 1;
    let mut base = x.abs();
    let mut reciprocal = n < 0;

    let ln_estimate = if base.is_finite() {
        let (coarse, fine) = log2_split(base);
        (coarse + fine) * n as f64 * c.ln2
    } else {
        0.0
    };

    let result = if ln_estimate > c.max_log + 1.0 {
        c.infinity
    } else if ln_estimate < c.min_log - 1.0 {
        0.0
    } else {
        // Near either end of the range the power taken before the reciprocal
        // would leave it, so invert the base up front instead.
        if reciprocal && ln_estimate.abs() > c.max_log - 2.0 {
            base = 1.0 / base;
            reciprocal = false;
        }

        let mut bits = n.unsigned_abs();
        let mut y = if bits & 1 == 1 { base } else { 1.0 };
        let mut w = base;
        bits >>= 1;
        while bits != 0 {
            w *= w;
            if bits & 1 == 1 {
                y *= w;
            }
            bits >>= 1;
        }

        if reciprocal {
            1.0 / y
        } else {
            y
        }
    };

    if negate {
        -result
    } else {
        result
    }
}

#[inline]
pub fn powif(x: f32, n: i32) -> f32 {
    powi(x as f64, n) as f32
}
