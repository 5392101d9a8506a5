#![allow(clippy::excessive_precision)]

use crate::bit_view::FloatView;
use crate::consts::{double, single};
use crate::log::LogResidual;
use crate::poly;

/// Minimax fit of `ln m` around 1, after pivoting the mantissa into
/// `[1/sqrt(2), sqrt(2)]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rational;

// ln(1+f) = f - f²/2 + f³·P(f)/Q(f), Q monic.
const LOG_P: [f64; 6] = [
    1.01875663804580931796e-4,
    4.97494994976747001425e-1,
    4.70579119878881725854e0,
    1.44989225341610930846e1,
    1.79368678507819816313e1,
    7.70838733755885391666e0,
];
const LOG_Q: [f64; 5] = [
    1.12873587189167450590e1,
    4.52279145837532221105e1,
    8.29875266912776603211e1,
    7.11544750618563894466e1,
    2.31251620126765340583e1,
];

// ln(1+f) = f - f²/2 + f³·P(f).
const LOGF_P: [f32; 9] = [
    7.0376836292e-2,
    -1.1514610310e-1,
    1.1676998740e-1,
    -1.2420140846e-1,
    1.4249322787e-1,
    -1.6668057665e-1,
    2.0000714765e-1,
    -2.4999993993e-1,
    3.3333331174e-1,
];

impl LogResidual for Rational {
    #[inline]
    fn reduce(x: f64) -> (i32, f64) {
        let (mut e, mut m) = x.exponent_mantissa();
        if m > double::SQRT_2 {
            m *= 0.5;
            e += 1;
        }
        let f = m - 1.0;
        let z = f * f;
        let y = f * (z * poly::evaluate(f, &LOG_P) / poly::evaluate_monic(f, &LOG_Q));
        (e, f + (y - 0.5 * z))
    }

    #[inline]
    fn reducef(x: f32) -> (i32, f32) {
        let (mut e, mut m) = x.exponent_mantissa();
        if m > single::SQRT_2 {
            m *= 0.5;
            e += 1;
        }
        let f = m - 1.0;
        let z = f * f;
        let y = poly::evaluate(f, &LOGF_P) * f * z - 0.5 * z;
        (e, f + y)
    }
}
