//! Bit-level views of IEEE 754 values.
//!
//! Every reinterpretation goes through `to_bits`/`from_bits`, so a value and its
//! bit pattern always round-trip exactly. The exponent field can be read, written
//! and synthesised directly, which is how the kernels build `2^k` without calling
//! into libm.


/// Raw IEEE 754 layout of a binary floating-point type.
pub trait FloatView: Copy + Sized {
    /// Unsigned integer of the same width.
    type Bits: Copy;

    /// Number of explicitly stored mantissa bits.
    const MANTISSA_BITS: u32;
    /// Offset added to the unbiased exponent in the stored field.
    const EXPONENT_BIAS: i32;
    /// Smallest unbiased exponent of a normal number.
    const MIN_EXPONENT: i32;
    /// Largest unbiased exponent of a finite number.
    const MAX_EXPONENT: i32;
    /// Stored exponent field value of infinities and NaNs.
    const EXPONENT_FIELD_MAX: u32;

    /// `(sign, biased_exponent, mantissa_bits)`.
    fn split(self) -> (bool, u32, Self::Bits);

    /// Inverse of [`FloatView::split`]. Out-of-range fields are masked, never rejected.
    fn compose(biased_exponent: u32, mantissa: Self::Bits, sign: bool) -> Self;

    /// Exactly `2^k`, built by writing `k + bias` into the exponent field.
    ///
    /// `k` must lie in `MIN_EXPONENT..=MAX_EXPONENT`. Outside that range the resulting
    /// bit pattern is meaningless (zero, denormal garbage, infinity or NaN).
    fn make_power_of_two(k: i32) -> Self;

    /// Unbiased exponent and mantissa in `[1, 2)`, with subnormals normalised.
    ///
    /// The sign is dropped. Zero, infinity and NaN produce finite garbage.
    fn exponent_mantissa(self) -> (i32, Self);

    /// `(m, e)` with `|m|` in `[0.5, 1)` and `self == m * 2^e`.
    ///
    /// Zeros, infinities and NaN come back unchanged with `e == 0`.
    fn frexp(self) -> (Self, i32);

    /// `self * 2^n` for any `n`, overflowing to infinity and rounding subnormal
    /// results once.
    fn scalbn(self, n: i32) -> Self;

    /// The top `bits` stored mantissa bits as an index, `bits <= MANTISSA_BITS`.
    fn mantissa_top_bits(self, bits: u32) -> usize;

    /// `self` with all but the top `bits` stored mantissa bits cleared.
    fn truncate_mantissa(self, bits: u32) -> Self;

    /// `self * 2^k`, taking the single-multiply path when `2^k` is a normal number.
    #[inline]
    fn scale_by_pow2(self, k: i32) -> Self
    where
        Self: std::ops::Mul<Output = Self>,
    {
        if (Self::MIN_EXPONENT..=Self::MAX_EXPONENT).contains(&k) {
            self * Self::make_power_of_two(k)
        } else {
            self.scalbn(k)
        }
    }
}

macro_rules! impl_float_view {
    ($float:ty, $bits:ty, mantissa_bits: $mbits:expr, bias: $bias:expr, subnormal_shift: $shift:expr) => {
        impl FloatView for $float {
            type Bits = $bits;

            const MANTISSA_BITS: u32 = $mbits;
            const EXPONENT_BIAS: i32 = $bias;
            const MIN_EXPONENT: i32 = 1 - $bias;
            const MAX_EXPONENT: i32 = $bias;
            const EXPONENT_FIELD_MAX: u32 = 2 * $bias + 1;

            #[inline(always)]
            fn split(self) -> (bool, u32, $bits) {
                let bits = self.to_bits();
                let sign = (bits >> (<$bits>::BITS - 1)) != 0;
                let biased = ((bits >> $mbits) as u32) & Self::EXPONENT_FIELD_MAX;
                let mantissa = bits & (((1 as $bits) << $mbits) - 1);
                (sign, biased, mantissa)
            }

            #[inline(always)]
            fn compose(biased_exponent: u32, mantissa: $bits, sign: bool) -> Self {
                let sign = (sign as $bits) << (<$bits>::BITS - 1);
                let exponent = ((biased_exponent & Self::EXPONENT_FIELD_MAX) as $bits) << $mbits;
                let mantissa = mantissa & (((1 as $bits) << $mbits) - 1);
                <$float>::from_bits(sign | exponent | mantissa)
            }

            #[inline(always)]
            fn make_power_of_two(k: i32) -> Self {
                <$float>::from_bits((k.wrapping_add($bias) as $bits) << $mbits)
            }

            #[inline(always)]
            fn mantissa_top_bits(self, bits: u32) -> usize {
                let mantissa = self.to_bits() & (((1 as $bits) << $mbits) - 1);
                (mantissa >> ($mbits - bits)) as usize
            }

            #[inline(always)]
            fn truncate_mantissa(self, bits: u32) -> Self {
                let dropped = ((1 as $bits) << ($mbits - bits)) - 1;
                <$float>::from_bits(self.to_bits() & !dropped)
            }

            #[inline]
            fn exponent_mantissa(self) -> (i32, Self) {
                let (_, mut biased, mut mantissa) = self.split();
                let mut adjust = 0;
                if biased == 0 {
                    let (_, b, m) = (self * Self::make_power_of_two($shift)).split();
                    biased = b;
                    mantissa = m;
                    adjust = $shift;
                }
                (
                    biased as i32 - $bias - adjust,
                    Self::compose($bias as u32, mantissa, false),
                )
            }

            fn frexp(self) -> (Self, i32) {
                let (sign, biased, mantissa) = self.split();
                if biased == Self::EXPONENT_FIELD_MAX {
                    return (self, 0);
                }
                if biased == 0 {
                    if mantissa == 0 {
                        return (self, 0);
                    }
                    let (m, e) = (self * Self::make_power_of_two($shift)).frexp();
                    return (m, e - $shift);
                }
                (
                    Self::compose(($bias - 1) as u32, mantissa, sign),
                    biased as i32 - ($bias - 1),
                )
            }

            fn scalbn(self, mut n: i32) -> Self {
                // Two steps of the extreme exponent are enough to saturate any input.
                let mut y = self;
                if n > Self::MAX_EXPONENT {
                    y *= Self::make_power_of_two(Self::MAX_EXPONENT);
                    n -= Self::MAX_EXPONENT;
                    if n > Self::MAX_EXPONENT {
                        y *= Self::make_power_of_two(Self::MAX_EXPONENT);
                        n -= Self::MAX_EXPONENT;
                        n = n.min(Self::MAX_EXPONENT);
                    }
                } else if n < Self::MIN_EXPONENT {
                    // Stop MANTISSA_BITS + 1 above the normal range so a subnormal
                    // result is rounded by the last multiply only.
                    let lift = Self::MIN_EXPONENT + $mbits + 1;
                    y *= Self::make_power_of_two(lift);
                    n -= lift;
                    if n < Self::MIN_EXPONENT {
                        y *= Self::make_power_of_two(lift);
                        n -= lift;
                        n = n.max(Self::MIN_EXPONENT);
                    }
                }
                y * Self::make_power_of_two(n)
            }
        }
    };
}

impl_float_view!(f64, u64, mantissa_bits: 52, bias: 1023, subnormal_shift: 54);
impl_float_view!(f32, u32, mantissa_bits: 23, bias: 127, subnormal_shift: 25);
