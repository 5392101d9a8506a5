/// A value held as a multiple of 1/16 plus a remainder, `value = coarse + fine`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SplitValue {
    pub(crate) coarse: f64,
    pub(crate) fine: f64,
}

impl SplitValue {
    /// `coarse` is the largest multiple of 1/16 not above `value`, so
    /// `fine` lies in `[0, 1/16)`.
    #[inline(always)]
    pub(crate) fn new(value: f64) -> Self {
        let coarse = sixteenths(value);
        Self {
            coarse,
            fine: value - coarse,
        }
    }
}

#[inline(always)]
pub(crate) fn sixteenths(value: f64) -> f64 {
    (value * 16.0).floor() * 0.0625
}

/// `y · (coarse + fine)` as a [`SplitValue`], carrying the rounding of each
/// partial product through three successive splits.
#[inline]
pub(crate) fn multiply(y: f64, coarse: f64, fine: f64) -> SplitValue {
    let ys = SplitValue::new(y);

    let f = SplitValue::new(fine * y + coarse * ys.fine);
    let g = SplitValue::new(f.coarse + coarse * ys.coarse);
    let h = SplitValue::new(f.fine + g.fine);

    SplitValue {
        coarse: g.coarse + h.coarse,
        fine: h.fine,
    }
}
