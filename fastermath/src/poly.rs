//! Horner evaluation of stored coefficient lists.
//!
//! Coefficients are ordered from the highest degree down to the constant term,
//! matching the way minimax tables are usually published.

use num_traits::Float;

/// `c[0]·x^n + c[1]·x^(n-1) + … + c[n]`. An empty list evaluates to zero.
#[inline(always)]
pub fn evaluate<T: Float>(x: T, coeffs: &[T]) -> T {
    match coeffs.split_first() {
        Some((&first, rest)) => rest.iter().fold(first, |acc, &c| acc * x + c),
        None => T::zero(),
    }
}

/// Same as [`evaluate`] with an implicit leading coefficient of 1 that is not stored.
#[inline(always)]
pub fn evaluate_monic<T: Float>(x: T, coeffs: &[T]) -> T {
    coeffs.iter().fold(T::one(), |acc, &c| acc * x + c)
}
