//! Exact polynomial evaluation.
//!
//! Polynomials are plain coefficient slices ordered from the highest-degree
//! term down to the constant term.

use fractus_integers::Rational;
use num_traits::Zero;

/// Returns the degree of a coefficient slice, or `None` if it is empty.
#[must_use]
pub fn degree(coefficients: &[Rational]) -> Option<usize> {
    coefficients.len().checked_sub(1)
}

/// Evaluates the polynomial at `x` using Horner's method.
///
/// Computes `Σ coefficients[i] * x^(degree - i)` without leaving exact
/// arithmetic. An empty slice evaluates to zero.
#[must_use]
pub fn evaluate(coefficients: &[Rational], x: &Rational) -> Rational {
    coefficients
        .iter()
        .fold(Rational::zero(), |acc, c| acc * x + c)
}
