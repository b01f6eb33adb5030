//! Degree-dispatched root finding.
//!
//! - Degree 0: a constant, nothing to solve.
//! - Degree 1: `-b/a`.
//! - Degree 2: the quadratic formula with an integer square root of the
//!   discriminant.
//! - Degree > 2: the positive rational root search in [`crate::search`].
//!
//! ## Quadratic limitation
//!
//! The square root of a positive discriminant is taken as the integer square
//! root of its integer part. Roots are exact only when the discriminant is a
//! perfect-square integer; otherwise the returned values are not roots. A
//! warning is logged in that case.
//!
//! A positive discriminant below 1 truncates to 0, so both returned values
//! equal `-b / 2a`: `x² − x + 3/16` (roots 3/4 and 1/4) yields `[1/2, 1/2]`.

use fractus_integers::{Integer, Rational, RationalError};
use num_traits::Zero;
use tracing::{debug, warn};

use crate::error::SolveError;
use crate::search::{find_rational_roots_with, RootSearch};

/// The outcome of solving a polynomial equation `p(x) = 0`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RootResult {
    /// Degree 0: the polynomial is a constant.
    NoEquation,
    /// A quadratic with a negative discriminant.
    NoRealRoots,
    /// Roots in the order produced by the degree's strategy. May be empty
    /// for the rational root search.
    Roots(Vec<Rational>),
}

impl RootResult {
    /// Returns the roots, empty for the non-root variants.
    #[must_use]
    pub fn roots(&self) -> &[Rational] {
        match self {
            RootResult::Roots(roots) => roots,
            RootResult::NoEquation | RootResult::NoRealRoots => &[],
        }
    }

    /// Consumes the result, returning the roots.
    #[must_use]
    pub fn into_roots(self) -> Vec<Rational> {
        match self {
            RootResult::Roots(roots) => roots,
            RootResult::NoEquation | RootResult::NoRealRoots => Vec::new(),
        }
    }
}

/// Solves `p(x) = 0` for coefficients ordered from the highest degree down.
///
/// # Errors
///
/// - [`SolveError::EmptyPolynomial`] for an empty slice.
/// - Division by zero for a linear or quadratic equation whose leading
///   coefficient is zero.
pub fn solve(coefficients: &[Rational]) -> Result<RootResult, SolveError> {
    solve_with(coefficients, &RootSearch::default())
}

/// Like [`solve`], with an explicit configuration for degree > 2.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_with(
    coefficients: &[Rational],
    search: &RootSearch,
) -> Result<RootResult, SolveError> {
    debug!(coefficients = coefficients.len(), "solving polynomial");
    match coefficients {
        [] => Err(SolveError::EmptyPolynomial),
        [_] => Ok(RootResult::NoEquation),
        [a, b] => solve_linear(a, b),
        [a, b, c] => solve_quadratic(a, b, c),
        _ => find_rational_roots_with(coefficients, search).map(RootResult::Roots),
    }
}

/// Solves `a*x + b = 0`.
///
/// # Errors
///
/// Division by zero when `a` is zero.
pub fn solve_linear(a: &Rational, b: &Rational) -> Result<RootResult, SolveError> {
    let root = (-b).checked_div(a)?;
    Ok(RootResult::Roots(vec![root]))
}

/// Solves `a*x² + b*x + c = 0`.
///
/// For a positive discriminant the roots are `(-b + s) / 2a` then
/// `(-b - s) / 2a`, where `s` is the integer square root of the
/// discriminant's integer part.
///
/// # Errors
///
/// Division by zero when `a` is zero.
pub fn solve_quadratic(
    a: &Rational,
    b: &Rational,
    c: &Rational,
) -> Result<RootResult, SolveError> {
    if a.is_zero() {
        return Err(RationalError::DivisionByZero.into());
    }

    let two_a = a * 2;
    let discriminant = b * b - &(a * c * 4);

    match discriminant.signum() {
        -1 => Ok(RootResult::NoRealRoots),
        0 => Ok(RootResult::Roots(vec![(-b).checked_div(&two_a)?])),
        _ => {
            let whole = discriminant.trunc();
            if !discriminant.is_integer() || !whole.is_perfect_square() {
                warn!(
                    %discriminant,
                    "discriminant is not a perfect square, quadratic roots are inexact"
                );
            }
            let sqrt = Rational::from(whole.isqrt().unwrap_or_else(Integer::zero));
            let root1 = (&sqrt - b).checked_div(&two_a)?;
            let root2 = (-b - sqrt).checked_div(&two_a)?;
            Ok(RootResult::Roots(vec![root1, root2]))
        }
    }
}
