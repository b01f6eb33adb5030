//! Errors raised while solving polynomials.

use fractus_integers::RationalError;
use thiserror::Error;

/// Errors that can occur during root finding.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The coefficient list was empty.
    #[error("polynomial has no coefficients")]
    EmptyPolynomial,

    /// An arithmetic failure while computing a root.
    #[error(transparent)]
    Arithmetic(#[from] RationalError),
}

impl SolveError {
    /// Returns true if the failure was a division by zero, e.g. a linear or
    /// quadratic equation with a zero leading coefficient.
    #[must_use]
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, SolveError::Arithmetic(RationalError::DivisionByZero))
    }
}
