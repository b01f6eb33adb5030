//! Errors raised by rational arithmetic.

use thiserror::Error;

/// Errors that can occur when constructing or combining rationals.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RationalError {
    /// A zero denominator or divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// Text that is neither `<int>` nor `<int>/<int>`.
    #[error("invalid rational number format: {0:?}")]
    Format(String),

    /// An exponent that is not a whole number, or too large to apply.
    #[error("exponent must be a whole number that fits in 32 bits, got {0}")]
    InvalidExponent(String),
}
