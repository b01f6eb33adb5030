//! # fractus-integers
//!
//! Exact integer and rational arithmetic for fractus.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Always-reduced rationals with a positive denominator (`Rational`)
//! - Line-oriented list parsing with exact max, max-by-abs and mean (`stats`)
//!
//! Fallible operations (zero denominators, malformed text, bad exponents)
//! return [`RationalError`] instead of panicking.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod integer;
pub mod rational;
pub mod stats;

#[cfg(test)]
mod proptests;

pub use error::RationalError;
pub use integer::Integer;
pub use rational::Rational;
