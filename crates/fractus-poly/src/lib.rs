//! # fractus-poly
//!
//! Exact polynomial evaluation and root finding over the rationals.
//!
//! A polynomial is a slice of [`Rational`](fractus_integers::Rational)
//! coefficients ordered from the highest-degree term down to the constant.
//!
//! ## Strategy Selection
//!
//! [`solve`] picks a strategy by degree:
//! - Degree 0: [`RootResult::NoEquation`]
//! - Degree 1: closed form `-b/a`
//! - Degree 2: quadratic formula (exact for perfect-square discriminants)
//! - Degree > 2: positive rational root search, optionally parallel

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod divisors;
pub mod error;
pub mod eval;
pub mod roots;
pub mod search;

#[cfg(test)]
mod proptests;

pub use divisors::divisors;
pub use error::SolveError;
pub use eval::{degree, evaluate};
pub use roots::{solve, solve_linear, solve_quadratic, solve_with, RootResult};
pub use search::{find_rational_roots, find_rational_roots_with, RootSearch};
