//! # Fractus
//!
//! Exact rational arithmetic and polynomial root finding.
//!
//! ## Features
//!
//! - **Exact Rationals**: always reduced, positive denominator, arbitrary precision
//! - **Checked Arithmetic**: zero divisors and malformed text surface as errors
//! - **Root Finding**: closed forms for degree 1 and 2, rational root search above
//! - **Parallel Search**: optional rayon-backed candidate evaluation
//! - **List Summaries**: exact max, max by absolute value and mean (`integers::stats`)
//!
//! ## Quick Start
//!
//! ```rust
//! use fractus::prelude::*;
//!
//! let coeffs: Vec<Rational> = ["1", "-3", "2"]
//!     .iter()
//!     .map(|t| t.parse::<Rational>())
//!     .collect::<Result<_, _>>()?;
//!
//! let roots = solve(&coeffs)?;
//! assert_eq!(roots, RootResult::Roots(vec![Rational::from(2), Rational::from(1)]));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use fractus_integers as integers;
pub use fractus_poly as poly;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use fractus_integers::{Integer, Rational, RationalError};
    pub use fractus_poly::{
        evaluate, find_rational_roots, find_rational_roots_with, solve, solve_with, RootResult,
        RootSearch, SolveError,
    };
    pub use num_traits::{One, Zero};
}
