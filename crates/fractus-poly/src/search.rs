//! Rational root search.
//!
//! By the rational root theorem, a root `p/q` in lowest terms of an integer
//! polynomial has `p` dividing the constant term and `q` dividing the
//! leading coefficient. The search enumerates those quotients and keeps the
//! ones at which the polynomial evaluates to exactly zero.
//!
//! Only positive candidates are tried. Negative roots, and a root at zero,
//! are never reported.

use fractus_integers::{Integer, Rational};
use num_traits::{One, Zero};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::divisors::divisors;
use crate::error::SolveError;
use crate::eval::evaluate;

/// Configuration for the rational root search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RootSearch {
    /// Drop repeated roots, keeping the first occurrence.
    ///
    /// Off by default: `2/2` and `1/1` are both reported when `1` is a root.
    pub deduplicate: bool,
    /// Evaluate candidates on the rayon pool.
    pub parallel: bool,
    /// Minimum number of constant-term divisors before going parallel.
    pub parallel_threshold: usize,
}

impl Default for RootSearch {
    fn default() -> Self {
        Self {
            deduplicate: false,
            parallel: false,
            parallel_threshold: 16,
        }
    }
}

/// Finds the positive rational roots of a polynomial.
///
/// Candidates are emitted in discovery order: ascending divisors `p` of the
/// constant term, then ascending divisors `q` of the leading coefficient.
///
/// # Errors
///
/// Propagates arithmetic errors from candidate construction.
pub fn find_rational_roots(coefficients: &[Rational]) -> Result<Vec<Rational>, SolveError> {
    find_rational_roots_with(coefficients, &RootSearch::default())
}

/// Finds the positive rational roots of a polynomial with the given search
/// configuration.
///
/// The parallel search returns exactly what the sequential one would.
///
/// # Errors
///
/// Propagates arithmetic errors from candidate construction.
pub fn find_rational_roots_with(
    coefficients: &[Rational],
    search: &RootSearch,
) -> Result<Vec<Rational>, SolveError> {
    let integral = integral_coefficients(coefficients);
    let (Some(leading), Some(constant)) = (integral.first(), integral.last()) else {
        return Ok(Vec::new());
    };

    let ps = divisors(constant);
    let qs = divisors(leading);
    let parallel = search.parallel && ps.len() >= search.parallel_threshold;
    debug!(
        p_count = ps.len(),
        q_count = qs.len(),
        parallel,
        "searching rational root candidates"
    );

    let roots_for = |p: &Integer| -> Result<Vec<Rational>, SolveError> {
        let mut found = Vec::new();
        for q in &qs {
            let candidate = Rational::new(p.clone(), q.clone())?;
            if evaluate(coefficients, &candidate).is_zero() {
                trace!(root = %candidate, "accepted candidate");
                found.push(candidate);
            }
        }
        Ok(found)
    };

    let per_p: Vec<Vec<Rational>> = if parallel {
        ps.par_iter().map(roots_for).collect::<Result<_, _>>()?
    } else {
        ps.iter().map(roots_for).collect::<Result<_, _>>()?
    };

    let mut roots: Vec<Rational> = per_p.into_iter().flatten().collect();
    if search.deduplicate {
        let mut seen = FxHashSet::default();
        roots.retain(|r| seen.insert(r.clone()));
    }
    Ok(roots)
}

/// Scales the coefficients by the LCM of their denominators.
///
/// The result has integer entries and the same roots.
fn integral_coefficients(coefficients: &[Rational]) -> Vec<Integer> {
    let scale = coefficients
        .iter()
        .fold(Integer::one(), |acc, c| acc.lcm(c.denominator()));
    coefficients
        .iter()
        .map(|c| c.numerator() * &(&scale / c.denominator()))
        .collect()
}
