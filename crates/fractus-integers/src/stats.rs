//! Summary values over a list of rationals.
//!
//! Lists are read one value per line; blank lines are skipped. Ties in
//! [`max`] and [`max_by_abs`] resolve to the earliest element, so `-3` wins
//! over a later `3` when ranking by absolute value.

use crate::{Rational, RationalError};

/// Parses one rational per line, skipping blank lines.
///
/// # Errors
///
/// Returns the first [`RationalError`] produced by a non-blank line.
pub fn parse_lines(text: &str) -> Result<Vec<Rational>, RationalError> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::parse::<Rational>)
        .collect()
}

/// Returns the largest value, or `None` for an empty list.
#[must_use]
pub fn max(values: &[Rational]) -> Option<&Rational> {
    first_max_by_key(values, Rational::clone)
}

/// Returns the value with the largest absolute value, or `None` for an
/// empty list.
#[must_use]
pub fn max_by_abs(values: &[Rational]) -> Option<&Rational> {
    first_max_by_key(values, Rational::abs)
}

/// Returns the exact arithmetic mean, or `None` for an empty list.
#[must_use]
pub fn mean(values: &[Rational]) -> Option<Rational> {
    let len = i64::try_from(values.len()).ok().filter(|&n| n > 0)?;
    values.iter().sum::<Rational>().checked_div_int(len).ok()
}

// `Iterator::max_by_key` keeps the last of equal elements.
fn first_max_by_key<F>(values: &[Rational], key: F) -> Option<&Rational>
where
    F: Fn(&Rational) -> Rational,
{
    let (first, rest) = values.split_first()?;
    let (best, _) = rest.iter().fold((first, key(first)), |(best, best_key), x| {
        let k = key(x);
        if k > best_key {
            (x, k)
        } else {
            (best, best_key)
        }
    });
    Some(best)
}
