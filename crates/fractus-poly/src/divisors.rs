//! Positive divisors of integers.

use fractus_integers::Integer;
use num_traits::{One, Zero};

/// Returns the positive divisors of `|n|` in ascending order.
///
/// Zero has no finite divisor set; an empty vector is returned for it.
#[must_use]
pub fn divisors(n: &Integer) -> Vec<Integer> {
    let n = n.abs();
    if n.is_zero() {
        return Vec::new();
    }

    let mut small = Vec::new();
    let mut large = Vec::new();
    let mut d = Integer::one();

    while &d * &d <= n {
        if (&n % &d).is_zero() {
            let cofactor = &n / &d;
            if cofactor != d {
                large.push(cofactor);
            }
            small.push(d.clone());
        }
        d = d + Integer::one();
    }

    small.extend(large.into_iter().rev());
    small
}
