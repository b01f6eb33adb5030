//! Property-based tests for exact arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::stats::{max, max_by_abs, mean, parse_lines};
    use crate::{Integer, Rational, RationalError};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::from_i64(n, d).unwrap())
    }

    fn non_zero_rational() -> impl Strategy<Value = Rational> {
        (non_zero_int(), non_zero_int()).prop_map(|(n, d)| Rational::from_i64(n, d).unwrap())
    }

    proptest! {
        // Construction invariants

        #[test]
        fn construction_is_reduced(n in small_int(), d in non_zero_int()) {
            let x = Rational::from_i64(n, d).unwrap();
            prop_assert!(x.denominator().is_positive());
            prop_assert!(x.numerator().gcd(x.denominator()).is_one());
        }

        #[test]
        fn construction_preserves_value(n in small_int(), d in non_zero_int()) {
            // n/d == x.n/x.d  <=>  n * x.d == x.n * d
            let x = Rational::from_i64(n, d).unwrap();
            prop_assert_eq!(
                Integer::new(n) * x.denominator(),
                x.numerator() * &Integer::new(d)
            );
        }

        #[test]
        fn zero_denominator_always_fails(n in small_int()) {
            prop_assert_eq!(Rational::from_i64(n, 0), Err(RationalError::DivisionByZero));
        }

        #[test]
        fn display_parse_roundtrip(x in rational()) {
            let parsed: Rational = x.to_string().parse().unwrap();
            prop_assert_eq!(parsed, x);
        }

        // Field identities

        #[test]
        fn rational_add_identity(x in rational()) {
            prop_assert_eq!(&x + &Rational::zero(), x.clone());
            prop_assert_eq!(x.clone() + 0, x);
        }

        #[test]
        fn rational_mul_identity(x in rational()) {
            prop_assert_eq!(&x * &Rational::one(), x.clone());
            prop_assert_eq!(x.clone() * 1, x);
        }

        #[test]
        fn rational_sub_self_is_zero(x in rational()) {
            prop_assert!((&x - &x).is_zero());
        }

        #[test]
        fn rational_div_self_is_one(x in non_zero_rational()) {
            prop_assert!(x.checked_div(&x).unwrap().is_one());
        }

        #[test]
        fn rational_add_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn rational_mul_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn rational_distributive(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(&a * &(&b + &c), &a * &b + &a * &c);
        }

        #[test]
        fn rational_multiplicative_inverse(x in non_zero_rational()) {
            let product = &x * &x.recip().unwrap();
            prop_assert!(product.is_one());
        }

        #[test]
        fn division_undoes_multiplication(a in rational(), b in non_zero_rational()) {
            prop_assert_eq!((&a * &b).checked_div(&b).unwrap(), a);
        }

        // Powers

        #[test]
        fn pow_adds_exponents(x in non_zero_rational(), m in -4i32..4, n in -4i32..4) {
            let lhs = x.pow(m).unwrap() * x.pow(n).unwrap();
            prop_assert_eq!(lhs, x.pow(m + n).unwrap());
        }

        #[test]
        fn pow_matches_repeated_multiplication(x in rational(), n in 0i32..6) {
            let mut expected = Rational::one();
            for _ in 0..n {
                expected = expected * &x;
            }
            prop_assert_eq!(x.pow(n).unwrap(), expected);
        }

        // Ordering

        #[test]
        fn ordering_matches_float(a in rational(), b in rational()) {
            if a != b {
                prop_assert_eq!(a < b, a.to_f64() < b.to_f64());
            }
        }

        #[test]
        fn ordering_respects_subtraction(a in rational(), b in rational()) {
            prop_assert_eq!(a < b, (&a - &b).is_negative());
        }

        // GCD properties

        #[test]
        fn gcd_divides_both(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let g = a.gcd(&b);

            prop_assert!((&a % &g).is_zero());
            prop_assert!((&b % &g).is_zero());
        }

        #[test]
        fn isqrt_is_floor(n in 0i64..1_000_000) {
            let n = Integer::new(n);
            let r = n.isqrt().unwrap();
            let next = &r + &Integer::one();
            prop_assert!(&r * &r <= n);
            prop_assert!(&next * &next > n);
        }

        #[test]
        fn perfect_square_of_square(n in 0i64..1_000_000) {
            let n = Integer::new(n);
            prop_assert!((&n * &n).is_perfect_square());
        }

        // List summaries

        #[test]
        fn listed_values_parse_back(values in prop::collection::vec(rational(), 0..12)) {
            let text: String = values.iter().map(|v| format!("{v}\n\n")).collect();
            prop_assert_eq!(parse_lines(&text).unwrap(), values);
        }

        #[test]
        fn max_bounds_every_value(values in prop::collection::vec(rational(), 1..12)) {
            let top = max(&values).unwrap();
            let top_abs = max_by_abs(&values).unwrap().abs();
            for v in &values {
                prop_assert!(v <= top);
                prop_assert!(v.abs() <= top_abs);
            }
        }

        #[test]
        fn mean_times_len_is_sum(values in prop::collection::vec(rational(), 1..12)) {
            let len = i64::try_from(values.len()).unwrap();
            let total: Rational = values.iter().sum();
            prop_assert_eq!(mean(&values).unwrap() * len, total);
        }
    }
}
