//! Property-based tests for evaluation and root finding.

#[cfg(test)]
mod tests {
    use fractus_integers::{Integer, Rational};
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::divisors::divisors;
    use crate::eval::evaluate;
    use crate::roots::{solve, RootResult};
    use crate::search::{find_rational_roots, find_rational_roots_with, RootSearch};

    // Strategy for generating small rational coefficients
    fn small_coeff() -> impl Strategy<Value = Rational> {
        (-20i64..20i64, 1i64..6i64).prop_map(|(n, d)| Rational::from_i64(n, d).unwrap())
    }

    // Strategy for generating small polynomials (degree 0-4)
    fn small_poly() -> impl Strategy<Value = Vec<Rational>> {
        proptest::collection::vec(small_coeff(), 1..=5)
    }

    // Strategy for generating small positive roots p/q
    fn positive_root() -> impl Strategy<Value = Rational> {
        (1i64..8i64, 1i64..4i64).prop_map(|(p, q)| Rational::from_i64(p, q).unwrap())
    }

    /// Expands `lead * Π (x - r)` into coefficients, highest degree first.
    fn from_roots(lead: &Rational, roots: &[Rational]) -> Vec<Rational> {
        let mut coeffs = vec![lead.clone()];
        for r in roots {
            let mut next = coeffs.clone();
            next.push(Rational::zero());
            for (i, c) in coeffs.iter().enumerate() {
                next[i + 1] = &next[i + 1] - &(c * r);
            }
            coeffs = next;
        }
        coeffs
    }

    proptest! {
        #[test]
        fn evaluate_matches_power_sum(p in small_poly(), x in small_coeff()) {
            let degree = p.len() - 1;
            let mut expected = Rational::zero();
            for (i, c) in p.iter().enumerate() {
                let exp = i32::try_from(degree - i).unwrap();
                expected = expected + c * &x.pow(exp).unwrap();
            }
            prop_assert_eq!(evaluate(&p, &x), expected);
        }

        #[test]
        fn evaluate_is_linear(p in small_poly(), x in small_coeff(), k in small_coeff()) {
            let scaled: Vec<Rational> = p.iter().map(|c| c * &k).collect();
            prop_assert_eq!(evaluate(&scaled, &x), &evaluate(&p, &x) * &k);
        }

        #[test]
        fn linear_root_satisfies_equation(a in small_coeff(), b in small_coeff()) {
            prop_assume!(!a.is_zero());
            let coeffs = vec![a, b];
            let roots = solve(&coeffs).unwrap().into_roots();
            prop_assert_eq!(roots.len(), 1);
            prop_assert!(evaluate(&coeffs, &roots[0]).is_zero());
        }

        #[test]
        fn quadratic_with_integer_roots_is_exact(
            r1 in -10i64..10,
            r2 in -10i64..10,
            lead in 1i64..5,
        ) {
            // Integer roots and integer leading coefficient give a perfect-square discriminant.
            let planted = [Rational::from(r1), Rational::from(r2)];
            let coeffs = from_roots(&Rational::from(lead), &planted);
            let result = solve(&coeffs).unwrap();
            let roots = result.roots();
            if r1 == r2 {
                prop_assert_eq!(roots, &[Rational::from(r1)][..]);
            } else {
                let expected = [Rational::from(r1.max(r2)), Rational::from(r1.min(r2))];
                prop_assert_eq!(roots, &expected[..]);
            }
        }

        #[test]
        fn quadratic_without_real_roots(a in 1i64..10, c in 1i64..10) {
            // a*x² + c with a, c > 0
            let coeffs = vec![Rational::from(a), Rational::zero(), Rational::from(c)];
            prop_assert_eq!(solve(&coeffs).unwrap(), RootResult::NoRealRoots);
        }

        #[test]
        fn search_finds_planted_positive_roots(
            roots in proptest::collection::vec(positive_root(), 3..=4),
        ) {
            let coeffs = from_roots(&Rational::from(1), &roots);
            let search = RootSearch { deduplicate: true, ..RootSearch::default() };
            let found = find_rational_roots_with(&coeffs, &search).unwrap();
            for r in &roots {
                prop_assert!(found.contains(r));
            }
            for r in &found {
                prop_assert!(evaluate(&coeffs, r).is_zero());
            }
        }

        #[test]
        fn search_never_reports_negative_values(p in small_poly()) {
            prop_assume!(p.len() > 3);
            for r in find_rational_roots(&p).unwrap() {
                prop_assert!(r.signum() > 0);
                prop_assert!(evaluate(&p, &r).is_zero());
            }
        }

        #[test]
        fn parallel_search_matches_sequential(p in small_poly()) {
            let parallel = RootSearch {
                parallel: true,
                parallel_threshold: 1,
                ..RootSearch::default()
            };
            prop_assert_eq!(
                find_rational_roots_with(&p, &parallel).unwrap(),
                find_rational_roots(&p).unwrap()
            );
        }

        #[test]
        fn divisors_divide(n in -5000i64..5000) {
            let n = Integer::new(n);
            let ds = divisors(&n);
            for pair in ds.windows(2) {
                prop_assert!(pair[0] < pair[1]);
            }
            for d in &ds {
                prop_assert!((&n % d).is_zero());
            }
        }
    }
}
