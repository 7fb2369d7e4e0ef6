//! Property-based tests for the integer and rational primitives.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{Integer, Rational};

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    // Values well beyond a machine word.
    fn big_int() -> impl Strategy<Value = Integer> {
        (small_int(), small_int(), 0u32..6).prop_map(|(hi, lo, k)| {
            Integer::new(hi) * Integer::new(1_000_000_007).pow(k * 3) + Integer::new(lo)
        })
    }

    proptest! {
        #[test]
        fn integer_distributive(a in big_int(), b in big_int(), c in big_int()) {
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        }

        #[test]
        fn integer_additive_inverse(a in big_int()) {
            prop_assert!((&a + &(-&a)).is_zero());
        }

        #[test]
        fn addmul_matches_expanded(acc in big_int(), a in big_int(), b in big_int()) {
            let mut fused = acc.clone();
            fused.addmul(&a, &b);
            prop_assert_eq!(fused, &acc + &(&a * &b));
        }

        #[test]
        fn submul_matches_expanded(acc in big_int(), a in big_int(), b in big_int()) {
            let mut fused = acc.clone();
            fused.submul(&a, &b);
            prop_assert_eq!(fused, &acc - &(&a * &b));
        }

        #[test]
        fn pow_is_repeated_product(a in small_int(), e in 0u32..12) {
            let base = Integer::new(a);
            let mut expected = Integer::one();
            for _ in 0..e {
                expected *= &base;
            }
            prop_assert_eq!(base.pow(e), expected);
        }

        #[test]
        fn gcd_divides_both(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let g = a.gcd(&b);

            prop_assert!(g.is_positive());
            prop_assert!((&a % &g).is_zero());
            prop_assert!((&b % &g).is_zero());
        }

        #[test]
        fn div_exact_inverts_mul(a in big_int(), b in non_zero_int()) {
            let b = Integer::new(b);
            prop_assert_eq!((&a * &b).div_exact(&b), a);
        }

        #[test]
        fn rational_is_reduced(num in small_int(), den in non_zero_int()) {
            let r = Rational::from_i64(num, den);
            prop_assert!(r.denominator().is_positive());
            prop_assert!(r.numerator().gcd(&r.denominator()).is_one());
        }

        #[test]
        fn rational_multiplicative_inverse(num in non_zero_int(), den in non_zero_int()) {
            let a = Rational::from_i64(num, den);
            let product = &a * &a.recip();
            prop_assert!(product.is_one());
        }
    }
}
