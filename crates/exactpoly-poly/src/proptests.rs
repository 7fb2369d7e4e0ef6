//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use exactpoly_integers::{Integer, Rational};
    use proptest::prelude::*;

    use crate::algorithms::karatsuba::{karatsuba_mul, schoolbook_mul};
    use crate::alias::Workspace;
    use crate::int_poly::IntPoly;
    use crate::rat_poly::RatPoly;

    // Strategy for generating small integer coefficients
    fn small_coeff() -> impl Strategy<Value = Integer> {
        (-1000i64..1000i64).prop_map(Integer::new)
    }

    // Strategy for generating integer polynomials (length 0-12)
    fn int_poly() -> impl Strategy<Value = IntPoly> {
        proptest::collection::vec(small_coeff(), 0..=12).prop_map(IntPoly::from_coeffs)
    }

    // Strategy for generating non-zero integer polynomials
    fn nonzero_int_poly() -> impl Strategy<Value = IntPoly> {
        int_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
    }

    // Strategy for generating rational polynomials with a shared denominator
    fn rat_poly() -> impl Strategy<Value = RatPoly> {
        (int_poly(), 1i64..50i64).prop_map(|(num, den)| RatPoly::from_parts(num, Integer::new(den)))
    }

    // Strategy for generating rational polynomials with a non-zero constant term
    fn invertible_rat_poly() -> impl Strategy<Value = RatPoly> {
        rat_poly().prop_filter("constant term must be non-zero", |p| p.coeff(0).signum() != 0)
    }

    proptest! {
        // Integer polynomial ring axioms

        #[test]
        fn int_add_commutative(a in int_poly(), b in int_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn int_mul_associative(a in int_poly(), b in int_poly(), c in int_poly()) {
            prop_assert_eq!(a.mul(&b).mul(&c), a.mul(&b.mul(&c)));
        }

        #[test]
        fn int_distributive(a in int_poly(), b in int_poly(), c in int_poly()) {
            prop_assert_eq!(a.mul(&b.add(&c)), a.mul(&b).add(&a.mul(&c)));
        }

        #[test]
        fn int_sub_is_add_neg(a in int_poly(), b in int_poly()) {
            prop_assert_eq!(a.sub(&b), a.add(&b.neg()));
        }

        #[test]
        fn int_mullow_is_truncated_mul(a in int_poly(), b in int_poly(), n in 0usize..30) {
            let mut full = a.mul(&b);
            full.truncate(n);
            prop_assert_eq!(a.mullow(&b, n), full);
        }

        // Multiplication algorithms agree

        #[test]
        fn karatsuba_matches_schoolbook(
            a in proptest::collection::vec(small_coeff(), 1..=80),
            b in proptest::collection::vec(small_coeff(), 1..=80),
        ) {
            let slow = schoolbook_mul(&a, &b);
            let mut fast = karatsuba_mul(&a, &b);
            fast.truncate(slow.len());
            prop_assert_eq!(fast, slow);
        }

        // Pseudo-division

        #[test]
        fn pseudo_divrem_identity(a in int_poly(), b in nonzero_int_poly()) {
            let (q, r) = a.pseudo_divrem(&b);
            let d = (a.len() + 1).saturating_sub(b.len());
            let lead = b.leading_coeff().cloned().unwrap_or_default();
            let scale = lead.pow(u32::try_from(d).unwrap());

            prop_assert_eq!(a.scalar_mul(&scale), q.mul(&b).add(&r));
            prop_assert!(r.len() < b.len());
        }

        #[test]
        fn pseudo_divrem_output_overwrites_input(a in int_poly(), b in nonzero_int_poly()) {
            let expected = a.pseudo_divrem(&b);

            let mut ws = Workspace::new();
            let sa = ws.insert(a);
            let sb = ws.insert(b);
            ws.pseudo_divrem(sb, sa, sa, sb);
            prop_assert_eq!(ws.get(sb), &expected.0);
            prop_assert_eq!(ws.get(sa), &expected.1);
        }

        // Rational polynomials

        #[test]
        fn rat_results_are_canonical(a in rat_poly(), b in rat_poly()) {
            prop_assert!(a.add(&b).is_canonical());
            prop_assert!(a.sub(&b).is_canonical());
            prop_assert!(a.mul(&b).is_canonical());
        }

        #[test]
        fn rat_equal_values_equal_representations(a in rat_poly(), k in 2i64..20) {
            let (num, den) = a.clone().into_parts();
            let k = Integer::new(k);
            let mut scaled = RatPoly::from_raw_parts(num.scalar_mul(&k), &den * &k);
            scaled.canonicalize();
            prop_assert_eq!(scaled, a);
        }

        #[test]
        fn rat_sub_self_is_zero(a in rat_poly()) {
            let z = a.sub(&a);
            prop_assert!(z.is_zero());
            prop_assert_eq!(z.denominator(), &Integer::ONE);
        }

        // Power series inversion

        #[test]
        fn inv_newton_congruence(a in invertible_rat_poly(), n in 1usize..25) {
            let b = a.inv_newton(n);
            prop_assert!(b.len() <= n);
            prop_assert!(b.is_canonical());
            prop_assert_eq!(a.mullow(&b, n), RatPoly::one());
        }

        #[test]
        fn inv_newton_in_place(a in invertible_rat_poly(), n in 1usize..25) {
            let expected = a.inv_newton(n);

            let mut ws = Workspace::new();
            let s = ws.insert(a);
            ws.inv_newton(s, s, n);
            prop_assert_eq!(ws.get(s), &expected);
        }

        #[test]
        fn inv_newton_prefix_stable(a in invertible_rat_poly(), n in 1usize..20, extra in 0usize..10) {
            let mut long = a.inv_newton(n + extra);
            long.truncate(n);
            prop_assert_eq!(long, a.inv_newton(n));
        }

        // Text format

        #[test]
        fn int_text_round_trip(a in int_poly()) {
            prop_assert_eq!(a.to_string().parse::<IntPoly>(), Ok(a));
        }

        #[test]
        fn rat_text_round_trip(a in rat_poly()) {
            prop_assert_eq!(a.to_string().parse::<RatPoly>(), Ok(a));
        }

        #[test]
        fn rat_coefficients_round_trip(a in rat_poly()) {
            let coeffs: Vec<Rational> = a.to_rationals();
            prop_assert_eq!(RatPoly::from_rationals(&coeffs), a);
        }
    }
}
