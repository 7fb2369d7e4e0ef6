//! Dense univariate polynomials over the rationals.
//!
//! A [`RatPoly`] is an integer numerator polynomial over one positive
//! denominator shared by every coefficient. Values are kept in canonical
//! form: the denominator is positive and coprime to the numerator's
//! content, and zero is stored as `0 / 1`. Canonical representations are
//! unique, so structural equality is value equality.

use exactpoly_integers::{Integer, Rational};
use num_traits::{One, Zero};

use crate::alias::{Slot, Workspace};
use crate::algorithms::newton;
use crate::error::{PolyError, Result};
use crate::int_poly::IntPoly;

/// A rational polynomial `num / den`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct RatPoly {
    num: IntPoly,
    den: Integer,
}

impl RatPoly {
    /// Creates the zero polynomial.
    #[must_use]
    pub fn new() -> Self {
        Self {
            num: IntPoly::new(),
            den: Integer::ONE,
        }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::from_integer_poly(IntPoly::one())
    }

    /// Creates the constant polynomial `c`.
    #[must_use]
    pub fn constant(c: Rational) -> Self {
        Self::from_raw_parts(IntPoly::constant(c.numerator()), c.denominator())
    }

    /// Creates a polynomial with small integer coefficients.
    #[must_use]
    pub fn from_i64s(coeffs: &[i64]) -> Self {
        Self::from_integer_poly(IntPoly::from_i64s(coeffs))
    }

    /// Creates a polynomial with denominator 1.
    #[must_use]
    pub fn from_integer_poly(num: IntPoly) -> Self {
        Self {
            num,
            den: Integer::ONE,
        }
    }

    /// Creates `num / den` in canonical form.
    ///
    /// # Panics
    ///
    /// Panics if `den` is zero.
    #[must_use]
    pub fn from_parts(num: IntPoly, den: Integer) -> Self {
        assert!(!den.is_zero(), "denominator cannot be zero");
        let mut p = Self { num, den };
        p.canonicalize();
        p
    }

    /// Like [`RatPoly::from_parts`], but reports a zero denominator as an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::ZeroDenominator`] if `den` is zero.
    pub fn try_from_parts(num: IntPoly, den: Integer) -> Result<Self> {
        if den.is_zero() {
            return Err(PolyError::ZeroDenominator);
        }
        Ok(Self::from_parts(num, den))
    }

    /// Creates `num / den` without canonicalizing.
    ///
    /// The caller must establish canonical form (for example with
    /// [`RatPoly::canonicalize`]) before comparing or printing the value.
    #[must_use]
    pub fn from_raw_parts(num: IntPoly, den: Integer) -> Self {
        Self { num, den }
    }

    /// Creates a polynomial from rational coefficients in ascending degree
    /// order.
    #[must_use]
    pub fn from_rationals(coeffs: &[Rational]) -> Self {
        let den = coeffs.iter().fold(Integer::ONE, |acc, c| {
            let d = c.denominator();
            let g = acc.gcd(&d);
            acc.div_exact(&g) * d
        });
        let num = coeffs
            .iter()
            .map(|c| c.numerator() * den.div_exact(&c.denominator()))
            .collect();
        Self::from_parts(IntPoly::from_coeffs(num), den)
    }

    /// Resets to zero and releases the numerator storage.
    pub fn clear(&mut self) {
        self.num.clear();
        self.den = Integer::ONE;
    }

    /// Ensures room for at least `n` numerator coefficients.
    pub fn fit_length(&mut self, n: usize) {
        self.num.fit_length(n);
    }

    /// Returns the numerator polynomial.
    #[must_use]
    pub fn numerator(&self) -> &IntPoly {
        &self.num
    }

    /// Returns the shared denominator.
    #[must_use]
    pub fn denominator(&self) -> &Integer {
        &self.den
    }

    /// Splits into numerator and denominator.
    #[must_use]
    pub fn into_parts(self) -> (IntPoly, Integer) {
        (self.num, self.den)
    }

    /// Returns the number of stored coefficients.
    #[must_use]
    pub fn len(&self) -> usize {
        self.num.len()
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.num.is_zero()
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.num.is_zero()
    }

    /// Returns true if this is the constant polynomial 1.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.num.is_one() && self.den.is_one()
    }

    /// Returns the degree, or `None` for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        self.num.degree()
    }

    /// Returns the coefficient of x^i.
    #[must_use]
    pub fn coeff(&self, i: usize) -> Rational {
        Rational::new(self.num.coeff(i), self.den.clone())
    }

    /// Returns all coefficients as rationals.
    #[must_use]
    pub fn to_rationals(&self) -> Vec<Rational> {
        self.num
            .coeffs()
            .iter()
            .map(|c| Rational::new(c.clone(), self.den.clone()))
            .collect()
    }

    /// Sets the coefficient of x^i and restores canonical form.
    pub fn set_coeff(&mut self, i: usize, c: &Rational) {
        let c_den = c.denominator();
        let g = self.den.gcd(&c_den);
        let den_scale = c_den.div_exact(&g);
        let c_scale = self.den.div_exact(&g);

        if !den_scale.is_one() {
            self.num = self.num.scalar_mul(&den_scale);
            self.den *= &den_scale;
        }
        self.num.set_coeff(i, c.numerator() * c_scale);
        self.canonicalize();
    }

    /// Returns true if the representation is canonical.
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        if self.num.is_zero() {
            return self.den.is_one();
        }
        self.den.is_positive() && self.num.content().gcd(&self.den).is_one()
    }

    /// Restores canonical form: divides out the common factor of the
    /// numerator content and the denominator, makes the denominator
    /// positive, and maps zero to `0 / 1`.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    pub fn canonicalize(&mut self) {
        assert!(!self.den.is_zero(), "denominator cannot be zero");

        if self.num.is_zero() {
            self.den = Integer::ONE;
            return;
        }
        if self.den.is_one() {
            return;
        }

        let mut g = self.num.content().gcd(&self.den);
        if self.den.is_negative() {
            g.neg_assign();
        }
        if !g.is_one() {
            self.num = self.num.scalar_div_exact(&g);
            self.den = self.den.div_exact(&g);
        }
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        self.combine(other, false)
    }

    /// Subtracts `other` from `self`.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.combine(other, true)
    }

    fn combine(&self, other: &Self, negate: bool) -> Self {
        let other_num = if negate { other.num.neg() } else { other.num.clone() };
        if self.den == other.den {
            return Self::from_parts(self.num.add(&other_num), self.den.clone());
        }

        let g = self.den.gcd(&other.den);
        let self_scale = other.den.div_exact(&g);
        let other_scale = self.den.div_exact(&g);
        let num = self
            .num
            .scalar_mul(&self_scale)
            .add(&other_num.scalar_mul(&other_scale));
        Self::from_parts(num, &self.den * &self_scale)
    }

    /// Negates the polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            num: self.num.neg(),
            den: self.den.clone(),
        }
    }

    /// Multiplies two polynomials.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        Self::from_parts(self.num.mul(&other.num), &self.den * &other.den)
    }

    /// Multiplies two polynomials, keeping only the terms of degree `< n`.
    #[must_use]
    pub fn mullow(&self, other: &Self, n: usize) -> Self {
        Self::from_parts(self.num.mullow(&other.num, n), &self.den * &other.den)
    }

    /// Drops all terms of degree `>= n` and restores canonical form.
    pub fn truncate(&mut self, n: usize) {
        if n < self.num.len() {
            self.num.truncate(n);
            self.canonicalize();
        }
    }

    /// Computes the power series inverse `1/self mod t^n` by Newton
    /// iteration.
    ///
    /// The result `b` satisfies `self * b ≡ 1 (mod t^n)` and has at most
    /// `n` terms.
    ///
    /// # Panics
    ///
    /// Panics if `n == 0` or if the constant term of `self` is zero.
    #[must_use]
    pub fn inv_newton(&self, n: usize) -> Self {
        assert!(n >= 1, "series precision must be at least 1");
        assert!(
            !self.num.coeff(0).is_zero(),
            "power series with zero constant term has no inverse"
        );
        newton::inv_series(self, n)
    }

    /// Like [`RatPoly::inv_newton`], but reports violated preconditions as
    /// errors.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::ZeroPrecision`] if `n == 0` and
    /// [`PolyError::ZeroConstantTerm`] if the constant term is zero.
    pub fn checked_inv_newton(&self, n: usize) -> Result<Self> {
        if n == 0 {
            return Err(PolyError::ZeroPrecision);
        }
        if self.num.coeff(0).is_zero() {
            return Err(PolyError::ZeroConstantTerm);
        }
        Ok(newton::inv_series(self, n))
    }

    /// Writes `1/a mod t^n` into `b`.
    ///
    /// Use [`Workspace::inv_newton`] to invert in place.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`RatPoly::inv_newton`].
    pub fn inv_newton_into(b: &mut Self, a: &Self, n: usize) {
        *b = a.inv_newton(n);
    }
}

impl Default for RatPoly {
    fn default() -> Self {
        Self::new()
    }
}

impl From<IntPoly> for RatPoly {
    fn from(num: IntPoly) -> Self {
        Self::from_integer_poly(num)
    }
}

impl Workspace<RatPoly> {
    /// Sets `out` to `a + b`. Any slots may coincide.
    pub fn add(&mut self, out: Slot, a: Slot, b: Slot) {
        self.write_one(out, &[a, b], |dst, ws| {
            *dst = ws.get(a).add(ws.get(b));
        });
    }

    /// Sets `out` to `a * b`. Any slots may coincide.
    pub fn mul(&mut self, out: Slot, a: Slot, b: Slot) {
        self.write_one(out, &[a, b], |dst, ws| {
            *dst = ws.get(a).mul(ws.get(b));
        });
    }

    /// Sets `out` to `a * b mod t^n`. Any slots may coincide.
    pub fn mullow(&mut self, out: Slot, a: Slot, b: Slot, n: usize) {
        self.write_one(out, &[a, b], |dst, ws| {
            *dst = ws.get(a).mullow(ws.get(b), n);
        });
    }

    /// Truncates the polynomial in `slot` to `n` terms.
    pub fn truncate(&mut self, slot: Slot, n: usize) {
        self.get_mut(slot).truncate(n);
    }

    /// Restores canonical form of the polynomial in `slot`.
    pub fn canonicalize(&mut self, slot: Slot) {
        self.get_mut(slot).canonicalize();
    }

    /// Writes `1/a mod t^n` into `b`. The slots may coincide.
    ///
    /// # Panics
    ///
    /// Panics if `n == 0` or if the constant term of `a` is zero.
    pub fn inv_newton(&mut self, b: Slot, a: Slot, n: usize) {
        self.write_one(b, &[a], |dst, ws| {
            RatPoly::inv_newton_into(dst, ws.get(a), n);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::randtest::RandState;

    fn q(n: i64, d: i64) -> Rational {
        Rational::from_i64(n, d)
    }

    #[test]
    fn test_zero_representation() {
        let z = RatPoly::new();
        assert!(z.is_zero());
        assert!(z.is_canonical());
        assert_eq!(z.denominator(), &Integer::ONE);

        let z = RatPoly::from_parts(IntPoly::new(), Integer::new(-12));
        assert_eq!(z, RatPoly::new());
        assert_eq!(RatPoly::default(), RatPoly::new());
    }

    #[test]
    fn test_canonicalize_reduces_and_fixes_sign() {
        // (4 + 6x) / -8 = (-2 - 3x) / 4
        let p = RatPoly::from_parts(IntPoly::from_i64s(&[4, 6]), Integer::new(-8));
        assert_eq!(p.numerator(), &IntPoly::from_i64s(&[-2, -3]));
        assert_eq!(p.denominator(), &Integer::new(4));
        assert!(p.is_canonical());
    }

    #[test]
    fn test_canonicalize_with_zero_low_terms() {
        // 6x^2 / 4 = 3x^2 / 2
        let mut p = RatPoly::from_raw_parts(IntPoly::from_i64s(&[0, 0, 6]), Integer::new(4));
        assert!(!p.is_canonical());
        p.canonicalize();
        assert_eq!(p.numerator(), &IntPoly::from_i64s(&[0, 0, 3]));
        assert_eq!(p.denominator(), &Integer::new(2));

        let half_x: RatPoly = "2  0 1/2".parse().unwrap();
        assert_eq!(half_x.mul(&half_x).to_rationals(), vec![q(0, 1), q(0, 1), q(1, 4)]);
    }

    #[test]
    fn test_canonical_form_is_unique() {
        let a = RatPoly::from_parts(IntPoly::from_i64s(&[3, 9]), Integer::new(6));
        let b = RatPoly::from_parts(IntPoly::from_i64s(&[-5, -15]), Integer::new(-10));
        let c = RatPoly::from_rationals(&[q(1, 2), q(3, 2)]);
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(a.numerator().coeffs(), b.numerator().coeffs());
    }

    #[test]
    fn test_raw_parts_need_canonicalize() {
        let mut p = RatPoly::from_raw_parts(IntPoly::from_i64s(&[2, 4]), Integer::new(2));
        assert!(!p.is_canonical());
        p.canonicalize();
        assert_eq!(p, RatPoly::from_i64s(&[1, 2]));
    }

    #[test]
    fn test_coefficients() {
        let mut p = RatPoly::from_rationals(&[q(1, 2), q(0, 1), q(-2, 3)]);
        assert_eq!(p.denominator(), &Integer::new(6));
        assert_eq!(p.coeff(0), q(1, 2));
        assert_eq!(p.coeff(2), q(-2, 3));
        assert_eq!(p.coeff(9), q(0, 1));

        p.set_coeff(1, &q(5, 4));
        assert_eq!(p.to_rationals(), vec![q(1, 2), q(5, 4), q(-2, 3)]);
        assert_eq!(p.denominator(), &Integer::new(12));

        p.set_coeff(2, &q(0, 1));
        p.set_coeff(1, &q(0, 1));
        assert_eq!(p, RatPoly::constant(q(1, 2)));
    }

    #[test]
    fn test_arithmetic() {
        let a = RatPoly::from_rationals(&[q(1, 2), q(1, 3)]);
        let b = RatPoly::from_rationals(&[q(1, 6), q(2, 3)]);

        assert_eq!(a.add(&b).to_rationals(), vec![q(2, 3), q(1, 1)]);
        assert_eq!(a.sub(&b).to_rationals(), vec![q(1, 3), q(-1, 3)]);
        assert!(a.sub(&a).is_zero());
        assert_eq!(a.neg().add(&a), RatPoly::new());
        // (1/2 + x/3)(1/6 + 2x/3) = 1/12 + 7x/18 + 2x^2/9
        assert_eq!(a.mul(&b).to_rationals(), vec![q(1, 12), q(7, 18), q(2, 9)]);
        assert_eq!(a.mullow(&b, 2).to_rationals(), vec![q(1, 12), q(7, 18)]);
    }

    #[test]
    fn test_truncate_recanonicalizes() {
        // (1 + 2x^2) / 2 truncated to 2 terms is 1/2; (2 + x) / 2 to 1 is 1.
        let mut p = RatPoly::from_parts(IntPoly::from_i64s(&[1, 0, 2]), Integer::new(2));
        p.truncate(2);
        assert_eq!(p, RatPoly::constant(q(1, 2)));

        let mut p = RatPoly::from_parts(IntPoly::from_i64s(&[2, 1]), Integer::new(2));
        p.truncate(1);
        assert!(p.is_one());
        p.truncate(0);
        assert!(p.is_zero());
        assert!(p.is_canonical());
    }

    #[test]
    fn test_inv_newton_one_plus_x() {
        let a = RatPoly::from_i64s(&[1, 1]);
        let b = a.inv_newton(4);
        assert_eq!(b, RatPoly::from_i64s(&[1, -1, 1, -1]));
    }

    #[test]
    fn test_inv_newton_precision_one() {
        // Only the constant term matters at n = 1.
        let a = RatPoly::from_rationals(&[q(-3, 5), q(7, 2), q(1, 9)]);
        let b = a.inv_newton(1);
        assert_eq!(b, RatPoly::constant(q(-5, 3)));
    }

    #[test]
    fn test_checked_inv_newton() {
        let a = RatPoly::from_i64s(&[0, 1]);
        assert_eq!(a.checked_inv_newton(3), Err(PolyError::ZeroConstantTerm));
        assert_eq!(RatPoly::one().checked_inv_newton(0), Err(PolyError::ZeroPrecision));
        assert_eq!(RatPoly::one().checked_inv_newton(5), Ok(RatPoly::one()));
    }

    #[test]
    #[should_panic(expected = "zero constant term")]
    fn test_inv_newton_zero_constant_panics() {
        let _ = RatPoly::from_i64s(&[0, 2]).inv_newton(3);
    }

    #[test]
    fn test_inv_newton_random_congruence() {
        let mut state = RandState::new(2010);
        for _ in 0..200 {
            let n = state.randint(40) + 1;
            let len = state.randint(40) + 1;
            let a = state.rat_poly_invertible(len, 40);

            let b = a.inv_newton(n);
            assert!(b.len() <= n);
            assert!(b.is_canonical());

            let mut c = a.mul(&b);
            c.truncate(n);
            assert!(c.is_one(), "a = {a}, b = {b}, n = {n}");
        }
    }

    #[test]
    fn test_inv_newton_in_place() {
        let mut state = RandState::new(99);
        for _ in 0..100 {
            let n = state.randint(30) + 1;
            let len = state.randint(30) + 1;
            let a = state.rat_poly_invertible(len, 30);
            let expected = a.inv_newton(n);

            let mut ws = Workspace::new();
            let sa = ws.insert(a.clone());
            let fresh = ws.alloc();
            ws.inv_newton(fresh, sa, n);
            ws.inv_newton(sa, sa, n);

            assert_eq!(ws.get(sa), &expected);
            assert_eq!(ws.get(fresh), ws.get(sa));
        }
    }

    #[test]
    fn test_workspace_truncated_product() {
        let mut ws = Workspace::new();
        let a = ws.insert(RatPoly::from_i64s(&[1, 1]));
        let inv = ws.alloc();
        ws.inv_newton(inv, a, 5);
        ws.mul(a, a, inv);
        ws.truncate(a, 5);
        assert!(ws.get(a).is_one());

        ws.mullow(inv, inv, inv, 3);
        ws.canonicalize(inv);
        // (1 - x + x^2 - ...)^2 = 1 - 2x + 3x^2 - ...
        assert_eq!(ws.get(inv), &RatPoly::from_i64s(&[1, -2, 3]));
        ws.add(inv, inv, inv);
        assert_eq!(ws.get(inv), &RatPoly::from_i64s(&[2, -4, 6]));
    }
}
