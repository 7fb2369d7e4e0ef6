//! Dense univariate polynomials over the integers.
//!
//! Coefficients are stored in ascending degree order with no trailing
//! zeros, so the zero polynomial has length 0 and structural equality is
//! value equality. Capacity beyond the length is insignificant.

use exactpoly_integers::Integer;
use num_traits::Zero;

use crate::alias::{Slot, Workspace};
use crate::algorithms::{karatsuba, pseudo_div};
use crate::error::{PolyError, Result};

/// A dense polynomial with arbitrary precision integer coefficients.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct IntPoly {
    /// Coefficients in ascending degree order; the last one is non-zero.
    coeffs: Vec<Integer>,
}

impl IntPoly {
    /// Creates the zero polynomial without allocating.
    #[must_use]
    pub const fn new() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// Creates a polynomial from coefficients, stripping trailing zeros.
    #[must_use]
    pub fn from_coeffs(coeffs: Vec<Integer>) -> Self {
        let mut p = Self { coeffs };
        p.normalize();
        p
    }

    /// Creates a polynomial from small coefficients.
    #[must_use]
    pub fn from_i64s(coeffs: &[i64]) -> Self {
        Self::from_coeffs(coeffs.iter().copied().map(Integer::new).collect())
    }

    /// Creates the constant polynomial `c`.
    #[must_use]
    pub fn constant(c: Integer) -> Self {
        Self::from_coeffs(vec![c])
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(Integer::ONE)
    }

    /// Resets to zero and releases the coefficient storage.
    pub fn clear(&mut self) {
        self.coeffs = Vec::new();
    }

    /// Ensures room for at least `n` coefficients without changing the value.
    pub fn fit_length(&mut self, n: usize) {
        if n > self.coeffs.capacity() {
            self.coeffs.reserve(n - self.coeffs.len());
        }
    }

    /// Returns the allocated coefficient capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.coeffs.capacity()
    }

    /// Strips trailing zero coefficients.
    pub fn normalize(&mut self) {
        while self.coeffs.last().is_some_and(|c| c.is_zero()) {
            self.coeffs.pop();
        }
    }

    /// Returns the number of stored coefficients.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Returns true if this is the constant polynomial 1.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0] == Integer::ONE
    }

    /// Returns the degree, or `None` for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    /// Returns the leading coefficient, or `None` for the zero polynomial.
    #[must_use]
    pub fn leading_coeff(&self) -> Option<&Integer> {
        self.coeffs.last()
    }

    /// Returns the coefficient of x^i.
    #[must_use]
    pub fn coeff(&self, i: usize) -> Integer {
        self.coeffs.get(i).cloned().unwrap_or_default()
    }

    /// Returns all coefficients.
    #[must_use]
    pub fn coeffs(&self) -> &[Integer] {
        &self.coeffs
    }

    /// Consumes the polynomial and returns its coefficients.
    #[must_use]
    pub fn into_coeffs(self) -> Vec<Integer> {
        self.coeffs
    }

    /// Sets the coefficient of x^i, growing or shrinking the length as
    /// needed.
    pub fn set_coeff(&mut self, i: usize, c: Integer) {
        if i >= self.coeffs.len() {
            if c.is_zero() {
                return;
            }
            self.coeffs.resize(i + 1, Integer::ZERO);
        }
        self.coeffs[i] = c;
        self.normalize();
    }

    /// Returns the non-negative gcd of the coefficients; zero for the zero
    /// polynomial.
    #[must_use]
    pub fn content(&self) -> Integer {
        let mut g = Integer::ZERO;
        for c in self.coeffs.iter().filter(|c| !c.is_zero()) {
            g = g.gcd(c);
            if g == Integer::ONE {
                break;
            }
        }
        g
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let (long, short) = if self.len() >= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        let mut coeffs = long.coeffs.clone();
        for (dst, c) in coeffs.iter_mut().zip(&short.coeffs) {
            *dst += c;
        }
        Self::from_coeffs(coeffs)
    }

    /// Subtracts `other` from `self`.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        let mut coeffs = self.coeffs.clone();
        if coeffs.len() < other.len() {
            coeffs.resize(other.len(), Integer::ZERO);
        }
        for (dst, c) in coeffs.iter_mut().zip(&other.coeffs) {
            *dst -= c;
        }
        Self::from_coeffs(coeffs)
    }

    /// Negates the polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            coeffs: self.coeffs.iter().map(|c| -c).collect(),
        }
    }

    /// Multiplies every coefficient by `c`.
    #[must_use]
    pub fn scalar_mul(&self, c: &Integer) -> Self {
        if c.is_zero() {
            return Self::new();
        }
        Self {
            coeffs: self.coeffs.iter().map(|x| x * c).collect(),
        }
    }

    /// Divides every coefficient by `c`, which must divide each of them.
    ///
    /// # Panics
    ///
    /// Panics if `c` is zero.
    #[must_use]
    pub fn scalar_div_exact(&self, c: &Integer) -> Self {
        Self {
            coeffs: self.coeffs.iter().map(|x| x.div_exact(c)).collect(),
        }
    }

    /// Multiplies two polynomials.
    ///
    /// Selects schoolbook or Karatsuba multiplication by operand length.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::new();
        }
        Self::from_coeffs(karatsuba::mul(&self.coeffs, &other.coeffs))
    }

    /// Multiplies two polynomials, keeping only the terms of degree `< n`.
    #[must_use]
    pub fn mullow(&self, other: &Self, n: usize) -> Self {
        if self.is_zero() || other.is_zero() || n == 0 {
            return Self::new();
        }
        Self::from_coeffs(karatsuba::mullow(&self.coeffs, &other.coeffs, n))
    }

    /// Drops all terms of degree `>= n`.
    pub fn truncate(&mut self, n: usize) {
        if n < self.coeffs.len() {
            self.coeffs.truncate(n);
            self.normalize();
        }
    }

    /// Computes the Cohen pseudo-quotient and pseudo-remainder.
    ///
    /// Returns `(q, r)` with `lead(b)^d * self = q * b + r`, where
    /// `d = max(len(self) - len(b) + 1, 0)` and `r` is zero or has degree
    /// below that of `b`.
    ///
    /// # Panics
    ///
    /// Panics if `b` is the zero polynomial.
    #[must_use]
    pub fn pseudo_divrem(&self, b: &Self) -> (Self, Self) {
        let mut q = Self::new();
        let mut r = Self::new();
        Self::pseudo_divrem_into(&mut q, &mut r, self, b);
        (q, r)
    }

    /// Like [`IntPoly::pseudo_divrem`], but reports a zero divisor as an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DivisionByZero`] if `b` is zero.
    pub fn checked_pseudo_divrem(&self, b: &Self) -> Result<(Self, Self)> {
        if b.is_zero() {
            return Err(PolyError::DivisionByZero);
        }
        Ok(self.pseudo_divrem(b))
    }

    /// Writes the Cohen pseudo-quotient and pseudo-remainder of `a` by `b`
    /// into `q` and `r`, reusing their storage.
    ///
    /// Use [`Workspace::pseudo_divrem`] when an output should overwrite an
    /// input.
    ///
    /// # Panics
    ///
    /// Panics if `b` is the zero polynomial.
    pub fn pseudo_divrem_into(q: &mut Self, r: &mut Self, a: &Self, b: &Self) {
        assert!(!b.is_zero(), "pseudo-division by the zero polynomial");

        if a.len() < b.len() {
            q.coeffs.clear();
            r.coeffs.clear();
            r.coeffs.extend_from_slice(&a.coeffs);
            return;
        }

        pseudo_div::pseudo_divrem_cohen(&mut q.coeffs, &mut r.coeffs, &a.coeffs, &b.coeffs);
        q.normalize();
    }
}

impl Workspace<IntPoly> {
    /// Sets `out` to `a + b`. Any slots may coincide.
    pub fn add(&mut self, out: Slot, a: Slot, b: Slot) {
        self.write_one(out, &[a, b], |dst, ws| {
            *dst = ws.get(a).add(ws.get(b));
        });
    }

    /// Sets `out` to `a - b`. Any slots may coincide.
    pub fn sub(&mut self, out: Slot, a: Slot, b: Slot) {
        self.write_one(out, &[a, b], |dst, ws| {
            *dst = ws.get(a).sub(ws.get(b));
        });
    }

    /// Sets `out` to `a * b`. Any slots may coincide.
    pub fn mul(&mut self, out: Slot, a: Slot, b: Slot) {
        self.write_one(out, &[a, b], |dst, ws| {
            *dst = ws.get(a).mul(ws.get(b));
        });
    }

    /// Sets `out` to `c * a`. The slots may coincide.
    pub fn scalar_mul(&mut self, out: Slot, a: Slot, c: &Integer) {
        self.write_one(out, &[a], |dst, ws| {
            *dst = ws.get(a).scalar_mul(c);
        });
    }

    /// Writes the Cohen pseudo-quotient of `a` by `b` into `q` and the
    /// pseudo-remainder into `r`.
    ///
    /// Either output may be the same slot as `a` or `b`; the result is
    /// identical to the computation with four distinct slots.
    ///
    /// # Panics
    ///
    /// Panics if `q == r` or if `b` holds the zero polynomial.
    pub fn pseudo_divrem(&mut self, q: Slot, r: Slot, a: Slot, b: Slot) {
        self.write_two(q, r, &[a, b], |q_dst, r_dst, ws| {
            IntPoly::pseudo_divrem_into(q_dst, r_dst, ws.get(a), ws.get(b));
        });
    }
}

impl From<Vec<Integer>> for IntPoly {
    fn from(coeffs: Vec<Integer>) -> Self {
        Self::from_coeffs(coeffs)
    }
}
