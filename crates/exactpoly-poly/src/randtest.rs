//! Seeded random polynomials for tests and benchmarks.
//!
//! All randomness flows through a caller-owned [`RandState`]; there is no
//! global generator, so two states with the same seed produce the same
//! sequence of values.

use exactpoly_integers::Integer;
use num_traits::Zero;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::int_poly::IntPoly;
use crate::rat_poly::RatPoly;

/// Random state for generating test data.
#[derive(Clone, Debug)]
pub struct RandState {
    rng: ChaCha8Rng,
}

impl RandState {
    /// Creates a state from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns a uniform value in `0..limit`, or 0 when `limit` is 0.
    pub fn randint(&mut self, limit: usize) -> usize {
        if limit == 0 {
            0
        } else {
            self.rng.gen_range(0..limit)
        }
    }

    /// Returns a random integer of at most `bits` bits with a random sign.
    ///
    /// The bit length itself is uniform in `0..=bits`, so small values
    /// (including zero) show up regularly.
    pub fn integer(&mut self, bits: u32) -> Integer {
        let mut remaining = self.rng.gen_range(0..=bits);
        let mut value = Integer::ZERO;
        while remaining > 0 {
            let take = remaining.min(64);
            let limb: u64 = self.rng.gen::<u64>() >> (64 - take);
            value = value * Integer::new(2).pow(take) + Integer::from(limb);
            remaining -= take;
        }
        if self.rng.gen_bool(0.5) {
            value = -value;
        }
        value
    }

    /// Returns a random non-zero integer of at most `bits` bits.
    ///
    /// # Panics
    ///
    /// Panics if `bits` is zero.
    pub fn integer_not_zero(&mut self, bits: u32) -> Integer {
        assert!(bits > 0, "a non-zero integer needs at least one bit");
        loop {
            let value = self.integer(bits);
            if !value.is_zero() {
                return value;
            }
        }
    }

    /// Returns a random polynomial with at most `len` coefficients of at
    /// most `bits` bits each.
    pub fn int_poly(&mut self, len: usize, bits: u32) -> IntPoly {
        IntPoly::from_coeffs((0..len).map(|_| self.integer(bits)).collect())
    }

    /// Returns a random non-zero polynomial.
    ///
    /// # Panics
    ///
    /// Panics if `len` or `bits` is zero.
    pub fn int_poly_not_zero(&mut self, len: usize, bits: u32) -> IntPoly {
        assert!(len > 0 && bits > 0, "a non-zero polynomial needs a coefficient");
        loop {
            let p = self.int_poly(len, bits);
            if !p.is_zero() {
                return p;
            }
        }
    }

    /// Returns a random canonical rational polynomial.
    pub fn rat_poly(&mut self, len: usize, bits: u32) -> RatPoly {
        let num = self.int_poly(len, bits);
        let den = self.integer_not_zero(bits.max(1));
        RatPoly::from_parts(num, den)
    }

    /// Returns a random non-zero canonical rational polynomial.
    ///
    /// # Panics
    ///
    /// Panics if `len` or `bits` is zero.
    pub fn rat_poly_not_zero(&mut self, len: usize, bits: u32) -> RatPoly {
        let num = self.int_poly_not_zero(len, bits);
        let den = self.integer_not_zero(bits);
        RatPoly::from_parts(num, den)
    }

    /// Returns a random canonical rational polynomial with a non-zero
    /// constant term, suitable for power series inversion.
    ///
    /// # Panics
    ///
    /// Panics if `len` or `bits` is zero.
    pub fn rat_poly_invertible(&mut self, len: usize, bits: u32) -> RatPoly {
        let (mut num, den) = self.rat_poly_not_zero(len, bits).into_parts();
        let c0 = self.integer_not_zero(bits);
        num.set_coeff(0, c0);
        RatPoly::from_parts(num, den)
    }
}

impl Default for RandState {
    fn default() -> Self {
        Self::new(0x00c0_ffee)
    }
}
