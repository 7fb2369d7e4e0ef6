//! Text rendering and parsing.
//!
//! Both polynomial types print as the coefficient count, two spaces, and
//! the coefficients in ascending degree order separated by single spaces:
//!
//! ```text
//! 3  1 0 -2          1 - 2x^2
//! 2  1/2 -3/4        1/2 - 3x/4
//! 0                  zero
//! ```
//!
//! Parsing accepts the same form, so printed values read back exactly.

use std::fmt;
use std::str::FromStr;

use exactpoly_integers::{Integer, Rational};

use crate::error::PolyError;
use crate::int_poly::IntPoly;
use crate::rat_poly::RatPoly;

impl fmt::Display for IntPoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.len())?;
        if !self.is_zero() {
            write!(f, " ")?;
        }
        for c in self.coeffs() {
            write!(f, " {c}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for IntPoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IntPoly[")?;
        for (i, c) in self.coeffs().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, "]")
    }
}

impl fmt::Display for RatPoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.len())?;
        if !self.is_zero() {
            write!(f, " ")?;
        }
        for c in self.to_rationals() {
            write!(f, " {c}")?;
        }
        Ok(())
    }
}

/// Splits `s` into its declared length and coefficient tokens.
fn split_tokens(s: &str) -> Result<Vec<&str>, PolyError> {
    let mut tokens = s.split_whitespace();
    let len: usize = tokens
        .next()
        .ok_or_else(|| PolyError::Parse("empty input".to_string()))?
        .parse()
        .map_err(|_| PolyError::Parse(format!("bad length in {s:?}")))?;

    let coeffs: Vec<&str> = tokens.collect();
    if coeffs.len() != len {
        return Err(PolyError::Parse(format!(
            "declared {len} coefficients, found {}",
            coeffs.len()
        )));
    }
    Ok(coeffs)
}

fn parse_integer(token: &str) -> Result<Integer, PolyError> {
    token
        .parse()
        .map_err(|_| PolyError::Parse(format!("bad integer {token:?}")))
}

fn parse_rational(token: &str) -> Result<Rational, PolyError> {
    match token.split_once('/') {
        None => parse_integer(token).map(Rational::from_integer),
        Some((num, den)) => {
            let num = parse_integer(num)?;
            let den = parse_integer(den)?;
            if den.signum() == 0 {
                return Err(PolyError::ZeroDenominator);
            }
            Ok(Rational::new(num, den))
        }
    }
}

impl FromStr for IntPoly {
    type Err = PolyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let coeffs = split_tokens(s)?
            .into_iter()
            .map(parse_integer)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_coeffs(coeffs))
    }
}

impl FromStr for RatPoly {
    type Err = PolyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let coeffs = split_tokens(s)?
            .into_iter()
            .map(parse_rational)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_rationals(&coeffs))
    }
}
