//! # exactpoly
//!
//! Exact univariate polynomial arithmetic over the integers and the
//! rationals.
//!
//! ## Features
//!
//! - **Arbitrary Precision**: Coefficients are big integers and rationals
//! - **Pseudo-Division**: Cohen's fraction-free division of integer polynomials
//! - **Series Inversion**: Newton iteration on rational power series
//! - **Aliasing-Safe Outputs**: Workspace operations accept outputs that
//!   coincide with inputs
//!
//! ## Quick Start
//!
//! ```rust
//! use exactpoly::prelude::*;
//!
//! // x^2 pseudo-divided by 2x + 1
//! let a = IntPoly::from_i64s(&[0, 0, 1]);
//! let b = IntPoly::from_i64s(&[1, 2]);
//! let (q, r) = a.pseudo_divrem(&b);
//! assert_eq!(q, IntPoly::from_i64s(&[-1, 2]));
//! assert_eq!(r, IntPoly::from_i64s(&[1]));
//!
//! // 1 / (1 + x) to four terms
//! let s = RatPoly::from_i64s(&[1, 1]).inv_newton(4);
//! assert_eq!(s.to_string(), "4  1 -1 1 -1");
//!
//! // Overwrite the divisor with the quotient and the dividend with the remainder
//! let mut ws = Workspace::new();
//! let sa = ws.insert(a);
//! let sb = ws.insert(b);
//! ws.pseudo_divrem(sb, sa, sa, sb);
//! assert_eq!(ws.get(sb), &q);
//! assert_eq!(ws.get(sa), &r);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use exactpoly_integers as integers;
pub use exactpoly_poly as poly;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use exactpoly_integers::{Integer, Rational};
    pub use exactpoly_poly::{IntPoly, PolyError, RatPoly, Slot, Workspace};
}
