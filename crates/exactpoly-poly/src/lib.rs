//! # exactpoly-poly
//!
//! Exact dense polynomial arithmetic over the integers and the rationals.
//!
//! This crate provides:
//! - [`IntPoly`]: dense polynomials over arbitrary precision integers
//! - [`RatPoly`]: rational polynomials as an integer numerator over a
//!   single positive denominator, kept in canonical form
//! - Pseudo-division of integer polynomials (Cohen's formulation)
//! - Power series inversion by Newton iteration
//! - [`Workspace`]: slot-addressed storage whose operations accept
//!   outputs that coincide with inputs
//!
//! ## Algorithm Selection
//!
//! Multiplication automatically selects the algorithm:
//! - Operand length < `KARATSUBA_THRESHOLD`: Schoolbook O(n²)
//! - Otherwise: Karatsuba O(n^1.58)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod alias;
pub mod algorithms;
pub mod error;
pub mod fmt;
pub mod int_poly;
pub mod rat_poly;

#[cfg(any(test, feature = "randtest"))]
pub mod randtest;

#[cfg(test)]
mod proptests;

pub use alias::{Slot, Workspace};
pub use algorithms::karatsuba::KARATSUBA_THRESHOLD;
pub use error::{PolyError, Result};
pub use int_poly::IntPoly;
pub use rat_poly::RatPoly;
