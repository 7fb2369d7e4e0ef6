//! # exactpoly-integers
//!
//! Arbitrary precision integer and rational arithmetic for exactpoly.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Arbitrary precision rationals (`Rational`)
//!
//! The polynomial engine treats these as opaque primitives and only
//! composes the operations exposed here.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use rational::Rational;
