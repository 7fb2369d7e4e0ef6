//! Polynomial algorithms on coefficient slices and canonical values.
//!
//! This module contains:
//! - Schoolbook, Karatsuba and truncated multiplication
//! - Cohen pseudo-division
//! - Newton iteration for power series inversion

pub mod karatsuba;
pub mod newton;
pub mod pseudo_div;
