//! Error types for checked polynomial operations and parsing.

use thiserror::Error;

/// Errors reported by the `checked_*` entry points and by parsing.
///
/// The unchecked operations treat these conditions as precondition
/// violations and panic instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolyError {
    /// The divisor is the zero polynomial.
    #[error("division by the zero polynomial")]
    DivisionByZero,
    /// The power series has a zero constant term and is not invertible.
    #[error("power series with zero constant term has no inverse")]
    ZeroConstantTerm,
    /// A series precision of zero was requested.
    #[error("series precision must be at least 1")]
    ZeroPrecision,
    /// A rational polynomial was given a zero denominator.
    #[error("denominator cannot be zero")]
    ZeroDenominator,
    /// The textual form could not be parsed.
    #[error("invalid polynomial literal: {0}")]
    Parse(String),
}

/// Result type for polynomial operations.
pub type Result<T> = std::result::Result<T, PolyError>;
