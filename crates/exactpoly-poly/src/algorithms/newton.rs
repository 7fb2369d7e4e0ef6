//! Power series inversion by Newton iteration.
//!
//! Given `a` with `a(0) != 0` and an approximation `b` of `1/a` correct to
//! `k` terms, the update
//!
//! ```text
//! b' = b * (2 - a*b)   mod t^m,   m <= 2k
//! ```
//!
//! is correct to `m` terms. Starting from `1/a(0)` and doubling the working
//! precision, the total cost is a constant multiple of one truncated
//! multiplication at the target precision.

use tracing::trace;

use crate::rat_poly::RatPoly;

/// Returns the working precisions used to reach `n`, in increasing order.
///
/// The sequence is `n` halved (rounding up) until it reaches 1, reversed,
/// with the initial precision 1 omitted. Each entry is at most twice the
/// previous one, so every Newton step is valid, and the last entry is `n`.
#[must_use]
pub fn newton_schedule(n: usize) -> Vec<usize> {
    let mut precisions = Vec::new();
    let mut m = n;
    while m > 1 {
        precisions.push(m);
        m = m.div_ceil(2);
    }
    precisions.reverse();
    precisions
}

/// Computes `1/a mod t^n`.
///
/// Requires `n >= 1` and a non-zero constant term in `a`; callers check
/// these.
#[must_use]
pub fn inv_series(a: &RatPoly, n: usize) -> RatPoly {
    debug_assert!(n >= 1);
    debug_assert!(a.coeff(0).signum() != 0);

    let mut b = RatPoly::constant(a.coeff(0).recip());
    if n == 1 {
        return b;
    }

    let two = RatPoly::from_i64s(&[2]);
    let mut prev = 1;
    for m in newton_schedule(n) {
        trace!(from = prev, to = m, "newton inversion step");
        let ab = a.mullow(&b, m);
        let correction = two.sub(&ab);
        b = b.mullow(&correction, m);
        prev = m;
    }
    b
}
