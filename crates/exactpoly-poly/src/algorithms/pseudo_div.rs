//! Pseudo-division of integer polynomials.
//!
//! Implements Cohen's formulation (Algorithm 3.1.2 in "A Course in
//! Computational Algebraic Number Theory"): each elimination step scales
//! the quotient and the remainder by the divisor's leading coefficient, so
//! every intermediate value stays integral. The outputs satisfy
//!
//! ```text
//! lead(b)^d * a = q * b + r,   d = len(a) - len(b) + 1
//! ```
//!
//! Steps skipped because the remainder dropped several degrees at once are
//! made up by a single final scaling, which keeps the exponent at `d`.

use exactpoly_integers::Integer;
use num_traits::{One, Zero};
use tracing::debug;

/// Computes the Cohen pseudo-quotient and pseudo-remainder of coefficient
/// slices.
///
/// `q` and `r` are overwritten, reusing their allocations. On return `q`
/// has `len(a) - len(b) + 1` coefficients and `r` is normalized (no
/// trailing zeros).
///
/// Requires `len(a) >= len(b) >= 1` with a non-zero leading coefficient
/// in `b`.
pub fn pseudo_divrem_cohen(
    q: &mut Vec<Integer>,
    r: &mut Vec<Integer>,
    a: &[Integer],
    b: &[Integer],
) {
    let len_a = a.len();
    let len_b = b.len();
    debug_assert!(len_b >= 1 && len_a >= len_b);

    let lead_b = &b[len_b - 1];
    debug_assert!(!lead_b.is_zero());
    let unit_lead = lead_b.is_one();

    let len_q = len_a - len_b + 1;
    q.clear();
    q.resize(len_q, Integer::ZERO);
    r.clear();
    r.extend_from_slice(a);

    let mut len_r = len_a;
    let mut remaining = len_q;

    while len_r >= len_b {
        let shift = len_r - len_b;
        let c = std::mem::take(&mut r[len_r - 1]);

        if !unit_lead {
            // q is still zero on the first step, so this only costs later.
            for qi in q.iter_mut().filter(|qi| !qi.is_zero()) {
                *qi *= lead_b;
            }
            for ri in &mut r[..len_r - 1] {
                *ri *= lead_b;
            }
        }
        q[shift] += &c;
        for (ri, bi) in r[shift..len_r - 1].iter_mut().zip(&b[..len_b - 1]) {
            ri.submul(&c, bi);
        }

        len_r -= 1;
        while len_r > 0 && r[len_r - 1].is_zero() {
            len_r -= 1;
        }
        remaining -= 1;
    }
    r.truncate(len_r);

    if remaining > 0 && !unit_lead {
        debug!(skipped = remaining, "compensating skipped elimination steps");
        let exp = u32::try_from(remaining).expect("pseudo-division exponent exceeds u32");
        let factor = lead_b.pow(exp);
        for qi in q.iter_mut() {
            *qi *= &factor;
        }
        for ri in r.iter_mut() {
            *ri *= &factor;
        }
    }
}
