//! Schoolbook and Karatsuba multiplication on coefficient slices.
//!
//! Slices hold coefficients in ascending degree order. Inputs must be
//! non-empty; the full product of lengths `n` and `m` has exactly
//! `n + m - 1` coefficients.

use exactpoly_integers::Integer;
use num_traits::Zero;
use tracing::trace;

/// Karatsuba multiplication threshold.
///
/// When either operand is shorter than this, schoolbook multiplication
/// is faster.
pub const KARATSUBA_THRESHOLD: usize = 32;

/// Multiplies two coefficient slices, selecting the algorithm by size.
#[must_use]
pub fn mul(a: &[Integer], b: &[Integer]) -> Vec<Integer> {
    debug_assert!(!a.is_empty() && !b.is_empty());

    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if short.len() < KARATSUBA_THRESHOLD {
        return schoolbook_mul(a, b);
    }

    trace!(len_a = a.len(), len_b = b.len(), "karatsuba multiplication");
    if long.len() > 2 * short.len() {
        return blocked_mul(long, short);
    }
    let mut result = karatsuba_mul(a, b);
    result.truncate(a.len() + b.len() - 1);
    result
}

/// Multiplies an operand much longer than the other by cutting it into
/// blocks of the shorter length, so each Karatsuba call is balanced.
fn blocked_mul(long: &[Integer], short: &[Integer]) -> Vec<Integer> {
    let mut result = vec![Integer::ZERO; long.len() + short.len() - 1];
    for (k, block) in long.chunks(short.len()).enumerate() {
        let offset = k * short.len();
        let product = karatsuba_mul(block, short);
        // padding may leave zeros past the block's true product length
        for (dst, c) in result[offset..]
            .iter_mut()
            .zip(product.iter().take(block.len() + short.len() - 1))
        {
            *dst += c;
        }
    }
    result
}

/// Computes the first `n` coefficients of the product.
///
/// The result has `min(n, a.len() + b.len() - 1)` entries.
#[must_use]
pub fn mullow(a: &[Integer], b: &[Integer], n: usize) -> Vec<Integer> {
    debug_assert!(!a.is_empty() && !b.is_empty());

    let a = &a[..a.len().min(n)];
    let b = &b[..b.len().min(n)];
    let len = n.min(a.len() + b.len() - 1);

    if a.len().min(b.len()) >= KARATSUBA_THRESHOLD {
        let mut result = mul(a, b);
        result.truncate(len);
        return result;
    }

    let mut result = vec![Integer::ZERO; len];
    for (i, ai) in a.iter().enumerate() {
        if ai.is_zero() {
            continue;
        }
        for (j, bj) in b.iter().take(len - i).enumerate() {
            result[i + j].addmul(ai, bj);
        }
    }
    result
}

/// Schoolbook multiplication: O(n²).
#[must_use]
pub fn schoolbook_mul(a: &[Integer], b: &[Integer]) -> Vec<Integer> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut result = vec![Integer::ZERO; a.len() + b.len() - 1];
    for (i, ai) in a.iter().enumerate() {
        if ai.is_zero() {
            continue;
        }
        for (j, bj) in b.iter().enumerate() {
            result[i + j].addmul(ai, bj);
        }
    }
    result
}

/// Karatsuba multiplication: O(n^1.58).
///
/// Both operands are zero-padded to a common power-of-two size, so the
/// returned vector may carry zero coefficients beyond `a.len() + b.len() - 1`.
#[must_use]
pub fn karatsuba_mul(a: &[Integer], b: &[Integer]) -> Vec<Integer> {
    let n = a.len();
    let m = b.len();

    if n < KARATSUBA_THRESHOLD || m < KARATSUBA_THRESHOLD {
        return schoolbook_mul(a, b);
    }

    let size = n.max(m).next_power_of_two();
    let half = size / 2;

    let mut a_ext = a.to_vec();
    let mut b_ext = b.to_vec();
    a_ext.resize(size, Integer::ZERO);
    b_ext.resize(size, Integer::ZERO);

    // a = a0 + a1*x^half, b = b0 + b1*x^half
    let (a0, a1) = a_ext.split_at(half);
    let (b0, b1) = b_ext.split_at(half);

    let z0 = karatsuba_mul(a0, b0);
    let z2 = karatsuba_mul(a1, b1);

    let a01: Vec<Integer> = a0.iter().zip(a1).map(|(x, y)| x + y).collect();
    let b01: Vec<Integer> = b0.iter().zip(b1).map(|(x, y)| x + y).collect();

    // z1 = (a0+a1)*(b0+b1) - z0 - z2
    let mut z1 = karatsuba_mul(&a01, &b01);
    for (dst, c) in z1.iter_mut().zip(&z0) {
        *dst -= c;
    }
    for (dst, c) in z1.iter_mut().zip(&z2) {
        *dst -= c;
    }

    let mut result = vec![Integer::ZERO; 2 * size - 1];
    for (i, c) in z0.into_iter().enumerate() {
        result[i] = c;
    }
    for (i, c) in z1.iter().enumerate() {
        result[i + half] += c;
    }
    for (i, c) in z2.iter().enumerate() {
        result[i + size] += c;
    }

    result
}
