//! Fast Doubling over native `i64`.
//!
//! Uses the doubling identities:
//!   F(2t)   = F(t) * (2*F(t+1) - F(t))
//!   F(2t+1) = F(t)^2 + F(t+1)^2
//!
//! Iterates from MSB to LSB of k, so the cost is one doubling step (plus an
//! optional advance) per bit. Arithmetic wraps in two's complement: results
//! are exact up to `MAX_FAST_INDEX` and are F(k) mod 2^64 beyond it.

use tracing::warn;

use crate::constants::MAX_FAST_INDEX;
use crate::engine::{Engine, FibError};

/// Compute F(k) with wrapping `i64` arithmetic.
///
/// Exact for `k <= MAX_FAST_INDEX`; wraps silently past it.
///
/// # Example
/// ```
/// use fibdev_core::fastdoubling::fibonacci_fast;
///
/// assert_eq!(fibonacci_fast(10), 55);
/// assert_eq!(fibonacci_fast(92), 7_540_113_804_746_346_429);
/// ```
#[must_use]
pub fn fibonacci_fast(k: u64) -> i64 {
    let num_bits = 64 - k.leading_zeros();
    // (a, b) = (F(t), F(t+1)), t = bits of k consumed so far
    let mut a: i64 = 0;
    let mut b: i64 = 1;

    for i in (0..num_bits).rev() {
        let t1 = a.wrapping_mul(b.wrapping_mul(2).wrapping_sub(a));
        let t2 = a.wrapping_mul(a).wrapping_add(b.wrapping_mul(b));
        a = t1;
        b = t2;

        if (k >> i) & 1 == 1 {
            let next = a.wrapping_add(b);
            a = b;
            b = next;
        }
    }

    a
}

/// Compute F(k), rejecting indices whose value does not fit an `i64`.
pub fn fibonacci_fast_checked(k: u64) -> Result<i64, FibError> {
    if k > MAX_FAST_INDEX {
        return Err(FibError::InvalidIndex {
            index: k,
            max: MAX_FAST_INDEX,
        });
    }
    Ok(fibonacci_fast(k))
}

/// Fast Doubling engine. Wraps past `MAX_FAST_INDEX`.
pub struct FastDoublingEngine;

impl FastDoublingEngine {
    /// Create a new `FastDoublingEngine`.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FastDoublingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for FastDoublingEngine {
    fn compute(&self, k: u64) -> Result<String, FibError> {
        if k > MAX_FAST_INDEX {
            warn!(k, max = MAX_FAST_INDEX, "index exceeds i64 range, result wraps");
        }
        Ok(fibonacci_fast(k).to_string())
    }

    fn name(&self) -> &'static str {
        "fast"
    }
}
