//! Bottom-up Fibonacci table over decimal digit buffers.
//!
//! Every term F(0)..=F(k) is materialized, each one the checked sum of the
//! two before it. Cost is O(k * D) for D digits in the final term, which is
//! cheap at `MAX_INDEX` and exact at any width the buffer can hold.

use tracing::trace;

use crate::bignum::{DecimalBuf, DecimalText};
use crate::constants::MAX_INDEX;
use crate::engine::{Engine, FibError};

/// Memoized terms F(0)..=F(k) for a single request.
#[derive(Debug)]
pub struct SequenceTable {
    slots: Vec<DecimalBuf>,
}

impl SequenceTable {
    /// Build the table up to and including index `k`.
    ///
    /// Rejects `k > MAX_INDEX` before allocating.
    #[allow(clippy::cast_possible_truncation)]
    pub fn build(k: u64) -> Result<Self, FibError> {
        if k > MAX_INDEX {
            return Err(FibError::InvalidIndex {
                index: k,
                max: MAX_INDEX,
            });
        }
        let k = k as usize;

        let mut slots = Vec::with_capacity(k + 1);
        slots.push(DecimalBuf::zero());
        if k >= 1 {
            slots.push(DecimalBuf::one());
        }
        for i in 2..=k {
            let next = slots[i - 1].checked_add(&slots[i - 2])?;
            slots.push(next);
        }

        trace!(k, digits = slots[k].len(), "sequence table built");
        Ok(Self { slots })
    }

    /// Number of terms in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always false: a table holds at least F(0).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Term at index `i`, if the table reaches it.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<&DecimalBuf> {
        self.slots.get(i)
    }

    /// Consume the table, keeping only its last term as reader text.
    #[must_use]
    pub fn into_last(mut self) -> DecimalText {
        // build() always seeds slot 0
        self.slots.pop().unwrap_or_else(DecimalBuf::zero).into_text()
    }
}

/// Compute F(k) as decimal text via the sequence table.
///
/// # Example
/// ```
/// let f10 = fibdev_core::sequence::fibonacci_decimal(10).unwrap();
/// assert_eq!(f10.to_string(), "55");
/// assert_eq!(f10.len(), 2);
/// ```
pub fn fibonacci_decimal(k: u64) -> Result<DecimalText, FibError> {
    Ok(SequenceTable::build(k)?.into_last())
}

/// Exact engine backed by `SequenceTable`.
pub struct SequenceTableEngine;

impl SequenceTableEngine {
    /// Create a new `SequenceTableEngine`.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for SequenceTableEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for SequenceTableEngine {
    fn compute(&self, k: u64) -> Result<String, FibError> {
        fibonacci_decimal(k).map(|text| text.to_string())
    }

    fn name(&self) -> &'static str {
        "table"
    }
}
