//! Check sweep output against independently computed values.
//!
//! Reference values come from `num-bigint`, so a defect in the decimal
//! buffer cannot hide itself.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use rayon::prelude::*;

use fibdev_core::MAX_INDEX;

use crate::output::parse_sweep_line;

/// Verification failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerifyError {
    /// A line reported the wrong value.
    #[error("f({index}) fail: got {actual}, expected {expected}")]
    Mismatch {
        /// Index of the offending line.
        index: u64,
        /// Value the line reported.
        actual: String,
        /// Reference value.
        expected: String,
    },

    /// A line names an index the device cannot address.
    #[error("f({index}) out of range (max {max})")]
    IndexOutOfRange {
        /// Index of the offending line.
        index: u64,
        /// Largest addressable index.
        max: u64,
    },

    /// The input contained no sweep lines.
    #[error("no sweep lines found")]
    NoEntries,
}

/// Successful verification summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifySummary {
    /// Number of lines checked.
    pub checked: usize,
    /// Largest index seen.
    pub max_index: u64,
}

/// F(0)..=F(max) as `BigUint`s. Rejects `max > MAX_INDEX`.
#[allow(clippy::cast_possible_truncation)]
pub fn reference_values(max: u64) -> Result<Vec<BigUint>, VerifyError> {
    if max > MAX_INDEX {
        return Err(VerifyError::IndexOutOfRange {
            index: max,
            max: MAX_INDEX,
        });
    }
    let mut values = Vec::with_capacity(max as usize + 1);
    let mut a = BigUint::zero();
    let mut b = BigUint::one();
    for _ in 0..=max {
        let next = &a + &b;
        values.push(std::mem::replace(&mut a, std::mem::replace(&mut b, next)));
    }
    Ok(values)
}

/// Verify every sweep line in `text`, reporting the lowest-index mismatch.
#[allow(clippy::cast_possible_truncation)]
pub fn verify_sweep(text: &str) -> Result<VerifySummary, VerifyError> {
    let entries: Vec<(u64, &str)> = text.lines().filter_map(parse_sweep_line).collect();
    let max_index = entries
        .iter()
        .map(|&(k, _)| k)
        .max()
        .ok_or(VerifyError::NoEntries)?;
    let reference = reference_values(max_index)?;

    let mismatch = entries
        .par_iter()
        .filter_map(|&(k, actual)| {
            let expected = reference[k as usize].to_string();
            (expected != actual).then(|| VerifyError::Mismatch {
                index: k,
                actual: actual.to_string(),
                expected,
            })
        })
        .min_by_key(|err| match err {
            VerifyError::Mismatch { index, .. } | VerifyError::IndexOutOfRange { index, .. } => {
                *index
            }
            VerifyError::NoEntries => 0,
        });

    match mismatch {
        Some(err) => Err(err),
        None => Ok(VerifySummary {
            checked: entries.len(),
            max_index,
        }),
    }
}
