//! Engine trait and the shared error type.
//!
//! `Engine` is implemented by the sequence table builder (exact, bounded by
//! `MAX_INDEX`) and by the fast doubling engine (native `i64`, wraps past
//! `MAX_FAST_INDEX`). The device read path always uses the table builder;
//! other engines are reached through `DefaultFactory`.

/// Error type for the engines and the device.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FibError {
    /// Another session already holds the device.
    #[error("device is busy")]
    Busy,

    /// A digit sequence or caller buffer is too small for the value.
    #[error("capacity exceeded: need {needed} bytes, have {capacity}")]
    CapacityExceeded {
        /// Bytes required.
        needed: usize,
        /// Bytes available.
        capacity: usize,
    },

    /// Index outside the range an engine supports.
    #[error("index {index} out of range (max {max})")]
    InvalidIndex {
        /// Requested index.
        index: u64,
        /// Largest supported index.
        max: u64,
    },

    /// A byte that is not an ASCII decimal digit.
    #[error("invalid decimal digit: {0:#04x}")]
    InvalidDigit(u8),

    /// Unknown numeric seek origin.
    #[error("invalid seek origin: {0}")]
    InvalidWhence(i32),

    /// The device has been shut down.
    #[error("device is unavailable")]
    Unavailable,

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl FibError {
    /// Whether retrying the whole operation later may succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Busy)
    }
}

/// A Fibonacci engine producing decimal text for an index.
pub trait Engine: Send + Sync {
    /// Compute F(k) as decimal text.
    fn compute(&self, k: u64) -> Result<String, FibError>;

    /// Get the name of this engine.
    fn name(&self) -> &'static str;
}
