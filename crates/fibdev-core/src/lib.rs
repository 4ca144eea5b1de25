//! # fibdev-core
//!
//! Numeric engines for the fibdev Fibonacci device: fixed-capacity decimal
//! buffers, the bottom-up sequence table, and wrapping `i64` fast doubling.

pub mod bignum;
pub mod constants;
pub mod engine;
pub mod fastdoubling;
pub mod registry;
pub mod sequence;

// Re-exports
pub use bignum::{DecimalBuf, DecimalText};
pub use constants::{
    exit_codes, DEVICE_NAME, DIGIT_CAPACITY, MAX_FAST_INDEX, MAX_INDEX, TERMINATOR,
};
pub use engine::{Engine, FibError};
pub use fastdoubling::{fibonacci_fast, fibonacci_fast_checked};
pub use registry::{canonical_name, DefaultFactory, EngineFactory, ENGINE_NAMES};
pub use sequence::{fibonacci_decimal, SequenceTable};
