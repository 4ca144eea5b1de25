//! Bounds and configuration constants shared by the engines and the device.

/// Largest index the device will address. Seeks are clamped to `0..=MAX_INDEX`.
pub const MAX_INDEX: u64 = 500;

/// Capacity of a decimal digit buffer, terminator included.
///
/// F(n) has about `0.209 * n + 1` decimal digits, so F(500) needs 105.
pub const DIGIT_CAPACITY: usize = 128;

/// Largest index whose Fibonacci value fits in an `i64`.
/// F(92) = 7540113804746346429
pub const MAX_FAST_INDEX: u64 = 92;

/// Byte written after the last digit of a value handed to a reader.
pub const TERMINATOR: u8 = 0;

/// Name the device is published under.
pub const DEVICE_NAME: &str = "fibonacci";

/// Process exit codes used by the `fibdev` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Sweep output did not match the reference values.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// The device is held by another session (EBUSY).
    pub const ERROR_BUSY: i32 = 16;
}
