//! Error handling and exit codes.

use fibdev_core::constants::exit_codes;
use fibdev_core::FibError;

use crate::output::SweepError;
use crate::verify::VerifyError;

/// Map a device error to its exit code.
pub fn handle_error(err: &FibError) -> i32 {
    match err {
        FibError::Busy => exit_codes::ERROR_BUSY,
        FibError::Config(_) | FibError::InvalidWhence(_) => exit_codes::ERROR_CONFIG,
        FibError::CapacityExceeded { .. }
        | FibError::InvalidIndex { .. }
        | FibError::InvalidDigit(_)
        | FibError::Unavailable => exit_codes::ERROR_GENERIC,
    }
}

/// Map any application error to its exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(fib) = err.downcast_ref::<FibError>() {
        return handle_error(fib);
    }
    match err.downcast_ref::<SweepError>() {
        Some(SweepError::Device(fib)) => return handle_error(fib),
        Some(SweepError::Io(_)) => return exit_codes::ERROR_GENERIC,
        None => {}
    }
    match err.downcast_ref::<VerifyError>() {
        Some(VerifyError::Mismatch { .. }) => exit_codes::ERROR_MISMATCH,
        _ => exit_codes::ERROR_GENERIC,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes() {
        assert_eq!(handle_error(&FibError::Busy), 16);
        assert_eq!(handle_error(&FibError::Config("bad".into())), 4);
        assert_eq!(handle_error(&FibError::Unavailable), 1);
    }

    #[test]
    fn anyhow_error_codes() {
        assert_eq!(exit_code(&anyhow::Error::new(FibError::Busy)), 16);
        assert_eq!(
            exit_code(&anyhow::Error::new(SweepError::Device(FibError::Busy))),
            16
        );
        let mismatch = VerifyError::Mismatch {
            index: 3,
            actual: "3".into(),
            expected: "2".into(),
        };
        assert_eq!(exit_code(&anyhow::Error::new(mismatch)), 3);
        let out_of_range = VerifyError::IndexOutOfRange {
            index: u64::MAX,
            max: 500,
        };
        assert_eq!(exit_code(&anyhow::Error::new(out_of_range)), 1);
        assert_eq!(exit_code(&anyhow::anyhow!("other")), 1);
    }
}
