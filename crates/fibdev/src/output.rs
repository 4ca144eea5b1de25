//! Sweep output formatting.

use std::io::{self, Write};

use fibdev_core::{Engine, FibError, DEVICE_NAME};
use fibdev_device::{Session, Whence};

/// Format one sweep line.
#[must_use]
pub fn format_sweep_line(k: u64, value: &str) -> String {
    format!("Reading from /dev/{DEVICE_NAME} at offset {k}, returned the sequence {value}.")
}

/// Parse a line produced by `format_sweep_line`.
///
/// Returns `None` for anything else, so sweep files may carry other text.
#[must_use]
pub fn parse_sweep_line(line: &str) -> Option<(u64, &str)> {
    let rest = line.trim_end().strip_prefix("Reading from ")?;
    let (_, rest) = rest.split_once(" at offset ")?;
    let (k, rest) = rest.split_once(", returned the sequence ")?;
    let value = rest.strip_suffix('.')?;
    Some((k.parse().ok()?, value))
}

/// Error raised while writing a sweep.
#[derive(Debug, thiserror::Error)]
pub enum SweepError {
    /// The device refused a read.
    #[error(transparent)]
    Device(#[from] FibError),

    /// The output could not be written.
    #[error("failed to write sweep output: {0}")]
    Io(#[from] io::Error),
}

/// Read indices `0..=max` through one session, one line each.
///
/// Returns the number of lines written.
#[allow(clippy::cast_possible_wrap)]
pub fn write_sweep<W: Write>(
    session: &mut Session,
    engine: &dyn Engine,
    max: u64,
    out: &mut W,
) -> Result<u64, SweepError> {
    let mut lines = 0;
    for i in 0..=max {
        let k = session.seek(i as i64, Whence::Start);
        let value = session.read_with(engine)?;
        writeln!(out, "{}", format_sweep_line(k, &value))?;
        lines += 1;
    }
    out.flush()?;
    Ok(lines)
}
