//! Seek handling for the per-session cursor.
//!
//! The cursor selects the index the next read computes. It is always
//! clamped to `0..=MAX_INDEX`.
//!
//! `Whence::End` maps to `MAX_INDEX - offset`: a positive offset moves the
//! cursor back from the last index rather than past it.

use fibdev_core::{FibError, MAX_INDEX};

/// Origin of a seek.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Whence {
    /// Offset is absolute.
    Start,
    /// Offset is relative to the current cursor.
    Current,
    /// Cursor becomes `MAX_INDEX - offset`.
    End,
}

impl TryFrom<i32> for Whence {
    type Error = FibError;

    /// Map the conventional `SEEK_SET`/`SEEK_CUR`/`SEEK_END` values.
    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Start),
            1 => Ok(Self::Current),
            2 => Ok(Self::End),
            other => Err(FibError::InvalidWhence(other)),
        }
    }
}

/// Index cursor, clamped to `0..=MAX_INDEX`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pos: u64,
}

impl Cursor {
    /// Create a cursor at index 0.
    #[must_use]
    pub const fn new() -> Self {
        Self { pos: 0 }
    }

    /// Current index.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.pos
    }

    /// Move the cursor and return the clamped new position.
    #[allow(clippy::cast_possible_wrap)]
    pub fn seek(&mut self, offset: i64, whence: Whence) -> u64 {
        let max = MAX_INDEX as i64;
        let target = match whence {
            Whence::Start => offset,
            Whence::Current => (self.pos as i64).saturating_add(offset),
            Whence::End => max.saturating_sub(offset),
        };
        self.pos = clamp_index(target);
        self.pos
    }
}

#[allow(clippy::cast_sign_loss)]
fn clamp_index(target: i64) -> u64 {
    target.clamp(0, MAX_INDEX as i64) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(Cursor::new().position(), 0);
    }

    #[test]
    fn seek_start_clamps() {
        let mut c = Cursor::new();
        assert_eq!(c.seek(10, Whence::Start), 10);
        assert_eq!(c.seek(-10, Whence::Start), 0);
        assert_eq!(c.seek(10_000, Whence::Start), MAX_INDEX);
        assert_eq!(c.position(), MAX_INDEX);
    }

    #[test]
    fn seek_current_is_relative() {
        let mut c = Cursor::new();
        c.seek(100, Whence::Start);
        assert_eq!(c.seek(5, Whence::Current), 105);
        assert_eq!(c.seek(-200, Whence::Current), 0);
        assert_eq!(c.seek(1_000, Whence::Current), MAX_INDEX);
    }

    #[test]
    fn seek_end_counts_backwards() {
        let mut c = Cursor::new();
        assert_eq!(c.seek(0, Whence::End), 500);
        assert_eq!(c.seek(100, Whence::End), 400);
        assert_eq!(c.seek(-100, Whence::End), MAX_INDEX);
        assert_eq!(c.seek(600, Whence::End), 0);
    }

    #[test]
    fn seek_extremes_saturate() {
        let mut c = Cursor::new();
        c.seek(250, Whence::Start);
        assert_eq!(c.seek(i64::MAX, Whence::Current), MAX_INDEX);
        assert_eq!(c.seek(i64::MIN, Whence::Current), 0);
        assert_eq!(c.seek(i64::MIN, Whence::End), MAX_INDEX);
        assert_eq!(c.seek(i64::MAX, Whence::End), 0);
    }

    #[test]
    fn whence_from_origin() {
        assert_eq!(Whence::try_from(0), Ok(Whence::Start));
        assert_eq!(Whence::try_from(1), Ok(Whence::Current));
        assert_eq!(Whence::try_from(2), Ok(Whence::End));
        assert_eq!(Whence::try_from(3), Err(FibError::InvalidWhence(3)));
    }
}
