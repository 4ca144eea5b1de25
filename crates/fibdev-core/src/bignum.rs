//! Fixed-capacity decimal numbers.
//!
//! `DecimalBuf` stores ASCII digits least-significant first, which keeps
//! schoolbook addition a single forward walk. `DecimalText` is the
//! most-significant-first form handed to readers, followed by a terminator.

use std::fmt;

use crate::constants::{DIGIT_CAPACITY, TERMINATOR};
use crate::engine::FibError;

/// Decimal digits stored least-significant first in a fixed buffer.
#[derive(Clone)]
pub struct DecimalBuf {
    digits: [u8; DIGIT_CAPACITY],
    len: usize,
}

impl DecimalBuf {
    fn empty() -> Self {
        Self {
            digits: [b'0'; DIGIT_CAPACITY],
            len: 0,
        }
    }

    /// The value 0.
    #[must_use]
    pub fn zero() -> Self {
        let mut buf = Self::empty();
        buf.digits[0] = b'0';
        buf.len = 1;
        buf
    }

    /// The value 1.
    #[must_use]
    pub fn one() -> Self {
        let mut buf = Self::empty();
        buf.digits[0] = b'1';
        buf.len = 1;
        buf
    }

    /// Build from ASCII digits given least-significant first.
    ///
    /// High-order zeros are dropped.
    pub fn from_lsb_digits(digits: &[u8]) -> Result<Self, FibError> {
        let mut buf = Self::empty();
        for &d in digits {
            if !d.is_ascii_digit() {
                return Err(FibError::InvalidDigit(d));
            }
            buf.push(d)?;
        }
        while buf.len > 1 && buf.digits[buf.len - 1] == b'0' {
            buf.len -= 1;
        }
        if buf.len == 0 {
            return Ok(Self::zero());
        }
        Ok(buf)
    }

    /// Parse conventional decimal text (most-significant first).
    ///
    /// Leading zeros are dropped so the stored value has no padding.
    pub fn from_decimal_str(s: &str) -> Result<Self, FibError> {
        let trimmed = s.trim_start_matches('0');
        let mut buf = Self::empty();
        for &d in trimmed.as_bytes().iter().rev() {
            if !d.is_ascii_digit() {
                return Err(FibError::InvalidDigit(d));
            }
            buf.push(d)?;
        }
        if buf.len == 0 {
            return Ok(Self::zero());
        }
        Ok(buf)
    }

    /// Append one digit at the most-significant end.
    fn push(&mut self, digit: u8) -> Result<(), FibError> {
        // One slot stays free for the terminator.
        if self.len + 1 >= DIGIT_CAPACITY {
            return Err(FibError::CapacityExceeded {
                needed: self.len + 2,
                capacity: DIGIT_CAPACITY,
            });
        }
        self.digits[self.len] = digit;
        self.len += 1;
        Ok(())
    }

    /// Number of stored digits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the buffer holds no digits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Stored digits, least-significant first.
    #[must_use]
    pub fn lsb_digits(&self) -> &[u8] {
        &self.digits[..self.len]
    }

    /// Schoolbook addition.
    ///
    /// Walks both operands from the least-significant digit, then carries
    /// through the tail of the longer one. Fails with `CapacityExceeded`
    /// if the sum would not fit.
    pub fn checked_add(&self, other: &Self) -> Result<Self, FibError> {
        let (long, short) = if self.len >= other.len {
            (self, other)
        } else {
            (other, self)
        };

        let mut out = Self::empty();
        let mut carry = 0u8;

        for (&x, &y) in long.lsb_digits().iter().zip(short.lsb_digits()) {
            let sum = (x - b'0') + (y - b'0') + carry;
            out.push(b'0' + sum % 10)?;
            carry = sum / 10;
        }
        for &x in &long.lsb_digits()[short.len..] {
            let sum = (x - b'0') + carry;
            out.push(b'0' + sum % 10)?;
            carry = sum / 10;
        }
        if carry != 0 {
            out.push(b'1')?;
        }

        Ok(out)
    }

    /// Reverse the digits in place and append the terminator.
    #[must_use]
    pub fn into_text(mut self) -> DecimalText {
        self.digits[..self.len].reverse();
        // push() always leaves room for this byte
        self.digits[self.len] = TERMINATOR;
        DecimalText {
            bytes: self.digits,
            len: self.len,
        }
    }
}

impl PartialEq for DecimalBuf {
    fn eq(&self, other: &Self) -> bool {
        self.lsb_digits() == other.lsb_digits()
    }
}

impl Eq for DecimalBuf {}

impl fmt::Debug for DecimalBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lsb: String = self.lsb_digits().iter().map(|&d| char::from(d)).collect();
        f.debug_struct("DecimalBuf").field("lsb", &lsb).finish()
    }
}

/// Decimal digits most-significant first, followed by `TERMINATOR`.
#[derive(Clone)]
pub struct DecimalText {
    bytes: [u8; DIGIT_CAPACITY],
    len: usize,
}

impl DecimalText {
    /// Number of digits, terminator excluded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: a value has at least one digit.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Digits, most-significant first.
    #[must_use]
    pub fn digits(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Digits followed by the terminator.
    #[must_use]
    pub fn terminated(&self) -> &[u8] {
        &self.bytes[..=self.len]
    }

    /// Copy digits and terminator into `buf`, returning the digit count.
    ///
    /// `buf` is left untouched when it is too short.
    pub fn copy_to(&self, buf: &mut [u8]) -> Result<usize, FibError> {
        let src = self.terminated();
        if buf.len() < src.len() {
            return Err(FibError::CapacityExceeded {
                needed: src.len(),
                capacity: buf.len(),
            });
        }
        buf[..src.len()].copy_from_slice(src);
        Ok(self.len)
    }
}

impl PartialEq for DecimalText {
    fn eq(&self, other: &Self) -> bool {
        self.digits() == other.digits()
    }
}

impl Eq for DecimalText {}

impl fmt::Display for DecimalText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &d in self.digits() {
            write!(f, "{}", char::from(d))?;
        }
        Ok(())
    }
}

impl fmt::Debug for DecimalText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DecimalText({self})")
    }
}
