//! The Fibonacci device and its sessions.
//!
//! `FibDevice::open` hands out at most one `Session` at a time. A session
//! owns the cursor; reads compute F(cursor) through the sequence table and
//! never move the cursor.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, info, warn};

use fibdev_core::fastdoubling::fibonacci_fast;
use fibdev_core::sequence::fibonacci_decimal;
use fibdev_core::{Engine, FibError, DEVICE_NAME};

use crate::cursor::{Cursor, Whence};
use crate::session::{LockState, SessionLock};

/// Exclusive-access Fibonacci device.
///
/// # Example
/// ```
/// use fibdev_device::{FibDevice, Whence};
///
/// let device = FibDevice::new();
/// let mut session = device.open().unwrap();
/// session.seek(10, Whence::Start);
/// assert_eq!(session.read_string().unwrap(), "55");
/// session.close();
/// ```
#[derive(Debug)]
pub struct FibDevice {
    lock: Arc<SessionLock>,
    available: AtomicBool,
}

impl FibDevice {
    /// Create a device with its own session lock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_lock(Arc::new(SessionLock::new()))
    }

    /// Create a device guarded by the given lock.
    #[must_use]
    pub fn with_lock(lock: Arc<SessionLock>) -> Self {
        Self {
            lock,
            available: AtomicBool::new(true),
        }
    }

    /// Open a session, failing fast with `Busy` if one is already open.
    pub fn open(&self) -> Result<Session, FibError> {
        if !self.available.load(Ordering::Acquire) {
            return Err(FibError::Unavailable);
        }
        self.lock
            .try_acquire()
            .inspect_err(|_| warn!(device = DEVICE_NAME, "device is in use"))?;
        debug!(device = DEVICE_NAME, "session opened");
        Ok(Session::new(Arc::clone(&self.lock)))
    }

    /// Stop accepting new sessions. An open session keeps working.
    pub fn shutdown(&self) {
        self.available.store(false, Ordering::Release);
        info!(device = DEVICE_NAME, "device shut down");
    }

    /// Whether new sessions can be opened.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.available.load(Ordering::Acquire)
    }

    /// State of the session lock.
    #[must_use]
    pub fn lock_state(&self) -> LockState {
        self.lock.state()
    }
}

impl Default for FibDevice {
    fn default() -> Self {
        Self::new()
    }
}

/// An open session. Dropping it releases the device.
#[derive(Debug)]
pub struct Session {
    lock: Arc<SessionLock>,
    cursor: Cursor,
    open: bool,
}

impl Session {
    fn new(lock: Arc<SessionLock>) -> Self {
        Self {
            lock,
            cursor: Cursor::new(),
            open: true,
        }
    }

    /// Move the cursor; returns the clamped index.
    pub fn seek(&mut self, offset: i64, whence: Whence) -> u64 {
        let pos = self.cursor.seek(offset, whence);
        debug!(offset, ?whence, pos, "seek");
        pos
    }

    /// Index the next read will compute.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.cursor.position()
    }

    /// Write F(cursor) into `buf` as digits plus terminator.
    ///
    /// Returns the digit count; the terminator is written but not counted.
    pub fn read(&self, buf: &mut [u8]) -> Result<usize, FibError> {
        let k = self.cursor.position();
        let text = fibonacci_decimal(k)?;
        let n = text.copy_to(buf)?;
        debug!(k, digits = n, "read");
        Ok(n)
    }

    /// Compute F(cursor) as a `String`.
    pub fn read_string(&self) -> Result<String, FibError> {
        Ok(fibonacci_decimal(self.cursor.position())?.to_string())
    }

    /// Compute F(cursor) with the given engine.
    pub fn read_with(&self, engine: &dyn Engine) -> Result<String, FibError> {
        let k = self.cursor.position();
        debug!(k, engine = engine.name(), "read");
        engine.compute(k)
    }

    /// Compute F(cursor) with wrapping `i64` fast doubling.
    ///
    /// Exact up to `MAX_FAST_INDEX`; wraps beyond it.
    #[must_use]
    pub fn read_fast(&self) -> i64 {
        fibonacci_fast(self.cursor.position())
    }

    /// Writes are accepted and ignored; always reports one byte consumed.
    pub fn write(&self, _data: &[u8]) -> usize {
        1
    }

    /// Release the device.
    pub fn close(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if self.open {
            self.open = false;
            self.lock.release();
            debug!(device = DEVICE_NAME, "session closed");
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.release();
    }
}
