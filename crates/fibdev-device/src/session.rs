//! Single-holder session lock.
//!
//! Acquisition is a compare-and-swap that never blocks and never queues: a
//! second client is refused with `FibError::Busy`. There is no blocking
//! `acquire`.

use std::sync::atomic::{AtomicBool, Ordering};

use fibdev_core::FibError;

/// Observable state of a `SessionLock`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockState {
    /// No session is open.
    Free,
    /// A session is open.
    Held,
}

/// Process-wide exclusivity lock for the device.
#[derive(Debug, Default)]
pub struct SessionLock {
    held: AtomicBool,
}

impl SessionLock {
    /// Create a free lock.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            held: AtomicBool::new(false),
        }
    }

    /// Move Free -> Held, or fail with `Busy` leaving the state unchanged.
    pub fn try_acquire(&self) -> Result<(), FibError> {
        self.held
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .map(|_| ())
            .map_err(|_| FibError::Busy)
    }

    /// Move Held -> Free. Only the current holder calls this.
    pub fn release(&self) {
        self.held.store(false, Ordering::Release);
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> LockState {
        if self.held.load(Ordering::Acquire) {
            LockState::Held
        } else {
            LockState::Free
        }
    }
}
