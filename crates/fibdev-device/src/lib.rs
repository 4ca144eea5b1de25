//! # fibdev-device
//!
//! The addressable Fibonacci device: a single-holder session lock, a
//! clamped per-session cursor, and read/seek/write over the core engines.

pub mod cursor;
pub mod device;
pub mod session;

pub use cursor::{Cursor, Whence};
pub use device::{FibDevice, Session};
pub use session::{LockState, SessionLock};
