//! fibdev library: application logic for the Fibonacci device client.

pub mod app;
pub mod config;
pub mod errors;
pub mod output;
pub mod verify;
