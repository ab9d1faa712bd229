//! Providers Module - External Services
//!
//! The homework status API we poll and the Telegram chat we notify.

pub mod practicum;
pub mod telegram;

pub use practicum::*;
pub use telegram::*;
