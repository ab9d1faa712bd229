//! Relay Module - Validation, Formatting & the Poll Loop

pub mod formatter;
pub mod poller;
pub mod validator;

pub use formatter::*;
pub use poller::*;
pub use validator::*;
