//! Utils Module - Constants & Logging Setup

pub mod constants;
pub mod logging;

pub use constants::*;
pub use logging::init_logging;
