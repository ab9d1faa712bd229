//! Homework Relay Library
//!
//! Polls the homework review API on a fixed period and relays status changes
//! of the latest submission to a Telegram chat:
//! - `providers`: homework API client and Telegram notifier
//! - `relay`: response validation, message formatting, the poll loop
//! - `models`: configuration, errors, domain types
//! - `utils`: constants and logging setup

pub mod models;
pub mod providers;
pub mod relay;
pub mod utils;

pub use relay::{check_response, format_message, parse_status, PollStats, Poller};
pub use models::{
    check_tokens, AppError, AppResult, CycleOutcome, ErrorCategory, ErrorCode, HomeworkRecord,
    HomeworkStatus, PollState, RelayConfig,
};
pub use providers::{HomeworkApi, Notifier, PracticumClient, TelegramNotifier};
pub use utils::init_logging;
