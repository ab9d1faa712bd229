//! Constants Module - Single Source of Truth
//!
//! Endpoints, environment variable names and the fixed polling parameters.
//! Nothing in the other modules hardcodes these values.

use std::time::Duration;

// ============================================
// APPLICATION CONSTANTS
// ============================================

/// Application name
pub const APP_NAME: &str = "HomeworkRelay";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// User-Agent for HTTP requests
pub const USER_AGENT: &str = concat!("HomeworkRelay/", env!("CARGO_PKG_VERSION"));

// ============================================
// ENVIRONMENT VARIABLES
// ============================================

/// OAuth token for the homework review API
pub const ENV_PRACTICUM_TOKEN: &str = "PRACTICUM_TOKEN";
/// Telegram bot token
pub const ENV_TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
/// Telegram chat that receives notifications
pub const ENV_TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

// ============================================
// HOMEWORK API
// ============================================

/// Homework status endpoint
pub const ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Seconds between two polling cycles
pub const RETRY_PERIOD_SECS: u64 = 600;

/// Polling period as a Duration
pub const RETRY_PERIOD: Duration = Duration::from_secs(RETRY_PERIOD_SECS);

/// `from_date` sent on every request. Never advanced.
pub const INITIAL_FROM_DATE: i64 = 1_675_231_390;

/// Status assumed before the first poll; a first answer with this status
/// does not produce a notification.
pub const INITIAL_STATUS: &str = "reviewing";

/// Upper bound for a single HTTP request (seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// ============================================
// RESPONSE KEYS
// ============================================

pub const KEY_HOMEWORKS: &str = "homeworks";
pub const KEY_CURRENT_DATE: &str = "current_date";
pub const KEY_HOMEWORK_NAME: &str = "homework_name";
pub const KEY_STATUS: &str = "status";

/// Keys re-checked after the homeworks shape checks
pub const REQUIRED_RESPONSE_KEYS: [&str; 2] = [KEY_CURRENT_DATE, KEY_HOMEWORKS];

// ============================================
// TELEGRAM
// ============================================

/// Telegram Bot API base URL
pub const TELEGRAM_API_BASE: &str = "https://api.telegram.org";
