//! Configuration module for the homework relay
//!
//! Credentials come from the environment and are read exactly once, at
//! startup. Endpoints default to the constants in utils/constants.rs.

use std::fmt;
use std::time::Duration;
use tracing::{error, info};

use super::errors::{AppError, AppResult};
use crate::utils::constants::{
    ENDPOINT, ENV_PRACTICUM_TOKEN, ENV_TELEGRAM_CHAT_ID, ENV_TELEGRAM_TOKEN, REQUEST_TIMEOUT_SECS,
    TELEGRAM_API_BASE,
};

/// Token guard: true iff all three credentials are present and non-empty.
///
/// Logs a fatal-level line naming every missing variable otherwise.
pub fn check_tokens(
    practicum_token: Option<&str>,
    telegram_token: Option<&str>,
    telegram_chat_id: Option<&str>,
) -> bool {
    guard_tokens(practicum_token, telegram_token, telegram_chat_id).is_ok()
}

/// Same check as [`check_tokens`], handing back the missing names
fn guard_tokens(
    practicum_token: Option<&str>,
    telegram_token: Option<&str>,
    telegram_chat_id: Option<&str>,
) -> Result<(), Vec<&'static str>> {
    let missing = missing_credentials(practicum_token, telegram_token, telegram_chat_id);
    if missing.is_empty() {
        return Ok(());
    }
    error!(
        fatal = true,
        "Missing required environment variables: {}",
        missing.join(", ")
    );
    Err(missing)
}

fn missing_credentials(
    practicum_token: Option<&str>,
    telegram_token: Option<&str>,
    telegram_chat_id: Option<&str>,
) -> Vec<&'static str> {
    [
        (ENV_PRACTICUM_TOKEN, practicum_token),
        (ENV_TELEGRAM_TOKEN, telegram_token),
        (ENV_TELEGRAM_CHAT_ID, telegram_chat_id),
    ]
    .into_iter()
    .filter(|(_, value)| value.map_or(true, |v| v.trim().is_empty()))
    .map(|(name, _)| name)
    .collect()
}

/// Everything the relay needs to run
#[derive(Clone)]
pub struct RelayConfig {
    /// OAuth token for the homework API
    pub practicum_token: String,
    /// Telegram bot token
    pub telegram_token: String,
    /// Chat that receives the notifications
    pub telegram_chat_id: String,
    /// Homework status endpoint
    pub endpoint: String,
    /// Telegram Bot API base URL
    pub telegram_api_base: String,
    /// Timeout for each HTTP request
    pub request_timeout: Duration,
}

impl RelayConfig {
    /// Load credentials from the process environment
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load credentials through an arbitrary lookup (env, test map, ...)
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let practicum_token = lookup(ENV_PRACTICUM_TOKEN);
        let telegram_token = lookup(ENV_TELEGRAM_TOKEN);
        let telegram_chat_id = lookup(ENV_TELEGRAM_CHAT_ID);

        guard_tokens(
            practicum_token.as_deref(),
            telegram_token.as_deref(),
            telegram_chat_id.as_deref(),
        )
        .map_err(|missing| AppError::missing_env(&missing))?;

        info!("🔑 Credentials configured (tokens hidden)");

        Ok(Self {
            practicum_token: practicum_token.unwrap_or_default(),
            telegram_token: telegram_token.unwrap_or_default(),
            telegram_chat_id: telegram_chat_id.unwrap_or_default(),
            endpoint: ENDPOINT.to_string(),
            telegram_api_base: TELEGRAM_API_BASE.to_string(),
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        })
    }
}

// Tokens never reach the logs, not even through {:?}
impl fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayConfig")
            .field("practicum_token", &"***")
            .field("telegram_token", &"***")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("endpoint", &self.endpoint)
            .field("telegram_api_base", &self.telegram_api_base)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
