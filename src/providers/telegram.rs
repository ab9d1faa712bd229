//! Telegram delivery
//!
//! Sends plain text to the single configured chat through `teloxide::Bot`.
//! Failures are logged here and returned to the caller.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use std::time::Duration;
use teloxide::requests::Requester;
use teloxide::types::{ChatId, Recipient};
use teloxide::Bot;
use tracing::{debug, error};

use crate::models::{AppError, AppResult, ErrorCode, RelayConfig};
use crate::utils::constants::USER_AGENT as USER_AGENT_CONST;

/// Anything that can deliver a notification text
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send_message(&self, text: &str) -> AppResult<()>;
}

/// Bot bound to one chat
pub struct TelegramNotifier {
    bot: Bot,
    chat: Recipient,
}

impl TelegramNotifier {
    pub fn new(config: &RelayConfig) -> AppResult<Self> {
        Self::with_api_url(
            &config.telegram_api_base,
            &config.telegram_token,
            &config.telegram_chat_id,
            config.request_timeout,
        )
    }

    pub fn with_api_url(
        api_url: &str,
        bot_token: &str,
        chat_id: &str,
        timeout: Duration,
    ) -> AppResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_CONST));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::send_failed(format!("Failed to build HTTP client: {}", e)))?;

        let api_url = reqwest::Url::parse(api_url).map_err(|e| {
            AppError::send_failed(format!("Invalid Telegram API url {}: {}", api_url, e))
        })?;

        Ok(Self {
            bot: Bot::with_client(bot_token, client).set_api_url(api_url),
            chat: recipient(chat_id),
        })
    }
}

/// Numeric ids address a chat directly, anything else is a channel username
fn recipient(chat_id: &str) -> Recipient {
    match chat_id.trim().parse::<i64>() {
        Ok(id) => Recipient::Id(ChatId(id)),
        Err(_) => Recipient::ChannelUsername(chat_id.trim().to_string()),
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send_message(&self, text: &str) -> AppResult<()> {
        match self.bot.send_message(self.chat.clone(), text).await {
            Ok(message) => {
                debug!("✉️ Telegram message {} sent to chat {}", message.id.0, message.chat.id.0);
                Ok(())
            }
            Err(e) => {
                error!("Failed to send Telegram message: {}", e);
                Err(AppError::with_source(
                    ErrorCode::TelegramSendFailed,
                    format!("Telegram delivery failed: {}", e),
                    e,
                ))
            }
        }
    }
}
