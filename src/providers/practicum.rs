//! Homework API client
//!
//! One GET per polling cycle:
//! `GET <endpoint>?from_date=<ts>` with `Authorization: OAuth <token>`.
//! The body is handed back as raw JSON; shape checks live in relay::validator.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, USER_AGENT};
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error};

use crate::models::{AppError, AppResult, RelayConfig};
use crate::utils::constants::USER_AGENT as USER_AGENT_CONST;

/// Source of homework status answers, polled once per cycle
#[async_trait]
pub trait HomeworkApi: Send + Sync {
    async fn get_api_answer(&self, from_date: i64) -> AppResult<Value>;
}

/// HTTP client for the homework status endpoint
#[derive(Clone)]
pub struct PracticumClient {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    pub fn new(config: &RelayConfig) -> AppResult<Self> {
        Self::with_endpoint(&config.endpoint, &config.practicum_token, config.request_timeout)
    }

    /// Client against an arbitrary endpoint
    pub fn with_endpoint(endpoint: &str, token: &str, timeout: Duration) -> AppResult<Self> {
        Ok(Self {
            client: Self::build_client(timeout)?,
            endpoint: endpoint.to_string(),
            token: token.to_string(),
        })
    }

    fn build_client(timeout: Duration) -> AppResult<reqwest::Client> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_CONST));

        reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .gzip(true)
            .build()
            .map_err(|e| AppError::api_connection_failed(format!("Failed to build HTTP client: {}", e)))
    }

    fn auth_header(&self) -> String {
        format!("OAuth {}", self.token)
    }
}

#[async_trait]
impl HomeworkApi for PracticumClient {
    async fn get_api_answer(&self, from_date: i64) -> AppResult<Value> {
        debug!("📡 Requesting homework statuses from_date={}", from_date);

        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, self.auth_header())
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| {
                let err = AppError::from(e);
                error!("Homework endpoint {} unavailable: {}", self.endpoint, err);
                err
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            let err = AppError::unexpected_status(status.as_u16());
            error!("{}", err.message);
            return Err(err);
        }

        let body = response.text().await?;
        let answer: Value = serde_json::from_str(&body)?;
        Ok(answer)
    }
}
