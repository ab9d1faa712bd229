//! Centralized Error Handling Module
//!
//! Every failure in the relay carries a unique error code so a single log line
//! is enough to tell where a polling cycle broke.
//!
//! Error codes follow pattern: CATEGORY_SPECIFIC_ERROR
//! - CFG_xxx: startup configuration errors
//! - API_xxx: homework API connectivity errors
//! - RESPONSE_xxx / HOMEWORK_xxx: schema errors in the API payload
//! - TELEGRAM_xxx: delivery errors

use std::fmt;

/// Application-wide error type
#[derive(Debug)]
pub struct AppError {
    /// Unique error code for logging
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Optional underlying error
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new AppError
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create AppError with source error
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Get error code as string (for logging)
    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }

    pub fn category(&self) -> ErrorCategory {
        self.code.category()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Where in the relay an error originated.
///
/// Only `Startup` is fatal; everything else is caught per cycle and retried
/// after the regular poll period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Startup,
    Connectivity,
    Schema,
    Delivery,
    Other,
}

/// Unique error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // ============================================
    // Configuration Errors
    // ============================================
    /// Required environment variable absent or empty
    ConfigMissingEnv,

    // ============================================
    // Homework API Errors
    // ============================================
    /// Connection refused, DNS failure, reset
    ApiConnectionFailed,
    /// Request did not complete in time
    ApiTimeout,
    /// Endpoint answered with something other than 200
    ApiUnexpectedStatus,

    // ============================================
    // Response Schema Errors
    // ============================================
    /// Body was not valid JSON
    ResponseInvalidJson,
    /// Body is not a JSON object
    ResponseNotObject,
    /// Required top-level key absent
    ResponseMissingKey,
    /// `homeworks` is not an array
    HomeworksNotList,
    /// `homeworks` is an empty array
    HomeworksEmpty,
    /// Homework record has no `homework_name`
    HomeworkMissingName,
    /// Homework record has no `status`
    HomeworkMissingStatus,
    /// `status` is not in the verdict table
    HomeworkUnknownStatus,

    // ============================================
    // Delivery Errors
    // ============================================
    /// Telegram did not accept the message
    TelegramSendFailed,

    /// Unknown error
    Unknown,
}

impl ErrorCode {
    /// Get string representation of error code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ConfigMissingEnv => "CFG_MISSING_ENV",

            Self::ApiConnectionFailed => "API_CONNECTION_FAILED",
            Self::ApiTimeout => "API_TIMEOUT",
            Self::ApiUnexpectedStatus => "API_UNEXPECTED_STATUS",

            Self::ResponseInvalidJson => "RESPONSE_INVALID_JSON",
            Self::ResponseNotObject => "RESPONSE_NOT_OBJECT",
            Self::ResponseMissingKey => "RESPONSE_MISSING_KEY",
            Self::HomeworksNotList => "RESPONSE_HOMEWORKS_NOT_LIST",
            Self::HomeworksEmpty => "RESPONSE_HOMEWORKS_EMPTY",
            Self::HomeworkMissingName => "HOMEWORK_MISSING_NAME",
            Self::HomeworkMissingStatus => "HOMEWORK_MISSING_STATUS",
            Self::HomeworkUnknownStatus => "HOMEWORK_UNKNOWN_STATUS",

            Self::TelegramSendFailed => "TELEGRAM_SEND_FAILED",

            Self::Unknown => "UNKNOWN_ERROR",
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigMissingEnv => ErrorCategory::Startup,
            Self::ApiConnectionFailed | Self::ApiTimeout | Self::ApiUnexpectedStatus => {
                ErrorCategory::Connectivity
            }
            Self::ResponseInvalidJson
            | Self::ResponseNotObject
            | Self::ResponseMissingKey
            | Self::HomeworksNotList
            | Self::HomeworksEmpty
            | Self::HomeworkMissingName
            | Self::HomeworkMissingStatus
            | Self::HomeworkUnknownStatus => ErrorCategory::Schema,
            Self::TelegramSendFailed => ErrorCategory::Delivery,
            Self::Unknown => ErrorCategory::Other,
        }
    }
}

// ============================================
// Convenience constructors
// ============================================

impl AppError {
    /// Required environment variable absent
    pub fn missing_env(names: &[&str]) -> Self {
        Self::new(
            ErrorCode::ConfigMissingEnv,
            format!("Missing required environment variables: {}", names.join(", ")),
        )
    }

    /// Homework API unreachable
    pub fn api_connection_failed(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ApiConnectionFailed, msg)
    }

    /// Homework API answered with a non-200 code
    pub fn unexpected_status(actual: u16) -> Self {
        Self::new(
            ErrorCode::ApiUnexpectedStatus,
            format!("Expected status 200, got {}", actual),
        )
    }

    /// Required key absent from the API response
    pub fn missing_key(key: &str) -> Self {
        Self::new(
            ErrorCode::ResponseMissingKey,
            format!("Expected key \"{}\" missing from API response", key),
        )
    }

    /// Telegram rejected or never received the message
    pub fn send_failed(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::TelegramSendFailed, msg)
    }
}

// ============================================
// Result type alias
// ============================================

/// Application Result type
pub type AppResult<T> = Result<T, AppError>;

// ============================================
// Conversion from common error types
// ============================================

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::with_source(ErrorCode::ApiTimeout, "Request timeout", err)
        } else if err.is_decode() {
            Self::with_source(ErrorCode::ResponseInvalidJson, "Response body is not valid JSON", err)
        } else if err.is_connect() || err.is_request() {
            let message = format!("Endpoint unreachable: {}", err);
            Self::with_source(ErrorCode::ApiConnectionFailed, message, err)
        } else {
            Self::new(ErrorCode::Unknown, err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(ErrorCode::ResponseInvalidJson, "JSON parse error", err)
    }
}
