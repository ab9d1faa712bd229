//! Type definitions for the homework relay

use serde_json::Value;
use tracing::error;

use super::errors::{AppError, AppResult, ErrorCode};
use crate::utils::constants::{INITIAL_FROM_DATE, INITIAL_STATUS, KEY_HOMEWORK_NAME, KEY_STATUS};

/// Review status of a homework, as reported by the API.
///
/// The three variants form the verdict table; any other status string in a
/// response is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub const ALL: [HomeworkStatus; 3] = [Self::Approved, Self::Reviewing, Self::Rejected];

    /// Parse an API status code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "approved" => Some(Self::Approved),
            "reviewing" => Some(Self::Reviewing),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }

    /// Display text sent to the chat
    pub fn verdict(&self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

/// One submission from the `homeworks` array
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeworkRecord {
    pub homework_name: String,
    pub status: HomeworkStatus,
}

impl HomeworkRecord {
    /// Extract a record from raw JSON.
    ///
    /// Name is checked before status, status before the verdict lookup; each
    /// failure logs and maps to its own missing-key code.
    pub fn from_json(homework: &Value) -> AppResult<Self> {
        let homework_name = match homework.get(KEY_HOMEWORK_NAME).and_then(Value::as_str) {
            Some(name) => name.to_string(),
            None => {
                error!("Homework record has no \"{}\" key", KEY_HOMEWORK_NAME);
                return Err(AppError::new(
                    ErrorCode::HomeworkMissingName,
                    "Expected a homework name but got none",
                ));
            }
        };

        let code = match homework.get(KEY_STATUS).and_then(Value::as_str) {
            Some(code) => code,
            None => {
                error!("Homework record came back without a status");
                return Err(AppError::new(
                    ErrorCode::HomeworkMissingStatus,
                    format!("Homework \"{}\" has no status", homework_name),
                ));
            }
        };

        let status = match HomeworkStatus::from_code(code) {
            Some(status) => status,
            None => {
                error!("Unexpected homework status \"{}\" in API response", code);
                return Err(AppError::new(
                    ErrorCode::HomeworkUnknownStatus,
                    format!("Unknown homework status \"{}\"", code),
                ));
            }
        };

        Ok(Self {
            homework_name,
            status,
        })
    }
}

/// Cross-cycle state owned by the poll loop. Lives only in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollState {
    /// Status of the last notification sent (or the initial assumption)
    pub last_status: String,
    /// Lower bound sent as `from_date`
    pub from_date: i64,
}

impl Default for PollState {
    fn default() -> Self {
        Self {
            last_status: INITIAL_STATUS.to_string(),
            from_date: INITIAL_FROM_DATE,
        }
    }
}

/// Result of a single successful polling cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Status matches the last notified one; nothing sent
    Unchanged,
    /// A notification went out for this status
    Notified(HomeworkStatus),
}
