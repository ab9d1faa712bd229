//! Notification text

use serde_json::Value;

use crate::models::{AppResult, HomeworkRecord};

/// Turn a homework record into the message sent to the chat.
pub fn parse_status(homework: &Value) -> AppResult<String> {
    let record = HomeworkRecord::from_json(homework)?;
    Ok(format_message(&record))
}

pub fn format_message(record: &HomeworkRecord) -> String {
    format!(
        "Изменился статус проверки работы \"{}\". {}",
        record.homework_name,
        record.status.verdict()
    )
}
