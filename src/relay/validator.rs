//! Response validation
//!
//! Checks the raw API answer before anything indexes into it.

use serde_json::Value;
use tracing::error;

use crate::models::{AppError, AppResult, ErrorCode};
use crate::utils::constants::{KEY_HOMEWORKS, REQUIRED_RESPONSE_KEYS};

/// Validate an API answer and return its `homeworks` array.
///
/// Order matters: object, `homeworks` present, `homeworks` is an array,
/// `homeworks` non-empty, then every required key present.
pub fn check_response(response: &Value) -> AppResult<&[Value]> {
    let body = response.as_object().ok_or_else(|| {
        AppError::new(
            ErrorCode::ResponseNotObject,
            format!("API response is not an object: {}", json_type(response)),
        )
    })?;

    // null counts as absent
    let homeworks = body
        .get(KEY_HOMEWORKS)
        .filter(|v| !v.is_null())
        .ok_or_else(|| AppError::missing_key(KEY_HOMEWORKS))?;

    let homeworks = homeworks.as_array().ok_or_else(|| {
        AppError::new(
            ErrorCode::HomeworksNotList,
            format!(
                "\"{}\" in API response is {}, expected an array",
                KEY_HOMEWORKS,
                json_type(homeworks)
            ),
        )
    })?;

    if homeworks.is_empty() {
        return Err(AppError::new(
            ErrorCode::HomeworksEmpty,
            "API response has no homeworks",
        ));
    }

    for key in REQUIRED_RESPONSE_KEYS {
        if !body.contains_key(key) {
            let err = AppError::missing_key(key);
            error!("{}", err.message);
            return Err(err);
        }
    }

    Ok(homeworks.as_slice())
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
