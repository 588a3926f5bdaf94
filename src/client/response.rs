//! Turning raw response bodies into a usable JSON object or a classified error.
//!
//! Reddit is inconsistent about how failures surface: sometimes as a top-level
//! `error` key, sometimes as a nested `json.errors` list, rarely as anything
//! the HTTP status alone would tell us. Every call goes through [`interpret`]
//! so that all of those cases are handled in one place.

use super::error::{RedditError, Result};
use log::debug;
use serde_json::Value;

/// Parse, normalize and classify a response body.
pub fn interpret(body: &[u8]) -> Result<Value> {
    let parsed: Value = serde_json::from_slice(body)?;
    let data = normalize(parsed)?;
    classify(data)
}

/// Reduce the two top-level shapes Reddit uses to a single JSON object.
///
/// Comment pages come back as `[link_listing, comment_listing]`; the second
/// element is the one callers want.
pub fn normalize(value: Value) -> Result<Value> {
    match value {
        Value::Object(_) => Ok(value),
        Value::Array(mut items) if items.len() >= 2 => match items.swap_remove(1) {
            object @ Value::Object(_) => Ok(object),
            other => Err(RedditError::Decode(format!(
                "expected an object at index 1 of the response array, found {}",
                json_type(&other)
            ))),
        },
        Value::Array(items) => Err(RedditError::Decode(format!(
            "expected a response array of at least 2 elements, found {}",
            items.len()
        ))),
        other => Err(RedditError::Decode(format!(
            "expected a JSON object or array, found {}",
            json_type(&other)
        ))),
    }
}

/// Check a normalized object for the two error encodings Reddit uses.
pub fn classify(data: Value) -> Result<Value> {
    // HTTP-style failures (404, 403, invalid_grant) reported in the body
    if let Some(code) = data.get("error") {
        let message = data
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string);
        debug!("Reddit returned error {} ({:?})", code, message);
        return Err(RedditError::ApiHttp {
            code: value_to_string(code),
            message,
        });
    }

    // Validation failures: ratelimits, bad vote targets, duplicate submissions
    let errors = data
        .get("json")
        .and_then(|json| json.get("errors"))
        .and_then(Value::as_array);
    if let Some(first) = errors.and_then(|errors| errors.first()) {
        let (code, description) = match first.as_array() {
            Some(entry) => (
                entry.first().map(value_to_string).unwrap_or_default(),
                entry.get(1).map(value_to_string).unwrap_or_default(),
            ),
            None => (value_to_string(first), String::new()),
        };
        debug!("Reddit rejected the request: [{}] {}", code, description);
        return Err(RedditError::ApiValidation { code, description });
    }

    Ok(data)
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
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
