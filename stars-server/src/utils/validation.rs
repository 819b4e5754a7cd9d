//! Input validation helpers
//!
//! Request bodies arrive as raw JSON; these helpers turn them into
//! documents or reject them with a [`AppError::Validation`].

use serde_json::Value;
use shared::models::Document;

use crate::utils::AppError;

/// Message for empty or falsy payloads
pub const NO_DATA: &str = "No data provided";

/// Whether a payload carries nothing: `null`, `false`, `0`, `""`, `{}` or `[]`
pub fn is_empty_payload(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Reject empty payloads
pub fn require_payload(value: Value) -> Result<Value, AppError> {
    if is_empty_payload(&value) {
        return Err(AppError::validation(NO_DATA));
    }
    Ok(value)
}

/// A non-empty JSON object, or a validation error naming what was expected
pub fn require_object(value: Value, expected: &str) -> Result<Document, AppError> {
    match require_payload(value)? {
        Value::Object(map) => Ok(map),
        _ => Err(AppError::validation(expected.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn falsy_payloads_are_empty() {
        for v in [json!(null), json!({}), json!([]), json!(""), json!(0), json!(false)] {
            assert!(is_empty_payload(&v), "{v} should be empty");
        }
        for v in [json!({"a": 1}), json!([1]), json!("x"), json!(1), json!(true)] {
            assert!(!is_empty_payload(&v), "{v} should not be empty");
        }
    }

    #[test]
    fn objects_only() {
        assert!(require_object(json!({"a": 1}), "object").is_ok());
        assert!(matches!(
            require_object(json!([{"a": 1}]), "Expected a single class record"),
            Err(AppError::Validation(ref m)) if m == "Expected a single class record"
        ));
        assert!(matches!(
            require_object(json!({}), "object"),
            Err(AppError::Validation(ref m)) if m == NO_DATA
        ));
    }
}
