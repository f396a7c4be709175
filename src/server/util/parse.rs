use serde_json::{Map, Value};

use crate::server::error::AppError;

/// Parses a document identifier from a path segment
///
/// Only the canonical decimal spelling is accepted, so `05` and `+5` are rejected
/// rather than resolving to the same record as `5`.
///
/// # Arguments
/// - `value` - The raw `{id}` path segment
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed identifier
/// - `Err(AppError::BadRequest)` - The segment is not a valid identifier
pub fn parse_document_id(value: &str) -> Result<i32, AppError> {
    value
        .parse::<i32>()
        .ok()
        .filter(|id| id.to_string() == value)
        .ok_or_else(|| AppError::BadRequest("Invalid identifier".to_string()))
}

/// Unwraps a request body that must be a JSON object
///
/// # Returns
/// - `Ok(Map)` - The body's fields
/// - `Err(AppError::BadRequest)` - Body is an array, string, number, bool or null
pub fn into_object(body: Value) -> Result<Map<String, Value>, AppError> {
    match body {
        Value::Object(fields) => Ok(fields),
        _ => Err(AppError::BadRequest(
            "Request body must be a JSON object".to_string(),
        )),
    }
}
