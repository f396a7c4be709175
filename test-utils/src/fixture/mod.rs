//! Request body fixtures.
//!
//! Plain JSON values with no database insertion, used both as HTTP request bodies and
//! as factory input.

pub mod author;
pub mod book;

use serde_json::Value;

/// Returns `body` with `field` removed.
///
/// # Panics
/// - If `body` is not a JSON object
pub fn without(mut body: Value, field: &str) -> Value {
    body.as_object_mut()
        .expect("fixture body must be a JSON object")
        .remove(field);
    body
}
