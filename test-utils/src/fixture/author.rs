use serde_json::{json, Value};

/// Fields every valid author body must carry, in validation order.
pub const REQUIRED_FIELDS: [&str; 3] = ["name", "email", "birthDate"];

/// A complete, valid author body.
pub fn body() -> Value {
    json!({
        "name": "Frank Herbert",
        "email": "frank@herbert.example.com",
        "birthDate": "1920-10-08",
        "nationality": "American"
    })
}
