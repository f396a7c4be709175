use serde_json::{json, Value};

/// Fields every valid book body must carry, in validation order.
pub const REQUIRED_FIELDS: [&str; 7] = [
    "title",
    "author",
    "price",
    "genre",
    "publishDate",
    "ISBN",
    "pages",
];

/// A complete, valid book body.
///
/// # Example
/// ```rust,ignore
/// let body = fixture::book::body();
/// assert_eq!(body["title"], "Dune");
/// ```
pub fn body() -> Value {
    json!({
        "title": "Dune",
        "author": "Frank Herbert",
        "genre": "Sci-Fi",
        "price": 15,
        "publishDate": "1965-08-01",
        "ISBN": "9780441013593",
        "pages": 412
    })
}
