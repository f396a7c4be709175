use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored document body was not a JSON object.
    ///
    /// Every write path stores objects only, so this indicates the table was modified
    /// outside of the application. Results in a 500 Internal Server Error with a
    /// generic message returned to client.
    #[error("Document {id} in collection '{collection}' does not hold a JSON object")]
    MalformedDocument {
        /// Identifier of the corrupt record
        id: i32,
        /// Collection the record belongs to
        collection: String,
    },
}
