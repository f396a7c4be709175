//! Stored document domain model.
//!
//! A document is a JSON object living in a named collection. The store assigns its
//! identifier; clients only ever see it as the opaque `_id` string.

use serde_json::{Map, Value};

use crate::server::error::{internal::InternalError, AppError};

/// Key under which a document's identifier is exposed to clients.
pub const ID_FIELD: &str = "_id";

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Store-assigned identifier, unique within the collection.
    pub id: i32,
    /// Collection the document belongs to.
    pub collection: String,
    /// Client-supplied fields, never containing `_id`.
    pub fields: Map<String, Value>,
}

impl Document {
    /// Converts an entity model to a document at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Document)` - Entity body was a JSON object
    /// - `Err(AppError::InternalErr(MalformedDocument))` - Stored body is not an object
    pub fn from_entity(entity: entity::document::Model) -> Result<Self, AppError> {
        match entity.body {
            Value::Object(fields) => Ok(Self {
                id: entity.id,
                collection: entity.collection,
                fields,
            }),
            _ => Err(InternalError::MalformedDocument {
                id: entity.id,
                collection: entity.collection,
            }
            .into()),
        }
    }

    /// Renders the document as the JSON object returned by the API, with `_id` first.
    pub fn into_json(self) -> Value {
        let mut object = Map::with_capacity(self.fields.len() + 1);
        object.insert(ID_FIELD.to_string(), Value::String(self.id.to_string()));
        object.extend(self.fields);
        Value::Object(object)
    }
}

/// Removes the client-supplied `_id`, identity is only ever assigned by the store.
pub fn strip_id(mut fields: Map<String, Value>) -> Map<String, Value> {
    fields.remove(ID_FIELD);
    fields
}
