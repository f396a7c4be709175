//! Document factory for creating stored test records.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::{Map, Value};

use crate::fixture;

/// Factory for inserting documents with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let book = DocumentFactory::new(&db, "books")
///     .fields(fixture::book::body())
///     .field("title", "Children of Dune")
///     .build()
///     .await?;
/// ```
pub struct DocumentFactory<'a> {
    db: &'a DatabaseConnection,
    collection: String,
    fields: Map<String, Value>,
}

impl<'a> DocumentFactory<'a> {
    /// Creates a factory for an empty document in `collection`.
    pub fn new(db: &'a DatabaseConnection, collection: impl Into<String>) -> Self {
        Self {
            db,
            collection: collection.into(),
            fields: Map::new(),
        }
    }

    /// Sets a single field, replacing any previous value.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Copies every key of `body` into the document.
    ///
    /// # Panics
    /// - If `body` is not a JSON object (indicates invalid test data)
    pub fn fields(mut self, body: Value) -> Self {
        let Value::Object(map) = body else {
            panic!("DocumentFactory::fields expects a JSON object");
        };
        self.fields.extend(map);
        self
    }

    /// Inserts the document and returns the stored entity.
    ///
    /// # Returns
    /// - `Ok(document::Model)` - Inserted row including its assigned id
    /// - `Err(DbErr)` - Insert failed (missing table, etc.)
    pub async fn build(self) -> Result<entity::document::Model, DbErr> {
        entity::document::ActiveModel {
            collection: ActiveValue::Set(self.collection),
            body: ActiveValue::Set(Value::Object(self.fields)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Inserts the default book fixture into the `books` collection.
pub async fn create_book(db: &DatabaseConnection) -> Result<entity::document::Model, DbErr> {
    DocumentFactory::new(db, "books")
        .fields(fixture::book::body())
        .build()
        .await
}

/// Inserts the default author fixture into the `authors` collection.
pub async fn create_author(db: &DatabaseConnection) -> Result<entity::document::Model, DbErr> {
    DocumentFactory::new(db, "authors")
        .fields(fixture::author::body())
        .build()
        .await
}
