//! Document repository for collection-scoped store operations.
//!
//! A `DocumentRepository` is the collection handle handed out by the connection
//! manager. Every query it issues is filtered by its collection name, so identifiers
//! from one collection never resolve through another collection's handle.

use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};
use serde_json::{Map, Value};

/// Rebuilds the stored body from its own fields minus the patched keys, followed by
/// every patched field. Both `?` bind the patch as JSON text. `json_each` reports
/// booleans as integers and nested values as text, so those are converted back to
/// JSON before being regrouped.
const MERGE_BODY_SQL: &str = r#"(
    SELECT json_group_object(key, value) FROM (
        SELECT key, CASE type
            WHEN 'true' THEN json('true')
            WHEN 'false' THEN json('false')
            WHEN 'object' THEN json(value)
            WHEN 'array' THEN json(value)
            ELSE value END AS value
        FROM json_each("document"."body")
        WHERE key NOT IN (SELECT key FROM json_each(?))
        UNION ALL
        SELECT key, CASE type
            WHEN 'true' THEN json('true')
            WHEN 'false' THEN json('false')
            WHEN 'object' THEN json(value)
            WHEN 'array' THEN json(value)
            ELSE value END AS value
        FROM json_each(?)
    )
)"#;

pub struct DocumentRepository<'a> {
    db: &'a DatabaseConnection,
    collection: &'a str,
}

impl<'a> DocumentRepository<'a> {
    /// Creates a new DocumentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `collection` - Name of the collection every operation is scoped to
    ///
    /// # Returns
    /// - `DocumentRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection, collection: &'a str) -> Self {
        Self { db, collection }
    }

    pub fn collection(&self) -> &str {
        self.collection
    }

    /// Gets every document in the collection in insertion order.
    pub async fn find_all(&self) -> Result<Vec<entity::document::Model>, DbErr> {
        entity::prelude::Document::find()
            .filter(entity::document::Column::Collection.eq(self.collection))
            .order_by_asc(entity::document::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a single document by identifier.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Document exists in this collection
    /// - `Ok(None)` - No document with that identifier in this collection
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_one(&self, id: i32) -> Result<Option<entity::document::Model>, DbErr> {
        entity::prelude::Document::find_by_id(id)
            .filter(entity::document::Column::Collection.eq(self.collection))
            .one(self.db)
            .await
    }

    /// Inserts a new document and returns its store-assigned identifier.
    pub async fn insert_one(&self, fields: Map<String, Value>) -> Result<i32, DbErr> {
        let document = entity::document::ActiveModel {
            collection: ActiveValue::Set(self.collection.to_string()),
            body: ActiveValue::Set(Value::Object(fields)),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(document.id)
    }

    /// Merges `patch` into the stored document with top-level `$set` semantics.
    ///
    /// The merge happens inside one `UPDATE` statement, so concurrent updates of
    /// different fields all survive and a document deleted in the meantime is simply
    /// not matched. Keys present in the patch overwrite (including with `null`), absent
    /// keys are untouched, and nested objects are replaced rather than merged. Rows
    /// whose body is not a JSON object are never matched.
    ///
    /// # Returns
    /// - `Ok(true)` - A document matched and was updated
    /// - `Ok(false)` - No document with that identifier in this collection
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_one(&self, id: i32, patch: Map<String, Value>) -> Result<bool, DbErr> {
        let patch = serde_json::to_string(&patch).map_err(|e| DbErr::Custom(e.to_string()))?;

        let result = entity::prelude::Document::update_many()
            .col_expr(
                entity::document::Column::Body,
                Expr::cust_with_values(MERGE_BODY_SQL, [patch.clone(), patch]),
            )
            .filter(entity::document::Column::Id.eq(id))
            .filter(entity::document::Column::Collection.eq(self.collection))
            .filter(Expr::cust(r#"json_type("document"."body") = 'object'"#))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes a document by identifier.
    ///
    /// # Returns
    /// - `Ok(true)` - A document was deleted
    /// - `Ok(false)` - No document with that identifier in this collection
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_one(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Document::delete_many()
            .filter(entity::document::Column::Id.eq(id))
            .filter(entity::document::Column::Collection.eq(self.collection))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
