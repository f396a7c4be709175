//! CRUD orchestration shared by every document-backed resource.
//!
//! Each operation parses the identifier, validates the body against the resource's
//! rules and then issues exactly one store call through the collection handle.

use serde_json::Value;

use crate::server::{
    data::connection::ConnectionManager,
    error::AppError,
    model::{
        document::{strip_id, Document},
        resource::Resource,
    },
    util::parse::{into_object, parse_document_id},
    validation::{validate, Mode},
};

pub struct DocumentService<'a> {
    store: &'a ConnectionManager,
    resource: Resource,
}

impl<'a> DocumentService<'a> {
    pub fn new(store: &'a ConnectionManager, resource: Resource) -> Self {
        Self { store, resource }
    }

    /// Gets every document of the resource's collection
    pub async fn list(&self) -> Result<Vec<Document>, AppError> {
        let repo = self.store.collection(self.resource.collection)?;

        repo.find_all()
            .await?
            .into_iter()
            .map(Document::from_entity)
            .collect()
    }

    /// Gets a document by its raw path identifier
    pub async fn get(&self, id: &str) -> Result<Document, AppError> {
        let id = parse_document_id(id)?;
        let repo = self.store.collection(self.resource.collection)?;

        let entity = repo
            .find_one(id)
            .await?
            .ok_or_else(|| AppError::NotFound(self.resource.not_found_message()))?;

        Document::from_entity(entity)
    }

    /// Validates and inserts a new document, returning its identifier
    pub async fn create(&self, body: Value) -> Result<i32, AppError> {
        let fields = strip_id(into_object(body)?);
        validate(self.resource.rules, &fields, Mode::Create)?;

        let repo = self.store.collection(self.resource.collection)?;
        let id = repo.insert_one(fields).await?;

        tracing::debug!(collection = self.resource.collection, id, "document created");

        Ok(id)
    }

    /// Validates the present fields and merges them into an existing document
    pub async fn update(&self, id: &str, body: Value) -> Result<(), AppError> {
        let id = parse_document_id(id)?;
        let fields = strip_id(into_object(body)?);
        validate(self.resource.rules, &fields, Mode::Update)?;

        let repo = self.store.collection(self.resource.collection)?;
        if !repo.update_one(id, fields).await? {
            return Err(AppError::NotFound(self.resource.not_found_message()));
        }

        tracing::debug!(collection = self.resource.collection, id, "document updated");

        Ok(())
    }

    /// Deletes a document by its raw path identifier
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let id = parse_document_id(id)?;
        let repo = self.store.collection(self.resource.collection)?;

        if !repo.delete_one(id).await? {
            return Err(AppError::NotFound(self.resource.not_found_message()));
        }

        tracing::debug!(collection = self.resource.collection, id, "document deleted");

        Ok(())
    }
}
