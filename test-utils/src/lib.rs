//! Library API Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the
//! library API. This crate offers a builder pattern for creating test contexts with
//! in-memory SQLite databases, factories for stored documents, and JSON fixtures for
//! request bodies.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Inserts documents straight into the store
//! - **fixture**: Valid and invalid request bodies for books and authors
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_document_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_document_table().build().await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
