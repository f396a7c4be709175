//! Factory methods for creating stored test documents.
//!
//! Factories insert rows straight into the document table, bypassing the HTTP layer
//! and validation, so tests can arrange store state in one line.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let book = factory::document::create_book(&db).await?;
//! let author = factory::document::DocumentFactory::new(&db, "authors")
//!     .field("name", "Ursula K. Le Guin")
//!     .build()
//!     .await?;
//! ```

pub mod document;
