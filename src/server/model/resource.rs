//! Resource definitions served by the CRUD handlers.
//!
//! Books and authors share one handler shape; a [`Resource`] carries everything that
//! differs between them: the backing collection, the label used in messages and the
//! validation rules for incoming bodies.

use crate::server::validation::{Check, FieldRule};

#[derive(Debug, Clone, Copy)]
pub struct Resource {
    /// Name of the backing collection.
    pub collection: &'static str,
    /// Singular label used in client-facing messages, e.g. "Book".
    pub label: &'static str,
    /// Rules applied to create bodies; update bodies use the relaxed variant.
    pub rules: &'static [FieldRule],
}

impl Resource {
    pub fn not_found_message(&self) -> String {
        format!("{} not found", self.label)
    }

    pub fn deleted_message(&self) -> String {
        format!("{} deleted successfully", self.label)
    }
}

pub const BOOKS: Resource = Resource {
    collection: "books",
    label: "Book",
    rules: &[
        FieldRule::required("title", Check::NotEmpty, "Title is required"),
        FieldRule::required("author", Check::NotEmpty, "Author is required"),
        FieldRule::required("price", Check::Numeric, "Price must be a number"),
        FieldRule::required("genre", Check::NotEmpty, "Genre is required"),
        FieldRule::required("publishDate", Check::Iso8601Date, "Publish date must be valid"),
        FieldRule::required("ISBN", Check::NotEmpty, "ISBN is required"),
        FieldRule::required("pages", Check::IntMin(1), "Pages must be a positive number"),
        FieldRule::optional("publisher", Check::NotEmpty, "Publisher cannot be empty"),
    ],
};

pub const AUTHORS: Resource = Resource {
    collection: "authors",
    label: "Author",
    rules: &[
        FieldRule::required("name", Check::NotEmpty, "Name is required"),
        FieldRule::required("email", Check::Email, "Email must be valid"),
        FieldRule::required("birthDate", Check::Iso8601Date, "Birth date must be valid"),
        FieldRule::optional("nationality", Check::NotEmpty, "Nationality cannot be empty"),
        FieldRule::optional(
            "birthYear",
            Check::IntMin(0),
            "Birth year must be a non-negative integer",
        ),
    ],
};
