//! Wire types shared by the HTTP layer and the OpenAPI description.

pub mod api;
pub mod author;
pub mod book;
pub mod user;
