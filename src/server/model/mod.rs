//! Server-side domain models.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary.

pub mod document;
pub mod principal;
pub mod resource;
