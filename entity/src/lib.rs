//! SeaORM entities for the library store.

pub mod prelude;

pub mod document;
