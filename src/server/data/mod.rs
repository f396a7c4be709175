//! Database repository layer.
//!
//! The connection manager owns the shared pool and hands out collection-scoped
//! document repositories. Repositories return entity models; conversion to domain
//! models happens in the service layer.

pub mod connection;
pub mod document;

#[cfg(test)]
mod test;
