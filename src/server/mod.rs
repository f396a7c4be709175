//! Server-side API backend and business logic.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - CRUD orchestration and the GitHub OAuth flow
//! - **Data Layer** (`data/`) - Connection management and collection-scoped document queries
//! - **Model Layer** (`model/`) - Documents, resources and the session principal
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Typed session access and the authentication gate
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (store, HTTP and OAuth clients, auth policy)
//! - **Startup** (`startup`) - Initialization of database, sessions, and clients
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Validation** (`validation`) - Declarative request body rules
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** applies the auth gate for writes, then extracts the body
//! 3. **Service** parses the identifier, validates the body, calls the repository
//! 4. **Data** runs exactly one query against the resource's collection
//! 5. **Controller** renders the document as JSON or maps the error to a status code

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
pub mod validation;
