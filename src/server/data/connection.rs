//! Shared database connection management.
//!
//! The `ConnectionManager` is constructed once at process start and shared through
//! `AppState`. It opens the connection pool on the first `connect()` call, applies
//! pending migrations, and hands out collection-scoped repositories afterwards. The
//! pool itself multiplexes concurrent requests, so no locking happens here.

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tokio::sync::OnceCell;

use crate::server::{
    data::document::DocumentRepository,
    error::{config::ConfigError, AppError},
};

pub struct ConnectionManager {
    url: String,
    connection: OnceCell<DatabaseConnection>,
}

impl ConnectionManager {
    /// Creates an unconnected manager for the given connection string.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            connection: OnceCell::new(),
        }
    }

    /// Wraps a connection that is already open and migrated.
    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self {
            url: String::new(),
            connection: OnceCell::new_with(Some(db)),
        }
    }

    /// Opens the connection pool on first use and returns the cached handle afterwards.
    ///
    /// Concurrent first callers wait on the same initialisation; only one pool is ever
    /// opened. A failed attempt leaves the manager unconnected so a later call retries.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Connected database with migrations applied
    /// - `Err(AppError::DbErr)` - Failed to connect or run migrations
    pub async fn connect(&self) -> Result<&DatabaseConnection, AppError> {
        self.connection
            .get_or_try_init(|| async {
                use migration::{Migrator, MigratorTrait};

                let mut opt = ConnectOptions::new(&self.url);
                opt.sqlx_logging(false);

                // Each pooled connection to `:memory:` opens a separate empty database
                if self.url.contains(":memory:") {
                    opt.max_connections(1);
                }

                let db = Database::connect(opt).await?;

                Migrator::up(&db, None).await?;

                tracing::info!("Connected to database");

                Ok::<_, AppError>(db)
            })
            .await
    }

    /// Returns the connection if `connect()` has completed.
    pub fn connection(&self) -> Result<&DatabaseConnection, AppError> {
        self.connection
            .get()
            .ok_or_else(|| ConfigError::DatabaseNotConnected.into())
    }

    /// Returns a repository scoped to the named collection.
    ///
    /// # Returns
    /// - `Ok(DocumentRepository)` - Handle bound to the shared connection
    /// - `Err(AppError::ConfigErr(DatabaseNotConnected))` - Called before `connect()`
    pub fn collection<'a>(&'a self, name: &'a str) -> Result<DocumentRepository<'a>, AppError> {
        Ok(DocumentRepository::new(self.connection()?, name))
    }
}
