use crate::server::{
    data::connection::ConnectionManager,
    error::{config::ConfigError, AppError},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests requesting a collection before connecting.
///
/// Verifies that the manager refuses to hand out collection handles until
/// `connect()` has completed.
///
/// Expected: Err(ConfigError::DatabaseNotConnected)
#[tokio::test]
async fn collection_before_connect_fails() {
    let manager = ConnectionManager::new("sqlite::memory:");

    let result = manager.collection("books");

    assert!(matches!(
        result,
        Err(AppError::ConfigErr(ConfigError::DatabaseNotConnected))
    ));
}

/// Tests that connect runs migrations and is idempotent.
///
/// Verifies that the first call opens the pool and creates the document table, and
/// that a second call returns the very same cached connection.
///
/// Expected: Ok with both calls yielding the same handle
#[tokio::test]
async fn connect_is_idempotent() -> Result<(), AppError> {
    let manager = ConnectionManager::new("sqlite::memory:");

    let first = manager.connect().await? as *const _;
    let second = manager.connect().await? as *const _;
    assert_eq!(first, second);

    let books = manager.collection("books")?;
    let id = books.insert_one(serde_json::Map::new()).await?;
    assert!(books.find_one(id).await?.is_some());

    Ok(())
}

/// Tests wrapping an existing connection.
///
/// Verifies that a manager built from an open connection hands out working
/// collection handles without calling `connect()`.
///
/// Expected: Ok(Some(document)) for a pre-inserted row
#[tokio::test]
async fn from_connection_is_already_connected() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let book = factory::document::create_book(db).await?;

    let manager = ConnectionManager::from_connection(db.clone());
    let books = manager.collection("books").unwrap();

    assert_eq!(books.collection(), "books");
    assert!(books.find_one(book.id).await?.is_some());

    Ok(())
}
