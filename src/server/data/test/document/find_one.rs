use super::*;

/// Tests getting a document by id.
///
/// Expected: Ok(Some(Model)) with the stored body
#[tokio::test]
async fn finds_existing_document() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::document::create_book(db).await?;

    let repo = DocumentRepository::new(db, "books");
    let result = repo.find_one(book.id).await?;

    assert!(result.is_some());
    assert_eq!(result.unwrap().body, fixture::book::body());

    Ok(())
}

/// Tests getting a nonexistent document.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DocumentRepository::new(db, "books");
    let result = repo.find_one(99999).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that an id from another collection does not resolve.
///
/// Expected: Ok(None) when looking up an author id through the books handle
#[tokio::test]
async fn returns_none_for_id_in_other_collection() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::document::create_author(db).await?;

    let repo = DocumentRepository::new(db, "books");
    let result = repo.find_one(author.id).await?;

    assert!(result.is_none());

    Ok(())
}
