use super::*;

/// Tests deleting a document.
///
/// Expected: Ok(true) and the document no longer found
#[tokio::test]
async fn deletes_existing_document() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::document::create_book(db).await?;

    let repo = DocumentRepository::new(db, "books");
    let deleted = repo.delete_one(book.id).await?;

    assert!(deleted);
    assert!(repo.find_one(book.id).await?.is_none());

    Ok(())
}

/// Tests deleting the same document twice.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn second_delete_reports_no_match() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::document::create_book(db).await?;

    let repo = DocumentRepository::new(db, "books");

    assert!(repo.delete_one(book.id).await?);
    assert!(!repo.delete_one(book.id).await?);

    Ok(())
}

/// Tests that deletes do not cross collections.
///
/// Expected: Ok(false) and the author still present
#[tokio::test]
async fn does_not_delete_other_collection() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::document::create_author(db).await?;

    let repo = DocumentRepository::new(db, "books");

    assert!(!repo.delete_one(author.id).await?);
    assert!(DocumentRepository::new(db, "authors")
        .find_one(author.id)
        .await?
        .is_some());

    Ok(())
}
