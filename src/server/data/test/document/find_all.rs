use super::*;

/// Tests listing an empty collection.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_for_empty_collection() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DocumentRepository::new(db, "books");
    let result = repo.find_all().await?;

    assert!(result.is_empty());

    Ok(())
}

/// Tests listing returns documents in insertion order.
///
/// Expected: Ok(vec) ordered by ascending id
#[tokio::test]
async fn returns_documents_in_insertion_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::document::DocumentFactory::new(db, "books")
        .field("title", "Dune")
        .build()
        .await?;
    let second = factory::document::DocumentFactory::new(db, "books")
        .field("title", "Dune Messiah")
        .build()
        .await?;

    let repo = DocumentRepository::new(db, "books");
    let result = repo.find_all().await?;

    let ids: Vec<i32> = result.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests that listing is scoped to the repository's collection.
///
/// Expected: Ok(vec) containing only books
#[tokio::test]
async fn excludes_other_collections() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::document::create_book(db).await?;
    factory::document::create_author(db).await?;

    let repo = DocumentRepository::new(db, "books");
    let result = repo.find_all().await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, book.id);
    assert_eq!(result[0].collection, "books");

    Ok(())
}
