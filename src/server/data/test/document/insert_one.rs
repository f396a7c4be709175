use super::*;

/// Tests inserting a document.
///
/// Verifies that the store assigns an identifier and persists the body verbatim,
/// including fields no validation rule mentions.
///
/// Expected: Ok(id) resolving to the inserted body
#[tokio::test]
async fn inserts_document_with_extra_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut body = object(fixture::book::body());
    body.insert("series".to_string(), json!("Dune Chronicles"));

    let repo = DocumentRepository::new(db, "books");
    let id = repo.insert_one(body.clone()).await?;

    let stored = repo.find_one(id).await?.unwrap();
    assert_eq!(stored.collection, "books");
    assert_eq!(stored.body, Value::Object(body));

    Ok(())
}

/// Tests that identifiers are unique.
///
/// Expected: Two inserts yield two different ids
#[tokio::test]
async fn assigns_distinct_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DocumentRepository::new(db, "authors");
    let first = repo.insert_one(object(fixture::author::body())).await?;
    let second = repo.insert_one(object(fixture::author::body())).await?;

    assert_ne!(first, second);

    Ok(())
}
