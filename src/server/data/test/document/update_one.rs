use super::*;

/// Tests merging a partial patch.
///
/// Verifies that fields present in the patch overwrite, new fields are added, and
/// absent fields are left untouched.
///
/// Expected: Ok(true) and merged body
#[tokio::test]
async fn merges_patch_into_existing_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::document::create_book(db).await?;

    let repo = DocumentRepository::new(db, "books");
    let matched = repo
        .update_one(book.id, object(json!({"pages": 500, "publisher": "Chilton"})))
        .await?;

    assert!(matched);
    let stored = repo.find_one(book.id).await?.unwrap();
    assert_eq!(stored.body["pages"], 500);
    assert_eq!(stored.body["publisher"], "Chilton");
    assert_eq!(stored.body["title"], "Dune");

    Ok(())
}

/// Tests an empty patch.
///
/// Expected: Ok(true) and an unchanged body
#[tokio::test]
async fn empty_patch_leaves_document_unchanged() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::document::create_book(db).await?;

    let repo = DocumentRepository::new(db, "books");
    let matched = repo.update_one(book.id, Map::new()).await?;

    assert!(matched);
    let stored = repo.find_one(book.id).await?.unwrap();
    assert_eq!(stored.body, fixture::book::body());

    Ok(())
}

/// Tests updating a nonexistent document.
///
/// Expected: Ok(false) and no row created
#[tokio::test]
async fn returns_false_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DocumentRepository::new(db, "books");
    let matched = repo
        .update_one(424242, object(json!({"title": "Ghost"})))
        .await?;

    assert!(!matched);
    assert!(repo.find_all().await?.is_empty());

    Ok(())
}

/// Tests that updates do not cross collections.
///
/// Expected: Ok(false) and the author left untouched
#[tokio::test]
async fn does_not_update_other_collection() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::document::create_author(db).await?;

    let repo = DocumentRepository::new(db, "books");
    let matched = repo
        .update_one(author.id, object(json!({"name": "Changed"})))
        .await?;

    assert!(!matched);
    let stored = DocumentRepository::new(db, "authors")
        .find_one(author.id)
        .await?
        .unwrap();
    assert_eq!(stored.body["name"], "Frank Herbert");

    Ok(())
}

/// Tests two updates of different fields racing each other.
///
/// Expected: both fields present afterwards, nothing else lost
#[tokio::test]
async fn concurrent_updates_keep_both_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::document::create_book(db).await?;

    let repo = DocumentRepository::new(db, "books");
    let (first, second) = tokio::join!(
        repo.update_one(book.id, object(json!({"pages": 500}))),
        repo.update_one(book.id, object(json!({"publisher": "Chilton"}))),
    );

    assert!(first?);
    assert!(second?);
    let stored = repo.find_one(book.id).await?.unwrap();
    assert_eq!(stored.body["pages"], 500);
    assert_eq!(stored.body["publisher"], "Chilton");
    assert_eq!(stored.body["title"], "Dune");

    Ok(())
}

/// Tests that JSON types survive the merge.
///
/// Null is stored as null rather than removing the key, booleans stay booleans, and
/// nested values are replaced whole.
///
/// Expected: every patched value read back with its original JSON type
#[tokio::test]
async fn preserves_json_types_of_patched_and_kept_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::document::DocumentFactory::new(db, "books")
        .fields(json!({"title": "Dune", "inPrint": false, "tags": ["a"], "meta": {"a": 1}}))
        .build()
        .await?;

    let repo = DocumentRepository::new(db, "books");
    let matched = repo
        .update_one(
            book.id,
            object(json!({
                "title": null,
                "signed": true,
                "tags": ["b", "c"],
                "meta": {"b": {"c": 2}},
                "price": 15.5
            })),
        )
        .await?;

    assert!(matched);
    let stored = repo.find_one(book.id).await?.unwrap();
    assert_eq!(
        stored.body,
        json!({
            "title": null,
            "inPrint": false,
            "signed": true,
            "tags": ["b", "c"],
            "meta": {"b": {"c": 2}},
            "price": 15.5
        })
    );

    Ok(())
}

/// Tests updating a document that has already been deleted.
///
/// Expected: Ok(false) and no row recreated
#[tokio::test]
async fn returns_false_after_delete() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::document::create_book(db).await?;

    let repo = DocumentRepository::new(db, "books");
    assert!(repo.delete_one(book.id).await?);

    let matched = repo
        .update_one(book.id, object(json!({"title": "Ghost"})))
        .await?;

    assert!(!matched);
    assert!(repo.find_one(book.id).await?.is_none());

    Ok(())
}
