use axum::http::{Method, StatusCode};
use serde_json::json;
use test_utils::{factory, fixture};

use super::{body_json, error_fields, TestApp};
use crate::server::config::AuthPolicy;

/// Tests anonymous author writes under the default policy.
///
/// Expected: 201 for create, 204 for update, 200 for delete
#[tokio::test]
async fn default_policy_allows_anonymous_writes() {
    let app = TestApp::anonymous(AuthPolicy::default()).await;

    let response = app
        .send(Method::POST, "/authors", Some(fixture::author::body()))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["insertedId"]
        .as_str()
        .unwrap()
        .to_string();
    let uri = format!("/authors/{}", id);

    let response = app
        .send(Method::PUT, &uri, Some(json!({"birthYear": 1920})))
        .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let stored = body_json(app.send(Method::GET, &uri, None).await).await;
    assert_eq!(stored["birthYear"], 1920);
    assert_eq!(stored["name"], "Frank Herbert");

    let response = app.send(Method::DELETE, &uri, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["message"],
        "Author deleted successfully"
    );
}

/// Tests author writes with gating turned on.
///
/// Expected: 401 and nothing stored
#[tokio::test]
async fn gated_authors_reject_anonymous_writes() {
    let policy = AuthPolicy {
        books: true,
        authors: true,
    };
    let app = TestApp::anonymous(policy).await;

    let response = app
        .send(Method::POST, "/authors", Some(fixture::author::body()))
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(app.count("authors").await, 0);
}

/// Tests omitting each required author field in turn.
///
/// Expected: 400 with exactly one entry naming the omitted field
#[tokio::test]
async fn create_rejects_each_missing_required_field() {
    let app = TestApp::anonymous(AuthPolicy::default()).await;

    for field in fixture::author::REQUIRED_FIELDS {
        let body = fixture::without(fixture::author::body(), field);

        let response = app.send(Method::POST, "/authors", Some(body)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{field}");
        assert_eq!(error_fields(&body_json(response).await), vec![field]);
    }
}

/// Tests author-specific rule messages.
///
/// Expected: 400 with the email and birth date messages
#[tokio::test]
async fn create_rejects_malformed_email_and_date() {
    let app = TestApp::anonymous(AuthPolicy::default()).await;

    let mut body = fixture::author::body();
    body["email"] = json!("frank at herbert");
    body["birthDate"] = json!("October 8th");

    let response = app.send(Method::POST, "/authors", Some(body)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(error_fields(&body), vec!["email", "birthDate"]);
    assert_eq!(body["errors"][0]["message"], "Email must be valid");
    assert_eq!(body["errors"][1]["message"], "Birth date must be valid");
}

/// Tests that collections are isolated from each other.
///
/// Expected: an author's id resolves under /authors and 404s under /books
#[tokio::test]
async fn author_id_does_not_resolve_as_book() {
    let app = TestApp::anonymous(AuthPolicy::default()).await;
    let author = factory::document::create_author(app.store.connection().unwrap())
        .await
        .unwrap();

    let as_author = app
        .send(Method::GET, &format!("/authors/{}", author.id), None)
        .await;
    let as_book = app
        .send(Method::GET, &format!("/books/{}", author.id), None)
        .await;

    assert_eq!(as_author.status(), StatusCode::OK);
    assert_eq!(as_book.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(as_book).await["error"], "Book not found");
}

/// Tests fetching an author that does not exist.
///
/// Expected: 404 "Author not found"
#[tokio::test]
async fn unknown_author_is_not_found() {
    let app = TestApp::anonymous(AuthPolicy::default()).await;

    let response = app.send(Method::GET, "/authors/99", None).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Author not found");
}
