use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, InsertedDto, MessageDto, ValidationErrorDto},
        book::BookDto,
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::resource::BOOKS,
        service::document::DocumentService, state::AppState,
    },
};

/// Tag for grouping book endpoints in OpenAPI documentation
pub static BOOK_TAG: &str = "books";

/// List every book.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Array of books, empty when none exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/books",
    tag = BOOK_TAG,
    responses(
        (status = 200, description = "All books", body = [BookDto]),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_books(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = DocumentService::new(&state.store, BOOKS);

    let books: Vec<Value> = service
        .list()
        .await?
        .into_iter()
        .map(|book| book.into_json())
        .collect();

    Ok((StatusCode::OK, Json(books)))
}

/// Get a single book.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - The book including its `_id`
/// - `400 Bad Request` - Malformed identifier
/// - `404 Not Found` - No book with that identifier
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = BOOK_TAG,
    params(
        ("id" = String, Path, description = "Book identifier")
    ),
    responses(
        (status = 200, description = "The requested book", body = BookDto),
        (status = 400, description = "Malformed identifier", body = ErrorDto),
        (status = 404, description = "Book not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = DocumentService::new(&state.store, BOOKS);

    let book = service.get(&id).await?;

    Ok((StatusCode::OK, Json(book.into_json())))
}

/// Create a book.
///
/// Every rule of the book rule set is evaluated and all failures are returned together.
/// Fields outside the rule set are stored as sent.
///
/// # Access Control
/// - Logged in user, unless `REQUIRE_AUTH_FOR_BOOKS` is disabled
///
/// # Returns
/// - `201 Created` - Identifier of the new book
/// - `400 Bad Request` - Body is not a JSON object or fails validation
/// - `401 Unauthorized` - No logged in user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/books",
    tag = BOOK_TAG,
    request_body = BookDto,
    responses(
        (status = 201, description = "Book created", body = InsertedDto),
        (status = 400, description = "Validation failed", body = ValidationErrorDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_book(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&session)
        .require_if(state.auth_policy.books)
        .await?;

    let Json(body) = payload?;
    let service = DocumentService::new(&state.store, BOOKS);

    let id = service.create(body).await?;

    Ok((
        StatusCode::CREATED,
        Json(InsertedDto {
            inserted_id: id.to_string(),
        }),
    ))
}

/// Update a book.
///
/// Only the fields present in the body are validated and overwritten; every other
/// stored field is kept.
///
/// # Access Control
/// - Logged in user, unless `REQUIRE_AUTH_FOR_BOOKS` is disabled
///
/// # Returns
/// - `204 No Content` - Book updated
/// - `400 Bad Request` - Malformed identifier, non-object body or failed validation
/// - `401 Unauthorized` - No logged in user
/// - `404 Not Found` - No book with that identifier
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = BOOK_TAG,
    params(
        ("id" = String, Path, description = "Book identifier")
    ),
    request_body = BookDto,
    responses(
        (status = 204, description = "Book updated"),
        (status = 400, description = "Validation failed", body = ValidationErrorDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 404, description = "Book not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_book(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&session)
        .require_if(state.auth_policy.books)
        .await?;

    let Json(body) = payload?;
    let service = DocumentService::new(&state.store, BOOKS);

    service.update(&id, body).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a book.
///
/// # Access Control
/// - Logged in user, unless `REQUIRE_AUTH_FOR_BOOKS` is disabled
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `400 Bad Request` - Malformed identifier
/// - `401 Unauthorized` - No logged in user
/// - `404 Not Found` - No book with that identifier
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = BOOK_TAG,
    params(
        ("id" = String, Path, description = "Book identifier")
    ),
    responses(
        (status = 200, description = "Book deleted", body = MessageDto),
        (status = 400, description = "Malformed identifier", body = ErrorDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 404, description = "Book not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_book(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&session)
        .require_if(state.auth_policy.books)
        .await?;

    let service = DocumentService::new(&state.store, BOOKS);

    service.delete(&id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: BOOKS.deleted_message(),
        }),
    ))
}
