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
        author::AuthorDto,
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::resource::AUTHORS,
        service::document::DocumentService, state::AppState,
    },
};

/// Tag for grouping author endpoints in OpenAPI documentation
pub static AUTHOR_TAG: &str = "authors";

/// List every author.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Array of authors, empty when none exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/authors",
    tag = AUTHOR_TAG,
    responses(
        (status = 200, description = "All authors", body = [AuthorDto]),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_authors(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = DocumentService::new(&state.store, AUTHORS);

    let authors: Vec<Value> = service
        .list()
        .await?
        .into_iter()
        .map(|author| author.into_json())
        .collect();

    Ok((StatusCode::OK, Json(authors)))
}

/// Get a single author.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - The author including its `_id`
/// - `400 Bad Request` - Malformed identifier
/// - `404 Not Found` - No author with that identifier
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/authors/{id}",
    tag = AUTHOR_TAG,
    params(
        ("id" = String, Path, description = "Author identifier")
    ),
    responses(
        (status = 200, description = "The requested author", body = AuthorDto),
        (status = 400, description = "Malformed identifier", body = ErrorDto),
        (status = 404, description = "Author not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_author(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = DocumentService::new(&state.store, AUTHORS);

    let author = service.get(&id).await?;

    Ok((StatusCode::OK, Json(author.into_json())))
}

/// Create an author.
///
/// Every rule of the author rule set is evaluated and all failures are returned together.
/// Fields outside the rule set are stored as sent.
///
/// # Access Control
/// - Logged in user, only when `REQUIRE_AUTH_FOR_AUTHORS` is enabled
///
/// # Returns
/// - `201 Created` - Identifier of the new author
/// - `400 Bad Request` - Body is not a JSON object or fails validation
/// - `401 Unauthorized` - No logged in user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/authors",
    tag = AUTHOR_TAG,
    request_body = AuthorDto,
    responses(
        (status = 201, description = "Author created", body = InsertedDto),
        (status = 400, description = "Validation failed", body = ValidationErrorDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_author(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&session)
        .require_if(state.auth_policy.authors)
        .await?;

    let Json(body) = payload?;
    let service = DocumentService::new(&state.store, AUTHORS);

    let id = service.create(body).await?;

    Ok((
        StatusCode::CREATED,
        Json(InsertedDto {
            inserted_id: id.to_string(),
        }),
    ))
}

/// Update an author.
///
/// Only the fields present in the body are validated and overwritten; every other
/// stored field is kept.
///
/// # Access Control
/// - Logged in user, only when `REQUIRE_AUTH_FOR_AUTHORS` is enabled
///
/// # Returns
/// - `204 No Content` - Author updated
/// - `400 Bad Request` - Malformed identifier, non-object body or failed validation
/// - `401 Unauthorized` - No logged in user
/// - `404 Not Found` - No author with that identifier
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/authors/{id}",
    tag = AUTHOR_TAG,
    params(
        ("id" = String, Path, description = "Author identifier")
    ),
    request_body = AuthorDto,
    responses(
        (status = 204, description = "Author updated"),
        (status = 400, description = "Validation failed", body = ValidationErrorDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 404, description = "Author not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_author(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&session)
        .require_if(state.auth_policy.authors)
        .await?;

    let Json(body) = payload?;
    let service = DocumentService::new(&state.store, AUTHORS);

    service.update(&id, body).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete an author.
///
/// # Access Control
/// - Logged in user, only when `REQUIRE_AUTH_FOR_AUTHORS` is enabled
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `400 Bad Request` - Malformed identifier
/// - `401 Unauthorized` - No logged in user
/// - `404 Not Found` - No author with that identifier
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/authors/{id}",
    tag = AUTHOR_TAG,
    params(
        ("id" = String, Path, description = "Author identifier")
    ),
    responses(
        (status = 200, description = "Author deleted", body = MessageDto),
        (status = 400, description = "Malformed identifier", body = ErrorDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 404, description = "Author not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_author(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&session)
        .require_if(state.auth_policy.authors)
        .await?;

    let service = DocumentService::new(&state.store, AUTHORS);

    service.delete(&id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: AUTHORS.deleted_message(),
        }),
    ))
}
