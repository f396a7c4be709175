use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

use crate::{
    model::{
        api::{ErrorDto, FieldErrorDto, InsertedDto, MessageDto, ValidationErrorDto},
        author::AuthorDto,
        book::BookDto,
        user::PrincipalDto,
    },
    server::{
        controller::{auth, author, book, home},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Library API", description = "Books and authors over a document store"),
    paths(
        home::home,
        book::list_books,
        book::get_book,
        book::create_book,
        book::update_book,
        book::delete_book,
        author::list_authors,
        author::get_author,
        author::create_author,
        author::update_author,
        author::delete_author,
        auth::login,
        auth::callback,
        auth::logout,
        auth::get_user,
    ),
    components(schemas(
        BookDto,
        AuthorDto,
        PrincipalDto,
        ErrorDto,
        FieldErrorDto,
        ValidationErrorDto,
        InsertedDto,
        MessageDto,
    )),
    tags(
        (name = "books", description = "Book management"),
        (name = "authors", description = "Author management"),
        (name = "auth", description = "GitHub login and session"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/books", get(book::list_books).post(book::create_book))
        .route(
            "/books/{id}",
            get(book::get_book)
                .put(book::update_book)
                .delete(book::delete_book),
        )
        .route("/authors", get(author::list_authors).post(author::create_author))
        .route(
            "/authors/{id}",
            get(author::get_author)
                .put(author::update_author)
                .delete(author::delete_author),
        )
        .route("/auth/github", get(auth::login))
        .route("/auth/github/callback", get(auth::callback))
        .route("/auth/logout", get(auth::logout))
        .route("/auth/me", get(auth::get_user))
        .route("/api-docs/openapi.json", get(openapi))
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
