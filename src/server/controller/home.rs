use axum::response::IntoResponse;

/// Plain text landing page, also the destination of the login redirects.
#[utoipa::path(
    get,
    path = "/",
    tag = "home",
    responses(
        (status = 200, description = "Welcome message", body = String, content_type = "text/plain")
    ),
)]
pub async fn home() -> impl IntoResponse {
    "Welcome to the Library API"
}
