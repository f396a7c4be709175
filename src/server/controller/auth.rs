use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, user::PrincipalDto},
    server::{
        error::{auth::AuthError, AppError},
        middleware::session::{AuthSession, CsrfSession},
        model::principal::Principal,
        service::oauth::GitHubAuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Where the browser lands after login, failed login and logout.
const LOGIN_REDIRECT: &str = "/";

/// Query parameters GitHub appends to the OAuth callback.
///
/// # Fields
/// - `state` - CSRF protection token that must match the value stored in the session
/// - `code` - Authorization code used to exchange for an access token
/// - `error` - Set instead of `code` when the user denied the request
#[derive(Deserialize)]
pub struct CallbackParams {
    pub state: Option<String>,
    pub code: Option<String>,
    pub error: Option<String>,
}

/// Start the GitHub login flow.
///
/// Stores a fresh CSRF state in the session and redirects the browser to GitHub's
/// authorization page.
#[utoipa::path(
    get,
    path = "/auth/github",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to GitHub authorization page"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_service =
        GitHubAuthService::new(state.http_client, state.oauth_client, state.github_api_url);

    let (url, csrf_token) = auth_service.login_url();

    CsrfSession::new(&session)
        .set_token(csrf_token.secret().clone())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// Complete the GitHub login flow.
///
/// Any failure (denied request, CSRF mismatch, failed token exchange or profile fetch)
/// is logged and the browser is sent back without a principal.
#[utoipa::path(
    get,
    path = "/auth/github/callback",
    tag = AUTH_TAG,
    params(
        ("code" = Option<String>, Query, description = "Authorization code from GitHub"),
        ("state" = Option<String>, Query, description = "CSRF state issued at login"),
        ("error" = Option<String>, Query, description = "Error reported by GitHub")
    ),
    responses(
        (status = 303, description = "Redirect to the application, logged in on success")
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> impl IntoResponse {
    match complete_login(state, &session, params).await {
        Ok(principal) => tracing::info!(login = %principal.login, "User logged in"),
        Err(e) => tracing::warn!("GitHub login failed: {}", e),
    }

    Redirect::to(LOGIN_REDIRECT)
}

/// Log out the current user.
///
/// Deletes the whole session; calling it without a session is a no-op.
#[utoipa::path(
    get,
    path = "/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 303, description = "Redirect to the application, logged out")
    ),
)]
pub async fn logout(session: Session) -> impl IntoResponse {
    let auth_session = AuthSession::new(&session);

    if let Ok(Some(principal)) = auth_session.get_principal().await {
        tracing::info!(login = %principal.login, "User logged out");
    }

    if let Err(e) = auth_session.flush().await {
        tracing::warn!("Failed to delete session on logout: {}", e);
    }

    Redirect::to(LOGIN_REDIRECT)
}

/// Get the logged in user.
#[utoipa::path(
    get,
    path = "/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The logged in user", body = PrincipalDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(session: Session) -> Result<Response, AppError> {
    let Some(principal) = AuthSession::new(&session).get_principal().await? else {
        return Ok((
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: "Not logged in".to_string(),
            }),
        )
            .into_response());
    };

    Ok((StatusCode::OK, Json(principal.into_dto())).into_response())
}

async fn complete_login(
    state: AppState,
    session: &Session,
    params: CallbackParams,
) -> Result<Principal, AppError> {
    // Always consume the stored state so it cannot be replayed
    let stored_state = CsrfSession::new(session).take_token().await?;

    if let Some(error) = params.error {
        return Err(AuthError::ProviderDenied(error).into());
    }

    validate_csrf(stored_state.as_deref(), params.state.as_deref())?;

    let Some(code) = params.code else {
        return Err(AuthError::ProviderDenied("missing authorization code".to_string()).into());
    };

    let auth_service =
        GitHubAuthService::new(state.http_client, state.oauth_client, state.github_api_url);

    let principal = auth_service.callback(code).await?;

    AuthSession::new(session).set_principal(&principal).await?;

    Ok(principal)
}

fn validate_csrf(stored_state: Option<&str>, csrf_state: Option<&str>) -> Result<(), AppError> {
    match (stored_state, csrf_state) {
        (Some(stored), Some(received)) if stored == received => Ok(()),
        _ => Err(AppError::AuthErr(AuthError::CsrfValidationFailed)),
    }
}
