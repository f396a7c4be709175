use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use oauth2::{basic::BasicErrorResponse, HttpClientError, RequestTokenError};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No principal is stored in the caller's session.
    ///
    /// Raised by the auth gate on protected routes. Results in a 401 Unauthorized
    /// response before any validation or store access happens.
    #[error("Request requires a logged in user but no principal is in the session")]
    NotLoggedIn,

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF state token in the OAuth callback URL does not match the token stored
    /// in the session, indicating a potential CSRF attack or an invalid callback request.
    /// Results in a 400 Bad Request response.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// GitHub redirected back with an error instead of an authorization code.
    #[error("GitHub rejected the authorization request: {0}")]
    ProviderDenied(String),

    /// Exchanging the authorization code for an access token failed.
    #[error("Failed to exchange authorization code: {0}")]
    TokenExchange(String),
}

impl From<RequestTokenError<HttpClientError<reqwest::Error>, BasicErrorResponse>> for AuthError {
    fn from(err: RequestTokenError<HttpClientError<reqwest::Error>, BasicErrorResponse>) -> Self {
        Self::TokenExchange(err.to_string())
    }
}

/// Converts authentication errors into HTTP responses.
///
/// - `NotLoggedIn` → 401 Unauthorized with "Unauthorized. Please log in."
/// - `CsrfValidationFailed` / `ProviderDenied` / `TokenExchange` → 400 Bad Request with
///   "There was an issue logging you in"
///
/// Login failures are logged at debug level while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::NotLoggedIn => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Unauthorized. Please log in.".to_string(),
                }),
            )
                .into_response(),
            err => {
                tracing::debug!("{}", err);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: "There was an issue logging you in, please try again."
                            .to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
