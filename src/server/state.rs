//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into every handler through
//! Axum's state extraction. It holds:
//! - The document store connection manager
//! - The HTTP client used for GitHub API calls
//! - The OAuth2 client for the GitHub login flow
//! - The per-resource authentication policy

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use std::sync::Arc;

use crate::server::{config::AuthPolicy, data::connection::ConnectionManager};

/// Type alias for the OAuth2 client configured for GitHub authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
///
/// Every field is cheap to clone:
/// - `Arc<ConnectionManager>` shares one connection pool
/// - `reqwest::Client` uses an `Arc` internally
/// - `OAuth2Client` is designed to be cloned
#[derive(Clone)]
pub struct AppState {
    /// Document store shared by every request.
    pub store: Arc<ConnectionManager>,

    /// HTTP client for GitHub token exchange and API requests.
    ///
    /// Configured without redirects to prevent SSRF.
    pub http_client: reqwest::Client,

    /// OAuth2 client for the GitHub authentication flow.
    pub oauth_client: OAuth2Client,

    /// Base URL of the GitHub REST API.
    pub github_api_url: String,

    /// Which resources require a logged in user for writes.
    pub auth_policy: AuthPolicy,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `store` - Connected document store
    /// - `http_client` - HTTP client for external API requests
    /// - `oauth_client` - OAuth2 client for GitHub authentication
    /// - `github_api_url` - Base URL of the GitHub REST API
    /// - `auth_policy` - Write gating per resource
    pub fn new(
        store: Arc<ConnectionManager>,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        github_api_url: String,
        auth_policy: AuthPolicy,
    ) -> Self {
        Self {
            store,
            http_client,
            oauth_client,
            github_api_url,
            auth_policy,
        }
    }
}
