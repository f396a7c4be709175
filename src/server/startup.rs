use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use sea_orm::DatabaseConnection;
use time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_sessions::{
    cookie::Key, service::SignedCookie, session_store::ExpiredDeletion, Expiry,
    SessionManagerLayer,
};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    data::connection::ConnectionManager,
    error::{config::ConfigError, AppError},
    state::OAuth2Client,
};

/// Session lifetime, extended on every request that touches the session.
const SESSION_INACTIVITY_DAYS: i64 = 7;

/// Connects the document store and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(ConnectionManager)` - Connected store with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<ConnectionManager, AppError> {
    let store = ConnectionManager::new(&config.database_url);

    store.connect().await?;

    Ok(store)
}

/// Creates the session layer backed by the application database.
///
/// Sessions are stored in the same SQLite database as documents. Cookies are signed
/// with `SESSION_SECRET` when configured, otherwise with a random key that only lives
/// as long as the process. Expired sessions are purged by a background task.
///
/// # Arguments
/// - `db` - Connected database whose pool backs the session store
/// - `session_secret` - Optional signing secret, at least 64 bytes
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Session layer ready to be added to the router
/// - `Err(AppError::ConfigErr)` - The signing secret is unusable
/// - `Err(AppError::DbErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
    session_secret: Option<&str>,
) -> Result<SessionManagerLayer<SqliteStore, SignedCookie>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

    let deletion_store = session_store.clone();
    tokio::spawn(async move {
        if let Err(e) = deletion_store
            .continuously_delete_expired(tokio::time::Duration::from_secs(60))
            .await
        {
            tracing::error!("Session cleanup task stopped: {}", e);
        }
    });

    let key = match session_secret {
        Some(secret) => {
            Key::try_from(secret.as_bytes()).map_err(|e| ConfigError::InvalidEnvVar {
                name: "SESSION_SECRET".to_string(),
                reason: e.to_string(),
            })?
        }
        None => {
            tracing::warn!("SESSION_SECRET is not set, sessions will not survive a restart");
            Key::generate()
        }
    };

    let session = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(SESSION_INACTIVITY_DAYS)))
        .with_signed(key);

    Ok(session)
}

/// Builds the HTTP client used for the token exchange and GitHub API calls.
///
/// Redirects are disabled to prevent SSRF. GitHub rejects API requests that carry no
/// `User-Agent`, so one is always set.
pub fn setup_reqwest_client() -> reqwest::Client {
    reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_default()
}

/// Builds the OAuth2 client for GitHub from configuration.
///
/// # Returns
/// - `Ok(OAuth2Client)` - Client with authorization, token and redirect URLs set
/// - `Err(AppError::ConfigErr(InvalidEnvVar))` - One of the URLs does not parse
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let invalid = |name: &str| {
        let name = name.to_string();
        move |e: url::ParseError| ConfigError::InvalidEnvVar {
            name,
            reason: e.to_string(),
        }
    };

    let auth_url =
        AuthUrl::new(config.github_auth_url.clone()).map_err(invalid("GITHUB_AUTH_URL"))?;
    let token_url =
        TokenUrl::new(config.github_token_url.clone()).map_err(invalid("GITHUB_TOKEN_URL"))?;
    let redirect_url = RedirectUrl::new(config.github_callback_url.clone())
        .map_err(invalid("GITHUB_CALLBACK_URL"))?;

    let client = BasicClient::new(ClientId::new(config.github_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.github_client_secret.clone()))
        .set_auth_uri(auth_url)
        .set_token_uri(token_url)
        .set_redirect_uri(redirect_url);

    Ok(client)
}

/// Permissive CORS policy, any origin may call the API.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
