//! Type-safe session management wrappers.
//!
//! This module provides type-safe interfaces for managing different aspects of user sessions,
//! organized by concern. Each struct handles a specific domain of session data, preventing
//! typos, ensuring type consistency, and centralizing session-related logic.
//!
//! - `AuthSession` - Authenticated principal
//! - `CsrfSession` - CSRF token management for the OAuth flow
//!
//! Each struct wraps the same underlying `Session` but exposes only the methods
//! relevant to its concern.

use tower_sessions::Session;

use crate::server::{error::AppError, model::principal::Principal};

const SESSION_AUTH_PRINCIPAL: &str = "auth:principal";
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";

/// Authentication session management.
///
/// Handles the authenticated principal and session lifecycle operations.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the principal after a successful login.
    ///
    /// The session id is cycled first so a session fixed before login cannot be
    /// reused once it carries an identity.
    ///
    /// # Returns
    /// - `Ok(())` - Principal successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_principal(&self, principal: &Principal) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session
            .insert(SESSION_AUTH_PRINCIPAL, principal)
            .await?;
        Ok(())
    }

    /// Retrieves the principal from the session.
    ///
    /// # Returns
    /// - `Ok(Some(principal))` - User is logged in
    /// - `Ok(None)` - No principal in session (anonymous)
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_principal(&self) -> Result<Option<Principal>, AppError> {
        Ok(self.session.get::<Principal>(SESSION_AUTH_PRINCIPAL).await?)
    }

    /// Clears all data from the session and deletes it from the store.
    ///
    /// Used during logout, so the old cookie no longer resolves to the principal even
    /// if the browser keeps sending it. Calling it on an anonymous session is a no-op.
    ///
    /// # Returns
    /// - `Ok(())` - Session emptied and removed from the store
    /// - `Err(AppError::SessionErr(_))` - Failed to delete the stored session
    pub async fn flush(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}

/// CSRF protection session management.
///
/// Tokens are stored during login initiation and validated during the OAuth callback.
pub struct CsrfSession<'a> {
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores a CSRF token in the session.
    ///
    /// # Returns
    /// - `Ok(())` - Token successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves and removes the CSRF token from the session.
    ///
    /// The token is removed so each one can only be used once.
    ///
    /// # Returns
    /// - `Ok(Some(token))` - CSRF token was found and removed
    /// - `Ok(None)` - No CSRF token in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;
        Ok(token)
    }
}
