use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::principal::Principal,
};

/// Session-backed gate in front of protected handlers.
///
/// Handlers call `require()` before reading their body, so an anonymous caller is
/// rejected before any validation or store access happens.
pub struct AuthGuard<'a> {
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Returns the logged in principal.
    ///
    /// # Returns
    /// - `Ok(Principal)` - A principal is stored in the session
    /// - `Err(AppError::AuthErr(NotLoggedIn))` - Anonymous session
    /// - `Err(AppError::SessionErr(_))` - Failed to read the session
    pub async fn require(&self) -> Result<Principal, AppError> {
        let Some(principal) = AuthSession::new(self.session).get_principal().await? else {
            return Err(AuthError::NotLoggedIn.into());
        };

        Ok(principal)
    }

    /// Applies the gate only when `enabled`, returning the principal if one is known.
    pub async fn require_if(&self, enabled: bool) -> Result<Option<Principal>, AppError> {
        if enabled {
            self.require().await.map(Some)
        } else {
            AuthSession::new(self.session).get_principal().await
        }
    }
}
