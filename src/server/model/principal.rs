//! Session principal domain model.

use serde::{Deserialize, Serialize};

use crate::model::user::PrincipalDto;

/// Authenticated GitHub identity stored in the session after a successful login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Principal {
    pub id: u64,
    pub login: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
}

impl Principal {
    pub fn into_dto(self) -> PrincipalDto {
        PrincipalDto {
            id: self.id,
            login: self.login,
            name: self.name,
            email: self.email,
            avatar_url: self.avatar_url,
        }
    }
}

/// Subset of the `GET /user` response from the GitHub REST API.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubUser {
    pub id: u64,
    pub login: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
}

/// Entry of the `GET /user/emails` response, used when the profile email is private.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubEmail {
    pub email: String,
    pub primary: bool,
    pub verified: bool,
}

impl GitHubUser {
    /// Builds the principal, falling back to `emails` when the profile hides its address.
    ///
    /// Only a primary, verified address is accepted from the fallback list.
    pub fn into_principal(self, emails: &[GitHubEmail]) -> Principal {
        let email = self.email.or_else(|| {
            emails
                .iter()
                .find(|e| e.primary && e.verified)
                .map(|e| e.email.clone())
        });

        Principal {
            id: self.id,
            login: self.login,
            name: self.name,
            email,
            avatar_url: self.avatar_url,
        }
    }
}
