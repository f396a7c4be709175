use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The GitHub identity attached to a logged-in browser session.
///
/// Only the fields needed to identify the caller are kept; the rest of the provider
/// profile is discarded at login.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct PrincipalDto {
    /// GitHub numeric user id.
    pub id: u64,
    /// GitHub username.
    pub login: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
}
