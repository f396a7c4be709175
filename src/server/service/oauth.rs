//! OAuth2 login with GitHub

use oauth2::{
    basic::BasicTokenType, AuthorizationCode, CsrfToken, EmptyExtraTokenFields, Scope,
    StandardTokenResponse, TokenResponse,
};
use url::Url;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::principal::{GitHubEmail, GitHubUser, Principal},
    state::OAuth2Client,
};

pub struct GitHubAuthService {
    pub http_client: reqwest::Client,
    pub oauth_client: OAuth2Client,
    /// Base URL of the GitHub REST API, without a trailing slash.
    pub api_url: String,
}

impl GitHubAuthService {
    pub fn new(http_client: reqwest::Client, oauth_client: OAuth2Client, api_url: String) -> Self {
        Self {
            http_client,
            oauth_client,
            api_url,
        }
    }

    /// Builds the GitHub authorization URL along with the CSRF state it carries.
    pub fn login_url(&self) -> (Url, CsrfToken) {
        self.oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("user:email".to_string()))
            .url()
    }

    /// Exchanges an authorization code for a token and resolves the GitHub identity.
    ///
    /// # Arguments
    /// - `authorization_code` - The `code` query parameter GitHub redirected back with
    ///
    /// # Returns
    /// - `Ok(Principal)` - Identity of the user who approved the login
    /// - `Err(AppError::AuthErr(TokenExchange))` - GitHub refused the code
    /// - `Err(AppError::ReqwestErr)` - Failed to reach the GitHub API
    pub async fn callback(&self, authorization_code: String) -> Result<Principal, AppError> {
        let auth_code = AuthorizationCode::new(authorization_code);

        let token = self
            .oauth_client
            .exchange_code(auth_code)
            .request_async(&self.http_client)
            .await
            .map_err(AuthError::from)?;

        let user = self.fetch_github_user(&token).await?;

        // Users with a private profile email only expose it through /user/emails
        let emails = if user.email.is_none() {
            self.fetch_github_emails(&token).await?
        } else {
            Vec::new()
        };

        Ok(user.into_principal(&emails))
    }

    async fn fetch_github_user(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<GitHubUser, AppError> {
        let access_token = token.access_token().secret();

        let user = self
            .http_client
            .get(format!("{}/user", self.api_url))
            .bearer_auth(access_token)
            .send()
            .await?
            .error_for_status()?
            .json::<GitHubUser>()
            .await?;

        Ok(user)
    }

    async fn fetch_github_emails(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<Vec<GitHubEmail>, AppError> {
        let access_token = token.access_token().secret();

        let emails = self
            .http_client
            .get(format!("{}/user/emails", self.api_url))
            .bearer_auth(access_token)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<GitHubEmail>>()
            .await?;

        Ok(emails)
    }
}
