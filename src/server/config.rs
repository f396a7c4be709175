use crate::server::error::{config::ConfigError, AppError};

const GITHUB_AUTH_URL: &str = "https://github.com/login/oauth/authorize";
const GITHUB_TOKEN_URL: &str = "https://github.com/login/oauth/access_token";
const GITHUB_API_URL: &str = "https://api.github.com";

const DEFAULT_PORT: u16 = 8080;

/// Minimum length of `SESSION_SECRET`, the size of a cookie signing key.
pub const SESSION_SECRET_MIN_LEN: usize = 64;

/// Which resources require a logged in user for create/update/delete.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthPolicy {
    pub books: bool,
    pub authors: bool,
}

impl Default for AuthPolicy {
    fn default() -> Self {
        Self {
            books: true,
            authors: false,
        }
    }
}

pub struct Config {
    pub database_url: String,
    pub port: u16,

    /// Cookie signing secret; a random key is generated when absent.
    pub session_secret: Option<String>,

    pub github_client_id: String,
    pub github_client_secret: String,
    pub github_callback_url: String,

    pub github_auth_url: String,
    pub github_token_url: String,
    pub github_api_url: String,

    pub auth_policy: AuthPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable by name, `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and all values parseable
    /// - `Err(AppError::ConfigErr(MissingEnvVar))` - A required variable is unset
    /// - `Err(AppError::ConfigErr(InvalidEnvVar))` - A variable has an unusable value
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let optional = |name: &str, default: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let port = match lookup("PORT") {
            Some(value) => value.parse::<u16>().map_err(|e| ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let session_secret = lookup("SESSION_SECRET").filter(|value| !value.is_empty());
        if let Some(secret) = &session_secret {
            if secret.len() < SESSION_SECRET_MIN_LEN {
                return Err(ConfigError::InvalidEnvVar {
                    name: "SESSION_SECRET".to_string(),
                    reason: format!("must be at least {} bytes", SESSION_SECRET_MIN_LEN),
                }
                .into());
            }
        }

        let defaults = AuthPolicy::default();
        let auth_policy = AuthPolicy {
            books: parse_flag(&lookup, "REQUIRE_AUTH_FOR_BOOKS", defaults.books)?,
            authors: parse_flag(&lookup, "REQUIRE_AUTH_FOR_AUTHORS", defaults.authors)?,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            port,
            session_secret,
            github_client_id: required("GITHUB_CLIENT_ID")?,
            github_client_secret: required("GITHUB_CLIENT_SECRET")?,
            github_callback_url: required("GITHUB_CALLBACK_URL")?,
            github_auth_url: optional("GITHUB_AUTH_URL", GITHUB_AUTH_URL),
            github_token_url: optional("GITHUB_TOKEN_URL", GITHUB_TOKEN_URL),
            github_api_url: optional("GITHUB_API_URL", GITHUB_API_URL)
                .trim_end_matches('/')
                .to_string(),
            auth_policy,
        })
    }
}

#[cfg(test)]
impl Config {
    /// Placeholder GitHub credentials with every optional value at its default.
    pub(crate) fn for_tests() -> Self {
        Self::from_lookup(|name| {
            let value = match name {
                "DATABASE_URL" => "sqlite::memory:",
                "GITHUB_CLIENT_ID" => "client-id",
                "GITHUB_CLIENT_SECRET" => "client-secret",
                "GITHUB_CALLBACK_URL" => "http://localhost:8080/auth/github/callback",
                _ => return None,
            };
            Some(value.to_string())
        })
        .expect("test configuration is complete")
    }
}

fn parse_flag<F>(lookup: &F, name: &str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(name) else {
        return Ok(default);
    };

    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: format!("expected a boolean, got '{}'", value),
        }),
    }
}
