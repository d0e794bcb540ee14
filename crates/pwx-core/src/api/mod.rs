//! HTTP client for the password keeper service.
//!
//! The service owns the data; this module only speaks its wire contract:
//! `/auth` for login and registration, `/user-pass` for credential CRUD.
//! Errors are split into [`ApiError::Status`] (the server answered) and
//! [`ApiError::Network`] (it did not).

mod auth;
mod error;
mod vault;

pub use error::{ApiError, fallback};
pub use vault::{EntryDraft, EntryPatch, PasswordEntry};

use anyhow::{Context, Result};
use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::config::Config;

/// Standard User-Agent header for pwx API requests.
pub const USER_AGENT: &str = concat!("pwx/", env!("CARGO_PKG_VERSION"));

/// Environment variable overriding the configured server URL.
pub const SERVER_URL_ENV: &str = "PWX_SERVER_URL";

/// Where the self-hosted service listens out of the box.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Result type for service calls.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Resolves the service base URL with precedence: env > config > default.
///
/// The resolved value must parse as a URL; a trailing slash is trimmed so
/// request paths can always start with one.
///
/// # Errors
/// Returns an error if the env or config value is not a valid URL.
pub fn resolve_base_url(config: &Config) -> Result<String> {
    // Try env var first
    if let Ok(env_url) = std::env::var(SERVER_URL_ENV) {
        let trimmed = env_url.trim();
        if !trimmed.is_empty() {
            validate_url(trimmed)?;
            return Ok(trimmed.trim_end_matches('/').to_string());
        }
    }

    // Try config value
    if let Some(config_url) = config.server.effective_url() {
        validate_url(config_url)?;
        return Ok(config_url.trim_end_matches('/').to_string());
    }

    // Default
    Ok(DEFAULT_BASE_URL.to_string())
}

/// Validates that a URL is well-formed.
///
/// # Errors
/// Returns an error if the value does not parse as a URL.
pub fn validate_url(url: &str) -> Result<()> {
    url::Url::parse(url).with_context(|| format!("Invalid server URL: {url}"))?;
    Ok(())
}

/// Client for the password keeper service.
///
/// Holds the resolved base URL and, once authenticated, the bearer token
/// attached to every credential request.
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
    http: reqwest::Client,
}

impl ApiClient {
    /// Creates an unauthenticated client (login/register only).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            http: reqwest::Client::new(),
        }
    }

    /// Creates a client that attaches `Authorization: Bearer <token>`
    /// to every request.
    pub fn with_token(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: Some(token.into()),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let mut builder = self
            .http
            .request(method, self.url(path))
            .header("user-agent", USER_AGENT);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        builder
    }
}

/// Decodes a success body, or turns a non-2xx response into a status error.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
    if !response.status().is_success() {
        return Err(status_error(response).await);
    }
    Ok(response.json::<T>().await?)
}

/// Builds a status error, pulling `detail` out of the body when present.
async fn status_error(response: reqwest::Response) -> ApiError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    ApiError::Status {
        status,
        detail: extract_detail(&body),
    }
}

/// Extracts the `detail` string from an error body.
///
/// The service reports validation problems as structured arrays under the
/// same key; those are not a single displayable string and yield `None`.
fn extract_detail(body: &str) -> Option<String> {
    let json: serde_json::Value = serde_json::from_str(body).ok()?;
    json.get("detail")?.as_str().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;

    /// A string `detail` field is extracted from the error body.
    #[test]
    fn test_extract_detail_string() {
        let body = r#"{"detail": "Неверный логин или пароль"}"#;

        assert_eq!(
            extract_detail(body),
            Some("Неверный логин или пароль".to_string())
        );
    }

    /// A body without `detail` yields nothing.
    #[test]
    fn test_extract_detail_missing() {
        assert_eq!(extract_detail(r#"{"message": "oops"}"#), None);
    }

    /// A non-JSON body yields nothing.
    #[test]
    fn test_extract_detail_not_json() {
        assert_eq!(extract_detail("Internal Server Error"), None);
    }

    /// A structured `detail` array (validation errors) is not a displayable
    /// string and yields nothing.
    #[test]
    fn test_extract_detail_array() {
        let body = r#"{"detail": [{"loc": ["body", "login"], "msg": "field required"}]}"#;

        assert_eq!(extract_detail(body), None);
    }

    /// A configured URL wins over the default, with the trailing slash
    /// trimmed.
    #[test]
    fn test_resolve_base_url_from_config() {
        let config = Config {
            server: ServerConfig {
                url: Some("https://pass.example.com/".to_string()),
            },
        };

        assert_eq!(
            resolve_base_url(&config).unwrap(),
            "https://pass.example.com"
        );
    }

    /// An empty config falls back to the default base URL.
    #[test]
    fn test_resolve_base_url_default() {
        let config = Config::default();

        assert_eq!(resolve_base_url(&config).unwrap(), DEFAULT_BASE_URL);
    }

    /// A malformed configured URL is rejected.
    #[test]
    fn test_resolve_base_url_rejects_invalid() {
        let config = Config {
            server: ServerConfig {
                url: Some("not a url".to_string()),
            },
        };

        assert!(resolve_base_url(&config).is_err());
    }
}
