//! Error taxonomy for service calls.

use std::fmt;

/// Fallback messages shown when the server gives no `detail`.
///
/// These are product strings (the service is a Russian-language product);
/// each API operation owns one.
pub mod fallback {
    pub const LOGIN: &str = "Ошибка авторизации";
    pub const REGISTER: &str = "Ошибка регистрации";
    pub const FETCH: &str = "Ошибка загрузки паролей";
    pub const SAVE: &str = "Ошибка сохранения пароля";
    pub const DELETE: &str = "Ошибка удаления пароля";
    pub const NETWORK: &str = "Ошибка сети";
}

/// Error from a password keeper service call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered with a non-success status.
    /// `detail` is the body's `detail` field when it carries a string.
    Status { status: u16, detail: Option<String> },
    /// The request produced no server response (connect, send, decode).
    Network(String),
}

impl ApiError {
    /// Maps the error to the single string a state container stores.
    ///
    /// Server-provided `detail` wins; a bare status falls back to the
    /// operation's message; transport failures map to the generic network
    /// message (the raw transport text stays available through `Display`).
    pub fn user_message(&self, op_fallback: &str) -> String {
        match self {
            ApiError::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            ApiError::Status { .. } => op_fallback.to_string(),
            ApiError::Network(_) => fallback::NETWORK.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Status {
                status,
                detail: Some(detail),
            } => write!(f, "HTTP {status}: {detail}"),
            ApiError::Status {
                status,
                detail: None,
            } => write!(f, "HTTP {status}"),
            ApiError::Network(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    /// Send and decode failures both land here; only a received non-2xx
    /// status becomes `Status`.
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}
