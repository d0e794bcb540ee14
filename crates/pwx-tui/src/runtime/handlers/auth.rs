//! Auth effect handlers.

use pwx_core::api::{ApiClient, fallback};
use pwx_core::session::{self, Session};

use crate::events::{AuthUiEvent, UiEvent};

/// Logs in and persists the session on success.
///
/// Pure async function - runtime spawns and sends result to inbox.
pub async fn login(base_url: String, username: String, password: String) -> UiEvent {
    let client = ApiClient::new(base_url);
    let result = match client.login(&username, &password).await {
        Ok(session) => {
            persist_session(&session);
            Ok(session)
        }
        Err(err) => {
            tracing::warn!(error = %err, "login request failed");
            Err(err.user_message(fallback::LOGIN))
        }
    };
    UiEvent::Auth(AuthUiEvent::LoginFinished { result })
}

/// Registers a new account and persists the session on success.
///
/// Pure async function - runtime spawns and sends result to inbox.
pub async fn register(base_url: String, username: String, password: String) -> UiEvent {
    let client = ApiClient::new(base_url);
    let result = match client.register(&username, &password).await {
        Ok(session) => {
            persist_session(&session);
            Ok(session)
        }
        Err(err) => {
            tracing::warn!(error = %err, "register request failed");
            Err(err.user_message(fallback::REGISTER))
        }
    };
    UiEvent::Auth(AuthUiEvent::RegisterFinished { result })
}

/// Removes the persisted session file. Logout itself already happened in the
/// reducer; a failure here only means the file survives until the next login
/// overwrites it.
pub fn clear_session() {
    if let Err(err) = session::clear() {
        tracing::warn!(error = %err, "failed to remove session file");
    }
}

/// The in-memory session wins over the file: a persist failure is logged,
/// not surfaced, and the login still succeeds for this run.
fn persist_session(session: &Session) {
    if let Err(err) = session::save(session) {
        tracing::warn!(error = %err, "failed to persist session");
    }
}
