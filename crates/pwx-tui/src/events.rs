//! UI event types.
//!
//! Events are the reducer's only input. Terminal input and async request
//! results all arrive as `UiEvent` values and are applied in arrival order.

use pwx_core::api::PasswordEntry;
use pwx_core::session::Session;

/// Events processed by the reducer.
#[derive(Debug)]
pub enum UiEvent {
    /// Animation heartbeat. The only event that triggers a render.
    Tick,
    /// Emitted once per loop iteration with the current terminal size,
    /// before other events, for layout bookkeeping.
    Frame { width: u16, height: u16 },
    /// Raw terminal input.
    Terminal(crossterm::event::Event),
    /// Async auth results.
    Auth(AuthUiEvent),
    /// Async vault results.
    Vault(VaultUiEvent),
}

/// Results of auth requests. `Err` carries the user-facing message the
/// container stores (handlers already applied the fallback mapping).
#[derive(Debug)]
pub enum AuthUiEvent {
    /// Login finished. On success the session file has already been
    /// written by the handler.
    LoginFinished { result: Result<Session, String> },
    /// Registration finished. Same contract as login.
    RegisterFinished { result: Result<Session, String> },
}

/// Results of vault requests.
#[derive(Debug)]
pub enum VaultUiEvent {
    /// Fetch-all finished. `Ok` carries the server's array verbatim.
    FetchFinished {
        result: Result<Vec<PasswordEntry>, String>,
    },
    /// Add finished. `Ok` carries the server's canonical new entry.
    AddFinished {
        result: Result<PasswordEntry, String>,
    },
    /// Update finished. `Ok` carries the server's updated entry.
    UpdateFinished {
        result: Result<PasswordEntry, String>,
    },
    /// Delete finished. `Ok` carries the id the client asked to delete
    /// (the response body is ignored).
    DeleteFinished { result: Result<i64, String> },
}
