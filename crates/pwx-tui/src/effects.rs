//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O only (HTTP requests, session file removal).
//!
//! This keeps the reducer pure: it only mutates state and returns effects,
//! never performs I/O or spawns tasks directly.

use pwx_core::api::{EntryDraft, EntryPatch};

/// Effects returned by the reducer for the runtime to execute.
///
/// Each request effect has a matching result event in [`crate::events`];
/// the runtime spawns the request and the result arrives through the inbox.
#[derive(Debug)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// POST the login form. The handler persists the session on success.
    Login { username: String, password: String },

    /// POST a registration. The handler persists the session on success.
    Register { username: String, password: String },

    /// Remove the persisted session file. Logout itself already happened
    /// synchronously in the reducer; no network call is involved.
    ClearSession,

    /// GET the full entry list with the current bearer token.
    FetchEntries,

    /// POST a new entry.
    AddEntry { draft: EntryDraft },

    /// PUT the changed fields of an existing entry.
    UpdateEntry { id: i64, patch: EntryPatch },

    /// DELETE an entry by id.
    DeleteEntry { id: i64 },
}
