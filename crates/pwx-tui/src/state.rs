//! Application state composition.
//!
//! This module defines the top-level state hierarchy for the TUI:
//! - `AppState` - combined state (`TuiState` + overlay)
//! - `TuiState` - non-overlay UI state (screen, auth slice, vault slice)
//!
//! ## State Hierarchy
//!
//! ```text
//! AppState
//! ├── tui: TuiState
//! │   ├── screen: Screen         (login or vault, reducer-controlled)
//! │   ├── auth: AuthSlice        (session, form, loading, error)
//! │   └── vault: VaultSlice      (entries, selection, loading, error)
//! └── overlay: Option<Overlay>   (modal dialogs, vault screen only)
//! ```
//!
//! ## Split State Architecture
//!
//! State is split between `TuiState` (non-overlay) and `Option<Overlay>`:
//! overlay handlers get `&mut self` and `&TuiState` simultaneously without
//! borrow conflicts.

use pwx_core::session::Session;

use crate::auth::AuthSlice;
use crate::effects::UiEffect;
use crate::overlays::Overlay;
use crate::vault::VaultSlice;

/// Current screen. Transitions happen only in the reducer: a successful
/// login or registration moves to `Vault`, logout moves back to `Login`.
/// Rendering and key routing both dispatch on this, so an unauthenticated
/// app can never show or operate the vault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Vault,
}

/// Combined application state for the TUI.
pub struct AppState {
    pub tui: TuiState,
    pub overlay: Option<Overlay>,
}

impl AppState {
    /// Creates the initial state from the resolved server URL and the
    /// session rehydrated from disk (read once, before the TUI starts).
    ///
    /// Returns startup effects: an authenticated boot goes straight to the
    /// vault with the initial fetch already in flight.
    pub fn new(base_url: String, session: Option<Session>) -> (Self, Vec<UiEffect>) {
        let mut tui = TuiState {
            should_quit: false,
            screen: Screen::Login,
            base_url,
            auth: AuthSlice::new(session),
            vault: VaultSlice::default(),
            spinner_frame: 0,
        };

        let mut effects = Vec::new();
        if tui.auth.is_authenticated() {
            tui.screen = Screen::Vault;
            effects.push(tui.vault.start_fetch());
        }

        (Self { tui, overlay: None }, effects)
    }
}

/// TUI application state (non-overlay).
pub struct TuiState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// Current screen (routing flag).
    pub screen: Screen,
    /// Resolved service base URL, fixed for the app lifetime.
    pub base_url: String,
    /// Authentication state (session, form, in-flight login).
    pub auth: AuthSlice,
    /// Credential list state (entries, selection, in-flight requests).
    pub vault: VaultSlice,
    /// Spinner animation frame counter.
    pub spinner_frame: usize,
}

/// Session fixture shared by reducer and overlay tests.
#[cfg(test)]
pub(crate) fn sample_session() -> Session {
    use pwx_core::session::ApiUser;

    Session {
        token: "tok".to_string(),
        user: ApiUser {
            id: 1,
            username: "alice".to_string(),
        },
    }
}

/// Authenticated app on the vault screen with the boot fetch settled.
#[cfg(test)]
pub(crate) fn authed_app() -> AppState {
    let (mut app, _) =
        AppState::new("http://localhost:3000".to_string(), Some(sample_session()));
    app.tui.vault.loading = false;
    app
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Without a persisted session the app boots onto the login screen
    /// with no startup effects.
    #[test]
    fn test_boot_unauthenticated() {
        let (app, effects) = AppState::new("http://localhost:3000".to_string(), None);

        assert_eq!(app.tui.screen, Screen::Login);
        assert!(!app.tui.auth.is_authenticated());
        assert!(effects.is_empty());
    }

    /// A rehydrated session boots straight into the vault with the initial
    /// fetch in flight.
    #[test]
    fn test_boot_with_session_starts_fetch() {
        let (app, effects) =
            AppState::new("http://localhost:3000".to_string(), Some(sample_session()));

        assert_eq!(app.tui.screen, Screen::Vault);
        assert!(app.tui.auth.is_authenticated());
        assert!(app.tui.vault.loading);
        assert_eq!(effects.len(), 1);
        assert!(matches!(effects[0], UiEffect::FetchEntries));
    }
}
