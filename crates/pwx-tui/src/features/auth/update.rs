//! Auth feature reducer.
//!
//! Key handling for the login screen plus processing of async auth results.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{AuthForm, AuthMode, AuthSlice};
use crate::effects::UiEffect;
use crate::events::AuthUiEvent;
use crate::state::{Screen, TuiState};
use crate::vault::VaultSlice;

/// Handles a key press on the login screen.
pub fn handle_login_key(tui: &mut TuiState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('r') if ctrl => {
            tui.auth.form.toggle_mode();
            vec![]
        }
        KeyCode::Tab | KeyCode::Down => {
            tui.auth.form.focus_next();
            vec![]
        }
        KeyCode::BackTab | KeyCode::Up => {
            tui.auth.form.focus_prev();
            vec![]
        }
        KeyCode::Backspace => {
            tui.auth.form.pop_char();
            vec![]
        }
        KeyCode::Esc => {
            tui.auth.error = None;
            vec![]
        }
        KeyCode::Enter => submit(tui),
        KeyCode::Char(c) if !ctrl => {
            tui.auth.form.push_char(c);
            vec![]
        }
        _ => vec![],
    }
}

/// Validates and submits the form.
///
/// Nothing is dispatched while a request is already in flight or when
/// validation fails; failed validation only sets inline field errors.
fn submit(tui: &mut TuiState) -> Vec<UiEffect> {
    if tui.auth.loading {
        return vec![];
    }
    if !tui.auth.form.validate() {
        return vec![];
    }

    tui.auth.loading = true;
    tui.auth.error = None;

    let username = tui.auth.form.username.trim().to_string();
    let password = tui.auth.form.password.clone();
    match tui.auth.form.mode {
        AuthMode::Login => vec![UiEffect::Login { username, password }],
        AuthMode::Register => vec![UiEffect::Register { username, password }],
    }
}

/// Applies an async auth result.
///
/// Success stores the session (already persisted by the handler), resets
/// the form, switches to the vault, and starts the initial fetch. Failure
/// stores the message on the container and stays on the login screen.
pub fn handle_auth_event(tui: &mut TuiState, event: AuthUiEvent) -> Vec<UiEffect> {
    let result = match event {
        AuthUiEvent::LoginFinished { result } | AuthUiEvent::RegisterFinished { result } => result,
    };

    tui.auth.loading = false;
    match result {
        Ok(session) => {
            tui.auth.session = Some(session);
            tui.auth.error = None;
            tui.auth.form = AuthForm::default();
            tui.screen = Screen::Vault;
            vec![tui.vault.start_fetch()]
        }
        Err(msg) => {
            tui.auth.session = None;
            tui.auth.error = Some(msg);
            vec![]
        }
    }
}

/// Logs out synchronously: clears the session, the form, and the vault,
/// and switches back to the login screen. The only effect removes the
/// session file; no request is issued.
pub fn logout(tui: &mut TuiState) -> Vec<UiEffect> {
    tui.auth = AuthSlice::default();
    tui.vault = VaultSlice::default();
    tui.screen = Screen::Login;
    vec![UiEffect::ClearSession]
}
