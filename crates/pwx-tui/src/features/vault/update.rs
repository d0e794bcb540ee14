//! Vault feature reducer.
//!
//! Key handling for the password list plus processing of async vault
//! results. Overlay opening is signalled to the caller through
//! `OverlayRequest`; the overlay slot itself lives on `AppState`.

use crossterm::event::{KeyCode, KeyEvent};

use crate::effects::UiEffect;
use crate::events::VaultUiEvent;
use crate::features::auth;
use crate::overlays::OverlayRequest;
use crate::state::TuiState;

/// Handles a key press on the vault screen.
pub fn handle_vault_key(
    tui: &mut TuiState,
    key: KeyEvent,
) -> (Vec<UiEffect>, Option<OverlayRequest>) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            tui.vault.select_prev();
            (vec![], None)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            tui.vault.select_next();
            (vec![], None)
        }
        KeyCode::Char('r') if !tui.vault.loading => {
            let effect = tui.vault.start_fetch();
            (vec![effect], None)
        }
        KeyCode::Char('a') if !tui.vault.loading => {
            (vec![], Some(OverlayRequest::Editor { seed: None }))
        }
        KeyCode::Char('e') | KeyCode::Enter if !tui.vault.loading => {
            let request = tui
                .vault
                .selected_entry()
                .cloned()
                .map(|entry| OverlayRequest::Editor { seed: Some(entry) });
            (vec![], request)
        }
        KeyCode::Char('d') if !tui.vault.loading => {
            let request = tui
                .vault
                .selected_entry()
                .cloned()
                .map(|entry| OverlayRequest::ConfirmDelete { entry });
            (vec![], request)
        }
        KeyCode::Char('l') => (auth::logout(tui), None),
        KeyCode::Char('q') => (vec![UiEffect::Quit], None),
        KeyCode::Esc => {
            tui.vault.error = None;
            (vec![], None)
        }
        _ => (vec![], None),
    }
}

/// Applies an async vault result to the container.
pub fn handle_vault_event(tui: &mut TuiState, event: VaultUiEvent) -> Vec<UiEffect> {
    match event {
        VaultUiEvent::FetchFinished { result } => tui.vault.apply_fetch(result),
        VaultUiEvent::AddFinished { result } => tui.vault.apply_add(result),
        VaultUiEvent::UpdateFinished { result } => tui.vault.apply_update(result),
        VaultUiEvent::DeleteFinished { result } => tui.vault.apply_delete(result),
    }
    vec![]
}
