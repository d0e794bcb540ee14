//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.
//!
//! This is the single source of truth for how events modify state.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::{auth, vault};
use crate::overlays::{self, Overlay, OverlayRequest};
use crate::render;
use crate::state::{AppState, Screen, TuiState};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            // Advance spinner animation
            app.tui.spinner_frame = app.tui.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Frame { width: _, height } => {
            handle_frame(&mut app.tui, height);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::Auth(auth_event) => auth::handle_auth_event(&mut app.tui, auth_event),
        UiEvent::Vault(vault_event) => vault::handle_vault_event(&mut app.tui, vault_event),
    }
}

/// Per-frame housekeeping: keeps the vault scroll window in sync with the
/// current terminal height.
fn handle_frame(tui: &mut TuiState, height: u16) {
    let body_height = height.saturating_sub(render::STATUS_HEIGHT);
    tui.vault.ensure_visible(vault::table_rows(body_height));
}

// ============================================================================
// Terminal Event Handlers
// ============================================================================

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) => handle_key(app, key),
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    // Windows terminals deliver both press and release events.
    if key.kind == KeyEventKind::Release {
        return vec![];
    }

    // Ctrl+C quits from anywhere, overlays included.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return vec![UiEffect::Quit];
    }

    // An active overlay owns the keyboard.
    if let Some(update) = overlays::handle_overlay_key(&app.tui, &mut app.overlay, key) {
        return apply_overlay_update(app, update);
    }

    match app.tui.screen {
        Screen::Login => auth::handle_login_key(&mut app.tui, key),
        Screen::Vault => {
            let (mut effects, request) = vault::handle_vault_key(&mut app.tui, key);
            if let Some(request) = request
                && app.overlay.is_none()
            {
                effects.extend(open_overlay_request(app, request));
            }
            effects
        }
    }
}

// ============================================================================
// Overlay Dispatch
// ============================================================================

fn apply_overlay_update(app: &mut AppState, update: overlays::OverlayUpdate) -> Vec<UiEffect> {
    // A dispatched mutation flips the vault into its in-flight state here,
    // so the rule lives in one place rather than in every overlay.
    for effect in &update.effects {
        if matches!(
            effect,
            UiEffect::AddEntry { .. } | UiEffect::UpdateEntry { .. } | UiEffect::DeleteEntry { .. }
        ) {
            app.tui.vault.start_operation();
        }
    }

    match update.transition {
        overlays::OverlayTransition::Stay => {}
        overlays::OverlayTransition::Close => app.overlay = None,
    }
    update.effects
}

fn open_overlay_request(app: &mut AppState, request: OverlayRequest) -> Vec<UiEffect> {
    match request {
        OverlayRequest::Editor { seed } => {
            let (state, effects) = overlays::EditorState::open(seed);
            app.overlay = Some(Overlay::Editor(state));
            effects
        }
        OverlayRequest::ConfirmDelete { entry } => {
            let (state, effects) = overlays::ConfirmDeleteState::open(entry);
            app.overlay = Some(Overlay::ConfirmDelete(state));
            effects
        }
    }
}
