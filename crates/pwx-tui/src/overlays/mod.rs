//! Overlay modules for the TUI.
//!
//! Overlays are modal dialogs that temporarily take over keyboard input.
//! Each overlay is self-contained: it owns its state, key handler, and
//! render function.
//!
//! ## Module Structure
//!
//! - `editor.rs`: Add/edit entry dialog
//! - `confirm_delete.rs`: Delete confirmation dialog
//! - `render_utils.rs`: Shared rendering utilities for overlays and forms
//!
//! ## Extension Trait
//!
//! `OverlayExt` provides convenience methods for `Option<Overlay>` to
//! encapsulate the common patterns used in the reducer.

pub mod confirm_delete;
pub mod editor;
pub mod render_utils;

pub use confirm_delete::ConfirmDeleteState;
use crossterm::event::KeyEvent;
pub use editor::{EditorField, EditorState};
use pwx_core::api::PasswordEntry;
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::effects::UiEffect;
use crate::state::TuiState;

/// Requests to open a new overlay.
#[derive(Debug)]
pub enum OverlayRequest {
    Editor { seed: Option<PasswordEntry> },
    ConfirmDelete { entry: PasswordEntry },
}

/// Transition returned by overlay key handlers.
#[derive(Debug)]
pub enum OverlayTransition {
    Stay,
    Close,
}

/// Update returned by overlay key handlers.
#[derive(Debug)]
pub struct OverlayUpdate {
    pub transition: OverlayTransition,
    pub effects: Vec<UiEffect>,
}

impl OverlayUpdate {
    fn new(transition: OverlayTransition) -> Self {
        Self {
            transition,
            effects: Vec::new(),
        }
    }

    pub fn stay() -> Self {
        Self::new(OverlayTransition::Stay)
    }

    pub fn close() -> Self {
        Self::new(OverlayTransition::Close)
    }

    #[must_use]
    pub fn with_effects(mut self, effects: Vec<UiEffect>) -> Self {
        self.effects = effects;
        self
    }
}

#[derive(Debug)]
pub enum Overlay {
    Editor(EditorState),
    ConfirmDelete(ConfirmDeleteState),
}

impl Overlay {
    pub fn render(&self, frame: &mut Frame, area: Rect, status_y: u16) {
        match self {
            Overlay::Editor(e) => e.render(frame, area, status_y),
            Overlay::ConfirmDelete(d) => d.render(frame, area, status_y),
        }
    }

    pub fn handle_key(&mut self, tui: &TuiState, key: KeyEvent) -> OverlayUpdate {
        match self {
            Overlay::Editor(e) => e.handle_key(tui, key),
            Overlay::ConfirmDelete(d) => d.handle_key(tui, key),
        }
    }
}

/// Routes a key press to the active overlay; `None` when no overlay is open.
pub fn handle_overlay_key(
    tui: &TuiState,
    overlay: &mut Option<Overlay>,
    key: KeyEvent,
) -> Option<OverlayUpdate> {
    overlay.as_mut().map(|overlay| overlay.handle_key(tui, key))
}

// ============================================================================
// OverlayExt - Extension trait for Option<Overlay>
// ============================================================================

/// Extension trait for `Option<Overlay>` providing convenience render helpers.
pub trait OverlayExt {
    /// Renders the overlay if one is active.
    fn render(&self, frame: &mut Frame, area: Rect, status_y: u16);
}

impl OverlayExt for Option<Overlay> {
    fn render(&self, frame: &mut Frame, area: Rect, status_y: u16) {
        if let Some(overlay) = self {
            overlay.render(frame, area, status_y);
        }
    }
}
