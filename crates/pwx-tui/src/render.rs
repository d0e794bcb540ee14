//! Pure view/render functions for the TUI.
//!
//! This module contains all rendering logic. Functions here:
//! - Take `&AppState` by immutable reference
//! - Draw to a ratatui Frame
//! - Never mutate state or return effects
//!
//! Screen routing lives here: the login form and the vault table are
//! mutually exclusive, and the active overlay always draws on top.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::features::{auth, vault};
use crate::overlays::OverlayExt;
use crate::state::{AppState, Screen, TuiState};

/// Height of the status line at the bottom of the screen.
pub(crate) const STATUS_HEIGHT: u16 = 1;

/// Spinner frames for progress animation.
pub(crate) const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Ticks per spinner frame.
pub(crate) const SPINNER_SPEED_DIVISOR: usize = 4;

/// Current spinner glyph for a tick counter.
pub(crate) fn spinner_glyph(spinner_frame: usize) -> &'static str {
    SPINNER_FRAMES[(spinner_frame / SPINNER_SPEED_DIVISOR) % SPINNER_FRAMES.len()]
}

/// Renders the entire TUI to the frame.
///
/// This is a pure render function - it only reads state and draws to frame.
/// No mutations, no side effects.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(STATUS_HEIGHT)])
        .split(area);

    match app.tui.screen {
        Screen::Login => auth::render_login(&app.tui, frame, chunks[0]),
        Screen::Vault => vault::render_vault(&app.tui, frame, chunks[0]),
    }

    render_status_line(&app.tui, frame, chunks[1]);

    // Render overlay (last, so it appears on top)
    app.overlay.render(frame, area, chunks[1].y);
}

/// Renders the key hint line at the bottom of the screen.
fn render_status_line(tui: &TuiState, frame: &mut Frame, area: Rect) {
    let hints: &[(&str, &str)] = match tui.screen {
        Screen::Login => &[("Enter", "отправить"), ("Tab", "поле"), ("Ctrl+C", "выход")],
        Screen::Vault => &[
            ("a", "добавить"),
            ("e", "изменить"),
            ("d", "удалить"),
            ("r", "обновить"),
            ("l", "выйти"),
            ("q", "выход"),
        ],
    };

    let mut spans = Vec::new();
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::DarkGray)));
        spans.push(Span::raw(format!(" {action}")));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
