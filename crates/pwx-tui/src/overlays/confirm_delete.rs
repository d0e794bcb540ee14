//! Delete confirmation dialog.

use crossterm::event::{KeyCode, KeyEvent};
use pwx_core::api::PasswordEntry;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use super::OverlayUpdate;
use super::render_utils::{InputHint, OverlayConfig, render_overlay};
use crate::effects::UiEffect;
use crate::state::TuiState;

/// State for the delete confirmation dialog.
#[derive(Debug, Clone)]
pub struct ConfirmDeleteState {
    pub entry: PasswordEntry,
}

impl ConfirmDeleteState {
    pub fn open(entry: PasswordEntry) -> (Self, Vec<UiEffect>) {
        (Self { entry }, vec![])
    }

    pub fn handle_key(&mut self, tui: &TuiState, key: KeyEvent) -> OverlayUpdate {
        match key.code {
            KeyCode::Esc | KeyCode::Char('n') => OverlayUpdate::close(),
            KeyCode::Enter | KeyCode::Char('y') => {
                if tui.vault.loading {
                    OverlayUpdate::stay()
                } else {
                    OverlayUpdate::close().with_effects(vec![UiEffect::DeleteEntry {
                        id: self.entry.id,
                    }])
                }
            }
            _ => OverlayUpdate::stay(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, status_y: u16) {
        let hints = [
            InputHint::new("Enter", "удалить"),
            InputHint::new("Esc", "отмена"),
        ];
        let layout = render_overlay(
            frame,
            area,
            status_y,
            &OverlayConfig {
                title: "Подтвердите удаление",
                border_color: Color::Red,
                width: 54,
                height: 7,
                hints: &hints,
            },
        );

        let question = Line::from(vec![
            Span::raw("Вы действительно хотите удалить пароль для сайта "),
            Span::styled(
                self.entry.host.as_str(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw("?"),
        ]);
        frame.render_widget(
            Paragraph::new(question).wrap(Wrap { trim: true }),
            layout.body,
        );
    }
}
