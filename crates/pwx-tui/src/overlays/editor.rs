//! Add/edit entry dialog.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pwx_core::api::{EntryDraft, EntryPatch, PasswordEntry};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Color;

use super::OverlayUpdate;
use super::render_utils::{FieldLine, InputHint, OverlayConfig, render_field_line, render_overlay};
use crate::effects::UiEffect;
use crate::state::TuiState;

/// Focusable fields of the editor dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorField {
    Host,
    Login,
    Password,
}

impl EditorField {
    fn next(self) -> Self {
        match self {
            EditorField::Host => EditorField::Login,
            EditorField::Login => EditorField::Password,
            EditorField::Password => EditorField::Host,
        }
    }

    fn prev(self) -> Self {
        match self {
            EditorField::Host => EditorField::Password,
            EditorField::Login => EditorField::Host,
            EditorField::Password => EditorField::Login,
        }
    }
}

/// State for the add/edit dialog.
///
/// `seed` distinguishes the two modes: edit remembers the original entry so
/// submit can send only the fields that actually changed.
#[derive(Debug, Clone)]
pub struct EditorState {
    pub host: String,
    pub login: String,
    pub password: String,
    pub focus: EditorField,
    pub seed: Option<PasswordEntry>,
}

impl EditorState {
    /// Opens the dialog, prefilled from the selected entry in edit mode.
    pub fn open(seed: Option<PasswordEntry>) -> (Self, Vec<UiEffect>) {
        let (host, login, password) = match &seed {
            Some(entry) => (
                entry.host.clone(),
                entry.login.clone(),
                entry.hash_pass.clone(),
            ),
            None => (String::new(), String::new(), String::new()),
        };
        (
            Self {
                host,
                login,
                password,
                focus: EditorField::Host,
                seed,
            },
            vec![],
        )
    }

    pub fn handle_key(&mut self, tui: &TuiState, key: KeyEvent) -> OverlayUpdate {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => OverlayUpdate::close(),
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
                OverlayUpdate::stay()
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.prev();
                OverlayUpdate::stay()
            }
            KeyCode::Backspace => {
                self.field_mut().pop();
                OverlayUpdate::stay()
            }
            KeyCode::Enter => self.submit(tui),
            KeyCode::Char(c) if !ctrl => {
                self.field_mut().push(c);
                OverlayUpdate::stay()
            }
            _ => OverlayUpdate::stay(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, status_y: u16) {
        let title = if self.seed.is_some() {
            "Редактировать пароль"
        } else {
            "Новый пароль"
        };
        let hints = [
            InputHint::new("Tab", "поле"),
            InputHint::new("Enter", "сохранить"),
            InputHint::new("Esc", "отмена"),
        ];
        let layout = render_overlay(
            frame,
            area,
            status_y,
            &OverlayConfig {
                title,
                border_color: Color::Yellow,
                width: 50,
                height: 7,
                hints: &hints,
            },
        );

        let fields = [
            ("Сайт", &self.host, EditorField::Host),
            ("Логин", &self.login, EditorField::Login),
            ("Пароль", &self.password, EditorField::Password),
        ];
        for (i, (label, value, field)) in fields.into_iter().enumerate() {
            let i = i as u16;
            let row = Rect::new(
                layout.body.x,
                layout.body.y + i,
                layout.body.width,
                u16::from(i < layout.body.height),
            );
            render_field_line(
                frame,
                row,
                &FieldLine {
                    label,
                    value,
                    masked: false,
                    focused: self.focus == field,
                },
            );
        }
    }

    fn field_mut(&mut self) -> &mut String {
        match self.focus {
            EditorField::Host => &mut self.host,
            EditorField::Login => &mut self.login,
            EditorField::Password => &mut self.password,
        }
    }

    /// Submits the dialog. Add mode always sends the full draft; edit mode
    /// diffs against the seed and closes without dispatching when nothing
    /// changed. No dispatch while a vault request is in flight.
    fn submit(&self, tui: &TuiState) -> OverlayUpdate {
        if tui.vault.loading {
            return OverlayUpdate::stay();
        }

        match &self.seed {
            None => OverlayUpdate::close().with_effects(vec![UiEffect::AddEntry {
                draft: EntryDraft {
                    host: self.host.clone(),
                    login: self.login.clone(),
                    hash_pass: self.password.clone(),
                },
            }]),
            Some(seed) => {
                let patch = self.diff(seed);
                if patch.is_empty() {
                    OverlayUpdate::close()
                } else {
                    OverlayUpdate::close().with_effects(vec![UiEffect::UpdateEntry {
                        id: seed.id,
                        patch,
                    }])
                }
            }
        }
    }

    /// Patch of only the fields that differ from the seed entry.
    fn diff(&self, seed: &PasswordEntry) -> EntryPatch {
        let mut patch = EntryPatch::default();
        if self.host != seed.host {
            patch.host = Some(self.host.clone());
        }
        if self.login != seed.login {
            patch.login = Some(self.login.clone());
        }
        if self.password != seed.hash_pass {
            patch.hash_pass = Some(self.password.clone());
        }
        patch
    }
}
