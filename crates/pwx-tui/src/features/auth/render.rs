//! Login screen rendering.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::state::{AuthField, AuthMode};
use crate::overlays::render_utils::{
    FieldLine, InputHint, OverlayConfig, render_field_line, render_overlay,
};
use crate::render::spinner_glyph;
use crate::state::TuiState;

const FORM_WIDTH: u16 = 46;

/// Renders the combined login/register form, centered in `area`.
pub fn render_login(tui: &TuiState, frame: &mut Frame, area: Rect) {
    let form = &tui.auth.form;

    let (title, toggle, height) = match form.mode {
        AuthMode::Login => ("Вход", "Нет аккаунта? Зарегистрироваться", 9),
        AuthMode::Register => ("Регистрация", "Уже есть аккаунт? Войти", 11),
    };

    let hints = [InputHint::new("Ctrl+R", toggle)];
    let layout = render_overlay(
        frame,
        area,
        area.height,
        &OverlayConfig {
            title,
            border_color: Color::Cyan,
            width: FORM_WIDTH,
            height,
            hints: &hints,
        },
    );
    let body = layout.body;

    render_status_row(tui, frame, row(body, 0));

    render_field_line(
        frame,
        row(body, 2),
        &FieldLine {
            label: "Имя пользователя",
            value: &form.username,
            masked: false,
            focused: form.focus == AuthField::Username,
        },
    );
    render_error_row(frame, row(body, 3), form.username_error);

    render_field_line(
        frame,
        row(body, 4),
        &FieldLine {
            label: "Пароль",
            value: &form.password,
            masked: true,
            focused: form.focus == AuthField::Password,
        },
    );
    render_error_row(frame, row(body, 5), form.password_error);

    if form.mode == AuthMode::Register {
        render_field_line(
            frame,
            row(body, 6),
            &FieldLine {
                label: "Подтвердите пароль",
                value: &form.confirm,
                masked: true,
                focused: form.focus == AuthField::Confirm,
            },
        );
        render_error_row(frame, row(body, 7), form.confirm_error);
    }
}

/// One-row rect at the given offset inside `body`; zero-height when the
/// offset falls outside so small terminals clip instead of overflowing.
fn row(body: Rect, offset: u16) -> Rect {
    Rect::new(
        body.x,
        body.y + offset,
        body.width,
        u16::from(offset < body.height),
    )
}

/// Top row of the form: request progress or the server error banner.
fn render_status_row(tui: &TuiState, frame: &mut Frame, area: Rect) {
    let auth = &tui.auth;
    let line = if auth.loading {
        Line::from(vec![
            Span::styled(
                spinner_glyph(tui.spinner_frame),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(" "),
            Span::styled("Загрузка...", Style::default().fg(Color::Yellow)),
        ])
    } else if let Some(error) = &auth.error {
        Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        ))
    } else {
        Line::default()
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_error_row(frame: &mut Frame, area: Rect, error: Option<&'static str>) {
    if let Some(error) = error {
        frame.render_widget(
            Paragraph::new(Span::styled(error, Style::default().fg(Color::Red))),
            area,
        );
    }
}
