//! Vault screen rendering.
//!
//! Draws the password table with manual scroll slicing so the render path
//! stays a pure function of the state.

use pwx_core::api::PasswordEntry;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::overlays::render_utils::{render_separator, truncate_end};
use crate::render::spinner_glyph;
use crate::state::TuiState;

/// Rows of the vault body that are not entry rows (title, header, separator).
const CHROME_ROWS: u16 = 3;

/// Number of entry rows that fit in a vault body of `height` lines.
pub(crate) fn table_rows(height: u16) -> usize {
    height.saturating_sub(CHROME_ROWS) as usize
}

/// Renders the password table with its placeholder states. Placeholders
/// take the place of the list: loading wins over error, error over the
/// empty message.
pub fn render_vault(tui: &TuiState, frame: &mut Frame, area: Rect) {
    render_title(tui, frame, row(area, 0));

    let content = Rect::new(
        area.x,
        area.y + 1,
        area.width,
        area.height.saturating_sub(1),
    );

    if tui.vault.loading {
        let line = Line::from(vec![
            Span::styled(
                spinner_glyph(tui.spinner_frame),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(" "),
            Span::styled("Загрузка...", Style::default().fg(Color::Yellow)),
        ]);
        render_placeholder(frame, content, line);
        return;
    }

    if let Some(error) = &tui.vault.error {
        render_placeholder(
            frame,
            content,
            Line::from(Span::styled(
                error.as_str(),
                Style::default().fg(Color::Red),
            )),
        );
        let hint = Line::from(vec![
            Span::styled("Esc", Style::default().fg(Color::Cyan)),
            Span::styled(" скрыть", Style::default().fg(Color::DarkGray)),
        ]);
        let hint_area = Rect::new(
            content.x,
            content.y + content.height / 2 + 1,
            content.width,
            u16::from(content.height / 2 + 1 < content.height),
        );
        frame.render_widget(Paragraph::new(hint).alignment(Alignment::Center), hint_area);
        return;
    }

    if tui.vault.entries.is_empty() {
        render_placeholder(frame, content, Line::from("Пароли не найдены"));
        return;
    }

    render_header(frame, row(area, 1));
    render_separator(frame, area, 2);

    let rows = table_rows(area.height);
    let end = (tui.vault.offset + rows).min(tui.vault.entries.len());
    for (i, entry) in tui.vault.entries[tui.vault.offset..end].iter().enumerate() {
        let selected = tui.vault.offset + i == tui.vault.selected;
        render_entry_row(entry, selected, frame, row(area, CHROME_ROWS + i as u16));
    }
}

/// Screen title with the logged-in username right-aligned.
fn render_title(tui: &TuiState, frame: &mut Frame, area: Rect) {
    frame.render_widget(
        Paragraph::new(Span::styled(
            "Ваши пароли",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        area,
    );

    if let Some(session) = &tui.auth.session {
        frame.render_widget(
            Paragraph::new(Span::styled(
                session.user.username.as_str(),
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(Alignment::Right),
            area,
        );
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let cols = columns(area);
    let style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::BOLD);
    for (i, title) in ["Сайт", "Логин", "Пароль", "Утечка"].iter().enumerate() {
        frame.render_widget(Paragraph::new(Span::styled(*title, style)), cols[i]);
    }
}

fn render_entry_row(entry: &PasswordEntry, selected: bool, frame: &mut Frame, area: Rect) {
    let cols = columns(area);
    let style = if selected {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let cells = [
        entry.host.as_str(),
        entry.login.as_str(),
        entry.hash_pass.as_str(),
    ];
    for (i, text) in cells.iter().enumerate() {
        let display = truncate_end(text, cols[i].width.saturating_sub(1) as usize);
        frame.render_widget(Paragraph::new(Span::styled(display, style)), cols[i]);
    }

    let leak = if entry.is_leaked {
        Span::styled("⚠ утечка", Style::default().fg(Color::Red))
    } else {
        Span::styled("-", Style::default().fg(Color::DarkGray))
    };
    frame.render_widget(Paragraph::new(leak), cols[3]);
}

fn columns(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(32),
            Constraint::Percentage(28),
            Constraint::Percentage(26),
            Constraint::Min(8),
        ])
        .split(area)
}

/// Single line centered vertically and horizontally in `area`.
fn render_placeholder(frame: &mut Frame, area: Rect, line: Line) {
    let target = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), target);
}

/// One-row rect at the given offset inside `area`; zero-height when the
/// offset falls outside so small terminals clip instead of overflowing.
fn row(area: Rect, offset: u16) -> Rect {
    Rect::new(
        area.x,
        area.y + offset,
        area.width,
        u16::from(offset < area.height),
    )
}
