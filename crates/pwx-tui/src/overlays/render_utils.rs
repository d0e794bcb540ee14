//! Shared rendering helpers for overlays and forms.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Calculates the area for an overlay, centered horizontally and vertically
/// within the available height (the region above the status line).
pub fn calculate_overlay_area(area: Rect, available_height: u16, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(available_height.saturating_sub(2));

    let overlay_x = (area.width.saturating_sub(width)) / 2;
    let overlay_y = (available_height.saturating_sub(height)) / 2;
    Rect::new(overlay_x, overlay_y, width, height)
}

/// Renders the base container for an overlay (clears background, draws border and title).
pub fn render_overlay_container(frame: &mut Frame, area: Rect, title: &str, border_color: Color) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {title} "))
        .title_style(
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(block, area);
}

/// Input configuration for an overlay.
pub struct OverlayConfig<'a> {
    pub title: &'a str,
    pub border_color: Color,
    pub width: u16,
    pub height: u16,
    pub hints: &'a [InputHint<'a>],
}

/// Layout rectangles for an overlay.
pub struct OverlayLayout {
    pub popup: Rect,
    pub inner: Rect,
    pub body: Rect,
    pub footer: Rect,
}

/// Render a standard overlay container and return its layout.
pub fn render_overlay(
    frame: &mut Frame,
    area: Rect,
    status_y: u16,
    config: &OverlayConfig<'_>,
) -> OverlayLayout {
    let popup = calculate_overlay_area(area, status_y, config.width, config.height);
    render_overlay_container(frame, popup, config.title, config.border_color);

    let inner = Rect::new(
        popup.x + 1,
        popup.y + 1,
        popup.width.saturating_sub(2),
        popup.height.saturating_sub(2),
    );

    if !config.hints.is_empty() {
        render_hints(frame, inner, config.hints, config.border_color);
    }

    let footer_height = u16::from(!config.hints.is_empty());
    let body_height = inner.height.saturating_sub(footer_height);
    let footer = Rect::new(inner.x, inner.y + body_height, inner.width, footer_height);
    let body = Rect::new(inner.x, inner.y, inner.width, body_height);

    OverlayLayout {
        popup,
        inner,
        body,
        footer,
    }
}

/// Helper struct for keyboard hints.
pub struct InputHint<'a> {
    pub key: &'a str,
    pub action: &'a str,
}

impl<'a> InputHint<'a> {
    pub fn new(key: &'a str, action: &'a str) -> Self {
        Self { key, action }
    }
}

/// Renders a line of keyboard hints at the bottom of the overlay.
pub fn render_hints(frame: &mut Frame, area: Rect, hints: &[InputHint], highlight_color: Color) {
    let hints_y = area.y + area.height.saturating_sub(1);
    let hints_area = Rect::new(area.x, hints_y, area.width, 1);

    let mut spans = Vec::new();
    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(highlight_color)));
        spans.push(Span::styled(
            format!(" {}", hint.action),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let line = Line::from(spans);
    let para = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(para, hints_area);
}

/// A labeled single-line form field.
pub struct FieldLine<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub masked: bool,
    pub focused: bool,
}

/// Renders "Label: value" with a block cursor on the focused field.
/// Masked fields draw bullets instead of the value.
pub fn render_field_line(frame: &mut Frame, area: Rect, field: &FieldLine<'_>) {
    let label = format!("{}: ", field.label);
    let masked_value;
    let value = if field.masked {
        masked_value = "•".repeat(field.value.chars().count());
        masked_value.as_str()
    } else {
        field.value
    };

    let cursor_width = u16::from(field.focused);
    let max_value_width = area
        .width
        .saturating_sub(label.as_str().width() as u16 + cursor_width)
        as usize;
    let display = truncate_start(value, max_value_width);

    let label_style = if field.focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans = vec![Span::styled(label, label_style), Span::raw(display)];
    if field.focused {
        spans.push(Span::styled("█", Style::default().fg(Color::Cyan)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Renders a separator line.
pub fn render_separator(frame: &mut Frame, area: Rect, y_offset: u16) {
    if y_offset >= area.height {
        return;
    }
    let separator = "─".repeat(area.width as usize);
    let separator_area = Rect::new(area.x, area.y + y_offset, area.width, 1);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            separator,
            Style::default().fg(Color::DarkGray),
        ))),
        separator_area,
    );
}

/// Cuts `text` at `max_width` columns, ending with an ellipsis.
pub(crate) fn truncate_end(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }
    let mut truncated = String::new();
    for ch in text.chars() {
        let next_width = truncated.as_str().width() + ch.width().unwrap_or(0);
        if next_width + 1 > max_width {
            break;
        }
        truncated.push(ch);
    }
    truncated.push('…');
    truncated
}

/// Keeps the tail of `text` when it exceeds `max_width` columns, prefixing
/// the cut with an ellipsis. The tail is what matters while typing since the
/// cursor sits at the end of the value.
fn truncate_start(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }
    let mut kept = String::new();
    let mut width = 0;
    for ch in text.chars().rev() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width + 1 > max_width {
            break;
        }
        kept.insert(0, ch);
        width += ch_width;
    }
    format!("…{kept}")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Text that fits is returned unchanged.
    #[test]
    fn test_truncate_start_fits() {
        assert_eq!(truncate_start("host.ru", 10), "host.ru");
    }

    /// Overlong text keeps its tail behind an ellipsis.
    #[test]
    fn test_truncate_start_keeps_tail() {
        assert_eq!(truncate_start("abcdefgh", 5), "…efgh");
    }

    /// A one-column budget degrades to a bare ellipsis.
    #[test]
    fn test_truncate_start_tiny_budget() {
        assert_eq!(truncate_start("abcdef", 1), "…");
    }

    /// End truncation keeps the head of the text.
    #[test]
    fn test_truncate_end_keeps_head() {
        assert_eq!(truncate_end("abcdefgh", 5), "abcd…");
        assert_eq!(truncate_end("ok", 5), "ok");
    }

    /// The overlay never exceeds the terminal area it is centered in.
    #[test]
    fn test_overlay_area_clamped_to_terminal() {
        let area = Rect::new(0, 0, 20, 10);
        let popup = calculate_overlay_area(area, 8, 60, 20);
        assert!(popup.width <= area.width);
        assert!(popup.height <= 8);
    }
}
