use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::tui::line::LineBuffer;
use crate::util::unicode;

pub const PLACEHOLDER: &str = "What needs to be done?";

/// Width of the toggle-all gutter in front of the input field
const GUTTER: u16 = 3;

/// Render the title, the new-todo field, and the rule below them
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let mut lines: Vec<Line> = Vec::with_capacity(3);

    lines.push(
        Line::from(Span::styled(
            "todos",
            Style::default()
                .fg(app.theme.accent)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
    );

    let mut spans: Vec<Span> = Vec::new();
    spans.push(toggle_all_span(app));

    let field_width = area.width.saturating_sub(GUTTER) as usize;
    if app.mode == Mode::Insert {
        let (visible, cursor_col) = scrolled_field(&app.input, field_width);
        let used = unicode::display_width(&visible);
        let field_style = Style::default().fg(app.theme.text_bright).bg(app.theme.input_bg);
        spans.push(Span::styled(visible, field_style));
        if used < field_width {
            spans.push(Span::styled(" ".repeat(field_width - used), field_style));
        }
        if area.height > 1 {
            frame.set_cursor_position(Position::new(
                area.x + GUTTER + cursor_col as u16,
                area.y + 1,
            ));
        }
    } else {
        spans.push(Span::styled(
            unicode::truncate_to_width(PLACEHOLDER, field_width),
            Style::default()
                .fg(app.theme.dim)
                .bg(bg)
                .add_modifier(Modifier::ITALIC),
        ));
    }
    lines.push(Line::from(spans));

    lines.push(Line::from(Span::styled(
        "\u{2500}".repeat(area.width as usize),
        Style::default().fg(app.theme.dim).bg(bg),
    )));

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// The toggle-all marker: bright when every todo is completed, hidden
/// when there are no todos
fn toggle_all_span(app: &App) -> Span<'static> {
    let bg = app.theme.background;
    if app.store.is_empty() {
        return Span::styled("   ", Style::default().bg(bg));
    }
    let fg = if app.store.is_all_completed() {
        app.theme.check
    } else {
        app.theme.dim
    };
    Span::styled(" \u{276F} ", Style::default().fg(fg).bg(bg))
}

/// The part of `buf` that fits in `width` cells with the cursor visible,
/// and the cursor's column within that part.
pub(super) fn scrolled_field(buf: &LineBuffer, width: usize) -> (String, usize) {
    if width == 0 {
        return (String::new(), 0);
    }
    let text = buf.text();
    let cursor_col = buf.cursor_col();
    // Keep one cell free for the cursor at end of line
    let offset_col = (cursor_col + 1).saturating_sub(width);
    let start = unicode::display_col_to_byte_offset(text, offset_col);
    let skipped = unicode::byte_offset_to_display_col(text, start);
    let visible = unicode::truncate_to_width(&text[start..], width);
    // A wide grapheme straddling the offset can push the cursor past the field
    (visible, (cursor_col - skipped).min(width - 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    fn header(app: &App) -> String {
        render_to_string(TERM_W, 3, |frame, area| render_header(frame, app, area))
    }

    #[test]
    fn shows_title_and_placeholder() {
        let app = app_with_todos(&[]);
        let out = header(&app);
        assert!(out.lines().next().unwrap().contains("todos"));
        assert!(out.contains(PLACEHOLDER));
        assert!(!out.contains('\u{276F}'));
    }

    #[test]
    fn insert_mode_shows_buffer() {
        let mut app = app_with_todos(&[("a", false)]);
        app.mode = Mode::Insert;
        app.input = LineBuffer::with_text("Walk dog");
        let out = header(&app);
        assert!(out.contains("Walk dog"));
        assert!(!out.contains(PLACEHOLDER));
        assert!(out.contains('\u{276F}'));
    }

    #[test]
    fn short_text_is_not_scrolled() {
        let buf = LineBuffer::with_text("abc");
        assert_eq!(scrolled_field(&buf, 10), ("abc".to_string(), 3));
    }

    #[test]
    fn long_text_scrolls_to_cursor() {
        let buf = LineBuffer::with_text("abcdefghij");
        let (visible, col) = scrolled_field(&buf, 5);
        assert_eq!(visible, "ghij");
        assert_eq!(col, 4);
    }

    #[test]
    fn wide_text_keeps_cursor_inside_field() {
        let buf = LineBuffer::with_text("\u{4F60}\u{597D}");
        let (visible, col) = scrolled_field(&buf, 2);
        assert_eq!(visible, "\u{597D}");
        assert_eq!(col, 1);

        let (_, col) = scrolled_field(&buf, 3);
        assert!(col < 3);
    }
}
