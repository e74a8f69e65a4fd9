use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode;

use super::header::scrolled_field;

/// Columns before the title: space, checkbox, space
const PREFIX_WIDTH: usize = 5;

/// Render the filtered todo list. Nothing is drawn when the store is
/// empty.
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    if app.store.is_empty() || area.height == 0 {
        return;
    }

    let visible_height = area.height as usize;
    adjust_scroll(app, visible_height);

    let width = area.width as usize;
    let bg = app.theme.background;
    let show_cursor = app.mode != Mode::Insert;
    let editing_id = app.editing.as_ref().map(|e| e.id.clone());
    let mut cursor_pos: Option<Position> = None;

    let todos = app.visible();
    let mut lines: Vec<Line> = Vec::new();
    for (i, todo) in todos
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(visible_height)
    {
        let is_cursor = show_cursor && i == app.cursor;
        let row_bg = if is_cursor { app.theme.cursor_bg } else { bg };
        let mut spans: Vec<Span> = Vec::new();

        let check_fg = if todo.completed {
            app.theme.check
        } else {
            app.theme.dim
        };
        spans.push(Span::styled(" ", Style::default().bg(row_bg)));
        spans.push(Span::styled(
            todo.checkbox(),
            Style::default().fg(check_fg).bg(row_bg),
        ));
        spans.push(Span::styled(" ", Style::default().bg(row_bg)));

        let title_width = width.saturating_sub(PREFIX_WIDTH);
        let is_editing = editing_id.as_deref() == Some(todo.id.as_str());
        if is_editing && let Some(edit) = &app.editing {
            let (text, col) = scrolled_field(&edit.buffer, title_width);
            let used = unicode::display_width(&text);
            let style = Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.input_bg);
            spans.push(Span::styled(text, style));
            spans.push(Span::styled(
                " ".repeat(title_width.saturating_sub(used)),
                style,
            ));
            let row = (i - app.scroll_offset) as u16;
            cursor_pos = Some(Position::new(
                area.x + PREFIX_WIDTH as u16 + col as u16,
                area.y + row,
            ));
        } else {
            let title = unicode::truncate_to_width(&unicode::sanitize_line(&todo.title), title_width);
            let mut style = Style::default().fg(app.theme.text).bg(row_bg);
            if todo.completed {
                style = style.fg(app.theme.done).add_modifier(Modifier::CROSSED_OUT);
            } else if is_cursor {
                style = style.fg(app.theme.text_bright);
            }
            if is_cursor {
                style = style.add_modifier(Modifier::BOLD);
            }
            let used = unicode::display_width(&title);
            spans.push(Span::styled(title, style));

            // Pad cursor line
            if is_cursor && PREFIX_WIDTH + used < width {
                spans.push(Span::styled(
                    " ".repeat(width - PREFIX_WIDTH - used),
                    Style::default().bg(row_bg),
                ));
            }
        }

        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
    if let Some(pos) = cursor_pos {
        frame.set_cursor_position(pos);
    }
}

/// Scroll so the cursor row is on screen
fn adjust_scroll(app: &mut App, visible_height: usize) {
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if app.cursor >= app.scroll_offset + visible_height {
        app.scroll_offset = app.cursor + 1 - visible_height;
    }
}
