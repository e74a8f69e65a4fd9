use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode;

/// Key hints for each mode
fn hints(mode: Mode) -> &'static str {
    match mode {
        Mode::Navigate => "n new  space toggle  e edit  d delete  ? help",
        Mode::Insert => "Enter add  Esc done",
        Mode::Edit => "Enter save  Esc cancel",
    }
}

/// Render the status row (bottom of screen): hints or a storage warning
/// on the left, the current route on the right
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let route = app.filter.fragment();
    let route_width = unicode::display_width(route) + 1;
    let left_budget = width.saturating_sub(route_width + 1);

    let mut spans: Vec<Span> = Vec::new();
    if !app.store.is_persistent() {
        spans.push(Span::styled(
            unicode::truncate_to_width(" not saved: storage unavailable", left_budget),
            Style::default().fg(app.theme.error).bg(bg),
        ));
    } else if app.show_key_hints || app.mode != Mode::Navigate {
        spans.push(Span::styled(
            unicode::truncate_to_width(&format!(" {}", hints(app.mode)), left_budget),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let content_width: usize = spans.iter().map(|s| unicode::display_width(&s.content)).sum();
    if content_width + route_width <= width {
        let padding = width - content_width - route_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            format!("{} ", route),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
