use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::{Filter, items_left};
use crate::tui::app::App;

/// Render the rule plus the count, filter tabs, and clear-completed action
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "\u{2500}".repeat(area.width as usize),
            Style::default().fg(app.theme.dim).bg(bg),
        )),
        rows[0],
    );

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(40),
            Constraint::Percentage(30),
        ])
        .split(rows[1]);

    let count = Paragraph::new(Span::styled(
        format!(" {}", items_left(app.store.active_count())),
        Style::default().fg(app.theme.text).bg(bg),
    ))
    .style(Style::default().bg(bg));
    frame.render_widget(count, cols[0]);

    let mut tabs: Vec<Span> = Vec::new();
    for (i, filter) in Filter::ALL.iter().enumerate() {
        if i > 0 {
            tabs.push(Span::styled("  ", Style::default().bg(bg)));
        }
        let style = if *filter == app.filter {
            Style::default()
                .fg(app.theme.accent)
                .bg(bg)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(app.theme.dim).bg(bg)
        };
        tabs.push(Span::styled(filter.label(), style));
    }
    frame.render_widget(
        Paragraph::new(Line::from(tabs))
            .alignment(Alignment::Center)
            .style(Style::default().bg(bg)),
        cols[1],
    );

    if app.store.has_completed() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Clear completed ",
                Style::default().fg(app.theme.dim).bg(bg),
            ))
            .alignment(Alignment::Right)
            .style(Style::default().bg(bg)),
            cols[2],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    fn footer(app: &App) -> String {
        render_to_string(TERM_W, 2, |frame, area| render_footer(frame, app, area))
    }

    #[test]
    fn counts_active_only() {
        let app = app_with_todos(&[("a", false), ("b", true), ("c", false)]);
        let out = footer(&app);
        assert!(out.contains("2 items left"));
    }

    #[test]
    fn clear_completed_only_when_something_is_done() {
        let app = app_with_todos(&[("a", false)]);
        assert!(!footer(&app).contains("Clear completed"));

        let app = app_with_todos(&[("a", true)]);
        let out = footer(&app);
        assert!(out.contains("Clear completed"));
        assert!(out.contains("0 items left"));
    }

    #[test]
    fn shows_all_filter_tabs() {
        let app = app_with_todos(&[("a", false)]);
        let out = footer(&app);
        assert!(out.contains("All  Active  Completed"));
    }
}
