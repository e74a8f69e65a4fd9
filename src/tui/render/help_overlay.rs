use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

const KEYS: &[(&str, &str)] = &[
    ("j/k \u{2193}\u{2191}", "move"),
    ("g/G", "first / last"),
    ("n i o", "new todo"),
    ("space x", "toggle done"),
    ("Enter e", "edit title"),
    ("d Del", "delete"),
    ("A", "toggle all"),
    ("C", "clear completed"),
    ("1 2 3", "all / active / completed"),
    ("Tab", "next filter"),
    ("q Esc", "quit"),
];

/// Render the key reference as a centered popup
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let key_col = KEYS.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
    let width = (key_col + 30).min(area.width as usize) as u16;
    let height = (KEYS.len() + 2).min(area.height as usize) as u16;
    let popup = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let bg = app.theme.background;
    let lines: Vec<Line> = KEYS
        .iter()
        .map(|(keys, action)| {
            Line::from(vec![
                Span::styled(
                    format!(" {:<width$}  ", keys, width = key_col),
                    Style::default()
                        .fg(app.theme.accent)
                        .bg(bg)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(*action, Style::default().fg(app.theme.text).bg(bg)),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Keys ")
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
