pub mod footer;
pub mod header;
pub mod help_overlay;
pub mod list_view;
pub mod status_row;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Main render function. Rebuilds the whole screen from the store on
/// every call.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // The footer only exists while there are todos
    let footer_height = if app.store.is_empty() { 0 } else { 2 };

    // Layout: header (3 rows) | list | footer | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // title + new-todo input + rule
            Constraint::Min(1),                // list
            Constraint::Length(footer_height), // rule + counts/filters
            Constraint::Length(1),             // status row
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);
    list_view::render_list_view(frame, app, chunks[1]);
    if footer_height > 0 {
        footer::render_footer(frame, app, chunks[2]);
    }
    status_row::render_status_row(frame, app, chunks[3]);

    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }
}

#[cfg(test)]
mod tests {
    use super::test_helpers::*;
    use super::*;

    fn screen(app: &mut App) -> String {
        render_to_string(TERM_W, TERM_H, |frame, _| render(frame, app))
    }

    #[test]
    fn empty_store_hides_list_and_footer() {
        let mut app = app_with_todos(&[]);
        let out = screen(&mut app);
        assert!(out.contains("todos"));
        assert!(out.contains("What needs to be done?"));
        assert!(!out.contains("left"));
        assert!(!out.contains("Completed"));
    }

    #[test]
    fn full_screen_with_todos() {
        let mut app = app_with_todos(&[("Buy milk", true), ("Walk dog", false)]);
        let out = screen(&mut app);
        assert!(out.contains("[x] Buy milk"));
        assert!(out.contains("[ ] Walk dog"));
        assert!(out.contains("1 item left"));
        assert!(out.contains("All"));
        assert!(out.contains("Active"));
        assert!(out.contains("Clear completed"));
    }

    #[test]
    fn help_overlay_on_top() {
        let mut app = app_with_todos(&[("a", false)]);
        app.show_help = true;
        let out = screen(&mut app);
        assert!(out.contains("Keys"));
        assert!(out.contains("clear completed"));
    }
}
