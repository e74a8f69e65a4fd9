use crossterm::event::{KeyCode, KeyEvent};

use crate::model::Filter;
use crate::tui::app::{App, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    let len = app.visible().len();
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,

        // Cursor
        KeyCode::Char('j') | KeyCode::Down => {
            if app.cursor + 1 < len {
                app.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => app.cursor = app.cursor.saturating_sub(1),
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => app.cursor = len.saturating_sub(1),

        // Item actions
        KeyCode::Char(' ') | KeyCode::Char('x') => {
            if let Some(id) = app.selected_id() {
                app.store.toggle(&id);
            }
        }
        KeyCode::Enter | KeyCode::Char('e') => app.begin_edit(),
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(id) = app.selected_id() {
                app.store.remove(&id);
            }
        }
        KeyCode::Char('n') | KeyCode::Char('i') | KeyCode::Char('o') => {
            app.mode = Mode::Insert;
        }

        // Bulk actions
        KeyCode::Char('A') => app.store.toggle_all(),
        KeyCode::Char('C') => {
            app.store.clear_completed();
        }

        // Routes
        KeyCode::Char('1') => app.set_filter(Filter::All),
        KeyCode::Char('2') => app.set_filter(Filter::Active),
        KeyCode::Char('3') => app.set_filter(Filter::Completed),
        KeyCode::Tab => app.set_filter(app.filter.next()),
        KeyCode::BackTab => app.set_filter(app.filter.prev()),
        _ => {}
    }
    app.take_changed();
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;
    use pretty_assertions::assert_eq;

    use super::super::handle_key;
    use super::super::test_keys::*;
    use crate::model::Filter;
    use crate::tui::app::Mode;
    use crate::tui::render::test_helpers::app_with_todos;

    fn titles(app: &crate::tui::app::App) -> Vec<String> {
        app.visible().iter().map(|t| t.title.clone()).collect()
    }

    #[test]
    fn cursor_moves_within_bounds() {
        let mut app = app_with_todos(&[("a", false), ("b", false), ("c", false)]);
        handle_key(&mut app, ch('k'));
        assert_eq!(app.cursor, 0);
        handle_key(&mut app, ch('j'));
        handle_key(&mut app, key(KeyCode::Down));
        handle_key(&mut app, ch('j'));
        assert_eq!(app.cursor, 2);
        handle_key(&mut app, ch('g'));
        assert_eq!(app.cursor, 0);
        handle_key(&mut app, ch('G'));
        assert_eq!(app.cursor, 2);
    }

    #[test]
    fn space_toggles_selected() {
        let mut app = app_with_todos(&[("a", false), ("b", false)]);
        handle_key(&mut app, ch('j'));
        handle_key(&mut app, ch(' '));
        assert!(!app.store.todos()[0].completed);
        assert!(app.store.todos()[1].completed);
        handle_key(&mut app, ch('x'));
        assert!(!app.store.todos()[1].completed);
    }

    #[test]
    fn toggling_in_active_view_hides_item() {
        let mut app = app_with_todos(&[("a", false), ("b", false)]);
        handle_key(&mut app, ch('2'));
        handle_key(&mut app, ch('j'));
        handle_key(&mut app, ch(' '));
        assert_eq!(titles(&app), vec!["a"]);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn delete_removes_selected() {
        let mut app = app_with_todos(&[("a", false), ("b", false)]);
        handle_key(&mut app, ch('d'));
        assert_eq!(titles(&app), vec!["b"]);
        handle_key(&mut app, key(KeyCode::Delete));
        assert!(app.store.is_empty());
        // Nothing selected; another delete is harmless
        handle_key(&mut app, ch('d'));
    }

    #[test]
    fn toggle_all_and_clear_completed() {
        let mut app = app_with_todos(&[("a", true), ("b", false)]);
        handle_key(&mut app, ch('A'));
        assert!(app.store.is_all_completed());
        handle_key(&mut app, ch('A'));
        assert_eq!(app.store.active_count(), 2);

        handle_key(&mut app, ch(' '));
        handle_key(&mut app, ch('C'));
        assert_eq!(titles(&app), vec!["b"]);
    }

    #[test]
    fn filter_keys_select_routes() {
        let mut app = app_with_todos(&[("a", true), ("b", false)]);
        handle_key(&mut app, ch('3'));
        assert_eq!(app.filter, Filter::Completed);
        assert_eq!(titles(&app), vec!["a"]);
        handle_key(&mut app, key(KeyCode::Tab));
        assert_eq!(app.filter, Filter::All);
        handle_key(&mut app, key(KeyCode::BackTab));
        assert_eq!(app.filter, Filter::Completed);
        handle_key(&mut app, ch('1'));
        assert_eq!(titles(&app), vec!["a", "b"]);
    }

    #[test]
    fn new_todo_keys_enter_insert_mode() {
        for c in ['n', 'i', 'o'] {
            let mut app = app_with_todos(&[]);
            handle_key(&mut app, ch(c));
            assert_eq!(app.mode, Mode::Insert);
        }
    }

    #[test]
    fn edit_on_empty_list_stays_in_navigate() {
        let mut app = app_with_todos(&[]);
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.editing.is_none());
    }

    #[test]
    fn quit_and_help() {
        let mut app = app_with_todos(&[]);
        handle_key(&mut app, ch('?'));
        assert!(app.show_help);
        handle_key(&mut app, ch('q'));
        assert!(!app.should_quit);
        handle_key(&mut app, ch('q'));
        assert!(app.should_quit);
    }
}
