mod edit;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};

use edit::{handle_edit, handle_insert};
use navigate::handle_navigate;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // Help overlay swallows the key that closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Insert => handle_insert(app, key),
        Mode::Edit => handle_edit(app, key),
    }
}

/// Handle a bracketed paste event. Only the text-entry modes accept it.
pub fn handle_paste(app: &mut App, text: &str) {
    match app.mode {
        Mode::Insert => app.input.insert_str(text),
        Mode::Edit => {
            if let Some(edit) = &mut app.editing {
                edit.buffer.insert_str(text);
            }
        }
        Mode::Navigate => {}
    }
}


#[cfg(test)]
mod tests {
    use super::test_keys::*;
    use super::*;
    use crate::tui::render::test_helpers::app_with_todos;

    #[test]
    fn ctrl_c_quits_from_any_mode() {
        let mut app = app_with_todos(&[]);
        app.mode = Mode::Insert;
        handle_key(&mut app, ctrl('c'));
        assert!(app.should_quit);
    }

    #[test]
    fn help_closes_on_any_key() {
        let mut app = app_with_todos(&[("a", false)]);
        app.show_help = true;
        handle_key(&mut app, ch('x'));
        assert!(!app.show_help);
        // The key was swallowed, not applied
        assert!(!app.store.todos()[0].completed);
    }

    #[test]
    fn paste_into_insert_field() {
        let mut app = app_with_todos(&[]);
        app.mode = Mode::Insert;
        handle_paste(&mut app, "line one\nline two");
        assert_eq!(app.input.text(), "line one line two");
    }

    #[test]
    fn paste_ignored_in_navigate() {
        let mut app = app_with_todos(&[]);
        handle_paste(&mut app, "text");
        assert!(app.input.is_empty());
    }
}
