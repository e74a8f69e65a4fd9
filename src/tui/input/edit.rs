use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};
use crate::tui::line::LineBuffer;

/// Apply a line-editing key to `buf`. Returns false if the key is not an
/// editing key.
fn edit_line(buf: &mut LineBuffer, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    match key.code {
        KeyCode::Char('u') if ctrl => buf.clear(),
        KeyCode::Char('w') if ctrl => buf.delete_word_back(),
        KeyCode::Char('a') if ctrl => buf.home(),
        KeyCode::Char('e') if ctrl => buf.end(),
        KeyCode::Backspace if alt => buf.delete_word_back(),
        KeyCode::Char(_) if ctrl => return false,
        KeyCode::Char(c) => buf.insert_char(c),
        KeyCode::Backspace => buf.backspace(),
        KeyCode::Delete => buf.delete(),
        KeyCode::Left => buf.move_left(),
        KeyCode::Right => buf.move_right(),
        KeyCode::Home => buf.home(),
        KeyCode::End => buf.end(),
        _ => return false,
    }
    true
}

/// New-todo field. Enter adds and keeps the field open for the next one.
pub(super) fn handle_insert(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_new(),
        KeyCode::Esc => {
            app.input.clear();
            app.mode = Mode::Navigate;
        }
        _ => {
            edit_line(&mut app.input, key);
        }
    }
}

/// Editing an existing todo. Enter saves, Esc restores the original.
pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.commit_edit(),
        KeyCode::Esc => app.cancel_edit(),
        _ => {
            if let Some(edit) = &mut app.editing {
                edit_line(&mut edit.buffer, key);
            } else {
                app.mode = Mode::Navigate;
            }
        }
    }
}
