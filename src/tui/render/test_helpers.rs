use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::io::storage::MemoryStorage;
use crate::model::{Filter, UiConfig};
use crate::store::TodoStore;
use crate::tui::app::App;

pub const TERM_W: u16 = 60;
pub const TERM_H: u16 = 16;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// A memory-backed store seeded with `(title, completed)` pairs, in order.
pub fn store_with_todos(todos: &[(&str, bool)]) -> TodoStore {
    let json: Vec<serde_json::Value> = todos
        .iter()
        .enumerate()
        .map(|(i, (title, completed))| {
            serde_json::json!({ "id": format!("id_{}", i + 1), "title": title, "completed": completed })
        })
        .collect();
    let raw = serde_json::Value::Array(json).to_string();
    TodoStore::open(
        Box::new(MemoryStorage::new().with_value("todos-test", &raw)),
        "todos-test",
    )
}

/// Build an App over a seeded store, showing every todo.
pub fn app_with_todos(todos: &[(&str, bool)]) -> App {
    App::new(store_with_todos(todos), Filter::All, &UiConfig::default())
}
