use serde::Serialize;

use crate::model::Todo;
use crate::store::TodoStore;
use crate::util::unicode;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct CountJson {
    pub active: usize,
    pub completed: usize,
    pub total: usize,
}

#[derive(Serialize)]
pub struct ClearedJson {
    pub removed: usize,
}

#[derive(Serialize)]
pub struct RemovedJson<'a> {
    pub id: &'a str,
    pub removed: bool,
}

pub fn count_json(store: &TodoStore) -> CountJson {
    CountJson {
        active: store.active_count(),
        completed: store.completed_count(),
        total: store.len(),
    }
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

/// `[x] id_123  Buy milk`
pub fn format_todo_line(todo: &Todo) -> String {
    format!(
        "{} {}  {}",
        todo.checkbox(),
        todo.id,
        unicode::sanitize_line(&todo.title)
    )
}

/// One line per todo
pub fn format_todo_list(todos: &[&Todo]) -> String {
    let mut out = String::new();
    for todo in todos {
        out.push_str(&format_todo_line(todo));
        out.push('\n');
    }
    out
}
