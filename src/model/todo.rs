use serde::{Deserialize, Serialize};

/// A single todo item, persisted as `{"id", "title", "completed"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique within the collection, e.g. `id_1715680000000`
    pub id: String,
    /// Trimmed, non-empty title text
    pub title: String,
    pub completed: bool,
}

impl Todo {
    /// Create a new, not-yet-completed todo
    pub fn new(id: String, title: String) -> Self {
        Todo {
            id,
            title,
            completed: false,
        }
    }

    /// Checkbox glyph used by the CLI and TUI
    pub fn checkbox(&self) -> &'static str {
        if self.completed { "[x]" } else { "[ ]" }
    }
}

/// Build a timestamp-derived id (`id_<unix millis>`) that is not already
/// taken by `existing`. Collisions within the same millisecond get a
/// `-<n>` suffix.
pub fn generate_id<'a, I>(millis: i64, existing: I) -> String
where
    I: IntoIterator<Item = &'a str> + Clone,
{
    let base = format!("id_{}", millis);
    let taken = |candidate: &str| existing.clone().into_iter().any(|id| id == candidate);
    if !taken(&base) {
        return base;
    }
    let mut n = 1usize;
    loop {
        let candidate = format!("{}-{}", base, n);
        if !taken(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

/// "1 item left" / "3 items left"
pub fn items_left(count: usize) -> String {
    if count == 1 {
        "1 item left".to_string()
    } else {
        format!("{} items left", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_three_fields() {
        let todo = Todo::new("id_1".into(), "Buy milk".into());
        let json = serde_json::to_string(&todo).unwrap();
        assert_eq!(json, r#"{"id":"id_1","title":"Buy milk","completed":false}"#);
    }

    #[test]
    fn generate_id_uses_timestamp() {
        let existing: Vec<&str> = vec![];
        assert_eq!(generate_id(1234, existing.iter().copied()), "id_1234");
    }

    #[test]
    fn generate_id_avoids_collisions() {
        let existing = ["id_1234", "id_1234-1"];
        assert_eq!(generate_id(1234, existing.iter().copied()), "id_1234-2");
    }

    #[test]
    fn pluralizes_count() {
        assert_eq!(items_left(0), "0 items left");
        assert_eq!(items_left(1), "1 item left");
        assert_eq!(items_left(2), "2 items left");
    }

    #[test]
    fn checkbox_glyph() {
        let mut todo = Todo::new("a".into(), "t".into());
        assert_eq!(todo.checkbox(), "[ ]");
        todo.completed = true;
        assert_eq!(todo.checkbox(), "[x]");
    }
}
