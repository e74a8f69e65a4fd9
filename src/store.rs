//! The todo store: sole owner of the todo collection.
//!
//! Every effective mutation persists the whole collection to its backing
//! [`Storage`] and then notifies each subscriber once with the full,
//! updated list. Views re-render from that list; there are no diffs.
//!
//! Storage failures never reach the caller. A read or parse failure at
//! open loads as an empty list, and on reload keeps the current list; a
//! write failure drops the store into memory-only mode for the rest of
//! the session.

use std::collections::HashSet;

use thiserror::Error;
use tracing::{debug, warn};

use crate::io::storage::{Storage, StorageError};
use crate::model::{Filter, Todo, generate_id};

/// Handle returned by [`TodoStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&[Todo])>;

pub struct TodoStore {
    todos: Vec<Todo>,
    storage: Box<dyn Storage>,
    key: String,
    persistent: bool,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl TodoStore {
    /// Open the store, loading whatever is saved under `key`.
    pub fn open(storage: Box<dyn Storage>, key: impl Into<String>) -> Self {
        let key = key.into();
        let todos = load_todos(storage.as_ref(), &key);
        debug!(key = %key, count = todos.len(), "todo store opened");
        TodoStore {
            todos,
            storage,
            key,
            persistent: true,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// False once a write has failed; the session continues in memory.
    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    /// The storage location of the collection, if file-backed
    pub fn location(&self) -> Option<std::path::PathBuf> {
        self.storage.location(&self.key)
    }

    // -----------------------------------------------------------------
    // Observers
    // -----------------------------------------------------------------

    /// Register a callback fired after every effective mutation.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&[Todo]) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a subscription. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    // -----------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------

    /// Read-only view of the todos matching `filter`, in insertion order
    pub fn all(&self, filter: Filter) -> Vec<&Todo> {
        self.todos.iter().filter(|t| filter.matches(t)).collect()
    }

    /// The whole collection
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn get(&self, id: &str) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.todos.iter().filter(|t| !t.completed).count()
    }

    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.completed).count()
    }

    pub fn has_completed(&self) -> bool {
        self.todos.iter().any(|t| t.completed)
    }

    /// True when there is at least one todo and every todo is completed
    pub fn is_all_completed(&self) -> bool {
        !self.todos.is_empty() && self.todos.iter().all(|t| t.completed)
    }

    // -----------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------

    /// Append a new todo. Returns its id, or `None` if the trimmed title
    /// is empty (nothing is added).
    pub fn add(&mut self, title: &str) -> Option<String> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        let millis = chrono::Utc::now().timestamp_millis();
        let id = generate_id(millis, self.todos.iter().map(|t| t.id.as_str()));
        self.todos.push(Todo::new(id.clone(), title.to_string()));
        debug!(id = %id, "todo added");
        self.commit();
        Some(id)
    }

    /// Delete the todo with `id`. Returns false if there is none.
    pub fn remove(&mut self, id: &str) -> bool {
        let Some(idx) = self.position(id) else {
            return false;
        };
        self.todos.remove(idx);
        debug!(id, "todo removed");
        self.commit();
        true
    }

    /// Flip one todo's completed flag
    pub fn toggle(&mut self, id: &str) -> bool {
        let Some(idx) = self.position(id) else {
            return false;
        };
        let todo = &mut self.todos[idx];
        todo.completed = !todo.completed;
        debug!(id, completed = todo.completed, "todo toggled");
        self.commit();
        true
    }

    /// Mark everything completed, or, if everything already is, mark
    /// everything active.
    pub fn toggle_all(&mut self) {
        let target = !self.is_all_completed();
        self.set_all_completed(target);
    }

    /// Set every todo's completed flag to `completed`
    pub fn set_all_completed(&mut self, completed: bool) {
        if self.todos.iter().all(|t| t.completed == completed) {
            return;
        }
        for todo in &mut self.todos {
            todo.completed = completed;
        }
        debug!(completed, "all todos set");
        self.commit();
    }

    /// Replace a todo's title. A blank title removes the todo instead.
    /// Returns false if there is no todo with `id`.
    pub fn update(&mut self, id: &str, title: &str) -> bool {
        let Some(idx) = self.position(id) else {
            return false;
        };
        let title = title.trim();
        if title.is_empty() {
            self.todos.remove(idx);
            debug!(id, "todo removed by blank edit");
        } else {
            if self.todos[idx].title == title {
                return true;
            }
            self.todos[idx].title = title.to_string();
            debug!(id, "todo retitled");
        }
        self.commit();
        true
    }

    /// Remove every completed todo, keeping the rest in order.
    /// Returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.todos.len();
        self.todos.retain(|t| !t.completed);
        let removed = before - self.todos.len();
        if removed > 0 {
            debug!(removed, "completed todos cleared");
            self.commit();
        }
        removed
    }

    /// Re-read the collection from storage, notifying subscribers if it
    /// changed. Returns whether it changed.
    ///
    /// A memory-only store never reloads, and an unreadable, missing or
    /// unparsable file leaves the current collection in place.
    pub fn reload(&mut self) -> bool {
        if !self.persistent {
            return false;
        }
        let loaded = match read_todos(self.storage.as_ref(), &self.key) {
            Ok(Some(todos)) => todos,
            Ok(None) => return false,
            Err(e) => {
                warn!(error = %e, "could not reload todos; keeping current list");
                return false;
            }
        };
        if loaded == self.todos {
            return false;
        }
        debug!(count = loaded.len(), "todo store reloaded");
        self.todos = loaded;
        self.notify();
        true
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.todos.iter().position(|t| t.id == id)
    }

    /// Persist, then notify
    fn commit(&mut self) {
        self.persist();
        self.notify();
    }

    fn persist(&mut self) {
        if !self.persistent {
            return;
        }
        let json = match serde_json::to_string(&self.todos) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "could not serialize todos");
                return;
            }
        };
        if let Err(e) = self.storage.set(&self.key, &json) {
            warn!(error = %e, "todo storage write failed; continuing in memory only");
            self.persistent = false;
        }
    }

    fn notify(&mut self) {
        let todos = &self.todos;
        for (_, listener) in &mut self.listeners {
            listener(todos);
        }
    }
}

#[derive(Debug, Error)]
enum LoadError {
    #[error(transparent)]
    Read(#[from] StorageError),
    #[error("stored todos are not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Lenient load used at open: any failure starts the session empty.
fn load_todos(storage: &dyn Storage, key: &str) -> Vec<Todo> {
    match read_todos(storage, key) {
        Ok(todos) => todos.unwrap_or_default(),
        Err(e) => {
            warn!(error = %e, "could not load todos; starting empty");
            Vec::new()
        }
    }
}

/// Read and parse the collection. `Ok(None)` means nothing is stored
/// under `key` yet. Duplicate ids keep their first occurrence.
fn read_todos(storage: &dyn Storage, key: &str) -> Result<Option<Vec<Todo>>, LoadError> {
    let Some(raw) = storage.get(key)? else {
        return Ok(None);
    };
    let parsed: Vec<Todo> = serde_json::from_str(&raw)?;
    let mut seen = HashSet::new();
    let mut todos = Vec::with_capacity(parsed.len());
    for todo in parsed {
        if seen.insert(todo.id.clone()) {
            todos.push(todo);
        } else {
            warn!(id = %todo.id, "dropping todo with duplicate id");
        }
    }
    Ok(Some(todos))
}
