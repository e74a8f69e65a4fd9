use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

/// Error type for key-value storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("could not read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("could not write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// A durable string key-value store, the backing for `TodoStore`.
pub trait Storage {
    /// Read the value under `key`. A missing key is `Ok(None)`.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    /// Replace the value under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    /// The file backing `key`, if there is one (used for change watching).
    fn location(&self, key: &str) -> Option<PathBuf> {
        let _ = key;
        None
    }
}

/// Stores each key as `<root>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FileStorage { root: root.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Read { path, source: e }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        fs::create_dir_all(&self.root)
            .and_then(|_| atomic_write(&path, value.as_bytes()))
            .map_err(|e| StorageError::Write { path, source: e })
    }

    fn location(&self, key: &str) -> Option<PathBuf> {
        Some(self.path_for(key))
    }
}

/// In-memory storage. Optionally refuses writes, to stand in for a
/// full or read-only disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value (for tests and fixtures)
    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    /// Make every subsequent `set` fail
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Unavailable("writes disabled".into()));
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Write via a temp file in the same directory, then rename over `path`.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_storage_missing_key_is_none() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path());
        assert!(storage.get("todos").unwrap().is_none());
    }

    #[test]
    fn file_storage_set_then_get() {
        let dir = TempDir::new().unwrap();
        let mut storage = FileStorage::new(dir.path().join("nested"));
        storage.set("todos", "[]").unwrap();
        assert_eq!(storage.get("todos").unwrap().as_deref(), Some("[]"));
        assert!(dir.path().join("nested/todos.json").exists());
    }

    #[test]
    fn file_storage_overwrites() {
        let dir = TempDir::new().unwrap();
        let mut storage = FileStorage::new(dir.path());
        storage.set("k", "one").unwrap();
        storage.set("k", "two").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("two"));
    }

    #[test]
    fn file_storage_location() {
        let storage = FileStorage::new("/data");
        assert_eq!(storage.location("todos"), Some(PathBuf::from("/data/todos.json")));
    }

    #[test]
    fn file_storage_write_into_file_path_fails() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a dir").unwrap();
        let mut storage = FileStorage::new(&blocker);
        assert!(matches!(
            storage.set("k", "v"),
            Err(StorageError::Write { .. })
        ));
    }

    #[test]
    fn memory_storage_round_trip() {
        let mut storage = MemoryStorage::new();
        assert!(storage.get("k").unwrap().is_none());
        storage.set("k", "v").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));
        assert!(storage.location("k").is_none());
    }

    #[test]
    fn memory_storage_failing_writes() {
        let mut storage = MemoryStorage::new().with_value("k", "old").failing_writes();
        assert!(storage.set("k", "new").is_err());
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("old"));
    }
}
