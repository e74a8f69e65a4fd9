use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::io::storage::atomic_write;

pub const STATE_FILE: &str = ".state.json";

/// Persisted TUI state (written to .state.json)
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct UiState {
    /// Last route fragment, e.g. `#/active`
    #[serde(default)]
    pub route: String,
    /// Cursor index within the filtered list
    #[serde(default)]
    pub cursor: usize,
}

/// Read .state.json from the data directory
pub fn read_ui_state(data_dir: &Path) -> Option<UiState> {
    let content = fs::read_to_string(data_dir.join(STATE_FILE)).ok()?;
    serde_json::from_str(&content).ok()
}

/// Write .state.json to the data directory
pub fn write_ui_state(data_dir: &Path, state: &UiState) -> Result<(), std::io::Error> {
    let content = serde_json::to_string_pretty(state)?;
    fs::create_dir_all(data_dir)?;
    atomic_write(&data_dir.join(STATE_FILE), content.as_bytes())
}
