use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from config.toml. Every section is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Key the todo collection is stored under (`<key>.json`)
    #[serde(default = "default_storage_key")]
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            key: default_storage_key(),
        }
    }
}

pub const DEFAULT_STORAGE_KEY: &str = "todos-rust";

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Hex color overrides keyed by theme slot (e.g. `highlight = "#FB4196"`)
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            colors: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Fallback filter directive when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file name, relative to the data directory
    #[serde(default = "default_log_file")]
    pub file: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "todos.log".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.storage.key, "todos-rust");
        assert!(config.ui.show_key_hints);
        assert!(config.ui.colors.is_empty());
        assert_eq!(config.log.level, "info");
        assert_eq!(config.log.file, "todos.log");
    }

    #[test]
    fn partial_sections_fill_defaults() {
        let config: Config = toml::from_str(
            r##"
[ui]
show_key_hints = false

[ui.colors]
highlight = "#FF0000"

[log]
level = "debug"
"##,
        )
        .unwrap();
        assert!(!config.ui.show_key_hints);
        assert_eq!(config.ui.colors.get("highlight").map(String::as_str), Some("#FF0000"));
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.log.file, "todos.log");
        assert_eq!(config.storage.key, "todos-rust");
    }
}
