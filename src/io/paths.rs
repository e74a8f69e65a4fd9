use std::env;
use std::path::{Path, PathBuf};

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "TODOS_DIR";

/// Resolve the data directory: explicit flag, then `$TODOS_DIR`, then
/// `$XDG_DATA_HOME/todos`, then `~/.local/share/todos`, then `./.todos`.
pub fn resolve_data_dir(explicit: Option<&Path>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }
    resolve_from(
        env::var_os(DATA_DIR_ENV).map(PathBuf::from),
        env::var_os("XDG_DATA_HOME").map(PathBuf::from),
        env::var_os("HOME").map(PathBuf::from),
    )
}

fn resolve_from(
    override_dir: Option<PathBuf>,
    xdg_data_home: Option<PathBuf>,
    home: Option<PathBuf>,
) -> PathBuf {
    if let Some(dir) = override_dir.filter(|d| !d.as_os_str().is_empty()) {
        return dir;
    }
    if let Some(xdg) = xdg_data_home.filter(|d| d.is_absolute()) {
        return xdg.join("todos");
    }
    if let Some(home) = home.filter(|d| !d.as_os_str().is_empty()) {
        return home.join(".local").join("share").join("todos");
    }
    PathBuf::from(".todos")
}
