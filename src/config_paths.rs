//! Where padboard keeps its files
//!
//! ```text
//! <config dir>/padboard/
//! ├── bindings.json   key → clip table
//! └── logs/           daily-rotated padboard.log
//! ```
//!
//! `<config dir>` is `$XDG_CONFIG_HOME` or `~/.config`, and `%APPDATA%` on
//! Windows. `--bindings` overrides the bindings file but not the logs.

use std::fs;
use std::path::PathBuf;

const APP_DIR: &str = "padboard";
const BINDINGS_FILE: &str = "bindings.json";
const LOGS_DIR: &str = "logs";

pub fn config_dir() -> Option<PathBuf> {
    let base = if cfg!(target_os = "windows") {
        std::env::var_os("APPDATA").map(PathBuf::from)
    } else {
        std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
    };
    base.map(|dir| dir.join(APP_DIR))
}

/// Default bindings file location
pub fn bindings_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(BINDINGS_FILE))
}

pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(LOGS_DIR))
}

/// Create the config directory if needed and return it
pub fn ensure_config_dir() -> Result<PathBuf, String> {
    let dir = config_dir().ok_or_else(|| "No config directory available".to_string())?;
    create(dir)
}

/// Create the logs directory (and its parent) if needed and return it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let dir = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    create(dir)
}

fn create(dir: PathBuf) -> Result<PathBuf, String> {
    fs::create_dir_all(&dir)
        .map_err(|e| format!("Failed to create directory {}: {}", dir.display(), e))?;
    Ok(dir)
}
