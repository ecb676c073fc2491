//! Clip listing for the rebind menu

use std::fmt;
use std::path::{Path, PathBuf};

/// Errors that can occur when listing the assets directory
#[derive(Debug, Clone)]
pub struct AssetError {
    pub path: PathBuf,
    pub message: String,
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}

impl std::error::Error for AssetError {}

/// Source of selectable clip names
pub trait AssetSource: Send + Sync {
    /// File names (not paths) of the regular files in `dir`
    fn list_files(&self, dir: &str) -> Result<Vec<String>, AssetError>;
}

/// Lists clips straight from the filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct AssetDir;

impl AssetSource for AssetDir {
    fn list_files(&self, dir: &str) -> Result<Vec<String>, AssetError> {
        list_files(Path::new(dir))
    }
}

/// Names of the regular files directly inside `dir`, sorted
///
/// Subdirectories are skipped, and so are symlinks. Names that are not valid
/// UTF-8 cannot be stored in the bindings file and are skipped with a warning.
pub fn list_files(dir: &Path) -> Result<Vec<String>, AssetError> {
    let to_error = |e: std::io::Error| AssetError {
        path: dir.to_path_buf(),
        message: e.to_string(),
    };

    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(to_error)? {
        let entry = entry.map_err(to_error)?;
        if !entry.file_type().map_err(to_error)?.is_file() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => tracing::warn!("Skipping clip with non UTF-8 name: {:?}", raw),
        }
    }

    names.sort();
    Ok(names)
}
