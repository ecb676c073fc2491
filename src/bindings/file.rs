//! Durable bindings file
//!
//! Stores the binding table in `~/.config/padboard/bindings.json` (or a path
//! given on the command line). A missing file is created empty on first load;
//! a file that fails validation is never repaired, since rewriting it could
//! throw away bindings the user still wants.

use std::fmt;
use std::path::{Path, PathBuf};

use super::store::BindingStore;
use super::validate::{validate, Violation};

/// Errors that can occur when loading or persisting the bindings file
#[derive(Debug, Clone)]
pub enum StoreError {
    /// Reading or writing the file failed
    Io { path: PathBuf, message: String },
    /// The file is not valid JSON
    Malformed { path: PathBuf, message: String },
    /// The file is JSON but does not match the bindings schema
    Corrupt {
        path: PathBuf,
        violations: Vec<Violation>,
    },
}

impl StoreError {
    /// Whether the file exists but cannot be trusted (as opposed to an I/O failure)
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::Malformed { .. } | Self::Corrupt { .. })
    }

    fn io(path: &Path, e: impl fmt::Display) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, message } => {
                write!(f, "bindings file {}: {}", path.display(), message)
            }
            Self::Malformed { path, message } => {
                write!(f, "bindings file {} is not valid JSON: {}", path.display(), message)
            }
            Self::Corrupt { path, violations } => {
                write!(f, "bindings file {} is corrupt: ", path.display())?;
                for (i, violation) in violations.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", violation)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// Handle to the bindings file on disk
#[derive(Debug, Clone)]
pub struct StoreFile {
    path: PathBuf,
}

impl StoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and validate the store, creating an empty one if the file is absent
    pub fn load(&self) -> Result<BindingStore, StoreError> {
        if !self.path.exists() {
            tracing::info!("Looks like you have no save file, creating a new one...");
            self.persist(&BindingStore::new())?;
        } else {
            tracing::debug!("Loading bindings from {}", self.path.display());
        }

        let content =
            std::fs::read_to_string(&self.path).map_err(|e| StoreError::io(&self.path, e))?;

        let document: serde_json::Value =
            serde_json::from_str(&content).map_err(|e| StoreError::Malformed {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        validate(&document).map_err(|violations| StoreError::Corrupt {
            path: self.path.clone(),
            violations,
        })
    }

    /// Serialize the store and overwrite the file
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn persist(&self, store: &BindingStore) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
            }
        }

        let content =
            serde_json::to_string_pretty(store).map_err(|e| StoreError::io(&self.path, e))?;

        std::fs::write(&self.path, content).map_err(|e| StoreError::io(&self.path, e))?;

        tracing::debug!(
            "Saved {} bindings to {}",
            store.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Persist the store, then read it back
    ///
    /// The reloaded value is what the caller should hold from now on; the
    /// write only counts once the read-back validates.
    pub fn commit(&self, store: &BindingStore) -> Result<BindingStore, StoreError> {
        self.persist(store)?;
        tracing::info!("Your save file has been saved on disk");
        self.load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::Binding;
    use tempfile::TempDir;

    fn store_file(dir: &TempDir) -> StoreFile {
        StoreFile::new(dir.path().join("bindings.json"))
    }

    #[test]
    fn test_load_creates_missing_file() {
        let dir = TempDir::new().unwrap();
        let file = store_file(&dir);

        let store = file.load().unwrap();

        assert!(store.is_empty());
        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(file.path()).unwrap()).unwrap();
        assert_eq!(written, serde_json::json!({ "bindings": [] }));
    }

    #[test]
    fn test_load_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let file = StoreFile::new(dir.path().join("nested").join("bindings.json"));

        assert!(file.load().unwrap().is_empty());
        assert!(file.path().exists());
    }

    #[test]
    fn test_load_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let file = store_file(&dir);
        std::fs::write(
            file.path(),
            r#"{"bindings":[{"key":"36","filePath":"/sounds/snare.wav"}]}"#,
        )
        .unwrap();

        let first = file.load().unwrap();
        let second = file.load().unwrap();

        assert_eq!(first, second);
        assert_eq!(first.len(), 1);
    }

    #[test]
    fn test_corrupt_shape_is_reported() {
        let dir = TempDir::new().unwrap();
        let file = store_file(&dir);
        std::fs::write(file.path(), r#"{"bindings":"oops"}"#).unwrap();

        let err = file.load().unwrap_err();

        assert!(err.is_corrupt());
        assert!(matches!(err, StoreError::Corrupt { ref violations, .. } if violations.len() == 1));
        // Never repaired
        assert_eq!(
            std::fs::read_to_string(file.path()).unwrap(),
            r#"{"bindings":"oops"}"#
        );
    }

    #[test]
    fn test_invalid_json_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let file = store_file(&dir);
        std::fs::write(file.path(), "{ bindings: [").unwrap();

        let err = file.load().unwrap_err();
        assert!(matches!(err, StoreError::Malformed { .. }));
        assert!(err.is_corrupt());
    }

    #[test]
    fn test_commit_round_trips_through_disk() {
        let dir = TempDir::new().unwrap();
        let file = store_file(&dir);
        file.load().unwrap();

        let store = BindingStore::new().upsert(Binding::new("60", "/sounds/kick.wav"));
        let reloaded = file.commit(&store).unwrap();

        assert_eq!(reloaded, store);
        assert_eq!(file.load().unwrap(), store);
    }

    #[test]
    fn test_persist_into_unwritable_location_is_io_error() {
        let dir = TempDir::new().unwrap();
        // A regular file where the parent directory should be
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let file = StoreFile::new(blocker.join("bindings.json"));

        let err = file.persist(&BindingStore::new()).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
        assert!(!err.is_corrupt());
    }
}
