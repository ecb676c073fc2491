//! Binding struct mapping a controller key to a clip on disk

use serde::{Deserialize, Serialize};

/// A single key → clip association
///
/// `key` is the decimal note number as written by the board, but any
/// non-empty string survives a load/save cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    pub key: String,
    #[serde(rename = "filePath")]
    pub file_path: String,
}

impl Binding {
    pub fn new(key: impl Into<String>, file_path: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            file_path: file_path.into(),
        }
    }

    /// Last path segment of the clip, for log lines
    pub fn file_name(&self) -> &str {
        match self.file_path.rfind('/') {
            Some(idx) => &self.file_path[idx + 1..],
            None => &self.file_path,
        }
    }
}
