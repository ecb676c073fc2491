//! Schema validation for the bindings file
//!
//! The file is checked against its expected shape field by field instead of
//! being deserialized straight into [`BindingStore`], so a corrupt file
//! reports every offending field rather than the first serde error.
//!
//! Expected shape:
//!
//! ```json
//! { "bindings": [ { "key": "36", "filePath": "/sounds/snare.wav" } ] }
//! ```
//!
//! Unknown extra fields are ignored.

use std::fmt;

use serde_json::Value;

use super::binding::Binding;
use super::store::BindingStore;

/// What is wrong with a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// Required field is absent
    Missing,
    /// Field has the wrong JSON type
    WrongType { expected: &'static str },
    /// String field is present but empty
    Empty,
}

/// A field-level schema violation, located by a JSON-ish path
/// such as `bindings[2].filePath`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: String,
    pub kind: ViolationKind,
}

impl Violation {
    fn new(path: impl Into<String>, kind: ViolationKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ViolationKind::Missing => write!(f, "{}: missing", self.path),
            ViolationKind::WrongType { expected } => {
                write!(f, "{}: expected {}", self.path, expected)
            }
            ViolationKind::Empty => write!(f, "{}: must not be empty", self.path),
        }
    }
}

/// Validate a parsed bindings document
///
/// Returns the store when the document is well-formed, otherwise every
/// violation found.
pub fn validate(document: &Value) -> Result<BindingStore, Vec<Violation>> {
    let Some(root) = document.as_object() else {
        return Err(vec![Violation::new(
            "$",
            ViolationKind::WrongType { expected: "object" },
        )]);
    };

    let entries = match root.get("bindings") {
        None => return Err(vec![Violation::new("bindings", ViolationKind::Missing)]),
        Some(Value::Array(entries)) => entries,
        Some(_) => {
            return Err(vec![Violation::new(
                "bindings",
                ViolationKind::WrongType { expected: "array" },
            )])
        }
    };

    let mut violations = Vec::new();
    let mut bindings = Vec::with_capacity(entries.len());

    for (idx, entry) in entries.iter().enumerate() {
        let prefix = format!("bindings[{}]", idx);
        let Some(fields) = entry.as_object() else {
            violations.push(Violation::new(
                prefix,
                ViolationKind::WrongType { expected: "object" },
            ));
            continue;
        };

        let key = required_string(fields.get("key"), &prefix, "key", &mut violations);
        let file_path =
            required_string(fields.get("filePath"), &prefix, "filePath", &mut violations);

        if let (Some(key), Some(file_path)) = (key, file_path) {
            bindings.push(Binding::new(key, file_path));
        }
    }

    if violations.is_empty() {
        Ok(BindingStore::with_bindings(bindings))
    } else {
        Err(violations)
    }
}

fn required_string<'a>(
    value: Option<&'a Value>,
    prefix: &str,
    field: &str,
    violations: &mut Vec<Violation>,
) -> Option<&'a str> {
    let path = || format!("{}.{}", prefix, field);
    match value {
        None => {
            violations.push(Violation::new(path(), ViolationKind::Missing));
            None
        }
        Some(Value::String(s)) if s.is_empty() => {
            violations.push(Violation::new(path(), ViolationKind::Empty));
            None
        }
        Some(Value::String(s)) => Some(s.as_str()),
        Some(_) => {
            violations.push(Violation::new(
                path(),
                ViolationKind::WrongType { expected: "string" },
            ));
            None
        }
    }
}
