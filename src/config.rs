//! Runtime configuration
//!
//! Read once from the environment at startup and immutable afterwards:
//!
//! - `VOLUME` - playback volume, a float in `0..=1`
//! - `ASSETS_PATH` - directory the rebind menu lists clips from
//! - `RETRIGGER_DELAY_MS` - length of the global retrigger window
//!
//! Every variable is checked, so a bad environment reports all of its
//! problems at once instead of one per run.
//!
//! A `.env` file can supply any of them; see [`load_env_file`].

use std::fmt;
use std::path::{Path, PathBuf};

pub const VOLUME_VAR: &str = "VOLUME";
pub const ASSETS_PATH_VAR: &str = "ASSETS_PATH";
pub const RETRIGGER_DELAY_VAR: &str = "RETRIGGER_DELAY_MS";

/// Validated board configuration
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeConfig {
    /// Playback volume in `0.0..=1.0`
    pub volume: f32,
    /// Directory holding the selectable clips
    pub assets_path: String,
    /// How long the retrigger gate stays closed after a play decision
    pub retrigger_delay_ms: u64,
}

impl RuntimeConfig {
    /// Load from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load from an arbitrary variable lookup (the environment in production,
    /// a map in tests)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut violations = Vec::new();

        let volume = match lookup(VOLUME_VAR) {
            None => {
                violations.push(FieldViolation::missing(VOLUME_VAR));
                None
            }
            Some(raw) => match raw.trim().parse::<f32>() {
                Ok(v) if v.is_finite() && (0.0..=1.0).contains(&v) => Some(v),
                Ok(_) => {
                    violations.push(FieldViolation::new(
                        VOLUME_VAR,
                        format!("must be between 0 and 1, got {}", raw.trim()),
                    ));
                    None
                }
                Err(_) => {
                    violations.push(FieldViolation::new(
                        VOLUME_VAR,
                        format!("must be a number, got {:?}", raw),
                    ));
                    None
                }
            },
        };

        let assets_path = match lookup(ASSETS_PATH_VAR) {
            None => {
                violations.push(FieldViolation::missing(ASSETS_PATH_VAR));
                None
            }
            Some(raw) if raw.is_empty() => {
                violations.push(FieldViolation::new(ASSETS_PATH_VAR, "must not be empty"));
                None
            }
            Some(raw) => Some(raw),
        };

        let retrigger_delay_ms = match lookup(RETRIGGER_DELAY_VAR) {
            None => {
                violations.push(FieldViolation::missing(RETRIGGER_DELAY_VAR));
                None
            }
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(ms) => Some(ms),
                Err(_) => {
                    violations.push(FieldViolation::new(
                        RETRIGGER_DELAY_VAR,
                        format!("must be a non-negative integer, got {:?}", raw),
                    ));
                    None
                }
            },
        };

        match (volume, assets_path, retrigger_delay_ms) {
            (Some(volume), Some(assets_path), Some(retrigger_delay_ms))
                if violations.is_empty() =>
            {
                Ok(Self {
                    volume,
                    assets_path,
                    retrigger_delay_ms,
                })
            }
            _ => Err(ConfigError { violations }),
        }
    }

    /// Full path of a clip picked from the assets directory
    ///
    /// Trailing separators on `ASSETS_PATH` are dropped so `/sounds/` and
    /// `/sounds` produce the same binding.
    pub fn clip_path(&self, file_name: &str) -> String {
        let base = self.assets_path.trim_end_matches('/');
        format!("{}/{}", base, file_name)
    }
}

/// Load a `.env` file into the process environment
///
/// With no path, `.env` is looked up from the working directory upwards.
/// Variables already set in the environment win over the file. Returns the
/// file that was loaded; a missing file is not an error.
pub fn load_env_file(path: Option<&Path>) -> Option<PathBuf> {
    let result = match path {
        Some(path) => dotenvy::from_path(path).map(|()| path.to_path_buf()),
        None => dotenvy::dotenv(),
    };

    match result {
        Ok(loaded) => {
            tracing::debug!("Loaded environment from {}", loaded.display());
            Some(loaded)
        }
        Err(e) if e.not_found() => None,
        Err(e) => {
            tracing::warn!("Ignoring unreadable .env file: {}", e);
            None
        }
    }
}

/// A single rejected configuration variable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl FieldViolation {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    fn missing(field: &'static str) -> Self {
        Self::new(field, "is not set")
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.message)
    }
}

/// Invalid or missing runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub violations: Vec<FieldViolation>,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid configuration: ")?;
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigError {}
