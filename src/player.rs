//! Clip playback through the platform's command-line player
//!
//! | Platform | Command |
//! |----------|---------|
//! | macOS    | `afplay -v <volume> <path>` |
//! | Windows  | `powershell -c (New-Object Media.SoundPlayer '<path>').PlaySync();` |
//! | Linux    | `mpg123 -q -f <volume × 32768> <path>` |
//!
//! Any other OS is unsupported, which is checked once at startup.

use std::fmt;
use std::process::Command;

/// Errors that can occur when invoking the player
#[derive(Debug, Clone)]
pub enum PlaybackError {
    /// No player is known for this OS
    UnsupportedPlatform(String),
    /// The player process could not be started
    Spawn { program: String, message: String },
    /// The player ran but exited unsuccessfully
    Failed { program: String, status: String },
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedPlatform(os) => write!(f, "unsupported OS: {}", os),
            Self::Spawn { program, message } => {
                write!(f, "failed to start {}: {}", program, message)
            }
            Self::Failed { program, status } => write!(f, "{} exited with {}", program, status),
        }
    }
}

impl std::error::Error for PlaybackError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Windows,
    Linux,
    Other(&'static str),
}

impl Platform {
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    pub fn from_os(os: &'static str) -> Self {
        match os {
            "macos" => Self::MacOs,
            "windows" => Self::Windows,
            "linux" => Self::Linux,
            other => Self::Other(other),
        }
    }
}

/// A resolved player invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl PlayerCommand {
    /// Look up the player invocation for a platform
    pub fn resolve(platform: Platform, path: &str, volume: f32) -> Result<Self, PlaybackError> {
        let (program, args) = match platform {
            Platform::MacOs => (
                "afplay",
                vec!["-v".to_string(), volume.to_string(), path.to_string()],
            ),
            Platform::Windows => (
                "powershell",
                vec![
                    "-c".to_string(),
                    format!(
                        "(New-Object Media.SoundPlayer '{}').PlaySync();",
                        powershell_quote(path)
                    ),
                ],
            ),
            Platform::Linux => {
                let scale = (volume * 32768.0).round() as u32;
                (
                    "mpg123",
                    vec![
                        "-q".to_string(),
                        "-f".to_string(),
                        scale.to_string(),
                        path.to_string(),
                    ],
                )
            }
            Platform::Other(os) => return Err(PlaybackError::UnsupportedPlatform(os.to_string())),
        };

        Ok(Self {
            program: program.to_string(),
            args,
        })
    }
}

/// Escape a path for a single-quoted PowerShell string, where only `'` is
/// special and is written twice
fn powershell_quote(path: &str) -> String {
    path.replace('\'', "''")
}

/// Plays a clip and reports how the player exited
///
/// Implementations may block until playback ends; the runtime calls this on
/// a detached thread.
pub trait Player: Send + Sync {
    fn play(&self, path: &str, volume: f32) -> Result<(), PlaybackError>;
}

/// Shells out to the platform player
#[derive(Debug, Clone, Copy)]
pub struct SystemPlayer {
    platform: Platform,
}

impl SystemPlayer {
    /// Player for the running OS, or `UnsupportedPlatform`
    pub fn for_current_platform() -> Result<Self, PlaybackError> {
        Self::for_platform(Platform::current())
    }

    pub fn for_platform(platform: Platform) -> Result<Self, PlaybackError> {
        // Resolve once up front so an unsupported OS fails at startup
        PlayerCommand::resolve(platform, "", 1.0)?;
        Ok(Self { platform })
    }
}

impl Player for SystemPlayer {
    fn play(&self, path: &str, volume: f32) -> Result<(), PlaybackError> {
        let command = PlayerCommand::resolve(self.platform, path, volume)?;
        tracing::debug!("Running {} {:?}", command.program, command.args);

        let status = Command::new(&command.program)
            .args(&command.args)
            .status()
            .map_err(|e| PlaybackError::Spawn {
                program: command.program.clone(),
                message: e.to_string(),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(PlaybackError::Failed {
                program: command.program,
                status: status.to_string(),
            })
        }
    }
}
