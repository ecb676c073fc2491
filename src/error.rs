//! Startup and runtime failures that end the process
//!
//! Problems the user can fix by editing something (the environment, the
//! bindings file) exit with code 0 after explaining what to change. Anything
//! else is unexpected and exits with 1.

use std::fmt;
use std::process::ExitCode;

use crate::bindings::StoreError;
use crate::config::ConfigError;
use crate::player::PlaybackError;

#[derive(Debug)]
pub enum FatalError {
    Config(ConfigError),
    Store(StoreError),
    /// MIDI subsystem or device failure
    Device(anyhow::Error),
    Playback(PlaybackError),
    /// Config or log directories could not be prepared
    Setup(String),
}

impl FatalError {
    /// Whether the user can fix this without a code change
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Config(_) => true,
            Self::Store(e) => e.is_corrupt(),
            Self::Device(_) | Self::Playback(_) | Self::Setup(_) => false,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.is_expected() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }

    /// One-line advice shown before the details
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Config(_) => "Invalid configuration, please check your environment or .env file!",
            Self::Store(e) if e.is_corrupt() => {
                "Your save file seems to be corrupt, either delete it or fix it."
            }
            Self::Store(_) => "Could not access your save file.",
            Self::Device(_) => "MIDI input is unavailable.",
            Self::Playback(PlaybackError::UnsupportedPlatform(_)) => {
                "Your OS is not supported, padboard runs on macOS, Windows and Linux."
            }
            Self::Playback(_) => "Could not start the audio player.",
            Self::Setup(_) => "Could not prepare the padboard config directory.",
        }
    }
}

impl fmt::Display for FatalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "{}", e),
            Self::Store(e) => write!(f, "{}", e),
            Self::Device(e) => write!(f, "{:#}", e),
            Self::Playback(e) => write!(f, "{}", e),
            Self::Setup(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for FatalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Store(e) => Some(e),
            Self::Device(e) => Some(&**e),
            Self::Playback(e) => Some(e),
            Self::Setup(_) => None,
        }
    }
}

impl From<ConfigError> for FatalError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<StoreError> for FatalError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

impl From<anyhow::Error> for FatalError {
    fn from(e: anyhow::Error) -> Self {
        Self::Device(e)
    }
}

impl From<PlaybackError> for FatalError {
    fn from(e: PlaybackError) -> Self {
        Self::Playback(e)
    }
}
