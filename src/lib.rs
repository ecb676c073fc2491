//! padboard - Elm-style MIDI pad soundboard
//!
//! This crate provides the core types and logic for a soundboard that plays
//! an audio clip per controller key and lets the user rebind keys from the
//! terminal, following the Elm Architecture pattern.

pub mod assets;
pub mod bindings;
pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod error;
pub mod gate;
pub mod messages;
pub mod midi;
pub mod model;
pub mod player;
pub mod rebind;
pub mod runtime;
pub mod selector;
pub mod tracing;
pub mod tracker;
pub mod update;

// Re-export commonly used types
pub use bindings::{Binding, BindingStore, StoreError, StoreFile};
pub use commands::Cmd;
pub use config::RuntimeConfig;
pub use error::FatalError;
pub use messages::Msg;
pub use model::{BoardModel, BoardState};
pub use runtime::{Collaborators, Runtime};
