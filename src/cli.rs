//! Command-line argument parsing
//!
//! Runtime settings (volume, assets directory, retrigger delay) come from the
//! environment; the flags here only pick files and devices or run one-shot
//! inspection commands.

use clap::Parser;
use std::path::PathBuf;

use crate::config_paths;

/// A MIDI pad soundboard
#[derive(Parser, Debug)]
#[command(name = "padboard", version, about = "A MIDI pad soundboard")]
pub struct CliArgs {
    /// Bindings file to use instead of the one in the config directory
    #[arg(long, value_name = "PATH")]
    pub bindings: Option<PathBuf>,

    /// Index of the MIDI input port to listen on
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub port: usize,

    /// Print the available MIDI input ports and exit
    #[arg(long)]
    pub list_ports: bool,

    /// Print the current bindings and exit
    #[arg(long)]
    pub show_bindings: bool,
}

impl CliArgs {
    /// Bindings file location, creating the config directory when defaulted
    pub fn bindings_path(&self) -> Result<PathBuf, String> {
        match &self.bindings {
            Some(path) => Ok(path.clone()),
            None => {
                config_paths::ensure_config_dir()?;
                config_paths::bindings_file()
                    .ok_or_else(|| "Could not determine config directory".to_string())
            }
        }
    }
}
