//! Logging infrastructure
//!
//! Everything the board tells the user (bindings loaded, clip played, rebind
//! cancelled) goes through `tracing`, so the same lines end up on the console
//! and in the log file.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=padboard::update=trace` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/padboard/logs/padboard.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Console filter used when RUST_LOG is not set
const DEFAULT_CONSOLE_FILTER: &str = "padboard=info";

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG env var for filtering and falls back to
/// `padboard=info`, which is what surfaces the board's user-facing messages.
///
/// File logging writes to `~/.config/padboard/logs/padboard.log` with daily rotation.
pub fn init() {
    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_CONSOLE_FILTER));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "padboard.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}
