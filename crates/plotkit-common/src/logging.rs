//! Structured logging infrastructure for Plotkit.

use crate::error::Result;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Configuration for the logging system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
    /// Whether to enable ANSI colors on terminal output.
    pub colored: bool,
    /// Whether to include timestamps.
    pub include_timestamps: bool,
    /// Whether to include file and line information.
    pub include_location: bool,
    /// Optional file path for log output.
    pub file_path: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            colored: true,
            include_timestamps: true,
            include_location: false,
            file_path: None,
        }
    }
}

/// Initialize the tracing subscriber with the given configuration.
///
/// Must be called at most once per process; subsequent calls fail inside
/// `tracing` because a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let env_filter =
        EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    let layer = fmt::layer()
        .with_target(true)
        .with_file(config.include_location)
        .with_line_number(config.include_location);

    if config.include_timestamps {
        if let Some(file_path) = &config.file_path {
            let file = open_log_file(file_path)?;
            registry
                .with(layer.with_ansi(false).with_writer(file))
                .init();
        } else {
            registry.with(layer.with_ansi(config.colored)).init();
        }
    } else {
        let layer = layer.without_time();
        if let Some(file_path) = &config.file_path {
            let file = open_log_file(file_path)?;
            registry
                .with(layer.with_ansi(false).with_writer(file))
                .init();
        } else {
            registry.with(layer.with_ansi(config.colored)).init();
        }
    }

    Ok(())
}

/// Initialize logging with default configuration.
pub fn init_default_logging() -> Result<()> {
    init_logging(&LoggingConfig::default())
}

fn open_log_file(path: &str) -> Result<std::fs::File> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    Ok(file)
}
