//! Application configuration structures.

use plotkit_common::LoggingConfig;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Main application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Rendering settings.
    pub render: RenderSettings,

    /// Graph validation settings.
    pub validation: ValidationSettings,

    /// Logging settings.
    pub logging: LoggingSettings,
}

impl Settings {
    /// Validate every section of the configuration.
    pub fn validate_all(&self) -> Result<(), validator::ValidationErrors> {
        self.render.validate()?;
        self.validation.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Rendering configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RenderSettings {
    /// Backend to use regardless of the output file extension.
    /// When unset, the backend is picked from the extension.
    #[validate(custom(function = "crate::validation::validate_format_name", message = "Unknown backend format"))]
    pub format: Option<String>,
}

/// Graph validation configuration, mirroring the backend policy choices.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ValidationSettings {
    /// Handling of duplicate node identifiers: "reject", "overwrite" or
    /// "ignore".
    #[validate(custom(function = "crate::validation::validate_duplicate_policy", message = "Unknown duplicate-node policy"))]
    pub on_duplicate_node: String,

    /// When true, every edge endpoint must name a declared node.
    pub require_declared_endpoints: bool,

    /// Whether an edge may connect a node to itself.
    pub allow_self_loops: bool,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            on_duplicate_node: "reject".to_string(),
            require_declared_endpoints: false,
            allow_self_loops: true,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level filter (e.g., "info", "debug", "trace").
    #[validate(custom(function = "crate::validation::validate_log_level", message = "Unknown log level"))]
    pub level: String,

    /// Whether to enable ANSI colors on terminal output.
    pub colored: bool,

    /// Whether to include timestamps.
    pub include_timestamps: bool,

    /// Whether to include file and line information.
    pub include_location: bool,

    /// Optional file path for log output.
    pub file: Option<String>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            colored: true,
            include_timestamps: true,
            include_location: false,
            file: None,
        }
    }
}

impl LoggingSettings {
    /// Convert into the common logging configuration.
    pub fn to_logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.level.clone(),
            colored: self.colored,
            include_timestamps: self.include_timestamps,
            include_location: self.include_location,
            file_path: self.file.clone(),
        }
    }
}
