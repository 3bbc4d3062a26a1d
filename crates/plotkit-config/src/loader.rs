//! Configuration loading utilities.

use crate::Settings;
use std::env;
use std::path::Path;
use thiserror::Error;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading the configuration file.
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("Failed to parse YAML configuration: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Configuration validation error.
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    /// Environment variable parsing error.
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        /// The variable that failed to parse.
        var: String,
        /// The underlying parse failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for plotkit_common::PlotError {
    fn from(err: ConfigError) -> Self {
        plotkit_common::PlotError::config(err.to_string())
    }
}

/// Configuration loader for the application.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file with environment variable
    /// overrides.
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Settings, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut settings: Settings = serde_yaml::from_str(&content)?;

        Self::apply_env_overrides(&mut settings)?;
        settings.validate_all()?;

        tracing::debug!(path = %path.as_ref().display(), "loaded configuration file");
        Ok(settings)
    }

    /// Load configuration from the default locations.
    ///
    /// Honors `PLOTKIT_CONFIG_PATH`, then `plotkit.yaml` / `plotkit.yml`
    /// in the working directory, then built-in defaults with environment
    /// overrides.
    pub fn load() -> plotkit_common::Result<Settings> {
        let settings = if let Ok(config_path) = env::var("PLOTKIT_CONFIG_PATH") {
            Self::load_config(&config_path)?
        } else if Path::new("plotkit.yaml").exists() {
            Self::load_config("plotkit.yaml")?
        } else if Path::new("plotkit.yml").exists() {
            Self::load_config("plotkit.yml")?
        } else {
            let mut settings = Settings::default();
            Self::apply_env_overrides(&mut settings)?;
            settings
                .validate_all()
                .map_err(ConfigError::ValidationError)?;
            settings
        };

        Ok(settings)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> plotkit_common::Result<Settings> {
        Ok(Self::load_config(path)?)
    }

    /// Apply environment variable overrides to the configuration.
    fn apply_env_overrides(settings: &mut Settings) -> Result<(), ConfigError> {
        // Render overrides
        if let Ok(format) = env::var("PLOTKIT_FORMAT") {
            settings.render.format = Some(format);
        }

        // Validation overrides
        if let Ok(policy) = env::var("PLOTKIT_ON_DUPLICATE") {
            settings.validation.on_duplicate_node = policy;
        }

        if let Ok(require) = env::var("PLOTKIT_REQUIRE_ENDPOINTS") {
            settings.validation.require_declared_endpoints =
                require.parse().map_err(|e| ConfigError::EnvParseError {
                    var: "PLOTKIT_REQUIRE_ENDPOINTS".to_string(),
                    source: Box::new(e),
                })?;
        }

        if let Ok(allow) = env::var("PLOTKIT_ALLOW_SELF_LOOPS") {
            settings.validation.allow_self_loops =
                allow.parse().map_err(|e| ConfigError::EnvParseError {
                    var: "PLOTKIT_ALLOW_SELF_LOOPS".to_string(),
                    source: Box::new(e),
                })?;
        }

        // Logging overrides
        if let Ok(level) = env::var("PLOTKIT_LOG_LEVEL") {
            settings.logging.level = level;
        }

        if let Ok(colored) = env::var("PLOTKIT_LOG_COLORED") {
            settings.logging.colored =
                colored.parse().map_err(|e| ConfigError::EnvParseError {
                    var: "PLOTKIT_LOG_COLORED".to_string(),
                    source: Box::new(e),
                })?;
        }

        if let Ok(file) = env::var("PLOTKIT_LOG_FILE") {
            settings.logging.file = Some(file);
        }

        Ok(())
    }
}
