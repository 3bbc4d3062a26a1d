//! Validation utilities and regex patterns for configuration values.

use regex::Regex;
use std::sync::LazyLock;
use validator::ValidationError;

/// Regex pattern for validating tracing log level names.
pub static LOG_LEVEL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(trace|debug|info|warn|error)$").expect("Invalid log level regex pattern")
});

/// Backend format names known to the registry.
pub const FORMAT_NAMES: [&str; 2] = ["dot", "text"];

/// Duplicate-node policy names known to the backends.
pub const DUPLICATE_POLICY_NAMES: [&str; 3] = ["reject", "overwrite", "ignore"];

/// Validate a backend format name.
pub fn validate_format_name(name: &str) -> Result<(), ValidationError> {
    if FORMAT_NAMES.contains(&name.to_ascii_lowercase().as_str()) {
        Ok(())
    } else {
        Err(ValidationError::new("unknown_format"))
    }
}

/// Validate a duplicate-node policy name.
pub fn validate_duplicate_policy(name: &str) -> Result<(), ValidationError> {
    if DUPLICATE_POLICY_NAMES.contains(&name.to_ascii_lowercase().as_str()) {
        Ok(())
    } else {
        Err(ValidationError::new("unknown_duplicate_policy"))
    }
}

/// Validate a log level name.
pub fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    if LOG_LEVEL_REGEX.is_match(level) {
        Ok(())
    } else {
        Err(ValidationError::new("unknown_log_level"))
    }
}
