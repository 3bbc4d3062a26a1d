//! Utility functions used across the Plotkit workspace.

use crate::{PlotError, Result, Timestamp};
use chrono::Utc;

/// Get the current timestamp.
pub fn now() -> Timestamp {
    Utc::now()
}

/// Format a timestamp for display in rendered artifacts and logs.
pub fn format_timestamp(timestamp: &Timestamp) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Validate that a string is not empty after trimming.
pub fn validate_non_empty(value: &str, field_name: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(PlotError::validation_field(
            format!("{field_name} cannot be empty"),
            field_name,
        ))
    } else {
        Ok(trimmed.to_string())
    }
}
