//! Error types and utilities for Plotkit.

use crate::types::NodeId;
use thiserror::Error;

/// Result type alias for Plotkit operations.
pub type Result<T> = std::result::Result<T, PlotError>;

/// Main error type for Plotkit operations.
#[derive(Error, Debug)]
pub enum PlotError {
    /// A node was added with an identifier the graph already contains,
    /// under a policy that rejects duplicates.
    #[error("Duplicate node identifier `{id}` in graph `{graph}`")]
    DuplicateNode {
        /// Name of the graph the node was added to.
        graph: String,
        /// The conflicting identifier.
        id: NodeId,
    },

    /// An edge references an identifier no node declares, under a policy
    /// that requires declared endpoints.
    #[error("Edge endpoint `{id}` is not a declared node in graph `{graph}`")]
    DanglingEdge {
        /// Name of the graph the edge belongs to.
        graph: String,
        /// The undeclared endpoint identifier.
        id: NodeId,
    },

    /// An edge connects a node to itself under a policy that forbids
    /// self-loops.
    #[error("Self-loop on node `{id}` is not permitted in graph `{graph}`")]
    SelfLoop {
        /// Name of the graph the edge belongs to.
        graph: String,
        /// The looping identifier.
        id: NodeId,
    },

    /// No backend handles the requested output format.
    #[error("Unsupported output format `{format}`")]
    UnsupportedFormat {
        /// The extension or format name that failed to dispatch.
        format: String,
    },

    /// Rendering related errors.
    #[error("Render error: {message}")]
    Render {
        /// Human-readable description.
        message: String,
        /// Underlying cause, if any.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration related errors.
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description.
        message: String,
        /// Underlying cause, if any.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation errors for user input or settings.
    #[error("Validation error: {message}")]
    Validation {
        /// Human-readable description.
        message: String,
        /// Offending field, if known.
        field: Option<String>,
    },

    /// I/O related errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error with custom message.
    #[error("{message}")]
    Generic {
        /// Human-readable description.
        message: String,
        /// Underlying cause, if any.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PlotError {
    /// Create a new generic error with a custom message.
    pub fn new(msg: impl Into<String>) -> Self {
        Self::Generic {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new generic error with a custom message and source.
    pub fn with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Generic {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new render error.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new render error with source.
    pub fn render_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Render {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source.
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: None,
        }
    }

    /// Create a new validation error with field name.
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// Create a duplicate-node error.
    pub fn duplicate_node(graph: impl Into<String>, id: NodeId) -> Self {
        Self::DuplicateNode {
            graph: graph.into(),
            id,
        }
    }

    /// Create a dangling-edge error.
    pub fn dangling_edge(graph: impl Into<String>, id: NodeId) -> Self {
        Self::DanglingEdge {
            graph: graph.into(),
            id,
        }
    }

    /// Create a self-loop error.
    pub fn self_loop(graph: impl Into<String>, id: NodeId) -> Self {
        Self::SelfLoop {
            graph: graph.into(),
            id,
        }
    }

    /// Create an unsupported-format error.
    pub fn unsupported_format(format: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            format: format.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{error::Error, io};

    #[test]
    fn test_error_creation() {
        let error = PlotError::new("test message");
        assert!(error.to_string().contains("test message"));

        let render_error = PlotError::render("backend failed");
        assert!(render_error.to_string().contains("Render error"));
        assert!(render_error.to_string().contains("backend failed"));

        let config_error = PlotError::config("config issue");
        assert!(config_error.to_string().contains("Configuration error"));

        let validation_error = PlotError::validation_field("unknown policy", "on_duplicate_node");
        assert!(validation_error.to_string().contains("Validation error"));
        assert!(validation_error.to_string().contains("unknown policy"));
    }

    #[test]
    fn test_domain_error_display() {
        let error = PlotError::duplicate_node("g1", NodeId::from("a"));
        assert_eq!(
            error.to_string(),
            "Duplicate node identifier `a` in graph `g1`"
        );

        let error = PlotError::dangling_edge("g1", NodeId::from(7));
        assert_eq!(
            error.to_string(),
            "Edge endpoint `7` is not a declared node in graph `g1`"
        );

        let error = PlotError::self_loop("g1", NodeId::from("a"));
        assert!(error.to_string().contains("Self-loop"));

        let error = PlotError::unsupported_format("png");
        assert_eq!(error.to_string(), "Unsupported output format `png`");
    }

    #[test]
    fn test_error_with_source() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let wrapped_error = PlotError::with_source("Failed to read manifest", io_error);

        assert!(wrapped_error.to_string().contains("Failed to read manifest"));
        assert!(wrapped_error.source().is_some());

        let render_error = PlotError::render_with_source(
            "DOT emission failed",
            io::Error::new(io::ErrorKind::PermissionDenied, "Access denied"),
        );
        assert!(render_error.to_string().contains("Render error"));
        assert!(render_error.source().is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let plot_error: PlotError = io_error.into();

        assert!(plot_error.to_string().contains("I/O error"));
        assert!(plot_error.source().is_some());
    }

    #[test]
    fn test_serde_error_conversion() {
        let invalid_json = r#"{"invalid": json}"#;
        let serde_error = serde_json::from_str::<serde_json::Value>(invalid_json).unwrap_err();
        let plot_error: PlotError = serde_error.into();

        assert!(plot_error.to_string().contains("Serialization error"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<String> {
            Ok("success".to_string())
        }

        fn returns_error() -> Result<String> {
            Err(PlotError::new("failure"))
        }

        assert!(returns_result().is_ok());
        assert!(returns_error().is_err());
    }

    #[test]
    fn test_error_chain_preservation() {
        let root_error = io::Error::new(io::ErrorKind::NotFound, "Root cause");
        let middle_error = PlotError::config_with_source("Middle layer", root_error);
        let top_error = PlotError::with_source("Top layer", middle_error);

        let mut current_error: &dyn std::error::Error = &top_error;
        let mut error_count = 0;

        while let Some(source) = current_error.source() {
            current_error = source;
            error_count += 1;
        }

        assert!(error_count >= 2);
    }
}
