//! Common type definitions shared across the Plotkit workspace.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Timestamp type used throughout the workspace.
pub type Timestamp = DateTime<Utc>;

/// Identifier of a node within a single graph.
///
/// Callers supply either an integer or a string; uniqueness is enforced
/// per graph by the accumulation store, not by this type. The serde
/// representation is untagged so manifests can write bare integers or
/// strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeId {
    /// Integer identifier.
    Int(i64),
    /// String identifier.
    Text(String),
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "{value}"),
        }
    }
}

impl From<i64> for NodeId {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
