//! Validation policies for graph accumulation.
//!
//! The capability contract leaves duplicate identifiers, undeclared edge
//! endpoints and self-loops to the implementation. Rather than guessing,
//! the reference backends surface each choice as explicit configuration.

use serde::{Deserialize, Serialize};

/// What to do when a node is added with an identifier the graph already
/// contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateNodePolicy {
    /// Fail with a duplicate-node error.
    Reject,
    /// Replace the previously stored node data.
    Overwrite,
    /// Keep the first node, silently dropping the new data.
    Ignore,
}

impl DuplicateNodePolicy {
    /// Parse a policy from its configuration name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "reject" => Some(Self::Reject),
            "overwrite" => Some(Self::Overwrite),
            "ignore" => Some(Self::Ignore),
            _ => None,
        }
    }

    /// The configuration name of this policy.
    pub fn name(self) -> &'static str {
        match self {
            Self::Reject => "reject",
            Self::Overwrite => "overwrite",
            Self::Ignore => "ignore",
        }
    }
}

/// The validation choices a graph enforces while accumulating structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphPolicy {
    /// Handling of duplicate node identifiers.
    pub on_duplicate_node: DuplicateNodePolicy,
    /// When true, every edge endpoint must name a declared node by the
    /// time the graph is rendered.
    pub require_declared_endpoints: bool,
    /// Whether an edge may connect a node to itself.
    pub allow_self_loops: bool,
}

impl Default for GraphPolicy {
    fn default() -> Self {
        Self {
            on_duplicate_node: DuplicateNodePolicy::Reject,
            require_declared_endpoints: false,
            allow_self_loops: true,
        }
    }
}

impl GraphPolicy {
    /// The strictest policy: duplicates rejected, endpoints must be
    /// declared, no self-loops.
    pub fn strict() -> Self {
        Self {
            on_duplicate_node: DuplicateNodePolicy::Reject,
            require_declared_endpoints: true,
            allow_self_loops: false,
        }
    }
}
