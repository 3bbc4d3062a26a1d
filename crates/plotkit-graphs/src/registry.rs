//! Backend registry: format name / file extension to plotter dispatch.

use crate::dot::DotPlotter;
use crate::policy::GraphPolicy;
use crate::text::TextPlotter;
use crate::traits::Plotter;
use plotkit_common::{PlotError, Result};
use std::path::Path;

/// The reference backends this crate packages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotterKind {
    /// Graphviz DOT output (`.dot`, `.gv`).
    Dot,
    /// Plain-text listing output (`.txt`, `.text`).
    Text,
}

impl PlotterKind {
    /// Parse a backend from its configuration name.
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "dot" => Ok(Self::Dot),
            "text" => Ok(Self::Text),
            other => Err(PlotError::unsupported_format(other)),
        }
    }

    /// Pick a backend from an output path's extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "dot" | "gv" => Ok(Self::Dot),
            "txt" | "text" => Ok(Self::Text),
            other => Err(PlotError::unsupported_format(other)),
        }
    }

    /// The configuration name of this backend.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dot => "dot",
            Self::Text => "text",
        }
    }

    /// Instantiate the backend with the given validation policy.
    pub fn create(self, policy: GraphPolicy) -> Box<dyn Plotter> {
        match self {
            Self::Dot => Box::new(DotPlotter::with_policy(policy)),
            Self::Text => Box::new(TextPlotter::with_policy(policy)),
        }
    }
}
