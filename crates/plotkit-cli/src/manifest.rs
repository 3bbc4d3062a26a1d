//! Declarative graph manifests.
//!
//! A manifest lists one or more graphs with their nodes and edges.
//! Loading dispatches on the file extension: YAML, JSON or TOML.

use plotkit_common::{bail, NodeId, PlotError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A manifest file: the set of graphs to build and render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// The graphs described by this manifest.
    #[serde(default)]
    pub graphs: Vec<ManifestGraph>,
}

/// One graph description inside a manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestGraph {
    /// Human-readable name of the graph.
    pub name: String,
    /// Nodes, in the order they are added.
    #[serde(default)]
    pub nodes: Vec<ManifestNode>,
    /// Edges, in the order they are added.
    #[serde(default)]
    pub edges: Vec<ManifestEdge>,
}

/// One node entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestNode {
    /// Node identifier, an integer or a string.
    pub id: NodeId,
    /// Free-form category label.
    #[serde(rename = "type", default)]
    pub node_type: String,
    /// Free-form description.
    #[serde(default)]
    pub detail: String,
}

/// One directed edge entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestEdge {
    /// Identifier of the starting node.
    pub from: NodeId,
    /// Identifier of the ending node.
    pub to: NodeId,
}

/// Load a manifest from `path`, dispatching the parser on the file
/// extension.
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    let Some(extension) = path.extension().and_then(|ext| ext.to_str()) else {
        bail!("Manifest path has no file extension: {}", path.display());
    };

    let raw = fs::read_to_string(path)?;
    let manifest = match extension.to_ascii_lowercase().as_str() {
        "yaml" | "yml" => serde_yaml::from_str(&raw)
            .map_err(|e| PlotError::with_source("Failed to parse YAML manifest", e))?,
        "json" => serde_json::from_str(&raw)?,
        "toml" => toml::from_str(&raw)
            .map_err(|e| PlotError::with_source("Failed to parse TOML manifest", e))?,
        other => return Err(PlotError::unsupported_format(other)),
    };

    Ok(manifest)
}
