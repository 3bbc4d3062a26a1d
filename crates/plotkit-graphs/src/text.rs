//! Plain-text listing backend.
//!
//! A human-readable reference rendering: one block per accumulated
//! graph, nodes and edges listed in insertion order.

use crate::model::{check_graphs_renderable, GraphModel};
use crate::policy::GraphPolicy;
use crate::traits::{Graph, Plotter};
use plotkit_common::{utils, Result};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Plotter that renders the accumulated graphs as a plain-text listing.
#[derive(Debug, Default)]
pub struct TextPlotter {
    graphs: Vec<GraphModel>,
    policy: GraphPolicy,
}

impl TextPlotter {
    /// Create a plotter with the default validation policy.
    pub fn new() -> Self {
        Self::with_policy(GraphPolicy::default())
    }

    /// Create a plotter whose graphs validate under `policy`.
    pub fn with_policy(policy: GraphPolicy) -> Self {
        Self {
            graphs: Vec::new(),
            policy,
        }
    }

    /// Number of graphs accumulated so far.
    pub fn graph_count(&self) -> usize {
        self.graphs.len()
    }

    /// The accumulated graphs, in creation order.
    pub fn graphs(&self) -> &[GraphModel] {
        &self.graphs
    }

    /// Serialize the accumulated graphs to the listing format.
    pub fn emit(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "# Generated by plotkit at {}",
            utils::format_timestamp(&utils::now())
        );
        for graph in &self.graphs {
            let _ = writeln!(out, "graph \"{}\"", graph.name());
            for node in graph.nodes() {
                let _ = writeln!(
                    out,
                    "  node {} [{}] {}",
                    node.id, node.node_type, node.detail
                );
            }
            for edge in graph.edges() {
                let _ = writeln!(out, "  edge {} -> {}", edge.start, edge.end);
            }
        }
        out
    }
}

impl Plotter for TextPlotter {
    fn create_graph(&mut self, name: &str) -> Result<&mut dyn Graph> {
        let slot = self.graphs.len();
        self.graphs.push(GraphModel::new(name, self.policy));
        tracing::debug!(graph = name, "created text graph builder");
        Ok(&mut self.graphs[slot])
    }

    fn render(&self, filename: &Path) -> Result<()> {
        check_graphs_renderable(&self.graphs)?;
        fs::write(filename, self.emit())?;
        tracing::info!(
            graphs = self.graphs.len(),
            "rendered text listing to {}",
            filename.display()
        );
        Ok(())
    }
}
