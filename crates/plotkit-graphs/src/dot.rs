//! Graphviz DOT backend.
//!
//! Emits one `digraph` block per accumulated graph. Layout is delegated
//! to external Graphviz tooling; this backend only serializes structure.

use crate::model::{check_graphs_renderable, GraphModel};
use crate::policy::GraphPolicy;
use crate::traits::{Graph, Plotter};
use plotkit_common::{utils, Result};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Plotter that renders the accumulated graphs as Graphviz DOT text.
#[derive(Debug, Default)]
pub struct DotPlotter {
    graphs: Vec<GraphModel>,
    policy: GraphPolicy,
}

impl DotPlotter {
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

    /// Serialize the accumulated graphs to DOT text.
    pub fn emit(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "// Generated by plotkit at {}",
            utils::format_timestamp(&utils::now())
        );
        for graph in &self.graphs {
            let _ = writeln!(out, "digraph \"{}\" {{", escape(graph.name()));
            for node in graph.nodes() {
                let _ = writeln!(
                    out,
                    "  \"{}\" [label=\"{}\", tooltip=\"{}\"];",
                    escape(&node.id.to_string()),
                    escape(&node.node_type),
                    escape(&node.detail)
                );
            }
            for edge in graph.edges() {
                let _ = writeln!(
                    out,
                    "  \"{}\" -> \"{}\";",
                    escape(&edge.start.to_string()),
                    escape(&edge.end.to_string())
                );
            }
            let _ = writeln!(out, "}}");
        }
        out
    }
}

impl Plotter for DotPlotter {
    fn create_graph(&mut self, name: &str) -> Result<&mut dyn Graph> {
        let slot = self.graphs.len();
        self.graphs.push(GraphModel::new(name, self.policy));
        tracing::debug!(graph = name, "created DOT graph builder");
        Ok(&mut self.graphs[slot])
    }

    fn render(&self, filename: &Path) -> Result<()> {
        check_graphs_renderable(&self.graphs)?;
        fs::write(filename, self.emit())?;
        tracing::info!(
            graphs = self.graphs.len(),
            "rendered DOT output to {}",
            filename.display()
        );
        Ok(())
    }
}

/// Escape a value for use inside a double-quoted DOT string.
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out
}
