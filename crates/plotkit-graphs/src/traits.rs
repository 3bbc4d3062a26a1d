//! Capability trait definitions for polymorphic graph backends.

use plotkit_common::{NodeId, Result};
use std::path::Path;

/// Capability for incrementally building a node/edge graph description.
///
/// Implement this trait to feed graph structure into a concrete backend.
/// The contract is append-only and write-only: there are no removal,
/// query or iteration operations. Whether a violation (duplicate
/// identifier, undeclared edge endpoint) fails or is tolerated is decided
/// by the implementation's policy and must be documented by it.
pub trait Graph {
    /// Add a node to the underlying graph.
    ///
    /// `node_id` is caller-supplied and identifies the node within this
    /// graph. `node_type` is a free-form category label; `node_detail` is
    /// a free-form description (rendered e.g. as a tooltip).
    fn node(&mut self, node_id: NodeId, node_type: &str, node_detail: &str) -> Result<()>;

    /// Add a directed edge from `id_start` to `id_end`.
    ///
    /// Multi-edges are permitted; self-loops are permitted unless the
    /// implementation's policy forbids them.
    fn edge(&mut self, id_start: NodeId, id_end: NodeId) -> Result<()>;
}

/// Capability that creates [`Graph`] builders and renders the accumulated
/// graphs to a file.
///
/// A plotter may accumulate any number of graphs; each `create_graph`
/// call yields a fresh, empty builder owned by the plotter. Names are
/// labels, not keys: two calls with the same name create two distinct
/// graphs.
pub trait Plotter {
    /// Create a new, empty graph with the given human-readable name and
    /// return a mutable handle to it.
    ///
    /// The handle borrows the plotter, so one builder is open at a time;
    /// previously created graphs stay accumulated until [`render`].
    ///
    /// [`render`]: Plotter::render
    fn create_graph(&mut self, name: &str) -> Result<&mut dyn Graph>;

    /// Render every accumulated graph to `filename`.
    ///
    /// The output format is implied by the implementation. I/O failures
    /// surface as [`PlotError::Io`](plotkit_common::PlotError::Io);
    /// rendering with no accumulated graphs is an error for the reference
    /// backends.
    fn render(&self, filename: &Path) -> Result<()>;
}
