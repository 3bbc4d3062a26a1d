//! In-memory accumulation store backing the reference backends.

use crate::policy::{DuplicateNodePolicy, GraphPolicy};
use crate::traits::Graph;
use plotkit_common::{NodeId, PlotError, Result};
use std::collections::HashMap;

/// A node as accumulated by [`GraphModel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Caller-supplied identifier, unique within the graph.
    pub id: NodeId,
    /// Free-form category label.
    pub node_type: String,
    /// Free-form description.
    pub detail: String,
}

/// A directed edge as accumulated by [`GraphModel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    /// Identifier of the starting node.
    pub start: NodeId,
    /// Identifier of the ending node.
    pub end: NodeId,
}

/// Named accumulation store for one graph description.
///
/// Nodes keep insertion order; an index over identifiers backs the
/// duplicate checks. The capability trait stays write-only, but the
/// concrete store exposes read accessors so backends can materialize
/// what was built.
#[derive(Debug, Clone)]
pub struct GraphModel {
    name: String,
    nodes: Vec<Node>,
    index: HashMap<NodeId, usize>,
    edges: Vec<Edge>,
    policy: GraphPolicy,
}

impl GraphModel {
    /// Create an empty graph with the given name and validation policy.
    pub fn new(name: impl Into<String>, policy: GraphPolicy) -> Self {
        Self {
            name: name.into(),
            nodes: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
            policy,
        }
    }

    /// The human-readable name this graph was created with.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The accumulated nodes, in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The accumulated edges, in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of accumulated nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of accumulated edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph holds no nodes and no edges.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Whether a node with the given identifier was declared.
    pub fn contains(&self, id: &NodeId) -> bool {
        self.index.contains_key(id)
    }

    /// The policy this graph validates under.
    pub fn policy(&self) -> GraphPolicy {
        self.policy
    }

    /// Edge endpoints that no node declares, deduplicated in first-seen
    /// order.
    pub fn undeclared_endpoints(&self) -> Vec<&NodeId> {
        let mut seen: Vec<&NodeId> = Vec::new();
        for edge in &self.edges {
            for id in [&edge.start, &edge.end] {
                if !self.contains(id) && !seen.contains(&id) {
                    seen.push(id);
                }
            }
        }
        seen
    }

    /// Check this graph against its render-time policy.
    ///
    /// Endpoint declarations are deferred to render because a node may
    /// legitimately be declared after an edge that references it.
    pub fn check_renderable(&self) -> Result<()> {
        if self.policy.require_declared_endpoints {
            if let Some(id) = self.undeclared_endpoints().first() {
                return Err(PlotError::dangling_edge(self.name.clone(), (*id).clone()));
            }
        }
        Ok(())
    }
}

impl Graph for GraphModel {
    fn node(&mut self, node_id: NodeId, node_type: &str, node_detail: &str) -> Result<()> {
        if let Some(&slot) = self.index.get(&node_id) {
            return match self.policy.on_duplicate_node {
                DuplicateNodePolicy::Reject => {
                    Err(PlotError::duplicate_node(self.name.clone(), node_id))
                }
                DuplicateNodePolicy::Overwrite => {
                    tracing::debug!(graph = %self.name, id = %node_id, "overwriting node");
                    self.nodes[slot] = Node {
                        id: node_id,
                        node_type: node_type.to_owned(),
                        detail: node_detail.to_owned(),
                    };
                    Ok(())
                }
                DuplicateNodePolicy::Ignore => {
                    tracing::debug!(graph = %self.name, id = %node_id, "ignoring duplicate node");
                    Ok(())
                }
            };
        }

        self.index.insert(node_id.clone(), self.nodes.len());
        self.nodes.push(Node {
            id: node_id,
            node_type: node_type.to_owned(),
            detail: node_detail.to_owned(),
        });
        Ok(())
    }

    fn edge(&mut self, id_start: NodeId, id_end: NodeId) -> Result<()> {
        if !self.policy.allow_self_loops && id_start == id_end {
            return Err(PlotError::self_loop(self.name.clone(), id_start));
        }
        self.edges.push(Edge {
            start: id_start,
            end: id_end,
        });
        Ok(())
    }
}

/// Render-time precondition shared by the reference backends: at least
/// one graph, each passing its own policy check.
pub(crate) fn check_graphs_renderable(graphs: &[GraphModel]) -> Result<()> {
    if graphs.is_empty() {
        return Err(PlotError::render("no graphs to render"));
    }
    for graph in graphs {
        graph.check_renderable()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use plotkit_common::PlotError;

    fn sample_graph(policy: GraphPolicy) -> GraphModel {
        GraphModel::new("g1", policy)
    }

    #[test]
    fn test_accumulates_nodes_and_edges() {
        let mut graph = sample_graph(GraphPolicy::default());
        graph.node(NodeId::from("a"), "op", "detail-a").unwrap();
        graph.node(NodeId::from("b"), "op", "detail-b").unwrap();
        graph.edge(NodeId::from("a"), NodeId::from("b")).unwrap();

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert!(!graph.is_empty());
        assert_eq!(graph.name(), "g1");
        assert_eq!(graph.policy(), GraphPolicy::default());
        assert!(graph.contains(&NodeId::from("a")));
        assert!(!graph.contains(&NodeId::from("c")));
        assert_eq!(graph.nodes()[0].detail, "detail-a");
        assert_eq!(graph.edges()[0].start, NodeId::from("a"));
    }

    #[test]
    fn test_mixed_identifier_kinds() {
        let mut graph = sample_graph(GraphPolicy::default());
        graph.node(NodeId::from(0), "input", "tensor").unwrap();
        graph.node(NodeId::from("relu"), "op", "activation").unwrap();
        graph.edge(NodeId::from(0), NodeId::from("relu")).unwrap();

        assert_eq!(graph.node_count(), 2);
        // "0" the string is a different identifier from 0 the integer
        assert!(!graph.contains(&NodeId::from("0")));
    }

    #[test]
    fn test_duplicate_node_reject() {
        let mut graph = sample_graph(GraphPolicy::default());
        graph.node(NodeId::from("a"), "op", "first").unwrap();

        let err = graph.node(NodeId::from("a"), "op", "second").unwrap_err();
        assert!(matches!(err, PlotError::DuplicateNode { .. }));
        assert_eq!(graph.nodes()[0].detail, "first");
    }

    #[test]
    fn test_duplicate_node_overwrite() {
        let policy = GraphPolicy {
            on_duplicate_node: DuplicateNodePolicy::Overwrite,
            ..GraphPolicy::default()
        };
        let mut graph = sample_graph(policy);
        graph.node(NodeId::from("a"), "op", "first").unwrap();
        graph.node(NodeId::from("a"), "op", "second").unwrap();

        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.nodes()[0].detail, "second");
    }

    #[test]
    fn test_duplicate_node_ignore() {
        let policy = GraphPolicy {
            on_duplicate_node: DuplicateNodePolicy::Ignore,
            ..GraphPolicy::default()
        };
        let mut graph = sample_graph(policy);
        graph.node(NodeId::from("a"), "op", "first").unwrap();
        graph.node(NodeId::from("a"), "op", "second").unwrap();

        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.nodes()[0].detail, "first");
    }

    #[test]
    fn test_multi_edges_permitted() {
        let mut graph = sample_graph(GraphPolicy::default());
        graph.node(NodeId::from("a"), "op", "").unwrap();
        graph.node(NodeId::from("b"), "op", "").unwrap();
        graph.edge(NodeId::from("a"), NodeId::from("b")).unwrap();
        graph.edge(NodeId::from("a"), NodeId::from("b")).unwrap();

        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_self_loop_policy() {
        let mut graph = sample_graph(GraphPolicy::default());
        graph.node(NodeId::from("a"), "op", "").unwrap();
        assert!(graph.edge(NodeId::from("a"), NodeId::from("a")).is_ok());

        let mut strict = sample_graph(GraphPolicy::strict());
        strict.node(NodeId::from("a"), "op", "").unwrap();
        let err = strict
            .edge(NodeId::from("a"), NodeId::from("a"))
            .unwrap_err();
        assert!(matches!(err, PlotError::SelfLoop { .. }));
    }

    #[test]
    fn test_undeclared_endpoints() {
        let mut graph = sample_graph(GraphPolicy::default());
        graph.node(NodeId::from("a"), "op", "").unwrap();
        graph.edge(NodeId::from("a"), NodeId::from("missing")).unwrap();
        graph.edge(NodeId::from("missing"), NodeId::from("also")).unwrap();

        let undeclared = graph.undeclared_endpoints();
        assert_eq!(
            undeclared,
            vec![&NodeId::from("missing"), &NodeId::from("also")]
        );
    }

    #[test]
    fn test_endpoint_declared_after_edge_is_fine() {
        let policy = GraphPolicy {
            require_declared_endpoints: true,
            ..GraphPolicy::default()
        };
        let mut graph = sample_graph(policy);
        graph.node(NodeId::from("a"), "op", "").unwrap();
        // edge first, endpoint declared afterwards
        graph.edge(NodeId::from("a"), NodeId::from("b")).unwrap();
        graph.node(NodeId::from("b"), "op", "").unwrap();

        assert!(graph.check_renderable().is_ok());
    }

    #[test]
    fn test_check_renderable_rejects_dangling_edge() {
        let policy = GraphPolicy {
            require_declared_endpoints: true,
            ..GraphPolicy::default()
        };
        let mut graph = sample_graph(policy);
        graph.node(NodeId::from("a"), "op", "").unwrap();
        graph.edge(NodeId::from("a"), NodeId::from("b")).unwrap();

        let err = graph.check_renderable().unwrap_err();
        assert!(matches!(err, PlotError::DanglingEdge { .. }));
    }

    #[test]
    fn test_check_graphs_renderable_empty_set() {
        let err = check_graphs_renderable(&[]).unwrap_err();
        assert!(matches!(err, PlotError::Render { .. }));
    }
}
