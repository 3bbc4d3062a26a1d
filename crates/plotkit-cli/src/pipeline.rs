//! The build-and-render pipeline behind the `plotkit` binary.

use crate::manifest::{self, Manifest};
use plotkit_common::utils::validate_non_empty;
use plotkit_common::{ensure, PlotError, Result};
use plotkit_config::{Settings, ValidationSettings};
use plotkit_graphs::{DuplicateNodePolicy, Graph, GraphPolicy, Plotter, PlotterKind};
use std::path::Path;
use tracing::info;

/// Load the manifest at `manifest_path`, build every graph it describes
/// through the capability traits, and render to `output`.
///
/// The backend is chosen from `settings.render.format` when set,
/// otherwise from the output file extension.
pub fn run(manifest_path: &Path, output: &Path, settings: &Settings) -> Result<()> {
    let manifest = manifest::load_manifest(manifest_path)?;
    ensure!(
        !manifest.graphs.is_empty(),
        "Manifest `{}` contains no graphs",
        manifest_path.display()
    );

    let kind = match settings.render.format.as_deref() {
        Some(name) => PlotterKind::from_name(name)?,
        None => PlotterKind::from_path(output)?,
    };
    let policy = policy_from_settings(&settings.validation)?;

    info!(
        backend = kind.name(),
        graphs = manifest.graphs.len(),
        "building graphs from {}",
        manifest_path.display()
    );

    let mut plotter = kind.create(policy);
    build_graphs(plotter.as_mut(), &manifest)?;
    plotter.render(output)?;

    info!("wrote {}", output.display());
    Ok(())
}

/// Feed every graph in `manifest` into `plotter` through the capability
/// traits.
pub fn build_graphs(plotter: &mut dyn Plotter, manifest: &Manifest) -> Result<()> {
    for described in &manifest.graphs {
        let name = validate_non_empty(&described.name, "graph name")?;
        let graph = plotter.create_graph(&name)?;
        for node in &described.nodes {
            graph.node(node.id.clone(), &node.node_type, &node.detail)?;
        }
        for edge in &described.edges {
            graph.edge(edge.from.clone(), edge.to.clone())?;
        }
    }
    Ok(())
}

/// Convert validated settings into the backend policy.
fn policy_from_settings(validation: &ValidationSettings) -> Result<GraphPolicy> {
    let on_duplicate_node = DuplicateNodePolicy::from_name(&validation.on_duplicate_node)
        .ok_or_else(|| {
            PlotError::validation_field(
                format!(
                    "Unknown duplicate-node policy `{}`",
                    validation.on_duplicate_node
                ),
                "on_duplicate_node",
            )
        })?;

    Ok(GraphPolicy {
        on_duplicate_node,
        require_declared_endpoints: validation.require_declared_endpoints,
        allow_self_loops: validation.allow_self_loops,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use plotkit_graphs::TextPlotter;

    fn sample_manifest() -> Manifest {
        serde_yaml::from_str(
            "graphs:\n  - name: g1\n    nodes:\n      - { id: a, type: op, detail: detail-a }\n      - { id: b, type: op, detail: detail-b }\n    edges:\n      - { from: a, to: b }\n",
        )
        .expect("Failed to parse sample manifest")
    }

    #[test]
    fn test_build_graphs() {
        let mut plotter = TextPlotter::new();
        build_graphs(&mut plotter, &sample_manifest()).expect("build failed");

        assert_eq!(plotter.graph_count(), 1);
        assert_eq!(plotter.graphs()[0].node_count(), 2);
        assert_eq!(plotter.graphs()[0].edge_count(), 1);
    }

    #[test]
    fn test_build_graphs_propagates_policy_errors() {
        let mut plotter = TextPlotter::new();
        let manifest: Manifest = serde_yaml::from_str(
            "graphs:\n  - name: g1\n    nodes:\n      - { id: a }\n      - { id: a }\n",
        )
        .unwrap();

        let err = build_graphs(&mut plotter, &manifest).unwrap_err();
        assert!(matches!(err, PlotError::DuplicateNode { .. }));
    }

    #[test]
    fn test_build_graphs_rejects_empty_name() {
        let mut plotter = TextPlotter::new();
        let manifest: Manifest =
            serde_yaml::from_str("graphs:\n  - name: \"  \"\n").unwrap();

        let err = build_graphs(&mut plotter, &manifest).unwrap_err();
        assert!(matches!(err, PlotError::Validation { .. }));
    }

    #[test]
    fn test_policy_from_settings() {
        let mut validation = ValidationSettings::default();
        validation.on_duplicate_node = "overwrite".to_string();
        validation.allow_self_loops = false;

        let policy = policy_from_settings(&validation).unwrap();
        assert_eq!(policy.on_duplicate_node, DuplicateNodePolicy::Overwrite);
        assert!(!policy.allow_self_loops);
    }

    #[test]
    fn test_policy_from_settings_unknown_name() {
        let mut validation = ValidationSettings::default();
        validation.on_duplicate_node = "merge".to_string();

        let err = policy_from_settings(&validation).unwrap_err();
        assert!(matches!(err, PlotError::Validation { .. }));
    }
}
