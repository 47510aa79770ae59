use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::tree_compute::{collect_nodes, Edge, NodeId};

#[derive(Debug, Clone, Deserialize)]
struct RawEdge {
    from: u32,
    to: u32,
    #[serde(default = "default_weight")]
    weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

#[derive(Debug, Clone, Deserialize)]
struct RawTopology {
    nodes: Option<Vec<u32>>,
    edges: Vec<RawEdge>,
}

/// Validated topology: declared nodes plus every edge endpoint.
#[derive(Debug, Clone)]
pub struct TopologyConfig {
    pub nodes: BTreeSet<NodeId>,
    pub edges: Vec<Edge>,
}

impl TopologyConfig {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

/// Loads a topology file, parsed as JSON for a `.json` extension and as YAML
/// otherwise.
pub fn load_topology(path: &Path) -> Result<TopologyConfig> {
    let raw_text = fs::read_to_string(path)
        .with_context(|| format!("failed to read topology file {}", path.display()))?;

    let raw: RawTopology = if path.extension().is_some_and(|ext| ext == "json") {
        serde_json::from_str(&raw_text).context("failed to parse topology json")?
    } else {
        serde_yaml::from_str(&raw_text).context("failed to parse topology yaml")?
    };

    topology_from_raw(raw)
}

fn topology_from_raw(raw: RawTopology) -> Result<TopologyConfig> {
    let mut edges = Vec::with_capacity(raw.edges.len());
    for edge in &raw.edges {
        if !edge.weight.is_finite() || edge.weight < 0.0 {
            anyhow::bail!(
                "edge {} -> {} has unsupported weight {}",
                edge.from,
                edge.to,
                edge.weight
            );
        }
        edges.push(Edge::new(edge.weight, edge.from, edge.to));
    }

    let mut nodes = collect_nodes(&edges);
    nodes.extend(raw.nodes.unwrap_or_default());

    Ok(TopologyConfig { nodes, edges })
}
