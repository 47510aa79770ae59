use std::collections::{BTreeMap, BTreeSet};

pub type NodeId = u32;
pub type Weight = f64;

/// A weighted undirected edge. In frontier and result position the
/// orientation is (near endpoint, far endpoint) relative to the growing tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub weight: Weight,
    pub from: NodeId,
    pub to: NodeId,
}

impl Edge {
    pub fn new(weight: Weight, from: NodeId, to: NodeId) -> Self {
        Self { weight, from, to }
    }

    /// The same edge seen from the opposite endpoint.
    pub fn reversed(&self) -> Self {
        Self {
            weight: self.weight,
            from: self.to,
            to: self.from,
        }
    }
}

/// Per-node incident edge lists, each input edge stored once per orientation.
pub type AdjacencyIndex = BTreeMap<NodeId, Vec<Edge>>;

/// Nested-map adjacency, one weight per (from, to) pair.
pub type WeightGraph = BTreeMap<NodeId, BTreeMap<NodeId, Weight>>;

#[derive(Debug, Clone)]
pub struct MstResult {
    /// Accepted edges in acceptance order.
    pub edges: Vec<Edge>,
    pub total_weight: Weight,
    /// Nodes incorporated into the tree; always contains the start node.
    pub reached: BTreeSet<NodeId>,
}

impl MstResult {
    /// True when the tree covers all `node_count` nodes of the topology.
    pub fn spans(&self, node_count: usize) -> bool {
        self.reached.len() == node_count && self.edges.len() + 1 == node_count
    }
}
