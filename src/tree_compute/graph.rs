use std::collections::{BTreeMap, BTreeSet};

use super::types::{AdjacencyIndex, Edge, NodeId, Weight, WeightGraph};

/// Indexes every edge under both endpoints, oriented (near, far).
pub fn build_adjacency(edges: &[Edge]) -> AdjacencyIndex {
    let mut adjacency: AdjacencyIndex = BTreeMap::new();
    for edge in edges {
        adjacency.entry(edge.from).or_default().push(*edge);
        adjacency.entry(edge.to).or_default().push(edge.reversed());
    }
    adjacency
}

/// Builds the nested-map adjacency used by the keyed strategy.
///
/// Parallel edges collapse to the lighter weight per (from, to) pair.
pub fn build_weight_graph(edges: &[Edge]) -> WeightGraph {
    let mut graph: WeightGraph = BTreeMap::new();
    for edge in edges {
        insert_min(&mut graph, edge.from, edge.to, edge.weight);
        insert_min(&mut graph, edge.to, edge.from, edge.weight);
    }
    graph
}

fn insert_min(graph: &mut WeightGraph, from: NodeId, to: NodeId, weight: Weight) {
    let slot = graph.entry(from).or_default().entry(to).or_insert(weight);
    if weight < *slot {
        *slot = weight;
    }
}

pub fn collect_nodes(edges: &[Edge]) -> BTreeSet<NodeId> {
    let mut nodes = BTreeSet::new();
    for edge in edges {
        nodes.insert(edge.from);
        nodes.insert(edge.to);
    }
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacency_doubles_each_edge() {
        let edges = vec![Edge::new(2.0, 1, 2), Edge::new(3.0, 2, 3)];
        let adjacency = build_adjacency(&edges);

        assert_eq!(adjacency.get(&1).map(Vec::len), Some(1));
        assert_eq!(adjacency.get(&2).map(Vec::len), Some(2));
        assert_eq!(adjacency.get(&3).map(Vec::len), Some(1));

        let back = adjacency.get(&2).unwrap();
        assert!(back.contains(&Edge::new(2.0, 2, 1)));
        assert!(back.contains(&Edge::new(3.0, 2, 3)));
    }

    #[test]
    fn weight_graph_keeps_lighter_parallel_edge() {
        let edges = vec![Edge::new(5.0, 1, 2), Edge::new(3.0, 2, 1)];
        let graph = build_weight_graph(&edges);

        assert_eq!(graph.get(&1).and_then(|n| n.get(&2)).copied(), Some(3.0));
        assert_eq!(graph.get(&2).and_then(|n| n.get(&1)).copied(), Some(3.0));
    }

    #[test]
    fn collect_nodes_covers_both_endpoints() {
        let edges = vec![Edge::new(1.0, 4, 7), Edge::new(1.0, 7, 9)];
        let nodes = collect_nodes(&edges);
        assert_eq!(nodes, BTreeSet::from([4, 7, 9]));
    }
}
