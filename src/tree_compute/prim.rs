use std::collections::{BTreeMap, BTreeSet};

use super::graph::{build_adjacency, build_weight_graph, collect_nodes};
use super::heap::MinHeap;
use super::types::{Edge, MstResult, NodeId, Weight};

fn by_weight(a: &Edge, b: &Edge) -> std::cmp::Ordering {
    a.weight.total_cmp(&b.weight)
}

fn by_key(a: &(Weight, NodeId), b: &(Weight, NodeId)) -> std::cmp::Ordering {
    a.0.total_cmp(&b.0)
}

/// Grows a minimum spanning tree from `start` by keeping candidate edges in
/// the heap and dropping the ones whose far endpoint was already connected.
///
/// A topology that is disconnected from `start` yields a partial tree over
/// the reachable component; `MstResult::reached` reports its extent.
pub fn compute_mst_lazy(start: NodeId, edges: &[Edge]) -> MstResult {
    let adjacency = build_adjacency(edges);
    let mut connected = BTreeSet::from([start]);
    let mut mst: Vec<Edge> = Vec::new();
    let mut total_weight = 0.0;

    let mut candidates = MinHeap::with_capacity(by_weight, edges.len());
    if let Some(incident) = adjacency.get(&start) {
        for edge in incident {
            candidates.push(*edge);
        }
    }

    while let Some(edge) = candidates.pop_if(|edge| connected.contains(&edge.to)) {
        connected.insert(edge.to);
        total_weight += edge.weight;
        mst.push(edge);

        if let Some(incident) = adjacency.get(&edge.to) {
            for next in incident {
                if !connected.contains(&next.to) {
                    candidates.push(*next);
                }
            }
        }
    }

    MstResult {
        edges: mst,
        total_weight,
        reached: connected,
    }
}

/// Grows a minimum spanning tree from `start` by tracking each node's best
/// known connecting weight.
///
/// There is no true decrease-key: an improved key is pushed as a fresh heap
/// entry and the superseded one is skipped at pop time via the visited set.
/// Relaxation uses the direct edge weight alone, which is the candidate key
/// for a frontier-connecting edge.
pub fn compute_mst_keyed(start: NodeId, edges: &[Edge]) -> MstResult {
    let graph = build_weight_graph(edges);
    let mut nodes = collect_nodes(edges);
    nodes.insert(start);

    let mut keys: BTreeMap<NodeId, Weight> =
        nodes.iter().map(|node| (*node, f64::INFINITY)).collect();
    keys.insert(start, 0.0);
    // Absence means "no incoming edge"; the start node never gets one.
    let mut predecessor: BTreeMap<NodeId, NodeId> = BTreeMap::new();
    let mut visited: BTreeSet<NodeId> = BTreeSet::new();

    let mut frontier = MinHeap::with_capacity(by_key, nodes.len());
    for (node, key) in &keys {
        frontier.push((*key, *node));
    }

    let mut mst: Vec<Edge> = Vec::new();
    let mut total_weight = 0.0;

    while let Some((key, node)) = frontier.pop_if(|(_, node)| visited.contains(node)) {
        if !key.is_finite() {
            // Only untouched seeds remain; nothing further is reachable.
            break;
        }
        visited.insert(node);

        if let Some(via) = predecessor.get(&node).copied() {
            mst.push(Edge::new(key, via, node));
            total_weight += key;
        }

        if let Some(neighbors) = graph.get(&node) {
            for (neighbor, weight) in neighbors {
                if visited.contains(neighbor) {
                    continue;
                }
                let best = keys.get(neighbor).copied().unwrap_or(f64::INFINITY);
                if *weight < best {
                    keys.insert(*neighbor, *weight);
                    predecessor.insert(*neighbor, node);
                    frontier.push((*weight, *neighbor));
                }
            }
        }
    }

    MstResult {
        edges: mst,
        total_weight,
        reached: visited,
    }
}
