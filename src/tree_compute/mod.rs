mod graph;
mod heap;
mod prim;
mod strategy;
mod traits;
mod types;

pub use graph::{build_adjacency, build_weight_graph, collect_nodes};
pub use heap::MinHeap;
pub use prim::{compute_mst_keyed, compute_mst_lazy};
pub use strategy::{compute_mst, MstAlgorithm, MstStrategyConfig};
pub use traits::{KeyedPrimEngine, LazyPrimEngine, MstComputeInput, TreeComputeEngine};
pub use types::{AdjacencyIndex, Edge, MstResult, NodeId, Weight, WeightGraph};
