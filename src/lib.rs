//! Minimum spanning tree toolkit for weighted undirected topologies.
//!
//! The `tree_compute` module holds the algorithm core: a comparator-ordered
//! binary min-heap and two Prim strategies built on top of it. The `runtime`
//! module covers topology file loading for the binaries.

pub mod runtime;
pub mod tree_compute;
