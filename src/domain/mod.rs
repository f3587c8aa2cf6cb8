//! Domain layer: pure, synchronous graph algorithms.

pub mod dag_paths;
pub mod graph;
pub mod metrics;
pub mod scc;
pub mod topo;
