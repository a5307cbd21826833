//! Hybrid Bipartite Graph Formulation (HBGF) crossover.
//!
//! HBGF treats two clusterings of the same dataset as one graph: every
//! instance is a vertex, every cluster of either parent is a vertex, and each
//! instance is linked to its cluster in both parents. Cutting that graph into
//! `k` balanced parts with few crossing edges yields a consensus clustering
//! that agrees with both parents where they agree.
//!
//! # Key Types
//!
//! - [`HbgfCrossover`]: the two-parent operator
//! - [`MultiParentHbgfCrossover`]: the same protocol over an ensemble
//! - [`HbgfConfig`], [`ClusterCountRange`]: operator parameters
//! - [`GraphCsr`], [`BipartiteGraph`]: the cluster graph
//! - [`GraphPartitioner`]: the pluggable cut oracle, with
//!   [`GraphGrowingPartitioner`] as a built-in implementation
//!
//! # References
//!
//! - Fern & Brodley (2004), "Solving Cluster Ensemble Problems by Bipartite
//!   Graph Partitioning"
//! - Karypis & Kumar (1998), "A Fast and High Quality Multilevel Scheme for
//!   Partitioning Irregular Graphs"

mod builder;
mod config;
mod decoder;
mod graph;
mod multi_parent;
mod operator;
mod partitioner;
#[cfg(test)]
mod testing;

pub use builder::{build_bipartite_graph, build_ensemble_graph, canonicalize, BipartiteGraph};
pub use config::{ClusterCountRange, HbgfConfig};
pub use decoder::decode;
pub use graph::GraphCsr;
pub use multi_parent::MultiParentHbgfCrossover;
pub use operator::HbgfCrossover;
pub use partitioner::{GraphGrowingPartitioner, GraphPartitioner};
