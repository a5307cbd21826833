//! Operators for multi-objective evolutionary consensus clustering.
//!
//! A population of partitions (one cluster label per instance) is evolved
//! under competing clustering-quality objectives. This crate provides the
//! recombination side of that loop:
//!
//! - **HBGF crossover**: encodes two parent clusterings as a bipartite graph,
//!   cuts it with a pluggable graph partitioner, and decodes the cut into
//!   child clusterings.
//! - **Multi-parent HBGF**: the same construction over an ensemble.
//! - **Null crossover**: pass-through, for ablation runs.
//!
//! # Architecture
//!
//! The evolutionary loop, objective functions, and dataset handling live in
//! consumers. Operators share the [`crossover::CrossoverOperator`] shape and
//! take randomness as an explicit [`random::RandomSource`], so a run is
//! reproducible from its seed and tests can script every draw.

pub mod crossover;
pub mod error;
pub mod hbgf;
pub mod partition;
pub mod random;

pub use error::{ConsensusError, Result};
