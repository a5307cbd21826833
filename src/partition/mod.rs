//! Cluster-label encodings.
//!
//! - [`Solution`]: integer-variable capability set used by operators
//! - [`PartitionSolution`]: labels per instance plus a trailing cluster count

mod types;

pub use types::{PartitionSolution, Solution};
