//! Error taxonomy shared by every operator in the crate.
//!
//! All failures are returned synchronously to the caller of
//! [`execute`](crate::crossover::CrossoverOperator::execute) or
//! [`do_crossover`](crate::hbgf::HbgfCrossover::do_crossover). Operators never
//! retry, recover, or drop partial results; the evolutionary loop decides what
//! to do with a failed mating.

use thiserror::Error;

/// Errors raised while configuring or running a crossover operator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsensusError {
    /// A caller passed malformed input (wrong parent count, mismatched or
    /// empty encodings).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An operator was constructed with out-of-range parameters.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The graph partitioner could not satisfy the request.
    #[error("partitioning {vertices} vertices into {nparts} parts failed: {reason}")]
    PartitioningFailed {
        nparts: usize,
        vertices: usize,
        reason: String,
    },

    /// The graph partitioner returned an assignment that breaks its contract.
    ///
    /// This is an integration bug, not a recoverable runtime condition.
    #[error("partitioner contract violated: {0}")]
    ContractViolation(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ConsensusError>;
