//! Graph partitioning oracle.
//!
//! HBGF does not care how the cut is computed. Any k-way partitioner can be
//! plugged in through [`GraphPartitioner`]; bindings to a multilevel library
//! live outside this crate. [`GraphGrowingPartitioner`] is a small
//! deterministic implementation so the operator works out of the box.

use super::graph::GraphCsr;
use crate::error::{ConsensusError, Result};
use std::collections::VecDeque;

/// Splits a graph into `nparts` parts.
///
/// # Contract
///
/// - Precondition: `1 <= nparts <= graph.len()`.
/// - The returned assignment has exactly `graph.len()` entries, each in
///   `0..nparts`.
/// - For a fixed graph and fixed internal state the result is deterministic.
/// - Failures are reported as [`ConsensusError::PartitioningFailed`]; callers
///   do not retry.
pub trait GraphPartitioner: Send + Sync {
    fn partition(&self, graph: &GraphCsr, nparts: usize) -> Result<Vec<usize>>;
}

impl<P: GraphPartitioner + ?Sized> GraphPartitioner for &P {
    fn partition(&self, graph: &GraphCsr, nparts: usize) -> Result<Vec<usize>> {
        (**self).partition(graph, nparts)
    }
}

impl<P: GraphPartitioner + ?Sized> GraphPartitioner for Box<P> {
    fn partition(&self, graph: &GraphCsr, nparts: usize) -> Result<Vec<usize>> {
        (**self).partition(graph, nparts)
    }
}

/// Checks the `1 <= nparts <= graph.len()` precondition.
pub(crate) fn check_nparts(graph: &GraphCsr, nparts: usize) -> Result<()> {
    if nparts == 0 || nparts > graph.len() {
        return Err(ConsensusError::PartitioningFailed {
            nparts,
            vertices: graph.len(),
            reason: format!("nparts must be in 1..={}", graph.len()),
        });
    }
    Ok(())
}

/// Balanced breadth-first graph growing.
///
/// Part `p` receives `n / nparts` vertices, plus one for the first
/// `n % nparts` parts. Each part is grown by BFS from the lowest-indexed
/// unassigned vertex, visiting neighbours in stored order; when the frontier
/// empties before the part is full, growth restarts from the next lowest
/// unassigned vertex. The result is fully determined by the graph.
///
/// Part sizes are exact, so every part is non-empty. Cut quality is whatever
/// BFS locality gives; use a multilevel partitioner for serious runs.
///
/// Its assignments are not those of a multilevel partitioner such as METIS.
/// Reference outputs recorded against METIS, including part numbering, do
/// not carry over: on the seven-instance two-cluster pair it yields
/// `[0, 0, 0, 1, 1, 1, 0]` for the instances where METIS yields
/// `[1, 1, 0, 0, 0, 0, 1]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphGrowingPartitioner;

impl GraphGrowingPartitioner {
    pub fn new() -> Self {
        Self
    }
}

impl GraphPartitioner for GraphGrowingPartitioner {
    fn partition(&self, graph: &GraphCsr, nparts: usize) -> Result<Vec<usize>> {
        check_nparts(graph, nparts)?;

        let n = graph.len();
        let unassigned = usize::MAX;
        let mut parts = vec![unassigned; n];
        let mut next_seed = 0usize;
        let mut queue = VecDeque::new();

        for part in 0..nparts {
            let capacity = n / nparts + usize::from(part < n % nparts);
            let mut size = 0usize;
            queue.clear();

            while size < capacity {
                let Some(vertex) = queue.pop_front() else {
                    while parts[next_seed] != unassigned {
                        next_seed += 1;
                    }
                    parts[next_seed] = part;
                    size += 1;
                    queue.push_back(next_seed);
                    continue;
                };
                for &neighbor in graph.neighbors(vertex) {
                    if size == capacity {
                        break;
                    }
                    if parts[neighbor] == unassigned {
                        parts[neighbor] = part;
                        size += 1;
                        queue.push_back(neighbor);
                    }
                }
            }
        }

        debug_assert!(parts.iter().all(|&p| p < nparts));
        Ok(parts)
    }
}
