//! Test doubles for the partitioner oracle.

use super::graph::GraphCsr;
use super::partitioner::GraphPartitioner;
use crate::error::{ConsensusError, Result};
use std::collections::HashMap;
use std::sync::Mutex;

/// Answers each `nparts` with a canned assignment and records the requests.
#[derive(Default)]
pub(crate) struct ScriptedPartitioner {
    answers: HashMap<usize, Vec<usize>>,
    calls: Mutex<Vec<usize>>,
}

impl ScriptedPartitioner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn answer(mut self, nparts: usize, assignment: Vec<usize>) -> Self {
        self.answers.insert(nparts, assignment);
        self
    }

    /// The `nparts` values requested so far, in call order.
    pub(crate) fn calls(&self) -> Vec<usize> {
        self.calls.lock().unwrap().clone()
    }
}

impl GraphPartitioner for ScriptedPartitioner {
    fn partition(&self, graph: &GraphCsr, nparts: usize) -> Result<Vec<usize>> {
        self.calls.lock().unwrap().push(nparts);
        self.answers
            .get(&nparts)
            .cloned()
            .ok_or_else(|| ConsensusError::PartitioningFailed {
                nparts,
                vertices: graph.len(),
                reason: "no scripted answer".into(),
            })
    }
}
