//! Partition-encoded solutions.
//!
//! A [`PartitionSolution`] stores one cluster label per dataset instance
//! followed by a trailing cluster-count variable. The evolutionary loop sees
//! all of them as integer decision variables through [`Solution`].

use crate::error::{ConsensusError, Result};
use std::collections::HashSet;

/// Integer-variable view of a candidate solution.
///
/// This is the capability set crossover operators rely on: reading and
/// writing variables, and copying via [`Clone`].
pub trait Solution: Clone {
    /// Total number of decision variables.
    fn number_of_variables(&self) -> usize;

    /// Returns variable `index`.
    ///
    /// # Panics
    /// Panics if `index >= number_of_variables()`.
    fn variable_value(&self, index: usize) -> usize;

    /// Overwrites variable `index`.
    ///
    /// # Panics
    /// Panics if `index >= number_of_variables()`.
    fn set_variable_value(&mut self, index: usize, value: usize);
}

/// A clustering of `N` instances, encoded as `N + 1` integer variables.
///
/// Variables `0..N` hold the instance labels, variable `N` holds the number of
/// clusters the encoding claims. Objective values ride along for the
/// evolutionary loop; `f64::INFINITY` marks an unevaluated objective.
///
/// Equality compares the variable arrays element-wise and ignores
/// objectives. Labels are never normalized, so `[0, 0, 1]` and `[1, 1, 0]`
/// are different solutions.
///
/// ```
/// use u_consensus::partition::{PartitionSolution, Solution};
///
/// let s = PartitionSolution::new(vec![5, 5, 2, 9], 2);
/// assert_eq!(s.instance_count(), 4);
/// assert_eq!(s.cluster_count(), 3);
/// assert_eq!(s.number_of_variables(), 5);
/// assert_eq!(s.variable_value(4), 3);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawPartitionSolution")
)]
pub struct PartitionSolution {
    variables: Vec<usize>,
    objectives: Vec<f64>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawPartitionSolution {
    variables: Vec<usize>,
    objectives: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPartitionSolution> for PartitionSolution {
    type Error = ConsensusError;

    fn try_from(raw: RawPartitionSolution) -> Result<Self> {
        Self::from_parts(raw.variables, raw.objectives)
    }
}

impl PartitionSolution {
    /// Creates a solution from instance labels.
    ///
    /// The cluster count is the number of distinct labels.
    pub fn new(labels: Vec<usize>, number_of_objectives: usize) -> Self {
        let cluster_count = labels.iter().collect::<HashSet<_>>().len();
        Self::with_cluster_count(labels, cluster_count, number_of_objectives)
    }

    /// Creates a solution with an explicit cluster count.
    pub fn with_cluster_count(
        mut labels: Vec<usize>,
        cluster_count: usize,
        number_of_objectives: usize,
    ) -> Self {
        labels.push(cluster_count);
        Self {
            variables: labels,
            objectives: vec![f64::INFINITY; number_of_objectives],
        }
    }

    /// Reassembles a solution from its raw variable and objective arrays.
    ///
    /// `variables` must hold at least the trailing cluster count.
    pub fn from_parts(variables: Vec<usize>, objectives: Vec<f64>) -> Result<Self> {
        if variables.is_empty() {
            return Err(ConsensusError::InvalidArgument(
                "solution needs at least the cluster-count variable".into(),
            ));
        }
        Ok(Self {
            variables,
            objectives,
        })
    }

    /// Builds a solution shaped like `self` (same objective count) carrying new
    /// labels. Objectives of the result are unevaluated.
    ///
    /// # Panics
    /// Panics if `labels.len()` differs from `self.instance_count()`.
    pub fn derive(&self, labels: &[usize], cluster_count: usize) -> Self {
        assert_eq!(
            labels.len(),
            self.instance_count(),
            "derived labels must cover every instance"
        );
        let mut variables = Vec::with_capacity(self.variables.len());
        variables.extend_from_slice(labels);
        variables.push(cluster_count);
        Self {
            variables,
            objectives: vec![f64::INFINITY; self.objectives.len()],
        }
    }

    /// Number of dataset instances `N`.
    pub fn instance_count(&self) -> usize {
        self.variables.len() - 1
    }

    /// The `N` instance labels.
    pub fn labels(&self) -> &[usize] {
        &self.variables[..self.instance_count()]
    }

    /// The trailing cluster-count variable.
    pub fn cluster_count(&self) -> usize {
        self.variables[self.instance_count()]
    }

    /// All `N + 1` variables.
    pub fn variables(&self) -> &[usize] {
        &self.variables
    }

    pub fn number_of_objectives(&self) -> usize {
        self.objectives.len()
    }

    pub fn objective(&self, index: usize) -> f64 {
        self.objectives[index]
    }

    pub fn set_objective(&mut self, index: usize, value: f64) {
        self.objectives[index] = value;
    }

    pub fn objectives(&self) -> &[f64] {
        &self.objectives
    }
}

impl Solution for PartitionSolution {
    fn number_of_variables(&self) -> usize {
        self.variables.len()
    }

    fn variable_value(&self, index: usize) -> usize {
        self.variables[index]
    }

    fn set_variable_value(&mut self, index: usize, value: usize) {
        self.variables[index] = value;
    }
}

impl PartialEq for PartitionSolution {
    fn eq(&self, other: &Self) -> bool {
        self.variables == other.variables
    }
}

impl Eq for PartitionSolution {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_counts_distinct_labels() {
        let s = PartitionSolution::new(vec![4, 4, 1, 1, 1, 1, 4], 2);
        assert_eq!(s.instance_count(), 7);
        assert_eq!(s.cluster_count(), 2);
        assert_eq!(s.variables(), &[4, 4, 1, 1, 1, 1, 4, 2]);
        assert_eq!(s.objectives(), &[f64::INFINITY, f64::INFINITY]);
    }

    #[test]
    fn test_equality_ignores_objectives() {
        let mut a = PartitionSolution::new(vec![0, 1, 1], 1);
        let b = PartitionSolution::new(vec![0, 1, 1], 1);
        a.set_objective(0, 0.5);
        assert_eq!(a, b);
    }

    #[test]
    fn test_equality_is_not_isomorphic() {
        let a = PartitionSolution::new(vec![0, 0, 1], 0);
        let b = PartitionSolution::new(vec![1, 1, 0], 0);
        assert_ne!(a, b);
    }

    #[test]
    fn test_derive_keeps_shape() {
        let mut parent = PartitionSolution::new(vec![3, 3, 7], 2);
        parent.set_objective(0, 1.0);
        let child = parent.derive(&[0, 1, 1], 2);
        assert_eq!(child.variables(), &[0, 1, 1, 2]);
        assert_eq!(child.number_of_objectives(), 2);
        assert_eq!(child.objective(0), f64::INFINITY);
        assert_eq!(parent.variables(), &[3, 3, 7, 2]);
    }

    #[test]
    #[should_panic(expected = "cover every instance")]
    fn test_derive_wrong_length_panics() {
        let parent = PartitionSolution::new(vec![0, 1], 0);
        let _ = parent.derive(&[0], 1);
    }

    #[test]
    fn test_from_parts() {
        let err = PartitionSolution::from_parts(Vec::new(), vec![0.0]).unwrap_err();
        assert!(matches!(err, ConsensusError::InvalidArgument(_)));

        let s = PartitionSolution::from_parts(vec![0, 1, 1, 2], vec![0.25]).unwrap();
        assert_eq!(s.instance_count(), 3);
        assert_eq!(s.labels(), &[0, 1, 1]);
        assert_eq!(s.cluster_count(), 2);
        assert_eq!(s.objective(0), 0.25);

        let empty = PartitionSolution::from_parts(vec![0], Vec::new()).unwrap();
        assert_eq!(empty.instance_count(), 0);
    }

    #[test]
    fn test_variable_access() {
        let mut s = PartitionSolution::with_cluster_count(vec![0, 1], 5, 0);
        assert_eq!(s.number_of_variables(), 3);
        assert_eq!(s.cluster_count(), 5);
        s.set_variable_value(1, 0);
        assert_eq!(s.labels(), &[0, 0]);
    }

    #[test]
    fn test_clone_is_independent() {
        let a = PartitionSolution::new(vec![0, 1, 2], 0);
        let mut b = a.clone();
        b.set_variable_value(0, 9);
        assert_eq!(a.variable_value(0), 0);
    }
}
