//! HBGF over an ensemble of more than two parents.

use super::config::HbgfConfig;
use super::operator::recombine;
use super::partitioner::{GraphGrowingPartitioner, GraphPartitioner};
use crate::crossover::{check_parent_count, CrossoverOperator};
use crate::error::{ConsensusError, Result};
use crate::partition::PartitionSolution;
use crate::random::RandomSource;

/// HBGF crossover that mates `M >= 2` parents at once.
///
/// The graph links each instance to its cluster in every parent, so instance
/// vertices have degree `M`. With [`ClusterCountRange::ParentBounds`], `k` is
/// drawn between the smallest and largest parent cluster counts. When the
/// gating draw skips recombination, children cycle through all `M` parents.
/// With `M = 2` this behaves exactly like [`HbgfCrossover`](super::HbgfCrossover).
///
/// [`ClusterCountRange::ParentBounds`]: super::ClusterCountRange::ParentBounds
#[derive(Debug, Clone)]
pub struct MultiParentHbgfCrossover<P = GraphGrowingPartitioner> {
    parents: usize,
    config: HbgfConfig,
    partitioner: P,
}

impl MultiParentHbgfCrossover<GraphGrowingPartitioner> {
    /// `parents` parents, default configuration, built-in partitioner.
    pub fn new(parents: usize) -> Result<Self> {
        Self::with_partitioner(parents, HbgfConfig::default(), GraphGrowingPartitioner)
    }
}

impl<P: GraphPartitioner> MultiParentHbgfCrossover<P> {
    pub fn with_partitioner(parents: usize, config: HbgfConfig, partitioner: P) -> Result<Self> {
        if parents < 2 {
            return Err(ConsensusError::InvalidConfiguration(format!(
                "multi-parent crossover needs at least 2 parents, got {parents}"
            )));
        }
        config.validate()?;
        Ok(Self {
            parents,
            config,
            partitioner,
        })
    }

    pub fn config(&self) -> &HbgfConfig {
        &self.config
    }

    pub fn partitioner(&self) -> &P {
        &self.partitioner
    }
}

impl<P: GraphPartitioner> CrossoverOperator<PartitionSolution> for MultiParentHbgfCrossover<P> {
    fn required_parents(&self) -> usize {
        self.parents
    }

    fn generated_children(&self) -> usize {
        self.config.children
    }

    fn execute(
        &self,
        parents: &[PartitionSolution],
        rng: &mut dyn RandomSource,
    ) -> Result<Vec<PartitionSolution>> {
        check_parent_count(parents, self.parents)?;
        let refs: Vec<&PartitionSolution> = parents.iter().collect();
        recombine(
            &self.partitioner,
            &self.config,
            self.config.crossover_probability,
            &refs,
            rng,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hbgf::testing::ScriptedPartitioner;
    use crate::hbgf::HbgfCrossover;
    use crate::random::{create_rng, ScriptedRandom};

    fn ensemble() -> Vec<PartitionSolution> {
        vec![
            PartitionSolution::new(vec![0, 0, 1, 1, 2, 2], 1),
            PartitionSolution::new(vec![5, 5, 5, 7, 7, 7], 1),
            PartitionSolution::new(vec![1, 0, 1, 0, 1, 0], 1),
        ]
    }

    #[test]
    fn test_requires_two_parents() {
        let err = MultiParentHbgfCrossover::new(1).unwrap_err();
        assert!(matches!(err, ConsensusError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_counts() {
        let op = MultiParentHbgfCrossover::new(3).unwrap();
        assert_eq!(op.required_parents(), 3);
        assert_eq!(op.generated_children(), 2);
    }

    #[test]
    fn test_k_drawn_from_ensemble_bounds() {
        // Cluster counts 3, 2, 2 -> k in [2, 3]; graph has 6 + 7 vertices.
        let oracle = ScriptedPartitioner::new().answer(
            3,
            vec![0, 0, 1, 1, 2, 2, 0, 1, 2, 0, 1, 0, 1],
        );
        let op = MultiParentHbgfCrossover::with_partitioner(
            3,
            HbgfConfig::default().with_children(1),
            oracle,
        )
        .unwrap();
        let mut rng = ScriptedRandom::new(vec![0.0, 3.0]);

        let children = op.execute(&ensemble(), &mut rng).unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].variables(), &[0, 0, 1, 1, 2, 2, 3]);
        assert_eq!(op.partitioner().calls(), vec![3]);
    }

    #[test]
    fn test_pass_through_cycles_all_parents() {
        let op = MultiParentHbgfCrossover::with_partitioner(
            3,
            HbgfConfig::default()
                .with_crossover_probability(0.0)
                .with_children(4),
            GraphGrowingPartitioner,
        )
        .unwrap();
        let parents = ensemble();
        let mut rng = ScriptedRandom::new(vec![0.0]);
        let children = op.execute(&parents, &mut rng).unwrap();
        assert_eq!(
            children,
            vec![
                parents[0].clone(),
                parents[1].clone(),
                parents[2].clone(),
                parents[0].clone()
            ]
        );
    }

    #[test]
    fn test_two_parents_match_hbgf() {
        let all = ensemble();
        let parents = &all[..2];
        let multi = MultiParentHbgfCrossover::new(2).unwrap();
        let pair = HbgfCrossover::new();

        let mut rng1 = create_rng(17);
        let mut rng2 = create_rng(17);
        assert_eq!(
            multi.execute(parents, &mut rng1).unwrap(),
            pair.execute(parents, &mut rng2).unwrap()
        );
    }

    #[test]
    fn test_wrong_parent_count() {
        let op = MultiParentHbgfCrossover::new(3).unwrap();
        let mut rng = create_rng(0);
        let err = op.execute(&ensemble()[..2], &mut rng).unwrap_err();
        assert!(matches!(err, ConsensusError::InvalidArgument(_)));
    }
}
