//! The HBGF crossover operator.
//!
//! # Algorithm
//!
//! 1. Draw `u` uniformly; if `u >= probability`, copy the parents through
//!    (cycling A, B, A, ... up to the child count)
//! 2. Build the cluster graph of the parents once
//! 3. Draw every child's cluster count `k`, child 1 first
//! 4. For each child, partition the graph into `k` parts and keep the
//!    instance-vertex assignment as the child's labels
//!
//! All draws happen before any partitioning, so the random stream is
//! consumed in the same order whether or not children are partitioned in
//! parallel.

use super::builder::{build_bipartite_graph, build_ensemble_graph, BipartiteGraph};
use super::config::HbgfConfig;
use super::decoder::decode;
use super::partitioner::{GraphGrowingPartitioner, GraphPartitioner};
use crate::crossover::{check_parent_count, cycle_copies, CrossoverOperator};
use crate::error::{ConsensusError, Result};
use crate::partition::PartitionSolution;
use crate::random::RandomSource;
use tracing::{debug, trace};

/// Hybrid Bipartite Graph Formulation crossover.
///
/// Combines two clusterings by partitioning the graph that links every
/// instance to its cluster in each parent. The partitioner is pluggable; the
/// default is [`GraphGrowingPartitioner`].
///
/// # Usage
///
/// ```
/// use u_consensus::hbgf::HbgfCrossover;
/// use u_consensus::partition::PartitionSolution;
/// use u_consensus::random::create_rng;
///
/// let a = PartitionSolution::new(vec![0, 0, 1, 1, 1, 1, 0], 2);
/// let b = PartitionSolution::new(vec![0, 0, 0, 1, 1, 1, 0], 2);
///
/// let crossover = HbgfCrossover::new();
/// let mut rng = create_rng(42);
/// let children = crossover.do_crossover(1.0, &a, &b, &mut rng).unwrap();
///
/// assert_eq!(children.len(), 2);
/// assert_eq!(children[0].cluster_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct HbgfCrossover<P = GraphGrowingPartitioner> {
    config: HbgfConfig,
    partitioner: P,
}

impl HbgfCrossover<GraphGrowingPartitioner> {
    /// Default configuration with the built-in partitioner.
    pub fn new() -> Self {
        Self {
            config: HbgfConfig::default(),
            partitioner: GraphGrowingPartitioner,
        }
    }

    /// Custom configuration with the built-in partitioner.
    pub fn from_config(config: HbgfConfig) -> Result<Self> {
        Self::with_partitioner(config, GraphGrowingPartitioner)
    }
}

impl Default for HbgfCrossover<GraphGrowingPartitioner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: GraphPartitioner> HbgfCrossover<P> {
    /// Creates an operator using `partitioner` as the cut oracle.
    ///
    /// Fails with [`ConsensusError::InvalidConfiguration`] if `config` does
    /// not validate.
    pub fn with_partitioner(config: HbgfConfig, partitioner: P) -> Result<Self> {
        config.validate()?;
        Ok(Self {
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

    /// Always 2.
    pub fn required_parents(&self) -> usize {
        2
    }

    pub fn generated_children(&self) -> usize {
        self.config.children
    }

    /// Runs the crossover on two parents with an explicit probability.
    ///
    /// This is the core of [`execute`](CrossoverOperator::execute) without the
    /// slice convention; the configured probability is ignored in favour of
    /// `probability`.
    pub fn do_crossover(
        &self,
        probability: f64,
        parent_a: &PartitionSolution,
        parent_b: &PartitionSolution,
        rng: &mut dyn RandomSource,
    ) -> Result<Vec<PartitionSolution>> {
        recombine(
            &self.partitioner,
            &self.config,
            probability,
            &[parent_a, parent_b],
            rng,
        )
    }

    /// Builds the HBGF graph of two parents.
    pub fn convert_to_graph(
        &self,
        parent_a: &PartitionSolution,
        parent_b: &PartitionSolution,
    ) -> Result<BipartiteGraph> {
        build_bipartite_graph(parent_a.labels(), parent_b.labels())
    }

    /// Produces one child with `k` clusters from an already built graph.
    ///
    /// The child takes the shape of `template`. Fails with
    /// [`ConsensusError::InvalidArgument`] if `template` and `graph` cover a
    /// different number of instances.
    pub fn offspring(
        &self,
        template: &PartitionSolution,
        graph: &BipartiteGraph,
        k: usize,
    ) -> Result<PartitionSolution> {
        if template.instance_count() != graph.instance_count() {
            return Err(ConsensusError::InvalidArgument(format!(
                "template has {} instances, graph has {}",
                template.instance_count(),
                graph.instance_count()
            )));
        }
        let labels = partition_child(&self.partitioner, graph, k)?;
        Ok(template.derive(&labels, k))
    }
}

impl<P: GraphPartitioner> CrossoverOperator<PartitionSolution> for HbgfCrossover<P> {
    fn required_parents(&self) -> usize {
        HbgfCrossover::required_parents(self)
    }

    fn generated_children(&self) -> usize {
        HbgfCrossover::generated_children(self)
    }

    fn execute(
        &self,
        parents: &[PartitionSolution],
        rng: &mut dyn RandomSource,
    ) -> Result<Vec<PartitionSolution>> {
        check_parent_count(parents, HbgfCrossover::required_parents(self))?;
        self.do_crossover(
            self.config.crossover_probability,
            &parents[0],
            &parents[1],
            rng,
        )
    }
}

/// Gating, graph construction, k selection, and per-child partitioning.
///
/// Shared by the two-parent and ensemble variants. Children take the shape
/// of the first parent.
pub(crate) fn recombine<P: GraphPartitioner>(
    partitioner: &P,
    config: &HbgfConfig,
    probability: f64,
    parents: &[&PartitionSolution],
    rng: &mut dyn RandomSource,
) -> Result<Vec<PartitionSolution>> {
    if !(0.0..=1.0).contains(&probability) {
        return Err(ConsensusError::InvalidArgument(format!(
            "crossover probability must be in [0, 1], got {probability}"
        )));
    }

    let u = rng.next_double();
    if u >= probability {
        debug!(u, probability, "crossover skipped, copying parents");
        let copies: Vec<PartitionSolution> = parents.iter().map(|&p| p.clone()).collect();
        return Ok(cycle_copies(&copies, config.children));
    }

    let labels: Vec<&[usize]> = parents.iter().map(|p| p.labels()).collect();
    let graph = build_ensemble_graph(&labels)?;

    let (parent_min, parent_max) = graph.cluster_count_bounds();
    let (lo, hi) = config.cluster_range.bounds(parent_min, parent_max);
    let ks: Vec<usize> = (0..config.children).map(|_| rng.next_int(lo, hi)).collect();
    debug!(
        vertices = graph.graph().len(),
        lo,
        hi,
        ?ks,
        "recombining parents"
    );

    let children = partition_children(partitioner, &graph, &ks, config.parallel)?;
    let template = parents[0];
    Ok(children
        .iter()
        .zip(&ks)
        .map(|(labels, &k)| template.derive(labels, k))
        .collect())
}

fn partition_child<P: GraphPartitioner>(
    partitioner: &P,
    graph: &BipartiteGraph,
    k: usize,
) -> Result<Vec<usize>> {
    let g = graph.graph();
    let assignment = partitioner.partition(g, k)?;
    let labels = decode(&assignment, g.len(), graph.instance_count(), k)?;
    trace!(k, cut = g.edge_cut(&assignment), "partitioned child");
    Ok(labels)
}

fn partition_children<P: GraphPartitioner>(
    partitioner: &P,
    graph: &BipartiteGraph,
    ks: &[usize],
    parallel: bool,
) -> Result<Vec<Vec<usize>>> {
    #[cfg(feature = "parallel")]
    {
        if parallel {
            use rayon::prelude::*;
            return ks
                .par_iter()
                .map(|&k| partition_child(partitioner, graph, k))
                .collect();
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    ks.iter()
        .map(|&k| partition_child(partitioner, graph, k))
        .collect()
}
