//! Bipartite cluster-graph construction.
//!
//! Given M clusterings of the same N instances, builds the graph whose
//! vertices are the instances followed by one block of cluster vertices per
//! clustering. Each instance is linked to the cluster it belongs to in every
//! clustering, so instance vertices have degree M and a cluster vertex has one
//! edge per member.
//!
//! ```text
//! vertices: [ 0 .. N ) [ N .. N+k0 ) [ N+k0 .. N+k0+k1 ) ...
//!            instances  clusters of 0  clusters of 1
//! ```
//!
//! Rows are filled in a degree-count / prefix-sum / fill sequence, visiting
//! instances in ascending order, so every adjacency list is sorted and the
//! arrays are bit-for-bit reproducible.
//!
//! # Reference
//!
//! Fern & Brodley (2004), "Solving Cluster Ensemble Problems by Bipartite
//! Graph Partitioning"

use super::graph::GraphCsr;
use crate::error::{ConsensusError, Result};
use std::collections::HashMap;

/// A cluster graph together with the layout needed to interpret it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BipartiteGraph {
    graph: GraphCsr,
    instance_count: usize,
    cluster_counts: Vec<usize>,
}

impl BipartiteGraph {
    pub fn graph(&self) -> &GraphCsr {
        &self.graph
    }

    pub fn into_graph(self) -> GraphCsr {
        self.graph
    }

    /// Number of instance vertices `N`.
    pub fn instance_count(&self) -> usize {
        self.instance_count
    }

    /// Canonical cluster count of each input clustering, in input order.
    pub fn cluster_counts(&self) -> &[usize] {
        &self.cluster_counts
    }

    /// Smallest and largest input cluster counts.
    pub fn cluster_count_bounds(&self) -> (usize, usize) {
        let min = self.cluster_counts.iter().copied().min().unwrap_or(0);
        let max = self.cluster_counts.iter().copied().max().unwrap_or(0);
        (min, max)
    }

    /// First vertex id of the cluster block for clustering `index`.
    pub fn cluster_offset(&self, index: usize) -> usize {
        self.instance_count + self.cluster_counts[..index].iter().sum::<usize>()
    }
}

/// Renumbers arbitrary labels to `0..k` in first-seen order.
///
/// Returns the canonical labels and `k`.
///
/// ```
/// use u_consensus::hbgf::canonicalize;
///
/// let (canon, k) = canonicalize(&[7, 7, 3, 9, 3]);
/// assert_eq!(canon, vec![0, 0, 1, 2, 1]);
/// assert_eq!(k, 3);
/// ```
pub fn canonicalize(labels: &[usize]) -> (Vec<usize>, usize) {
    let mut map: HashMap<usize, usize> = HashMap::new();
    let mut next = 0usize;
    let canon = labels
        .iter()
        .map(|&label| {
            *map.entry(label).or_insert_with(|| {
                let id = next;
                next += 1;
                id
            })
        })
        .collect();
    (canon, next)
}

/// Builds the HBGF graph for two clusterings.
///
/// Fails with [`ConsensusError::InvalidArgument`] if the label slices differ
/// in length or are empty.
pub fn build_bipartite_graph(a: &[usize], b: &[usize]) -> Result<BipartiteGraph> {
    build_ensemble_graph(&[a, b])
}

/// Builds the cluster graph for any number of clusterings.
pub fn build_ensemble_graph(clusterings: &[&[usize]]) -> Result<BipartiteGraph> {
    let first = clusterings.first().ok_or_else(|| {
        ConsensusError::InvalidArgument("at least one clustering is required".into())
    })?;
    let n = first.len();
    if n == 0 {
        return Err(ConsensusError::InvalidArgument(
            "clusterings must cover at least one instance".into(),
        ));
    }
    if let Some((index, other)) = clusterings
        .iter()
        .enumerate()
        .find(|(_, labels)| labels.len() != n)
    {
        return Err(ConsensusError::InvalidArgument(format!(
            "clustering {index} has {} labels, expected {n}",
            other.len()
        )));
    }

    let (canonical, cluster_counts): (Vec<Vec<usize>>, Vec<usize>) =
        clusterings.iter().map(|labels| canonicalize(labels)).unzip();

    let mut offsets = Vec::with_capacity(cluster_counts.len());
    let mut next = n;
    for &k in &cluster_counts {
        offsets.push(next);
        next += k;
    }
    let vertex_count = next;
    let m = clusterings.len();

    // Pass 1: degrees.
    let mut degree = vec![0usize; vertex_count];
    degree[..n].fill(m);
    for (canon, &offset) in canonical.iter().zip(&offsets) {
        for &c in canon {
            degree[offset + c] += 1;
        }
    }

    // Pass 2: prefix sum.
    let mut xadj = Vec::with_capacity(vertex_count + 1);
    xadj.push(0);
    let mut total = 0usize;
    for d in &degree {
        total += d;
        xadj.push(total);
    }

    // Pass 3: fill.
    let mut adjncy = vec![0usize; total];
    let mut cursor = xadj[..vertex_count].to_vec();
    for instance in 0..n {
        for (canon, &offset) in canonical.iter().zip(&offsets) {
            let cluster = offset + canon[instance];
            adjncy[cursor[instance]] = cluster;
            cursor[instance] += 1;
            adjncy[cursor[cluster]] = instance;
            cursor[cluster] += 1;
        }
    }

    tracing::trace!(
        instances = n,
        clusterings = m,
        vertices = vertex_count,
        edges = total / 2,
        "built cluster graph"
    );

    Ok(BipartiteGraph {
        graph: GraphCsr::new(vertex_count, xadj, adjncy),
        instance_count: n,
        cluster_counts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn fixture_parents() -> (Vec<usize>, Vec<usize>) {
        (vec![4, 4, 1, 1, 1, 1, 4], vec![0, 0, 0, 6, 6, 6, 0])
    }

    #[test]
    fn test_canonicalize_first_seen() {
        let (canon, k) = canonicalize(&[2, 0, 2, 5, 0]);
        assert_eq!(canon, vec![0, 1, 0, 2, 1]);
        assert_eq!(k, 3);
    }

    #[test]
    fn test_canonicalize_single_cluster() {
        let (canon, k) = canonicalize(&[9, 9, 9]);
        assert_eq!(canon, vec![0, 0, 0]);
        assert_eq!(k, 1);
    }

    #[test]
    fn test_fixture_graph() {
        let (a, b) = fixture_parents();
        let built = build_bipartite_graph(&a, &b).unwrap();
        let expected = GraphCsr::new(
            11,
            vec![0, 2, 4, 6, 8, 10, 12, 14, 17, 21, 25, 28],
            vec![
                7, 9, 7, 9, 8, 9, 8, 10, 8, 10, 8, 10, 7, 9, // instances
                0, 1, 6, // A0
                2, 3, 4, 5, // A1
                0, 1, 2, 6, // B0
                3, 4, 5, // B1
            ],
        );
        assert_eq!(built.graph(), &expected);
        assert_eq!(built.instance_count(), 7);
        assert_eq!(built.cluster_counts(), &[2, 2]);
        assert_eq!(built.cluster_offset(1), 9);
    }

    #[test]
    fn test_raw_label_values_do_not_matter() {
        let (a, b) = fixture_parents();
        let relabeled_a: Vec<usize> = a.iter().map(|&l| l * 10 + 3).collect();
        let g1 = build_bipartite_graph(&a, &b).unwrap();
        let g2 = build_bipartite_graph(&relabeled_a, &b).unwrap();
        assert_eq!(g1, g2);
    }

    #[test]
    fn test_length_mismatch() {
        let err = build_bipartite_graph(&[0, 1, 1], &[0, 1]).unwrap_err();
        assert!(matches!(err, ConsensusError::InvalidArgument(_)));
    }

    #[test]
    fn test_empty_rejected() {
        let err = build_bipartite_graph(&[], &[]).unwrap_err();
        assert!(matches!(err, ConsensusError::InvalidArgument(_)));
        let err = build_ensemble_graph(&[]).unwrap_err();
        assert!(matches!(err, ConsensusError::InvalidArgument(_)));
    }

    #[test]
    fn test_ensemble_three_clusterings() {
        let a = [0, 0, 1];
        let b = [0, 1, 1];
        let c = [5, 5, 5];
        let built = build_ensemble_graph(&[&a, &b, &c]).unwrap();
        let g = built.graph();
        assert_eq!(g.len(), 3 + 2 + 2 + 1);
        assert_eq!(g.neighbors(0), &[3, 5, 7]);
        assert_eq!(g.neighbors(2), &[4, 6, 7]);
        assert_eq!(g.neighbors(7), &[0, 1, 2]);
        assert_eq!(built.cluster_count_bounds(), (1, 2));
        assert!(g.is_symmetric());
    }

    fn parent_pair() -> impl Strategy<Value = (Vec<usize>, Vec<usize>)> {
        (1usize..40).prop_flat_map(|n| {
            (
                prop::collection::vec(0usize..6, n),
                prop::collection::vec(0usize..9, n),
            )
        })
    }

    proptest! {
        #[test]
        fn prop_vertex_count((a, b) in parent_pair()) {
            let (_, ka) = canonicalize(&a);
            let (_, kb) = canonicalize(&b);
            let built = build_bipartite_graph(&a, &b).unwrap();
            prop_assert_eq!(built.graph().len(), a.len() + ka + kb);
        }

        #[test]
        fn prop_structure((a, b) in parent_pair()) {
            let built = build_bipartite_graph(&a, &b).unwrap();
            let g = built.graph();
            let n = a.len();
            prop_assert!(g.is_symmetric());
            for v in 0..g.len() {
                let row = g.neighbors(v);
                prop_assert!(!row.contains(&v), "self-loop at {}", v);
                prop_assert!(row.windows(2).all(|w| w[0] < w[1]), "row {} not strictly sorted", v);
                if v < n {
                    prop_assert_eq!(g.degree(v), 2);
                } else {
                    prop_assert!(row.iter().all(|&u| u < n));
                }
            }
        }

        #[test]
        fn prop_cluster_degree_is_member_count((a, b) in parent_pair()) {
            let built = build_bipartite_graph(&a, &b).unwrap();
            let (canon_a, ka) = canonicalize(&a);
            for c in 0..ka {
                let members = canon_a.iter().filter(|&&x| x == c).count();
                prop_assert_eq!(built.graph().degree(a.len() + c), members);
            }
        }

        #[test]
        fn prop_deterministic((a, b) in parent_pair()) {
            let g1 = build_bipartite_graph(&a, &b).unwrap();
            let g2 = build_bipartite_graph(&a, &b).unwrap();
            prop_assert_eq!(g1, g2);
        }
    }
}
