//! Undirected graph in compressed sparse row form.

/// An undirected, unweighted graph stored as CSR arrays.
///
/// `xadj` has `vertex_count + 1` offsets; the neighbours of vertex `v` are
/// `adjncy[xadj[v]..xadj[v + 1]]`. Every edge is stored in both directions.
///
/// Equality is structural: two graphs are equal only if their vertex counts
/// and both arrays match in stored order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphCsr {
    vertex_count: usize,
    xadj: Vec<usize>,
    adjncy: Vec<usize>,
}

impl GraphCsr {
    /// Wraps raw CSR arrays.
    ///
    /// # Panics
    /// Panics if `xadj` does not have `vertex_count + 1` entries, is not
    /// non-decreasing, or does not end at `adjncy.len()`.
    pub fn new(vertex_count: usize, xadj: Vec<usize>, adjncy: Vec<usize>) -> Self {
        assert_eq!(xadj.len(), vertex_count + 1, "xadj must have vertex_count + 1 offsets");
        assert!(
            xadj.windows(2).all(|w| w[0] <= w[1]),
            "xadj offsets must be non-decreasing"
        );
        assert_eq!(xadj[vertex_count], adjncy.len(), "xadj must end at adjncy.len()");
        Self {
            vertex_count,
            xadj,
            adjncy,
        }
    }

    /// The number of vertices in the graph.
    pub fn len(&self) -> usize {
        self.vertex_count
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    /// Row offsets.
    pub fn xadj(&self) -> &[usize] {
        &self.xadj
    }

    /// Flattened adjacency lists.
    pub fn adjncy(&self) -> &[usize] {
        &self.adjncy
    }

    /// Neighbours of `vertex`, in stored order.
    pub fn neighbors(&self, vertex: usize) -> &[usize] {
        &self.adjncy[self.xadj[vertex]..self.xadj[vertex + 1]]
    }

    pub fn degree(&self, vertex: usize) -> usize {
        self.xadj[vertex + 1] - self.xadj[vertex]
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjncy.len() / 2
    }

    /// Whether every stored edge `(u, v)` has its mirror `(v, u)`.
    pub fn is_symmetric(&self) -> bool {
        (0..self.vertex_count).all(|u| {
            self.neighbors(u)
                .iter()
                .all(|&v| v < self.vertex_count && self.neighbors(v).contains(&u))
        })
    }

    /// The edge cut of a partition: the number of edges whose endpoints lie in
    /// different parts.
    ///
    /// Each undirected edge is counted once, from its higher endpoint.
    pub fn edge_cut(&self, partition: &[usize]) -> usize {
        debug_assert_eq!(self.vertex_count, partition.len());
        (0..self.vertex_count)
            .map(|vertex| {
                let part = partition[vertex];
                self.neighbors(vertex)
                    .iter()
                    .filter(|&&neighbor| neighbor < vertex && partition[neighbor] != part)
                    .count()
            })
            .sum()
    }
}
