//! Shared view of the graph topology for algorithm execution
//!
//! Provides a read-only, integer-indexed view of an undirected graph in
//! Compressed Sparse Row (CSR) format.

/// A dense, integer-indexed view of an undirected graph topology.
///
/// Node indices run `0..node_count`; callers keep their own mapping from
/// domain identifiers to dense indices. Each undirected edge appears in the
/// neighbor list of both endpoints.
pub struct GraphView {
    /// Number of nodes
    pub node_count: usize,
    /// Offsets into `targets`. Size = node_count + 1
    pub offsets: Vec<usize>,
    /// Contiguous array of neighbor indices
    pub targets: Vec<usize>,
}

impl GraphView {
    /// Build a view from per-node adjacency lists.
    pub fn from_adjacency(adjacency: Vec<Vec<usize>>) -> Self {
        let node_count = adjacency.len();
        let mut offsets = Vec::with_capacity(node_count + 1);
        let mut targets = Vec::new();

        offsets.push(0);
        for neighbors in adjacency {
            targets.extend(neighbors);
            offsets.push(targets.len());
        }

        GraphView {
            node_count,
            offsets,
            targets,
        }
    }

    /// Get the degree of a node (by index)
    pub fn degree(&self, idx: usize) -> usize {
        self.offsets[idx + 1] - self.offsets[idx]
    }

    /// Get the neighbors of a node (by index)
    pub fn neighbors(&self, idx: usize) -> &[usize] {
        let start = self.offsets[idx];
        let end = self.offsets[idx + 1];
        &self.targets[start..end]
    }
}
