//! Degree centrality

use super::common::GraphView;

/// Normalized degree centrality for every node, by index.
///
/// Each score is `degree / (node_count - 1)`, the fraction of the other
/// nodes a node is directly connected to, so scores fall in `[0, 1]` for a
/// simple graph. Graphs with fewer than two nodes yield 0.0 for every node
/// rather than dividing by the degenerate denominator.
pub fn degree_centrality(view: &GraphView) -> Vec<f64> {
    let n = view.node_count;
    if n <= 1 {
        return vec![0.0; n];
    }

    let denom = (n - 1) as f64;
    (0..n).map(|idx| view.degree(idx) as f64 / denom).collect()
}
