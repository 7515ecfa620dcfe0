//! Centrality ranking
//!
//! Turns per-node centrality scores into a deterministic descending
//! ranking. Ties keep graph insertion order (the sort is stable), so two
//! runs over the same inputs produce the same ordering.

use crate::graph::{GeneSymbol, PpiGraph};
use serde::{Deserialize, Serialize};

/// One ranked node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankEntry {
    pub gene: GeneSymbol,
    /// Normalized score in [0, 1]
    pub score: f64,
}

/// Descending ranking of all nodes by centrality score
#[derive(Debug, Clone, Default, Serialize)]
pub struct CentralityRanking {
    entries: Vec<RankEntry>,
}

impl CentralityRanking {
    /// Pair the graph's nodes with their scores and sort descending.
    ///
    /// `scores` is indexed by node id, as returned by
    /// [`degree_centrality`](crate::algo::degree_centrality) over a view of
    /// the same graph.
    pub fn from_scores(graph: &PpiGraph, scores: &[f64]) -> Self {
        let mut entries: Vec<RankEntry> = graph
            .nodes()
            .zip(scores)
            .map(|(gene, &score)| RankEntry {
                gene: gene.symbol.clone(),
                score,
            })
            .collect();

        entries.sort_by(|a, b| b.score.total_cmp(&a.score));

        CentralityRanking { entries }
    }

    /// Full ordered list, best first
    pub fn entries(&self) -> &[RankEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The k highest-scored entries
    pub fn top(&self, k: usize) -> &[RankEntry] {
        &self.entries[..k.min(self.entries.len())]
    }

    /// The k lowest-scored entries, still in descending order (the tail of
    /// the ranking, like slicing the last k of a sorted list)
    pub fn bottom(&self, k: usize) -> &[RankEntry] {
        let n = self.entries.len();
        &self.entries[n - k.min(n)..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_graph() -> PpiGraph {
        // A - B - C - D: degrees 1, 2, 2, 1
        PpiGraph::from_edge_list(vec![
            ("A".to_string(), "B".to_string()),
            ("B".to_string(), "C".to_string()),
            ("C".to_string(), "D".to_string()),
        ])
        .unwrap()
    }

    #[test]
    fn test_descending_with_stable_ties() {
        let graph = chain_graph();
        let scores = vec![1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0, 1.0 / 3.0];
        let ranking = CentralityRanking::from_scores(&graph, &scores);

        let order: Vec<&str> = ranking.entries().iter().map(|e| e.gene.as_str()).collect();
        // B before C and A before D: insertion order breaks the ties
        assert_eq!(order, vec!["B", "C", "A", "D"]);
    }

    #[test]
    fn test_slices() {
        let graph = chain_graph();
        let scores = vec![0.1, 0.9, 0.5, 0.3];
        let ranking = CentralityRanking::from_scores(&graph, &scores);

        let top: Vec<&str> = ranking.top(2).iter().map(|e| e.gene.as_str()).collect();
        assert_eq!(top, vec!["B", "C"]);

        let bottom: Vec<&str> = ranking.bottom(2).iter().map(|e| e.gene.as_str()).collect();
        assert_eq!(bottom, vec!["D", "A"]);

        // Oversized k clamps to the whole ranking
        assert_eq!(ranking.top(10).len(), 4);
        assert_eq!(ranking.bottom(10).len(), 4);
    }

    #[test]
    fn test_empty_ranking() {
        let ranking = CentralityRanking::from_scores(&PpiGraph::new(), &[]);
        assert!(ranking.is_empty());
        assert!(ranking.top(5).is_empty());
        assert!(ranking.bottom(5).is_empty());
    }
}
