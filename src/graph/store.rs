//! In-memory interaction graph
//!
//! A simple undirected graph over interned gene symbols:
//! - nodes live in a dense vector in insertion order, so every downstream
//!   iteration (classification, ranking, profiling) is deterministic
//! - adjacency lists are kept per node; each undirected edge appears in
//!   both endpoints' lists exactly once
//! - a canonical-pair set deduplicates edges supplied in either order

use super::node::Gene;
use super::types::{GeneSymbol, NodeId};
use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

/// Errors that can occur while building or querying the graph
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge-list row with a missing endpoint fails the whole run;
    /// silently dropping rows would break the downstream sum checks.
    #[error("edge row {row}: missing {side} gene symbol")]
    MalformedEdge { row: usize, side: &'static str },

    /// Radius 0 would profile nothing but the origin; reject it up front
    #[error("neighborhood radius must be at least 1 (got {0})")]
    InvalidRadius(usize),

    #[error("gene {0} not found in the graph")]
    NodeNotFound(GeneSymbol),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Simple undirected graph of gene-gene interactions
///
/// Owns the canonical node and edge sets. Downstream stages operate on
/// read-only views or derived values and never mutate the structure.
#[derive(Debug, Clone, Default)]
pub struct PpiGraph {
    /// Node storage; index = NodeId
    genes: Vec<Gene>,

    /// Symbol -> id lookup for interning and annotation joins
    symbol_index: FxHashMap<GeneSymbol, NodeId>,

    /// Neighbor lists, parallel to `genes`
    adjacency: Vec<Vec<NodeId>>,

    /// Canonical (min, max) pairs for edge dedup
    edges: FxHashSet<(NodeId, NodeId)>,
}

impl PpiGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from `(source, target)` rows.
    ///
    /// Duplicate edges (in either order) collapse to one edge. A row with an
    /// empty endpoint after trimming is rejected with the 1-based row number.
    /// Self-interactions are dropped: the graph is simple.
    pub fn from_edge_list(
        rows: impl IntoIterator<Item = (String, String)>,
    ) -> GraphResult<Self> {
        let mut graph = PpiGraph::new();

        for (idx, (source, target)) in rows.into_iter().enumerate() {
            let source = source.trim();
            let target = target.trim();

            if source.is_empty() {
                return Err(GraphError::MalformedEdge {
                    row: idx + 1,
                    side: "source",
                });
            }
            if target.is_empty() {
                return Err(GraphError::MalformedEdge {
                    row: idx + 1,
                    side: "target",
                });
            }

            graph.add_interaction(source, target);
        }

        Ok(graph)
    }

    /// Add an undirected interaction, creating nodes as needed.
    ///
    /// Returns true if a new edge was inserted, false if it was a duplicate
    /// or a self-interaction.
    pub fn add_interaction(&mut self, a: &str, b: &str) -> bool {
        if a == b {
            return false;
        }

        let u = self.intern(a);
        let v = self.intern(b);
        let key = if u <= v { (u, v) } else { (v, u) };

        if !self.edges.insert(key) {
            return false;
        }

        self.adjacency[u.index()].push(v);
        self.adjacency[v.index()].push(u);
        true
    }

    fn intern(&mut self, symbol: &str) -> NodeId {
        if let Some(&id) = self.symbol_index.get(symbol) {
            return id;
        }

        let id = NodeId::new(self.genes.len() as u64);
        let symbol = GeneSymbol::from(symbol);
        self.genes.push(Gene::new(symbol.clone()));
        self.symbol_index.insert(symbol, id);
        self.adjacency.push(Vec::new());
        id
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.genes.len()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Gene> {
        self.genes.iter()
    }

    /// Ids of all nodes, in insertion order
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.genes.len() as u64).map(NodeId::new)
    }

    /// Get a node by id
    pub fn gene(&self, id: NodeId) -> Option<&Gene> {
        self.genes.get(id.index())
    }

    /// Resolve a symbol to its id
    pub fn node_id(&self, symbol: &str) -> Option<NodeId> {
        self.symbol_index.get(symbol).copied()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.symbol_index.contains_key(symbol)
    }

    /// Neighbors of a node, in the order their edges were inserted
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        self.adjacency
            .get(id.index())
            .map_or(&[][..], Vec::as_slice)
    }

    pub fn degree(&self, id: NodeId) -> usize {
        self.neighbors(id).len()
    }

    /// Flag a gene as disease-associated. Genes absent from the graph are
    /// left alone; the return value says whether the mark landed.
    pub fn mark_disease_associated(&mut self, symbol: &GeneSymbol) -> bool {
        match self.symbol_index.get(symbol) {
            Some(&id) => {
                self.genes[id.index()].disease_associated = true;
                true
            }
            None => false,
        }
    }

    /// Flag a gene as miRNA-targeted; same ignore semantics as above.
    pub fn mark_mirna_targeted(&mut self, symbol: &GeneSymbol) -> bool {
        match self.symbol_index.get(symbol) {
            Some(&id) => {
                self.genes[id.index()].mirna_targeted = true;
                true
            }
            None => false,
        }
    }

    /// The subgraph induced by `keep`: retained genes (annotation flags
    /// included) plus every edge with both endpoints retained.
    ///
    /// Nodes are re-interned in the original insertion order, so the
    /// subgraph's iteration order is the parent's order filtered down.
    pub fn induced_subgraph(&self, keep: impl IntoIterator<Item = NodeId>) -> PpiGraph {
        let keep: FxHashSet<NodeId> = keep.into_iter().collect();
        let mut sub = PpiGraph::new();

        for (i, gene) in self.genes.iter().enumerate() {
            if !keep.contains(&NodeId::new(i as u64)) {
                continue;
            }
            let new_id = sub.intern(gene.symbol.as_str());
            sub.genes[new_id.index()].disease_associated = gene.disease_associated;
            sub.genes[new_id.index()].mirna_targeted = gene.mirna_targeted;
        }

        for (i, neighbors) in self.adjacency.iter().enumerate() {
            let u = NodeId::new(i as u64);
            if !keep.contains(&u) {
                continue;
            }
            for &v in neighbors {
                // Visit each retained edge once from its lower endpoint
                if u < v && keep.contains(&v) {
                    sub.add_interaction(
                        self.genes[u.index()].symbol.as_str(),
                        self.genes[v.index()].symbol.as_str(),
                    );
                }
            }
        }

        sub
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(a: &str, b: &str) -> (String, String) {
        (a.to_string(), b.to_string())
    }

    #[test]
    fn test_duplicate_edges_collapse() {
        let graph =
            PpiGraph::from_edge_list(vec![edge("A", "B"), edge("A", "B"), edge("B", "A")])
                .unwrap();

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        let a = graph.node_id("A").unwrap();
        assert_eq!(graph.degree(a), 1);
    }

    #[test]
    fn test_malformed_row_rejected() {
        let err = PpiGraph::from_edge_list(vec![edge("A", "B"), edge("C", " ")]).unwrap_err();
        assert_eq!(
            err,
            GraphError::MalformedEdge {
                row: 2,
                side: "target"
            }
        );

        let err = PpiGraph::from_edge_list(vec![edge("", "B")]).unwrap_err();
        assert_eq!(
            err,
            GraphError::MalformedEdge {
                row: 1,
                side: "source"
            }
        );
    }

    #[test]
    fn test_self_interaction_dropped() {
        let graph = PpiGraph::from_edge_list(vec![edge("A", "A"), edge("A", "B")]).unwrap();
        assert_eq!(graph.edge_count(), 1);
        let a = graph.node_id("A").unwrap();
        assert_eq!(graph.degree(a), 1);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let graph =
            PpiGraph::from_edge_list(vec![edge("C", "A"), edge("A", "B"), edge("B", "D")])
                .unwrap();

        let order: Vec<&str> = graph.nodes().map(|g| g.symbol.as_str()).collect();
        assert_eq!(order, vec!["C", "A", "B", "D"]);
    }

    #[test]
    fn test_annotation_marks() {
        let mut graph = PpiGraph::from_edge_list(vec![edge("A", "B")]).unwrap();

        assert!(graph.mark_disease_associated(&GeneSymbol::new("A")));
        assert!(!graph.mark_disease_associated(&GeneSymbol::new("ZZZ")));

        let a = graph.node_id("A").unwrap();
        assert!(graph.gene(a).unwrap().disease_associated);
        assert!(!graph.gene(a).unwrap().mirna_targeted);
    }

    #[test]
    fn test_induced_subgraph() {
        let mut graph = PpiGraph::from_edge_list(vec![
            edge("A", "B"),
            edge("B", "C"),
            edge("D", "E"),
        ])
        .unwrap();
        graph.mark_disease_associated(&GeneSymbol::new("B"));

        let keep: Vec<NodeId> = ["A", "B", "C"]
            .iter()
            .map(|s| graph.node_id(s).unwrap())
            .collect();
        let sub = graph.induced_subgraph(keep);

        assert_eq!(sub.node_count(), 3);
        assert_eq!(sub.edge_count(), 2);
        assert!(!sub.contains("D"));

        let b = sub.node_id("B").unwrap();
        assert!(sub.gene(b).unwrap().disease_associated);
        assert_eq!(sub.degree(b), 2);
    }
}
