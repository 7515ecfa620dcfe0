//! Graph algorithms module
//!
//! Topology algorithms are implemented in the `ppinet-graph-algorithms`
//! crate against a dense index-based view. This module provides the
//! integration layer: lowering a [`PpiGraph`] into that view. Node ids are
//! assigned densely in interning order, so a graph's `NodeId` values and
//! the view's indices coincide.

use crate::graph::PpiGraph;

// Re-export algorithms
pub use ppinet_graph_algorithms::{
    connected_components, degree_centrality, reachable_all, reachable_within, ComponentsResult,
    GraphView,
};

/// Build a dense view of the graph for algorithm execution
pub fn build_view(graph: &PpiGraph) -> GraphView {
    let mut adjacency = Vec::with_capacity(graph.node_count());

    for id in graph.node_ids() {
        adjacency.push(
            graph
                .neighbors(id)
                .iter()
                .map(|neighbor| neighbor.index())
                .collect(),
        );
    }

    GraphView::from_adjacency(adjacency)
}
