//! Neighborhood category profiles
//!
//! For every node, tallies the nodes reachable within a bounded hop radius
//! by category. The expansion keeps the origin in its own reachable set, so
//! each row counts the node itself once in its own category column; this
//! self-count is deliberate, inherited behavior and is pinned by tests.

use crate::algo::{build_view, reachable_all};
use crate::classify::{Category, CategorySets};
use crate::graph::{GeneSymbol, GraphError, GraphResult, NodeId, PpiGraph};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Per-node tally of categorized nodes within the radius
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRow {
    pub gene: GeneSymbol,
    pub normal: u32,
    pub disease_associated: u32,
    pub mirna_targeted: u32,
    pub disease_and_mirna: u32,
}

impl ProfileRow {
    fn empty(gene: GeneSymbol) -> Self {
        ProfileRow {
            gene,
            normal: 0,
            disease_associated: 0,
            mirna_targeted: 0,
            disease_and_mirna: 0,
        }
    }

    fn bump(&mut self, category: Category) {
        match category {
            Category::Normal => self.normal += 1,
            Category::DiseaseAssociated => self.disease_associated += 1,
            Category::MirnaTargeted => self.mirna_targeted += 1,
            Category::DiseaseAndMirna => self.disease_and_mirna += 1,
        }
    }

    /// Count for one category column
    pub fn count(&self, category: Category) -> u32 {
        match category {
            Category::Normal => self.normal,
            Category::DiseaseAssociated => self.disease_associated,
            Category::MirnaTargeted => self.mirna_targeted,
            Category::DiseaseAndMirna => self.disease_and_mirna,
        }
    }

    /// Row sum; equals the size of the reachable set, origin included
    pub fn total(&self) -> u32 {
        self.normal + self.disease_associated + self.mirna_targeted + self.disease_and_mirna
    }
}

/// The full profile table: one row per node, in graph insertion order.
/// Built once after the category sets are finalized; immutable thereafter.
#[derive(Debug, Clone, Serialize)]
pub struct NeighborhoodProfile {
    radius: usize,
    rows: Vec<ProfileRow>,
}

impl NeighborhoodProfile {
    /// Expand every node's neighborhood and tally by category.
    ///
    /// `sets` must be the partition of `graph` itself (the pipeline
    /// recomputes it after component extraction). A radius of 0 is rejected
    /// with [`GraphError::InvalidRadius`].
    pub fn compute(
        graph: &PpiGraph,
        sets: &CategorySets,
        radius: usize,
    ) -> GraphResult<Self> {
        if radius == 0 {
            return Err(GraphError::InvalidRadius(radius));
        }

        let mut categories = Vec::with_capacity(graph.node_count());
        for (i, gene) in graph.nodes().enumerate() {
            let category = sets
                .category_of(NodeId::new(i as u64))
                .ok_or_else(|| GraphError::NodeNotFound(gene.symbol.clone()))?;
            categories.push(category);
        }

        let view = build_view(graph);
        let reach = reachable_all(&view, radius);

        let mut rows = Vec::with_capacity(graph.node_count());
        for (gene, reached) in graph.nodes().zip(reach) {
            let mut row = ProfileRow::empty(gene.symbol.clone());
            for idx in reached {
                row.bump(categories[idx]);
            }
            rows.push(row);
        }

        debug!(rows = rows.len(), radius, "neighborhood profile computed");
        Ok(NeighborhoodProfile { radius, rows })
    }

    /// Hop radius the table was computed at
    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Rows in graph insertion order
    pub fn rows(&self) -> &[ProfileRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Look up the row for a gene symbol
    pub fn get(&self, symbol: &str) -> Option<&ProfileRow> {
        self.rows.iter().find(|row| row.gene.as_str() == symbol)
    }
}
