//! Node classification
//!
//! Partitions the node set into four disjoint categories from the two
//! annotation flags. Category membership is always relative to the graph in
//! scope: after component extraction the partition is recomputed over the
//! reduced node set rather than cached from the full graph.

use crate::graph::{Gene, NodeId, PpiGraph};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four disjoint gene categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Normal,
    DiseaseAssociated,
    MirnaTargeted,
    DiseaseAndMirna,
}

impl Category {
    /// All categories, in the fixed column order of the profile table
    pub const ALL: [Category; 4] = [
        Category::Normal,
        Category::DiseaseAssociated,
        Category::MirnaTargeted,
        Category::DiseaseAndMirna,
    ];

    /// The truth table over the two annotation flags
    pub fn from_flags(disease_associated: bool, mirna_targeted: bool) -> Self {
        match (disease_associated, mirna_targeted) {
            (false, false) => Category::Normal,
            (true, false) => Category::DiseaseAssociated,
            (false, true) => Category::MirnaTargeted,
            (true, true) => Category::DiseaseAndMirna,
        }
    }

    /// Classify a gene by its annotation flags
    pub fn of(gene: &Gene) -> Self {
        Category::from_flags(gene.disease_associated, gene.mirna_targeted)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Normal => "normal",
            Category::DiseaseAssociated => "disease-associated",
            Category::MirnaTargeted => "miRNA-targeted",
            Category::DiseaseAndMirna => "disease+miRNA",
        };
        write!(f, "{}", name)
    }
}

/// Per-category node counts, for summaries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub normal: usize,
    pub disease_associated: usize,
    pub mirna_targeted: usize,
    pub disease_and_mirna: usize,
}

impl CategoryCounts {
    /// Sum of the four counts; equals the node count of the partitioned graph
    pub fn total(&self) -> usize {
        self.normal + self.disease_associated + self.mirna_targeted + self.disease_and_mirna
    }
}

/// The four disjoint node sets produced by classification.
///
/// Together they partition the node set of the graph they were computed
/// over: every node is in exactly one set and the sizes sum to the node
/// count. Sets keep graph insertion order.
#[derive(Debug, Clone, Default)]
pub struct CategorySets {
    normal: IndexSet<NodeId>,
    disease_associated: IndexSet<NodeId>,
    mirna_targeted: IndexSet<NodeId>,
    disease_and_mirna: IndexSet<NodeId>,
}

impl CategorySets {
    /// Classify every node of the graph
    pub fn partition(graph: &PpiGraph) -> Self {
        let mut sets = CategorySets::default();
        for (i, gene) in graph.nodes().enumerate() {
            let id = NodeId::new(i as u64);
            sets.set_mut(Category::of(gene)).insert(id);
        }
        sets
    }

    fn set_mut(&mut self, category: Category) -> &mut IndexSet<NodeId> {
        match category {
            Category::Normal => &mut self.normal,
            Category::DiseaseAssociated => &mut self.disease_associated,
            Category::MirnaTargeted => &mut self.mirna_targeted,
            Category::DiseaseAndMirna => &mut self.disease_and_mirna,
        }
    }

    /// The node set of one category
    pub fn set(&self, category: Category) -> &IndexSet<NodeId> {
        match category {
            Category::Normal => &self.normal,
            Category::DiseaseAssociated => &self.disease_associated,
            Category::MirnaTargeted => &self.mirna_targeted,
            Category::DiseaseAndMirna => &self.disease_and_mirna,
        }
    }

    /// Which category a node landed in, if it was part of the partition
    pub fn category_of(&self, id: NodeId) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|category| self.set(*category).contains(&id))
    }

    pub fn counts(&self) -> CategoryCounts {
        CategoryCounts {
            normal: self.normal.len(),
            disease_associated: self.disease_associated.len(),
            mirna_targeted: self.mirna_targeted.len(),
            disease_and_mirna: self.disease_and_mirna.len(),
        }
    }

    /// Total nodes across the four sets
    pub fn total(&self) -> usize {
        self.counts().total()
    }
}
