//! ppinet: PPI network categorization and neighborhood analysis
//!
//! Builds an undirected protein-protein interaction graph from an edge
//! list, joins disease-association and miRNA-targeting annotations,
//! partitions genes into four disjoint categories, isolates the largest
//! connected component, ranks genes by normalized degree centrality, and
//! computes a bounded-radius neighborhood category profile for every
//! retained gene.
//!
//! # Architecture
//!
//! - [`graph`] owns the canonical node and edge sets (interned symbols,
//!   deduplicated undirected edges, annotation flags)
//! - [`annotate`] reduces the annotation tables and joins them onto the
//!   graph, dropping ambiguous miRNA evidence entirely
//! - [`classify`] partitions nodes into the four categories
//! - [`algo`] lowers the graph into the dense view consumed by the
//!   `ppinet-graph-algorithms` crate (components, centrality, bounded
//!   neighborhoods)
//! - [`rank`] and [`profile`] turn raw algorithm output into the ranking
//!   and the per-node profile table
//! - [`pipeline`] wires the stages together over immutable snapshots
//!
//! # Example Usage
//!
//! ```rust
//! use ppinet::{run_pipeline, PipelineConfig};
//!
//! let edges = vec![
//!     ("TP53".to_string(), "MDM2".to_string()),
//!     ("MDM2".to_string(), "CDKN1A".to_string()),
//! ];
//! let disease = vec!["TP53".to_string()];
//! let mirna = vec!["CDKN1A".to_string()];
//!
//! let report = run_pipeline(edges, disease, mirna, &PipelineConfig::default()).unwrap();
//! assert_eq!(report.full.nodes, 3);
//! assert!(report.full.connected);
//! assert_eq!(report.full.categories.disease_associated, 1);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod annotate;
pub mod classify;
pub mod graph;
pub mod pipeline;
pub mod profile;
pub mod rank;

// Re-export main types for convenience
pub use graph::{Gene, GeneSymbol, GraphError, GraphResult, NodeId, PpiGraph};

pub use annotate::{apply_annotations, reduce_mirna_targets, JoinCounts};

pub use classify::{Category, CategoryCounts, CategorySets};

pub use profile::{NeighborhoodProfile, ProfileRow};

pub use rank::{CentralityRanking, RankEntry};

pub use pipeline::{run_pipeline, AnalysisReport, GraphSummary, PipelineConfig};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.1.0");
    }
}
