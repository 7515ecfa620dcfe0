//! Annotation tables and the attribute join
//!
//! Two independent annotations feed the classifier: disease association and
//! miRNA targeting. Each table is reduced to at most one row per gene before
//! the join; rows for genes absent from the graph are ignored without error.

use crate::graph::{GeneSymbol, PpiGraph};
use indexmap::{IndexMap, IndexSet};
use tracing::debug;

/// Reduce the miRNA-target table to an unambiguous marker set.
///
/// Genes are typically targeted by several miRNAs, so the raw table carries
/// one row per targeting relationship. A gene appearing in more than one row
/// is excluded entirely rather than deduplicated: ambiguous evidence is
/// dropped, not merged. Only genes with exactly one row survive.
pub fn reduce_mirna_targets(rows: impl IntoIterator<Item = String>) -> IndexSet<GeneSymbol> {
    let mut occurrences: IndexMap<GeneSymbol, usize> = IndexMap::new();
    let mut total = 0usize;

    for row in rows {
        *occurrences.entry(GeneSymbol::from(row)).or_insert(0) += 1;
        total += 1;
    }

    let reduced: IndexSet<GeneSymbol> = occurrences
        .into_iter()
        .filter(|(_, count)| *count == 1)
        .map(|(gene, _)| gene)
        .collect();

    debug!(
        rows = total,
        kept = reduced.len(),
        "reduced miRNA-target table"
    );
    reduced
}

/// Outcome of the attribute join, for reporting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JoinCounts {
    /// Disease rows that matched a graph node
    pub disease_marked: usize,
    /// Disease rows for genes absent from the graph
    pub disease_ignored: usize,
    /// miRNA rows that matched a graph node
    pub mirna_marked: usize,
    /// miRNA rows for genes absent from the graph
    pub mirna_ignored: usize,
}

/// Attach both annotations to the genes already present in the graph.
///
/// The disease table is assumed pre-deduplicated; the miRNA set must come
/// from [`reduce_mirna_targets`]. Annotations never create nodes.
pub fn apply_annotations(
    graph: &mut PpiGraph,
    disease: &IndexSet<GeneSymbol>,
    mirna: &IndexSet<GeneSymbol>,
) -> JoinCounts {
    let mut counts = JoinCounts::default();

    for symbol in disease {
        if graph.mark_disease_associated(symbol) {
            counts.disease_marked += 1;
        } else {
            counts.disease_ignored += 1;
        }
    }

    for symbol in mirna {
        if graph.mark_mirna_targeted(symbol) {
            counts.mirna_marked += 1;
        } else {
            counts.mirna_ignored += 1;
        }
    }

    debug!(
        disease_marked = counts.disease_marked,
        disease_ignored = counts.disease_ignored,
        mirna_marked = counts.mirna_marked,
        mirna_ignored = counts.mirna_ignored,
        "annotations joined"
    );
    counts
}
