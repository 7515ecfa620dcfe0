//! Node payload for the interaction network

use super::types::GeneSymbol;
use serde::{Deserialize, Serialize};

/// A gene in the interaction network.
///
/// Carries the two annotation flags the classifier reads. Both default to
/// false; the attribute join flips them for genes present in the respective
/// annotation table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gene {
    /// External identifier of this node
    pub symbol: GeneSymbol,

    /// Present in the disease-gene annotation table
    pub disease_associated: bool,

    /// Targeted by exactly one miRNA row after ambiguity reduction
    pub mirna_targeted: bool,
}

impl Gene {
    /// Create an unannotated gene
    pub fn new(symbol: GeneSymbol) -> Self {
        Gene {
            symbol,
            disease_associated: false,
            mirna_targeted: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_gene_is_unannotated() {
        let gene = Gene::new(GeneSymbol::new("TP53"));
        assert_eq!(gene.symbol.as_str(), "TP53");
        assert!(!gene.disease_associated);
        assert!(!gene.mirna_targeted);
    }
}
