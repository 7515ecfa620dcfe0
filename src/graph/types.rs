//! Core type definitions for the interaction network

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Gene symbol, the case-sensitive external key of a node (e.g. "TP53")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct GeneSymbol(String);

impl GeneSymbol {
    pub fn new(symbol: impl Into<String>) -> Self {
        GeneSymbol(symbol.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GeneSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for GeneSymbol {
    fn from(s: String) -> Self {
        GeneSymbol(s)
    }
}

impl From<&str> for GeneSymbol {
    fn from(s: &str) -> Self {
        GeneSymbol(s.to_string())
    }
}

impl Borrow<str> for GeneSymbol {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Unique identifier for a node
///
/// Assigned densely in interning order, so `index()` addresses the graph's
/// parallel vectors directly. Ids are local to the graph that issued them;
/// an induced subgraph re-interns and hands out fresh ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct NodeId(pub u64);

impl NodeId {
    pub fn new(id: u64) -> Self {
        NodeId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        NodeId(id)
    }
}
