//! Interaction network data model
//!
//! Implements the graph builder: a simple undirected graph over interned
//! gene symbols, with per-node annotation flags and edge deduplication.

pub mod node;
pub mod store;
pub mod types;

// Re-export main types
pub use node::Gene;
pub use store::{GraphError, GraphResult, PpiGraph};
pub use types::{GeneSymbol, NodeId};
