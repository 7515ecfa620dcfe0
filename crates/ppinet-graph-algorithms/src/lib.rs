//! Pure graph-topology algorithms for the ppinet toolkit.
//!
//! Everything here operates on a dense, read-only [`GraphView`] and knows
//! nothing about genes or annotations. The host crate lowers its graph into
//! a view and maps index-based results back to its own identifiers.

pub mod centrality;
pub mod common;
pub mod components;
pub mod neighborhood;

pub use centrality::degree_centrality;
pub use common::GraphView;
pub use components::{connected_components, ComponentsResult};
pub use neighborhood::{reachable_all, reachable_within};
