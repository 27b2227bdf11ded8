//! Graph model for the Midgard travel tools.
//!
//! This crate defines the data model shared by the route planner and the
//! trip simulator: a mapping of node identifiers to open-ended attribute
//! bags, undirected edges keyed by canonical node pairs, and the JSON
//! document format the tools persist. It performs no I/O; loading and
//! saving files is the caller's job.

/// Attribute values and the ordered string-keyed attribute bag.
pub mod attrs;
/// JSON document layer: serialized form of a graph and the loaders.
pub mod document;
/// Canonical edge keys and typed accessors for route attributes.
pub mod edge;
/// Error types used throughout the crate.
pub mod error;
/// The graph itself: node and edge collections with an adjacency view.
pub mod graph;
/// The built-in Midgard sample network.
pub mod sample;

/// Re-export attribute types.
pub use attrs::{AttrMap, AttrValue};
/// Re-export the document types.
pub use document::{Document, LoadMode};
/// Re-export the canonical edge key.
pub use edge::EdgeKey;
/// Re-export error types.
pub use error::{GraphError, GraphResult};
/// Re-export the graph type.
pub use graph::Graph;
