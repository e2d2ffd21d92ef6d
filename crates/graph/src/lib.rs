//! # ldscope graph
//!
//! Turns loosely structured linked-data documents into a well-formed
//! node/link graph.
//!
//! ## Architecture
//!
//! ```text
//! JSON text
//!     │
//!     ├──> parse_document (the only fallible step)
//!     │
//!     ├──> Graph Builder
//!     │      ├─ Flatten arrays and @graph wrappers
//!     │      ├─ Resolve id / type / display name per entity
//!     │      ├─ Classify each property value (RelationshipValue)
//!     │      └─ Materialize links, references and literal leaves
//!     │
//!     └──> Graph (petgraph multigraph, unique ids, ordered links)
//!            ├─ Nodes: entities, URL references, literal values
//!            └─ Links: relations weighted by what they point at
//! ```
//!
//! ## Example
//!
//! ```
//! use ldscope_graph::{build_graph, NodeKind};
//! use serde_json::json;
//!
//! let graph = build_graph(&json!({ "@id": "x", "tag": "http://example.com/a" }));
//! assert_eq!(graph.node_count(), 2);
//! assert_eq!(graph.node("http://example.com/a").unwrap().kind, NodeKind::Reference);
//! ```

mod builder;
mod classify;
mod document;
mod error;
mod graph;
mod ids;
pub mod naming;
mod summary;
mod types;

pub use builder::{build_graph, GraphBuilder};
pub use classify::{classify, RelationshipValue};
pub use document::{
    build_from_str, entity_id, entity_type, flatten_entities, is_metadata_key, parse_document,
    MAX_DEPTH,
};
pub use error::{GraphError, Result};
pub use summary::{Bucket, GraphSummary, Hotspot};
pub use types::{
    Graph, GraphEdge, GraphLink, GraphNode, GraphSnapshot, NodeKind, CONTAINS_RELATION,
    CONTAINS_WEIGHT, REFERENCE_WEIGHT, SCALAR_WEIGHT, STRING_WEIGHT, UNKNOWN_TYPE, URL_WEIGHT,
};

pub use petgraph::graph::NodeIndex;
