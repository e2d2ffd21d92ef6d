//! # ldscope analytics
//!
//! Structural metrics over an [`ldscope_graph::Graph`], treated as an
//! undirected simple graph: direction, parallel links and self-loops are
//! dropped before anything is measured.
//!
//! ## Metrics
//!
//! | Field | Meaning |
//! |-------|---------|
//! | `density` | distinct edges over possible edges |
//! | `degree` | distinct neighbors per node |
//! | `clustering` | mean local clustering over nodes of degree >= 2 |
//! | `betweenness` | Brandes, scaled by `2/((n-1)(n-2))` |
//! | `closeness` | reachable count over distance sum, per component |
//! | `eigenvector` | power iteration, L2-normalized |
//! | `communities` | label propagation with a pass ceiling |
//! | `diameter` / `averagePathLength` | over finite BFS distances |
//!
//! Per-source BFS work runs on rayon unless [`AnalyticsConfig::parallel`]
//! is off; both modes produce identical reports.
//!
//! ```
//! use ldscope_analytics::analyze;
//! use ldscope_graph::build_graph;
//! use serde_json::json;
//!
//! let graph = build_graph(&json!([
//!     { "@id": "a", "next": { "@id": "b" } },
//!     { "@id": "b", "next": { "@id": "c" } },
//!     { "@id": "c" }
//! ]));
//! let report = analyze(&graph);
//! assert_eq!(report.diameter, 2);
//! assert!(report.betweenness["b"] > report.betweenness["a"]);
//! ```

mod adjacency;
mod analyzer;
pub mod centrality;
pub mod community;
mod config;
mod error;
pub mod paths;
mod report;
pub mod structure;
mod sweep;

pub use adjacency::Adjacency;
pub use analyzer::{analyze, Analyzer};
pub use config::{AnalyticsConfig, CommunityConfig, EigenvectorConfig, DEFAULT_MAX_NODES};
pub use error::{AnalyticsError, Result};
pub use report::{AnalyticsReport, RankedNode};
