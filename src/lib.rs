//! netviz - graph upload/generation service with interactive rendering
//!
//! A graph is built per request (from a CSV edge list or an Erdos-Renyi
//! generator), filtered by a minimum degree, styled, and serialized to a
//! self-contained HTML document that is returned alongside degree statistics.
//!
//! ## Pipeline
//! Edge list / generator -> Graph -> degree filter -> stats + styling -> document
//!
//! ```rust
//! use netviz::graph::{process, EdgeRow, Graph, GraphOptions};
//!
//! let graph = Graph::from_edge_rows(vec![
//!     EdgeRow::new("A", "B"),
//!     EdgeRow::new("B", "C"),
//!     EdgeRow::new("C", "A"),
//! ]);
//! let processed = process(&graph, &GraphOptions::default());
//! assert_eq!(processed.stats.num_edges, 3);
//! ```

// Core error handling
pub mod error;

// Runtime configuration
pub mod config;

// Graph model, construction and processing
pub mod graph;

// HTML document rendering
pub mod visualization;

// Wire types shared by the service and the client
pub mod api_types;

// REST API (when enabled)
#[cfg(feature = "server")]
pub mod api;

// Presentation client
pub mod client;

pub use api_types::GraphResponse;
pub use error::{ClientError, ConfigError, GraphError, RenderError};
