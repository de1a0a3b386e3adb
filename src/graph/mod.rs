//! Graph model, construction and degree processing
//!
//! `Graph` wraps a petgraph undirected graph keyed by string node ids. The
//! builder turns edge lists or generator parameters into a `Graph`; the
//! processor filters it, computes statistics and assigns display styles.

pub mod builder;
pub mod processor;
pub mod stats;
pub mod types;

pub use builder::{erdos_renyi, parse_edge_csv, MAX_GENERATED_NODES, MIN_GENERATED_NODES};
pub use processor::{filter_by_degree, process, style, ProcessedGraph};
pub use stats::{DegreeDistribution, GraphStats};
pub use types::*;
