//! Wire types shared by the graph service and the presentation client
//!
//! Single source of truth for request query strings and response bodies.

use serde::{Deserialize, Serialize};

use crate::graph::GraphStats;

pub const DEFAULT_GENERATE_NODES: usize = 10;
pub const DEFAULT_GENERATE_EDGE_PROBABILITY: f64 = 0.2;

/// Body returned by `/upload/`, `/generate/` and `/filter/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphResponse {
    pub stats: GraphStats,
    /// Self-contained HTML document
    pub html: String,
}

/// Query parameters of `GET /generate/`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerateQuery {
    #[serde(default = "default_n_nodes")]
    pub n_nodes: usize,
    #[serde(default = "default_p_edge")]
    pub p_edge: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for GenerateQuery {
    fn default() -> Self {
        Self {
            n_nodes: DEFAULT_GENERATE_NODES,
            p_edge: DEFAULT_GENERATE_EDGE_PROBABILITY,
            seed: None,
        }
    }
}

fn default_n_nodes() -> usize {
    DEFAULT_GENERATE_NODES
}

fn default_p_edge() -> f64 {
    DEFAULT_GENERATE_EDGE_PROBABILITY
}

/// Seed override accepted by `/filter/`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
