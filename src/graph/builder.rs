//! Graph construction from uploaded edge lists or random generation

use rand::Rng;
use tracing::debug;

use super::types::{EdgeRow, GenerateParams, Graph};
use crate::error::GraphError;

pub const SOURCE_COLUMN: &str = "source";
pub const TARGET_COLUMN: &str = "target";

/// Bounds accepted by the `/generate/` operation
pub const MIN_GENERATED_NODES: usize = 2;
pub const MAX_GENERATED_NODES: usize = 100;

/// Parse a CSV edge list with a header row naming `source` and `target`.
///
/// Columns may appear in any order and extra columns are ignored. Rows with
/// an empty source or target are skipped.
pub fn parse_edge_csv(bytes: &[u8]) -> Result<Vec<EdgeRow>, GraphError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let headers = reader.headers()?.clone();
    let column = |name: &str| -> Result<usize, GraphError> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| GraphError::invalid(format!("missing required column '{}'", name)))
    };
    let source_idx = column(SOURCE_COLUMN)?;
    let target_idx = column(TARGET_COLUMN)?;

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for record in reader.records() {
        let record = record?;
        match (record.get(source_idx), record.get(target_idx)) {
            (Some(source), Some(target)) if !source.is_empty() && !target.is_empty() => {
                rows.push(EdgeRow::new(source, target));
            }
            _ => skipped += 1,
        }
    }

    debug!(rows = rows.len(), skipped, "parsed edge list");
    Ok(rows)
}

/// Erdos-Renyi G(n, p): nodes "0".."n-1", each unordered pair joined
/// independently with probability `edge_probability`.
pub fn erdos_renyi<R>(
    node_count: usize,
    edge_probability: f64,
    rng: &mut R,
) -> Result<Graph, GraphError>
where
    R: Rng + ?Sized,
{
    if node_count < MIN_GENERATED_NODES {
        return Err(GraphError::invalid(format!(
            "node_count must be at least {}, got {}",
            MIN_GENERATED_NODES, node_count
        )));
    }
    if !(0.0..=1.0).contains(&edge_probability) {
        return Err(GraphError::invalid(format!(
            "edge_probability must be within [0, 1], got {}",
            edge_probability
        )));
    }

    let ids: Vec<String> = (0..node_count).map(|i| i.to_string()).collect();
    let mut graph = Graph::new();
    for id in &ids {
        graph.add_node(id);
    }
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            if rng.gen_bool(edge_probability) {
                graph.add_edge(a, b);
            }
        }
    }

    Ok(graph)
}

impl GenerateParams {
    pub fn new(node_count: usize, edge_probability: f64) -> Self {
        Self {
            node_count,
            edge_probability,
        }
    }

    pub fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Graph, GraphError> {
        erdos_renyi(self.node_count, self.edge_probability, rng)
    }
}
