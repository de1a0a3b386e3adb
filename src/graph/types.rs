//! Core graph types
//!
//! Node order is insertion order everywhere: in iteration, in statistics and
//! in the rendered document.

use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};

use super::stats::DegreeDistribution;

/// One `(source, target)` row of an uploaded edge list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRow {
    pub source: String,
    pub target: String,
}

impl EdgeRow {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Filter and styling options shared by every graph operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphOptions {
    /// Minimum degree (measured on the unfiltered graph) a node needs to be kept
    pub degree_threshold: usize,
    pub show_labels: bool,
    pub highlight_hubs: bool,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            degree_threshold: 0,
            show_labels: true,
            highlight_hubs: true,
        }
    }
}

/// Parameters for Erdos-Renyi generation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerateParams {
    pub node_count: usize,
    pub edge_probability: f64,
}

/// Undirected simple graph with string node ids.
///
/// Parallel edges collapse into one; self-loops are kept and count twice
/// toward their node's degree.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    inner: UnGraph<String, ()>,
    index: HashMap<String, NodeIndex>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from edge rows: nodes are the endpoints in first-seen order
    pub fn from_edge_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = EdgeRow>,
    {
        let mut graph = Self::new();
        for row in rows {
            graph.add_edge(&row.source, &row.target);
        }
        graph
    }

    fn from_inner(inner: UnGraph<String, ()>) -> Self {
        let index = inner
            .node_indices()
            .map(|ix| (inner[ix].clone(), ix))
            .collect();
        Self { inner, index }
    }

    /// Add a node if absent
    pub fn add_node(&mut self, id: &str) {
        self.node_index(id);
    }

    fn node_index(&mut self, id: &str) -> NodeIndex {
        if let Some(ix) = self.index.get(id) {
            return *ix;
        }
        let ix = self.inner.add_node(id.to_string());
        self.index.insert(id.to_string(), ix);
        ix
    }

    /// Add an undirected edge, creating missing endpoints. Duplicates in
    /// either direction are ignored.
    pub fn add_edge(&mut self, a: &str, b: &str) {
        let a = self.node_index(a);
        let b = self.node_index(b);
        self.inner.update_edge(a, b, ());
    }

    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.node_count() == 0
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn contains_edge(&self, a: &str, b: &str) -> bool {
        match (self.index.get(a), self.index.get(b)) {
            (Some(&a), Some(&b)) => self.inner.find_edge(a, b).is_some(),
            _ => false,
        }
    }

    pub fn node_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.inner.node_indices().map(|ix| self.inner[ix].as_str())
    }

    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.inner.edge_references().map(|edge| {
            (
                self.inner[edge.source()].as_str(),
                self.inner[edge.target()].as_str(),
            )
        })
    }

    /// Degree of every node, in node order
    pub fn degrees(&self) -> DegreeDistribution {
        let mut counts = vec![0usize; self.inner.node_count()];
        for edge in self.inner.edge_references() {
            counts[edge.source().index()] += 1;
            counts[edge.target().index()] += 1;
        }
        self.inner
            .node_indices()
            .map(|ix| (self.inner[ix].clone(), counts[ix.index()]))
            .collect()
    }

    pub fn degree(&self, id: &str) -> Option<usize> {
        let ix = *self.index.get(id)?;
        let degree = self
            .inner
            .edge_references()
            .map(|edge| {
                usize::from(edge.source() == ix) + usize::from(edge.target() == ix)
            })
            .sum();
        Some(degree)
    }

    /// Subgraph on the nodes accepted by `keep`, with every edge whose
    /// endpoints are both kept. Node order is preserved.
    pub fn induced_subgraph<F>(&self, mut keep: F) -> Graph
    where
        F: FnMut(&str) -> bool,
    {
        let inner = self.inner.filter_map(
            |_, id| keep(id.as_str()).then(|| id.clone()),
            |_, _| Some(()),
        );
        Self::from_inner(inner)
    }
}
