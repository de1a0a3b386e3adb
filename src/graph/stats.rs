//! Degree statistics reported with every rendered graph

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::types::Graph;

/// Node id → degree, in node order.
///
/// Serialized as a JSON object whose keys appear in node order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DegreeDistribution(Vec<(String, usize)>);

impl DegreeDistribution {
    pub fn get(&self, id: &str) -> Option<usize> {
        self.0
            .iter()
            .find(|(node, _)| node == id)
            .map(|(_, degree)| *degree)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.0.iter().map(|(id, degree)| (id.as_str(), *degree))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Largest degree, 0 when there are no nodes
    pub fn max_degree(&self) -> usize {
        self.0.iter().map(|(_, degree)| *degree).max().unwrap_or(0)
    }
}

impl FromIterator<(String, usize)> for DegreeDistribution {
    fn from_iter<T: IntoIterator<Item = (String, usize)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for DegreeDistribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(id, degree)| (id, degree)))
    }
}

struct DistributionVisitor;

impl<'de> Visitor<'de> for DistributionVisitor {
    type Value = DegreeDistribution;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of node id to degree")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((id, degree)) = access.next_entry::<String, usize>()? {
            entries.push((id, degree));
        }
        Ok(DegreeDistribution(entries))
    }
}

impl<'de> Deserialize<'de> for DegreeDistribution {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DistributionVisitor)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub num_nodes: usize,
    pub num_edges: usize,
    pub degree_distribution: DegreeDistribution,
}

impl GraphStats {
    pub fn compute(graph: &Graph) -> Self {
        Self {
            num_nodes: graph.node_count(),
            num_edges: graph.edge_count(),
            degree_distribution: graph.degrees(),
        }
    }
}
