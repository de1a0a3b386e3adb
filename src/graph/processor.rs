//! Degree filtering, statistics and display styling
//!
//! Filtering is a single pass: degrees are measured once on the input graph
//! and every node below the threshold is dropped together with its edges.
//! Nodes kept this way may end up below the threshold inside the result, so
//! filtering an already-filtered graph can remove more nodes.

use std::collections::HashMap;

use tracing::debug;

use super::stats::GraphStats;
use super::types::{Graph, GraphOptions};
use crate::visualization::{NodeColor, NodeStyle, StyledGraph};

/// Output of the processing pipeline, ready for rendering
#[derive(Debug, Clone)]
pub struct ProcessedGraph {
    pub stats: GraphStats,
    pub styled: StyledGraph,
}

/// Keep nodes whose degree in `graph` is at least `threshold`, plus the
/// edges between them
pub fn filter_by_degree(graph: &Graph, threshold: usize) -> Graph {
    let degrees = graph.degrees();
    let degree_of: HashMap<&str, usize> = degrees.iter().collect();
    graph.induced_subgraph(|id| degree_of.get(id).is_some_and(|d| *d >= threshold))
}

/// Assign labels and colors to an already-filtered graph
pub fn style(filtered: &Graph, stats: &GraphStats, options: &GraphOptions) -> StyledGraph {
    if filtered.is_empty() {
        return StyledGraph::default();
    }

    let max_degree = stats.degree_distribution.max_degree();
    let nodes = stats
        .degree_distribution
        .iter()
        .map(|(id, degree)| {
            let label = if options.show_labels {
                id.to_string()
            } else {
                String::new()
            };
            let color = options.highlight_hubs.then(|| {
                if max_degree > 0 && degree == max_degree {
                    NodeColor::Hub
                } else {
                    NodeColor::Default
                }
            });
            NodeStyle {
                id: id.to_string(),
                label,
                color,
            }
        })
        .collect();

    let edges = filtered
        .edges()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect();

    StyledGraph { nodes, edges }
}

/// Filter once, then derive statistics and styling from the filtered graph
pub fn process(graph: &Graph, options: &GraphOptions) -> ProcessedGraph {
    let filtered = filter_by_degree(graph, options.degree_threshold);
    let stats = GraphStats::compute(&filtered);
    let styled = style(&filtered, &stats, options);

    debug!(
        input_nodes = graph.node_count(),
        kept_nodes = stats.num_nodes,
        kept_edges = stats.num_edges,
        threshold = options.degree_threshold,
        "processed graph"
    );

    ProcessedGraph { stats, styled }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{erdos_renyi, EdgeRow};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn graph_of(pairs: &[(&str, &str)]) -> Graph {
        Graph::from_edge_rows(pairs.iter().map(|(a, b)| EdgeRow::new(*a, *b)))
    }

    fn with_threshold(degree_threshold: usize) -> GraphOptions {
        GraphOptions {
            degree_threshold,
            ..GraphOptions::default()
        }
    }

    #[test]
    fn triangle_all_hubs() {
        let graph = graph_of(&[("A", "B"), ("B", "C"), ("C", "A")]);
        let processed = process(&graph, &with_threshold(0));

        assert_eq!(processed.stats.num_nodes, 3);
        assert_eq!(processed.stats.num_edges, 3);
        for id in ["A", "B", "C"] {
            assert_eq!(processed.stats.degree_distribution.get(id), Some(2));
        }
        assert_eq!(processed.styled.hubs().count(), 3);
    }

    #[test]
    fn star_threshold_keeps_only_center() {
        let graph = graph_of(&[("A", "B"), ("A", "C"), ("A", "D")]);
        let processed = process(&graph, &with_threshold(2));

        assert_eq!(processed.stats.num_nodes, 1);
        assert_eq!(processed.stats.num_edges, 0);
        assert_eq!(processed.stats.degree_distribution.get("A"), Some(0));
        // the lone survivor has degree 0, so nothing is a hub
        assert_eq!(processed.styled.hubs().count(), 0);
        assert_eq!(processed.styled.nodes[0].color, Some(NodeColor::Default));
    }

    #[test]
    fn edgeless_generated_graph_has_no_hubs() {
        let graph = erdos_renyi(2, 0.0, &mut StdRng::seed_from_u64(5)).unwrap();
        let processed = process(&graph, &GraphOptions::default());

        assert_eq!(processed.stats.num_nodes, 2);
        assert_eq!(processed.stats.num_edges, 0);
        assert_eq!(processed.styled.hubs().count(), 0);
    }

    #[test]
    fn hub_ties_are_all_highlighted() {
        let graph = graph_of(&[("A", "B"), ("A", "C"), ("D", "E"), ("D", "F"), ("B", "C")]);
        let processed = process(&graph, &with_threshold(0));
        let mut hubs: Vec<&str> = processed.styled.hubs().collect();
        hubs.sort();
        assert_eq!(hubs, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn hidden_labels_are_empty() {
        let graph = graph_of(&[("A", "B")]);
        let options = GraphOptions {
            show_labels: false,
            ..GraphOptions::default()
        };
        let processed = process(&graph, &options);
        assert!(processed.styled.nodes.iter().all(|n| n.label.is_empty()));
        assert_eq!(processed.styled.nodes[0].id, "A");
    }

    #[test]
    fn no_colors_without_hub_highlighting() {
        let graph = graph_of(&[("A", "B"), ("B", "C")]);
        let options = GraphOptions {
            highlight_hubs: false,
            ..GraphOptions::default()
        };
        let processed = process(&graph, &options);
        assert!(processed.styled.nodes.iter().all(|n| n.color.is_none()));
        assert_eq!(processed.styled.nodes[0].label, "A");
    }

    #[test]
    fn threshold_above_every_degree_empties_graph() {
        let graph = graph_of(&[("A", "B"), ("B", "C")]);
        let processed = process(&graph, &with_threshold(5));

        assert_eq!(processed.stats, GraphStats::default());
        assert!(processed.styled.nodes.is_empty());
        assert!(processed.styled.edges.is_empty());
    }

    #[test]
    fn refiltering_is_not_idempotent() {
        // B has degree 2 in the path but loses both neighbours to the filter
        let graph = graph_of(&[("A", "B"), ("B", "C")]);
        let once = filter_by_degree(&graph, 2);
        assert_eq!(once.node_ids().collect::<Vec<_>>(), vec!["B"]);

        let twice = filter_by_degree(&once, 2);
        assert!(twice.is_empty());
    }

    #[test]
    fn filtering_uses_unfiltered_degrees() {
        // C-D hang off a triangle; D (degree 1) goes, C keeps its unfiltered degree 3
        let graph = graph_of(&[("A", "B"), ("B", "C"), ("C", "A"), ("C", "D")]);
        let filtered = filter_by_degree(&graph, 2);
        assert_eq!(filtered.node_ids().collect::<Vec<_>>(), vec!["A", "B", "C"]);
        assert_eq!(filtered.edge_count(), 3);
    }

    #[test]
    fn styled_edges_match_filtered_graph() {
        let graph = graph_of(&[("A", "B"), ("B", "C"), ("C", "A"), ("C", "D")]);
        let processed = process(&graph, &with_threshold(2));
        assert_eq!(processed.styled.edges.len(), 3);
        assert!(!processed
            .styled
            .edges
            .iter()
            .any(|(a, b)| a == "D" || b == "D"));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn arb_graph() -> impl Strategy<Value = Graph> {
            prop::collection::vec((0u8..12, 0u8..12), 0..40).prop_map(|pairs| {
                Graph::from_edge_rows(
                    pairs
                        .into_iter()
                        .map(|(a, b)| EdgeRow::new(format!("n{a}"), format!("n{b}"))),
                )
            })
        }

        proptest! {
            #[test]
            fn kept_nodes_meet_threshold_in_input(graph in arb_graph(), threshold in 0usize..6) {
                let filtered = filter_by_degree(&graph, threshold);
                for id in filtered.node_ids() {
                    prop_assert!(graph.degree(id).unwrap() >= threshold);
                }
                for id in graph.node_ids() {
                    if graph.degree(id).unwrap() >= threshold {
                        prop_assert!(filtered.contains_node(id));
                    }
                }
            }

            #[test]
            fn filtered_edges_are_exactly_the_induced_edges(graph in arb_graph(), threshold in 0usize..6) {
                let filtered = filter_by_degree(&graph, threshold);
                let expected = graph
                    .edges()
                    .filter(|(a, b)| filtered.contains_node(a) && filtered.contains_node(b))
                    .count();
                prop_assert_eq!(filtered.edge_count(), expected);
                for (a, b) in filtered.edges() {
                    prop_assert!(graph.contains_edge(a, b));
                }
            }

            #[test]
            fn hubs_are_exactly_the_max_degree_nodes(graph in arb_graph(), threshold in 0usize..4) {
                let processed = process(&graph, &with_threshold(threshold));
                let distribution = &processed.stats.degree_distribution;
                let max = distribution.max_degree();
                let mut expected: Vec<&str> = if processed.stats.num_edges == 0 {
                    Vec::new()
                } else {
                    distribution.iter().filter(|(_, d)| *d == max).map(|(id, _)| id).collect()
                };
                let mut hubs: Vec<&str> = processed.styled.hubs().collect();
                expected.sort();
                hubs.sort();
                prop_assert_eq!(hubs, expected);
            }
        }
    }
}
