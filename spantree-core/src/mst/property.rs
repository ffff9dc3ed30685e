//! Property tests for the Prim implementation.
//!
//! Generated connected graphs are checked for structural invariants (edge
//! count, acyclicity, spanning) and the total weight is compared against a
//! sequential Kruskal oracle. Weights are small integers widened to `f64` so
//! both algorithms sum them exactly.

use proptest::prelude::*;

use crate::{Graph, GraphError};

type LabelledEdge = (usize, usize, f64);

fn vertex_labels(count: usize) -> Vec<String> {
    (0..count).map(|index| format!("V{index:02}")).collect()
}

fn build_graph(labels: &[String], edges: &[LabelledEdge]) -> Graph {
    let mut graph = Graph::new();
    for label in labels {
        graph.add_vertex(label.clone());
    }
    for (left, right, weight) in edges {
        graph
            .add_edge(&labels[*left], &labels[*right], *weight)
            .expect("generated endpoints exist");
    }
    graph
}

fn find(parent: &mut [usize], node: usize) -> usize {
    let mut current = node;
    while parent[current] != current {
        parent[current] = parent[parent[current]];
        current = parent[current];
    }
    current
}

fn union(parent: &mut [usize], left: usize, right: usize) -> bool {
    let left_root = find(parent, left);
    let right_root = find(parent, right);
    if left_root == right_root {
        return false;
    }
    parent[right_root] = left_root;
    true
}

fn kruskal_total_weight(node_count: usize, edges: &[LabelledEdge]) -> f64 {
    let mut sorted = edges.to_vec();
    sorted.sort_by(|a, b| {
        a.2.total_cmp(&b.2)
            .then_with(|| a.0.cmp(&b.0))
            .then_with(|| a.1.cmp(&b.1))
    });

    let mut parent: Vec<usize> = (0..node_count).collect();
    let mut total = 0.0;
    for (left, right, weight) in sorted {
        if union(&mut parent, left, right) {
            total += weight;
        }
    }
    total
}

/// Generates a connected graph: a spanning path guarantees reachability and
/// extra non-loop edges add cycles and parallel edges.
fn connected_graph() -> impl Strategy<Value = (Vec<String>, Vec<LabelledEdge>)> {
    (2usize..8).prop_flat_map(|count| {
        let path = proptest::collection::vec(0u8..=100, count - 1);
        let extras = proptest::collection::vec((0..count, 0..count, 0u8..=100), 0..12);
        (Just(count), path, extras).prop_map(|(vertex_count, path_weights, extra_edges)| {
            let labels = vertex_labels(vertex_count);
            let mut edges: Vec<LabelledEdge> = path_weights
                .into_iter()
                .enumerate()
                .map(|(index, weight)| (index, index + 1, f64::from(weight)))
                .collect();
            for (left, right, weight) in extra_edges {
                if left != right {
                    edges.push((left, right, f64::from(weight)));
                }
            }
            (labels, edges)
        })
    })
}

proptest! {
    #[test]
    fn tree_spans_connected_graphs_with_minimum_weight(
        (labels, edges) in connected_graph(),
    ) {
        let graph = build_graph(&labels, &edges);
        let start = labels.first().expect("at least two vertices");
        let tree = graph
            .minimum_spanning_tree(start)
            .expect("generated graph is connected");

        prop_assert_eq!(tree.len(), labels.len() - 1);

        // Acyclic and spanning: every edge must join two distinct components.
        let mut parent: Vec<usize> = (0..labels.len()).collect();
        for edge in tree.edges() {
            let origin = labels
                .iter()
                .position(|label| label == edge.origin())
                .expect("origin is a generated label");
            let destination = labels
                .iter()
                .position(|label| label == edge.destination())
                .expect("destination is a generated label");
            prop_assert!(union(&mut parent, origin, destination));
        }

        prop_assert_eq!(
            tree.total_weight(),
            kruskal_total_weight(labels.len(), &edges)
        );
    }

    #[test]
    fn repeated_runs_are_byte_identical(
        (labels, edges) in connected_graph(),
    ) {
        let graph = build_graph(&labels, &edges);
        let start = labels.first().expect("at least two vertices");
        let first = graph
            .minimum_spanning_tree(start)
            .expect("generated graph is connected");
        let second = graph
            .minimum_spanning_tree(start)
            .expect("generated graph is connected");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn isolated_vertex_always_reports_disconnected(
        (labels, edges) in connected_graph(),
    ) {
        let mut graph = build_graph(&labels, &edges);
        graph.add_vertex("ISOLATED");
        let start = labels.first().expect("at least two vertices");

        let err = graph
            .minimum_spanning_tree(start)
            .expect_err("the isolated vertex is unreachable");
        let is_disconnected = matches!(err, GraphError::Disconnected { .. });
        prop_assert!(is_disconnected);
    }
}
