//! Integration tests exercising the public graph and MST surface.

use spantree_core::{Graph, GraphError, GraphErrorCode};

fn triangle() -> Graph {
    let mut graph = Graph::new();
    for label in ["A", "B", "C"] {
        graph.add_vertex(label);
    }
    graph.add_edge("A", "B", 4.0).expect("endpoints exist");
    graph.add_edge("B", "C", 2.0).expect("endpoints exist");
    graph.add_edge("A", "C", 9.0).expect("endpoints exist");
    graph
}

#[test]
fn edit_then_compute_round() {
    let mut graph = triangle();
    let tree = graph.minimum_spanning_tree("A").expect("graph is connected");
    assert_eq!(tree.len(), 2);
    assert_eq!(tree.total_weight(), 6.0);

    // Dropping the cheap B-C edge forces the expensive A-C edge into the tree.
    graph.remove_edge("B", "C").expect("edge exists");
    let tree = graph.minimum_spanning_tree("A").expect("graph is connected");
    assert_eq!(tree.total_weight(), 13.0);

    // Removing C cascades, so the remaining pair still spans.
    graph.remove_vertex("C").expect("C exists");
    let tree = graph.minimum_spanning_tree("A").expect("graph is connected");
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.total_weight(), 4.0);
}

#[test]
fn adjacency_is_symmetric_after_add_edge() {
    let graph = triangle();
    let from_a = graph.neighbours("A").expect("A exists");
    assert!(from_a
        .iter()
        .any(|record| record.label() == "B" && record.weight() == 4.0));
    let from_b = graph.neighbours("B").expect("B exists");
    assert!(from_b
        .iter()
        .any(|record| record.label() == "A" && record.weight() == 4.0));
}

#[test]
fn disconnected_graph_is_distinct_from_an_empty_tree() {
    let mut graph = Graph::new();
    graph.add_vertex("A");
    graph.add_vertex("B");

    let err = graph
        .minimum_spanning_tree("A")
        .expect_err("B is unreachable");
    assert_eq!(err.code(), GraphErrorCode::DisconnectedGraph);

    graph.remove_vertex("B").expect("B exists");
    let tree = graph.minimum_spanning_tree("A").expect("A spans itself");
    assert!(tree.is_empty());
}

#[test]
fn error_codes_are_stable() {
    let unknown = GraphError::UnknownVertex {
        label: "Z".to_owned(),
    };
    assert_eq!(unknown.code().as_str(), "UNKNOWN_VERTEX");
    assert_eq!(
        unknown.to_string(),
        "vertex `Z` is not present in the graph"
    );

    let non_finite = GraphError::NonFiniteWeight {
        origin: "A".to_owned(),
        destination: "B".to_owned(),
    };
    assert_eq!(non_finite.code().as_str(), "NON_FINITE_WEIGHT");

    let disconnected = GraphError::Disconnected {
        start: "A".to_owned(),
        visited: 1,
        vertex_count: 3,
    };
    assert_eq!(disconnected.code().as_str(), "DISCONNECTED_GRAPH");
    assert_eq!(
        disconnected.to_string(),
        "graph is disconnected: reached 1 of 3 vertices from `A`"
    );

    assert_eq!(
        GraphError::EmptyQueueAccess.code().as_str(),
        "EMPTY_QUEUE_ACCESS"
    );
}
