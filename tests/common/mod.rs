#![allow(dead_code)]

use road_sssp::graph::Network;
use road_sssp::{RoadGraph, Route};

pub const EPSILON: f64 = 1e-9;

/// Square with a diagonal: (0,0) (3,0) (3,4) (0,4)
/// Edges 1->2 (3), 2->3 (4), 1->3 (5), 3->4 (3)
pub fn square_with_diagonal() -> RoadGraph {
    let mut graph = RoadGraph::new();
    graph.add_vertex(1, 0.0, 0.0).unwrap();
    graph.add_vertex(2, 3.0, 0.0).unwrap();
    graph.add_vertex(3, 3.0, 4.0).unwrap();
    graph.add_vertex(4, 0.0, 4.0).unwrap();
    graph.add_edge(12, 1, 2).unwrap();
    graph.add_edge(23, 2, 3).unwrap();
    graph.add_edge(13, 1, 3).unwrap();
    graph.add_edge(34, 3, 4).unwrap();
    graph
}

/// The square plus an island vertex 9 with no roads
pub fn square_with_island() -> RoadGraph {
    let mut graph = square_with_diagonal();
    graph.add_vertex(9, 50.0, 50.0).unwrap();
    graph
}

/// Checks that a route is a connected walk over existing edges whose weights add up to its cost
pub fn assert_route_is_consistent(graph: &RoadGraph, route: &Route) {
    assert_eq!(route.edges.len() + 1, route.vertices.len());

    let mut total = 0.0;
    for (i, edge_id) in route.edges.iter().enumerate() {
        let edge = graph.find_edge(*edge_id).expect("route uses an existing edge");
        let origin = graph.vertex(edge.origin()).id();
        let dest = graph.vertex(edge.dest()).id();
        let (a, b) = (route.vertices[i], route.vertices[i + 1]);
        assert!(
            (origin == a && dest == b) || (origin == b && dest == a),
            "edge {} does not join {} and {}",
            edge_id,
            a,
            b
        );
        total += edge.weight();
    }

    assert!(
        (total - route.cost).abs() < 1e-6,
        "edge weights sum to {} but route cost is {}",
        total,
        route.cost
    );
}
