mod common;

use common::{square_with_diagonal, square_with_island, EPSILON};
use road_sssp::algorithm::floyd_warshall::MAX_ALL_PAIRS_VERTICES;
use road_sssp::graph::generators::generate_random_geometric;
use road_sssp::{Error, SearchMode};

#[test]
fn test_matrix_is_stale_until_computed() {
    let mut graph = square_with_diagonal();
    assert!(!graph.all_pairs_ready());
    assert!(matches!(graph.all_pairs_path(1, 3), Err(Error::StaleMatrix)));

    graph.compute_all_pairs().unwrap();
    assert!(graph.all_pairs_ready());
    assert!(graph.all_pairs_path(1, 3).is_ok());
}

#[test]
fn test_topology_change_makes_matrix_stale() {
    let mut graph = square_with_diagonal();
    graph.compute_all_pairs().unwrap();

    graph.add_vertex(5, 10.0, 10.0).unwrap();
    assert!(matches!(graph.all_pairs_distance(1, 3), Err(Error::StaleMatrix)));

    graph.compute_all_pairs().unwrap();
    graph.add_edge(45, 4, 5).unwrap();
    assert!(matches!(graph.all_pairs_path(1, 5), Err(Error::StaleMatrix)));
}

#[test]
fn test_square_routes() {
    let mut graph = square_with_diagonal();
    graph.compute_all_pairs().unwrap();

    assert_eq!(graph.all_pairs_path(1, 3).unwrap(), vec![1, 3]);
    assert!((graph.all_pairs_distance(1, 3).unwrap() - 5.0).abs() < EPSILON);

    assert_eq!(graph.all_pairs_path(4, 1).unwrap(), vec![4, 3, 1]);
    assert!((graph.all_pairs_distance(4, 1).unwrap() - 8.0).abs() < EPSILON);

    assert_eq!(graph.all_pairs_path(2, 4).unwrap(), vec![2, 3, 4]);
    assert!((graph.all_pairs_distance(2, 4).unwrap() - 7.0).abs() < EPSILON);
}

#[test]
fn test_diagonal_is_a_single_vertex() {
    let mut graph = square_with_diagonal();
    graph.compute_all_pairs().unwrap();

    for id in 1..=4 {
        assert_eq!(graph.all_pairs_path(id, id).unwrap(), vec![id]);
        assert_eq!(graph.all_pairs_distance(id, id).unwrap(), 0.0);
    }
}

#[test]
fn test_unreachable_and_unknown_vertices() {
    let mut graph = square_with_island();
    graph.compute_all_pairs().unwrap();

    assert!(matches!(
        graph.all_pairs_path(1, 9),
        Err(Error::NoPathFound { origin: 1, dest: 9 })
    ));
    assert!(matches!(
        graph.all_pairs_distance(9, 2),
        Err(Error::NoPathFound { origin: 9, dest: 2 })
    ));
    assert!(matches!(graph.all_pairs_path(1, 77), Err(Error::UnknownVertex(77))));
}

#[test]
fn test_matches_dijkstra() {
    let mut graph = generate_random_geometric(80, 0.2, 23).unwrap();
    graph.preprocess(1).unwrap();
    graph.compute_all_pairs().unwrap();
    let ids: Vec<_> = graph.vertices().iter().map(|v| v.id()).collect();

    for &origin in ids.iter().step_by(9) {
        for &dest in ids.iter().step_by(7) {
            let route = graph.shortest_path(SearchMode::Plain, origin, dest).unwrap();
            let distance = graph.all_pairs_distance(origin, dest).unwrap();
            assert!(
                (route.cost - distance).abs() < 1e-6,
                "{} -> {}: dijkstra {} vs floyd-warshall {}",
                origin,
                dest,
                route.cost,
                distance
            );

            let path = graph.all_pairs_path(origin, dest).unwrap();
            assert_eq!(path.first(), Some(&origin));
            assert_eq!(path.last(), Some(&dest));
        }
    }
}

#[test]
fn test_empty_graph() {
    let mut graph = road_sssp::RoadGraph::new();
    graph.compute_all_pairs().unwrap();
    assert!(graph.all_pairs_ready());
    assert!(matches!(graph.all_pairs_path(1, 2), Err(Error::UnknownVertex(1))));
}

#[test]
fn test_vertex_ceiling() {
    let mut graph = square_with_diagonal();

    assert!(matches!(
        graph.compute_all_pairs_with_limit(3),
        Err(Error::GraphTooLarge { vertices: 4, limit: 3 })
    ));
    assert!(!graph.all_pairs_ready());

    graph.compute_all_pairs_with_limit(4).unwrap();
    assert_eq!(graph.all_pairs_path(4, 1).unwrap(), vec![4, 3, 1]);
}

#[test]
fn test_default_ceiling_rejects_large_graphs() {
    let mut graph = road_sssp::graph::generators::generate_path(MAX_ALL_PAIRS_VERTICES + 1, 1.0).unwrap();

    match graph.compute_all_pairs() {
        Err(Error::GraphTooLarge { vertices, limit }) => {
            assert_eq!(vertices, MAX_ALL_PAIRS_VERTICES + 1);
            assert_eq!(limit, MAX_ALL_PAIRS_VERTICES);
        }
        other => panic!("expected GraphTooLarge, got {:?}", other),
    }
}

#[test]
fn test_rejected_graph_keeps_matrices_stale() {
    let mut graph = square_with_diagonal();
    graph.compute_all_pairs().unwrap();
    graph.add_vertex(5, 10.0, 10.0).unwrap();

    assert!(graph.compute_all_pairs_with_limit(4).is_err());
    assert!(matches!(graph.all_pairs_distance(1, 3), Err(Error::StaleMatrix)));
}
