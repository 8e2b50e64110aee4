mod common;

use common::{assert_route_is_consistent, square_with_diagonal, square_with_island, EPSILON};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use road_sssp::graph::generators::{generate_grid, generate_random_geometric};
use road_sssp::graph::Network;
use road_sssp::{CancelToken, Error, RoadGraph, SearchMode, SearchOptions, VertexId};

// The straight-line key steers the oriented search towards the destination
#[test]
fn test_oriented_search_settles_fewer_vertices() {
    let graph = generate_grid(20, 20, 1.0).unwrap();

    // 210 sits at column 9, row 10
    let plain = graph.shortest_path(SearchMode::Plain, 1, 210).unwrap();
    let oriented = graph.shortest_path(SearchMode::Oriented, 1, 210).unwrap();

    assert!((plain.cost - 19.0).abs() < EPSILON);
    assert!((oriented.cost - 19.0).abs() < EPSILON);
    assert!(
        oriented.settled < plain.settled,
        "oriented settled {} vertices, dijkstra {}",
        oriented.settled,
        plain.settled
    );
    assert_route_is_consistent(&graph, &oriented);
}

// The diagonal is shorter than going around the corner
#[test]
fn test_direct_diagonal_beats_the_corner() {
    let graph = square_with_diagonal();

    for mode in SearchMode::ALL {
        let route = graph.shortest_path(mode, 1, 3).unwrap();
        assert!((route.cost - 5.0).abs() < EPSILON, "{} cost {}", mode, route.cost);
        assert_eq!(route.edges, vec![13], "{} should take the diagonal", mode);
        assert_eq!(route.vertices, vec![1, 3]);
    }
}

// Edges are followed against their direction as well
#[test]
fn test_edges_are_traversable_both_ways() {
    let graph = square_with_diagonal();

    for mode in SearchMode::ALL {
        let route = graph.shortest_path(mode, 4, 1).unwrap();
        assert!((route.cost - 8.0).abs() < EPSILON);
        assert_eq!(route.vertices, vec![4, 3, 1]);
        assert_eq!(route.edges, vec![34, 13]);
    }
}

#[test]
fn test_same_origin_and_destination() {
    let graph = square_with_diagonal();

    for mode in SearchMode::ALL {
        let route = graph.shortest_path(mode, 2, 2).unwrap();
        assert_eq!(route.cost, 0.0);
        assert!(route.edges.is_empty());
        assert_eq!(route.vertices, vec![2]);
    }
}

#[test]
fn test_unknown_vertices_are_rejected() {
    let graph = square_with_diagonal();

    for mode in SearchMode::ALL {
        assert!(matches!(graph.shortest_path(mode, 1, 42), Err(Error::UnknownVertex(42))));
        assert!(matches!(graph.shortest_path(mode, 42, 1), Err(Error::UnknownVertex(42))));
    }
}

#[test]
fn test_unreachable_destination_is_not_a_crash() {
    let graph = square_with_island();

    for mode in SearchMode::ALL {
        match graph.shortest_path(mode, 1, 9) {
            Err(Error::NoPathFound { origin, dest }) => {
                assert_eq!((origin, dest), (1, 9));
            }
            other => panic!("{} returned {:?}", mode, other),
        }
    }
}

#[test]
fn test_grid_corner_to_corner() {
    let graph = generate_grid(10, 10, 1.0).unwrap();

    for mode in SearchMode::ALL {
        let route = graph.shortest_path(mode, 1, 100).unwrap();
        assert!((route.cost - 18.0).abs() < EPSILON, "{} cost {}", mode, route.cost);
        assert_eq!(route.vertices.first(), Some(&1));
        assert_eq!(route.vertices.last(), Some(&100));
        assert_route_is_consistent(&graph, &route);
    }
}

// Plain Dijkstra, A* and bidirectional A* agree on every sampled pair
#[test]
fn test_all_modes_agree_on_random_geometric_graphs() {
    for seed in [3, 11, 29] {
        let mut graph = generate_random_geometric(200, 0.14, seed).unwrap();
        graph.preprocess(1).unwrap();

        let ids: Vec<VertexId> = graph.vertices().iter().map(|v| v.id()).collect();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..40 {
            let origin = ids[rng.gen_range(0..ids.len())];
            let dest = ids[rng.gen_range(0..ids.len())];

            let plain = graph.shortest_path(SearchMode::Plain, origin, dest).unwrap();
            let oriented = graph.shortest_path(SearchMode::Oriented, origin, dest).unwrap();
            let bidirectional = graph.shortest_path(SearchMode::Bidirectional, origin, dest).unwrap();

            assert!((plain.cost - oriented.cost).abs() < EPSILON);
            assert!((plain.cost - bidirectional.cost).abs() < EPSILON);

            assert_route_is_consistent(&graph, &plain);
            assert_route_is_consistent(&graph, &oriented);
            assert_route_is_consistent(&graph, &bidirectional);
        }
    }
}

#[test]
fn test_inspected_edges_are_reported() {
    let graph = generate_grid(6, 6, 1.0).unwrap();

    let plain = graph.shortest_path(SearchMode::Plain, 1, 36).unwrap();
    assert!(!plain.inspected.forward.is_empty());
    assert!(plain.inspected.backward.is_empty());
    for edge in &plain.edges {
        assert!(plain.inspected.forward.contains(edge));
    }

    let bidirectional = graph.shortest_path(SearchMode::Bidirectional, 1, 36).unwrap();
    assert!(!bidirectional.inspected.forward.is_empty());
    assert!(!bidirectional.inspected.backward.is_empty());
}

#[test]
fn test_cancelled_search_stops() {
    let graph = generate_grid(5, 5, 1.0).unwrap();
    let token = CancelToken::new();
    let options = SearchOptions::new().with_cancel_token(token.clone());

    assert!(graph.shortest_path_with(SearchMode::Plain, 1, 25, &options).is_ok());

    token.cancel();
    for mode in SearchMode::ALL {
        assert!(matches!(
            graph.shortest_path_with(mode, 1, 25, &options),
            Err(Error::Cancelled)
        ));
    }
}

// Searches borrow the graph immutably, so they can run side by side
#[test]
fn test_concurrent_searches_share_a_graph() {
    let graph = generate_grid(12, 12, 1.0).unwrap();
    let expected = graph.shortest_path(SearchMode::Plain, 1, 144).unwrap().cost;

    std::thread::scope(|scope| {
        let handles: Vec<_> = SearchMode::ALL
            .iter()
            .map(|&mode| {
                let graph = &graph;
                scope.spawn(move || graph.shortest_path(mode, 1, 144).map(|route| route.cost))
            })
            .collect();

        for handle in handles {
            let cost = handle.join().unwrap().unwrap();
            assert!((cost - expected).abs() < EPSILON);
        }
    });
}

#[test]
fn test_repeated_searches_do_not_leak_state() {
    let graph: RoadGraph = generate_grid(8, 8, 1.0).unwrap();

    let first = graph.shortest_path(SearchMode::Oriented, 1, 64).unwrap();
    let _other = graph.shortest_path(SearchMode::Bidirectional, 8, 57).unwrap();
    let again = graph.shortest_path(SearchMode::Oriented, 1, 64).unwrap();

    assert_eq!(first, again);
    assert_eq!(graph.vertex_count(), 64);
}

#[test]
fn test_search_mode_names() {
    assert_eq!("dijkstra".parse::<SearchMode>().unwrap(), SearchMode::Plain);
    assert_eq!("dijkstraOriented".parse::<SearchMode>().unwrap(), SearchMode::Oriented);
    assert_eq!(
        "dijkstraBidirectional".parse::<SearchMode>().unwrap(),
        SearchMode::Bidirectional
    );
    assert!(matches!("bfs".parse::<SearchMode>(), Err(Error::InvalidMode(_))));

    assert_eq!(SearchMode::Oriented.to_string(), "oriented");
    let mode: SearchMode = serde_json::from_str("\"bidirectional\"").unwrap();
    assert_eq!(mode, SearchMode::Bidirectional);
}

// Every name the parser accepts is also accepted in JSON bodies
#[test]
fn test_search_mode_aliases_match_json() {
    for name in [
        "dijkstra",
        "plain",
        "oriented",
        "dijkstraOriented",
        "astar",
        "bidirectional",
        "dijkstraBidirectional",
    ] {
        let parsed = name.parse::<SearchMode>().unwrap();
        let deserialized: SearchMode = serde_json::from_str(&format!("\"{}\"", name)).unwrap();
        assert_eq!(parsed, deserialized, "{}", name);
    }
}
