use road_sssp::graph::{EdgeRecord, GraphRecords, Network, VertexRecord};
use road_sssp::{Error, RoadGraph, SearchMode};

const CROSSING: &str = r#"{
    "vertices": [
        { "id": 10, "x": 0.0, "y": 0.0 },
        { "id": 20, "x": 6.0, "y": 8.0 },
        { "id": 30, "x": 6.0, "y": 0.0 }
    ],
    "edges": [
        { "id": 100, "origin": 10, "dest": 20 },
        { "id": 200, "origin": 30, "dest": 20 }
    ]
}"#;

#[test]
fn test_load_from_json() {
    let records = GraphRecords::from_json(CROSSING).unwrap();
    let graph = RoadGraph::from_records(&records).unwrap();

    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 2);
    assert!((graph.find_edge(100).unwrap().weight() - 10.0).abs() < 1e-9);
    assert!((graph.find_edge(200).unwrap().weight() - 8.0).abs() < 1e-9);

    let route = graph.shortest_path(SearchMode::Plain, 10, 30).unwrap();
    assert_eq!(route.vertices, vec![10, 20, 30]);
    assert_eq!(route.edges, vec![100, 200]);
}

#[test]
fn test_records_round_trip_through_graph() {
    let records = GraphRecords::from_json(CROSSING).unwrap();
    let graph = RoadGraph::from_records(&records).unwrap();
    assert_eq!(graph.to_records(), records);

    let json = records.to_json().unwrap();
    assert_eq!(GraphRecords::from_json(&json).unwrap(), records);
}

#[test]
fn test_malformed_json() {
    assert!(matches!(GraphRecords::from_json("{ \"vertices\": [1, 2"), Err(Error::Parse(_))));
}

#[test]
fn test_missing_sections_default_to_empty() {
    let records = GraphRecords::from_json("{}").unwrap();
    assert!(records.vertices.is_empty());
    assert!(records.edges.is_empty());
}

#[test]
fn test_duplicate_ids() {
    let vertices = vec![
        VertexRecord { id: 1, x: 0.0, y: 0.0 },
        VertexRecord { id: 1, x: 1.0, y: 0.0 },
    ];
    assert!(matches!(RoadGraph::load(vertices, vec![]), Err(Error::DuplicateVertex(1))));

    let vertices = vec![
        VertexRecord { id: 1, x: 0.0, y: 0.0 },
        VertexRecord { id: 2, x: 1.0, y: 0.0 },
    ];
    let edges = vec![
        EdgeRecord { id: 5, origin: 1, dest: 2 },
        EdgeRecord { id: 5, origin: 2, dest: 1 },
    ];
    assert!(matches!(RoadGraph::load(vertices, edges), Err(Error::DuplicateEdge(5))));
}

#[test]
fn test_edge_to_unknown_vertex() {
    let vertices = vec![VertexRecord { id: 1, x: 0.0, y: 0.0 }];
    let edges = vec![EdgeRecord { id: 5, origin: 1, dest: 3 }];
    assert!(matches!(RoadGraph::load(vertices, edges), Err(Error::UnknownVertex(3))));
}

#[test]
fn test_non_finite_coordinates() {
    let mut graph = RoadGraph::new();
    assert!(matches!(
        graph.add_vertex(1, f64::NAN, 0.0),
        Err(Error::InvalidPosition { id: 1 })
    ));
    assert!(matches!(
        graph.add_vertex(2, 0.0, f64::INFINITY),
        Err(Error::InvalidPosition { id: 2 })
    ));
    assert_eq!(graph.vertex_count(), 0);
}

#[test]
fn test_failed_insertions_leave_graph_untouched() {
    let records = GraphRecords::from_json(CROSSING).unwrap();
    let mut graph = RoadGraph::from_records(&records).unwrap();
    let version = graph.topology_version();

    assert!(graph.add_vertex(10, 3.0, 3.0).is_err());
    assert!(graph.add_edge(300, 10, 99).is_err());
    assert_eq!(graph.topology_version(), version);
    assert_eq!(graph.to_records(), records);
}
