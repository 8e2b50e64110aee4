//! Road SSSP - shortest paths over geographically embedded road graphs
//!
//! The engine answers point-to-point queries with plain Dijkstra, an oriented
//! (A*) search and a bidirectional A*, precomputes one-to-all distances from a
//! depot vertex and all-pairs distances with Floyd-Warshall.
//!
//! Vertices and edges live in index-addressed arenas; every search owns its
//! scratch state, so a `RoadGraph` can be shared between concurrent searches.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod web;

pub use algorithm::{
    astar::OrientedSearch, bidirectional::BidirectionalSearch, dijkstra::Dijkstra,
    options::{CancelToken, MeetingCriterion, SearchOptions},
    PointToPointSearch, Route, SearchMode,
};
/// Re-export main types for convenient use
pub use graph::{Position, RoadGraph};

/// External vertex identifier, as supplied by the ingestion layer
pub type VertexId = i64;

/// External edge identifier, as supplied by the ingestion layer
pub type EdgeId = i64;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unknown vertex ID: {0}")]
    UnknownVertex(VertexId),

    #[error("Duplicate vertex ID: {0}")]
    DuplicateVertex(VertexId),

    #[error("Duplicate edge ID: {0}")]
    DuplicateEdge(EdgeId),

    #[error("Vertex {id} has a non-finite coordinate")]
    InvalidPosition { id: VertexId },

    #[error("Extraction from an empty priority queue")]
    EmptyQueue,

    #[error("Key of vertex index {vertex} did not decrease")]
    KeyNotDecreased { vertex: usize },

    #[error("Vertex index {vertex} is already in the priority queue")]
    AlreadyQueued { vertex: usize },

    #[error("Vertex index {vertex} is not in the priority queue")]
    NotInQueue { vertex: usize },

    #[error("No path found from {origin} to {dest}")]
    NoPathFound { origin: VertexId, dest: VertexId },

    #[error("All-pairs matrices are missing or out of date")]
    StaleMatrix,

    #[error("Graph has {vertices} vertices, all-pairs matrices are limited to {limit}")]
    GraphTooLarge { vertices: usize, limit: usize },

    #[error("Central distances are missing or out of date")]
    StaleCentral,

    #[error("Search cancelled")]
    Cancelled,

    #[error("Invalid search mode: {0}")]
    InvalidMode(String),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
