use log::{debug, info};
use std::collections::HashMap;

use crate::algorithm::astar::OrientedSearch;
use crate::algorithm::bidirectional::BidirectionalSearch;
use crate::algorithm::central::CentralTree;
use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::floyd_warshall::{AllPairsMatrix, MAX_ALL_PAIRS_VERTICES};
use crate::algorithm::{PointToPointSearch, Route, SearchMode, SearchOptions};
use crate::graph::traits::Network;
use crate::graph::{Edge, Position, Vertex};
use crate::{EdgeId, Error, Result, VertexId};

/// A road network embedded in the plane
///
/// Vertices and edges are stored in arenas and addressed by dense indices;
/// external ids are translated through lookup tables. The graph also keeps the
/// latest central tree and all-pairs matrices, each tagged with the topology
/// version it was computed for.
#[derive(Debug, Clone, Default)]
pub struct RoadGraph {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    vertex_index: HashMap<VertexId, usize>,
    edge_index: HashMap<EdgeId, usize>,
    topology_version: u64,
    central: Option<CentralTree>,
    all_pairs: Option<AllPairsMatrix>,
}

impl RoadGraph {
    /// Creates a new empty road graph
    pub fn new() -> Self {
        RoadGraph::default()
    }

    /// Creates an empty road graph with room for the given number of vertices and edges
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        RoadGraph {
            vertices: Vec::with_capacity(vertices),
            edges: Vec::with_capacity(edges),
            vertex_index: HashMap::with_capacity(vertices),
            edge_index: HashMap::with_capacity(edges),
            ..RoadGraph::default()
        }
    }

    /// Adds a vertex at `(x, y)` and returns its index
    pub fn add_vertex(&mut self, id: VertexId, x: f64, y: f64) -> Result<usize> {
        if self.vertex_index.contains_key(&id) {
            return Err(Error::DuplicateVertex(id));
        }
        let position = Position::new(x, y);
        if !position.is_finite() {
            return Err(Error::InvalidPosition { id });
        }

        let index = self.vertices.len();
        self.vertices.push(Vertex::new(id, position));
        self.vertex_index.insert(id, index);
        self.topology_version += 1;
        Ok(index)
    }

    /// Adds a directed edge weighted by the Euclidean distance between its endpoints
    pub fn add_edge(&mut self, id: EdgeId, origin: VertexId, dest: VertexId) -> Result<usize> {
        if self.edge_index.contains_key(&id) {
            return Err(Error::DuplicateEdge(id));
        }
        let from = self.resolve(origin)?;
        let to = self.resolve(dest)?;
        let weight = self.vertices[from]
            .position()
            .distance(&self.vertices[to].position());

        let index = self.edges.len();
        self.edges.push(Edge::new(id, from, to, weight));
        self.edge_index.insert(id, index);
        self.vertices[from].push_outgoing(index);
        self.vertices[to].push_incoming(index);
        self.topology_version += 1;
        Ok(index)
    }

    /// Returns the vertex with the given external id
    pub fn find_vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertex_index.get(&id).map(|&index| &self.vertices[index])
    }

    /// Returns the edge with the given external id
    pub fn find_edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edge_index.get(&id).map(|&index| &self.edges[index])
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Counter bumped on every topology change
    pub fn topology_version(&self) -> u64 {
        self.topology_version
    }

    /// Translates an external id into a dense index, failing on unknown ids
    pub fn resolve(&self, id: VertexId) -> Result<usize> {
        self.vertex_index
            .get(&id)
            .copied()
            .ok_or(Error::UnknownVertex(id))
    }

    /// Replaces the arenas after preprocessing and rebuilds every lookup table
    pub(crate) fn rebuild(&mut self, vertices: Vec<Vertex>, edges: Vec<Edge>) {
        self.vertex_index = vertices
            .iter()
            .enumerate()
            .map(|(index, vertex)| (vertex.id(), index))
            .collect();
        self.edge_index = edges
            .iter()
            .enumerate()
            .map(|(index, edge)| (edge.id(), index))
            .collect();
        self.vertices = vertices;
        self.edges = edges;

        for vertex in &mut self.vertices {
            vertex.clear_adjacency();
        }
        for (index, edge) in self.edges.iter().enumerate() {
            self.vertices[edge.origin()].push_outgoing(index);
            self.vertices[edge.dest()].push_incoming(index);
        }
        self.topology_version += 1;
    }

    /// Finds a shortest route between two vertices with the given strategy
    pub fn shortest_path(&self, mode: SearchMode, origin: VertexId, dest: VertexId) -> Result<Route> {
        self.shortest_path_with(mode, origin, dest, &SearchOptions::default())
    }

    /// Same as [`RoadGraph::shortest_path`] with explicit search options
    pub fn shortest_path_with(
        &self,
        mode: SearchMode,
        origin: VertexId,
        dest: VertexId,
        options: &SearchOptions,
    ) -> Result<Route> {
        let from = self.resolve(origin)?;
        let to = self.resolve(dest)?;

        let route = match mode {
            SearchMode::Plain => Dijkstra::new().find_path(self, from, to, options),
            SearchMode::Oriented => OrientedSearch::new().find_path(self, from, to, options),
            SearchMode::Bidirectional => BidirectionalSearch::new().find_path(self, from, to, options),
        }?;

        debug!(
            "{} from {} to {}: cost {:.3}, {} vertices settled",
            mode, origin, dest, route.cost, route.settled
        );
        Ok(route)
    }

    /// Runs a one-to-all search from the depot vertex and keeps its result
    pub fn compute_central(&mut self, anchor: VertexId) -> Result<()> {
        let index = self.resolve(anchor)?;
        let tree = CentralTree::compute(self, index, self.topology_version, &SearchOptions::default())?;
        info!(
            "Central distances computed from {}: {} of {} vertices reached",
            anchor,
            tree.reached_count(),
            self.vertices.len()
        );
        self.central = Some(tree);
        Ok(())
    }

    /// Id of the depot vertex of the current central tree, if it is up to date
    pub fn central_anchor(&self) -> Option<VertexId> {
        self.current_central().ok().map(|tree| tree.anchor_id())
    }

    /// Distance from the depot vertex, read from the precomputed central tree
    pub fn distance_from_central(&self, id: VertexId) -> Result<f64> {
        let index = self.resolve(id)?;
        let tree = self.current_central()?;
        tree.distance(index).ok_or(Error::NoPathFound {
            origin: tree.anchor_id(),
            dest: id,
        })
    }

    /// Route from the depot vertex, read from the precomputed central tree
    pub fn path_from_central(&self, id: VertexId) -> Result<Route> {
        let index = self.resolve(id)?;
        let tree = self.current_central()?;
        tree.route_to(self, index)
    }

    fn current_central(&self) -> Result<&CentralTree> {
        match &self.central {
            Some(tree) if tree.topology_version() == self.topology_version => Ok(tree),
            _ => Err(Error::StaleCentral),
        }
    }

    /// Builds the Floyd-Warshall distance and next-hop matrices
    pub fn compute_all_pairs(&mut self) -> Result<()> {
        self.compute_all_pairs_with_limit(MAX_ALL_PAIRS_VERTICES)
    }

    /// Same as [`RoadGraph::compute_all_pairs`] with an explicit vertex ceiling
    ///
    /// Previously computed matrices are kept when the graph is too large.
    pub fn compute_all_pairs_with_limit(&mut self, limit: usize) -> Result<()> {
        let matrix = AllPairsMatrix::compute(self, self.topology_version, limit)?;
        info!("All-pairs matrices computed for {} vertices", matrix.size());
        self.all_pairs = Some(matrix);
        Ok(())
    }

    /// Vertex ids along the precomputed all-pairs route between two vertices
    pub fn all_pairs_path(&self, origin: VertexId, dest: VertexId) -> Result<Vec<VertexId>> {
        let from = self.resolve(origin)?;
        let to = self.resolve(dest)?;
        let matrix = self.current_all_pairs()?;
        let path = matrix
            .path(from, to)
            .ok_or(Error::NoPathFound { origin, dest })?;
        Ok(path.into_iter().map(|index| self.vertices[index].id()).collect())
    }

    /// Precomputed all-pairs distance between two vertices
    pub fn all_pairs_distance(&self, origin: VertexId, dest: VertexId) -> Result<f64> {
        let from = self.resolve(origin)?;
        let to = self.resolve(dest)?;
        self.current_all_pairs()?
            .distance(from, to)
            .ok_or(Error::NoPathFound { origin, dest })
    }

    /// Whether the all-pairs matrices match the current topology
    pub fn all_pairs_ready(&self) -> bool {
        self.current_all_pairs().is_ok()
    }

    fn current_all_pairs(&self) -> Result<&AllPairsMatrix> {
        match &self.all_pairs {
            Some(matrix) if matrix.topology_version() == self.topology_version => Ok(matrix),
            _ => Err(Error::StaleMatrix),
        }
    }
}

impl Network for RoadGraph {
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn vertex(&self, index: usize) -> &Vertex {
        &self.vertices[index]
    }

    fn edge(&self, index: usize) -> &Edge {
        &self.edges[index]
    }

    fn index_of(&self, id: VertexId) -> Option<usize> {
        self.vertex_index.get(&id).copied()
    }
}
