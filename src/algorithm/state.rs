use log::warn;

use crate::graph::Network;
use crate::{EdgeId, Error, Result, VertexId};

/// Search bookkeeping for one vertex
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Label {
    /// Best known distance from the search source; `None` until reached
    pub distance: Option<f64>,
    pub predecessor: Option<usize>,
    /// Edge index used to reach this vertex from `predecessor`
    pub predecessor_edge: Option<usize>,
    /// Priority used by the queue: distance, plus the heuristic in oriented searches
    pub key: Option<f64>,
    /// Finalised by an extraction from the queue
    pub settled: bool,
}

/// A per-search table of labels, indexed like the graph's vertices
#[derive(Debug, Clone)]
pub struct SearchState {
    labels: Vec<Label>,
    settled_count: usize,
}

impl SearchState {
    pub fn new(vertex_count: usize) -> Self {
        SearchState {
            labels: vec![Label::default(); vertex_count],
            settled_count: 0,
        }
    }

    pub fn label(&self, vertex: usize) -> &Label {
        &self.labels[vertex]
    }

    pub fn distance(&self, vertex: usize) -> Option<f64> {
        self.labels[vertex].distance
    }

    pub fn key(&self, vertex: usize) -> Option<f64> {
        self.labels[vertex].key
    }

    pub fn is_settled(&self, vertex: usize) -> bool {
        self.labels[vertex].settled
    }

    /// Number of vertices finalised so far
    pub fn settled_count(&self) -> usize {
        self.settled_count
    }

    /// Number of vertices that received a distance
    pub fn reached_count(&self) -> usize {
        self.labels.iter().filter(|label| label.distance.is_some()).count()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub(crate) fn seed(&mut self, source: usize, key: f64) {
        self.labels[source] = Label {
            distance: Some(0.0),
            key: Some(key),
            ..Label::default()
        };
    }

    pub(crate) fn settle(&mut self, vertex: usize) {
        debug_assert!(self.labels[vertex].distance.is_some());
        if !self.labels[vertex].settled {
            self.labels[vertex].settled = true;
            self.settled_count += 1;
        }
    }

    pub(crate) fn relabel(&mut self, vertex: usize, distance: f64, predecessor: usize, edge: usize, key: f64) {
        let label = &mut self.labels[vertex];
        label.distance = Some(distance);
        label.predecessor = Some(predecessor);
        label.predecessor_edge = Some(edge);
        label.key = Some(key);
    }

    /// Points `vertex` back at `predecessor`, keeping its key; used to splice routes
    pub(crate) fn link(&mut self, vertex: usize, distance: f64, predecessor: usize, edge: usize) {
        let label = &mut self.labels[vertex];
        label.distance = Some(distance);
        label.predecessor = Some(predecessor);
        label.predecessor_edge = Some(edge);
    }

    /// Walks predecessor links from `dest` back to `origin`
    ///
    /// Returns the edge indices and the vertex indices of the route, both in
    /// travel order.
    pub fn trace<G: Network>(&self, graph: &G, origin: usize, dest: usize) -> Result<(Vec<usize>, Vec<usize>)> {
        let no_path = || Error::NoPathFound {
            origin: graph.vertex(origin).id(),
            dest: graph.vertex(dest).id(),
        };
        if self.labels[dest].distance.is_none() {
            return Err(no_path());
        }

        let mut edges = Vec::new();
        let mut vertices = vec![dest];
        let mut current = dest;

        while current != origin {
            let label = &self.labels[current];
            match (label.predecessor, label.predecessor_edge) {
                (Some(previous), Some(edge)) => {
                    edges.push(edge);
                    vertices.push(previous);
                    current = previous;
                }
                _ => return Err(no_path()),
            }

            if edges.len() > self.labels.len() {
                warn!("Cycle in predecessor chain while tracing towards vertex index {}", origin);
                return Err(no_path());
            }
        }

        edges.reverse();
        vertices.reverse();
        Ok((edges, vertices))
    }

    /// Traces a route and translates it into external ids
    pub fn route_ids<G: Network>(&self, graph: &G, origin: usize, dest: usize) -> Result<(Vec<EdgeId>, Vec<VertexId>)> {
        let (edges, vertices) = self.trace(graph, origin, dest)?;
        Ok((
            edges.into_iter().map(|e| graph.edge(e).id()).collect(),
            vertices.into_iter().map(|v| graph.vertex(v).id()).collect(),
        ))
    }
}
