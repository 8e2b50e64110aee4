use std::fmt::Debug;

use crate::graph::{Edge, Position, Vertex};
use crate::VertexId;

/// Read-only view of a road network addressed by dense vertex and edge indices
pub trait Network: Debug {
    /// Returns the number of vertices in the network
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the network
    fn edge_count(&self) -> usize;

    /// Returns the vertex stored at an index
    fn vertex(&self, index: usize) -> &Vertex;

    /// Returns the edge stored at an index
    fn edge(&self, index: usize) -> &Edge;

    /// Translates an external vertex id into its dense index
    fn index_of(&self, id: VertexId) -> Option<usize>;

    fn position(&self, index: usize) -> Position {
        self.vertex(index).position()
    }

    /// Edges incident to a vertex in either direction, as `(edge index, other endpoint)`
    ///
    /// Outgoing edges come first, then incoming ones traversed backwards. Road
    /// connectivity is undirected for every search in this crate.
    fn neighbours(&self, index: usize) -> Box<dyn Iterator<Item = (usize, usize)> + '_> {
        let vertex = self.vertex(index);
        let outgoing = vertex
            .outgoing()
            .iter()
            .map(move |&e| (e, self.edge(e).dest()));
        let incoming = vertex
            .incoming()
            .iter()
            .map(move |&e| (e, self.edge(e).origin()));
        Box::new(outgoing.chain(incoming))
    }
}
