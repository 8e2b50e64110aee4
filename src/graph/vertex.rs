use crate::graph::Position;
use crate::VertexId;

/// A road graph node
///
/// Adjacency is stored as indices into the graph's edge arena. Search state is
/// kept out of the vertex entirely; see `algorithm::state`.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    id: VertexId,
    position: Position,
    outgoing: Vec<usize>,
    incoming: Vec<usize>,
}

impl Vertex {
    pub(crate) fn new(id: VertexId, position: Position) -> Self {
        Vertex {
            id,
            position,
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Indices of the edges leaving this vertex
    pub fn outgoing(&self) -> &[usize] {
        &self.outgoing
    }

    /// Indices of the edges arriving at this vertex
    pub fn incoming(&self) -> &[usize] {
        &self.incoming
    }

    pub(crate) fn push_outgoing(&mut self, edge: usize) {
        self.outgoing.push(edge);
    }

    pub(crate) fn push_incoming(&mut self, edge: usize) {
        self.incoming.push(edge);
    }

    pub(crate) fn clear_adjacency(&mut self) {
        self.outgoing.clear();
        self.incoming.clear();
    }
}
