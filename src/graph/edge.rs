use crate::EdgeId;

/// A directed road segment between two vertex indices
///
/// The weight is fixed at creation to the Euclidean distance between the
/// endpoints. The same edge index appears in the origin's outgoing list and in
/// the destination's incoming list.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    id: EdgeId,
    origin: usize,
    dest: usize,
    weight: f64,
}

impl Edge {
    pub(crate) fn new(id: EdgeId, origin: usize, dest: usize, weight: f64) -> Self {
        Edge {
            id,
            origin,
            dest,
            weight,
        }
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Index of the vertex the edge leaves from
    pub fn origin(&self) -> usize {
        self.origin
    }

    /// Index of the vertex the edge arrives at
    pub fn dest(&self) -> usize {
        self.dest
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub(crate) fn remap(&mut self, origin: usize, dest: usize) {
        self.origin = origin;
        self.dest = dest;
    }
}
