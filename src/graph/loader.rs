//! Record format handed over by the ingestion layer
//!
//! ```json
//! { "vertices": [{ "id": 1, "x": 0.0, "y": 0.0 }],
//!   "edges":    [{ "id": 7, "origin": 1, "dest": 2 }] }
//! ```

use serde::{Deserialize, Serialize};

use crate::graph::RoadGraph;
use crate::{EdgeId, Result, VertexId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexRecord {
    pub id: VertexId,
    pub x: f64,
    pub y: f64,
}

/// Edge weights are not part of the record; they are derived from positions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub id: EdgeId,
    pub origin: VertexId,
    pub dest: VertexId,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphRecords {
    #[serde(default)]
    pub vertices: Vec<VertexRecord>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

impl GraphRecords {
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl RoadGraph {
    /// Builds a graph from vertex and edge records, failing on the first bad record
    pub fn load<V, E>(vertices: V, edges: E) -> Result<Self>
    where
        V: IntoIterator<Item = VertexRecord>,
        E: IntoIterator<Item = EdgeRecord>,
    {
        let mut graph = RoadGraph::new();
        for vertex in vertices {
            graph.add_vertex(vertex.id, vertex.x, vertex.y)?;
        }
        for edge in edges {
            graph.add_edge(edge.id, edge.origin, edge.dest)?;
        }
        Ok(graph)
    }

    pub fn from_records(records: &GraphRecords) -> Result<Self> {
        RoadGraph::load(records.vertices.iter().cloned(), records.edges.iter().cloned())
    }

    /// Exports the current topology, e.g. for a viewer
    pub fn to_records(&self) -> GraphRecords {
        let vertices = self
            .vertices()
            .iter()
            .map(|vertex| VertexRecord {
                id: vertex.id(),
                x: vertex.position().x(),
                y: vertex.position().y(),
            })
            .collect();
        let edges = self
            .edges()
            .iter()
            .map(|edge| EdgeRecord {
                id: edge.id(),
                origin: self.vertices()[edge.origin()].id(),
                dest: self.vertices()[edge.dest()].id(),
            })
            .collect();
        GraphRecords { vertices, edges }
    }
}
