use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::algorithm::options::SearchOptions;
use crate::algorithm::state::SearchState;
use crate::graph::Network;
use crate::{EdgeId, Error, Result, VertexId};

/// Point-to-point search strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchMode {
    #[serde(rename = "dijkstra", alias = "plain")]
    Plain,
    #[serde(rename = "oriented", alias = "dijkstraOriented", alias = "astar")]
    Oriented,
    #[serde(rename = "bidirectional", alias = "dijkstraBidirectional")]
    Bidirectional,
}

impl SearchMode {
    pub const ALL: [SearchMode; 3] = [SearchMode::Plain, SearchMode::Oriented, SearchMode::Bidirectional];
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SearchMode::Plain => "dijkstra",
            SearchMode::Oriented => "oriented",
            SearchMode::Bidirectional => "bidirectional",
        };
        f.write_str(name)
    }
}

impl FromStr for SearchMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "dijkstra" | "plain" => Ok(SearchMode::Plain),
            "oriented" | "dijkstraOriented" | "astar" => Ok(SearchMode::Oriented),
            "bidirectional" | "dijkstraBidirectional" => Ok(SearchMode::Bidirectional),
            other => Err(Error::InvalidMode(other.to_string())),
        }
    }
}

/// Edge ids examined by each frontier, for instrumentation and viewers
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InspectedEdges {
    pub forward: BTreeSet<EdgeId>,
    /// Empty for unidirectional searches
    pub backward: BTreeSet<EdgeId>,
}

impl InspectedEdges {
    pub fn total(&self) -> usize {
        self.forward.len() + self.backward.len()
    }
}

/// A route between two vertices
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub cost: f64,
    /// Edge ids in travel order; empty when origin and destination coincide
    pub edges: Vec<EdgeId>,
    /// Vertex ids in travel order, both endpoints included
    pub vertices: Vec<VertexId>,
    pub inspected: InspectedEdges,
    /// Number of queue extractions that finalised a vertex, over all frontiers
    pub settled: usize,
}

impl Route {
    /// Reads a route out of a label table whose chain runs from `origin` to `dest`
    pub(crate) fn from_state<G: Network>(
        graph: &G,
        state: &SearchState,
        origin: usize,
        dest: usize,
        inspected: InspectedEdges,
        settled: usize,
    ) -> Result<Route> {
        let (edges, vertices) = state.route_ids(graph, origin, dest)?;
        let cost = state.distance(dest).ok_or(Error::NoPathFound {
            origin: graph.vertex(origin).id(),
            dest: graph.vertex(dest).id(),
        })?;

        Ok(Route {
            cost,
            edges,
            vertices,
            inspected,
            settled,
        })
    }
}

/// Trait for point-to-point shortest path algorithms
pub trait PointToPointSearch<G: Network> {
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Find a shortest route between two vertex indices
    fn find_path(&self, graph: &G, origin: usize, dest: usize, options: &SearchOptions) -> Result<Route>;
}
