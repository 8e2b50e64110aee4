use crate::algorithm::frontier::Frontier;
use crate::algorithm::state::SearchState;
use crate::algorithm::{InspectedEdges, Route, SearchOptions};
use crate::graph::Network;
use crate::{Result, VertexId};

/// Shortest-path tree from the depot vertex to everything it reaches
///
/// Built by a Dijkstra run that only stops when its queue is empty, so later
/// distance lookups are plain table reads.
#[derive(Debug, Clone)]
pub struct CentralTree {
    anchor: usize,
    anchor_id: VertexId,
    topology_version: u64,
    state: SearchState,
}

impl CentralTree {
    pub fn compute<G: Network>(graph: &G, anchor: usize, topology_version: u64, options: &SearchOptions) -> Result<Self> {
        let mut frontier = Frontier::new(graph, anchor, None)?;
        while let Some(vertex) = frontier.settle_next(options)? {
            frontier.relax_from(vertex, |_, _| {})?;
        }
        let (state, _) = frontier.into_parts();

        Ok(CentralTree {
            anchor,
            anchor_id: graph.vertex(anchor).id(),
            topology_version,
            state,
        })
    }

    pub fn anchor(&self) -> usize {
        self.anchor
    }

    pub fn anchor_id(&self) -> VertexId {
        self.anchor_id
    }

    pub fn topology_version(&self) -> u64 {
        self.topology_version
    }

    /// Distance from the depot; `None` when the vertex was not reached
    pub fn distance(&self, vertex: usize) -> Option<f64> {
        self.state.distance(vertex)
    }

    pub fn reached_count(&self) -> usize {
        self.state.reached_count()
    }

    pub fn route_to<G: Network>(&self, graph: &G, vertex: usize) -> Result<Route> {
        Route::from_state(
            graph,
            &self.state,
            self.anchor,
            vertex,
            InspectedEdges::default(),
            self.state.settled_count(),
        )
    }
}
