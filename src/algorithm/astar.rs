use log::debug;

use crate::algorithm::dijkstra::{finish_route, run_until_settled};
use crate::algorithm::frontier::Frontier;
use crate::algorithm::{PointToPointSearch, Route, SearchOptions};
use crate::graph::Network;
use crate::Result;

/// Oriented search (A*) guided by the straight-line distance to the destination
///
/// Edge weights are Euclidean lengths, so the straight line never overestimates
/// the remaining cost and the heuristic is consistent: the first extraction of
/// the destination yields its shortest distance.
#[derive(Debug, Default)]
pub struct OrientedSearch;

impl OrientedSearch {
    pub fn new() -> Self {
        OrientedSearch
    }
}

impl<G: Network> PointToPointSearch<G> for OrientedSearch {
    fn name(&self) -> &'static str {
        "A*"
    }

    fn find_path(&self, graph: &G, origin: usize, dest: usize, options: &SearchOptions) -> Result<Route> {
        let mut frontier = Frontier::new(graph, origin, Some(dest))?;
        let iterations = run_until_settled(&mut frontier, dest, options)?;

        debug!(
            "A* iterations: {}, path cost: {:?}",
            iterations,
            frontier.state().distance(dest)
        );
        finish_route(graph, frontier, origin, dest)
    }
}
