use log::debug;

use crate::algorithm::frontier::Frontier;
use crate::algorithm::{InspectedEdges, PointToPointSearch, Route, SearchOptions};
use crate::graph::Network;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm, stopping once the destination is settled
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

/// Settles vertices until `dest` leaves the queue or the queue runs dry
///
/// Returns the number of relaxation rounds.
pub(crate) fn run_until_settled<G: Network>(
    frontier: &mut Frontier<'_, G>,
    dest: usize,
    options: &SearchOptions,
) -> Result<usize> {
    let mut iterations = 0;
    while let Some(vertex) = frontier.settle_next(options)? {
        if vertex == dest {
            break;
        }
        frontier.relax_from(vertex, |_, _| {})?;
        iterations += 1;
    }
    Ok(iterations)
}

/// Packs a finished unidirectional frontier into a route
pub(crate) fn finish_route<G: Network>(
    graph: &G,
    frontier: Frontier<'_, G>,
    origin: usize,
    dest: usize,
) -> Result<Route> {
    if !frontier.state().is_settled(dest) {
        return Err(Error::NoPathFound {
            origin: graph.vertex(origin).id(),
            dest: graph.vertex(dest).id(),
        });
    }

    let (state, forward) = frontier.into_parts();
    let inspected = InspectedEdges {
        forward,
        ..InspectedEdges::default()
    };
    Route::from_state(graph, &state, origin, dest, inspected, state.settled_count())
}

impl<G: Network> PointToPointSearch<G> for Dijkstra {
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn find_path(&self, graph: &G, origin: usize, dest: usize, options: &SearchOptions) -> Result<Route> {
        let mut frontier = Frontier::new(graph, origin, None)?;
        let iterations = run_until_settled(&mut frontier, dest, options)?;

        debug!(
            "Dijkstra iterations: {}, path cost: {:?}",
            iterations,
            frontier.state().distance(dest)
        );
        finish_route(graph, frontier, origin, dest)
    }
}
