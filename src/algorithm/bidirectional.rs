use log::debug;

use crate::algorithm::frontier::Frontier;
use crate::algorithm::options::MeetingCriterion;
use crate::algorithm::state::SearchState;
use crate::algorithm::{InspectedEdges, PointToPointSearch, Route, SearchOptions};
use crate::graph::Network;
use crate::{Error, Result};

/// Bidirectional A*: a forward frontier from the origin aimed at the destination
/// and a backward frontier from the destination aimed at the origin, advanced in
/// strict alternation
///
/// Alternation stops at the first vertex settled by both sides. That vertex is
/// only a candidate; the meeting vertex is then chosen by the configured
/// [`MeetingCriterion`] and the backward half is spliced into the forward label
/// table so the route can be read from a single predecessor chain.
#[derive(Debug, Default)]
pub struct BidirectionalSearch;

impl BidirectionalSearch {
    pub fn new() -> Self {
        BidirectionalSearch
    }
}

/// Best connection known so far: cost and the vertex carrying it
#[derive(Debug, Clone, Copy)]
struct Meeting {
    cost: f64,
    vertex: usize,
}

fn offer(best: &mut Option<Meeting>, vertex: usize, cost: f64) {
    if best.map_or(true, |current| cost < current.cost) {
        *best = Some(Meeting { cost, vertex });
    }
}

/// A frontier whose smallest key already reaches the best cost cannot improve it
fn exhausted<G: Network>(frontier: &Frontier<'_, G>, best: Option<Meeting>) -> bool {
    match (frontier.peek_key(), best) {
        (None, _) => true,
        (Some(key), Some(meeting)) => key >= meeting.cost,
        (Some(_), None) => false,
    }
}

impl<G: Network> PointToPointSearch<G> for BidirectionalSearch {
    fn name(&self) -> &'static str {
        "Bidirectional A*"
    }

    fn find_path(&self, graph: &G, origin: usize, dest: usize, options: &SearchOptions) -> Result<Route> {
        let criterion = options.meeting_criterion();
        let mut forward = Frontier::new(graph, origin, Some(dest))?;
        let mut backward = Frontier::new(graph, dest, Some(origin))?;

        // Vertices labelled by both sides; the sources are labelled from the start
        let mut best: Option<Meeting> = None;
        if origin == dest {
            offer(&mut best, origin, 0.0);
        }

        let mut candidate = None;
        let mut rounds = 0;
        while !forward.is_empty() && !backward.is_empty() {
            if criterion == MeetingCriterion::DistanceSum
                && (exhausted(&forward, best) || exhausted(&backward, best))
            {
                break;
            }

            if let Some(vertex) = forward.settle_next(options)? {
                forward.relax_from(vertex, |next, distance| {
                    if let Some(other) = backward.state().distance(next) {
                        offer(&mut best, next, distance + other);
                    }
                })?;
                if backward.state().is_settled(vertex) {
                    candidate = Some(vertex);
                    break;
                }
            }

            if criterion == MeetingCriterion::DistanceSum && exhausted(&backward, best) {
                break;
            }

            if let Some(vertex) = backward.settle_next(options)? {
                backward.relax_from(vertex, |next, distance| {
                    if let Some(other) = forward.state().distance(next) {
                        offer(&mut best, next, distance + other);
                    }
                })?;
                if forward.state().is_settled(vertex) {
                    candidate = Some(vertex);
                    break;
                }
            }
            rounds += 1;
        }

        let no_path = || Error::NoPathFound {
            origin: graph.vertex(origin).id(),
            dest: graph.vertex(dest).id(),
        };

        let meeting = match criterion {
            MeetingCriterion::DistanceSum => {
                if best.is_none() {
                    return Err(no_path());
                }
                // Keep expanding each side while it can still beat the best connection
                while !exhausted(&forward, best) {
                    if let Some(vertex) = forward.settle_next(options)? {
                        forward.relax_from(vertex, |next, distance| {
                            if let Some(other) = backward.state().distance(next) {
                                offer(&mut best, next, distance + other);
                            }
                        })?;
                    }
                }
                while !exhausted(&backward, best) {
                    if let Some(vertex) = backward.settle_next(options)? {
                        backward.relax_from(vertex, |next, distance| {
                            if let Some(other) = forward.state().distance(next) {
                                offer(&mut best, next, distance + other);
                            }
                        })?;
                    }
                }
                best.map(|meeting| meeting.vertex).ok_or_else(no_path)?
            }
            MeetingCriterion::HeuristicSum => {
                if candidate.is_none() && origin != dest {
                    return Err(no_path());
                }
                while forward.discard_next()?.is_some() {}
                while backward.discard_next()?.is_some() {}
                heuristic_meeting(forward.state(), backward.state()).ok_or_else(no_path)?
            }
        };

        let settled = forward.state().settled_count() + backward.state().settled_count();
        let (mut forward_state, forward_edges) = forward.into_parts();
        let (backward_state, backward_edges) = backward.into_parts();
        splice(graph, &mut forward_state, &backward_state, meeting);

        debug!(
            "Bidirectional rounds: {}, candidate {:?}, meeting vertex index {}, path cost: {:?}",
            rounds,
            candidate,
            meeting,
            forward_state.distance(dest)
        );

        let inspected = InspectedEdges {
            forward: forward_edges,
            backward: backward_edges,
        };
        Route::from_state(graph, &forward_state, origin, dest, inspected, settled)
    }
}

/// Vertex labelled by both sides minimising the sum of their queue keys
fn heuristic_meeting(forward: &SearchState, backward: &SearchState) -> Option<usize> {
    let mut best: Option<Meeting> = None;
    for vertex in 0..forward.len() {
        if let (Some(f), Some(b)) = (forward.key(vertex), backward.key(vertex)) {
            offer(&mut best, vertex, f + b);
        }
    }
    best.map(|meeting| meeting.vertex)
}

/// Rewrites forward labels along the backward chain from `meeting` to the
/// destination, so every vertex on it points back towards the meeting vertex
fn splice<G: Network>(graph: &G, forward: &mut SearchState, backward: &SearchState, meeting: usize) {
    let mut current = meeting;
    let mut steps = 0;

    while let (Some(next), Some(edge)) = (
        backward.label(current).predecessor,
        backward.label(current).predecessor_edge,
    ) {
        let Some(distance) = forward.distance(current) else {
            break;
        };
        forward.link(next, distance + graph.edge(edge).weight(), current, edge);
        current = next;

        steps += 1;
        if steps > forward.len() {
            break;
        }
    }
}
