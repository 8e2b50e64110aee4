use ordered_float::OrderedFloat;
use std::collections::BTreeSet;

use crate::algorithm::options::SearchOptions;
use crate::algorithm::state::SearchState;
use crate::data_structures::IndexedMinHeap;
use crate::graph::{Network, Position};
use crate::{EdgeId, Result};

/// One search frontier: a label table, its open set and the edges it inspected
///
/// With a target the queue is keyed by `distance + euclidean(v, target)`,
/// without one by the plain distance.
#[derive(Debug)]
pub(crate) struct Frontier<'g, G: Network> {
    graph: &'g G,
    state: SearchState,
    queue: IndexedMinHeap<OrderedFloat<f64>>,
    target: Option<Position>,
    inspected: BTreeSet<EdgeId>,
}

impl<'g, G: Network> Frontier<'g, G> {
    pub(crate) fn new(graph: &'g G, source: usize, target: Option<usize>) -> Result<Self> {
        let n = graph.vertex_count();
        let mut frontier = Frontier {
            graph,
            state: SearchState::new(n),
            queue: IndexedMinHeap::with_capacity(n),
            target: target.map(|t| graph.position(t)),
            inspected: BTreeSet::new(),
        };

        let key = frontier.heuristic(source);
        frontier.state.seed(source, key);
        frontier.queue.insert(source, OrderedFloat(key))?;
        Ok(frontier)
    }

    pub(crate) fn heuristic(&self, vertex: usize) -> f64 {
        match &self.target {
            Some(target) => self.graph.position(vertex).distance(target),
            None => 0.0,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Smallest key still in the open set
    pub(crate) fn peek_key(&self) -> Option<f64> {
        self.queue.peek().map(|(_, key)| key.into_inner())
    }

    /// Extracts and settles the vertex with the smallest key
    pub(crate) fn settle_next(&mut self, options: &SearchOptions) -> Result<Option<usize>> {
        if self.queue.is_empty() {
            return Ok(None);
        }
        options.check_cancelled()?;

        let (vertex, _) = self.queue.extract_min()?;
        self.state.settle(vertex);
        Ok(Some(vertex))
    }

    /// Removes the next vertex without settling or relaxing it
    pub(crate) fn discard_next(&mut self) -> Result<Option<usize>> {
        if self.queue.is_empty() {
            return Ok(None);
        }
        let (vertex, _) = self.queue.extract_min()?;
        Ok(Some(vertex))
    }

    /// Relaxes every edge incident to a settled vertex, in both directions
    ///
    /// `on_improve` is called with each vertex whose distance got shorter.
    pub(crate) fn relax_from<F>(&mut self, vertex: usize, mut on_improve: F) -> Result<()>
    where
        F: FnMut(usize, f64),
    {
        let graph = self.graph;
        let Some(base) = self.state.distance(vertex) else {
            return Ok(());
        };

        for (e, next) in graph.neighbours(vertex) {
            if self.state.is_settled(next) {
                continue;
            }
            let edge = graph.edge(e);
            self.inspected.insert(edge.id());

            let candidate = base + edge.weight();
            let improves = match self.state.distance(next) {
                None => true,
                Some(current) => candidate < current,
            };

            if improves {
                let key = candidate + self.heuristic(next);
                self.state.relabel(next, candidate, vertex, e, key);
                self.queue.push_or_decrease(next, OrderedFloat(key))?;
                on_improve(next, candidate);
            }
        }
        Ok(())
    }

    pub(crate) fn state(&self) -> &SearchState {
        &self.state
    }

    pub(crate) fn into_parts(self) -> (SearchState, BTreeSet<EdgeId>) {
        (self.state, self.inspected)
    }
}
