use log::info;
use serde::{Deserialize, Serialize};

use crate::graph::traits::Network;
use crate::graph::RoadGraph;
use crate::{Result, VertexId};

/// Vertex counts before and after reachability pruning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreprocessReport {
    pub before: usize,
    pub after: usize,
}

impl PreprocessReport {
    pub fn removed(&self) -> usize {
        self.before - self.after
    }
}

impl RoadGraph {
    /// Keeps only the connected component containing `anchor`
    ///
    /// Connectivity is undirected: both outgoing and incoming edges are followed.
    /// Every vertex outside the component is deleted along with every edge that
    /// touches it, from both adjacency views.
    pub fn preprocess(&mut self, anchor: VertexId) -> Result<PreprocessReport> {
        let start = self.resolve(anchor)?;
        let before = self.vertex_count();
        let reached = self.reachable_from(start);

        let mut remap: Vec<Option<usize>> = vec![None; before];
        let mut vertices = Vec::with_capacity(before);
        for (index, vertex) in self.vertices().iter().enumerate() {
            if reached[index] {
                remap[index] = Some(vertices.len());
                vertices.push(vertex.clone());
            }
        }

        let edges = self
            .edges()
            .iter()
            .filter_map(|edge| {
                let origin = remap[edge.origin()]?;
                let dest = remap[edge.dest()]?;
                let mut edge = edge.clone();
                edge.remap(origin, dest);
                Some(edge)
            })
            .collect();

        self.rebuild(vertices, edges);
        debug_assert!(self.adjacency_is_consistent());

        let report = PreprocessReport {
            before,
            after: self.vertex_count(),
        };
        info!(
            "Preprocessed from {}: {} vertices before, {} after",
            anchor, report.before, report.after
        );
        Ok(report)
    }

    /// Depth-first marking of everything reachable through edges of either direction
    fn reachable_from(&self, start: usize) -> Vec<bool> {
        let mut reached = vec![false; self.vertex_count()];
        let mut stack = vec![start];
        reached[start] = true;

        while let Some(current) = stack.pop() {
            for (_, next) in self.neighbours(current) {
                if !reached[next] {
                    reached[next] = true;
                    stack.push(next);
                }
            }
        }
        reached
    }

    fn adjacency_is_consistent(&self) -> bool {
        self.vertices().iter().enumerate().all(|(index, vertex)| {
            vertex
                .outgoing()
                .iter()
                .all(|&e| e < self.edge_count() && self.edge(e).origin() == index)
                && vertex
                    .incoming()
                    .iter()
                    .all(|&e| e < self.edge_count() && self.edge(e).dest() == index)
        })
    }
}
