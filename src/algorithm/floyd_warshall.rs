//! Floyd-Warshall algorithm for all-pairs shortest paths.
//!
//! Builds dense distance and next-hop matrices indexed by vertex index.
//! Time: O(V^3), Memory: O(V^2). Meant for small, preprocessed graphs.

use rayon::prelude::*;

use crate::graph::Network;
use crate::{Error, Result};

/// Default vertex ceiling for the dense matrices (about 128 MB at this size)
pub const MAX_ALL_PAIRS_VERTICES: usize = 2_000;

/// Dense all-pairs distance and next-hop matrices, row-major
#[derive(Debug, Clone)]
pub struct AllPairsMatrix {
    size: usize,
    distances: Vec<Option<f64>>,
    /// First vertex to step to on the way from row to column
    next: Vec<Option<usize>>,
    topology_version: u64,
}

impl AllPairsMatrix {
    /// Runs Floyd-Warshall over a network
    ///
    /// Every edge is traversable in both directions, like in the point-to-point
    /// searches. Parallel edges keep the lighter weight. Fails with
    /// [`Error::GraphTooLarge`] before allocating anything when the graph has
    /// more than `limit` vertices.
    pub fn compute<G: Network>(graph: &G, topology_version: u64, limit: usize) -> Result<Self> {
        let n = graph.vertex_count();
        if n > limit {
            return Err(Error::GraphTooLarge { vertices: n, limit });
        }
        let mut distances = vec![None; n * n];
        let mut next = vec![None; n * n];

        // For each edge dist[u][v] = dist[v][u] = weight(u, v)
        for index in 0..graph.edge_count() {
            let edge = graph.edge(index);
            let (u, v, weight) = (edge.origin(), edge.dest(), edge.weight());
            if u == v {
                continue;
            }
            for (from, to) in [(u, v), (v, u)] {
                let cell = from * n + to;
                if distances[cell].map_or(true, |current| weight < current) {
                    distances[cell] = Some(weight);
                    next[cell] = Some(to);
                }
            }
        }

        // For each vertex dist[v][v] = 0
        for i in 0..n {
            distances[i * n + i] = Some(0.0);
            next[i * n + i] = Some(i);
        }

        if n > 0 {
            for k in 0..n {
                // Row k does not change while k is the intermediate vertex
                let row_k: Vec<Option<f64>> = distances[k * n..(k + 1) * n].to_vec();

                distances
                    .par_chunks_mut(n)
                    .zip(next.par_chunks_mut(n))
                    .for_each(|(dist_row, next_row)| {
                        let Some(d_ik) = dist_row[k] else {
                            return;
                        };
                        let hop = next_row[k];
                        for (j, d_kj) in row_k.iter().enumerate() {
                            let Some(d_kj) = d_kj else {
                                continue;
                            };
                            let through = d_ik + d_kj;
                            if dist_row[j].map_or(true, |current| through < current) {
                                dist_row[j] = Some(through);
                                next_row[j] = hop;
                            }
                        }
                    });
            }
        }

        Ok(AllPairsMatrix {
            size: n,
            distances,
            next,
            topology_version,
        })
    }

    /// Number of vertices covered by the matrices
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn topology_version(&self) -> u64 {
        self.topology_version
    }

    pub fn distance(&self, from: usize, to: usize) -> Option<f64> {
        if from >= self.size || to >= self.size {
            return None;
        }
        self.distances[from * self.size + to]
    }

    /// Vertex indices from `from` to `to`, both included
    pub fn path(&self, from: usize, to: usize) -> Option<Vec<usize>> {
        if from >= self.size || to >= self.size {
            return None;
        }
        self.next[from * self.size + to]?;

        let mut path = vec![from];
        let mut current = from;
        while current != to {
            current = self.next[current * self.size + to]?;
            path.push(current);
            if path.len() > self.size {
                return None;
            }
        }
        Some(path)
    }
}
