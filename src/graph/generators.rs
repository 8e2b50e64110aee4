use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::graph::RoadGraph;
use crate::{EdgeId, Result, VertexId};

/// Generates a straight road of `n` vertices spaced `spacing` apart
/// Vertex ids run from 1 to n, edge `i` joins vertex `i` to vertex `i + 1`
pub fn generate_path(n: usize, spacing: f64) -> Result<RoadGraph> {
    let mut graph = RoadGraph::with_capacity(n, n.saturating_sub(1));

    for i in 0..n {
        graph.add_vertex(i as VertexId + 1, i as f64 * spacing, 0.0)?;
    }
    for i in 1..n {
        graph.add_edge(i as EdgeId, i as VertexId, i as VertexId + 1)?;
    }

    Ok(graph)
}

/// Generates a `width` x `height` street grid with 4-connectivity
/// Vertex ids are `y * width + x + 1`; streets point east and south
pub fn generate_grid(width: usize, height: usize, spacing: f64) -> Result<RoadGraph> {
    let mut graph = RoadGraph::with_capacity(width * height, 2 * width * height);

    let get_id = |x: usize, y: usize| -> VertexId { (y * width + x) as VertexId + 1 };

    for y in 0..height {
        for x in 0..width {
            graph.add_vertex(get_id(x, y), x as f64 * spacing, y as f64 * spacing)?;
        }
    }

    let mut edge_id: EdgeId = 0;
    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                edge_id += 1;
                graph.add_edge(edge_id, get_id(x, y), get_id(x + 1, y))?;
            }
            if y + 1 < height {
                edge_id += 1;
                graph.add_edge(edge_id, get_id(x, y), get_id(x, y + 1))?;
            }
        }
    }

    Ok(graph)
}

/// Generates a random geometric road graph in the unit square
/// n: number of vertices
/// radius: vertices closer than this are joined by a road of random direction
pub fn generate_random_geometric(n: usize, radius: f64, seed: u64) -> Result<RoadGraph> {
    let mut graph = RoadGraph::with_capacity(n, n * 4);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut points = Vec::with_capacity(n);
    for i in 0..n {
        let x: f64 = rng.gen_range(0.0..1.0);
        let y: f64 = rng.gen_range(0.0..1.0);
        points.push((x, y));
        graph.add_vertex(i as VertexId + 1, x, y)?;
    }

    let mut edge_id: EdgeId = 0;
    for i in 0..n {
        for j in (i + 1)..n {
            let (x1, y1) = points[i];
            let (x2, y2) = points[j];
            let dx = x1 - x2;
            let dy = y1 - y2;

            if f64::sqrt(dx * dx + dy * dy) <= radius {
                edge_id += 1;
                let (from, to) = if rng.gen_bool(0.5) { (i, j) } else { (j, i) };
                graph.add_edge(edge_id, from as VertexId + 1, to as VertexId + 1)?;
            }
        }
    }

    Ok(graph)
}
