use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use road_sssp::graph::generators::generate_random_geometric;
use road_sssp::graph::Network;
use road_sssp::{RoadGraph, SearchMode, VertexId};
use std::time::{Duration, Instant};

struct ModeStats {
    mode: SearchMode,
    total: Duration,
    settled: usize,
    found: usize,
}

// Function to benchmark one search mode over a set of vertex pairs
fn benchmark_mode(graph: &RoadGraph, mode: SearchMode, pairs: &[(VertexId, VertexId)]) -> ModeStats {
    let mut stats = ModeStats {
        mode,
        total: Duration::ZERO,
        settled: 0,
        found: 0,
    };

    for &(origin, dest) in pairs {
        let start = Instant::now();
        let result = graph.shortest_path(mode, origin, dest);
        stats.total += start.elapsed();

        if let Ok(route) = result {
            stats.found += 1;
            stats.settled += route.settled;
        }
    }

    stats
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // (vertices, connection radius)
    let graph_sizes = vec![(1_000, 0.06), (5_000, 0.03), (20_000, 0.015)];
    let queries = 200;

    println!("=====================================================");
    println!("Benchmark: Dijkstra vs A* vs bidirectional A*");
    println!("{} random queries per graph", queries);
    println!("=====================================================");

    let mut rng = StdRng::seed_from_u64(7);

    for &(size, radius) in &graph_sizes {
        println!("\nGenerating random geometric graph with {} vertices...", size);
        let mut graph = generate_random_geometric(size, radius, size as u64)?;
        let report = graph.preprocess(1)?;
        println!(
            "Preprocessing kept {} of {} vertices, {} edges",
            report.after,
            report.before,
            graph.edge_count()
        );

        let ids: Vec<VertexId> = graph.vertices().iter().map(|v| v.id()).collect();
        let pairs: Vec<(VertexId, VertexId)> = (0..queries)
            .map(|_| (ids[rng.gen_range(0..ids.len())], ids[rng.gen_range(0..ids.len())]))
            .collect();

        println!(
            "{:<15} | {:<12} | {:<15} | {:<8}",
            "Mode", "Total (ms)", "Avg settled", "Found"
        );
        println!("-----------------------------------------------------");
        for mode in SearchMode::ALL {
            let stats = benchmark_mode(&graph, mode, &pairs);
            println!(
                "{:<15} | {:<12.2} | {:<15.1} | {:<8}",
                stats.mode.to_string(),
                stats.total.as_secs_f64() * 1000.0,
                stats.settled as f64 / stats.found.max(1) as f64,
                stats.found
            );
        }
    }

    // Floyd-Warshall is cubic; keep it on a small graph
    println!("\nAll-pairs precomputation on 500 vertices...");
    let mut graph = generate_random_geometric(500, 0.08, 500)?;
    graph.preprocess(1)?;
    let start = Instant::now();
    graph.compute_all_pairs()?;
    println!(
        "Floyd-Warshall over {} vertices took {:.2} ms",
        graph.vertex_count(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    Ok(())
}
