use colored::*;
use road_sssp::{MeetingCriterion, RoadGraph, Route, SearchMode, SearchOptions, VertexId};
use std::collections::HashMap;
use std::time::Instant;

const WIDTH: usize = 24;
const HEIGHT: usize = 14;

/// A street grid with blocks of buildings and named stops
struct Town {
    buildings: Vec<Vec<bool>>,
    stops: Vec<(&'static str, usize, usize)>,
}

impl Town {
    fn new() -> Self {
        let mut buildings = vec![vec![false; WIDTH]; HEIGHT];
        let blocks = [(2, 2, 5, 5), (8, 1, 12, 4), (15, 6, 19, 10), (4, 8, 9, 11)];
        for &(x0, y0, x1, y1) in &blocks {
            for row in buildings.iter_mut().take(y1).skip(y0) {
                for cell in row.iter_mut().take(x1).skip(x0) {
                    *cell = true;
                }
            }
        }
        // Walled courtyard: its inside is cut off from the rest of the town
        for x in 19..24 {
            buildings[1][x] = true;
        }
        for y in 1..5 {
            buildings[y][19] = true;
        }
        for x in 19..24 {
            buildings[4][x] = true;
        }

        Town {
            buildings,
            stops: vec![
                ("Depot", 0, 0),
                ("Bakery", 13, 2),
                ("Clinic", 21, 12),
                ("Library", 6, 12),
                ("Market", 14, 8),
                ("Yard", 21, 2),
            ],
        }
    }

    fn id(x: usize, y: usize) -> VertexId {
        (y * WIDTH + x) as VertexId + 1
    }

    fn coords(id: VertexId) -> (usize, usize) {
        let index = (id - 1) as usize;
        (index % WIDTH, index / WIDTH)
    }

    fn is_street(&self, x: usize, y: usize) -> bool {
        !self.buildings[y][x]
    }

    fn stop(&self, name: &str) -> VertexId {
        self.stops
            .iter()
            .find(|(stop, _, _)| *stop == name)
            .map(|&(_, x, y)| Town::id(x, y))
            .unwrap()
    }

    fn to_graph(&self) -> RoadGraph {
        let mut graph = RoadGraph::new();
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                if self.is_street(x, y) {
                    graph.add_vertex(Town::id(x, y), x as f64 * 100.0, y as f64 * 100.0).unwrap();
                }
            }
        }

        let mut edge_id = 0;
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                if !self.is_street(x, y) {
                    continue;
                }
                if x + 1 < WIDTH && self.is_street(x + 1, y) {
                    edge_id += 1;
                    graph.add_edge(edge_id, Town::id(x, y), Town::id(x + 1, y)).unwrap();
                }
                if y + 1 < HEIGHT && self.is_street(x, y + 1) {
                    edge_id += 1;
                    graph.add_edge(edge_id, Town::id(x, y), Town::id(x, y + 1)).unwrap();
                }
            }
        }
        graph
    }

    fn render(&self, graph: &RoadGraph, route: Option<&Route>) {
        let on_route: Vec<(usize, usize)> = route
            .map(|route| route.vertices.iter().map(|&id| Town::coords(id)).collect())
            .unwrap_or_default();
        let stops: HashMap<(usize, usize), char> = self
            .stops
            .iter()
            .filter_map(|(name, x, y)| name.chars().next().map(|c| ((*x, *y), c)))
            .collect();

        println!("{}", format!("┌{}┐", "─".repeat(WIDTH)).bright_white());
        for y in 0..HEIGHT {
            print!("{}", "│".bright_white());
            for x in 0..WIDTH {
                let cell = if let Some(&c) = stops.get(&(x, y)) {
                    c.to_string().bright_green().bold()
                } else if self.buildings[y][x] {
                    "█".on_bright_black().white()
                } else if on_route.contains(&(x, y)) {
                    "*".bright_yellow().bold()
                } else if graph.find_vertex(Town::id(x, y)).is_none() {
                    "░".red()
                } else {
                    "·".bright_black()
                };
                print!("{}", cell);
            }
            println!("{}", "│".bright_white());
        }
        println!("{}", format!("└{}┘", "─".repeat(WIDTH)).bright_white());
    }
}

fn main() {
    env_logger::init();

    println!("{}", "ROAD SSSP DISPATCH DEMO".bright_cyan().bold());
    let town = Town::new();
    let mut graph = town.to_graph();
    println!(
        "Town built with {} intersections and {} street segments",
        graph.vertices().len(),
        graph.edges().len()
    );

    let depot = town.stop("Depot");
    let report = graph.preprocess(depot).unwrap();
    println!(
        "{} {} intersections pruned as unreachable from the depot",
        "✂".bright_red(),
        report.removed()
    );
    town.render(&graph, None);

    graph.compute_central(depot).unwrap();
    println!("\n{}", "Distances from the depot:".bright_white().bold());
    for &(name, x, y) in &town.stops {
        match graph.distance_from_central(Town::id(x, y)) {
            Ok(distance) => println!("  {:<8} {:>8.0} m", name.bright_white(), distance),
            Err(err) => println!("  {:<8} {}", name.bright_white(), err.to_string().red()),
        }
    }

    let bakery = town.stop("Bakery");
    let clinic = town.stop("Clinic");
    println!("\n{}", "Bakery → Clinic".bright_yellow().bold());
    println!("{:<15} {:>10} {:>10} {:>10}", "Mode", "Cost (m)", "Settled", "Time (µs)");
    let mut shown = None;
    for mode in SearchMode::ALL {
        let start = Instant::now();
        let route = graph.shortest_path(mode, bakery, clinic).unwrap();
        let elapsed = start.elapsed();
        println!(
            "{:<15} {:>10.0} {:>10} {:>10}",
            mode.to_string().bright_cyan(),
            route.cost,
            route.settled,
            elapsed.as_micros()
        );
        shown = Some(route);
    }

    let options = SearchOptions::new().with_meeting_criterion(MeetingCriterion::HeuristicSum);
    let route = graph
        .shortest_path_with(SearchMode::Bidirectional, bakery, clinic, &options)
        .unwrap();
    println!("{:<15} {:>10.0} {:>10}", "heuristic sum".bright_magenta(), route.cost, route.settled);

    town.render(&graph, shown.as_ref());

    graph.compute_all_pairs().unwrap();
    let library = town.stop("Library");
    let market = town.stop("Market");
    let hops = graph.all_pairs_path(library, market).unwrap();
    println!(
        "\n{} Library → Market through {} intersections, {:.0} m",
        "✅".bright_green(),
        hops.len(),
        graph.all_pairs_distance(library, market).unwrap()
    );
}
