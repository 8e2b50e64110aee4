use road_sssp::web::server::{parse_port, start_server, ServerConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Port: first argument, then ROAD_SSSP_PORT, then the default
    let default = ServerConfig::default();
    let port_arg = env::args().nth(1).or_else(|| env::var("ROAD_SSSP_PORT").ok());
    let port = match port_arg {
        Some(value) => parse_port(&value)?,
        None => default.port,
    };

    let config = default.with_port(port);

    println!("Starting Road SSSP web server...");
    println!("   Port: {}", config.port);
    println!("   CORS enabled: {}", config.enable_cors);
    println!("   Max sessions: {}", config.max_sessions);
    println!("   All-pairs vertex limit: {}", config.max_all_pairs_vertices);
    println!();

    start_server(config).await?;

    Ok(())
}
