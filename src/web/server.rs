use axum::{
    http::{header, Method},
    Router,
};
use log::info;
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::algorithm::floyd_warshall::MAX_ALL_PAIRS_VERTICES;
use crate::web::api::{create_router, AppState};

/// Configuration for the web server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub enable_cors: bool,
    pub max_sessions: usize,
    /// Largest graph the all-pairs endpoint builds matrices for
    pub max_all_pairs_vertices: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3005,
            enable_cors: true,
            max_sessions: 1000,
            max_all_pairs_vertices: MAX_ALL_PAIRS_VERTICES,
        }
    }
}

impl ServerConfig {
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_cors(mut self, enable: bool) -> Self {
        self.enable_cors = enable;
        self
    }

    pub fn with_max_sessions(mut self, max_sessions: usize) -> Self {
        self.max_sessions = max_sessions;
        self
    }

    pub fn with_max_all_pairs_vertices(mut self, limit: usize) -> Self {
        self.max_all_pairs_vertices = limit;
        self
    }
}

/// Parses a port given on the command line or in the environment
pub fn parse_port(value: &str) -> Result<u16, String> {
    value
        .parse::<u16>()
        .map_err(|err| format!("invalid port {:?}: {}", value, err))
}

/// Build the application router with its middleware
pub fn build_app(config: &ServerConfig) -> Router {
    let app_state = AppState::with_max_sessions(config.max_sessions)
        .with_max_all_pairs_vertices(config.max_all_pairs_vertices);
    let app = Router::new().merge(create_router());

    let app = if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);
        app.layer(ServiceBuilder::new().layer(cors).into_inner())
    } else {
        app
    };

    app.with_state(app_state)
}

/// Start the web server with the given configuration
pub async fn start_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_app(&config);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    info!("Road SSSP server listening on http://{}", addr);
    info!(
        "CORS enabled: {}, max sessions: {}, all-pairs vertex limit: {}",
        config.enable_cors, config.max_sessions, config.max_all_pairs_vertices
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
