use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use log::info;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLockReadGuard, RwLockWriteGuard};
use std::time::Instant;
use tokio::task::{self, JoinError};
use uuid::Uuid;

use crate::algorithm::floyd_warshall::MAX_ALL_PAIRS_VERTICES;
use crate::algorithm::SearchOptions;
use crate::graph::{GraphRecords, PreprocessReport, RoadGraph};
use crate::web::models::*;
use crate::{Error, VertexId};

pub type ApiError = (StatusCode, Json<ErrorResponse>);
pub type ApiResult<T> = Result<Json<T>, ApiError>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    pub max_sessions: usize,
    pub max_all_pairs_vertices: usize,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_max_sessions(1000)
    }

    pub fn with_max_sessions(max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            max_sessions,
            max_all_pairs_vertices: MAX_ALL_PAIRS_VERTICES,
        }
    }

    /// Set the largest graph the all-pairs endpoint will build matrices for
    pub fn with_max_all_pairs_vertices(mut self, limit: usize) -> Self {
        self.max_all_pairs_vertices = limit;
        self
    }

    fn session(&self, session_id: Uuid) -> Result<Session, ApiError> {
        let sessions = self.sessions.lock().map_err(|_| poisoned())?;
        sessions.get(&session_id).cloned().ok_or_else(|| {
            api_error(
                StatusCode::NOT_FOUND,
                "session_not_found",
                "Session not found".to_string(),
            )
        })
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/graphs", post(create_graph))
        .route("/api/graphs/:session_id", get(get_graph))
        .route("/api/graphs/:session_id/preprocess", post(preprocess))
        .route("/api/graphs/:session_id/shortest-path", post(shortest_path))
        .route("/api/graphs/:session_id/central", post(compute_central))
        .route("/api/graphs/:session_id/central/:vertex", get(central_distance))
        .route("/api/graphs/:session_id/all-pairs", post(compute_all_pairs))
        .route("/api/graphs/:session_id/all-pairs/:origin/:dest", get(all_pairs_path))
        .route("/api/sessions", get(list_sessions))
        .route("/api/health", get(health_check))
}

fn api_error(status: StatusCode, error: &str, message: String) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            message,
            details: None,
        }),
    )
}

fn poisoned() -> ApiError {
    api_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "lock_poisoned",
        "A previous request panicked while holding the graph".to_string(),
    )
}

impl From<Error> for (StatusCode, Json<ErrorResponse>) {
    fn from(err: Error) -> Self {
        let (status, code) = match &err {
            Error::UnknownVertex(_) => (StatusCode::NOT_FOUND, "unknown_vertex"),
            Error::NoPathFound { .. } => (StatusCode::NOT_FOUND, "no_path_found"),
            Error::StaleMatrix => (StatusCode::CONFLICT, "stale_matrix"),
            Error::StaleCentral => (StatusCode::CONFLICT, "stale_central"),
            Error::DuplicateVertex(_) | Error::DuplicateEdge(_) | Error::InvalidPosition { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "invalid_graph")
            }
            Error::GraphTooLarge { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "graph_too_large"),
            Error::InvalidMode(_) | Error::Parse(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            Error::Cancelled => (StatusCode::SERVICE_UNAVAILABLE, "cancelled"),
            Error::EmptyQueue
            | Error::KeyNotDecreased { .. }
            | Error::AlreadyQueued { .. }
            | Error::NotInQueue { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };
        api_error(status, code, err.to_string())
    }
}

fn read(session: &Session) -> Result<RwLockReadGuard<'_, RoadGraph>, ApiError> {
    session.graph.read().map_err(|_| poisoned())
}

fn write(session: &Session) -> Result<RwLockWriteGuard<'_, RoadGraph>, ApiError> {
    session.graph.write().map_err(|_| poisoned())
}

fn join_failed(err: JoinError) -> ApiError {
    api_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "task_failed",
        err.to_string(),
    )
}

/// Runs `work` on the blocking pool under the session's read lock
///
/// Waiting for the lock and the search itself stay off the async workers.
async fn with_graph<T, F>(session: Session, work: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce(&RoadGraph) -> Result<T, ApiError> + Send + 'static,
{
    task::spawn_blocking(move || {
        let graph = read(&session)?;
        work(&graph)
    })
    .await
    .map_err(join_failed)?
}

/// Runs `work` on the blocking pool under the session's write lock
async fn with_graph_mut<T, F>(session: Session, work: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce(&mut RoadGraph) -> Result<T, ApiError> + Send + 'static,
{
    task::spawn_blocking(move || {
        let mut graph = write(&session)?;
        work(&mut graph)
    })
    .await
    .map_err(join_failed)?
}

/// Load a new graph from vertex and edge records
pub async fn create_graph(
    State(state): State<AppState>,
    Json(request): Json<GraphRecords>,
) -> ApiResult<SessionSummary> {
    let graph = RoadGraph::from_records(&request)?;
    let session = Session::new(graph);
    // Not shared yet, so this lock is uncontended
    let summary = SessionSummary::new(&session, &*read(&session)?);

    let mut sessions = state.sessions.lock().map_err(|_| poisoned())?;
    if sessions.len() >= state.max_sessions {
        return Err(api_error(
            StatusCode::TOO_MANY_REQUESTS,
            "too_many_sessions",
            format!("At most {} sessions can be open", state.max_sessions),
        ));
    }
    sessions.insert(session.id, session);

    info!(
        "Session {} created with {} vertices",
        summary.id, summary.vertex_count
    );
    Ok(Json(summary))
}

/// Get graph information for a session
pub async fn get_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> ApiResult<SessionSummary> {
    let session = state.session(session_id)?;
    let summary = with_graph(session.clone(), move |graph| Ok(SessionSummary::new(&session, graph))).await?;
    Ok(Json(summary))
}

/// Prune the graph to the component of an anchor vertex
pub async fn preprocess(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<PreprocessRequest>,
) -> ApiResult<PreprocessReport> {
    let session = state.session(session_id)?;
    let report = with_graph_mut(session, move |graph| Ok(graph.preprocess(request.anchor)?)).await?;
    Ok(Json(report))
}

/// Run a point-to-point search
pub async fn shortest_path(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<ShortestPathRequest>,
) -> ApiResult<ShortestPathResponse> {
    let session = state.session(session_id)?;

    let response = with_graph(session, move |graph| {
        let options = SearchOptions::new().with_meeting_criterion(request.meeting.unwrap_or_default());
        let start_time = Instant::now();
        let route = graph.shortest_path_with(request.mode, request.origin, request.dest, &options)?;
        let execution_time = start_time.elapsed();

        Ok(ShortestPathResponse {
            mode: request.mode,
            origin: request.origin,
            dest: request.dest,
            execution_time_ms: execution_time.as_secs_f64() * 1000.0,
            route,
        })
    })
    .await?;
    Ok(Json(response))
}

/// Precompute distances from a depot vertex
pub async fn compute_central(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<CentralRequest>,
) -> ApiResult<PrecomputeResponse> {
    let session = state.session(session_id)?;

    let response = with_graph_mut(session, move |graph| {
        let start_time = Instant::now();
        graph.compute_central(request.anchor)?;
        Ok(PrecomputeResponse {
            vertex_count: graph.vertices().len(),
            execution_time_ms: start_time.elapsed().as_secs_f64() * 1000.0,
        })
    })
    .await?;
    Ok(Json(response))
}

/// Read a precomputed depot distance
pub async fn central_distance(
    State(state): State<AppState>,
    Path((session_id, vertex)): Path<(Uuid, VertexId)>,
) -> ApiResult<CentralDistanceResponse> {
    let session = state.session(session_id)?;

    let response = with_graph(session, move |graph| {
        let distance = graph.distance_from_central(vertex)?;
        Ok(CentralDistanceResponse {
            anchor: graph.central_anchor(),
            vertex,
            distance,
        })
    })
    .await?;
    Ok(Json(response))
}

/// Build the Floyd-Warshall matrices
pub async fn compute_all_pairs(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> ApiResult<PrecomputeResponse> {
    let session = state.session(session_id)?;
    let limit = state.max_all_pairs_vertices;

    let response = with_graph_mut(session, move |graph| {
        let start_time = Instant::now();
        graph.compute_all_pairs_with_limit(limit)?;
        Ok(PrecomputeResponse {
            vertex_count: graph.vertices().len(),
            execution_time_ms: start_time.elapsed().as_secs_f64() * 1000.0,
        })
    })
    .await?;
    Ok(Json(response))
}

/// Read a precomputed all-pairs route
pub async fn all_pairs_path(
    State(state): State<AppState>,
    Path((session_id, origin, dest)): Path<(Uuid, VertexId, VertexId)>,
) -> ApiResult<AllPairsResponse> {
    let session = state.session(session_id)?;

    let response = with_graph(session, move |graph| {
        Ok(AllPairsResponse {
            origin,
            dest,
            distance: graph.all_pairs_distance(origin, dest)?,
            path: graph.all_pairs_path(origin, dest)?,
        })
    })
    .await?;
    Ok(Json(response))
}

/// List all active sessions
pub async fn list_sessions(State(state): State<AppState>) -> ApiResult<Vec<Uuid>> {
    let sessions = state.sessions.lock().map_err(|_| poisoned())?;
    let session_ids: Vec<Uuid> = sessions.keys().cloned().collect();
    Ok(Json(session_ids))
}

/// Health check endpoint
pub async fn health_check() -> ApiResult<serde_json::Value> {
    Ok(Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    })))
}
