use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::algorithm::{MeetingCriterion, Route, SearchMode};
use crate::graph::{Network, RoadGraph};
use crate::VertexId;

/// Parameters for reachability pruning
#[derive(Debug, Deserialize)]
pub struct PreprocessRequest {
    pub anchor: VertexId,
}

/// Parameters for a point-to-point query
#[derive(Debug, Deserialize)]
pub struct ShortestPathRequest {
    pub mode: SearchMode,
    pub origin: VertexId,
    pub dest: VertexId,
    #[serde(default)]
    pub meeting: Option<MeetingCriterion>,
}

/// Response containing a route and how long it took to find
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPathResponse {
    pub mode: SearchMode,
    pub origin: VertexId,
    pub dest: VertexId,
    pub execution_time_ms: f64,
    pub route: Route,
}

/// Parameters for the one-to-all depot precomputation
#[derive(Debug, Deserialize)]
pub struct CentralRequest {
    pub anchor: VertexId,
}

#[derive(Debug, Clone, Serialize)]
pub struct CentralDistanceResponse {
    pub anchor: Option<VertexId>,
    pub vertex: VertexId,
    pub distance: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AllPairsResponse {
    pub origin: VertexId,
    pub dest: VertexId,
    pub distance: f64,
    pub path: Vec<VertexId>,
}

/// Timing of a precomputation step
#[derive(Debug, Clone, Serialize)]
pub struct PrecomputeResponse {
    pub vertex_count: usize,
    pub execution_time_ms: f64,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

/// A loaded road graph shared by concurrent requests
///
/// Searches take the read lock; preprocessing and precomputations take the
/// write lock, so they never overlap an in-flight search.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub graph: Arc<RwLock<RoadGraph>>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(graph: RoadGraph) -> Self {
        Self {
            id: Uuid::new_v4(),
            graph: Arc::new(RwLock::new(graph)),
            created_at: Utc::now(),
        }
    }
}

/// Session information returned to clients
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub central_anchor: Option<VertexId>,
    pub all_pairs_ready: bool,
}

impl SessionSummary {
    pub fn new(session: &Session, graph: &RoadGraph) -> Self {
        Self {
            id: session.id,
            created_at: session.created_at,
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            central_anchor: graph.central_anchor(),
            all_pairs_ready: graph.all_pairs_ready(),
        }
    }
}
