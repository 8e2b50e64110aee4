use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::{Error, Result};

/// Cooperative cancellation flag shared between a caller and running searches
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        CancelToken::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// How bidirectional search picks the vertex where both halves are joined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeetingCriterion {
    /// Minimum of forward distance + backward distance; always optimal
    #[default]
    DistanceSum,
    /// Minimum of forward key + backward key (distance plus heuristic on each side);
    /// not guaranteed to be optimal
    HeuristicSum,
}

/// Per-call search settings
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    meeting: MeetingCriterion,
    cancel: Option<CancelToken>,
}

impl SearchOptions {
    pub fn new() -> Self {
        SearchOptions::default()
    }

    /// Set the meeting criterion used by bidirectional search
    pub fn with_meeting_criterion(mut self, meeting: MeetingCriterion) -> Self {
        self.meeting = meeting;
        self
    }

    /// Attach a token checked before every queue extraction
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn meeting_criterion(&self) -> MeetingCriterion {
        self.meeting
    }

    pub fn check_cancelled(&self) -> Result<()> {
        match &self.cancel {
            Some(token) if token.is_cancelled() => Err(Error::Cancelled),
            _ => Ok(()),
        }
    }
}
