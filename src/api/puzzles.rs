//! Puzzles service.

use std::sync::Arc;

use crate::client::{ClientInner, NdjsonStream};
use crate::models::{PuzzleActivity, PuzzleEntry};
use crate::Result;

use super::NO_QUERY;

/// Service for puzzle-related operations.
pub struct PuzzlesService {
    inner: Arc<ClientInner>,
}

impl PuzzlesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the daily puzzle.
    pub async fn daily(&self) -> Result<PuzzleEntry> {
        self.inner.get("/api/puzzle/daily").await
    }

    /// Get a puzzle by ID.
    pub async fn get(&self, puzzle_id: &str) -> Result<PuzzleEntry> {
        self.inner.get(&format!("/api/puzzle/{puzzle_id}")).await
    }

    /// Stream the puzzle activity of the authenticated user, most recent
    /// first.
    pub async fn activity(&self, max: Option<u32>) -> Result<NdjsonStream<PuzzleActivity>> {
        match max {
            Some(max) => {
                self.inner
                    .get_ndjson("/api/puzzle/activity", &[("max", max)])
                    .await
            }
            None => self.inner.get_ndjson("/api/puzzle/activity", NO_QUERY).await,
        }
    }
}
