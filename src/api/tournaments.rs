//! Tournaments service for arena tournaments.

use std::sync::Arc;

use serde::Serialize;

use crate::client::{ClientInner, NdjsonStream};
use crate::models::{ArenaResult, CurrentTournaments, Tournament, Variant};
use crate::{Error, Result};

use super::NO_QUERY;

/// Parameters for creating an arena tournament.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArenaRequest {
    /// Clock initial time in minutes (fractions such as 0.5 are valid)
    pub clock_time: f64,
    /// Clock increment in seconds
    pub clock_increment: u32,
    /// Tournament duration in minutes
    pub minutes: u32,
    /// Tournament name; the server picks one when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Minutes to wait before the tournament starts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_minutes: Option<u32>,
    /// Game variant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<Variant>,
    /// Whether games are rated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rated: Option<bool>,
    /// Custom initial position in FEN
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    /// Make the tournament private with this password
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Service for arena tournaments.
pub struct TournamentsService {
    inner: Arc<ClientInner>,
}

impl TournamentsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get recently finished, ongoing, and upcoming tournaments.
    pub async fn current(&self) -> Result<CurrentTournaments> {
        self.inner.get("/api/tournament").await
    }

    /// Get information about one tournament.
    pub async fn get(&self, tournament_id: &str) -> Result<Tournament> {
        self.inner
            .get(&format!("/api/tournament/{tournament_id}"))
            .await
    }

    /// Create a new arena tournament.
    pub async fn create(&self, request: &ArenaRequest) -> Result<Tournament> {
        if request.clock_time <= 0.0 {
            return Err(Error::InvalidInput(
                "clock_time must be positive".to_string(),
            ));
        }
        self.inner.post("/api/tournament", request).await
    }

    /// Stream the final standings of a tournament, best rank first.
    pub async fn stream_results(
        &self,
        tournament_id: &str,
        max: Option<u32>,
    ) -> Result<NdjsonStream<ArenaResult>> {
        let path = format!("/api/tournament/{tournament_id}/results");
        match max {
            Some(max) => self.inner.get_ndjson(&path, &[("nb", max)]).await,
            None => self.inner.get_ndjson(&path, NO_QUERY).await,
        }
    }
}
