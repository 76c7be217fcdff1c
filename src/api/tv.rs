//! TV service for the featured games of each channel.

use std::sync::Arc;

use serde::Serialize;

use crate::client::{ClientInner, NdjsonStream, PgnStream};
use crate::models::{Game, TvChannels, TvFeedEvent};
use crate::Result;

use super::NO_QUERY;

/// Options for fetching the best ongoing games of a channel.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TvChannelQuery {
    /// Number of games to fetch (1 to 30)
    #[serde(rename = "nb", skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// Include the moves
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moves: Option<bool>,
    /// Include the full PGN within the JSON response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pgn_in_json: Option<bool>,
    /// Include the PGN tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<bool>,
    /// Include clock comments in the moves
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clocks: Option<bool>,
    /// Include the opening name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening: Option<bool>,
}

/// Service for Lichess TV.
pub struct TvService {
    inner: Arc<ClientInner>,
}

impl TvService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the current best game of every TV channel.
    pub async fn channels(&self) -> Result<TvChannels> {
        self.inner.get("/api/tv/channels").await
    }

    /// Stream the current TV game: a featured-game event, then a position
    /// event after each move.
    pub async fn stream_current(&self) -> Result<NdjsonStream<TvFeedEvent>> {
        self.inner.get_ndjson("/api/tv/feed", NO_QUERY).await
    }

    /// Get the best ongoing games of a channel as an NDJSON stream.
    ///
    /// Channel names are server-defined, e.g. "blitz", "rapid", "bot".
    pub async fn best_ongoing(
        &self,
        channel: &str,
        query: &TvChannelQuery,
    ) -> Result<NdjsonStream<Game>> {
        self.inner.get_ndjson(&format!("/api/tv/{channel}"), query).await
    }

    /// Get the best ongoing games of a channel as a stream of PGN texts.
    pub async fn best_ongoing_pgn(
        &self,
        channel: &str,
        query: &TvChannelQuery,
    ) -> Result<PgnStream> {
        self.inner
            .get_pgn_stream(&format!("/api/tv/{channel}"), query)
            .await
    }
}
