//! Board service: play games over the API with a normal account.

use std::sync::Arc;
use std::time::{Duration, Instant};

use futures_util::StreamExt;
use serde::Serialize;

use crate::client::{ClientInner, NdjsonStream};
use crate::models::{BoardEvent, Color, Event, Variant};
use crate::Result;

use super::NO_QUERY;

/// Parameters for a public seek.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeekRequest {
    /// Initial clock time in minutes
    pub time: u32,
    /// Clock increment in seconds
    pub increment: u32,
    /// Whether the game is rated
    pub rated: bool,
    /// Game variant
    pub variant: Variant,
    /// Color to play; omit for random
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Acceptable opponent rating range, e.g. "1500-1800"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating_range: Option<String>,
}

impl Default for SeekRequest {
    fn default() -> Self {
        Self {
            time: 10,
            increment: 0,
            rated: false,
            variant: Variant::Standard,
            color: None,
            rating_range: None,
        }
    }
}

impl SeekRequest {
    /// Set the rating range from a pair of bounds.
    pub fn with_rating_range(mut self, low: u32, high: u32) -> Self {
        self.rating_range = Some(format!("{low}-{high}"));
        self
    }
}

/// Service for playing games with a physical board or external application.
///
/// # Example
///
/// ```no_run
/// use futures_util::StreamExt;
/// use lichess_rs::models::Event;
///
/// # async fn example(client: lichess_rs::LichessClient) -> lichess_rs::Result<()> {
/// let mut events = client.board().stream_events().await?;
/// while let Some(event) = events.next().await {
///     if let Event::GameStart { game } = event? {
///         client.board().make_move(&game.id, "e2e4").await?;
///     }
/// }
/// # Ok(())
/// # }
/// ```
pub struct BoardService {
    inner: Arc<ClientInner>,
}

impl BoardService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Stream the incoming events of the authenticated user.
    pub async fn stream_events(&self) -> Result<NdjsonStream<Event>> {
        self.inner.get_ndjson("/api/stream/event", NO_QUERY).await
    }

    /// Create a public seek for a game with a random opponent.
    ///
    /// The seek stays active for as long as the request is held open, so
    /// this method reads the response until the server closes it (a game was
    /// found or the seek expired) and returns the elapsed time.
    pub async fn seek(&self, request: &SeekRequest) -> Result<Duration> {
        let response = self.inner.post_form_stream("/api/board/seek", request).await?;

        let start = Instant::now();
        let mut body = response.bytes_stream();
        while let Some(chunk) = body.next().await {
            chunk?;
        }
        Ok(start.elapsed())
    }

    /// Stream the state of a board game.
    ///
    /// The first event is the full game description, followed by incremental
    /// state updates and chat lines.
    pub async fn stream_game(&self, game_id: &str) -> Result<NdjsonStream<BoardEvent>> {
        self.inner
            .get_ndjson(&format!("/api/board/game/stream/{game_id}"), NO_QUERY)
            .await
    }

    /// Make a move in a board game, in UCI notation.
    pub async fn make_move(&self, game_id: &str, uci_move: &str) -> Result<()> {
        let _: serde_json::Value = self
            .inner
            .post_empty(&format!("/api/board/game/{game_id}/move/{uci_move}"))
            .await?;
        Ok(())
    }

    /// Post a message to the player or spectator chat of a board game.
    pub async fn write_chat(&self, game_id: &str, text: &str, spectator: bool) -> Result<()> {
        #[derive(Serialize)]
        struct Body<'a> {
            room: &'static str,
            text: &'a str,
        }
        let body = Body {
            room: if spectator { "spectator" } else { "player" },
            text,
        };
        let _: serde_json::Value = self
            .inner
            .post(&format!("/api/board/game/{game_id}/chat"), &body)
            .await?;
        Ok(())
    }

    /// Abort a board game in its first moves.
    pub async fn abort(&self, game_id: &str) -> Result<()> {
        let _: serde_json::Value = self
            .inner
            .post_empty(&format!("/api/board/game/{game_id}/abort"))
            .await?;
        Ok(())
    }

    /// Resign a board game.
    pub async fn resign(&self, game_id: &str) -> Result<()> {
        let _: serde_json::Value = self
            .inner
            .post_empty(&format!("/api/board/game/{game_id}/resign"))
            .await?;
        Ok(())
    }

    /// Offer a draw, or accept or decline the opponent's offer.
    pub async fn handle_draw_offer(&self, game_id: &str, accept: bool) -> Result<()> {
        let answer = if accept { "yes" } else { "no" };
        let _: serde_json::Value = self
            .inner
            .post_empty(&format!("/api/board/game/{game_id}/draw/{answer}"))
            .await?;
        Ok(())
    }
}
