//! Games service for exporting, importing, and streaming games.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::client::{ClientInner, NdjsonStream, PgnStream};
use crate::models::{timestamp, Color, Game, ImportedGame, OngoingGame, PerfType};
use crate::Result;

use super::{comma_join, NO_QUERY};

/// Options controlling what an exported game includes.
///
/// All fields default to the server's own defaults.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportOptions {
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
    /// Include analysis evaluation comments, when available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evals: Option<bool>,
    /// Include the opening name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening: Option<bool>,
    /// Include textual move annotations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub literate: Option<bool>,
}

/// Filters for exporting the games of one player.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportByPlayerQuery {
    /// Lower bound on the game timestamp
    #[serde(skip_serializing_if = "Option::is_none", with = "timestamp::millis_option")]
    pub since: Option<DateTime<Utc>>,
    /// Upper bound on the game timestamp
    #[serde(skip_serializing_if = "Option::is_none", with = "timestamp::millis_option")]
    pub until: Option<DateTime<Utc>>,
    /// Maximum number of games
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    /// Only games against this opponent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vs: Option<String>,
    /// Only rated (`true`) or casual (`false`) games
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rated: Option<bool>,
    /// Only games in this speed or variant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perf_type: Option<PerfType>,
    /// Only games played as this color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Only games with or without a computer analysis
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysed: Option<bool>,
    /// Include ongoing games (last 3 moves omitted)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ongoing: Option<bool>,
    /// Include finished games
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished: Option<bool>,
    /// Sort order (`dateAsc` or `dateDesc`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// Content options
    #[serde(flatten)]
    pub options: ExportOptions,
}

/// Service for game-related operations.
///
/// Export endpoints come in a JSON and a PGN flavor; the PGN flavor is the
/// `_pgn` method next to each JSON one.
///
/// # Example
///
/// ```no_run
/// use futures_util::StreamExt;
/// use lichess_rs::api::ExportByPlayerQuery;
///
/// # async fn example(client: lichess_rs::LichessClient) -> lichess_rs::Result<()> {
/// let query = ExportByPlayerQuery { max: Some(10), ..Default::default() };
/// let mut games = client.games().export_by_player("thibault", query).await?;
/// while let Some(game) = games.next().await {
///     println!("{}", game?.id);
/// }
/// # Ok(())
/// # }
/// ```
pub struct GamesService {
    inner: Arc<ClientInner>,
}

impl GamesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Export one finished game as JSON.
    pub async fn export(&self, game_id: &str, options: &ExportOptions) -> Result<Game> {
        self.inner
            .get_with_query(&format!("/game/export/{game_id}"), options)
            .await
    }

    /// Export one finished game as PGN text.
    pub async fn export_pgn(&self, game_id: &str, options: &ExportOptions) -> Result<String> {
        self.inner
            .get_pgn(&format!("/game/export/{game_id}"), options)
            .await
    }

    /// Export the games of a player as a lazy NDJSON stream.
    pub async fn export_by_player(
        &self,
        username: &str,
        query: ExportByPlayerQuery,
    ) -> Result<NdjsonStream<Game>> {
        self.inner
            .get_ndjson(&format!("/api/games/user/{username}"), &query)
            .await
    }

    /// Export the games of a player as a lazy stream of PGN texts.
    pub async fn export_by_player_pgn(
        &self,
        username: &str,
        query: ExportByPlayerQuery,
    ) -> Result<PgnStream> {
        self.inner
            .get_pgn_stream(&format!("/api/games/user/{username}"), &query)
            .await
    }

    /// Export multiple games by ID as a lazy NDJSON stream.
    pub async fn export_many(
        &self,
        game_ids: &[&str],
        options: &ExportOptions,
    ) -> Result<NdjsonStream<Game>> {
        self.inner
            .post_ndjson("/api/games/export/_ids", comma_join(game_ids), options)
            .await
    }

    /// Export multiple games by ID as a lazy stream of PGN texts.
    pub async fn export_many_pgn(
        &self,
        game_ids: &[&str],
        options: &ExportOptions,
    ) -> Result<PgnStream> {
        self.inner
            .post_pgn_stream("/api/games/export/_ids", comma_join(game_ids), options)
            .await
    }

    /// Get the ongoing games of the authenticated user.
    pub async fn ongoing(&self, count: u32) -> Result<Vec<OngoingGame>> {
        #[derive(serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Response {
            now_playing: Vec<OngoingGame>,
        }
        let response: Response = self
            .inner
            .get_with_query("/api/account/playing", &[("nb", count)])
            .await?;
        Ok(response.now_playing)
    }

    /// Stream positions and moves of any ongoing game.
    pub async fn stream_moves(&self, game_id: &str) -> Result<NdjsonStream<serde_json::Value>> {
        self.inner
            .get_ndjson(&format!("/api/stream/game/{game_id}"), NO_QUERY)
            .await
    }

    /// Stream the games currently being played among the given players.
    ///
    /// Games where only one of the players is in the list are not included.
    pub async fn stream_among(
        &self,
        usernames: &[&str],
        with_current_games: bool,
    ) -> Result<NdjsonStream<Game>> {
        self.inner
            .post_ndjson(
                "/api/stream/games-by-users",
                comma_join(usernames),
                &[("withCurrentGames", with_current_games)],
            )
            .await
    }

    /// Import a single game from PGN.
    pub async fn import_pgn(&self, pgn: &str) -> Result<ImportedGame> {
        self.inner.post_form("/api/import", &[("pgn", pgn)]).await
    }

    /// Export all games imported by the authenticated user, as one PGN text.
    pub async fn export_imported(&self) -> Result<String> {
        self.inner.get_pgn("/api/games/export/imports", NO_QUERY).await
    }
}
