//! Game models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Color, LightUser, Speed, Variant, VariantInfo};
use super::timestamp;

/// An exported game from the JSON game-export endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    /// Game ID
    pub id: String,
    /// Whether the game was rated
    pub rated: bool,
    /// Game variant
    pub variant: Variant,
    /// Game speed
    pub speed: Speed,
    /// Performance category key
    pub perf: String,
    /// When the game was created
    #[serde(with = "timestamp::millis")]
    pub created_at: DateTime<Utc>,
    /// When the last move was played
    #[serde(default, with = "timestamp::millis_option")]
    pub last_move_at: Option<DateTime<Utc>>,
    /// Game status
    pub status: GameStatus,
    /// Both players
    pub players: GamePlayers,
    /// Winning side, absent on draws and ongoing games
    #[serde(default)]
    pub winner: Option<Color>,
    /// Opening classification, when requested
    #[serde(default)]
    pub opening: Option<Opening>,
    /// Moves in algebraic notation, when requested
    #[serde(default)]
    pub moves: Option<String>,
    /// Full PGN text, when requested with `pgnInJson`
    #[serde(default)]
    pub pgn: Option<String>,
    /// Clock settings for real-time games
    #[serde(default)]
    pub clock: Option<GameClock>,
    /// Days per turn for correspondence games
    #[serde(default)]
    pub days_per_turn: Option<u32>,
    /// Game source (lobby, friend, tournament, ...)
    #[serde(default)]
    pub source: Option<String>,
}

/// Terminal (or current) status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameStatus {
    Created,
    Started,
    Aborted,
    Mate,
    Resign,
    Stalemate,
    Timeout,
    Draw,
    Outoftime,
    Cheat,
    NoStart,
    UnknownFinish,
    VariantEnd,
    #[serde(other)]
    Unknown,
}

/// Both sides of a game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GamePlayers {
    pub white: GamePlayer,
    pub black: GamePlayer,
}

/// One side of a game. Anonymous players and engine opponents carry no user.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GamePlayer {
    #[serde(default)]
    pub user: Option<LightUser>,
    #[serde(default)]
    pub rating: Option<i32>,
    #[serde(default)]
    pub rating_diff: Option<i32>,
    #[serde(default)]
    pub provisional: Option<bool>,
    /// Strength of the engine opponent, for games against the AI
    #[serde(default)]
    pub ai_level: Option<u8>,
    /// Per-player analysis summary, when requested
    #[serde(default)]
    pub analysis: Option<serde_json::Value>,
}

/// Opening classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Opening {
    /// ECO code
    pub eco: String,
    /// Opening name
    pub name: String,
    /// Ply at which the game left book
    pub ply: u32,
}

/// Real-time clock settings of a finished game.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameClock {
    /// Initial time in seconds
    pub initial: u32,
    /// Increment in seconds
    pub increment: u32,
    /// Estimated total game duration in seconds
    #[serde(default)]
    pub total_time: Option<u32>,
}

/// An ongoing game of the authenticated user, from `/api/account/playing`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OngoingGame {
    pub game_id: String,
    pub full_id: String,
    pub color: Color,
    pub fen: String,
    pub has_moved: bool,
    pub is_my_turn: bool,
    #[serde(default)]
    pub last_move: Option<String>,
    pub opponent: OngoingGameOpponent,
    pub perf: String,
    pub rated: bool,
    #[serde(default)]
    pub seconds_left: Option<u64>,
    #[serde(default)]
    pub source: Option<String>,
    pub speed: Speed,
    pub variant: VariantInfo,
}

/// Opponent in an ongoing game.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OngoingGameOpponent {
    #[serde(default)]
    pub id: Option<String>,
    pub username: String,
    #[serde(default)]
    pub rating: Option<i32>,
    #[serde(default)]
    pub ai: Option<u8>,
}

/// Result of importing a PGN via `/api/import`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportedGame {
    /// ID assigned to the imported game
    pub id: String,
    /// URL of the imported game
    pub url: String,
}
