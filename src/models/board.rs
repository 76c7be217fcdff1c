//! Board-play models: the account event stream and per-game state stream.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Color, Speed, VariantInfo};
use super::timestamp;

/// An event from the account event stream (`/api/stream/event`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Event {
    /// A game has started
    GameStart {
        game: GameEventInfo,
    },
    /// A game has finished
    GameFinish {
        game: GameEventInfo,
    },
    /// An incoming challenge
    Challenge {
        challenge: super::challenge::Challenge,
    },
    /// A challenge was canceled by the challenger
    ChallengeCanceled {
        challenge: super::challenge::Challenge,
    },
    /// A challenge was declined by the destination user
    ChallengeDeclined {
        challenge: super::challenge::Challenge,
    },
    /// Event type not known to this client
    #[serde(other)]
    Unknown,
}

/// Game reference carried by start/finish events.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameEventInfo {
    #[serde(alias = "gameId")]
    pub id: String,
    #[serde(default)]
    pub full_id: Option<String>,
    #[serde(default)]
    pub color: Option<Color>,
    #[serde(default)]
    pub fen: Option<String>,
    #[serde(default)]
    pub last_move: Option<String>,
    #[serde(default)]
    pub speed: Option<Speed>,
    #[serde(default)]
    pub rated: Option<bool>,
    #[serde(default)]
    pub opponent: Option<serde_json::Value>,
    #[serde(default)]
    pub is_my_turn: Option<bool>,
}

/// An event from a board game stream (`/api/board/game/stream/{id}`).
///
/// The first event is always `GameFull`; subsequent events describe state
/// changes and chat.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum BoardEvent {
    /// Full game description, sent once at stream start
    #[serde(rename_all = "camelCase")]
    GameFull {
        id: String,
        rated: bool,
        variant: VariantInfo,
        speed: Speed,
        #[serde(with = "timestamp::millis")]
        created_at: DateTime<Utc>,
        white: serde_json::Value,
        black: serde_json::Value,
        #[serde(default)]
        initial_fen: Option<String>,
        state: GameState,
    },
    /// Current game state after a move
    GameState(GameState),
    /// Chat message posted in the player or spectator room
    #[serde(rename_all = "camelCase")]
    ChatLine {
        room: String,
        username: String,
        text: String,
    },
    /// The opponent has left the game
    #[serde(rename_all = "camelCase")]
    OpponentGone {
        gone: bool,
        #[serde(default)]
        claim_win_in_seconds: Option<u32>,
    },
    /// Event type not known to this client
    #[serde(other)]
    Unknown,
}

/// Moves played so far plus both clocks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// All moves in UCI notation, space separated
    pub moves: String,
    /// White's remaining time
    #[serde(with = "timestamp::duration_millis")]
    pub wtime: Duration,
    /// Black's remaining time
    #[serde(with = "timestamp::duration_millis")]
    pub btime: Duration,
    /// White's increment
    #[serde(with = "timestamp::duration_millis")]
    pub winc: Duration,
    /// Black's increment
    #[serde(with = "timestamp::duration_millis")]
    pub binc: Duration,
    /// Game status key
    pub status: super::game::GameStatus,
    /// Winning side, once decided
    #[serde(default)]
    pub winner: Option<Color>,
    #[serde(default)]
    pub wdraw: Option<bool>,
    #[serde(default)]
    pub bdraw: Option<bool>,
}
