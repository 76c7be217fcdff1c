//! Typed models for Lichess API payloads.
//!
//! Timestamp fields are declared model by model with the adapters in
//! [`timestamp`]; see that module for the conversion rules.

mod board;
mod challenge;
mod common;
mod game;
mod puzzle;
mod team;
mod tournament;
mod tv;
mod user;

pub mod timestamp;

pub use board::{BoardEvent, Event, GameEventInfo, GameState};
pub use challenge::{Challenge, ChallengeStatus, ChallengeUser, DeclineReason, TimeControl};
pub use common::{ClockConfig, Color, LightUser, PerfType, Speed, Variant, VariantInfo};
pub use game::{
    Game, GameClock, GamePlayer, GamePlayers, GameStatus, ImportedGame, OngoingGame,
    OngoingGameOpponent, Opening,
};
pub use puzzle::{Puzzle, PuzzleActivity, PuzzleEntry};
pub use team::Team;
pub use tournament::{ArenaResult, CurrentTournaments, Tournament};
pub use tv::{TvChannel, TvChannels, TvFeedEvent};
pub use user::{
    Crosstable, GameCount, LiveStreamer, Perf, PlayTime, Preferences, Profile, RatingHistory,
    RatingHistoryPoint, User, UserStatus,
};
