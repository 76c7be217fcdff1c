//! User and account models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::timestamp;

/// Public user data from `/api/user/{username}` and `/api/account`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User ID (lowercased username)
    pub id: String,
    /// Display username
    pub username: String,
    /// Title, if any
    #[serde(default)]
    pub title: Option<String>,
    /// Whether the user is a patron
    #[serde(default)]
    pub patron: Option<bool>,
    /// Whether the user is currently online
    #[serde(default)]
    pub online: Option<bool>,
    /// Account creation time
    #[serde(default, with = "timestamp::millis_option")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last time the user was seen
    #[serde(default, with = "timestamp::millis_option")]
    pub seen_at: Option<DateTime<Utc>>,
    /// Per-category ratings
    #[serde(default)]
    pub perfs: HashMap<String, Perf>,
    /// Profile fields, when filled in
    #[serde(default)]
    pub profile: Option<Profile>,
    /// Total play time
    #[serde(default)]
    pub play_time: Option<PlayTime>,
    /// Game counts
    #[serde(default)]
    pub count: Option<GameCount>,
    /// Profile URL
    #[serde(default)]
    pub url: Option<String>,
    /// Whether the account is disabled
    #[serde(default)]
    pub disabled: Option<bool>,
    /// Whether the account violated the terms of service
    #[serde(default)]
    pub tos_violation: Option<bool>,
}

/// Rating in one performance category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Perf {
    /// Number of games played
    #[serde(default)]
    pub games: Option<u32>,
    /// Current rating
    pub rating: i32,
    /// Rating deviation
    #[serde(default)]
    pub rd: Option<i32>,
    /// Rating progression over recent games
    #[serde(default)]
    pub prog: Option<i32>,
    /// Whether the rating is provisional
    #[serde(default)]
    pub prov: Option<bool>,
}

/// Optional profile fields.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub flag: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub real_name: Option<String>,
    #[serde(default)]
    pub fide_rating: Option<i32>,
    #[serde(default)]
    pub links: Option<String>,
}

/// Total play time in seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayTime {
    pub total: u64,
    pub tv: u64,
}

/// Game counts per outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameCount {
    pub all: u32,
    pub rated: u32,
    pub win: u32,
    pub loss: u32,
    pub draw: u32,
    #[serde(default)]
    pub playing: Option<u32>,
    #[serde(default)]
    pub import: Option<u32>,
    #[serde(default)]
    pub me: Option<u32>,
}

/// Online/playing/streaming status from `/api/users/status`.
///
/// Offline users only carry `id` and `name`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatus {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub online: Option<bool>,
    #[serde(default)]
    pub playing: Option<bool>,
    #[serde(default)]
    pub streaming: Option<bool>,
    #[serde(default)]
    pub patron: Option<bool>,
    /// ID of the game being played, when requested
    #[serde(default)]
    pub playing_id: Option<String>,
}

/// Rating history for one performance category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingHistory {
    /// Category name (e.g. "Blitz")
    pub name: String,
    /// Rating points over time
    pub points: Vec<RatingHistoryPoint>,
}

/// One rating history point, transmitted as `[year, month, day, rating]`.
///
/// The month is zero-based on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingHistoryPoint(pub i32, pub u32, pub u32, pub i32);

impl RatingHistoryPoint {
    pub fn year(&self) -> i32 {
        self.0
    }

    /// Zero-based month, as transmitted.
    pub fn month(&self) -> u32 {
        self.1
    }

    pub fn day(&self) -> u32 {
        self.2
    }

    pub fn rating(&self) -> i32 {
        self.3
    }
}

/// Head-to-head record between two users.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Crosstable {
    /// Score per user ID
    pub users: HashMap<String, f64>,
    /// Total number of games played
    pub nb_games: u32,
    /// Current match data, when requested and present
    #[serde(default)]
    pub matchup: Option<Box<Crosstable>>,
}

/// A user currently streaming, from `/api/streamer/live`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveStreamer {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub patron: Option<bool>,
    /// Stream platform details, shape varies
    #[serde(default)]
    pub stream: Option<serde_json::Value>,
    /// Streamer page details, shape varies
    #[serde(default)]
    pub streamer: Option<serde_json::Value>,
}

/// Account preferences from `/api/account/preferences`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    /// Display language (e.g. "en-US")
    #[serde(default)]
    pub language: Option<String>,
    /// The preference map itself; keys and values vary with the site UI
    #[serde(default)]
    pub prefs: serde_json::Value,
}
