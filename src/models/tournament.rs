//! Arena tournament models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{ClockConfig, VariantInfo};
use super::timestamp;

/// An arena tournament.
///
/// `startsAt` arrives as epoch milliseconds on some endpoints and as an
/// RFC 3339 string on others; both decode to the same instant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    /// Tournament ID
    pub id: String,
    /// Creator's user ID
    #[serde(default)]
    pub created_by: Option<String>,
    /// Full display name
    pub full_name: String,
    /// Clock settings
    #[serde(default)]
    pub clock: Option<ClockConfig>,
    /// Duration in minutes
    #[serde(default)]
    pub minutes: Option<u32>,
    /// Game variant
    #[serde(default)]
    pub variant: Option<VariantInfo>,
    /// Whether games are rated
    #[serde(default)]
    pub rated: Option<bool>,
    /// Number of enrolled players
    #[serde(default)]
    pub nb_players: Option<u32>,
    /// Start time
    #[serde(default, with = "timestamp::millis_or_string_option")]
    pub starts_at: Option<DateTime<Utc>>,
    /// Finish time
    #[serde(default, with = "timestamp::millis_or_string_option")]
    pub finishes_at: Option<DateTime<Utc>>,
    /// Numeric status (10 created, 20 started, 30 finished)
    #[serde(default)]
    pub status: Option<u32>,
    /// Performance category
    #[serde(default)]
    pub perf: Option<serde_json::Value>,
    /// Winner, once finished
    #[serde(default)]
    pub winner: Option<serde_json::Value>,
}

/// The three buckets returned by `/api/tournament`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentTournaments {
    pub created: Vec<Tournament>,
    pub started: Vec<Tournament>,
    pub finished: Vec<Tournament>,
}

/// One player's final standing, from the tournament results stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArenaResult {
    pub rank: u32,
    pub score: u32,
    pub rating: i32,
    pub username: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub performance: Option<i32>,
    #[serde(default)]
    pub team: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_as_millis() {
        let t: Tournament = serde_json::from_value(serde_json::json!({
            "id": "QITRjufu",
            "fullName": "Hourly Blitz Arena",
            "clock": {"limit": 300, "increment": 0},
            "minutes": 57,
            "nbPlayers": 154,
            "startsAt": 1514505150384_i64,
            "status": 20
        }))
        .unwrap();
        assert_eq!(t.starts_at.unwrap().timestamp_millis(), 1_514_505_150_384);
    }

    #[test]
    fn test_starts_at_as_string() {
        let t: Tournament = serde_json::from_value(serde_json::json!({
            "id": "QITRjufu",
            "fullName": "Hourly Blitz Arena",
            "startsAt": "2022-07-05T12:00:00.000Z"
        }))
        .unwrap();
        assert_eq!(t.starts_at.unwrap().timestamp(), 1_657_022_400);
    }

    #[test]
    fn test_current_buckets() {
        let current: CurrentTournaments = serde_json::from_value(serde_json::json!({
            "created": [{"id": "a", "fullName": "A"}],
            "started": [],
            "finished": [{"id": "b", "fullName": "B"}, {"id": "c", "fullName": "C"}]
        }))
        .unwrap();
        assert_eq!(current.created.len(), 1);
        assert_eq!(current.finished.len(), 2);
    }
}
