//! Challenge models.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::common::{Color, Speed, VariantInfo};

/// A challenge, incoming or outgoing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    /// Challenge ID
    pub id: String,
    /// Challenge URL
    #[serde(default)]
    pub url: Option<String>,
    /// Current status
    pub status: ChallengeStatus,
    /// The challenging player; absent for open challenges
    #[serde(default)]
    pub challenger: Option<ChallengeUser>,
    /// The challenged player; absent for open challenges
    #[serde(default)]
    pub dest_user: Option<ChallengeUser>,
    /// Game variant
    pub variant: VariantInfo,
    /// Whether the game will be rated
    pub rated: bool,
    /// Game speed
    pub speed: Speed,
    /// Time control
    pub time_control: TimeControl,
    /// Requested color ("white", "black", or "random")
    #[serde(default)]
    pub color: Option<String>,
    /// Assigned color, once decided
    #[serde(default)]
    pub final_color: Option<Color>,
    /// Custom initial position in FEN
    #[serde(default)]
    pub initial_fen: Option<String>,
    /// Why the challenge was declined, when it was
    #[serde(default)]
    pub decline_reason: Option<String>,
}

/// Challenge lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChallengeStatus {
    Created,
    Offline,
    Canceled,
    Declined,
    Accepted,
    #[serde(other)]
    Unknown,
}

/// A player referenced by a challenge.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeUser {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub rating: Option<i32>,
    #[serde(default)]
    pub provisional: Option<bool>,
    #[serde(default)]
    pub patron: Option<bool>,
    #[serde(default)]
    pub online: Option<bool>,
    #[serde(default)]
    pub lag: Option<u32>,
}

/// Time control of a challenge.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum TimeControl {
    /// Real-time clock
    #[serde(rename_all = "camelCase")]
    Clock {
        /// Initial time in seconds
        limit: u32,
        /// Increment in seconds
        increment: u32,
        /// Human-readable form, e.g. "5+3"
        #[serde(default)]
        show: Option<String>,
    },
    /// Correspondence
    #[serde(rename_all = "camelCase")]
    Correspondence {
        days_per_turn: u32,
    },
    /// No clock at all
    Unlimited,
}

/// Reason given when declining a challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeclineReason {
    Generic,
    Later,
    TooFast,
    TooSlow,
    TimeControl,
    Rated,
    Casual,
    Standard,
    Variant,
    NoBot,
    OnlyBot,
}

impl DeclineReason {
    /// Wire string for this reason.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclineReason::Generic => "generic",
            DeclineReason::Later => "later",
            DeclineReason::TooFast => "tooFast",
            DeclineReason::TooSlow => "tooSlow",
            DeclineReason::TimeControl => "timeControl",
            DeclineReason::Rated => "rated",
            DeclineReason::Casual => "casual",
            DeclineReason::Standard => "standard",
            DeclineReason::Variant => "variant",
            DeclineReason::NoBot => "noBot",
            DeclineReason::OnlyBot => "onlyBot",
        }
    }
}

impl fmt::Display for DeclineReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_challenge_with_clock() {
        let challenge: Challenge = serde_json::from_value(serde_json::json!({
            "id": "7pGLxZ4F",
            "url": "https://lichess.org/7pGLxZ4F",
            "status": "created",
            "challenger": {"id": "alice", "name": "Alice", "rating": 1800},
            "destUser": {"id": "bob", "name": "Bob", "rating": 1790, "provisional": true},
            "variant": {"key": "standard", "name": "Standard", "short": "Std"},
            "rated": true,
            "speed": "blitz",
            "timeControl": {"type": "clock", "limit": 300, "increment": 3, "show": "5+3"},
            "color": "random"
        }))
        .unwrap();
        assert_eq!(challenge.status, ChallengeStatus::Created);
        match challenge.time_control {
            TimeControl::Clock { limit, increment, .. } => {
                assert_eq!((limit, increment), (300, 3));
            }
            other => panic!("Expected Clock, got {other:?}"),
        }
    }

    #[test]
    fn test_unlimited_time_control() {
        let tc: TimeControl =
            serde_json::from_value(serde_json::json!({"type": "unlimited"})).unwrap();
        assert!(matches!(tc, TimeControl::Unlimited));
    }

    #[test]
    fn test_decline_reason_wire_strings() {
        assert_eq!(DeclineReason::TooFast.as_str(), "tooFast");
        assert_eq!(
            serde_json::to_string(&DeclineReason::TimeControl).unwrap(),
            "\"timeControl\""
        );
    }
}
