//! Puzzle models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

/// A puzzle together with the game it came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleEntry {
    /// The source game (moves, players, clock)
    pub game: serde_json::Value,
    /// The puzzle itself
    pub puzzle: Puzzle,
}

/// A tactics puzzle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Puzzle {
    /// Puzzle ID
    pub id: String,
    /// Puzzle rating
    pub rating: i32,
    /// Number of times played
    #[serde(default)]
    pub plays: Option<u32>,
    /// Solution moves in UCI notation
    #[serde(default)]
    pub solution: Vec<String>,
    /// Theme tags
    #[serde(default)]
    pub themes: Vec<String>,
    /// Ply at which the puzzle starts
    #[serde(default)]
    pub initial_ply: Option<u32>,
    /// Position, when included
    #[serde(default)]
    pub fen: Option<String>,
}

/// One entry of the puzzle activity stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleActivity {
    /// When the puzzle was attempted
    #[serde(with = "timestamp::millis")]
    pub date: DateTime<Utc>,
    /// Whether the attempt succeeded
    pub win: bool,
    /// The attempted puzzle
    pub puzzle: Puzzle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_date_converts() {
        let activity: PuzzleActivity = serde_json::from_value(serde_json::json!({
            "date": 1592990062860_i64,
            "win": true,
            "puzzle": {
                "id": "sXkfl",
                "rating": 1569,
                "plays": 5891,
                "solution": ["f3g3", "h6h1"],
                "themes": ["endgame", "short"]
            }
        }))
        .unwrap();
        assert_eq!(activity.date.timestamp_millis(), 1_592_990_062_860);
        assert_eq!(activity.puzzle.solution.len(), 2);
    }
}
