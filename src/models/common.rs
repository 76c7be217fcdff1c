//! Shared enumeration types mapping domain names to their wire strings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Game variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum Variant {
    /// Standard chess
    #[default]
    Standard,
    /// Fischer random
    Chess960,
    /// Bring your king to the center
    KingOfTheHill,
    /// Check your opponent three times
    ThreeCheck,
    /// Lose all your pieces to win
    Antichess,
    /// Captures explode
    Atomic,
    /// Destroy the horde
    Horde,
    /// Race your king to the eighth rank
    RacingKings,
    /// Captured pieces can be dropped
    Crazyhouse,
    /// Game from a custom position
    FromPosition,
    /// Variant not known to this client
    #[serde(other)]
    Unknown,
}

impl Variant {
    /// Wire string for this variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Standard => "standard",
            Variant::Chess960 => "chess960",
            Variant::KingOfTheHill => "kingOfTheHill",
            Variant::ThreeCheck => "threeCheck",
            Variant::Antichess => "antichess",
            Variant::Atomic => "atomic",
            Variant::Horde => "horde",
            Variant::RacingKings => "racingKings",
            Variant::Crazyhouse => "crazyhouse",
            Variant::FromPosition => "fromPosition",
            Variant::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Performance category: a speed or a variant, as used by ratings,
/// leaderboards, and game filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PerfType {
    UltraBullet,
    Bullet,
    Blitz,
    Rapid,
    Classical,
    Correspondence,
    Chess960,
    KingOfTheHill,
    ThreeCheck,
    Antichess,
    Atomic,
    Horde,
    RacingKings,
    Crazyhouse,
    Puzzle,
}

impl PerfType {
    /// Wire string for this performance category.
    pub fn as_str(&self) -> &'static str {
        match self {
            PerfType::UltraBullet => "ultraBullet",
            PerfType::Bullet => "bullet",
            PerfType::Blitz => "blitz",
            PerfType::Rapid => "rapid",
            PerfType::Classical => "classical",
            PerfType::Correspondence => "correspondence",
            PerfType::Chess960 => "chess960",
            PerfType::KingOfTheHill => "kingOfTheHill",
            PerfType::ThreeCheck => "threeCheck",
            PerfType::Antichess => "antichess",
            PerfType::Atomic => "atomic",
            PerfType::Horde => "horde",
            PerfType::RacingKings => "racingKings",
            PerfType::Crazyhouse => "crazyhouse",
            PerfType::Puzzle => "puzzle",
        }
    }
}

impl fmt::Display for PerfType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Game speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Speed {
    UltraBullet,
    Bullet,
    Blitz,
    Rapid,
    Classical,
    Correspondence,
    #[serde(other)]
    Unknown,
}

/// Side color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Wire string for this color.
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }

    /// The opposite color.
    pub fn other(&self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Minimal user reference embedded in games, teams, and TV channels.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LightUser {
    /// User ID (lowercased username)
    pub id: String,
    /// Display username
    pub name: String,
    /// Title, if any (GM, IM, BOT, ...)
    #[serde(default)]
    pub title: Option<String>,
    /// Whether the user is a patron
    #[serde(default)]
    pub patron: Option<bool>,
}

/// Variant descriptor as embedded in games and challenges.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantInfo {
    /// Variant key
    pub key: Variant,
    /// Human-readable name
    #[serde(default)]
    pub name: Option<String>,
    /// Short name
    #[serde(default)]
    pub short: Option<String>,
}

/// Clock configuration: initial time and increment, both in seconds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ClockConfig {
    /// Starting time in seconds
    pub limit: u32,
    /// Increment in seconds
    pub increment: u32,
}
