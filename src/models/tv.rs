//! TV models.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::common::{Color, LightUser};

/// The best ongoing game per channel, from `/api/tv/channels`.
///
/// Channel names ("Blitz", "Bullet", "Bot", ...) are server-defined, so the
/// map is keyed by the raw channel name.
pub type TvChannels = HashMap<String, TvChannel>;

/// The featured game of one TV channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TvChannel {
    /// Featured player
    pub user: LightUser,
    /// Player's rating
    #[serde(default)]
    pub rating: Option<i32>,
    /// ID of the featured game
    pub game_id: String,
    /// Color the featured player has
    #[serde(default)]
    pub color: Option<Color>,
}

/// An event from the TV feed stream (`/api/tv/feed`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "t", content = "d", rename_all = "camelCase")]
pub enum TvFeedEvent {
    /// A new game is being featured
    Featured(serde_json::Value),
    /// A move was played in the featured game
    #[serde(rename_all = "camelCase")]
    Fen {
        /// Current position
        fen: String,
        /// Last move in UCI notation
        #[serde(default)]
        lm: Option<String>,
        /// White's clock in seconds
        #[serde(default)]
        wc: Option<u32>,
        /// Black's clock in seconds
        #[serde(default)]
        bc: Option<u32>,
    },
}
