//! Users service for public player data.

use std::sync::Arc;

use serde::Serialize;

use crate::client::ClientInner;
use crate::models::{Crosstable, LiveStreamer, PerfType, RatingHistory, User, UserStatus};
use crate::{Error, Result};

use super::comma_join;

/// Maximum number of user IDs per status request.
pub const MAX_STATUS_IDS: usize = 100;

/// Service for user-related operations.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: lichess_rs::LichessClient) -> lichess_rs::Result<()> {
/// let user = client.users().get("thibault").await?;
/// println!("{} has {} blitz rating", user.username, user.perfs["blitz"].rating);
/// # Ok(())
/// # }
/// ```
pub struct UsersService {
    inner: Arc<ClientInner>,
}

impl UsersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the public data of a user.
    pub async fn get(&self, username: &str) -> Result<User> {
        self.inner.get(&format!("/api/user/{username}")).await
    }

    /// Get the online, playing, and streaming statuses of players.
    ///
    /// Offline users carry only `id` and `name`. At most [`MAX_STATUS_IDS`]
    /// IDs per request.
    pub async fn statuses(&self, ids: &[&str], with_game_ids: bool) -> Result<Vec<UserStatus>> {
        if ids.len() > MAX_STATUS_IDS {
            return Err(Error::InvalidInput(format!(
                "Too many user IDs. Maximum is {}, got {}",
                MAX_STATUS_IDS,
                ids.len()
            )));
        }

        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Query {
            ids: String,
            with_game_ids: bool,
        }

        let query = Query {
            ids: comma_join(ids),
            with_game_ids,
        };
        self.inner.get_with_query("/api/users/status", &query).await
    }

    /// Get multiple users by ID in one request.
    pub async fn get_many(&self, usernames: &[&str]) -> Result<Vec<User>> {
        self.inner
            .post_text("/api/users", comma_join(usernames))
            .await
    }

    /// Get the rating history of a user, one series per performance category.
    pub async fn rating_history(&self, username: &str) -> Result<Vec<RatingHistory>> {
        self.inner
            .get(&format!("/api/user/{username}/rating-history"))
            .await
    }

    /// Get the leaderboard for one speed or variant.
    pub async fn leaderboard(&self, perf_type: PerfType, count: u32) -> Result<Vec<User>> {
        #[derive(serde::Deserialize)]
        struct Response {
            users: Vec<User>,
        }
        let response: Response = self
            .inner
            .get(&format!("/api/player/top/{count}/{perf_type}"))
            .await?;
        Ok(response.users)
    }

    /// Get basic information about currently streaming users.
    pub async fn live_streamers(&self) -> Result<Vec<LiveStreamer>> {
        self.inner.get("/api/streamer/live").await
    }

    /// Get the total games and current score between two users.
    pub async fn crosstable(&self, user1: &str, user2: &str, matchup: bool) -> Result<Crosstable> {
        self.inner
            .get_with_query(
                &format!("/api/crosstable/{user1}/{user2}"),
                &[("matchup", matchup)],
            )
            .await
    }
}
