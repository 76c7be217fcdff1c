//! Challenges service.

use std::sync::Arc;

use serde::Serialize;

use crate::client::ClientInner;
use crate::models::{Challenge, Color, DeclineReason, Variant};
use crate::Result;

/// Parameters for creating a challenge.
///
/// Provide either a real-time clock (`clock_limit`/`clock_increment`) or
/// `days` for a correspondence game; neither means unlimited.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChallengeRequest {
    /// Whether the game will be rated
    pub rated: bool,
    /// Clock initial time in seconds
    #[serde(rename = "clock.limit", skip_serializing_if = "Option::is_none")]
    pub clock_limit: Option<u32>,
    /// Clock increment in seconds
    #[serde(rename = "clock.increment", skip_serializing_if = "Option::is_none")]
    pub clock_increment: Option<u32>,
    /// Days per move, for correspondence games
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<u32>,
    /// Color the challenged player gets; omit for random
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Game variant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<Variant>,
    /// Custom initial position in FEN (standard variant, casual only)
    #[serde(rename = "fen", skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

/// Service for challenge-related operations.
///
/// # Example
///
/// ```no_run
/// use lichess_rs::api::ChallengeRequest;
///
/// # async fn example(client: lichess_rs::LichessClient) -> lichess_rs::Result<()> {
/// let request = ChallengeRequest {
///     rated: false,
///     clock_limit: Some(300),
///     clock_increment: Some(3),
///     ..Default::default()
/// };
/// let challenge = client.challenges().create("bob", &request).await?;
/// println!("Challenge {} created", challenge.id);
/// # Ok(())
/// # }
/// ```
pub struct ChallengesService {
    inner: Arc<ClientInner>,
}

impl ChallengesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Challenge another player to a game.
    pub async fn create(&self, username: &str, request: &ChallengeRequest) -> Result<Challenge> {
        self.inner
            .post(&format!("/api/challenge/{username}"), request)
            .await
    }

    /// Accept an incoming challenge.
    pub async fn accept(&self, challenge_id: &str) -> Result<()> {
        let _: serde_json::Value = self
            .inner
            .post_empty(&format!("/api/challenge/{challenge_id}/accept"))
            .await?;
        Ok(())
    }

    /// Decline an incoming challenge, optionally telling the challenger why.
    pub async fn decline(
        &self,
        challenge_id: &str,
        reason: Option<DeclineReason>,
    ) -> Result<()> {
        #[derive(Serialize)]
        struct Body {
            #[serde(skip_serializing_if = "Option::is_none")]
            reason: Option<DeclineReason>,
        }
        let _: serde_json::Value = self
            .inner
            .post(
                &format!("/api/challenge/{challenge_id}/decline"),
                &Body { reason },
            )
            .await?;
        Ok(())
    }

    /// Cancel a challenge you sent.
    pub async fn cancel(&self, challenge_id: &str) -> Result<()> {
        let _: serde_json::Value = self
            .inner
            .post_empty(&format!("/api/challenge/{challenge_id}/cancel"))
            .await?;
        Ok(())
    }
}
