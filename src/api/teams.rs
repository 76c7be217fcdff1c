//! Teams service.

use std::sync::Arc;

use serde::Serialize;

use crate::client::{ClientInner, NdjsonStream};
use crate::models::{Team, User};
use crate::Result;

use super::NO_QUERY;

/// Service for team-related operations.
pub struct TeamsService {
    inner: Arc<ClientInner>,
}

impl TeamsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get information about a team.
    pub async fn get(&self, team_id: &str) -> Result<Team> {
        self.inner.get(&format!("/api/team/{team_id}")).await
    }

    /// Stream the members of a team, most recent first.
    pub async fn members(&self, team_id: &str) -> Result<NdjsonStream<User>> {
        self.inner
            .get_ndjson(&format!("/api/team/{team_id}/users"), NO_QUERY)
            .await
    }

    /// Join a team.
    ///
    /// Closed teams require a `message` for the leaders; password-protected
    /// teams require the `password`.
    pub async fn join(
        &self,
        team_id: &str,
        message: Option<&str>,
        password: Option<&str>,
    ) -> Result<()> {
        #[derive(Serialize)]
        struct Form<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            message: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            password: Option<&'a str>,
        }
        let _: serde_json::Value = self
            .inner
            .post_form(&format!("/team/{team_id}/join"), &Form { message, password })
            .await?;
        Ok(())
    }

    /// Leave a team.
    pub async fn quit(&self, team_id: &str) -> Result<()> {
        let _: serde_json::Value = self
            .inner
            .post_empty(&format!("/team/{team_id}/quit"))
            .await?;
        Ok(())
    }
}
