//! Account service for the authenticated user.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{Preferences, User};
use crate::Result;

/// Service for account-related operations. All of them require a token.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: lichess_rs::LichessClient) -> lichess_rs::Result<()> {
/// let me = client.account().profile().await?;
/// println!("Logged in as {}", me.username);
/// # Ok(())
/// # }
/// ```
pub struct AccountService {
    inner: Arc<ClientInner>,
}

impl AccountService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the public profile of the authenticated user.
    pub async fn profile(&self) -> Result<User> {
        self.inner.get("/api/account").await
    }

    /// Get the email address of the authenticated user.
    pub async fn email(&self) -> Result<String> {
        #[derive(serde::Deserialize)]
        struct Response {
            email: String,
        }
        let response: Response = self.inner.get("/api/account/email").await?;
        Ok(response.email)
    }

    /// Get the preferences of the authenticated user.
    pub async fn preferences(&self) -> Result<Preferences> {
        self.inner.get("/api/account/preferences").await
    }

    /// Get the kid mode status.
    pub async fn kid_mode(&self) -> Result<bool> {
        #[derive(serde::Deserialize)]
        struct Response {
            kid: bool,
        }
        let response: Response = self.inner.get("/api/account/kid").await?;
        Ok(response.kid)
    }

    /// Enable or disable kid mode.
    pub async fn set_kid_mode(&self, enabled: bool) -> Result<()> {
        let _: serde_json::Value = self
            .inner
            .post_empty_with_query("/api/account/kid", &[("v", enabled)])
            .await?;
        Ok(())
    }
}
