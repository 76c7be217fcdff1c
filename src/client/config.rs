//! Client configuration options.

use std::time::Duration;

/// Default base URL for the Lichess API.
pub const DEFAULT_BASE_URL: &str = "https://lichess.org";

/// Configuration for the Lichess client.
///
/// # Example
///
/// ```
/// use lichess_rs::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for all requests
    pub base_url: String,
    /// Request timeout for non-streaming requests
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("lichess-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL (e.g. to point at a local mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout.
    ///
    /// The timeout applies to non-streaming requests only; streaming
    /// responses stay open for as long as the caller keeps reading.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("lichess-rs/"));
    }

    #[test]
    fn test_builder_overrides() {
        let config = ClientConfig::new()
            .with_base_url("http://127.0.0.1:9999")
            .with_timeout(Duration::from_secs(5))
            .with_user_agent("test/0.0");
        assert_eq!(config.base_url, "http://127.0.0.1:9999");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "test/0.0");
    }
}
