//! HTTP client implementation for the Lichess API.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::api::{
    AccountService, BoardService, ChallengesService, GamesService, PuzzlesService, TeamsService,
    TournamentsService, TvService, UsersService,
};
use crate::{Error, Result};

use super::config::ClientConfig;
use super::ndjson::NdjsonStream;
use super::pgn::PgnStream;

/// Accept header for single-JSON endpoints.
const MIME_JSON: &str = "application/json";
/// Accept header for newline-delimited JSON endpoints.
const MIME_NDJSON: &str = "application/x-ndjson";
/// Accept header for PGN endpoints.
const MIME_PGN: &str = "application/x-chess-pgn";

/// The main client for interacting with the Lichess API.
///
/// The client provides access to all API services through accessor methods
/// that return service structs. It owns the HTTP transport, injects bearer
/// authentication, and maps error responses into [`Error`].
///
/// # Example
///
/// ```no_run
/// use lichess_rs::LichessClient;
///
/// # async fn example() -> lichess_rs::Result<()> {
/// let client = LichessClient::new(std::env::var("LICHESS_TOKEN").unwrap())?;
/// let me = client.account().profile().await?;
/// println!("Hello, {}!", me.username);
/// # Ok(())
/// # }
/// ```
pub struct LichessClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) token: Option<SecretString>,
    pub(crate) config: ClientConfig,
}

impl LichessClient {
    /// Create a client authenticated with a personal API token.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_config(Some(token.into()), ClientConfig::default())
    }

    /// Create an unauthenticated client.
    ///
    /// Only public endpoints will succeed; the server decides which.
    pub fn anonymous() -> Result<Self> {
        Self::with_config(None, ClientConfig::default())
    }

    /// Create a client with an optional token and custom configuration.
    pub fn with_config(token: Option<String>, config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                token: token.map(SecretString::from),
                config,
            }),
        })
    }

    /// Whether this client sends an `Authorization` header.
    pub fn is_authenticated(&self) -> bool {
        self.inner.token.is_some()
    }

    /// Get the account service.
    pub fn account(&self) -> AccountService {
        AccountService::new(self.inner.clone())
    }

    /// Get the users service.
    pub fn users(&self) -> UsersService {
        UsersService::new(self.inner.clone())
    }

    /// Get the games service.
    pub fn games(&self) -> GamesService {
        GamesService::new(self.inner.clone())
    }

    /// Get the challenges service.
    pub fn challenges(&self) -> ChallengesService {
        ChallengesService::new(self.inner.clone())
    }

    /// Get the board service.
    pub fn board(&self) -> BoardService {
        BoardService::new(self.inner.clone())
    }

    /// Get the tournaments service.
    pub fn tournaments(&self) -> TournamentsService {
        TournamentsService::new(self.inner.clone())
    }

    /// Get the teams service.
    pub fn teams(&self) -> TeamsService {
        TeamsService::new(self.inner.clone())
    }

    /// Get the TV service.
    pub fn tv(&self) -> TvService {
        TvService::new(self.inner.clone())
    }

    /// Get the puzzles service.
    pub fn puzzles(&self) -> PuzzlesService {
        PuzzlesService::new(self.inner.clone())
    }
}

impl ClientInner {
    /// Resolve a path against the configured base URL.
    fn url(&self, path: &str) -> Result<Url> {
        let base = self.config.base_url.trim_end_matches('/');
        Ok(Url::parse(&format!("{base}{path}"))?)
    }

    /// Build headers for a request: bearer auth (when a token is configured)
    /// plus the Accept header for the requested format.
    fn headers(&self, accept: &'static str) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(accept));

        if let Some(token) = &self.token {
            let value = format!("Bearer {}", token.expose_secret());
            let mut value = HeaderValue::from_str(&value)
                .map_err(|_| Error::Config("API token contains invalid characters".into()))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        Ok(headers)
    }

    /// Send a request and map a non-2xx response into [`Error::Api`].
    ///
    /// The error body is parsed as JSON best-effort; when it does not parse,
    /// the cause is simply absent.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let reason = status.canonical_reason().unwrap_or("Unknown").to_string();
        let bytes = response.bytes().await.unwrap_or_default();
        let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        tracing::debug!(status = status.as_u16(), %reason, "API error response");
        Err(Error::from_api_response(status.as_u16(), reason, body))
    }

    /// Build a request for a buffered (non-streaming) call.
    fn request(
        &self,
        method: reqwest::Method,
        path: &str,
        accept: &'static str,
    ) -> Result<reqwest::RequestBuilder> {
        let url = self.url(path)?;
        tracing::debug!(%method, %url, "request");
        Ok(self
            .http
            .request(method, url)
            .headers(self.headers(accept)?)
            .timeout(self.config.timeout))
    }

    /// Build a request for a streaming call. No timeout is applied; the
    /// response stays open for as long as the caller keeps reading.
    fn stream_request(
        &self,
        method: reqwest::Method,
        path: &str,
        accept: &'static str,
    ) -> Result<reqwest::RequestBuilder> {
        let url = self.url(path)?;
        tracing::debug!(%method, %url, "stream request");
        Ok(self
            .http
            .request(method, url)
            .headers(self.headers(accept)?))
    }

    /// Decode a buffered response body as a single JSON value.
    async fn decode_json<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    // Single-JSON verbs

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = self.request(reqwest::Method::GET, path, MIME_JSON)?;
        let response = self.send(request).await?;
        self.decode_json(response).await
    }

    pub(crate) async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T> {
        let request = self
            .request(reqwest::Method::GET, path, MIME_JSON)?
            .query(query);
        let response = self.send(request).await?;
        self.decode_json(response).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let request = self
            .request(reqwest::Method::POST, path, MIME_JSON)?
            .json(body);
        let response = self.send(request).await?;
        self.decode_json(response).await
    }

    pub(crate) async fn post_form<T: DeserializeOwned, F: Serialize + ?Sized>(
        &self,
        path: &str,
        form: &F,
    ) -> Result<T> {
        let request = self
            .request(reqwest::Method::POST, path, MIME_JSON)?
            .form(form);
        let response = self.send(request).await?;
        self.decode_json(response).await
    }

    pub(crate) async fn post_text<T: DeserializeOwned>(
        &self,
        path: &str,
        body: String,
    ) -> Result<T> {
        let request = self
            .request(reqwest::Method::POST, path, MIME_JSON)?
            .body(body);
        let response = self.send(request).await?;
        self.decode_json(response).await
    }

    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = self.request(reqwest::Method::POST, path, MIME_JSON)?;
        let response = self.send(request).await?;
        self.decode_json(response).await
    }

    pub(crate) async fn post_empty_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T> {
        let request = self
            .request(reqwest::Method::POST, path, MIME_JSON)?
            .query(query);
        let response = self.send(request).await?;
        self.decode_json(response).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = self.request(reqwest::Method::DELETE, path, MIME_JSON)?;
        let response = self.send(request).await?;
        self.decode_json(response).await
    }

    // NDJSON streams

    pub(crate) async fn get_ndjson<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<NdjsonStream<T>> {
        let request = self
            .stream_request(reqwest::Method::GET, path, MIME_NDJSON)?
            .query(query);
        let response = self.send(request).await?;
        Ok(NdjsonStream::from_response(response))
    }

    pub(crate) async fn post_ndjson<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        body: String,
        query: &Q,
    ) -> Result<NdjsonStream<T>> {
        let request = self
            .stream_request(reqwest::Method::POST, path, MIME_NDJSON)?
            .query(query)
            .body(body);
        let response = self.send(request).await?;
        Ok(NdjsonStream::from_response(response))
    }

    // PGN

    pub(crate) async fn get_pgn<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<String> {
        let request = self
            .request(reqwest::Method::GET, path, MIME_PGN)?
            .query(query);
        let response = self.send(request).await?;
        Ok(response.text().await?)
    }

    pub(crate) async fn get_pgn_stream<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<PgnStream> {
        let request = self
            .stream_request(reqwest::Method::GET, path, MIME_PGN)?
            .query(query);
        let response = self.send(request).await?;
        Ok(PgnStream::from_response(response))
    }

    pub(crate) async fn post_pgn_stream<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        body: String,
        query: &Q,
    ) -> Result<PgnStream> {
        let request = self
            .stream_request(reqwest::Method::POST, path, MIME_PGN)?
            .query(query)
            .body(body);
        let response = self.send(request).await?;
        Ok(PgnStream::from_response(response))
    }

    /// POST a form and hand back the raw streaming response (board seeks
    /// hold the request open for as long as the seek should stay active).
    pub(crate) async fn post_form_stream<F: Serialize + ?Sized>(
        &self,
        path: &str,
        form: &F,
    ) -> Result<reqwest::Response> {
        let request = self
            .stream_request(reqwest::Method::POST, path, "text/plain")?
            .form(form);
        self.send(request).await
    }
}

impl Clone for LichessClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for LichessClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LichessClient")
            .field("config", &self.inner.config)
            .field("token", &self.inner.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
