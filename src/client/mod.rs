//! HTTP session layer and response decoding for the Lichess API.
//!
//! [`LichessClient`] is the main entry point; it owns the transport and the
//! credentials. The decoding half lives in [`ndjson`] and [`pgn`], which turn
//! streaming response bodies into lazy [`futures_util::Stream`]s.
//!
//! # Example
//!
//! ```no_run
//! use lichess_rs::LichessClient;
//!
//! # async fn example() -> lichess_rs::Result<()> {
//! let client = LichessClient::anonymous()?;
//! let user = client.users().get("thibault").await?;
//! println!("{} joined {:?}", user.username, user.created_at);
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
pub mod ndjson;
pub mod pgn;

pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use http::LichessClient;
pub use ndjson::NdjsonStream;
pub use pgn::PgnStream;
pub(crate) use http::ClientInner;
