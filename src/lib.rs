//! # lichess-rs
//!
//! An async Rust client for the [Lichess API](https://lichess.org/api).
//!
//! This crate exposes the Lichess HTTP/NDJSON endpoints as typed method
//! calls, manages bearer-token authentication, and converts wire payloads
//! (JSON, newline-delimited JSON streams, PGN text) into native values,
//! including epoch-millisecond timestamps into `chrono` datetimes.
//!
//! ## Features
//!
//! - **Authentication**: personal API token via `Authorization: Bearer`;
//!   anonymous clients work for public endpoints
//! - **Typed models**: games, users, challenges, tournaments, and more
//! - **Lazy streaming**: NDJSON and bulk-PGN endpoints decode as
//!   [`futures_util::Stream`]s; dropping a stream closes the connection
//! - **Async-first**: built on Tokio and reqwest
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use lichess_rs::LichessClient;
//!
//! #[tokio::main]
//! async fn main() -> lichess_rs::Result<()> {
//!     let client = LichessClient::new(std::env::var("LICHESS_TOKEN").unwrap())?;
//!
//!     let me = client.account().profile().await?;
//!     println!("Logged in as {}", me.username);
//!
//!     let user = client.users().get("thibault").await?;
//!     println!("{} was last seen {:?}", user.username, user.seen_at);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Streaming example
//!
//! ```rust,no_run
//! use futures_util::StreamExt;
//! use lichess_rs::{api::ExportByPlayerQuery, LichessClient};
//!
//! #[tokio::main]
//! async fn main() -> lichess_rs::Result<()> {
//!     let client = LichessClient::anonymous()?;
//!
//!     let query = ExportByPlayerQuery {
//!         max: Some(50),
//!         rated: Some(true),
//!         ..Default::default()
//!     };
//!     let mut games = client.games().export_by_player("thibault", query).await?;
//!
//!     // One network read per game; stop polling to stop reading
//!     while let Some(game) = games.next().await {
//!         let game = game?;
//!         println!("{} ({:?})", game.id, game.winner);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use client::{ClientConfig, LichessClient, NdjsonStream, PgnStream, DEFAULT_BASE_URL};
pub use error::{Error, Result};

/// Prelude module for convenient imports.
///
/// ```rust
/// use lichess_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        ArenaRequest, ChallengeRequest, ExportByPlayerQuery, ExportOptions, SeekRequest,
    };
    pub use crate::client::{ClientConfig, LichessClient, NdjsonStream, PgnStream};
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        BoardEvent, Challenge, Color, Event, Game, GameStatus, PerfType, Speed, Tournament, User,
        UserStatus, Variant,
    };
}
