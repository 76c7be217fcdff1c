//! API service modules for Lichess endpoints.
//!
//! Each service is a thin namespace over the shared request layer: it builds
//! a path, query, and body, declares the decode variant by choosing the
//! matching request helper, and returns typed values.

mod account;
mod board;
mod challenges;
mod games;
mod puzzles;
mod teams;
mod tournaments;
mod tv;
mod users;

pub use account::AccountService;
pub use board::{BoardService, SeekRequest};
pub use challenges::{ChallengeRequest, ChallengesService};
pub use games::{ExportOptions, ExportByPlayerQuery, GamesService};
pub use puzzles::PuzzlesService;
pub use teams::TeamsService;
pub use tournaments::{ArenaRequest, TournamentsService};
pub use tv::{TvChannelQuery, TvService};
pub use users::UsersService;

/// Empty query parameter list.
pub(crate) const NO_QUERY: &[(&str, &str)] = &[];

/// Join list-valued parameters the way the API expects them.
pub(crate) fn comma_join(items: &[&str]) -> String {
    items.join(",")
}
