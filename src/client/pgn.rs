//! Decoding of PGN (Portable Game Notation) response bodies.
//!
//! Single-game exports are returned as plain text. Bulk exports concatenate
//! games, separated by the blank line that follows each game's movetext
//! before the next tag-pair section. [`PgnStream`] splits a streaming body on
//! those boundaries, yielding one `String` per game, lazily.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_util::{Stream, StreamExt};

use crate::Result;

use super::ndjson::LineStream;

/// Split buffered multi-game PGN text into one string per game.
///
/// Games are separated by a blank line following a blank line (movetext, then
/// the empty line ending the game, then the empty line before the next tag
/// section). Runs of extra blank lines contribute no empty games.
pub fn split_games(text: &str) -> Vec<String> {
    let mut games = Vec::new();
    let mut lines: Vec<&str> = Vec::new();
    let mut last_blank = false;

    for line in text.lines() {
        let blank = line.trim().is_empty();
        if last_blank && blank {
            let game = lines.join("\n").trim().to_string();
            if !game.is_empty() {
                games.push(game);
            }
            lines.clear();
        } else {
            lines.push(line);
        }
        last_blank = blank;
    }

    let game = lines.join("\n").trim().to_string();
    if !game.is_empty() {
        games.push(game);
    }
    games
}

/// A lazy stream of PGN games decoded from a streaming response body.
///
/// Dropping the stream drops the underlying connection; no further reads are
/// attempted once the caller stops polling.
pub struct PgnStream {
    lines: Option<LineStream>,
    game_lines: Vec<String>,
    last_blank: bool,
}

impl PgnStream {
    pub(crate) fn new(lines: LineStream) -> Self {
        Self {
            lines: Some(lines),
            game_lines: Vec::new(),
            last_blank: false,
        }
    }

    pub(crate) fn from_response(response: reqwest::Response) -> Self {
        Self::new(LineStream::from_response(response))
    }

    /// Join and trim the accumulated lines, clearing the buffer.
    fn take_game(&mut self) -> Option<String> {
        let game = std::mem::take(&mut self.game_lines).join("\n");
        let game = game.trim();
        if game.is_empty() {
            None
        } else {
            Some(game.to_string())
        }
    }
}

impl Stream for PgnStream {
    type Item = Result<String>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;

        loop {
            let Some(lines) = this.lines.as_mut() else {
                return Poll::Ready(None);
            };

            match lines.poll_next_unpin(cx) {
                Poll::Ready(Some(Ok(line))) => {
                    let line = String::from_utf8_lossy(&line).into_owned();
                    let blank = line.trim().is_empty();
                    let boundary = this.last_blank && blank;
                    this.last_blank = blank;

                    if boundary {
                        if let Some(game) = this.take_game() {
                            return Poll::Ready(Some(Ok(game)));
                        }
                    } else {
                        this.game_lines.push(line);
                    }
                }
                Poll::Ready(Some(Err(e))) => {
                    this.lines = None;
                    return Poll::Ready(Some(Err(e)));
                }
                Poll::Ready(None) => {
                    this.lines = None;
                    if let Some(game) = this.take_game() {
                        return Poll::Ready(Some(Ok(game)));
                    }
                    return Poll::Ready(None);
                }
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}

impl std::fmt::Debug for PgnStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgnStream")
            .field("exhausted", &self.lines.is_none())
            .field("buffered_lines", &self.game_lines.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use futures_util::stream;

    const TWO_GAMES: &str = "[Event \"Casual Blitz game\"]\n[White \"alice\"]\n[Black \"bob\"]\n\n1. e4 e5 2. Nf3 Nc6 1-0\n\n\n[Event \"Rated Bullet game\"]\n[White \"carol\"]\n[Black \"dave\"]\n\n1. d4 d5 2. c4 dxc4 0-1\n";

    #[test]
    fn test_split_two_games() {
        let games = split_games(TWO_GAMES);
        assert_eq!(games.len(), 2);
        assert!(games[0].starts_with("[Event \"Casual Blitz game\"]"));
        assert!(games[0].ends_with("1-0"));
        assert!(games[1].starts_with("[Event \"Rated Bullet game\"]"));
        assert!(games[1].ends_with("0-1"));
    }

    #[test]
    fn test_split_single_game_without_trailing_newline() {
        let games = split_games("[Event \"x\"]\n\n1. e4 e5 1/2-1/2");
        assert_eq!(games.len(), 1);
        assert_eq!(games[0], "[Event \"x\"]\n\n1. e4 e5 1/2-1/2");
    }

    #[test]
    fn test_split_ignores_extra_blank_runs() {
        let games = split_games("[Event \"x\"]\n\n1. e4 1-0\n\n\n\n\n[Event \"y\"]\n\n1. d4 0-1\n");
        assert_eq!(games.len(), 2);
    }

    #[test]
    fn test_split_empty_text() {
        assert!(split_games("").is_empty());
        assert!(split_games("\n\n\n").is_empty());
    }

    #[tokio::test]
    async fn test_stream_splits_across_chunk_boundaries() {
        // Chunk split falls mid-line and mid-boundary
        let text = TWO_GAMES.as_bytes();
        let (a, b) = text.split_at(text.len() / 2);
        let chunks = vec![Bytes::copy_from_slice(a), Bytes::copy_from_slice(b)];
        let byte_stream = Box::pin(stream::iter(
            chunks.into_iter().map(Ok::<_, crate::Error>),
        ));

        let mut s = PgnStream::new(LineStream::new(byte_stream));
        let mut games = Vec::new();
        while let Some(game) = s.next().await {
            games.push(game.unwrap());
        }
        assert_eq!(games, split_games(TWO_GAMES));
    }
}
