//! Lazy decoding of newline-delimited JSON response bodies.
//!
//! Streaming endpoints deliver one JSON object per line. [`NdjsonStream`]
//! frames the raw byte stream into lines and decodes each non-blank line on
//! demand, so the pace of network reads is controlled by the caller polling
//! the stream. Dropping the stream drops the underlying connection, which is
//! how cancellation is expressed: stop polling, drop, done.

use std::marker::PhantomData;
use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::{Bytes, BytesMut};
use futures_util::{Stream, StreamExt, TryStreamExt};
use serde::de::DeserializeOwned;

use crate::{Error, Result};

/// Type alias for the boxed byte stream read off the transport.
pub(crate) type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes>> + Send>>;

/// Strip ASCII whitespace from both ends of a byte slice.
fn trim_bytes(mut bytes: &[u8]) -> &[u8] {
    while let [first, rest @ ..] = bytes {
        if first.is_ascii_whitespace() {
            bytes = rest;
        } else {
            break;
        }
    }
    while let [rest @ .., last] = bytes {
        if last.is_ascii_whitespace() {
            bytes = rest;
        } else {
            break;
        }
    }
    bytes
}

/// A stream of lines framed out of a byte stream.
///
/// Each item is one line without its terminating newline (a trailing `\r` is
/// also removed). Blank lines are yielded as empty items so that callers that
/// care about blank-line boundaries (PGN splitting) can see them. A trailing
/// unterminated line at end of stream is yielded if non-empty.
///
/// The inner byte stream is released exactly once, on the first of
/// exhaustion, transport error, or drop.
pub(crate) struct LineStream {
    bytes: Option<ByteStream>,
    buffer: BytesMut,
}

impl LineStream {
    pub(crate) fn new(bytes: ByteStream) -> Self {
        Self {
            bytes: Some(bytes),
            buffer: BytesMut::new(),
        }
    }

    /// Wrap a response body without buffering it.
    pub(crate) fn from_response(response: reqwest::Response) -> Self {
        Self::new(Box::pin(response.bytes_stream().map_err(Error::Http)))
    }

    /// Pop the next complete line out of the buffer, if one is present.
    fn next_buffered_line(&mut self) -> Option<Bytes> {
        let pos = self.buffer.iter().position(|&b| b == b'\n')?;
        let mut line = self.buffer.split_to(pos + 1);
        line.truncate(pos);
        if line.last() == Some(&b'\r') {
            line.truncate(line.len() - 1);
        }
        Some(line.freeze())
    }
}

impl Stream for LineStream {
    type Item = Result<Bytes>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;

        loop {
            if let Some(line) = this.next_buffered_line() {
                return Poll::Ready(Some(Ok(line)));
            }

            let Some(bytes) = this.bytes.as_mut() else {
                return Poll::Ready(None);
            };

            match bytes.as_mut().poll_next(cx) {
                Poll::Ready(Some(Ok(chunk))) => {
                    this.buffer.extend_from_slice(&chunk);
                }
                Poll::Ready(Some(Err(e))) => {
                    this.bytes = None;
                    return Poll::Ready(Some(Err(e)));
                }
                Poll::Ready(None) => {
                    this.bytes = None;
                    // Flush a trailing unterminated line, if any
                    if this.buffer.is_empty() {
                        return Poll::Ready(None);
                    }
                    let line = std::mem::take(&mut this.buffer).freeze();
                    return Poll::Ready(Some(Ok(line)));
                }
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}

/// A lazy stream of values decoded from an NDJSON response body.
///
/// Each non-blank line is decoded as one `T`; blank lines contribute no item.
/// A malformed line surfaces as [`Error::Json`] at the point of iteration and
/// ends the stream; items already yielded are unaffected.
///
/// # Example
///
/// ```no_run
/// use futures_util::StreamExt;
///
/// # async fn example(client: lichess_rs::LichessClient) -> lichess_rs::Result<()> {
/// let mut games = client.games().export_by_player("thibault", Default::default()).await?;
/// while let Some(game) = games.next().await {
///     println!("{}", game?.id);
/// }
/// # Ok(())
/// # }
/// ```
pub struct NdjsonStream<T> {
    lines: Option<LineStream>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> NdjsonStream<T> {
    pub(crate) fn new(lines: LineStream) -> Self {
        Self {
            lines: Some(lines),
            _marker: PhantomData,
        }
    }

    pub(crate) fn from_response(response: reqwest::Response) -> Self {
        Self::new(LineStream::from_response(response))
    }
}

impl<T: DeserializeOwned> Stream for NdjsonStream<T> {
    type Item = Result<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;

        loop {
            let Some(lines) = this.lines.as_mut() else {
                return Poll::Ready(None);
            };

            match lines.poll_next_unpin(cx) {
                Poll::Ready(Some(Ok(line))) => {
                    let trimmed = trim_bytes(&line);
                    if trimmed.is_empty() {
                        continue;
                    }
                    match serde_json::from_slice(trimmed) {
                        Ok(value) => return Poll::Ready(Some(Ok(value))),
                        Err(e) => {
                            this.lines = None;
                            return Poll::Ready(Some(Err(Error::Json(e))));
                        }
                    }
                }
                Poll::Ready(Some(Err(e))) => {
                    this.lines = None;
                    return Poll::Ready(Some(Err(e)));
                }
                Poll::Ready(None) => {
                    this.lines = None;
                    return Poll::Ready(None);
                }
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}

impl<T> std::fmt::Debug for NdjsonStream<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NdjsonStream")
            .field("exhausted", &self.lines.is_none())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::stream;
    use serde_json::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn byte_stream(chunks: Vec<&'static [u8]>) -> ByteStream {
        Box::pin(stream::iter(
            chunks.into_iter().map(|c| Ok::<_, Error>(Bytes::from_static(c))),
        ))
    }

    fn ndjson(chunks: Vec<&'static [u8]>) -> NdjsonStream<Value> {
        NdjsonStream::new(LineStream::new(byte_stream(chunks)))
    }

    async fn collect(mut s: NdjsonStream<Value>) -> Vec<Result<Value>> {
        let mut out = Vec::new();
        while let Some(item) = s.next().await {
            out.push(item);
        }
        out
    }

    #[tokio::test]
    async fn test_one_item_per_non_blank_line() {
        let items = collect(ndjson(vec![b"{\"a\":1}\n\n{\"a\":2}\n   \n{\"a\":3}\n"])).await;
        let values: Vec<i64> = items
            .into_iter()
            .map(|r| r.unwrap()["a"].as_i64().unwrap())
            .collect();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_lines_split_across_chunks() {
        let items = collect(ndjson(vec![b"{\"a\"", b":1}\n{\"a\":", b"2}\n"])).await;
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|r| r.is_ok()));
    }

    #[tokio::test]
    async fn test_trailing_unterminated_line_is_decoded() {
        let items = collect(ndjson(vec![b"{\"a\":1}\n{\"a\":2}"])).await;
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].as_ref().unwrap()["a"], 2);
    }

    #[tokio::test]
    async fn test_trailing_whitespace_is_discarded() {
        let items = collect(ndjson(vec![b"{\"a\":1}\n  "])).await;
        assert_eq!(items.len(), 1);
    }

    #[tokio::test]
    async fn test_crlf_lines() {
        let items = collect(ndjson(vec![b"{\"a\":1}\r\n{\"a\":2}\r\n"])).await;
        assert_eq!(items.len(), 2);
    }

    #[tokio::test]
    async fn test_empty_body_yields_nothing() {
        let items = collect(ndjson(vec![])).await;
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_bad_line_ends_stream_after_error() {
        let mut s = ndjson(vec![b"{\"a\":1}\nnot json\n{\"a\":3}\n"]);
        assert!(s.next().await.unwrap().is_ok());
        assert!(matches!(s.next().await, Some(Err(Error::Json(_)))));
        assert!(s.next().await.is_none());
    }

    #[tokio::test]
    async fn test_stopping_early_reads_no_further_chunks() {
        let reads = Arc::new(AtomicUsize::new(0));
        let counter = reads.clone();
        let chunks: Vec<&'static [u8]> = vec![b"{\"a\":1}\n", b"{\"a\":2}\n", b"{\"a\":3}\n"];
        let counting = stream::iter(chunks.into_iter().map(|c| Ok::<_, Error>(Bytes::from_static(c))))
            .inspect(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            });

        let mut s: NdjsonStream<Value> =
            NdjsonStream::new(LineStream::new(Box::pin(counting)));
        let first = s.next().await.unwrap().unwrap();
        assert_eq!(first["a"], 1);

        // One chunk produced the first item; stopping here must not pull more
        assert_eq!(reads.load(Ordering::SeqCst), 1);
        drop(s);
        assert_eq!(reads.load(Ordering::SeqCst), 1);
    }
}
