//! Incremental delivery of chunked response bodies.
//!
//! Audio streams hand every received chunk to the caller as-is. Timestamp streams
//! are newline-delimited JSON: bytes are buffered until a `\n` arrives, and each
//! complete line is decoded into one JSON object.

use crate::{Error, Result};
use bytes::Bytes;
use futures::{Stream, StreamExt};
use serde_json::Value;

/// How a chunked body is cut into [`StreamChunk`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamMode {
    /// Raw bytes, one callback per received chunk.
    Bytes,
    /// Newline-delimited JSON, one callback per complete line.
    JsonLines,
}

/// One unit handed to the streaming callback.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamChunk {
    Audio(Bytes),
    Json(Value),
}

/// Response metadata reported after a stream has been fully consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamSummary {
    pub status: u16,
    pub content_type: Option<String>,
    /// Number of callback invocations.
    pub chunks: usize,
    /// Raw bytes received from the connection.
    pub bytes: u64,
}

/// Byte buffer that yields complete JSON lines.
///
/// Works on bytes rather than text so a UTF-8 sequence split across two chunks is
/// decoded only once both halves have arrived.
#[derive(Debug, Default)]
pub struct JsonLineBuffer {
    buf: Vec<u8>,
    // Prefix of `buf` already known to contain no newline.
    scanned: usize,
}

impl JsonLineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `chunk` without decoding anything.
    pub fn extend(&mut self, chunk: &[u8]) {
        self.buf.extend_from_slice(chunk);
    }

    /// Decodes the next complete line, skipping blank ones.
    ///
    /// Lines after a malformed one stay buffered.
    pub fn next_value(&mut self) -> Result<Option<Value>> {
        while let Some(offset) = self.buf[self.scanned..].iter().position(|b| *b == b'\n') {
            let idx = self.scanned + offset;
            let line: Vec<u8> = self.buf.drain(..=idx).collect();
            self.scanned = 0;
            if let Some(v) = decode_line(&line[..idx])? {
                return Ok(Some(v));
            }
        }
        self.scanned = self.buf.len();
        Ok(None)
    }

    /// Appends `chunk` and decodes every line it completes.
    pub fn push(&mut self, chunk: &[u8]) -> Result<Vec<Value>> {
        self.extend(chunk);
        let mut out = Vec::new();
        while let Some(v) = self.next_value()? {
            out.push(v);
        }
        Ok(out)
    }

    /// Decodes an unterminated trailing line left at end of stream, if any.
    pub fn finish(&mut self) -> Result<Option<Value>> {
        let rest = std::mem::take(&mut self.buf);
        self.scanned = 0;
        decode_line(&rest)
    }

    /// Bytes held for a line that has not been terminated yet.
    pub fn pending(&self) -> usize {
        self.buf.len()
    }
}

fn decode_line(line: &[u8]) -> Result<Option<Value>> {
    let line = trim_ascii(line);
    if line.is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_slice(line)?))
}

fn trim_ascii(mut bytes: &[u8]) -> &[u8] {
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

/// Drains `input`, invoking `on_chunk` sequentially and in arrival order.
///
/// Returns `(callback invocations, bytes received)`. A callback error stops the
/// stream and is returned unchanged.
pub async fn deliver<S, F>(mut input: S, mode: StreamMode, on_chunk: &mut F) -> Result<(usize, u64)>
where
    S: Stream<Item = Result<Bytes>> + Unpin,
    F: FnMut(StreamChunk) -> Result<()>,
{
    let mut chunks = 0usize;
    let mut received = 0u64;
    let mut lines = JsonLineBuffer::new();

    while let Some(item) = input.next().await {
        let bytes = item?;
        received += bytes.len() as u64;
        match mode {
            StreamMode::Bytes => {
                if bytes.is_empty() {
                    continue;
                }
                on_chunk(StreamChunk::Audio(bytes))?;
                chunks += 1;
            }
            StreamMode::JsonLines => {
                lines.extend(&bytes);
                while let Some(value) = lines.next_value()? {
                    on_chunk(StreamChunk::Json(value))?;
                    chunks += 1;
                }
            }
        }
    }

    if mode == StreamMode::JsonLines {
        if let Some(value) = lines.finish()? {
            on_chunk(StreamChunk::Json(value))?;
            chunks += 1;
        }
    }

    Ok((chunks, received))
}
