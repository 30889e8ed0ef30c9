//! Newline-delimited JSON decoding for streamed responses
//!
//! Ollama streams pull progress as one JSON object per line. Chunks from the
//! HTTP body do not respect line boundaries, so bytes are buffered until a
//! newline arrives.

use serde::de::DeserializeOwned;

/// Incremental NDJSON decoder
#[derive(Debug, Default)]
pub struct NdjsonDecoder {
    buf: Vec<u8>,
}

impl NdjsonDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a chunk and return every complete line decoded as `T`
    ///
    /// Blank lines are skipped. A line that fails to decode yields an `Err`
    /// entry so the caller can decide whether to skip it.
    pub fn push<T: DeserializeOwned>(&mut self, chunk: &[u8]) -> Vec<Result<T, serde_json::Error>> {
        self.buf.extend_from_slice(chunk);

        let mut out = Vec::new();
        while let Some(pos) = self.buf.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.buf.drain(..=pos).collect();
            if let Some(item) = decode_line(&line) {
                out.push(item);
            }
        }
        out
    }

    /// Decode whatever remains after the stream ends without a final newline
    pub fn finish<T: DeserializeOwned>(&mut self) -> Option<Result<T, serde_json::Error>> {
        let rest = std::mem::take(&mut self.buf);
        decode_line(&rest)
    }
}

fn decode_line<T: DeserializeOwned>(line: &[u8]) -> Option<Result<T, serde_json::Error>> {
    let trimmed = line.trim_ascii();
    if trimmed.is_empty() {
        None
    } else {
        Some(serde_json::from_slice(trimmed))
    }
}
