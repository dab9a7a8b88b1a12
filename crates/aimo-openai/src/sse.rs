//! Incremental decoder for `text/event-stream` bodies.
//!
//! Bytes arrive in arbitrary network chunks; frames are only parsed once
//! their terminating blank line has been seen, so multi-byte characters and
//! JSON payloads split across chunks are reassembled before decoding.

use std::str::Utf8Error;

/// Payload that marks the end of an OpenAI-style stream.
pub(crate) const DONE_MARKER: &str = "[DONE]";

#[derive(Debug, Default)]
pub(crate) struct SseDecoder {
    buf: Vec<u8>,
    /// Bytes of `buf` already searched for a frame boundary.
    scanned: usize,
}

impl SseDecoder {
    pub(crate) fn push(&mut self, chunk: &[u8]) {
        self.buf.extend_from_slice(chunk);
    }

    /// Data of the next complete frame, skipping frames that carry none
    /// (comments, keep-alives, `event:`-only frames).
    pub(crate) fn next_data(&mut self) -> Result<Option<String>, Utf8Error> {
        while let Some((end, delimiter)) = frame_end(&self.buf, self.scanned) {
            let frame: Vec<u8> = self.buf.drain(..end + delimiter).collect();
            self.scanned = 0;
            if let Some(data) = parse_frame(&frame[..end])? {
                return Ok(Some(data));
            }
        }
        // A delimiter may still complete across the last two bytes.
        self.scanned = self.buf.len().saturating_sub(2);
        Ok(None)
    }

    /// Data of a final frame the server did not terminate with a blank line.
    pub(crate) fn finish(&mut self) -> Result<Option<String>, Utf8Error> {
        let rest = std::mem::take(&mut self.buf);
        self.scanned = 0;
        parse_frame(&rest)
    }
}

/// Position of the first blank line at or after `from`, as
/// `(frame_len, delimiter_len)`.
fn frame_end(buf: &[u8], from: usize) -> Option<(usize, usize)> {
    (from..buf.len()).find_map(|i| {
        if buf[i] != b'\n' {
            return None;
        }
        match &buf[i + 1..] {
            [b'\n', ..] => Some((i, 2)),
            [b'\r', b'\n', ..] => Some((i, 3)),
            _ => None,
        }
    })
}

fn parse_frame(frame: &[u8]) -> Result<Option<String>, Utf8Error> {
    let text = std::str::from_utf8(frame)?;

    let mut data: Option<String> = None;
    for line in text.lines() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.starts_with(':') {
            continue;
        }
        let Some(value) = line.strip_prefix("data:") else {
            continue;
        };
        let value = value.strip_prefix(' ').unwrap_or(value);

        match data.as_mut() {
            Some(existing) => {
                existing.push('\n');
                existing.push_str(value);
            }
            None => data = Some(value.to_owned()),
        }
    }

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(decoder: &mut SseDecoder) -> Vec<String> {
        let mut out = Vec::new();
        while let Some(data) = decoder.next_data().unwrap() {
            out.push(data);
        }
        out
    }

    #[test]
    fn splits_lf_frames() {
        let mut decoder = SseDecoder::default();
        decoder.push(b"data: {\"a\":1}\n\ndata: [DONE]\n\n");

        assert_eq!(drain(&mut decoder), vec!["{\"a\":1}", DONE_MARKER]);
        assert_eq!(decoder.finish().unwrap(), None);
    }

    #[test]
    fn splits_crlf_frames() {
        let mut decoder = SseDecoder::default();
        decoder.push(b"data: one\r\n\r\ndata: two\r\n\r\n");

        assert_eq!(drain(&mut decoder), vec!["one", "two"]);
    }

    #[test]
    fn crlf_frames_keep_no_carriage_return() {
        let mut decoder = SseDecoder::default();
        decoder.push(b"data: one\r\n\r\ndata: {\"a\":1}\r\n\r\n");

        assert_eq!(drain(&mut decoder), vec!["one", "{\"a\":1}"]);
    }

    #[test]
    fn mixed_line_endings_split_frames() {
        let mut decoder = SseDecoder::default();
        decoder.push(b"data: first\r\n\ndata: second\n\r\ndata: [DONE]\r\n\r\n");

        assert_eq!(drain(&mut decoder), vec!["first", "second", DONE_MARKER]);
    }

    #[test]
    fn crlf_delimiter_split_across_chunks() {
        let mut decoder = SseDecoder::default();
        decoder.push(b"data: one\r\n");
        assert!(drain(&mut decoder).is_empty());
        decoder.push(b"\r");
        assert!(drain(&mut decoder).is_empty());
        decoder.push(b"\ndata: two\r\n\r\n");

        assert_eq!(drain(&mut decoder), vec!["one", "two"]);
    }

    #[test]
    fn large_frame_delivered_byte_by_byte() {
        let payload = "x".repeat(4096);
        let body = format!("data: {payload}\r\n\r\ndata: tail\n\n");

        let mut decoder = SseDecoder::default();
        let mut out = Vec::new();
        for byte in body.as_bytes() {
            decoder.push(std::slice::from_ref(byte));
            out.extend(drain(&mut decoder));
        }

        assert_eq!(out, vec![payload, "tail".to_string()]);
        assert_eq!(decoder.finish().unwrap(), None);
    }

    #[test]
    fn reassembles_frames_across_chunks() {
        let mut decoder = SseDecoder::default();
        decoder.push(b"data: {\"content\":\"caf");
        assert!(drain(&mut decoder).is_empty());

        // "é" split between two network chunks.
        decoder.push(&[0xC3]);
        assert!(drain(&mut decoder).is_empty());
        decoder.push(&[0xA9]);
        decoder.push(b"\"}\n");
        assert!(drain(&mut decoder).is_empty());
        decoder.push(b"\n");

        assert_eq!(drain(&mut decoder), vec!["{\"content\":\"café\"}"]);
    }

    #[test]
    fn skips_comments_and_dataless_frames() {
        let mut decoder = SseDecoder::default();
        decoder.push(b": OPENROUTER PROCESSING\n\nevent: ping\n\ndata:tight\n\n");

        assert_eq!(drain(&mut decoder), vec!["tight"]);
    }

    #[test]
    fn joins_multi_line_data() {
        let mut decoder = SseDecoder::default();
        decoder.push(b"id: 7\ndata: first\ndata: second\n\n");

        assert_eq!(drain(&mut decoder), vec!["first\nsecond"]);
    }

    #[test]
    fn flushes_unterminated_final_frame() {
        let mut decoder = SseDecoder::default();
        decoder.push(b"data: tail");

        assert!(drain(&mut decoder).is_empty());
        assert_eq!(decoder.finish().unwrap().as_deref(), Some("tail"));
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let mut decoder = SseDecoder::default();
        decoder.push(b"data: \xFF\n\n");

        assert!(decoder.next_data().is_err());
    }
}
