//! Incremental display of a streamed chat answer.
//!
//! [`StreamConsumer`] pulls fragments from a provider stream one at a time and
//! writes their text to a sink as soon as each one arrives:
//!
//! * non-empty fragments are written and flushed immediately, without any
//!   separator,
//! * empty fragments produce no write,
//! * once the stream is exhausted a single `"\n"` is written,
//! * a stream error is returned unchanged after the already-written output
//!   has been flushed; no line break is appended in that case.
//!
//! ```rust
//! use aimo_core::consumer::StreamConsumer;
//! use aimo_core::error::AimoError;
//! use futures_util::stream;
//!
//! # futures_util::FutureExt::now_or_never(async {
//! let fragments = stream::iter(["Hello, ", "world", "!"].map(Ok::<_, AimoError>));
//! let mut out = Vec::new();
//! StreamConsumer::new(&mut out).consume(fragments).await.unwrap();
//! assert_eq!(out, b"Hello, world!\n");
//! # }).unwrap();
//! ```
use std::io::{self, Write};

use futures_core::Stream;
use futures_util::StreamExt;

/// Writes streamed text fragments to an output sink in arrival order.
#[derive(Debug)]
pub struct StreamConsumer<W> {
    sink: W,
}

impl StreamConsumer<io::Stdout> {
    /// Consumer writing to the process' standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> StreamConsumer<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Give back the sink, e.g. to inspect what was written.
    pub fn into_inner(self) -> W {
        self.sink
    }

    /// Drive `stream` to completion, writing every fragment as it arrives.
    ///
    /// # Errors
    ///
    /// * Any error yielded by `stream`, returned as-is.
    /// * Sink write failures, converted through `E: From<io::Error>`.
    pub async fn consume<S, F, E>(&mut self, stream: S) -> Result<(), E>
    where
        S: Stream<Item = Result<F, E>>,
        F: AsRef<str>,
        E: From<io::Error>,
    {
        futures_util::pin_mut!(stream);

        while let Some(fragment) = stream.next().await {
            let fragment = match fragment {
                Ok(fragment) => fragment,
                Err(err) => {
                    // The stream error wins over a failing flush.
                    let _ = self.sink.flush();
                    return Err(err);
                }
            };

            let text = fragment.as_ref();
            if text.is_empty() {
                continue;
            }

            self.sink.write_all(text.as_bytes())?;
            self.sink.flush()?;
        }

        self.sink.write_all(b"\n")?;
        self.sink.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::stream;

    #[derive(Debug, PartialEq)]
    enum TestError {
        Transport(&'static str),
        Io(io::ErrorKind),
    }

    impl From<io::Error> for TestError {
        fn from(value: io::Error) -> Self {
            TestError::Io(value.kind())
        }
    }

    async fn consume_all(fragments: &[&'static str]) -> String {
        let stream = stream::iter(fragments.iter().copied().map(Ok::<_, TestError>));
        let mut consumer = StreamConsumer::new(Vec::new());
        consumer.consume(stream).await.unwrap();
        String::from_utf8(consumer.into_inner()).unwrap()
    }

    /// Sink recording every individual write and flush.
    #[derive(Default)]
    struct RecordingSink {
        writes: Vec<String>,
        flushes: usize,
    }

    impl Write for RecordingSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.writes.push(String::from_utf8_lossy(buf).into_owned());
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn writes_fragments_in_order_then_newline() {
        assert_eq!(consume_all(&["Hello, ", "world", "!"]).await, "Hello, world!\n");
    }

    #[tokio::test]
    async fn empty_stream_writes_single_newline() {
        assert_eq!(consume_all(&[]).await, "\n");
    }

    #[tokio::test]
    async fn empty_fragments_are_skipped() {
        assert_eq!(consume_all(&["A", "", "B"]).await, "AB\n");
    }

    #[tokio::test]
    async fn output_is_concatenation_of_fragments() {
        let fragments = ["The ", "quick", " ", "brown ", "", "fox", "\n", "jumps", ""];
        let expected = format!("{}\n", fragments.concat());
        assert_eq!(consume_all(&fragments).await, expected);
    }

    #[tokio::test]
    async fn each_fragment_is_written_and_flushed_on_arrival() {
        let stream = stream::iter(["A", "", "B"].map(Ok::<_, TestError>));
        let mut consumer = StreamConsumer::new(RecordingSink::default());
        consumer.consume(stream).await.unwrap();

        let sink = consumer.into_inner();
        assert_eq!(sink.writes, vec!["A", "B", "\n"]);
        assert_eq!(sink.flushes, 3);
    }

    #[tokio::test]
    async fn stream_error_keeps_partial_output_and_is_returned_unchanged() {
        let items = vec![Ok("partial"), Err(TestError::Transport("connection reset"))];
        let mut consumer = StreamConsumer::new(Vec::new());

        let err = consumer.consume(stream::iter(items)).await.unwrap_err();

        assert_eq!(err, TestError::Transport("connection reset"));
        assert_eq!(consumer.into_inner(), b"partial");
    }

    #[tokio::test]
    async fn fragments_after_an_error_are_not_read() {
        let items = vec![
            Ok("a"),
            Err(TestError::Transport("boom")),
            Ok("never"),
        ];
        let mut consumer = StreamConsumer::new(Vec::new());

        assert!(consumer.consume(stream::iter(items)).await.is_err());
        assert_eq!(consumer.into_inner(), b"a");
    }

    #[tokio::test]
    async fn sink_failure_is_converted_into_caller_error() {
        let stream = stream::iter(["x"].map(Ok::<_, TestError>));
        let err = StreamConsumer::new(BrokenSink)
            .consume(stream)
            .await
            .unwrap_err();

        assert_eq!(err, TestError::Io(io::ErrorKind::BrokenPipe));
    }

    #[tokio::test]
    async fn accepts_response_fragments() {
        use crate::error::AimoError;
        use crate::generic::ResponseFragment;

        let fragments = vec![
            Ok::<_, AimoError>(ResponseFragment::new("Hi")),
            Ok(ResponseFragment::default()),
            Ok(ResponseFragment::new(" there")),
        ];
        let mut out = Vec::new();
        StreamConsumer::new(&mut out)
            .consume(stream::iter(fragments))
            .await
            .unwrap();

        assert_eq!(out, b"Hi there\n");
    }
}
