//! Thread-backed line source.
//!
//! Blocking reads (stdin in particular) cannot be interrupted, so they run
//! on a dedicated OS thread that reads exactly one line per request. Each
//! request carries its own reply channel. When the engine stops waiting for
//! a line, it drops the receiving end; the thread's eventual reply then has
//! nowhere to go and is discarded, so a late answer can never reach a later
//! request.
//!
//! The thread is detached rather than run via `spawn_blocking`: a read that
//! never completes must not keep the runtime from shutting down.

use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;

use async_trait::async_trait;
use tokio::sync::oneshot;

use quizrace_core::traits::AnswerSource;

use crate::error::InputError;

type Reply = oneshot::Sender<io::Result<Option<String>>>;

/// Reads lines on demand from a blocking reader.
pub struct LineSource {
    requests: mpsc::Sender<Reply>,
}

impl LineSource {
    /// A line source over the process's standard input.
    pub fn stdin() -> Result<Self, InputError> {
        Self::spawn("quizrace-stdin", || io::stdin().lock())
    }

    /// A line source over any buffered reader.
    pub fn from_reader<R>(reader: R) -> Result<Self, InputError>
    where
        R: BufRead + Send + 'static,
    {
        Self::spawn("quizrace-reader", move || reader)
    }

    fn spawn<R, F>(name: &str, open: F) -> Result<Self, InputError>
    where
        R: BufRead + 'static,
        F: FnOnce() -> R + Send + 'static,
    {
        let (requests, incoming) = mpsc::channel::<Reply>();
        thread::Builder::new()
            .name(name.to_string())
            .spawn(move || serve(open(), incoming))?;
        Ok(Self { requests })
    }
}

/// Answer one read request at a time until the source is dropped.
fn serve<R: BufRead>(mut reader: R, incoming: mpsc::Receiver<Reply>) {
    while let Ok(reply) = incoming.recv() {
        let line = read_one(&mut reader);
        if let Err(unclaimed) = reply.send(line) {
            tracing::debug!(?unclaimed, "discarding line read for an abandoned request");
        }
    }
    tracing::debug!("line source dropped, reader thread exiting");
}

/// Bytes that are not UTF-8 still make a line; the answer is judged as typed.
fn read_one<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut bytes = Vec::new();
    if reader.read_until(b'\n', &mut bytes)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&bytes);
    Ok(Some(line.trim_end_matches(&['\n', '\r'][..]).to_string()))
}

#[async_trait]
impl AnswerSource for LineSource {
    async fn next_line(&mut self) -> anyhow::Result<Option<String>> {
        let (reply, response) = oneshot::channel();
        self.requests
            .send(reply)
            .map_err(|_| InputError::ReaderStopped)?;
        let line = response.await.map_err(|_| InputError::ReaderStopped)?;
        Ok(line.map_err(InputError::Read)?)
    }
}

#[cfg(test)]
mod tests {
    use std::io::{BufReader, Cursor, Read};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use quizrace_core::{
        AbortReason, NoopReporter, Question, QuizEngine, QuizEngineConfig, SessionResult,
    };

    use super::*;

    /// A reader that blocks until the test feeds it bytes.
    struct FedReader {
        chunks: mpsc::Receiver<Vec<u8>>,
        pending: Vec<u8>,
        reads: Arc<AtomicUsize>,
    }

    impl Read for FedReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            if self.pending.is_empty() {
                match self.chunks.recv() {
                    Ok(chunk) => self.pending = chunk,
                    Err(_) => return Ok(0),
                }
            }
            let n = buf.len().min(self.pending.len());
            buf[..n].copy_from_slice(&self.pending[..n]);
            self.pending.drain(..n);
            Ok(n)
        }
    }

    fn fed_source() -> (mpsc::Sender<Vec<u8>>, Arc<AtomicUsize>, LineSource) {
        let (feed, chunks) = mpsc::channel();
        let reads = Arc::new(AtomicUsize::new(0));
        let reader = FedReader {
            chunks,
            pending: Vec::new(),
            reads: Arc::clone(&reads),
        };
        let source = LineSource::from_reader(BufReader::new(reader)).unwrap();
        (feed, reads, source)
    }

    #[tokio::test]
    async fn reads_lines_then_end_of_input() {
        let mut source = LineSource::from_reader(Cursor::new("4\r\n Paris \n\nlast")).unwrap();
        assert_eq!(source.next_line().await.unwrap().as_deref(), Some("4"));
        assert_eq!(source.next_line().await.unwrap().as_deref(), Some(" Paris "));
        assert_eq!(source.next_line().await.unwrap().as_deref(), Some(""));
        assert_eq!(source.next_line().await.unwrap().as_deref(), Some("last"));
        assert_eq!(source.next_line().await.unwrap(), None);
        assert_eq!(source.next_line().await.unwrap(), None);
    }

    #[tokio::test]
    async fn invalid_utf8_is_an_ordinary_answer() {
        let garbled = Cursor::new(b"\xff\xfe\nParis\n".to_vec());
        let mut source = LineSource::from_reader(garbled).unwrap();

        let engine = QuizEngine::new(QuizEngineConfig::default()).unwrap();
        let result = engine
            .run(
                vec![
                    Question::free_text("2+2?", "4"),
                    Question::free_text("Capital of France?", "Paris"),
                ],
                &mut source,
                &NoopReporter,
            )
            .await;
        assert_eq!(result, SessionResult::completed(1, 2));
    }

    #[tokio::test]
    async fn nothing_is_read_before_it_is_asked_for() {
        let (feed, reads, mut source) = fed_source();
        feed.send(b"early\n".to_vec()).unwrap();

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(reads.load(Ordering::SeqCst), 0);

        // A future that is never polled sends no request either
        drop(source.next_line());
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(reads.load(Ordering::SeqCst), 0);

        assert_eq!(source.next_line().await.unwrap().as_deref(), Some("early"));
    }

    #[tokio::test]
    async fn abandoned_read_is_discarded() {
        let (feed, _reads, mut source) = fed_source();

        let first = tokio::time::timeout(Duration::from_millis(50), source.next_line()).await;
        assert!(first.is_err(), "nothing was fed, the read must still be pending");

        // The abandoned request is still blocked in the reader thread and
        // claims the next line; the fresh request gets the one after.
        feed.send(b"late\n".to_vec()).unwrap();
        feed.send(b"fresh\n".to_vec()).unwrap();

        let line = tokio::time::timeout(Duration::from_secs(5), source.next_line())
            .await
            .expect("fresh line should arrive")
            .unwrap();
        assert_eq!(line.as_deref(), Some("fresh"));
    }

    #[tokio::test]
    async fn late_answer_never_reaches_the_next_session() {
        let (feed, _reads, mut source) = fed_source();
        let engine = QuizEngine::new(QuizEngineConfig {
            time_limit: Duration::from_millis(100),
            ..Default::default()
        })
        .unwrap();

        let first = engine
            .run(vec![Question::free_text("2+2?", "4")], &mut source, &NoopReporter)
            .await;
        assert_eq!(first, SessionResult::aborted(0, 0, AbortReason::Timeout));

        // "4" was meant for the timed-out question
        feed.send(b"4\n".to_vec()).unwrap();
        feed.send(b"Paris\n".to_vec()).unwrap();

        let engine = QuizEngine::new(QuizEngineConfig {
            time_limit: Duration::from_secs(5),
            ..Default::default()
        })
        .unwrap();
        let second = engine
            .run(
                vec![Question::free_text("Capital of France?", "Paris")],
                &mut source,
                &NoopReporter,
            )
            .await;
        assert_eq!(second, SessionResult::completed(1, 1));
    }

    #[tokio::test]
    async fn closed_input_ends_the_quiz() {
        let (feed, _reads, mut source) = fed_source();
        feed.send(b"4\n".to_vec()).unwrap();
        drop(feed);

        let engine = QuizEngine::new(QuizEngineConfig::default()).unwrap();
        let result = engine
            .run(
                vec![
                    Question::free_text("2+2?", "4"),
                    Question::free_text("Capital of France?", "Paris"),
                ],
                &mut source,
                &NoopReporter,
            )
            .await;
        assert_eq!(result, SessionResult::aborted(1, 1, AbortReason::EndOfInput));
    }
}
