//! Display Actor: Dedicated thread that writes tokens at the current pace.
//!
//! The actor owns the token iterator (and through it the open file), so the
//! file is closed whenever the thread ends, however it ends.

use super::messages::{Activity, Completion, CompletionGuard};
use crate::error::Result;
use crate::playback::PlaybackState;
use crate::text::Token;
use crossbeam_channel::Sender;
use std::io::{self, Write};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Display actor that streams tokens to a writer.
pub struct DisplayActor {
    /// Handle to the display thread.
    handle: Option<JoinHandle<()>>,
}

impl DisplayActor {
    /// Spawn the display actor thread.
    ///
    /// # Arguments
    ///
    /// * `tokens` - Token stream to play back.
    /// * `out` - Where tokens are written.
    /// * `line_break` - Text written for each break token.
    /// * `state` - Shared playback state.
    /// * `done_tx` - Receives a [`Completion`] when the loop ends.
    pub fn spawn<I, W>(
        tokens: I,
        out: W,
        line_break: &'static str,
        state: Arc<PlaybackState>,
        done_tx: Sender<Completion>,
    ) -> io::Result<Self>
    where
        I: Iterator<Item = io::Result<Token>> + Send + 'static,
        W: Write + Send + 'static,
    {
        let handle = thread::Builder::new()
            .name("teleprompter-display".to_string())
            .spawn(move || {
                let guard = CompletionGuard::new(Activity::Display, done_tx);
                let mut out = out;
                guard.complete(Self::run_loop(tokens, &mut out, line_break, &state));
            })?;

        Ok(Self {
            handle: Some(handle),
        })
    }

    /// Check whether the display thread has exited.
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Wait for the display thread to finish.
    pub fn join(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main display loop.
    ///
    /// Writes each token, pausing for the current delay after every
    /// non-blank one. Stops early once the session is finished. Marks the
    /// session finished when the tokens run out or a read or write fails.
    pub fn run_loop<I, W>(
        tokens: I,
        out: &mut W,
        line_break: &str,
        state: &PlaybackState,
    ) -> Result<()>
    where
        I: IntoIterator<Item = io::Result<Token>>,
        W: Write + ?Sized,
    {
        let result = Self::play(tokens, out, line_break, state);
        if let Err(e) = &result {
            log::warn!("display loop stopped: {e}");
        }
        if state.set_finished() {
            log::debug!("display loop finished the session");
        }
        result
    }

    fn play<I, W>(tokens: I, out: &mut W, line_break: &str, state: &PlaybackState) -> Result<()>
    where
        I: IntoIterator<Item = io::Result<Token>>,
        W: Write + ?Sized,
    {
        let mut words = 0usize;
        for token in tokens {
            if state.is_finished() {
                log::debug!("display loop stopping after {words} words");
                return Ok(());
            }

            let token = token?;
            match &token {
                Token::Word(word) => out.write_all(word.as_bytes())?,
                Token::Break => out.write_all(line_break.as_bytes())?,
            }
            out.flush()?;

            if !token.is_blank() {
                words += 1;
                thread::sleep(state.current_delay());
            }
        }
        log::debug!("token stream exhausted after {words} words");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DelayBounds;
    use crossbeam_channel::unbounded;
    use std::time::{Duration, Instant};

    fn fast_state() -> PlaybackState {
        PlaybackState::new(0, DelayBounds::new(0, 1000))
    }

    fn tokens(items: Vec<Token>) -> impl Iterator<Item = io::Result<Token>> {
        items.into_iter().map(Ok)
    }

    #[test]
    fn test_writes_tokens_in_order() {
        let state = fast_state();
        let mut out = Vec::new();
        let items = vec![
            Token::word("one"),
            Token::word("two"),
            Token::Break,
            Token::word("three"),
            Token::Break,
        ];

        DisplayActor::run_loop(tokens(items), &mut out, "\n", &state).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "one two \nthree \n");
        assert!(state.is_finished());
    }

    #[test]
    fn test_line_break_translation() {
        let state = fast_state();
        let mut out = Vec::new();
        let items = vec![Token::word("a"), Token::Break, Token::Break];

        DisplayActor::run_loop(tokens(items), &mut out, "\r\n", &state).unwrap();

        assert_eq!(out, b"a \r\n\r\n");
    }

    #[test]
    fn test_empty_stream_finishes() {
        let state = fast_state();
        let mut out = Vec::new();
        DisplayActor::run_loop(tokens(Vec::new()), &mut out, "\n", &state).unwrap();
        assert!(out.is_empty());
        assert!(state.is_finished());
    }

    #[test]
    fn test_stops_once_finished() {
        let state = fast_state();
        state.set_finished();
        let mut out = Vec::new();

        DisplayActor::run_loop(tokens(vec![Token::word("late")]), &mut out, "\n", &state)
            .unwrap();

        assert!(out.is_empty());
    }

    #[test]
    fn test_pauses_only_after_words() {
        let state = PlaybackState::new(30, DelayBounds::DEFAULT);
        let mut out = Vec::new();
        let items = vec![Token::word("a"), Token::Break, Token::Break, Token::word("b")];

        let start = Instant::now();
        DisplayActor::run_loop(tokens(items), &mut out, "\n", &state).unwrap();
        let elapsed = start.elapsed();

        assert!(elapsed >= Duration::from_millis(60));
        assert!(elapsed < Duration::from_millis(1000));
    }

    #[test]
    fn test_read_error_finishes_session() {
        let state = fast_state();
        let mut out = Vec::new();
        let items: Vec<io::Result<Token>> = vec![
            Ok(Token::word("ok")),
            Err(io::Error::new(io::ErrorKind::InvalidData, "not utf-8")),
        ];

        let result = DisplayActor::run_loop(items, &mut out, "\n", &state);

        assert!(result.is_err());
        assert_eq!(out, b"ok ");
        assert!(state.is_finished());
    }

    #[test]
    fn test_spawned_actor_reports_completion() {
        let state = Arc::new(fast_state());
        let (done_tx, done_rx) = unbounded();
        let items = vec![Token::word("hi"), Token::Break];

        let actor =
            DisplayActor::spawn(tokens(items), io::sink(), "\n", state.clone(), done_tx).unwrap();

        let completion = done_rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(completion.activity, Activity::Display);
        assert!(completion.result.is_ok());
        assert!(state.is_finished());
        actor.join();
    }
}
