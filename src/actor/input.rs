//! Input Actor: Dedicated thread for reading keystrokes.
//!
//! This actor reads one key at a time from a [`KeySource`] and applies the
//! bound [`Command`] to the shared playback state. It re-checks the finished
//! flag after every key, and after every empty poll when a poll timeout is
//! configured.

use super::messages::{Activity, Command, Completion, CompletionGuard, Key};
use crate::error::Result;
use crate::playback::PlaybackState;
use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};
use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Something that yields keystrokes.
pub trait KeySource: Send {
    /// Wait for the next key.
    ///
    /// With `timeout` set, returns `Ok(None)` if no key arrived in time.
    /// With `None`, blocks until a key is available.
    fn next_key(&mut self, timeout: Option<Duration>) -> io::Result<Option<Key>>;
}

/// Scripted keys, mainly for tests and headless playback.
///
/// A disconnected channel reads as end of input.
impl KeySource for Receiver<Key> {
    fn next_key(&mut self, timeout: Option<Duration>) -> io::Result<Option<Key>> {
        let closed = || io::Error::new(io::ErrorKind::UnexpectedEof, "key channel closed");
        match timeout {
            None => self.recv().map(Some).map_err(|_| closed()),
            Some(timeout) => match self.recv_timeout(timeout) {
                Ok(key) => Ok(Some(key)),
                Err(RecvTimeoutError::Timeout) => Ok(None),
                Err(RecvTimeoutError::Disconnected) => Err(closed()),
            },
        }
    }
}

/// Input actor that turns keys into playback commands.
pub struct InputActor {
    /// Handle to the input thread.
    handle: Option<JoinHandle<()>>,
}

impl InputActor {
    /// Spawn the input actor thread.
    ///
    /// # Arguments
    ///
    /// * `keys` - Where keystrokes come from.
    /// * `state` - Shared playback state.
    /// * `step_ms` - Delay change per speed key.
    /// * `poll_timeout` - How long a read may block before the finished flag
    ///   is re-checked (`None` blocks until a key arrives).
    /// * `done_tx` - Receives a [`Completion`] when the loop ends.
    pub fn spawn<K>(
        keys: K,
        state: Arc<PlaybackState>,
        step_ms: u32,
        poll_timeout: Option<Duration>,
        done_tx: Sender<Completion>,
    ) -> io::Result<Self>
    where
        K: KeySource + 'static,
    {
        let handle = thread::Builder::new()
            .name("teleprompter-input".to_string())
            .spawn(move || {
                let guard = CompletionGuard::new(Activity::Input, done_tx);
                let mut keys = keys;
                guard.complete(Self::run_loop(&mut keys, &state, step_ms, poll_timeout));
            })?;

        Ok(Self {
            handle: Some(handle),
        })
    }

    /// Check whether the input thread has exited.
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Wait for the input thread to finish.
    ///
    /// With a blocking key source this waits for the next keystroke.
    pub fn join(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main input loop.
    pub fn run_loop<K>(
        keys: &mut K,
        state: &PlaybackState,
        step_ms: u32,
        poll_timeout: Option<Duration>,
    ) -> Result<()>
    where
        K: KeySource + ?Sized,
    {
        loop {
            match keys.next_key(poll_timeout) {
                Ok(Some(key)) => {
                    if let Some(command) = Command::from_key(key) {
                        command.apply(state, step_ms);
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    log::warn!("input loop stopped: {e}");
                    return Err(e.into());
                }
            }

            if state.is_finished() {
                return Ok(());
            }
        }
    }
}
