//! Message types for actor communication.
//!
//! Keys flow from a key source into the input actor, which turns them into
//! [`Command`]s. Each actor reports a [`Completion`] when its loop ends.

use crate::error::PrompterError;
use crate::playback::PlaybackState;
use crossbeam_channel::Sender;
use std::fmt;

/// A keystroke as seen by the input actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable character.
    Char(char),
    /// Ctrl+C, which raw mode delivers as a key instead of a signal.
    Interrupt,
    /// Any other key.
    Other,
}

/// Playback commands bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Shorten the delay (`>`).
    SpeedUp,
    /// Lengthen the delay (`<`).
    SlowDown,
    /// End the session (`x`, `X`, Ctrl+C).
    Quit,
}

impl Command {
    /// Map a key to its command, if it is bound.
    pub const fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Char('>') => Some(Self::SpeedUp),
            Key::Char('<') => Some(Self::SlowDown),
            Key::Char('x' | 'X') | Key::Interrupt => Some(Self::Quit),
            Key::Char(_) | Key::Other => None,
        }
    }

    /// Apply the command to the shared state.
    pub fn apply(self, state: &PlaybackState, step_ms: u32) {
        let step = i32::try_from(step_ms).unwrap_or(i32::MAX);
        match self {
            Self::SpeedUp => {
                let delay = state.update_delay(-step);
                log::debug!("speed up: delay now {delay}ms");
            }
            Self::SlowDown => {
                let delay = state.update_delay(step);
                log::debug!("slow down: delay now {delay}ms");
            }
            Self::Quit => {
                if state.set_finished() {
                    log::debug!("quit requested from keyboard");
                }
            }
        }
    }
}

/// The two long-running loops of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Activity {
    /// Writes tokens to the terminal.
    Display,
    /// Reads keystrokes and adjusts playback.
    Input,
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Display => f.write_str("display"),
            Self::Input => f.write_str("input"),
        }
    }
}

/// Sent by an actor when its loop has ended.
#[derive(Debug)]
pub struct Completion {
    /// Which loop ended.
    pub activity: Activity,
    /// How it ended.
    pub result: Result<(), PrompterError>,
}

/// Reports a [`Completion`] when dropped.
///
/// The guard lives on the actor thread's stack, so a panicking loop still
/// reports (as [`PrompterError::Panicked`]) while unwinding.
pub(crate) struct CompletionGuard {
    activity: Activity,
    result: Option<Result<(), PrompterError>>,
    done_tx: Sender<Completion>,
}

impl CompletionGuard {
    pub(crate) const fn new(activity: Activity, done_tx: Sender<Completion>) -> Self {
        Self {
            activity,
            result: None,
            done_tx,
        }
    }

    /// Record the loop's result; it is sent when the guard drops.
    pub(crate) fn complete(mut self, result: Result<(), PrompterError>) {
        self.result = Some(result);
    }
}

impl Drop for CompletionGuard {
    fn drop(&mut self) {
        let result = self
            .result
            .take()
            .unwrap_or_else(|| Err(PrompterError::Panicked(self.activity)));
        // The session may have stopped listening already.
        let _ = self.done_tx.send(Completion {
            activity: self.activity,
            result,
        });
    }
}
