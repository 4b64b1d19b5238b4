//! Session: Main coordinator that ties the actors together.
//!
//! A session spawns the display and input actors around one shared
//! [`PlaybackState`] and returns as soon as either of them reports
//! completion. The other actor is left running, detached; the process is
//! expected to exit shortly afterwards.

use super::messages::{Activity, Completion};
use super::{DisplayActor, InputActor, KeySource};
use crate::config::PrompterConfig;
use crate::error::{PrompterError, Result};
use crate::playback::PlaybackState;
use crate::text::Token;
use crossbeam_channel::bounded;
use std::io::{self, Write};
use std::sync::Arc;

/// Summary of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionReport {
    /// The loop whose completion ended the session.
    pub ended_by: Activity,
    /// Delay in effect when the session ended.
    pub final_delay_ms: u32,
}

/// One teleprompter run.
pub struct Session {
    /// Configuration.
    config: PrompterConfig,
    /// State shared by both actors.
    state: Arc<PlaybackState>,
}

impl Session {
    /// Create a session with default configuration.
    pub fn new() -> Self {
        Self {
            state: Arc::new(PlaybackState::default()),
            config: PrompterConfig::default(),
        }
    }

    /// Create a session with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PrompterError::InvalidConfig`] if the configuration is
    /// inconsistent.
    pub fn with_config(config: PrompterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            state: Arc::new(PlaybackState::from_config(&config)),
            config,
        })
    }

    /// Get the configuration.
    pub const fn config(&self) -> &PrompterConfig {
        &self.config
    }

    /// Get a handle to the shared playback state.
    pub const fn state(&self) -> &Arc<PlaybackState> {
        &self.state
    }

    /// Play `tokens` to `out` while reading commands from `keys`.
    ///
    /// Blocks until the first of the two loops completes, then returns
    /// without waiting for the other.
    ///
    /// # Errors
    ///
    /// Returns an error if a thread cannot be spawned, or if the loop that
    /// ended the session failed.
    pub fn run<I, W, K>(self, tokens: I, out: W, keys: K) -> Result<SessionReport>
    where
        I: Iterator<Item = io::Result<Token>> + Send + 'static,
        W: Write + Send + 'static,
        K: KeySource + 'static,
    {
        // One slot per actor, so neither ever blocks reporting.
        let (done_tx, done_rx) = bounded::<Completion>(2);

        log::info!(
            "session starting at {}ms per word",
            self.state.current_delay_ms()
        );

        let display = DisplayActor::spawn(
            tokens,
            out,
            self.config.line_break(),
            self.state.clone(),
            done_tx.clone(),
        )?;
        let input = InputActor::spawn(
            keys,
            self.state.clone(),
            self.config.speed_step_ms,
            self.config.input_poll_timeout,
            done_tx,
        )
        .map_err(|e| {
            // Lets the already running display thread wind down.
            self.state.set_finished();
            e
        })?;

        let first = done_rx.recv().map_err(|_| PrompterError::Disconnected)?;
        self.state.set_finished();

        // Dropping the handles detaches both threads.
        drop(display);
        drop(input);

        let report = SessionReport {
            ended_by: first.activity,
            final_delay_ms: self.state.current_delay_ms(),
        };
        match first.result {
            Ok(()) => {
                log::info!(
                    "session ended by {} loop at {}ms per word",
                    report.ended_by,
                    report.final_delay_ms
                );
                Ok(report)
            }
            Err(e) => {
                log::error!("{} loop failed: {e}", report.ended_by);
                Err(e)
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
