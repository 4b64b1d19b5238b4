//! Session configuration.

use crate::error::{PrompterError, Result};
use std::time::Duration;

/// Inclusive range a delay is clamped into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayBounds {
    /// Smallest allowed delay in milliseconds.
    pub min_ms: u32,
    /// Largest allowed delay in milliseconds.
    pub max_ms: u32,
}

impl DelayBounds {
    /// Default bounds: 20 ms to 1000 ms.
    pub const DEFAULT: Self = Self::new(20, 1000);

    /// Create bounds from a minimum and maximum.
    pub const fn new(min_ms: u32, max_ms: u32) -> Self {
        Self { min_ms, max_ms }
    }

    /// Clamp a (possibly negative or oversized) delay into range.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn clamp(self, delay_ms: i64) -> u32 {
        // Result lies in [min_ms, max_ms], so the cast is lossless.
        delay_ms.clamp(i64::from(self.min_ms), i64::from(self.max_ms)) as u32
    }

    /// Whether `delay_ms` lies inside the bounds.
    pub const fn contains(self, delay_ms: u32) -> bool {
        delay_ms >= self.min_ms && delay_ms <= self.max_ms
    }
}

impl Default for DelayBounds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Configuration for a [`Session`](crate::Session).
#[derive(Debug, Clone)]
pub struct PrompterConfig {
    /// Delay in effect when the session starts.
    pub initial_delay_ms: u32,
    /// Range every delay update is clamped into.
    pub delay_bounds: DelayBounds,
    /// Delay change applied per speed key press.
    pub speed_step_ms: u32,
    /// Column budget before the word wrapper inserts a break.
    pub wrap_width: usize,
    /// How long a single key read may block before the finished flag is
    /// re-checked. `None` blocks until a key arrives.
    pub input_poll_timeout: Option<Duration>,
    /// Whether the terminal is switched into raw mode for the session.
    pub raw_mode: bool,
}

impl Default for PrompterConfig {
    fn default() -> Self {
        Self {
            initial_delay_ms: 200,
            delay_bounds: DelayBounds::DEFAULT,
            speed_step_ms: 10,
            wrap_width: crate::text::DEFAULT_WRAP_WIDTH,
            input_poll_timeout: Some(Duration::from_millis(50)),
            raw_mode: true,
        }
    }
}

impl PrompterConfig {
    /// Check that the fields are mutually consistent.
    pub fn validate(&self) -> Result<()> {
        let bounds = self.delay_bounds;
        if bounds.min_ms > bounds.max_ms {
            return Err(PrompterError::InvalidConfig(format!(
                "delay bounds are inverted ({} > {})",
                bounds.min_ms, bounds.max_ms
            )));
        }
        if !bounds.contains(self.initial_delay_ms) {
            return Err(PrompterError::InvalidConfig(format!(
                "initial delay {}ms is outside {}..={}ms",
                self.initial_delay_ms, bounds.min_ms, bounds.max_ms
            )));
        }
        if self.speed_step_ms == 0 {
            return Err(PrompterError::InvalidConfig(
                "speed step must be non-zero".to_string(),
            ));
        }
        if self.wrap_width == 0 {
            return Err(PrompterError::InvalidConfig(
                "wrap width must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Line break written for break tokens.
    ///
    /// Raw mode disables output post-processing, so a bare `\n` would not
    /// return the cursor to column zero.
    pub const fn line_break(&self) -> &'static str {
        if self.raw_mode {
            "\r\n"
        } else {
            crate::text::NEWLINE
        }
    }
}
