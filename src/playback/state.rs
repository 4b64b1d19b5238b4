//! Delay and finished flag, safe to touch from any thread.

use crate::config::{DelayBounds, PrompterConfig};
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::time::Duration;

/// Mutable playback settings for one session.
///
/// `finished` only ever goes from `false` to `true`.
#[derive(Debug)]
pub struct PlaybackState {
    delay_ms: AtomicU32,
    finished: AtomicBool,
    bounds: DelayBounds,
}

impl PlaybackState {
    /// Create a state with the given starting delay, clamped into `bounds`.
    pub fn new(initial_delay_ms: u32, bounds: DelayBounds) -> Self {
        Self {
            delay_ms: AtomicU32::new(bounds.clamp(i64::from(initial_delay_ms))),
            finished: AtomicBool::new(false),
            bounds,
        }
    }

    /// Create a state from a session configuration.
    pub fn from_config(config: &PrompterConfig) -> Self {
        Self::new(config.initial_delay_ms, config.delay_bounds)
    }

    /// Add `increment_ms` to the delay, clamping into bounds.
    ///
    /// Negative increments speed playback up. Returns the new delay.
    pub fn update_delay(&self, increment_ms: i32) -> u32 {
        let bounds = self.bounds;
        let step =
            |current: u32| Some(bounds.clamp(i64::from(current) + i64::from(increment_ms)));
        // The closure never returns `None`, so both arms carry the old value.
        let previous = match self
            .delay_ms
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, step)
        {
            Ok(previous) | Err(previous) => previous,
        };
        bounds.clamp(i64::from(previous) + i64::from(increment_ms))
    }

    /// Mark the session finished.
    ///
    /// Returns `true` only for the call that performed the transition.
    pub fn set_finished(&self) -> bool {
        !self.finished.swap(true, Ordering::AcqRel)
    }

    /// Check whether the session has finished.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished.load(Ordering::Acquire)
    }

    /// Current delay in milliseconds.
    #[inline]
    pub fn current_delay_ms(&self) -> u32 {
        self.delay_ms.load(Ordering::Acquire)
    }

    /// Current delay as a [`Duration`].
    #[inline]
    pub fn current_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.current_delay_ms()))
    }

    /// Bounds the delay is clamped into.
    pub const fn bounds(&self) -> DelayBounds {
        self.bounds
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::from_config(&PrompterConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_defaults() {
        let state = PlaybackState::default();
        assert_eq!(state.current_delay_ms(), 200);
        assert_eq!(state.current_delay(), Duration::from_millis(200));
        assert!(!state.is_finished());
    }

    #[test]
    fn test_update_delay_steps() {
        let state = PlaybackState::default();
        assert_eq!(state.update_delay(-10), 190);
        assert_eq!(state.update_delay(10), 200);
        assert_eq!(state.update_delay(10), 210);
        assert_eq!(state.current_delay_ms(), 210);
    }

    #[test]
    fn test_update_delay_saturates() {
        for start in [20, 21, 200, 999, 1000] {
            let state = PlaybackState::new(start, DelayBounds::DEFAULT);
            assert_eq!(state.update_delay(-1000), 20);

            let state = PlaybackState::new(start, DelayBounds::DEFAULT);
            assert_eq!(state.update_delay(1000), 1000);
        }

        let state = PlaybackState::default();
        assert_eq!(state.update_delay(i32::MIN), 20);
        assert_eq!(state.update_delay(i32::MAX), 1000);
    }

    #[test]
    fn test_zero_increment_is_stable() {
        let state = PlaybackState::new(1000, DelayBounds::DEFAULT);
        assert_eq!(state.update_delay(0), 1000);
        assert_eq!(state.update_delay(0), 1000);
    }

    #[test]
    fn test_initial_delay_clamped() {
        let state = PlaybackState::new(5, DelayBounds::DEFAULT);
        assert_eq!(state.current_delay_ms(), 20);
    }

    #[test]
    fn test_set_finished_idempotent() {
        let state = PlaybackState::default();
        assert!(state.set_finished());
        assert!(!state.set_finished());
        assert!(state.is_finished());
    }

    #[test]
    fn test_concurrent_updates_not_lost() {
        let state = Arc::new(PlaybackState::new(50_000, DelayBounds::new(0, 100_000)));

        let handles: Vec<_> = [1, -1, 1, -1]
            .into_iter()
            .map(|sign| {
                let state = state.clone();
                thread::spawn(move || {
                    for _ in 0..1000 {
                        state.update_delay(sign);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        // Bounds are out of reach, so every increment cancels out.
        assert_eq!(state.current_delay_ms(), 50_000);
    }
}
