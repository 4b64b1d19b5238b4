//! Playback: State shared between the display and input actors.
//!
//! A single [`PlaybackState`] is created per session and handed to both
//! actors as an `Arc`. Every field is atomic, so neither actor ever blocks
//! on the other.

mod state;

pub use state::PlaybackState;
