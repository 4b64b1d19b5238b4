//! # Teleprompter
//!
//! A console teleprompter that streams a text file word by word.
//!
//! Playback runs as two threads sharing one [`PlaybackState`]: a display
//! actor that writes tokens from a [`WordWrapper`] and pauses after every
//! word, and an input actor that reads keys and changes the pace. The
//! [`Session`] returns as soon as either thread finishes.
//!
//! ## Keys
//!
//! - `>` speeds up (10 ms shorter delay, floor 20 ms)
//! - `<` slows down (10 ms longer delay, ceiling 1000 ms)
//! - `x`, `X` or Ctrl+C stops
//!
//! ## Example
//!
//! ```rust,ignore
//! use teleprompter::{CrosstermKeys, FileWrapper, PrompterConfig, Session, TerminalGuard};
//!
//! let config = PrompterConfig::default();
//! let tokens = FileWrapper::open("sampleQuotes.txt", config.wrap_width)?;
//! let session = Session::with_config(config)?;
//!
//! let _terminal = TerminalGuard::enter(true)?;
//! session.run(tokens, std::io::stdout(), CrosstermKeys::new())?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod config;
pub mod error;
pub mod playback;
pub mod terminal;
pub mod text;

// Re-exports for convenience
pub use actor::{Activity, Command, Key, KeySource, Session, SessionReport};
pub use config::{DelayBounds, PrompterConfig};
pub use error::{PrompterError, Result};
pub use playback::PlaybackState;
pub use terminal::{CrosstermKeys, TerminalGuard};
pub use text::{FileWrapper, Token, WordWrapper};
