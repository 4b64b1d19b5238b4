//! Error type shared by the library and the binary.

use crate::actor::Activity;
use std::io;
use std::path::PathBuf;

/// Errors produced while preparing or running a teleprompter session.
#[derive(Debug, thiserror::Error)]
pub enum PrompterError {
    /// The text file could not be opened.
    #[error("failed to open {}: {source}", path.display())]
    Open {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Reading lines, writing tokens, or reading keys failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The session configuration is inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A loop thread panicked before reporting a result.
    #[error("{0} loop panicked")]
    Panicked(Activity),

    /// Both loops went away without reporting completion.
    #[error("completion channel closed before any loop finished")]
    Disconnected,
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, PrompterError>;
