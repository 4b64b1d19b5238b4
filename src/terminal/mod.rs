//! Terminal: crossterm glue for the real console.
//!
//! [`TerminalGuard`] switches the console into raw mode (single keys, no
//! echo) and restores it on drop. [`CrosstermKeys`] is the [`KeySource`]
//! that reads from it.
//!
//! [`KeySource`]: crate::actor::KeySource

mod guard;
mod keys;

pub use guard::TerminalGuard;
pub use keys::CrosstermKeys;
