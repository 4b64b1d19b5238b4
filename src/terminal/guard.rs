//! Raw-mode guard.

use crossterm::{cursor, execute, terminal};
use std::io;

/// Puts the terminal into playback mode for as long as it lives.
///
/// Raw mode delivers keys without Enter and without echo. The cursor is
/// hidden while words stream. Both are undone on drop, on every exit path.
#[derive(Debug)]
pub struct TerminalGuard {
    raw_mode: bool,
}

impl TerminalGuard {
    /// Enter playback mode.
    ///
    /// With `raw_mode` false only the cursor is hidden, and keys are read
    /// as the terminal delivers them.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be reconfigured.
    pub fn enter(raw_mode: bool) -> io::Result<Self> {
        if raw_mode {
            terminal::enable_raw_mode()?;
        }
        // Construct before the fallible call so a failure still restores.
        let guard = Self { raw_mode };
        let mut stdout = io::stdout();
        execute!(stdout, cursor::Hide)?;
        log::debug!("terminal prepared (raw mode: {raw_mode})");
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, cursor::Show);
        if self.raw_mode {
            let _ = terminal::disable_raw_mode();
        }
    }
}
