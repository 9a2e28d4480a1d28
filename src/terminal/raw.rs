//! Raw-mode guard for the interactive binary.

use std::io;

use crossterm::terminal;

/// Puts the terminal into raw mode for the guard's lifetime.
///
/// Raw mode is required so Ctrl+C arrives as a key event for the
/// interrupt watcher instead of killing the process outright. The guard
/// restores cooked mode on drop, including during unwinding.
#[derive(Debug)]
pub struct RawModeGuard(());

impl RawModeGuard {
    /// Enter raw mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal refuses to switch modes (for
    /// example when stdout is not a tty).
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self(()))
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}
