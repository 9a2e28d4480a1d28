//! Checked cancellation: shared token plus the Ctrl+C watcher thread.
//!
//! Cancellation is an explicit condition checked at every iteration
//! boundary, not exception-style control flow. One background thread polls
//! terminal events; on Ctrl+C it sets the shared [`CancelToken`] and pings
//! a bounded channel so an in-flight sleep wakes immediately. Both the
//! inner animation loop and the outer debate loop observe the same token,
//! so a single interrupt stops the whole program.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{bounded, Receiver, Sender};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use tracing::debug;

use super::Sleep;

/// Shared cancellation flag.
///
/// Cloning is cheap; all clones observe the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a fresh, uncancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the token cancelled. Irreversible for the token's lifetime.
    #[inline]
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Background thread that turns Ctrl+C key events into cancellation.
///
/// The terminal must be in raw mode for Ctrl+C to arrive as a key event
/// rather than a process-killing signal.
pub struct InterruptWatcher {
    /// Handle to the watcher thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
    /// Receiver pinged once when the interrupt fires.
    interrupt_rx: Receiver<()>,
    /// Token set on interrupt.
    cancel: CancelToken,
}

impl InterruptWatcher {
    /// Spawn the watcher thread.
    ///
    /// `poll_timeout` bounds how long the thread waits for events before
    /// re-checking its shutdown flag.
    ///
    /// # Panics
    ///
    /// Panics if the OS fails to spawn the watcher thread.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn(cancel: CancelToken, poll_timeout: Duration) -> Self {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();
        let cancel_clone = cancel.clone();

        // Capacity 1: a second ping has nothing extra to say.
        let (interrupt_tx, interrupt_rx) = bounded(1);

        let handle = thread::Builder::new()
            .name("whirligig-interrupt".to_string())
            .spawn(move || {
                Self::run_loop(&interrupt_tx, &cancel_clone, &shutdown_clone, poll_timeout);
            })
            .expect("Failed to spawn interrupt watcher thread");

        Self {
            handle: Some(handle),
            shutdown,
            interrupt_rx,
            cancel,
        }
    }

    /// An interrupt-aware [`Sleep`] backed by this watcher.
    ///
    /// Sleeping waits on the interrupt channel with a timeout, so a
    /// pending pause ends the moment Ctrl+C fires instead of running out
    /// the clock.
    pub fn sleeper(&self) -> InterruptSleep {
        InterruptSleep {
            interrupt_rx: self.interrupt_rx.clone(),
            cancel: self.cancel.clone(),
        }
    }

    /// Signal the watcher thread to shutdown.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the watcher thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main event polling loop.
    fn run_loop(
        interrupt_tx: &Sender<()>,
        cancel: &CancelToken,
        shutdown: &Arc<AtomicBool>,
        poll_timeout: Duration,
    ) {
        loop {
            if shutdown.load(Ordering::Relaxed) {
                break;
            }

            match event::poll(poll_timeout) {
                Ok(true) => match event::read() {
                    Ok(ev) if Self::is_interrupt(&ev) => {
                        cancel.cancel();
                        let _ = interrupt_tx.try_send(());
                    }
                    Ok(_) => {}
                    Err(e) => {
                        debug!("event read failed, stopping watcher: {e}");
                        break;
                    }
                },
                Ok(false) => {
                    // No event, continue loop (will check shutdown)
                }
                Err(e) => {
                    debug!("event poll failed, stopping watcher: {e}");
                    break;
                }
            }
        }
    }

    /// In raw mode Ctrl+C shows up as a plain key press.
    fn is_interrupt(ev: &Event) -> bool {
        matches!(
            ev,
            Event::Key(key)
                if key.kind == KeyEventKind::Press
                    && matches!(key.code, KeyCode::Char('c' | 'C'))
                    && key.modifiers.contains(KeyModifiers::CONTROL)
        )
    }
}

impl Drop for InterruptWatcher {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Sleep primitive that wakes early when the interrupt fires.
#[derive(Clone, Debug)]
pub struct InterruptSleep {
    interrupt_rx: Receiver<()>,
    cancel: CancelToken,
}

impl Sleep for InterruptSleep {
    fn sleep(&mut self, duration: Duration) {
        if self.cancel.is_cancelled() {
            return;
        }
        // Either outcome ends the pause: a ping, or the full duration.
        let _ = self.interrupt_rx.recv_timeout(duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_token_starts_uncancelled() {
        let token = CancelToken::new();
        assert!(!token.is_cancelled());
        token.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_clones_share_the_flag() {
        let token = CancelToken::new();
        let clone = token.clone();
        clone.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_sleep_skipped_when_already_cancelled() {
        let (_tx, interrupt_rx) = bounded(1);
        let cancel = CancelToken::new();
        cancel.cancel();
        let mut sleep = InterruptSleep {
            interrupt_rx,
            cancel,
        };

        let start = Instant::now();
        sleep.sleep(Duration::from_secs(5));
        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[test]
    fn test_sleep_wakes_on_ping() {
        let (tx, interrupt_rx) = bounded(1);
        let mut sleep = InterruptSleep {
            interrupt_rx,
            cancel: CancelToken::new(),
        };
        tx.send(()).unwrap();

        let start = Instant::now();
        sleep.sleep(Duration::from_secs(5));
        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[test]
    fn test_watcher_join_returns() {
        // Without a terminal the poll either errors (thread exits) or
        // times out (shutdown flag observed); either way join terminates.
        let watcher = InterruptWatcher::spawn(CancelToken::new(), Duration::from_millis(10));
        watcher.join();
    }
}
