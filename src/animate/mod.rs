//! Animation loop: drives a spinner's frames to a sink at a fixed cadence.
//!
//! The loop owns its effects through two injected seams: a [`FrameSink`]
//! for output and a [`Sleep`] for time, so the timing behavior is testable
//! without a terminal or a clock. Cancellation is a [`CancelToken`] checked
//! at every iteration boundary.

mod cancel;

pub use cancel::{CancelToken, InterruptSleep, InterruptWatcher};

use std::io;
use std::thread;
use std::time::Duration;

use crate::frame::Spinner;
use crate::terminal::{ensure_virtual_terminal, FrameSink, CLEAR_AND_HOME};

/// Fixed instructional line shown under every frame.
pub const STOP_HINT: &str = "Press Ctrl+C to stop.";

/// Farewell line shown once when the loop is interrupted.
pub const FAREWELL: &str = "Stopped. Thanks for spinning!";

/// How a run of the animation loop ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopOutcome {
    /// The iteration cap was reached.
    Completed,
    /// The cancel token fired; the farewell was written.
    Interrupted,
}

/// Suspension primitive between frames.
pub trait Sleep {
    /// Pause for up to `duration`.
    fn sleep(&mut self, duration: Duration);
}

/// Plain blocking sleep on the current thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadSleep;

impl Sleep for ThreadSleep {
    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Adapter turning any closure into a [`Sleep`], mainly for tests.
#[derive(Clone, Copy, Debug)]
pub struct FnSleep<F>(pub F);

impl<F: FnMut(Duration)> Sleep for FnSleep<F> {
    fn sleep(&mut self, duration: Duration) {
        (self.0)(duration);
    }
}

/// Drives spinner frames to a sink at the spinner's cadence.
///
/// Each iteration clears the screen, homes the cursor, writes the current
/// frame and [`STOP_HINT`], flushes, and sleeps for the spinner's delay.
/// Frames advance through the spinner's cyclic view, so an uncapped run
/// loops forever until the cancel token fires.
pub struct AnimationLoop<W, S> {
    sink: W,
    sleep: S,
    cancel: CancelToken,
}

impl<W: FrameSink, S: Sleep> AnimationLoop<W, S> {
    /// Create a loop over the given sink, sleep primitive, and token.
    pub const fn new(sink: W, sleep: S, cancel: CancelToken) -> Self {
        Self {
            sink,
            sleep,
            cancel,
        }
    }

    /// Animate the spinner, optionally bounded to `iterations` frames.
    ///
    /// Emits exactly `iterations` frames when a cap is given (the sleep
    /// primitive is called once per emitted frame, never more), otherwise
    /// runs until cancelled. A cancellation observed at an iteration
    /// boundary writes a clear screen plus [`FAREWELL`] once and returns
    /// [`LoopOutcome::Interrupted`]; that is a normal return, not an error.
    ///
    /// # Errors
    ///
    /// Propagates I/O errors from the sink.
    pub fn run(&mut self, spinner: &Spinner, iterations: Option<usize>) -> io::Result<LoopOutcome> {
        ensure_virtual_terminal();

        let mut emitted = 0usize;
        for frame in spinner.cycle() {
            if iterations.is_some_and(|cap| emitted >= cap) {
                break;
            }
            if self.cancel.is_cancelled() {
                self.write_farewell()?;
                return Ok(LoopOutcome::Interrupted);
            }

            self.sink.write_str(CLEAR_AND_HOME)?;
            for line in frame.lines() {
                self.sink.write_str(line)?;
                self.sink.write_str("\r\n")?;
            }
            self.sink.write_str(STOP_HINT)?;
            self.sink.write_str("\r\n")?;
            self.sink.flush()?;

            emitted += 1;
            self.sleep.sleep(spinner.delay());
        }
        Ok(LoopOutcome::Completed)
    }

    /// Suspend between animation bursts using the injected primitive.
    pub fn pause(&mut self, duration: Duration) {
        self.sleep.sleep(duration);
    }

    /// The cancel token this loop observes.
    pub const fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    /// Mutable access to the sink, for interleaved non-frame output.
    pub fn sink_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    /// Consume the loop and return its sink.
    pub fn into_sink(self) -> W {
        self.sink
    }

    fn write_farewell(&mut self) -> io::Result<()> {
        self.sink.write_str(CLEAR_AND_HOME)?;
        self.sink.write_str(FAREWELL)?;
        self.sink.write_str("\r\n")?;
        self.sink.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Spinner;
    use std::cell::Cell;
    use std::rc::Rc;

    fn spinner(frames: &[&str]) -> Spinner {
        Spinner::new(frames.iter().map(|&f| f.to_owned()).collect()).unwrap()
    }

    fn counting_sleep() -> (Rc<Cell<usize>>, FnSleep<impl FnMut(Duration)>) {
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();
        (count, FnSleep(move |_: Duration| counter.set(counter.get() + 1)))
    }

    fn output_of(animation: AnimationLoop<Vec<u8>, impl Sleep>) -> String {
        String::from_utf8(animation.sink).unwrap()
    }

    #[test]
    fn test_capped_run_clears_once_per_frame() {
        let sp = spinner(&["one", "two", "three"]);
        let (sleeps, sleep) = counting_sleep();
        let mut animation = AnimationLoop::new(Vec::new(), sleep, CancelToken::new());

        let outcome = animation.run(&sp, Some(3)).unwrap();
        assert_eq!(outcome, LoopOutcome::Completed);

        let output = output_of(animation);
        assert_eq!(output.matches(CLEAR_AND_HOME).count(), 3);
        assert!(output.contains(STOP_HINT));
        assert_eq!(sleeps.get(), 3);
    }

    #[test]
    fn test_sleep_never_exceeds_cap() {
        let sp = spinner(&["x"]);
        let (sleeps, sleep) = counting_sleep();
        let mut animation = AnimationLoop::new(Vec::new(), sleep, CancelToken::new());

        animation.run(&sp, Some(5)).unwrap();
        assert!(sleeps.get() <= 5);
    }

    #[test]
    fn test_zero_cap_emits_nothing() {
        let sp = spinner(&["x"]);
        let (sleeps, sleep) = counting_sleep();
        let mut animation = AnimationLoop::new(Vec::new(), sleep, CancelToken::new());

        let outcome = animation.run(&sp, Some(0)).unwrap();
        assert_eq!(outcome, LoopOutcome::Completed);
        assert_eq!(sleeps.get(), 0);
        assert!(output_of(animation).is_empty());
    }

    #[test]
    fn test_precancelled_run_says_goodbye_immediately() {
        let sp = spinner(&["x"]);
        let cancel = CancelToken::new();
        cancel.cancel();
        let (sleeps, sleep) = counting_sleep();
        let mut animation = AnimationLoop::new(Vec::new(), sleep, cancel);

        let outcome = animation.run(&sp, None).unwrap();
        assert_eq!(outcome, LoopOutcome::Interrupted);
        assert_eq!(sleeps.get(), 0);

        let output = output_of(animation);
        assert_eq!(output.matches(FAREWELL).count(), 1);
        assert!(!output.contains(STOP_HINT));
    }

    #[test]
    fn test_cancel_mid_run_stops_uncapped_loop() {
        let sp = spinner(&["a", "b"]);
        let cancel = CancelToken::new();
        let cancel_from_sleep = cancel.clone();
        let sleeps = Rc::new(Cell::new(0));
        let counter = sleeps.clone();
        let sleep = FnSleep(move |_: Duration| {
            counter.set(counter.get() + 1);
            if counter.get() == 2 {
                cancel_from_sleep.cancel();
            }
        });
        let mut animation = AnimationLoop::new(Vec::new(), sleep, cancel);

        let outcome = animation.run(&sp, None).unwrap();
        assert_eq!(outcome, LoopOutcome::Interrupted);
        assert_eq!(sleeps.get(), 2);

        // Two frames plus the farewell screen.
        let output = output_of(animation);
        assert_eq!(output.matches(CLEAR_AND_HOME).count(), 3);
        assert_eq!(output.matches(FAREWELL).count(), 1);
    }

    #[test]
    fn test_screen_contents_via_vt100() {
        let sp = spinner(&["##\n##"]);
        let mut animation =
            AnimationLoop::new(Vec::new(), FnSleep(|_: Duration| {}), CancelToken::new());
        animation.run(&sp, Some(1)).unwrap();

        let mut parser = vt100::Parser::new(6, 40, 0);
        parser.process(&animation.sink);
        let contents = parser.screen().contents();
        assert!(contents.contains("##"));
        assert!(contents.contains(STOP_HINT));
    }
}
