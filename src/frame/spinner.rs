//! `Spinner`: a normalized frame sequence with a fixed per-frame delay.

use std::time::Duration;

use crate::error::Error;

/// Default pause between successive frames.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(120);

/// An ordered, non-empty set of equal-sized frames plus the delay to hold
/// each one on screen.
///
/// The spinner itself is stateless between uses: every call to [`cycle`]
/// returns an independent cursor starting at frame 0, so repeated or
/// concurrent traversals never interfere.
///
/// [`cycle`]: Spinner::cycle
#[derive(Clone, Debug)]
pub struct Spinner {
    /// Normalized frames, displayed in order.
    frames: Vec<String>,
    /// Hold time per frame.
    delay: Duration,
}

impl Spinner {
    /// Create a spinner with the default 120 ms delay.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySpinner`] if `frames` is empty.
    pub fn new(frames: Vec<String>) -> Result<Self, Error> {
        Self::with_delay(frames, DEFAULT_DELAY)
    }

    /// Create a spinner with an explicit per-frame delay.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySpinner`] if `frames` is empty.
    pub fn with_delay(frames: Vec<String>, delay: Duration) -> Result<Self, Error> {
        if frames.is_empty() {
            return Err(Error::EmptySpinner);
        }
        Ok(Self { frames, delay })
    }

    /// The normalized frames in display order.
    #[inline]
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    /// Number of frames in one full revolution.
    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Hold time per frame.
    #[inline]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// An unbounded cyclic view over the frames.
    ///
    /// Yields frame 0, 1, .., N-1, 0, 1, .. forever. Each call starts a
    /// fresh cursor at frame 0.
    #[inline]
    pub fn cycle(&self) -> FrameCycle<'_> {
        FrameCycle {
            frames: &self.frames,
            position: 0,
        }
    }
}

/// Infinite iterator over a spinner's frames in display order.
#[derive(Clone, Debug)]
pub struct FrameCycle<'a> {
    frames: &'a [String],
    position: usize,
}

impl<'a> Iterator for FrameCycle<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let frame = &self.frames[self.position];
        self.position = (self.position + 1) % self.frames.len();
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
