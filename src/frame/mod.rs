//! Frame handling: normalization and the cyclic spinner view.
//!
//! Raw figure art is authored as indented multi-line string blocks of
//! uneven width and height. This module squares those blocks into a
//! rectangular frame set ([`normalize_frames`]) and wraps the set in a
//! [`Spinner`] that yields frames forever at a fixed delay.

mod normalize;
mod spinner;

pub use normalize::normalize_frames;
pub use spinner::{FrameCycle, Spinner, DEFAULT_DELAY};
