//! # Whirligig
//!
//! A looping ASCII-art spinner and scripted terminal debate.
//!
//! Whirligig renders hard-coded multi-line figures (a potato chip and a
//! cockroach) as looping frame animations on a raw terminal, interleaved
//! with generated one-line commentary, until the user hits Ctrl+C.
//!
//! ## Core Concepts
//!
//! - **Frame normalization**: every frame in a set is padded to the union
//!   bounding box so the figure never resizes or jitters between frames
//! - **Cyclic view**: a [`Spinner`] exposes an infinite, restartable
//!   traversal over its frames; cursors are independent per call
//! - **Checked cancellation**: Ctrl+C sets a shared [`CancelToken`] that
//!   both the inner animation loop and the outer debate loop observe
//! - **Injected effects**: the output sink and the sleep primitive are
//!   both injectable, so the timing loop is testable without a terminal
//!
//! ## Example
//!
//! ```rust,ignore
//! use whirligig::{AnimationLoop, CancelToken, Figure, ThreadSleep};
//!
//! let spinner = Figure::Chip.spinner()?;
//! let cancel = CancelToken::new();
//! let mut animation = AnimationLoop::new(std::io::stdout(), ThreadSleep, cancel);
//! animation.run(&spinner, Some(spinner.frame_count()))?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod animate;
pub mod debate;
mod error;
pub mod figures;
pub mod frame;
pub mod phrase;
pub mod terminal;

// Re-exports for convenience
pub use animate::{
    AnimationLoop, CancelToken, FnSleep, InterruptWatcher, LoopOutcome, Sleep, ThreadSleep,
};
pub use debate::DebateOrchestrator;
pub use error::Error;
pub use figures::Figure;
pub use frame::{normalize_frames, Spinner};
pub use phrase::PhraseGenerator;
