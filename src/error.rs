//! Crate-wide error type for construction-time validation.
//!
//! Errors here are raised synchronously when a figure, spinner, or phrase
//! generator is built from degenerate input. Steady-state animation has no
//! recoverable error conditions beyond I/O on the sink.

use thiserror::Error;

/// Errors produced while building animation components.
#[derive(Debug, Error)]
pub enum Error {
    /// The raw frame list handed to the normalizer was empty.
    #[error("frame set must contain at least one frame")]
    EmptyFrameSet,

    /// A raw frame contained no visible lines after dedenting and trimming.
    #[error("frame {index} has no content after trimming")]
    BlankFrame {
        /// Zero-based index of the offending frame in the input list.
        index: usize,
    },

    /// A spinner was constructed with an empty frame sequence.
    #[error("spinner requires at least one frame")]
    EmptySpinner,

    /// A phrase generator was constructed with an empty word pool.
    #[error("phrase generator needs non-empty intros and claims")]
    EmptyWordPool,

    /// A figure choice string did not match any known alias.
    #[error("unknown figure choice: {0:?}")]
    UnknownFigure(String),

    /// An I/O error from the output sink.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
