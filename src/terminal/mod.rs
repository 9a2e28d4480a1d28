//! Terminal integration: output sink, ANSI constants, and platform setup.
//!
//! Animation output is plain text with two escape sequences (clear screen,
//! cursor home) written through the [`FrameSink`] abstraction, so tests can
//! capture output without a terminal. Platform concerns live here too: the
//! one-time Windows VT-processing shim and the raw-mode guard used by the
//! binary.

mod raw;
mod sink;
mod vt;

pub use raw::RawModeGuard;
pub use sink::{FrameSink, CLEAR_AND_HOME, CLEAR_SCREEN, MOVE_HOME};
pub use vt::ensure_virtual_terminal;
