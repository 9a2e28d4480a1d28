//! One-time Windows virtual-terminal enablement.
//!
//! Legacy Windows consoles print ANSI escapes literally unless
//! virtual-terminal processing is switched on in the console mode. The
//! attempt happens at most once per process and a failure is accepted
//! degraded behavior, never an error.

use std::sync::OnceLock;

use tracing::debug;

static VT_ENABLED: OnceLock<bool> = OnceLock::new();

/// Make sure ANSI escape sequences render on the host console.
///
/// Best-effort and idempotent: the first call performs the platform
/// check, every later call returns the cached result. On non-Windows
/// hosts ANSI support is assumed and this always returns `true`.
pub fn ensure_virtual_terminal() -> bool {
    *VT_ENABLED.get_or_init(|| {
        let enabled = try_enable();
        if !enabled {
            debug!("virtual terminal processing unavailable; escapes may render literally");
        }
        enabled
    })
}

#[cfg(windows)]
fn try_enable() -> bool {
    // supports_ansi() flips ENABLE_VIRTUAL_TERMINAL_PROCESSING on the
    // console as a side effect of probing.
    crossterm::ansi_support::supports_ansi()
}

#[cfg(not(windows))]
const fn try_enable() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cached_after_first_call() {
        let first = ensure_virtual_terminal();
        let second = ensure_virtual_terminal();
        assert_eq!(first, second);
    }

    #[cfg(not(windows))]
    #[test]
    fn test_assumed_enabled_off_windows() {
        assert!(ensure_virtual_terminal());
    }
}
