//! Wall-clock timing of run phases.
//!
//! Timers always measure; whether the numbers are shown is opt-in, switched
//! on programmatically or by setting the `HT_TIMING` environment variable.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

static ENABLED: AtomicBool = AtomicBool::new(false);

/// Ask for timing output for the rest of the process.
pub fn enable_timing() {
    ENABLED.store(true, Ordering::Relaxed);
}

/// True when timing output was requested.
pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed) || std::env::var_os("HT_TIMING").is_some()
}

/// Measures one phase of a run.
#[derive(Clone, Copy, Debug)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Seconds since the timer started.
    pub fn elapsed_s(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enabling_is_sticky() {
        enable_timing();
        assert!(is_enabled());
    }

    #[test]
    fn elapsed_is_monotonic() {
        let timer = Timer::start();
        let first = timer.elapsed_s();
        let second = timer.elapsed_s();
        assert!(first >= 0.0);
        assert!(second >= first);
    }
}
