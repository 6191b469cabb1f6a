//! Frame stopwatch for `StepStats::frame_ms`.
//!
//! Readings are milliseconds on a monotonic-enough clock: `Date.now()` in the
//! browser, an `Instant` anchored at first use on the host.

use super::step_stats::StepStats;

#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static ANCHOR: OnceLock<Instant> = OnceLock::new();
    ANCHOR.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

/// Started only when stats are on, so disabled stats never touch the clock.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FrameTimer {
    started_ms: f64,
}

impl FrameTimer {
    pub(crate) fn start() -> Self {
        Self { started_ms: now_ms() }
    }

    /// `Date.now()` can step backwards; never report a negative frame.
    pub(crate) fn elapsed_ms(&self) -> f64 {
        (now_ms() - self.started_ms).max(0.0)
    }

    /// Write the elapsed time into the frame's stats.
    pub(crate) fn stamp(self, stats: &mut StepStats) {
        stats.frame_ms = self.elapsed_ms();
    }
}
