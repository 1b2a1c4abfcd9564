//! Millisecond clock behind the step statistics.

#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Milliseconds since the first reading in this process.
#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static ORIGIN: OnceLock<Instant> = OnceLock::new();
    ORIGIN.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

/// Stopwatch for one step phase. Disabled timers never read the clock.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PhaseTimer(Option<f64>);

impl PhaseTimer {
    pub(crate) fn start_if(enabled: bool) -> Self {
        PhaseTimer(enabled.then(now_ms))
    }

    /// Elapsed milliseconds, `None` when the timer was not started.
    pub(crate) fn lap(&self) -> Option<f64> {
        // Date::now can step backwards with the system clock.
        self.0.map(|start| (now_ms() - start).max(0.0))
    }
}
