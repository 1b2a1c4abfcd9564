/// Longest frame the scheduler will report. Longer gaps (tab in background,
/// debugger pause) are treated as one 200 ms frame.
pub const MAX_FRAME_DELTA_MS: f32 = 200.0;

/// Turns absolute animation-frame timestamps into per-frame deltas.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameClock {
    last_time: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds since the previous tick, clamped to `[0, MAX_FRAME_DELTA_MS]`.
    pub fn tick(&mut self, time: f64) -> f32 {
        let delta = (time - self.last_time) as f32;
        self.last_time = time;
        delta.clamp(0.0, MAX_FRAME_DELTA_MS)
    }

    pub fn last_time(&self) -> f64 {
        self.last_time
    }

    pub fn reset(&mut self) {
        self.last_time = 0.0;
    }
}
