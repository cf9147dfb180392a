/// Turns display-frame timestamps into elapsed seconds.
///
/// Timestamps are in milliseconds, as handed to a per-frame callback. The
/// first tick measures from timestamp `0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    last: f64,
}

impl FrameClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts measuring from `timestamp_ms` instead of `0`.
    #[must_use]
    pub fn starting_at(timestamp_ms: f64) -> Self {
        Self {
            last: timestamp_ms * 0.001,
        }
    }

    /// Records a frame at `timestamp_ms` and returns the seconds since the
    /// previous one. A timestamp that goes backwards yields `0`.
    pub fn tick(&mut self, timestamp_ms: f64) -> f64 {
        let now = timestamp_ms * 0.001;
        let delta = now - self.last;
        self.last = now;
        if delta.is_finite() {
            delta.max(0.0)
        } else {
            0.0
        }
    }
}
