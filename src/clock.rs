/// Tracks animation-frame timestamps (milliseconds, as handed to
/// `requestAnimationFrame` callbacks) and the seconds elapsed since the first frame.
#[derive(Debug, Clone, Default)]
pub struct AnimationClock {
    previous: Option<f64>,
    elapsed: f64,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance to `timestamp_ms` and return the frame delta in seconds.
    ///
    /// The first call only records the baseline and returns `0.0`. A timestamp
    /// older than the previous one yields a zero delta rather than rewinding.
    pub fn tick(&mut self, timestamp_ms: f64) -> f64 {
        let dt = match self.previous {
            Some(prev) => ((timestamp_ms - prev) / 1000.0).max(0.0),
            None => 0.0,
        };
        self.previous = Some(timestamp_ms);
        self.elapsed += dt;
        dt
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed
    }
}
