use std::time::{Duration, Instant};

/// Monotonic host clock - timestamps are measured from its creation
#[derive(Debug, Clone, Copy)]
pub struct HostClock {
    start: Instant,
}

impl HostClock {
    /// Create new clock starting now
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Time elapsed since the clock started
    pub fn now(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Default for HostClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Counts frames over a fixed window and reports the rate once per window
#[derive(Debug, Clone)]
pub struct FpsCounter {
    interval: Duration,
    window_start: Duration,
    frames: u32,
    fps: f32,
}

impl FpsCounter {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            window_start: Duration::ZERO,
            frames: 0,
            fps: 0.0,
        }
    }

    /// Record one frame at `now`, returns the new rate when a window closes
    pub fn record(&mut self, now: Duration) -> Option<f32> {
        self.frames += 1;

        let elapsed = now.saturating_sub(self.window_start);
        if elapsed < self.interval {
            return None;
        }

        self.fps = self.frames as f32 / elapsed.as_secs_f32();
        self.frames = 0;
        self.window_start = now;
        Some(self.fps)
    }

    /// Rate measured over the last complete window
    pub fn fps(&self) -> f32 {
        self.fps
    }
}
