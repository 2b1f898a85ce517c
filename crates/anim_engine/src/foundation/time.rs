//! Time management utilities

use std::time::{Duration, Instant};

/// High-precision timer for frame timing
pub struct Timer {
    last_frame: Instant,
    delta_time: f32,
    total_time: f32,
    frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Create a new timer
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            delta_time: 0.0,
            total_time: 0.0,
            frame_count: 0,
        }
    }

    /// Update the timer (should be called once per frame)
    pub fn update(&mut self) {
        let now = Instant::now();
        self.delta_time = now.duration_since(self.last_frame).as_secs_f32();
        self.total_time += self.delta_time;
        self.last_frame = now;
        self.frame_count += 1;
    }

    /// Get the time since the last frame in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the total elapsed time since timer creation
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Get the current frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the average FPS since timer creation
    #[allow(clippy::cast_precision_loss)]
    pub fn average_fps(&self) -> f32 {
        if self.total_time > 0.0 {
            self.frame_count as f32 / self.total_time
        } else {
            0.0
        }
    }
}

/// Blocks the calling thread until the next frame slot
///
/// Stands in for vertical sync on windows that have no swap chain of their
/// own. A pacer built with a rate of zero never waits.
#[derive(Debug)]
pub struct FramePacer {
    frame_interval: Option<Duration>,
    next_deadline: Option<Instant>,
}

impl FramePacer {
    /// Create a pacer targeting `frames_per_second`
    pub fn new(frames_per_second: u32) -> Self {
        let frame_interval = (frames_per_second > 0)
            .then(|| Duration::from_secs(1) / frames_per_second);
        Self {
            frame_interval,
            next_deadline: None,
        }
    }

    /// Interval between frames, `None` when unpaced
    pub fn frame_interval(&self) -> Option<Duration> {
        self.frame_interval
    }

    /// Sleep until the current frame slot ends
    ///
    /// Returns how long the call slept. Deadlines that were already missed
    /// are not caught up on; the schedule restarts from now instead.
    pub fn wait_for_next_frame(&mut self) -> Duration {
        let Some(interval) = self.frame_interval else {
            return Duration::ZERO;
        };

        let now = Instant::now();
        let deadline = self.next_deadline.unwrap_or(now);
        if deadline > now {
            let slept = deadline - now;
            std::thread::sleep(slept);
            self.next_deadline = Some(deadline + interval);
            slept
        } else {
            self.next_deadline = Some(now + interval);
            Duration::ZERO
        }
    }
}
