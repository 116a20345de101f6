//! Wall-clock frame timing

use std::time::{Duration, Instant};

/// Frame timer measuring wall-clock time between ticks
///
/// The simulation itself advances one fixed tick per frame; the timer is only
/// used for pacing and diagnostics.
pub struct Timer {
    last_frame: Instant,
    delta: Duration,
    total_time: f32,
    frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Start timing from now
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            delta: Duration::ZERO,
            total_time: 0.0,
            frame_count: 0,
        }
    }

    /// Mark the end of a frame
    pub fn update(&mut self) {
        let now = Instant::now();
        self.delta = now.duration_since(self.last_frame);
        self.total_time += self.delta.as_secs_f32();
        self.last_frame = now;
        self.frame_count += 1;
    }

    /// Time elapsed since the previous frame
    pub fn delta(&self) -> Duration {
        self.delta
    }

    /// Seconds accumulated over all marked frames
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Frames marked so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Mean frame rate over the timer's life
    pub fn average_fps(&self) -> f32 {
        if self.total_time > 0.0 {
            self.frame_count as f32 / self.total_time
        } else {
            0.0
        }
    }

    /// Time left in the current frame for a target rate, zero if already over budget
    pub fn remaining_in_frame(&self, target_fps: u32) -> Duration {
        if target_fps == 0 {
            return Duration::ZERO;
        }
        let budget = Duration::from_secs_f64(1.0 / f64::from(target_fps));
        budget.saturating_sub(self.last_frame.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_counts_frames() {
        let mut timer = Timer::new();
        timer.update();
        timer.update();
        assert_eq!(timer.frame_count(), 2);
        assert!(timer.total_time() >= 0.0);
    }

    #[test]
    fn test_unpaced_frame_has_no_budget() {
        let timer = Timer::new();
        assert_eq!(timer.remaining_in_frame(0), Duration::ZERO);
    }
}
