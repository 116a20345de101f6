//! Tick countdown shared by every timed component

/// A countdown in ticks together with the duration it restarts from
///
/// `remaining` never drops below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Countdown {
    /// Ticks left
    pub remaining: i32,

    /// Ticks the countdown restarts from
    pub duration: i32,
}

impl Countdown {
    /// A countdown starting at its full duration
    pub fn full(duration: i32) -> Self {
        Self {
            remaining: duration.max(0),
            duration,
        }
    }

    /// A countdown that has already run out
    pub fn spent(duration: i32) -> Self {
        Self {
            remaining: 0,
            duration,
        }
    }

    /// Decrement by one tick if still running
    pub fn tick(&mut self) {
        if self.remaining > 0 {
            self.remaining -= 1;
        }
    }

    /// Restart from the full duration
    pub fn reset(&mut self) {
        self.remaining = self.duration.max(0);
    }

    /// Restart from an explicit value
    pub fn set(&mut self, remaining: i32) {
        self.remaining = remaining.max(0);
    }

    /// Whether ticks remain
    pub fn is_active(&self) -> bool {
        self.remaining > 0
    }

    /// Remaining share of the duration in `[0, 1]`; zero for a zero duration
    pub fn fraction(&self) -> f32 {
        if self.duration <= 0 {
            0.0
        } else {
            (self.remaining as f32 / self.duration as f32).clamp(0.0, 1.0)
        }
    }
}
