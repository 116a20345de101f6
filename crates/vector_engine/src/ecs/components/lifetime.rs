//! Lifespan and invincibility components
//!
//! Both are tick countdowns. The lifespan ends the entity when it runs out;
//! invincibility shields it from hits while it runs.

use super::Countdown;

/// Lifespan component for entities that expire after a number of ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifespanComponent {
    /// Ticks left and the original lifespan
    pub timer: Countdown,
}

impl LifespanComponent {
    /// Create a lifespan of `duration` ticks
    pub fn new(duration: i32) -> Self {
        Self {
            timer: Countdown::full(duration),
        }
    }

    /// Whether the lifespan has run out
    pub fn is_expired(&self) -> bool {
        self.timer.remaining <= 0
    }

    /// Remaining share of the lifespan, used for fading
    pub fn fraction(&self) -> f32 {
        self.timer.fraction()
    }
}

/// Whether a new invincibility window starts running or starts exhausted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvincibilityStart {
    /// Countdown starts at the full duration
    Active,

    /// Countdown starts at zero; only a hit starts the window
    Spent,
}

/// Hit immunity window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvincibilityComponent {
    /// Ticks of immunity left and the window length
    pub timer: Countdown,
}

impl InvincibilityComponent {
    /// Create an invincibility window of `duration` ticks
    pub fn new(duration: i32, start: InvincibilityStart) -> Self {
        let timer = match start {
            InvincibilityStart::Active => Countdown::full(duration),
            InvincibilityStart::Spent => Countdown::spent(duration),
        };
        Self { timer }
    }

    /// Whether the entity is currently immune
    pub fn is_active(&self) -> bool {
        self.timer.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifespan_expires() {
        let mut lifespan = LifespanComponent::new(1);
        assert!(!lifespan.is_expired());
        lifespan.timer.tick();
        assert!(lifespan.is_expired());
    }

    #[test]
    fn test_invincibility_start_states() {
        assert!(InvincibilityComponent::new(30, InvincibilityStart::Active).is_active());
        assert!(!InvincibilityComponent::new(30, InvincibilityStart::Spent).is_active());
    }
}
