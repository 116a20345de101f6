//! Emitter component for timed particle bursts attached to a parent

use super::{Countdown, ShapeComponent};
use crate::ecs::EntityKey;
use crate::foundation::math::Vec2;

/// Spawns short-lived particles around a parent while its countdown runs
#[derive(Debug, Clone, PartialEq)]
pub struct EmitterComponent {
    /// Entity the particles are emitted from
    pub parent: EntityKey,

    /// Particle shapes, one picked at random per particle
    pub particles: Vec<ShapeComponent>,

    /// Emission point relative to the parent, in the parent's frame
    pub offset: Vec2,

    /// Total cone angle in radians, centered on the parent's facing
    pub spread: f32,

    /// Emit on ticks where the remaining countdown is a multiple of this
    pub frequency: i32,

    /// Particles per emission
    pub quantity: u32,

    /// Base particle lifespan in ticks
    pub lifespan: i32,

    /// Base particle speed
    pub speed: f32,

    /// Upper jitter multiplier for lifespan and speed, 1.0 for none
    pub jitter: f32,

    /// Ticks until the emitter expires
    pub timer: Countdown,
}

impl EmitterComponent {
    /// Whether this tick emits particles
    pub fn should_emit(&self) -> bool {
        self.timer.is_active() && (self.frequency <= 1 || self.timer.remaining % self.frequency == 0)
    }

    /// Scale `base` by a random factor in `[1, jitter]`, given `sample` in `[0, 1)`
    pub fn jittered(&self, base: f32, sample: f32) -> f32 {
        base + base * ((self.jitter - 1.0) * sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::components::Color;
    use approx::assert_relative_eq;

    fn emitter(frequency: i32, duration: i32) -> EmitterComponent {
        EmitterComponent {
            parent: EntityKey::default(),
            particles: vec![ShapeComponent::new(3.0, 3, Color::WHITE, Color::WHITE, 1.0)],
            offset: Vec2::new(20.0, 0.0),
            spread: 0.5,
            frequency,
            quantity: 2,
            lifespan: 10,
            speed: 4.0,
            jitter: 2.0,
            timer: Countdown::full(duration),
        }
    }

    #[test]
    fn test_emits_on_frequency_multiples() {
        let mut emitter = emitter(3, 7);
        let mut emitted = Vec::new();
        while emitter.timer.is_active() {
            if emitter.should_emit() {
                emitted.push(emitter.timer.remaining);
            }
            emitter.timer.tick();
        }
        assert_eq!(emitted, vec![6, 3]);
        assert!(!emitter.should_emit());
    }

    #[test]
    fn test_jitter_range() {
        let emitter = emitter(1, 5);
        assert_relative_eq!(emitter.jittered(10.0, 0.0), 10.0);
        assert_relative_eq!(emitter.jittered(10.0, 0.5), 15.0);
    }
}
