//! Orbit component for entities circling a parent

use crate::ecs::EntityKey;
use crate::foundation::math::{utils, Vec2, Vec2Ext};

/// Fixed-radius circular motion around another entity's position
///
/// The orbiting entity's own transform rotation acts as a phase offset, so a
/// ring of orbiters can share one angle and still be spread evenly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitComponent {
    /// Entity being orbited
    pub parent: EntityKey,

    /// Current angle in radians
    pub angle: f32,

    /// Distance from the parent
    pub radius: f32,

    /// Angle advanced per tick, in radians
    pub angular_speed: f32,
}

impl OrbitComponent {
    /// Create an orbit starting at angle zero
    pub fn new(parent: EntityKey, radius: f32, angular_speed: f32) -> Self {
        Self {
            parent,
            angle: 0.0,
            radius,
            angular_speed,
        }
    }

    /// Position on the orbit around `center` for a phase of `rotation` radians
    pub fn position_around(&self, center: Vec2, rotation: f32) -> Vec2 {
        center + Vec2::forward().rotated(rotation).rotated(self.angle) * self.radius
    }

    /// Advance one tick, wrapping the angle into `[0, TAU)`
    pub fn advance(&mut self) {
        self.angle = utils::wrap_angle(self.angle + self.angular_speed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::constants::{PI, TAU};
    use approx::assert_relative_eq;

    #[test]
    fn test_position_combines_phase_and_angle() {
        let mut orbit = OrbitComponent::new(EntityKey::default(), 10.0, PI / 2.0);
        let start = orbit.position_around(Vec2::new(5.0, 5.0), 0.0);
        assert_relative_eq!(start.x, 15.0, epsilon = 1e-5);
        assert_relative_eq!(start.y, 5.0, epsilon = 1e-5);

        orbit.advance();
        let quarter = orbit.position_around(Vec2::new(5.0, 5.0), PI);
        assert_relative_eq!(quarter.x, 5.0, epsilon = 1e-4);
        assert_relative_eq!(quarter.y, -5.0, epsilon = 1e-4);
    }

    #[test]
    fn test_angle_wraps() {
        let mut orbit = OrbitComponent::new(EntityKey::default(), 1.0, 0.7);
        for _ in 0..100 {
            orbit.advance();
            assert!(orbit.angle >= 0.0 && orbit.angle < TAU);
        }
    }
}
