//! Velocity component for entities that drift each tick

use crate::foundation::math::Vec2;

/// Per-tick position delta
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VelocityComponent {
    /// Added to the transform position once per tick
    pub velocity: Vec2,
}

impl VelocityComponent {
    /// Create a velocity component
    pub fn new(velocity: Vec2) -> Self {
        Self { velocity }
    }
}
