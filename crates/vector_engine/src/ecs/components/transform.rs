//! Transform component for 2D position, rotation and scale

use crate::foundation::math::{Vec2, Vec2Ext};

/// Position, rotation (radians, counter-clockwise) and uniform scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformComponent {
    /// World position
    pub position: Vec2,

    /// Rotation in radians
    pub rotation: f32,

    /// Uniform scale factor
    pub scale: f32,
}

impl Default for TransformComponent {
    fn default() -> Self {
        Self {
            position: Vec2::zeros(),
            rotation: 0.0,
            scale: 1.0,
        }
    }
}

impl TransformComponent {
    /// Create a transform with position and rotation
    pub fn new(position: Vec2, rotation: f32) -> Self {
        Self {
            position,
            rotation,
            scale: 1.0,
        }
    }

    /// Create a transform with only position
    pub fn at(position: Vec2) -> Self {
        Self::new(position, 0.0)
    }

    /// Unit vector in the direction this transform faces
    pub fn facing(&self) -> Vec2 {
        Vec2::forward().rotated(self.rotation)
    }
}
