//! Collision component

/// Circular collision volume centered on the entity's transform
///
/// The render shape never takes part in collision; only this radius does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColliderComponent {
    /// Radius of the collision circle
    pub radius: f32,
}

impl ColliderComponent {
    /// Create a collider with the given radius
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }
}
