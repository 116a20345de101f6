//! Math utilities and types
//!
//! Provides the 2D vector type used by every simulation component, along with
//! the rotation and distance helpers the physics code needs.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Wrap an angle in radians into `[0, TAU)`
    pub fn wrap_angle(radians: f32) -> f32 {
        radians.rem_euclid(constants::TAU)
    }
}

/// Extension trait for Vec2 with the 2D helpers nalgebra does not provide
pub trait Vec2Ext {
    /// Unit vector pointing along +X, the facing direction of a zero rotation
    fn forward() -> Vec2;

    /// Rotate counter-clockwise by `radians`
    fn rotated(&self, radians: f32) -> Vec2;

    /// Rotate counter-clockwise by `degrees`
    fn rotated_deg(&self, degrees: f32) -> Vec2;

    /// Angle of this vector measured from +X, in radians
    fn heading(&self) -> f32;

    /// Angle of the direction from this point towards `other`, in radians
    fn angle_to(&self, other: &Vec2) -> f32;

    /// Euclidean distance to another point
    fn distance_to(&self, other: &Vec2) -> f32;

    /// Squared euclidean distance to another point
    fn distance_squared_to(&self, other: &Vec2) -> f32;
}

impl Vec2Ext for Vec2 {
    fn forward() -> Vec2 {
        Vec2::new(1.0, 0.0)
    }

    fn rotated(&self, radians: f32) -> Vec2 {
        let (sin, cos) = radians.sin_cos();
        Vec2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    fn rotated_deg(&self, degrees: f32) -> Vec2 {
        self.rotated(utils::deg_to_rad(degrees))
    }

    fn heading(&self) -> f32 {
        self.y.atan2(self.x)
    }

    fn angle_to(&self, other: &Vec2) -> f32 {
        (other - self).heading()
    }

    fn distance_to(&self, other: &Vec2) -> f32 {
        (other - self).norm()
    }

    fn distance_squared_to(&self, other: &Vec2) -> f32 {
        (other - self).norm_squared()
    }
}

/// Squared perpendicular distance from `point` to the infinite line through `start` and `end`
///
/// A degenerate line (coincident endpoints) falls back to the squared distance
/// from `point` to `start`.
pub fn distance_to_line_squared(start: Vec2, end: Vec2, point: Vec2) -> f32 {
    let direction = end - start;
    let length_squared = direction.norm_squared();
    if length_squared == 0.0 {
        return start.distance_squared_to(&point);
    }
    let cross = direction.x * (start.y - point.y) - (start.x - point.x) * direction.y;
    cross * cross / length_squared
}
