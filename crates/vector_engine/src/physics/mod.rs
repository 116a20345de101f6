//! Physics module
//!
//! Intersection tests and play-field boundary responses. Everything here is a
//! pure function of positions, radii and velocities.

pub mod collision;
pub mod bounds;

pub use collision::{circles_collide, line_intersects_circle};
pub use bounds::Bounds;
