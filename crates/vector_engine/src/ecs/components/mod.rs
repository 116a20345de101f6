//! ECS Components module
//!
//! Domain-neutral component kinds. Each one is a plain attribute bag; the
//! behavior lives in the systems that read them.

pub mod transform;
pub mod movement;
pub mod collision;
pub mod countdown;
pub mod lifetime;
pub mod renderable;
pub mod orbit;
pub mod emitter;

pub use transform::TransformComponent;
pub use movement::VelocityComponent;
pub use collision::ColliderComponent;
pub use countdown::Countdown;
pub use lifetime::{LifespanComponent, InvincibilityComponent, InvincibilityStart};
pub use renderable::{Color, ShapeComponent, LineComponent, TextComponent};
pub use orbit::OrbitComponent;
pub use emitter::EmitterComponent;
