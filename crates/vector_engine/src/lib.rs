//! # Vector Engine
//!
//! Building blocks for frame-stepped 2D arcade games drawn with vector shapes.
//!
//! ## Features
//!
//! - **Entity Store**: tag-indexed entities with deferred creation and destruction
//! - **2D Math**: `Vec2` helpers for rotation, angles and line distances
//! - **Collision**: circle and infinite-line intersection tests, play-field bounds
//! - **Configuration**: sectioned key-value settings loaded from TOML or RON
//!
//! ## Quick Start
//!
//! ```rust
//! use vector_engine::prelude::*;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
//! enum Tag { Ship, Rock }
//!
//! #[derive(Default)]
//! struct Slots { transform: Option<TransformComponent> }
//!
//! let mut store: EntityStore<Tag, Slots> = EntityStore::new();
//! let ship = store.create(Tag::Ship);
//! if let Some(entity) = store.get_mut(ship) {
//!     entity.transform = Some(TransformComponent::at(Vec2::new(10.0, 20.0)));
//! }
//! assert!(store.entities().is_empty());
//! store.flush();
//! assert_eq!(store.entities_by_tag(Tag::Ship), &[ship]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod ecs;
pub mod physics;
pub mod config;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        foundation::{
            math::{Vec2, Vec2Ext},
            time::Timer,
        },
        ecs::{Entity, EntityId, EntityKey, EntityStore},
        ecs::components::{
            Color, ColliderComponent, Countdown, EmitterComponent, InvincibilityComponent,
            InvincibilityStart, LifespanComponent, LineComponent, OrbitComponent,
            ShapeComponent, TextComponent, TransformComponent, VelocityComponent,
        },
        physics::{Bounds, circles_collide, line_intersects_circle},
        config::{ConfigError, ConfigReader, ConfigStore, LookupError},
    };
}
