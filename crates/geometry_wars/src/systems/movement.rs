//! Movement, boundary handling and parent following

use vector_engine::ecs::components::TransformComponent;
use vector_engine::ecs::EntityKey;
use vector_engine::physics::Bounds;

use crate::components::{Tag, World};
use crate::Simulation;

/// The play-field rectangle from the world-bounds entity
fn world_bounds(sim: &Simulation) -> Bounds {
    sim.world
        .entities_by_tag(Tag::WorldBounds)
        .iter()
        .find_map(|key| sim.world.get(*key).and_then(|entity| entity.bounds))
        .unwrap_or_else(|| sim.settings.play_field())
}

/// Transform of a live parent
fn parent_transform(world: &World, parent: EntityKey) -> Option<TransformComponent> {
    world
        .get(parent)
        .filter(|entity| entity.is_alive())
        .and_then(|entity| entity.transform)
}

/// Move every entity by one tick
///
/// Runs as a single pass: enemies bounce off the bounds, players are clamped
/// inside them, then velocity is applied. Orbiting entities and lines are
/// placed relative to their parent, and are destroyed once the parent is gone.
pub fn run(sim: &mut Simulation) {
    let bounds = world_bounds(sim);

    for key in sim.world.entities().to_vec() {
        let Some(entity) = sim.world.get(key) else {
            continue;
        };
        if !entity.is_alive() {
            continue;
        }
        let tag = entity.tag();
        let orbit_parent = entity.orbit.map(|orbit| orbit.parent);
        let line_parent = entity.line.as_ref().map(|line| line.parent);

        let orbit_anchor = orbit_parent.map(|parent| parent_transform(&sim.world, parent));
        let line_anchor = line_parent.map(|parent| parent_transform(&sim.world, parent));
        if matches!(orbit_anchor, Some(None)) || matches!(line_anchor, Some(None)) {
            sim.world.destroy(key);
            continue;
        }

        let Some(entity) = sim.world.get_mut(key) else {
            continue;
        };
        let c = entity.components_mut();
        let Some(transform) = c.transform.as_mut() else {
            continue;
        };

        if let Some(velocity) = c.velocity.as_mut() {
            if let Some(collider) = c.collider {
                if tag == Tag::Enemies {
                    velocity.velocity =
                        bounds.bounce_velocity(transform.position, collider.radius, velocity.velocity);
                }
                if c.player_stats.is_some() {
                    velocity.velocity =
                        bounds.clamp_velocity(transform.position, collider.radius, velocity.velocity);
                }
            }
            transform.position += velocity.velocity;
        }

        if let (Some(orbit), Some(Some(anchor))) = (c.orbit.as_mut(), orbit_anchor) {
            transform.position = orbit.position_around(anchor.position, transform.rotation);
            orbit.advance();
        }

        if let Some(Some(anchor)) = line_anchor {
            transform.position = anchor.position;
            transform.rotation = anchor.rotation;
        }
    }
}
