//! Lifespan expiry and fade-out

use crate::Simulation;

/// Kill expired entities and fade the rest by their remaining lifespan
///
/// Expiry goes through the death handler, so timed-out shards and bullets
/// behave like ones destroyed in combat.
pub fn run(sim: &mut Simulation) {
    for key in sim.world.entities().to_vec() {
        let Some(entity) = sim.world.get_mut(key) else {
            continue;
        };
        if !entity.is_alive() {
            continue;
        }
        let c = entity.components_mut();
        let Some(lifespan) = c.lifespan else {
            continue;
        };

        if lifespan.is_expired() {
            sim.on_entity_death(key);
            continue;
        }

        let alpha = (255.0 * lifespan.fraction()) as u8;
        if let Some(shape) = c.shape.as_mut() {
            shape.set_alpha(alpha);
        }
        if let Some(line) = c.line.as_mut() {
            line.set_alpha(alpha);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Tag;
    use crate::systems::timers;
    use crate::tests::{flushed, simulation};
    use vector_engine::ecs::components::{Color, LifespanComponent, ShapeComponent, TransformComponent};
    use vector_engine::ecs::EntityKey;
    use vector_engine::foundation::math::Vec2;

    fn short_lived(sim: &mut Simulation, ticks: i32) -> EntityKey {
        let key = sim.world_mut().create(Tag::Bullets);
        let c = sim.world_mut().get_mut(key).unwrap().components_mut();
        c.transform = Some(TransformComponent::at(Vec2::new(10.0, 10.0)));
        c.shape = Some(ShapeComponent::new(4.0, 3, Color::WHITE, Color::WHITE, 1.0));
        c.lifespan = Some(LifespanComponent::new(ticks));
        flushed(sim);
        key
    }

    #[test]
    fn test_fades_with_remaining_lifespan() {
        let mut sim = simulation();
        let key = short_lived(&mut sim, 4);
        timers::run(&mut sim);
        run(&mut sim);

        let shape = sim.world().get(key).unwrap().shape.clone().unwrap();
        assert_eq!(shape.fill.a, (255.0 * 0.75) as u8);
        assert_eq!(shape.outline.a, shape.fill.a);
    }

    #[test]
    fn test_expiry_is_monotonic_then_destroys() {
        let mut sim = simulation();
        let key = short_lived(&mut sim, 3);

        let mut remaining = Vec::new();
        for _ in 0..3 {
            timers::run(&mut sim);
            remaining.push(sim.world().get(key).unwrap().lifespan.unwrap().timer.remaining);
            run(&mut sim);
        }
        assert_eq!(remaining, vec![2, 1, 0]);
        assert!(!sim.world().is_alive(key));

        flushed(&mut sim);
        assert!(sim.world().entities_by_tag(Tag::Bullets).is_empty());
    }
}
