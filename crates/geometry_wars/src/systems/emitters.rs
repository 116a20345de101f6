//! Particle emission

use crate::Simulation;

/// Emit particles from every running emitter and remove finished ones
///
/// An emitter whose parent is gone is removed along with finished ones.
pub fn run(sim: &mut Simulation) {
    for key in sim.world.entities().to_vec() {
        let Some(entity) = sim.world.get(key) else {
            continue;
        };
        if !entity.is_alive() {
            continue;
        }
        let Some(emitter) = entity.emitter.as_ref() else {
            continue;
        };
        let parent = sim
            .world
            .get(emitter.parent)
            .filter(|parent| parent.is_alive())
            .and_then(|parent| parent.transform);

        let Some(parent) = parent.filter(|_| emitter.timer.is_active()) else {
            sim.world.destroy(key);
            continue;
        };
        if !emitter.should_emit() {
            continue;
        }

        let emitter = emitter.clone();
        for _ in 0..emitter.quantity {
            sim.spawn_particle(&emitter, &parent);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{SpecialMode, Tag};
    use crate::tests::{flushed, simulation_with_player};
    use crate::systems::timers;
    use vector_engine::ecs::EntityKey;

    fn flamethrower(sim: &mut Simulation, player: EntityKey) -> EntityKey {
        sim.world_mut().get_mut(player).unwrap().special_weapon.as_mut().unwrap().mode = SpecialMode::Flamethrower;
        sim.shoot_special(player);
        flushed(sim);
        sim.world().entities_by_tag(Tag::Emitters)[0]
    }

    #[test]
    fn test_emits_quantity_per_firing_tick() {
        let (mut sim, player) = simulation_with_player();
        let emitter = flamethrower(&mut sim, player);
        let component = sim.world().get(emitter).unwrap().emitter.clone().unwrap();
        sim.world_mut().get_mut(emitter).unwrap().emitter.as_mut().unwrap().frequency = 1;

        run(&mut sim);
        flushed(&mut sim);
        let particles = sim.world().entities_by_tag(Tag::Bullets);
        assert_eq!(particles.len(), component.quantity as usize);
        for key in particles {
            let particle = sim.world().get(*key).unwrap();
            assert!(particle.health.is_none());
            assert!(particle.lifespan.unwrap().timer.remaining >= component.lifespan);
        }
    }

    #[test]
    fn test_finished_emitter_is_destroyed() {
        let (mut sim, player) = simulation_with_player();
        let emitter = flamethrower(&mut sim, player);
        let duration = sim.world().get(emitter).unwrap().emitter.as_ref().unwrap().timer.duration;

        for _ in 0..duration {
            timers::run(&mut sim);
        }
        run(&mut sim);
        assert!(!sim.world().is_alive(emitter));
    }

    #[test]
    fn test_orphaned_emitter_is_destroyed() {
        let (mut sim, player) = simulation_with_player();
        let emitter = flamethrower(&mut sim, player);
        sim.world_mut().destroy(player);

        run(&mut sim);
        assert!(!sim.world().is_alive(emitter));
        flushed(&mut sim);
        assert!(sim.world().entities_by_tag(Tag::Bullets).is_empty());
    }
}
