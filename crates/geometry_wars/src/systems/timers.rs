//! Countdown decrement

use crate::Simulation;

/// Decrement every running countdown by one tick
pub fn run(sim: &mut Simulation) {
    for key in sim.world.entities().to_vec() {
        let Some(entity) = sim.world.get_mut(key) else {
            continue;
        };
        let c = entity.components_mut();
        if let Some(invincibility) = c.invincibility.as_mut() {
            invincibility.timer.tick();
        }
        if let Some(lifespan) = c.lifespan.as_mut() {
            lifespan.timer.tick();
        }
        if let Some(health) = c.health.as_mut() {
            health.react.tick();
        }
        if let Some(weapon) = c.weapon.as_mut() {
            weapon.cooldown.tick();
        }
        if let Some(special) = c.special_weapon.as_mut() {
            special.cooldown.tick();
        }
        if let Some(emitter) = c.emitter.as_mut() {
            emitter.timer.tick();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{flushed, simulation_with_player};
    use vector_engine::ecs::components::Countdown;

    #[test]
    fn test_countdowns_tick_and_stop_at_zero() {
        let (mut sim, player) = simulation_with_player();
        {
            let c = sim.world_mut().get_mut(player).unwrap().components_mut();
            c.weapon.as_mut().unwrap().cooldown = Countdown::full(2);
            c.special_weapon.as_mut().unwrap().cooldown = Countdown::full(1);
            c.invincibility.as_mut().unwrap().timer.set(3);
        }

        run(&mut sim);
        run(&mut sim);
        run(&mut sim);

        let entity = sim.world().get(player).unwrap();
        assert_eq!(entity.weapon.unwrap().cooldown.remaining, 0);
        assert_eq!(entity.special_weapon.unwrap().cooldown.remaining, 0);
        assert_eq!(entity.invincibility.unwrap().timer.remaining, 0);
    }

    #[test]
    fn test_pending_entities_wait_for_flush() {
        let (mut sim, _) = simulation_with_player();
        let enemy = sim.spawn_enemy();
        let before = sim.world().get(enemy).unwrap().invincibility.unwrap().timer.remaining;
        run(&mut sim);
        assert_eq!(sim.world().get(enemy).unwrap().invincibility.unwrap().timer.remaining, before);

        flushed(&mut sim);
        run(&mut sim);
        assert_eq!(sim.world().get(enemy).unwrap().invincibility.unwrap().timer.remaining, before - 1);
    }
}
