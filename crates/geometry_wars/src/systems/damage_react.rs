//! Squash-on-hit scaling

use crate::Simulation;

/// Scale shapes and text by the decaying hit reaction
pub fn run(sim: &mut Simulation) {
    for key in sim.world.entities().to_vec() {
        let Some(entity) = sim.world.get_mut(key) else {
            continue;
        };
        let c = entity.components_mut();
        let Some(health) = c.health else {
            continue;
        };
        let scale = health.reaction_scale();
        if let Some(shape) = c.shape.as_mut() {
            shape.scale = scale;
        }
        if let Some(text) = c.text.as_mut() {
            text.scale = scale;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{flushed, simulation};
    use approx::assert_relative_eq;

    #[test]
    fn test_reaction_pops_then_settles() {
        let mut sim = simulation();
        let enemy = sim.spawn_enemy();
        flushed(&mut sim);
        {
            let health = sim.world_mut().get_mut(enemy).unwrap().health.as_mut().unwrap();
            health.hp = 10;
            health.react.reset();
        }

        run(&mut sim);
        let expansion = sim.settings().react_expansion;
        let scale = sim.world().get(enemy).unwrap().shape.as_ref().unwrap().scale;
        assert_relative_eq!(scale, expansion);

        sim.world_mut().get_mut(enemy).unwrap().health.as_mut().unwrap().react.set(0);
        run(&mut sim);
        let scale = sim.world().get(enemy).unwrap().shape.as_ref().unwrap().scale;
        assert_relative_eq!(scale, 1.0);
    }
}
