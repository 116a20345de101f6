//! Invincibility blink

use crate::Simulation;

/// Alpha for an invincibility window with `remaining` ticks left
///
/// Alternates between hidden and visible every `frequency` ticks and stays
/// visible for the final partial period.
pub fn flicker_alpha(remaining: i32, frequency: i32) -> u8 {
    let frequency = frequency.max(1);
    if remaining < frequency || (remaining / frequency) % 2 == 0 {
        u8::MAX
    } else {
        0
    }
}

/// Blink every player that is currently invincible
pub fn run(sim: &mut Simulation) {
    for key in sim.world.entities().to_vec() {
        let Some(entity) = sim.world.get_mut(key) else {
            continue;
        };
        let c = entity.components_mut();
        let (Some(stats), Some(invincibility)) = (c.player_stats, c.invincibility) else {
            continue;
        };
        let Some(shape) = c.shape.as_mut() else {
            continue;
        };
        shape.set_alpha(flicker_alpha(invincibility.timer.remaining, stats.flicker_frequency));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::simulation_with_player;

    #[test]
    fn test_flicker_alternates_by_period() {
        assert_eq!(flicker_alpha(20, 5), 255);
        assert_eq!(flicker_alpha(15, 5), 0);
        assert_eq!(flicker_alpha(10, 5), 255);
        assert_eq!(flicker_alpha(9, 5), 0);
        assert_eq!(flicker_alpha(5, 5), 0);
    }

    #[test]
    fn test_final_period_is_visible() {
        assert_eq!(flicker_alpha(4, 5), 255);
        assert_eq!(flicker_alpha(0, 5), 255);
        assert_eq!(flicker_alpha(3, 0), 0);
    }

    #[test]
    fn test_player_shape_blinks() {
        let (mut sim, player) = simulation_with_player();
        let frequency = sim.world().get(player).unwrap().player_stats.unwrap().flicker_frequency;
        sim.world_mut().get_mut(player).unwrap().invincibility.as_mut().unwrap().timer.set(frequency);

        run(&mut sim);
        assert_eq!(sim.world().get(player).unwrap().shape.as_ref().unwrap().fill.a, 0);

        sim.world_mut().get_mut(player).unwrap().invincibility.as_mut().unwrap().timer.set(0);
        run(&mut sim);
        assert_eq!(sim.world().get(player).unwrap().shape.as_ref().unwrap().fill.a, 255);
    }
}
