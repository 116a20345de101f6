//! Player control

use vector_engine::foundation::math::Vec2Ext;

use crate::input::FrameInput;
use crate::Simulation;

/// Apply window and loop-control intents, then hand the rest to the player
///
/// Runs even while paused so the pause and quit gestures stay responsive.
/// The first quit press arms a countdown; a second press before it runs out
/// ends the loop.
pub fn user_input(sim: &mut Simulation, input: &FrameInput) {
    sim.state.close_countdown.tick();

    if input.close_requested {
        log::info!("Window closed");
        sim.state.running = false;
    }
    if input.quit_pressed {
        if sim.state.close_countdown.is_active() {
            log::info!("Quit confirmed");
            sim.state.running = false;
        } else {
            sim.state.close_countdown.reset();
            log::info!("Press quit again to exit");
        }
    }
    if input.pause_toggled {
        sim.state.paused = !sim.state.paused;
        log::info!("{}", if sim.state.paused { "Paused" } else { "Resumed" });
    }

    let Some(player) = sim.player() else {
        return;
    };
    if let Some(control) = sim.world.get_mut(player).and_then(|entity| entity.input.as_mut()) {
        control.axis = input.axis;
        control.cursor = input.cursor;
        control.fire = input.fire;
        control.secondary_fire = input.secondary_fire;
    }
}

/// Turn players toward the cursor, set their velocity and fire
pub fn run(sim: &mut Simulation) {
    for key in sim.world.entities().to_vec() {
        let Some(entity) = sim.world.get_mut(key) else {
            continue;
        };
        if !entity.is_alive() {
            continue;
        }
        let c = entity.components_mut();
        let (Some(control), Some(stats)) = (c.input, c.player_stats) else {
            continue;
        };
        let Some(transform) = c.transform.as_mut() else {
            continue;
        };

        if control.cursor != transform.position {
            transform.rotation = transform.position.angle_to(&control.cursor);
        }
        if let Some(velocity) = c.velocity.as_mut() {
            velocity.velocity = control.axis * stats.speed;
        }

        if control.fire {
            sim.shoot(key);
        }
        if control.secondary_fire {
            sim.shoot_special(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Tag;
    use crate::tests::{flushed, simulation_with_player};
    use approx::assert_relative_eq;
    use vector_engine::foundation::math::{constants::PI, Vec2};

    #[test]
    fn test_quit_needs_two_presses() {
        let (mut sim, _) = simulation_with_player();
        let press = FrameInput {
            quit_pressed: true,
            ..FrameInput::default()
        };

        user_input(&mut sim, &press);
        assert!(sim.is_running());
        user_input(&mut sim, &FrameInput::default());
        user_input(&mut sim, &press);
        assert!(!sim.is_running());
    }

    #[test]
    fn test_quit_window_expires() {
        let (mut sim, _) = simulation_with_player();
        let press = FrameInput {
            quit_pressed: true,
            ..FrameInput::default()
        };

        user_input(&mut sim, &press);
        for _ in 0..sim.settings().close_timeout {
            user_input(&mut sim, &FrameInput::default());
        }
        user_input(&mut sim, &press);
        assert!(sim.is_running());
    }

    #[test]
    fn test_close_and_pause() {
        let (mut sim, _) = simulation_with_player();
        user_input(&mut sim, &FrameInput { pause_toggled: true, ..FrameInput::default() });
        assert!(sim.state().paused);
        user_input(&mut sim, &FrameInput { pause_toggled: true, ..FrameInput::default() });
        assert!(!sim.state().paused);
        user_input(&mut sim, &FrameInput { close_requested: true, ..FrameInput::default() });
        assert!(!sim.is_running());
    }

    #[test]
    fn test_player_aims_moves_and_fires() {
        let (mut sim, player) = simulation_with_player();
        let origin = sim.world().get(player).unwrap().transform.unwrap().position;
        let input = FrameInput {
            axis: Vec2::new(0.0, -1.0),
            cursor: origin + Vec2::new(-100.0, 0.0),
            fire: true,
            ..FrameInput::default()
        };

        user_input(&mut sim, &input);
        run(&mut sim);
        flushed(&mut sim);

        let entity = sim.world().get(player).unwrap();
        let speed = entity.player_stats.unwrap().speed;
        assert_relative_eq!(entity.transform.unwrap().rotation.abs(), PI, epsilon = 1e-5);
        assert_relative_eq!(entity.velocity.unwrap().velocity.y, -speed);
        assert_eq!(sim.world().entities_by_tag(Tag::Bullets).len(), 1);
    }
}
