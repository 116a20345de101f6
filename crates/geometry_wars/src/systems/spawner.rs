//! Timed enemy and player spawns

use crate::Simulation;

/// Release queued letters, queue the tutorial once and spawn enemies on a timer
///
/// One scheduled entity is released every `sequenceSpawnDelay` frames.
pub fn enemies(sim: &mut Simulation) {
    let delay = u64::try_from(sim.settings.sequence_spawn_delay.max(1)).unwrap_or(1);
    if sim.state.frame_count % delay == 0 {
        sim.world.release_next_scheduled();
    }

    if !sim.state.tutorial_spawned {
        sim.spawn_tutorial();
    }

    if sim.state.enemy_spawn_countdown <= 0 {
        sim.spawn_enemy();
        sim.state.enemy_spawn_countdown = sim.state.enemy_spawn_interval;
    }
    sim.state.enemy_spawn_countdown -= 1;
}

/// Respawn the player once the respawn countdown has run out
pub fn player(sim: &mut Simulation) {
    if sim.player().is_some() {
        return;
    }
    if sim.state.player_spawn_countdown > 0 {
        sim.state.player_spawn_countdown -= 1;
        return;
    }
    sim.spawn_player();
    sim.state.player_spawn_countdown = sim.settings.player_spawn_interval;
}
