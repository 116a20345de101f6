//! Run-wide counters threaded through every system

use bitflags::bitflags;
use vector_engine::ecs::components::Countdown;

use crate::settings::GameSettings;

bitflags! {
    /// Systems that can be switched off individually
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SystemFlags: u32 {
        /// Movement, bounce, clamp, orbit and line tracking
        const MOVEMENT = 1 << 0;
        /// Collision detection and hit resolution
        const COLLISION = 1 << 1;
        /// Turning player input into motion and fire
        const INPUT_HANDLING = 1 << 2;
        /// Submitting frames to the render surface
        const RENDER = 1 << 3;
        /// Timed enemy spawns
        const ENEMY_SPAWNER = 1 << 4;
    }
}

impl Default for SystemFlags {
    fn default() -> Self {
        Self::all()
    }
}

/// Score, difficulty and loop-control state for one run
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    /// Points scored this run
    pub score: i64,
    /// Score at which the next boss appears
    pub score_to_boss: i64,
    /// Current gap between boss thresholds
    pub score_to_boss_base: i64,
    /// Ticks between enemy spawns
    pub enemy_spawn_interval: i32,
    /// Ticks until the next enemy spawn
    pub enemy_spawn_countdown: i32,
    /// Ticks until the player respawns
    pub player_spawn_countdown: i32,
    /// Lives left in this run
    pub lives: i32,
    /// Ticks simulated so far
    pub frame_count: u64,
    /// Whether the tutorial text has been queued
    pub tutorial_spawned: bool,
    /// Armed window of the two-press quit gesture
    pub close_countdown: Countdown,
    /// Whether simulation systems are suspended
    pub paused: bool,
    /// Cleared to end the frame loop
    pub running: bool,
    /// Enabled systems
    pub systems: SystemFlags,
}

impl SimulationState {
    /// Fresh run state
    pub fn new(settings: &GameSettings) -> Self {
        Self {
            score: 0,
            score_to_boss: settings.score_to_boss,
            score_to_boss_base: settings.score_to_boss,
            enemy_spawn_interval: settings.enemy_spawn_interval,
            enemy_spawn_countdown: 0,
            player_spawn_countdown: 0,
            lives: settings.lives,
            frame_count: 0,
            tutorial_spawned: false,
            close_countdown: Countdown::spent(settings.close_timeout),
            paused: false,
            running: true,
            systems: SystemFlags::default(),
        }
    }

    /// Restore score and difficulty after a game over, keeping loop control
    pub fn reset_run(&mut self, settings: &GameSettings) {
        self.score = 0;
        self.score_to_boss = settings.score_to_boss;
        self.score_to_boss_base = settings.score_to_boss;
        self.enemy_spawn_interval = settings.enemy_spawn_interval;
        self.lives = settings.lives;
    }

    /// Raise the boss threshold after a boss spawn
    ///
    /// The step grows by `mult` each time and is measured from the current score.
    pub fn escalate_boss_threshold(&mut self, mult: f32) {
        self.score_to_boss_base = (self.score_to_boss_base as f32 * mult).round() as i64;
        self.score_to_boss = self.score + self.score_to_boss_base;
    }

    /// Shorten the enemy spawn interval after a boss kill
    pub fn ratchet_spawn_interval(&mut self, mult: f32) {
        let next = (self.enemy_spawn_interval as f32 * mult) as i32;
        self.enemy_spawn_interval = next.min(self.enemy_spawn_interval).max(1);
    }
}
