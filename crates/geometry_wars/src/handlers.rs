//! Combat side effects: hits, deaths, score, pickups and game over

use vector_engine::ecs::EntityKey;

use crate::components::{FireMode, Tag};
use crate::Simulation;

impl Simulation {
    /// Resolve one hit against `key`
    ///
    /// Entities without health ignore hits. A hit restarts the squash reaction
    /// and any invincibility window before taking a hit point.
    pub fn on_entity_hit(&mut self, key: EntityKey) {
        let Some(entity) = self.world.get_mut(key) else {
            return;
        };
        let c = entity.components_mut();
        let Some(health) = c.health.as_mut() else {
            return;
        };
        health.react.reset();
        health.hp -= 1;
        let dead = health.hp <= 0;
        if let Some(invincibility) = c.invincibility.as_mut() {
            invincibility.timer.reset();
        }

        if dead {
            self.on_entity_death(key);
        }
    }

    /// Run death effects for `key` and mark it destroyed
    ///
    /// Calling this on an entity that is already destroyed does nothing.
    pub fn on_entity_death(&mut self, key: EntityKey) {
        let Some(entity) = self.world.get(key) else {
            return;
        };
        if !entity.is_alive() {
            return;
        }
        let transform = entity.transform;
        let shards = entity.death_spawner.clone();
        let pickup = entity.pickup_spawner.clone();
        let reward = entity.score_reward;
        let is_player = entity.player_stats.is_some();

        if let Some(transform) = transform {
            if let Some(shards) = shards {
                self.spawn_small_entities(transform.position, &shards);
            }
            if let Some(pickup) = pickup {
                self.spawn_pickup(transform.position, &pickup);
                self.state.ratchet_spawn_interval(self.settings.enemy_spawn_multiplier);
                log::debug!("Enemy spawn interval now {}", self.state.enemy_spawn_interval);
            }
        }
        if let Some(reward) = reward {
            self.award_score(reward.value);
        }

        self.world.destroy(key);
        if is_player {
            self.on_player_death();
        }
    }

    /// Add points, refresh the label and spawn a boss on crossing the threshold
    pub fn award_score(&mut self, points: i64) {
        self.state.score += points;
        self.update_score_display();
        if self.state.score >= self.state.score_to_boss {
            self.spawn_boss();
            self.state.escalate_boss_threshold(self.settings.score_to_boss_mult);
            log::info!("Next boss at {}", self.state.score_to_boss);
        }
    }

    /// Apply a weapon pickup to the player
    ///
    /// The equipped mode levels up until max power, then pays a score bonus.
    /// A different mode switches both weapons and drops power to zero.
    pub fn on_pickup(&mut self, mode: FireMode) {
        let Some(player) = self.player() else {
            return;
        };
        let max_power = self.settings.max_power;
        let Some(entity) = self.world.get_mut(player) else {
            return;
        };
        let c = entity.components_mut();
        let (Some(weapon), Some(special)) = (c.weapon.as_mut(), c.special_weapon.as_mut()) else {
            return;
        };

        if weapon.mode != mode {
            weapon.mode = mode;
            weapon.power = 0;
            special.mode = mode.paired_special();
            special.power = 0;
            log::info!("Switched to {:?} with {:?}", mode, special.mode);
        } else if weapon.power < max_power {
            weapon.power += 1;
            special.power = (special.power + 1).min(max_power);
            log::debug!("{:?} powered up to {}", mode, weapon.power);
        } else {
            let bonus = self.settings.max_power_bonus;
            self.award_score(bonus);
        }
    }

    fn on_player_death(&mut self) {
        self.state.lives -= 1;
        self.state.player_spawn_countdown = self.settings.player_spawn_interval;
        log::info!("Player lost, {} lives left", self.state.lives);
        if self.state.lives <= 0 {
            self.on_game_over();
        }
    }

    /// Clear the field and restart score and difficulty
    pub fn on_game_over(&mut self) {
        log::info!("Game over with score {}", self.state.score);
        for tag in [Tag::Enemies, Tag::Bullets, Tag::Pickups, Tag::Emitters] {
            for key in self.world.entities_by_tag(tag).to_vec() {
                self.world.destroy(key);
            }
        }
        let dropped = self.world.clear_scheduled();
        if dropped > 0 {
            log::debug!("Dropped {} queued entities", dropped);
        }
        self.state.reset_run(&self.settings);
        self.update_score_display();
    }
}
