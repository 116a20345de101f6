//! Startup settings read once from the config store
//!
//! Per-spawn tuning (enemy sizes, weapon profiles) is read at spawn time so
//! that edits made through the config store take effect immediately. Only the
//! values that shape the run as a whole are captured here.

use vector_engine::config::ConfigReader;
use vector_engine::physics::Bounds;

use crate::GameError;

/// Run-wide settings
#[derive(Debug, Clone, PartialEq)]
pub struct GameSettings {
    /// Play-field width in pixels
    pub width: f32,
    /// Play-field height in pixels
    pub height: f32,
    /// Target ticks per second
    pub framerate: u32,
    /// Spawn-free margin along the play-field edges
    pub border: f32,
    /// Default log filter
    pub log_level: String,
    /// Fixed RNG seed, if configured
    pub seed: Option<u64>,
    /// Ticks between enemy spawns at the start of a run
    pub enemy_spawn_interval: i32,
    /// Factor applied to the enemy spawn interval per boss kill
    pub enemy_spawn_multiplier: f32,
    /// Ticks before a dead player respawns
    pub player_spawn_interval: i32,
    /// Ticks between releases of scheduled entities
    pub sequence_spawn_delay: i32,
    /// Score needed for the first boss
    pub score_to_boss: i64,
    /// Growth factor of the boss score step
    pub score_to_boss_mult: f32,
    /// Highest weapon power level
    pub max_power: u32,
    /// Points for collecting a maxed weapon again
    pub max_power_bonus: i64,
    /// Lives per run
    pub lives: i32,
    /// Hit reaction length in ticks
    pub react_duration: i32,
    /// Hit reaction peak scale
    pub react_expansion: f32,
    /// Ticks the quit confirmation stays armed
    pub close_timeout: i32,
    /// Visual spin of shapes in degrees per tick
    pub shape_rotation: f32,
}

impl GameSettings {
    /// Read settings, rejecting a config without a usable play field
    pub fn from_config(config: &impl ConfigReader) -> Result<Self, GameError> {
        let width = config.read_float("Window", "width");
        let height = config.read_float("Window", "height");
        if width <= 0.0 || height <= 0.0 {
            return Err(GameError::Settings(format!(
                "play field must have a positive size, got {width}x{height}"
            )));
        }

        let settings = Self {
            width,
            height,
            framerate: u32::try_from(config.read_int("Window", "framerate")).unwrap_or(0),
            border: config.read_float("Window", "border").max(0.0),
            log_level: match config.read_string("Global", "logLevel") {
                level if level.is_empty() => "info".to_string(),
                level => level,
            },
            seed: config
                .try_read_int("Global", "seed")
                .ok()
                .and_then(|seed| u64::try_from(seed).ok()),
            enemy_spawn_interval: config.read_int("Global", "enemySpawnInterval"),
            enemy_spawn_multiplier: config.read_float("Global", "enemySpawnMultiplier"),
            player_spawn_interval: config.read_int("Global", "playerSpawnInterval"),
            sequence_spawn_delay: config.read_int("Global", "sequenceSpawnDelay"),
            score_to_boss: i64::from(config.read_int("Global", "scoreToBoss")),
            score_to_boss_mult: config.read_float("Global", "scoreToBossMult"),
            max_power: u32::try_from(config.read_int("Global", "maxPower")).unwrap_or(0),
            max_power_bonus: i64::from(config.read_int("Global", "maxPowerBonus")),
            lives: config.read_int("Global", "lives"),
            react_duration: config.read_int("Global", "reactDuration"),
            react_expansion: config.read_float("Global", "reactExpansion"),
            close_timeout: config.read_int("Global", "closeTimeout"),
            shape_rotation: config.read_float("Global", "shapeRotation"),
        };
        log::debug!("Settings: {:?}", settings);
        Ok(settings)
    }

    /// The play-field rectangle with its spawn border
    pub fn play_field(&self) -> Bounds {
        Bounds::new(0.0, 0.0, self.width, self.height).with_border(self.border)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vector_engine::config::ConfigStore;

    #[test]
    fn test_missing_window_is_fatal() {
        let config = ConfigStore::from_toml_str("[Global]\nlives = 3\n").unwrap();
        assert!(matches!(GameSettings::from_config(&config), Err(GameError::Settings(_))));
    }

    #[test]
    fn test_degraded_values_do_not_fail() {
        let config = ConfigStore::from_toml_str("[Window]\nwidth = 640\nheight = 480\n").unwrap();
        let settings = GameSettings::from_config(&config).unwrap();
        assert_eq!(settings.lives, -1);
        assert_eq!(settings.max_power, 0);
        assert_eq!(settings.seed, None);
        assert_eq!(settings.play_field().right(), 640.0);
    }
}
