//! Top-level simulation object and the per-tick system order

use rand::rngs::StdRng;
use rand::SeedableRng;
use vector_engine::config::ConfigStore;
use vector_engine::ecs::EntityKey;

use crate::components::{ComponentKind, Tag, World};
use crate::input::FrameInput;
use crate::render::{GlyphMetrics, MonospaceMetrics};
use crate::settings::GameSettings;
use crate::state::{SimulationState, SystemFlags};
use crate::systems;
use crate::GameError;

/// Owns the entity store, configuration, run state and RNG for one game
///
/// Systems, spawners and event handlers all operate on this object, so
/// independent instances never share state.
pub struct Simulation {
    pub(crate) world: World,
    pub(crate) config: ConfigStore,
    pub(crate) settings: GameSettings,
    pub(crate) state: SimulationState,
    pub(crate) rng: StdRng,
    pub(crate) glyphs: Box<dyn GlyphMetrics>,
}

impl Simulation {
    /// Build a simulation and spawn the static world entities
    pub fn new(config: ConfigStore) -> Result<Self, GameError> {
        let settings = GameSettings::from_config(&config)?;
        let rng = settings
            .seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        let state = SimulationState::new(&settings);

        let mut simulation = Self {
            world: World::new(),
            config,
            settings,
            state,
            rng,
            glyphs: Box::new(MonospaceMetrics::default()),
        };
        simulation.spawn_world_bounds();
        simulation.spawn_score_window();
        simulation.world.flush();

        log::info!(
            "Simulation ready: {}x{} play field, first boss at {}",
            simulation.settings.width,
            simulation.settings.height,
            simulation.state.score_to_boss
        );
        Ok(simulation)
    }

    /// Reseed the RNG for reproducible runs
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Replace the glyph metrics used for text layout
    pub fn with_glyph_metrics(mut self, glyphs: impl GlyphMetrics + 'static) -> Self {
        self.glyphs = Box::new(glyphs);
        self
    }

    /// Advance the simulation by one tick
    pub fn step(&mut self, input: &FrameInput) {
        self.world.flush();

        systems::input::user_input(self, input);
        if self.state.paused || !self.state.running {
            return;
        }

        if self.system_enabled(SystemFlags::INPUT_HANDLING) {
            systems::input::run(self);
        }
        systems::timers::run(self);
        systems::emitters::run(self);
        systems::effects::run(self);
        systems::lifespan::run(self);
        systems::damage_react::run(self);
        if self.system_enabled(SystemFlags::MOVEMENT) {
            systems::movement::run(self);
        }
        if self.system_enabled(SystemFlags::COLLISION) {
            systems::collision::run(self);
        }
        if self.system_enabled(SystemFlags::ENEMY_SPAWNER) {
            systems::spawner::enemies(self);
        }
        systems::spawner::player(self);

        self.state.frame_count += 1;
        log::trace!(
            "Tick {}: {} entities, score {}",
            self.state.frame_count,
            self.world.len(),
            self.state.score
        );
    }

    /// The entity store
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable entity store, for tools
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// The configuration table
    pub fn config(&self) -> &ConfigStore {
        &self.config
    }

    /// Mutable configuration table; edits apply to the next spawn that reads them
    pub fn config_mut(&mut self) -> &mut ConfigStore {
        &mut self.config
    }

    /// Run-wide settings captured at startup
    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// Score and difficulty counters
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Whether the frame loop should keep going
    pub fn is_running(&self) -> bool {
        self.state.running
    }

    /// Stop the frame loop after the current tick
    pub fn request_quit(&mut self) {
        self.state.running = false;
    }

    /// Suspend or resume the simulation systems
    pub fn set_paused(&mut self, paused: bool) {
        self.state.paused = paused;
    }

    /// Whether every system in `flags` is enabled
    pub fn system_enabled(&self, flags: SystemFlags) -> bool {
        self.state.systems.contains(flags)
    }

    /// Enable or disable systems
    pub fn set_system_enabled(&mut self, flags: SystemFlags, enabled: bool) {
        self.state.systems.set(flags, enabled);
        log::debug!("Systems now {:?}", self.state.systems);
    }

    /// The live player, if one exists
    pub fn player(&self) -> Option<EntityKey> {
        self.world
            .entities_by_tag(Tag::Player)
            .iter()
            .copied()
            .find(|key| self.world.is_alive(*key))
    }

    /// Number of live entities per tag
    pub fn tag_counts(&self) -> Vec<(Tag, usize)> {
        Tag::ALL
            .into_iter()
            .map(|tag| (tag, self.world.entities_by_tag(tag).len()))
            .collect()
    }

    /// Give an entity a default component of `kind`; false if absent or already present
    ///
    /// Line, orbit and emitter components follow the live player and are
    /// refused while there is none.
    pub fn add_component(&mut self, key: EntityKey, kind: ComponentKind) -> bool {
        let anchor = match self.player() {
            Some(player) => player,
            None if kind.is_parent_relative() => {
                log::warn!("No player to anchor {} to", kind.name());
                return false;
            }
            None => key,
        };
        self.world
            .get_mut(key)
            .is_some_and(|entity| entity.add_default(kind, anchor))
    }
}
