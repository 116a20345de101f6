//! Shared fixtures and cross-system scenarios


use vector_engine::config::ConfigStore;
use vector_engine::ecs::EntityKey;

use crate::Simulation;

const CONFIG: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../../resources/config.toml"));

/// A seeded simulation over the shipped default config
pub(crate) fn simulation() -> Simulation {
    vector_engine::foundation::logging::init_for_tests();
    let config = ConfigStore::from_toml_str(CONFIG).unwrap();
    Simulation::new(config).unwrap().with_seed(7)
}

/// A seeded simulation with a live player
pub(crate) fn simulation_with_player() -> (Simulation, EntityKey) {
    let mut sim = simulation();
    let player = sim.spawn_player();
    flushed(&mut sim);
    (sim, player)
}

/// Apply pending creations and destructions
pub(crate) fn flushed(sim: &mut Simulation) {
    sim.world_mut().flush();
}
