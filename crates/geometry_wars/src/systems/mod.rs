//! Per-tick systems
//!
//! Each system is a free function over the [`Simulation`](crate::Simulation)
//! and runs in the order fixed by `Simulation::step`. Systems collect the keys
//! they visit up front, so entities created while a system runs are only seen
//! after the next flush.

pub mod collision;
pub mod damage_react;
pub mod effects;
pub mod emitters;
pub mod input;
pub mod lifespan;
pub mod movement;
pub mod spawner;
pub mod timers;
