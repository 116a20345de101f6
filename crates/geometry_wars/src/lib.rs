//! # Geometry Wars
//!
//! Runtime core of a twin-stick arena shooter: the player flies inside a
//! bounded field, enemies spawn on a shrinking timer, bosses drop weapon
//! pickups and every kill shatters into smaller pieces.
//!
//! The core is frame-stepped and single-threaded. A [`Simulation`] owns the
//! entity store, the configuration and the run state; [`Simulation::step`]
//! advances it by one tick and [`Simulation::render_frame`] flattens it into
//! draw commands. [`GameLoop`] drives both against any [`RenderSurface`] and
//! [`InputSource`].
//!
//! ```rust,no_run
//! use geometry_wars::{GameLoop, HeadlessSurface, IdleInput, Simulation};
//! use vector_engine::config::ConfigStore;
//!
//! let config = ConfigStore::load_from_file("resources/config.toml")?;
//! let simulation = Simulation::new(config)?;
//! let (width, height) = (simulation.settings().width, simulation.settings().height);
//! let mut game = GameLoop::new(simulation, HeadlessSurface::new(width, height), IdleInput)
//!     .with_frame_limit(600);
//! let summary = game.run()?;
//! println!("score {}", summary.score);
//! # Ok::<(), geometry_wars::GameError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod app;
pub mod components;
pub mod error;
pub mod input;
pub mod render;
pub mod settings;
pub mod simulation;
pub mod state;
pub mod systems;

mod handlers;
mod spawn;
mod weapons;

#[cfg(test)]
mod tests;

pub use app::{GameLoop, RunSummary};
pub use components::{ComponentKind, FireMode, SpecialMode, Tag};
pub use error::GameError;
pub use input::{AutopilotInput, FrameInput, IdleInput, InputSource, ScriptedInput};
pub use render::{DrawCommand, GlyphMetrics, HeadlessSurface, MonospaceMetrics, RenderFrame, RenderSurface};
pub use settings::GameSettings;
pub use simulation::Simulation;
pub use state::{SimulationState, SystemFlags};
