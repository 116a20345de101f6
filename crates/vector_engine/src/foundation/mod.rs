//! Math, frame timing and logging shared by the rest of the engine

pub mod logging;
pub mod math;
pub mod time;
