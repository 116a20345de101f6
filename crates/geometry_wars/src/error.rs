//! Game error types

use vector_engine::config::ConfigError;

/// Errors that end a run or prevent it from starting
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Settings loaded but unusable
    #[error("Invalid settings: {0}")]
    Settings(String),

    /// The render surface rejected a frame
    #[error("Surface error: {0}")]
    Surface(String),
}
