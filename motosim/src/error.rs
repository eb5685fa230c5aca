//! Error type shared by the configuration loader and the integral estimator
//!
//! Numeric paths in the simulation are total and never fail; the only
//! failures are reading a scenario and asking for an estimate before any
//! dense samples exist.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scenario YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Fewer than two dense samples: nothing has been simulated
    #[error("insufficient data: {points} sample(s), need at least 2")]
    InsufficientData { points: usize },
}

pub type Result<T> = std::result::Result<T, SimError>;
