use thiserror::Error;

use super::config::ConfigError;
use super::utils::sampling::SamplingError;
use crate::core::models::error::ModelError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Chain and lattice diverged at step {step}: {source}")]
    Consistency {
        step: usize,
        #[source]
        source: ModelError,
    },

    #[error("Metropolis sampling failed: {source}")]
    Sampling {
        #[from]
        source: SamplingError,
    },

    #[error("Internal logic error: {0}")]
    Internal(String),
}
