use cubefold::core::io::IoError;
use cubefold::core::properties::table::PropertyLoadError;
use cubefold::engine::error::EngineError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    CubeFold(#[from] EngineError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Properties(#[from] PropertyLoadError),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to write '{path}': {source}", path = path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: IoError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
