//! Persistence of run output.
//!
//! Folded structures are stored as CSV tables with one residue per row, run logs as JSON
//! documents carrying the full trajectory. Both formats share the [`traits::RecordFile`]
//! interface.

pub mod log;
pub mod structure;
pub mod traits;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Inconsistent data: {0}")]
    Inconsistency(String),
}
