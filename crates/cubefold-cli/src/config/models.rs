use cubefold::engine::config::FoldingConfig;
use std::path::PathBuf;

/// Fully resolved inputs of a `fold` invocation.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub sequence: String,
    pub residues_path: Option<PathBuf>,
    pub runs: u64,
    pub output_dir: PathBuf,
    pub folding: FoldingConfig,
}
