use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileAnnealingConfig {
    pub t_start: Option<f64>,
    pub t_end: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileEnergyConfig {
    pub alpha: Option<f64>,
    pub eps_hh: Option<f64>,
    pub eps_hp: Option<f64>,
    pub eps_pp: Option<f64>,
    pub eps_q: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileMovesConfig {
    pub pivot_probability: Option<f64>,
    pub crankshaft_probability: Option<f64>,
}

/// Contents of a run configuration file. Every key is optional.
///
/// ```toml
/// steps = 2000
/// seed = 7
/// runs = 4
/// residues = "amino-acids.toml"
///
/// [annealing]
/// t-start = 2.0
/// t-end = 0.5
///
/// [energy]
/// eps-hh = 1.2
///
/// [moves]
/// pivot-probability = 0.3
/// ```
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    pub steps: Option<usize>,
    pub seed: Option<u64>,
    pub runs: Option<u64>,
    /// Residue property table, relative to the configuration file.
    pub residues: Option<PathBuf>,
    pub annealing: Option<FileAnnealingConfig>,
    pub energy: Option<FileEnergyConfig>,
    pub moves: Option<FileMovesConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;

        if let (Some(residues), Some(dir)) = (config.residues.take(), path.parent()) {
            config.residues = Some(if residues.is_relative() {
                dir.join(residues)
            } else {
                residues
            });
        }
        Ok(config)
    }
}
