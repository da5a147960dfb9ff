use crate::core::forcefield::params::EnergyParams;
use crate::core::moves::generator::MoveConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_STEPS: usize = 1000;
pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_T_START: f64 = 2.0;
pub const DEFAULT_T_END: f64 = 0.5;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Number of steps must be positive (got {0})")]
    InvalidSteps(usize),
    #[error("Invalid temperatures: start {t_start}, end {t_end} (need start >= end > 0)")]
    InvalidTemperature { t_start: f64, t_end: f64 },
    #[error("Probability '{name}' must lie in [0, 1] (got {value})")]
    InvalidProbability { name: &'static str, value: f64 },
    #[error("Energy parameter '{name}' must be finite (got {value})")]
    NonFiniteParameter { name: &'static str, value: f64 },
    #[error("Sequence is empty")]
    EmptySequence,
    #[error("Unknown residue '{symbol}' at position {position}")]
    UnknownResidue { symbol: char, position: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnealingConfig {
    pub t_start: f64,
    pub t_end: f64,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            t_start: DEFAULT_T_START,
            t_end: DEFAULT_T_END,
        }
    }
}

/// Parameters of one folding run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoldingConfig {
    pub steps: usize,
    pub seed: u64,
    /// Offsets the seed and tags the run as `run_{id}`.
    pub run_id: Option<u64>,
    pub annealing: AnnealingConfig,
    pub energy: EnergyParams,
    pub moves: MoveConfig,
}

impl FoldingConfig {
    /// Seed of the run's random stream: `seed + run_id`, wrapping on overflow.
    pub fn effective_seed(&self) -> u64 {
        self.seed.wrapping_add(self.run_id.unwrap_or(0))
    }

    pub fn run_tag(&self) -> Option<String> {
        self.run_id.map(|id| format!("run_{id}"))
    }

    /// Same parameters for another run of a batch.
    pub fn for_run(&self, run_id: u64) -> Self {
        Self {
            run_id: Some(run_id),
            ..self.clone()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.steps == 0 {
            return Err(ConfigError::InvalidSteps(self.steps));
        }

        let AnnealingConfig { t_start, t_end } = self.annealing;
        let temperatures_ok =
            t_start.is_finite() && t_end.is_finite() && t_end > 0.0 && t_start >= t_end;
        if !temperatures_ok {
            return Err(ConfigError::InvalidTemperature { t_start, t_end });
        }

        for (name, value) in self.energy.named() {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteParameter { name, value });
            }
        }

        for (name, value) in [
            ("pivot_probability", self.moves.pivot_probability),
            ("crankshaft_probability", self.moves.crankshaft_probability),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidProbability { name, value });
            }
        }

        Ok(())
    }
}

/// Builds a validated [`FoldingConfig`]. Every parameter not set keeps its default.
#[derive(Default)]
pub struct FoldingConfigBuilder {
    steps: Option<usize>,
    seed: Option<u64>,
    run_id: Option<u64>,
    annealing: AnnealingConfig,
    energy: EnergyParams,
    moves: MoveConfig,
}

impl FoldingConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn steps(mut self, steps: usize) -> Self {
        self.steps = Some(steps);
        self
    }
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
    pub fn run_id(mut self, run_id: u64) -> Self {
        self.run_id = Some(run_id);
        self
    }
    pub fn t_start(mut self, t_start: f64) -> Self {
        self.annealing.t_start = t_start;
        self
    }
    pub fn t_end(mut self, t_end: f64) -> Self {
        self.annealing.t_end = t_end;
        self
    }
    pub fn energy(mut self, energy: EnergyParams) -> Self {
        self.energy = energy;
        self
    }
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.energy.alpha = alpha;
        self
    }
    pub fn eps_hh(mut self, value: f64) -> Self {
        self.energy.eps_hh = value;
        self
    }
    pub fn eps_hp(mut self, value: f64) -> Self {
        self.energy.eps_hp = value;
        self
    }
    pub fn eps_pp(mut self, value: f64) -> Self {
        self.energy.eps_pp = value;
        self
    }
    pub fn eps_q(mut self, value: f64) -> Self {
        self.energy.eps_q = value;
        self
    }
    pub fn pivot_probability(mut self, p: f64) -> Self {
        self.moves.pivot_probability = p;
        self
    }
    pub fn crankshaft_probability(mut self, p: f64) -> Self {
        self.moves.crankshaft_probability = p;
        self
    }

    pub fn build(self) -> Result<FoldingConfig, ConfigError> {
        let config = FoldingConfig {
            steps: self.steps.unwrap_or(DEFAULT_STEPS),
            seed: self.seed.unwrap_or(DEFAULT_SEED),
            run_id: self.run_id,
            annealing: self.annealing,
            energy: self.energy,
            moves: self.moves,
        };
        config.validate()?;
        Ok(config)
    }
}
