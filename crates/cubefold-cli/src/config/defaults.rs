use cubefold::core::forcefield::params::EnergyParams;
use cubefold::core::moves::generator::MoveConfig;
use cubefold::engine::config::{DEFAULT_SEED, DEFAULT_STEPS, DEFAULT_T_END, DEFAULT_T_START};

pub struct DefaultsConfig {
    pub steps: usize,
    pub seed: u64,
    pub runs: u64,
    pub t_start: f64,
    pub t_end: f64,
    pub energy: EnergyParams,
    pub moves: MoveConfig,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
            seed: DEFAULT_SEED,
            runs: 1,
            t_start: DEFAULT_T_START,
            t_end: DEFAULT_T_END,
            energy: EnergyParams::default(),
            moves: MoveConfig::default(),
        }
    }
}
