use crate::core::models::trajectory::{TrajectoryStep, accepted_move_counts, minimum_energy};
use crate::core::moves::MoveKind;
use serde::Serialize;
use std::collections::BTreeMap;

/// Summary figures of one run, derived from its trajectory alone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunStatistics {
    pub steps: usize,
    pub initial_energy: f64,
    pub final_energy: f64,
    pub min_energy: f64,
    pub min_step: Option<usize>,
    pub acceptance_rate: f64,
    pub move_counts: BTreeMap<MoveKind, usize>,
}

impl RunStatistics {
    /// An empty trajectory yields zero energies, no minimum step and a zero acceptance rate.
    pub fn from_trajectory(trajectory: &[TrajectoryStep]) -> Self {
        let initial_energy = trajectory.first().map_or(0.0, |s| s.total_energy);
        let final_energy = trajectory.last().map_or(0.0, |s| s.total_energy);
        let (min_step, min_energy) = match minimum_energy(trajectory) {
            Some((step, energy)) => (Some(step), energy),
            None => (None, 0.0),
        };
        let accepted = trajectory.iter().filter(|s| s.accepted).count();
        let acceptance_rate = if trajectory.is_empty() {
            0.0
        } else {
            accepted as f64 / trajectory.len() as f64
        };

        Self {
            steps: trajectory.len(),
            initial_energy,
            final_energy,
            min_energy,
            min_step,
            acceptance_rate,
            move_counts: accepted_move_counts(trajectory),
        }
    }

    pub fn energy_change(&self) -> f64 {
        self.final_energy - self.initial_energy
    }
}

/// Mean and population standard deviation of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Spread {
    pub mean: f64,
    pub std_dev: f64,
}

impl Spread {
    pub fn of(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        Self {
            mean,
            std_dev: variance.sqrt(),
        }
    }
}

/// Aggregate over several independent runs of the same sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchStatistics {
    pub runs: usize,
    pub final_energy: Spread,
    pub min_energy: Spread,
    pub energy_change: Spread,
    pub acceptance_rate: Spread,
    /// Zero-based position of the run with the lowest minimum energy.
    pub best_run: Option<usize>,
    pub mean_move_counts: BTreeMap<MoveKind, f64>,
}

impl BatchStatistics {
    pub fn aggregate(runs: &[RunStatistics]) -> Self {
        let best_run = runs
            .iter()
            .enumerate()
            .filter(|(_, r)| r.min_step.is_some())
            .min_by(|(_, a), (_, b)| a.min_energy.total_cmp(&b.min_energy))
            .map(|(i, _)| i);

        let mut mean_move_counts = BTreeMap::new();
        if !runs.is_empty() {
            for kind in MoveKind::ALL {
                let total: usize = runs
                    .iter()
                    .map(|r| r.move_counts.get(&kind).copied().unwrap_or(0))
                    .sum();
                if total > 0 {
                    mean_move_counts.insert(kind, total as f64 / runs.len() as f64);
                }
            }
        }

        Self {
            runs: runs.len(),
            final_energy: spread_of(runs, |r| r.final_energy),
            min_energy: spread_of(runs, |r| r.min_energy),
            energy_change: spread_of(runs, RunStatistics::energy_change),
            acceptance_rate: spread_of(runs, |r| r.acceptance_rate),
            best_run,
            mean_move_counts,
        }
    }
}

fn spread_of(runs: &[RunStatistics], metric: impl Fn(&RunStatistics) -> f64) -> Spread {
    let values: Vec<f64> = runs.iter().map(metric).collect();
    Spread::of(&values)
}
