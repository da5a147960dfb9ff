use crate::core::moves::MoveKind;
use crate::core::utils::geometry::Site;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionRecord {
    pub index: usize,
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl PositionRecord {
    pub fn new(index: usize, site: Site) -> Self {
        Self {
            index,
            x: site.x,
            y: site.y,
            z: site.z,
        }
    }

    pub fn site(&self) -> Site {
        Site::new(self.x, self.y, self.z)
    }
}

/// Record of one Monte Carlo step.
///
/// `move_type` is `None` for steps where no legal move existed. `total_energy`,
/// `local_energies` and `positions` describe the state after the step was resolved (after
/// rollback for rejected moves); `local_energies[i]` belongs to residue `i`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryStep {
    pub step: usize,
    pub temperature: f64,
    pub delta_e: f64,
    pub accepted: bool,
    pub move_type: Option<MoveKind>,
    pub total_energy: f64,
    pub local_energies: Vec<f64>,
    pub candidate_moves: usize,
    pub positions: Vec<PositionRecord>,
}

/// Number of accepted steps per move kind. Rejected and move-less steps are not counted.
pub fn accepted_move_counts(trajectory: &[TrajectoryStep]) -> BTreeMap<MoveKind, usize> {
    let mut counts = BTreeMap::new();
    for step in trajectory.iter().filter(|s| s.accepted) {
        if let Some(kind) = step.move_type {
            *counts.entry(kind).or_insert(0) += 1;
        }
    }
    counts
}

/// Lowest total energy recorded in the trajectory together with its step index.
pub fn minimum_energy(trajectory: &[TrajectoryStep]) -> Option<(usize, f64)> {
    trajectory
        .iter()
        .map(|s| (s.step, s.total_energy))
        .fold(None, |best, (step, energy)| match best {
            Some((_, best_energy)) if best_energy <= energy => best,
            _ => Some((step, energy)),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(step: usize, kind: Option<MoveKind>, accepted: bool, energy: f64) -> TrajectoryStep {
        TrajectoryStep {
            step,
            temperature: 1.0,
            delta_e: 0.0,
            accepted,
            move_type: kind,
            total_energy: energy,
            local_energies: vec![],
            candidate_moves: 0,
            positions: vec![],
        }
    }

    #[test]
    fn accepted_move_counts_skips_rejected_and_empty_steps() {
        let trajectory = vec![
            step(0, Some(MoveKind::End), true, 0.0),
            step(1, Some(MoveKind::End), false, 0.0),
            step(2, None, false, 0.0),
            step(3, Some(MoveKind::Pivot), true, 0.0),
            step(4, Some(MoveKind::End), true, 0.0),
        ];
        let counts = accepted_move_counts(&trajectory);
        assert_eq!(counts.get(&MoveKind::End), Some(&2));
        assert_eq!(counts.get(&MoveKind::Pivot), Some(&1));
        assert_eq!(counts.get(&MoveKind::Corner), None);
    }

    #[test]
    fn minimum_energy_returns_first_lowest_step() {
        let trajectory = vec![
            step(0, None, false, 1.0),
            step(1, None, false, -2.0),
            step(2, None, false, -2.0),
            step(3, None, false, 0.5),
        ];
        assert_eq!(minimum_energy(&trajectory), Some((1, -2.0)));
        assert_eq!(minimum_energy(&[]), None);
    }

    #[test]
    fn position_record_round_trips_site() {
        let record = PositionRecord::new(4, Site::new(-1, 2, 3));
        assert_eq!(record.index, 4);
        assert_eq!(record.site(), Site::new(-1, 2, 3));
    }
}
