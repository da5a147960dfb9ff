use super::error::EngineError;
use super::progress::{Progress, ProgressReporter};
use super::schedule::LinearSchedule;
use super::state::BestStructure;
use super::transaction::MoveTransaction;
use super::utils::sampling::{choose_index, metropolis_accept};
use crate::core::forcefield::scoring::EnergyModel;
use crate::core::models::chain::Chain;
use crate::core::models::trajectory::TrajectoryStep;
use crate::core::moves::generator::MoveGenerator;
use rand::Rng;
use tracing::{debug, instrument, trace};

#[derive(Debug, Clone)]
pub struct RelaxOutcome {
    pub trajectory: Vec<TrajectoryStep>,
    /// `None` only for a run of zero steps.
    pub best: Option<BestStructure>,
}

/// Runs `schedule.steps()` Metropolis steps on `chain`.
///
/// Each step enumerates the legal moves, applies one chosen uniformly, rescores the chain
/// and either keeps the move or rolls it back. Steps without any legal move are recorded as
/// rejected with no move type. The chain is left in the state of the last step.
///
/// # Errors
///
/// Returns [`EngineError::Consistency`] if a move or its rollback collides with an occupied
/// site. The chain must then be discarded.
#[instrument(level = "debug", skip_all, fields(residues = chain.len(), steps = schedule.steps()))]
pub fn relax_chain<R: Rng + ?Sized>(
    chain: &mut Chain,
    model: &EnergyModel,
    generator: &MoveGenerator,
    schedule: &LinearSchedule,
    rng: &mut R,
    reporter: &ProgressReporter,
) -> Result<RelaxOutcome, EngineError> {
    let mut trajectory = Vec::with_capacity(schedule.steps());
    let mut best: Option<BestStructure> = None;
    let mut current = model.evaluate(chain);

    for step in 0..schedule.steps() {
        let temperature = schedule.temperature(step);
        let moves = generator.generate(chain, rng);

        let (delta_e, accepted, move_type) = if moves.is_empty() {
            trace!(step, "No legal move; recording an idle step.");
            (0.0, false, None)
        } else {
            let mv = &moves[choose_index(moves.len(), rng)?];
            let transaction = MoveTransaction::apply(chain, mv)
                .map_err(|source| EngineError::Consistency { step, source })?;

            let proposed = model.evaluate(chain);
            let delta_e = proposed.total() - current.total();
            let accepted = metropolis_accept(delta_e, temperature, rng)?;

            if accepted {
                transaction.commit();
                current = proposed;
            } else {
                transaction
                    .rollback(chain)
                    .map_err(|source| EngineError::Consistency { step, source })?;
            }
            (delta_e, accepted, Some(mv.kind()))
        };
        debug_assert!(chain.is_consistent(), "occupancy diverged at step {step}");

        let total_energy = current.total();
        if BestStructure::offer(&mut best, total_energy, step, chain) {
            trace!(step, energy = total_energy, "New lowest-energy structure.");
        }

        trajectory.push(TrajectoryStep {
            step,
            temperature,
            delta_e,
            accepted,
            move_type,
            total_energy,
            local_energies: current.local.clone(),
            candidate_moves: moves.len(),
            positions: chain.position_records(),
        });
        reporter.report(Progress::StepCompleted);
    }

    debug!(
        steps = trajectory.len(),
        best_energy = best.as_ref().map(|b| b.energy),
        "Relaxation finished."
    );
    Ok(RelaxOutcome { trajectory, best })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::moves::MoveKind;
    use crate::core::moves::generator::MoveConfig;
    use crate::core::properties::table::ResiduePropertyTable;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const TOLERANCE: f64 = 1e-9;

    fn run(sequence: &str, steps: usize, seed: u64, moves: MoveConfig) -> (Chain, RelaxOutcome) {
        let mut chain = Chain::initialize_linear(sequence, &ResiduePropertyTable::hpq()).unwrap();
        let outcome = relax_chain(
            &mut chain,
            &EnergyModel::default(),
            &MoveGenerator::new(moves),
            &LinearSchedule::new(2.0, 0.5, steps),
            &mut StdRng::seed_from_u64(seed),
            &ProgressReporter::new(),
        )
        .unwrap();
        (chain, outcome)
    }

    #[test]
    fn zero_steps_yield_empty_trajectory_and_no_best() {
        let (_, outcome) = run("HHPPHH", 0, 1, MoveConfig::default());
        assert!(outcome.trajectory.is_empty());
        assert!(outcome.best.is_none());
    }

    #[test]
    fn one_record_per_step_with_matching_temperature() {
        let (_, outcome) = run("HPPH", 20, 4, MoveConfig::default());
        assert_eq!(outcome.trajectory.len(), 20);
        let schedule = LinearSchedule::new(2.0, 0.5, 20);
        for (i, record) in outcome.trajectory.iter().enumerate() {
            assert_eq!(record.step, i);
            assert_eq!(record.temperature, schedule.temperature(i));
            assert!(record.candidate_moves > 0);
        }
    }

    #[test]
    fn recorded_energies_describe_the_resolved_state() {
        let model = EnergyModel::default();
        let table = ResiduePropertyTable::hpq();
        let (_, outcome) = run("HHPKEH", 60, 9, MoveConfig::default());
        for record in &outcome.trajectory {
            let mut replay = Chain::initialize_linear("HHPKEH", &table).unwrap();
            let placements: Vec<_> = record.positions.iter().map(|p| (p.index, p.site())).collect();
            replay.reposition(&placements).unwrap();
            assert!((model.total_energy(&replay) - record.total_energy).abs() < TOLERANCE);
            let local_sum: f64 = record.local_energies.iter().sum();
            assert!((local_sum - record.total_energy).abs() < TOLERANCE);
        }
    }

    #[test]
    fn best_structure_holds_the_minimum() {
        let model = EnergyModel::default();
        let (_, outcome) = run("HHPPHH", 200, 1, MoveConfig::default());
        let best = outcome.best.unwrap();
        let min = outcome
            .trajectory
            .iter()
            .map(|s| s.total_energy)
            .fold(f64::INFINITY, f64::min);
        assert_eq!(best.energy, min);
        assert!((model.total_energy(&best.chain) - best.energy).abs() < TOLERANCE);
        assert_eq!(outcome.trajectory[best.step].total_energy, best.energy);
    }

    #[test]
    fn rejected_steps_leave_energy_unchanged() {
        let (_, outcome) = run("HHPPHHPPHH", 150, 21, MoveConfig::default());
        for pair in outcome.trajectory.windows(2) {
            if !pair[1].accepted {
                assert_eq!(pair[1].total_energy, pair[0].total_energy);
                assert_eq!(pair[1].positions, pair[0].positions);
            }
        }
    }

    #[test]
    fn disabled_global_moves_never_appear() {
        let moves = MoveConfig {
            pivot_probability: 0.0,
            crankshaft_probability: 0.0,
        };
        let (chain, outcome) = run("HHPPHHPP", 100, 8, moves);
        assert!(chain.is_consistent());
        assert!(outcome.trajectory.iter().all(|s| matches!(
            s.move_type,
            Some(MoveKind::End) | Some(MoveKind::Corner) | None
        )));
    }

    #[test]
    fn single_residue_chain_records_idle_steps() {
        let (_, outcome) = run("H", 3, 0, MoveConfig::default());
        assert_eq!(outcome.trajectory.len(), 3);
        for record in &outcome.trajectory {
            assert_eq!(record.move_type, None);
            assert!(!record.accepted);
            assert_eq!(record.delta_e, 0.0);
            assert_eq!(record.candidate_moves, 0);
        }
        assert_eq!(outcome.best.unwrap().step, 0);
    }
}
