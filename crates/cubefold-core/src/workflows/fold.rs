use crate::core::forcefield::scoring::EnergyModel;
use crate::core::models::chain::{Chain, ChainSnapshot};
use crate::core::models::error::ModelError;
use crate::core::models::trajectory::{TrajectoryStep, accepted_move_counts, minimum_energy};
use crate::core::moves::MoveKind;
use crate::core::moves::generator::MoveGenerator;
use crate::core::properties::table::ResiduePropertyTable;
use crate::engine::config::{ConfigError, FoldingConfig};
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::relax::relax_chain;
use crate::engine::schedule::LinearSchedule;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::{info, instrument, warn};

#[derive(Debug, Clone)]
pub struct FoldingResult {
    pub run_id: Option<u64>,
    pub run_tag: Option<String>,
    pub sequence: String,
    /// Seed the run's random stream was created from (`seed + run_id`).
    pub seed: u64,
    /// Energy of the initial strip, before the first step.
    pub initial_energy: f64,
    pub final_energy: f64,
    pub min_energy: f64,
    /// Accepted steps per move kind.
    pub move_counts: BTreeMap<MoveKind, usize>,
    pub runtime: Duration,
    /// Lowest-energy structure of the run.
    pub structure: ChainSnapshot,
    pub trajectory: Vec<TrajectoryStep>,
}

/// Normalizes a user-supplied sequence: surrounding whitespace is dropped and symbols are
/// upper-cased.
pub fn normalize_sequence(sequence: &str) -> String {
    sequence.trim().to_uppercase()
}

#[instrument(skip_all, name = "fold_workflow", fields(run = config.run_id))]
pub fn run(
    sequence: &str,
    table: &ResiduePropertyTable,
    config: &FoldingConfig,
    reporter: &ProgressReporter,
) -> Result<FoldingResult, EngineError> {
    config.validate()?;
    let sequence = normalize_sequence(sequence);
    let mut chain = Chain::initialize_linear(&sequence, table).map_err(config_error)?;

    let start = Instant::now();
    let seed = config.effective_seed();
    let mut rng = StdRng::seed_from_u64(seed);
    let model = EnergyModel::new(config.energy);
    let generator = MoveGenerator::new(config.moves);
    let schedule = LinearSchedule::new(config.annealing.t_start, config.annealing.t_end, config.steps);

    let initial_energy = model.total_energy(&chain);
    info!(
        residues = chain.len(),
        steps = config.steps,
        seed,
        initial_energy,
        "Starting folding run."
    );

    reporter.report(Progress::RunStart {
        total_steps: config.steps as u64,
    });
    let outcome = relax_chain(&mut chain, &model, &generator, &schedule, &mut rng, reporter)?;
    let move_counts = accepted_move_counts(&outcome.trajectory);
    if move_counts.is_empty() {
        warn!("No move was accepted during the run.");
        reporter.report(Progress::Message(
            "No move was accepted during the run.".to_string(),
        ));
    }
    reporter.report(Progress::RunFinish);

    let best = outcome.best.ok_or_else(|| {
        EngineError::Internal("relaxation of a non-empty run produced no best structure".into())
    })?;
    let trajectory = outcome.trajectory;

    let final_energy = trajectory.last().map_or(initial_energy, |s| s.total_energy);
    let min_energy = minimum_energy(&trajectory).map_or(initial_energy, |(_, e)| e);

    let runtime = start.elapsed();
    info!(
        final_energy,
        min_energy,
        best_step = best.step,
        runtime_ms = runtime.as_millis() as u64,
        "Folding run complete."
    );

    Ok(FoldingResult {
        run_id: config.run_id,
        run_tag: config.run_tag(),
        sequence,
        seed,
        initial_energy,
        final_energy,
        min_energy,
        move_counts,
        runtime,
        structure: best.chain.snapshot(),
        trajectory,
    })
}

fn config_error(error: ModelError) -> EngineError {
    match error {
        ModelError::EmptySequence => ConfigError::EmptySequence.into(),
        ModelError::UnknownResidue { symbol, position } => {
            ConfigError::UnknownResidue { symbol, position }.into()
        }
        other => EngineError::Internal(format!("chain construction failed: {other}")),
    }
}
