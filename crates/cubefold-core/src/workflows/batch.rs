use super::fold::{self, FoldingResult};
use crate::core::properties::table::ResiduePropertyTable;
use crate::engine::config::FoldingConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{info, instrument, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Debug, Clone)]
pub struct BatchResult {
    /// Completed runs in run-id order.
    pub results: Vec<FoldingResult>,
    /// Set when the cancellation flag stopped the batch before every run started.
    pub cancelled: bool,
}

impl BatchResult {
    /// The run with the lowest minimum energy.
    pub fn best(&self) -> Option<&FoldingResult> {
        self.results
            .iter()
            .min_by(|a, b| a.min_energy.total_cmp(&b.min_energy))
    }
}

/// Runs ids `1..=runs` of `config`, each with its own chain and random stream.
///
/// `cancel` is checked before each run starts; a run in progress always completes. Per-run
/// progress is not forwarded: the reporter sees one [`Progress::RunCompleted`] per finished
/// run between [`Progress::BatchStart`] and [`Progress::BatchFinish`].
///
/// # Errors
///
/// The first failing run (in run-id order) aborts the batch with its error.
#[instrument(skip_all, name = "batch_workflow", fields(runs = runs))]
pub fn run(
    sequence: &str,
    table: &ResiduePropertyTable,
    config: &FoldingConfig,
    runs: u64,
    cancel: &AtomicBool,
    reporter: &ProgressReporter,
) -> Result<BatchResult, EngineError> {
    config.validate()?;
    info!(runs, "Starting batch.");
    reporter.report(Progress::BatchStart { total_runs: runs });

    let silent = ProgressReporter::new();
    let run_one = |run_id: u64| -> Option<Result<FoldingResult, EngineError>> {
        if cancel.load(Ordering::Relaxed) {
            return None;
        }
        let result = fold::run(sequence, table, &config.for_run(run_id), &silent);
        reporter.report(Progress::RunCompleted);
        Some(result)
    };

    #[cfg(feature = "parallel")]
    let outcomes: Vec<_> = (1..=runs).into_par_iter().map(run_one).collect();
    #[cfg(not(feature = "parallel"))]
    let outcomes: Vec<_> = (1..=runs).map(run_one).collect();

    let mut results = Vec::with_capacity(outcomes.len());
    let mut cancelled = false;
    for outcome in outcomes {
        match outcome {
            Some(result) => results.push(result?),
            None => cancelled = true,
        }
    }

    if cancelled {
        warn!(completed = results.len(), "Batch cancelled before all runs started.");
        reporter.report(Progress::Message(format!(
            "Batch cancelled: {} of {} runs completed.",
            results.len(),
            runs
        )));
    } else {
        info!(completed = results.len(), "Batch complete.");
    }
    reporter.report(Progress::BatchFinish);
    Ok(BatchResult { results, cancelled })
}
