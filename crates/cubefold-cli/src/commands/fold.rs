use crate::cli::FoldArgs;
use crate::config::builder::build_config;
use crate::config::models::AppConfig;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use cubefold::core::analysis::contacts::{consensus, contact_graph};
use cubefold::core::analysis::statistics::{BatchStatistics, RunStatistics};
use cubefold::core::io::log::{RunLog, RunLogJson};
use cubefold::core::io::structure::StructureCsv;
use cubefold::core::io::traits::RecordFile;
use cubefold::core::properties::table::ResiduePropertyTable;
use cubefold::engine::progress::ProgressReporter;
use cubefold::workflows::{self, fold::FoldingResult};
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use tracing::{info, warn};

const STRUCTURE_DIR: &str = "structures";
const LOG_DIR: &str = "logs";
const TOP_CONTACTS: usize = 5;

pub fn run(args: FoldArgs) -> Result<()> {
    let app = build_config(&args)?;
    let table = load_table(&app)?;

    let unknown = table.unknown_symbols(&app.sequence.trim().to_uppercase());
    if !unknown.is_empty() {
        let listed: String = unknown.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(", ");
        return Err(CliError::Argument(format!(
            "Unknown residue types in sequence: {}",
            listed
        )));
    }

    std::fs::create_dir_all(app.output_dir.join(STRUCTURE_DIR))?;
    std::fs::create_dir_all(app.output_dir.join(LOG_DIR))?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    if app.runs == 1 {
        info!("Invoking the single-run folding workflow...");
        let result = workflows::fold::run(&app.sequence, &table, &app.folding, &reporter)?;
        write_outputs(&app, &result)?;
        print_run_summary(&result);
        println!("Structures saved to {}", app.output_dir.join(STRUCTURE_DIR).display());
        println!("Logs saved to {}", app.output_dir.join(LOG_DIR).display());
        return Ok(());
    }

    info!(runs = app.runs, "Invoking the batch folding workflow...");
    // The CLI never cancels; interrupts end the process, library callers own the flag.
    let cancel = AtomicBool::new(false);
    let batch = workflows::batch::run(
        &app.sequence,
        &table,
        &app.folding,
        app.runs,
        &cancel,
        &reporter,
    )?;
    if batch.cancelled {
        warn!("Batch was cancelled; writing completed runs only.");
    }

    let mut run_stats = Vec::with_capacity(batch.results.len());
    for result in &batch.results {
        write_outputs(&app, result)?;
        print_run_summary(result);
        run_stats.push(RunStatistics::from_trajectory(&result.trajectory));
    }
    print_batch_summary(&batch.results, &run_stats);
    Ok(())
}

fn load_table(app: &AppConfig) -> Result<ResiduePropertyTable> {
    match &app.residues_path {
        Some(path) => {
            info!("Loading residue properties from {:?}", path);
            Ok(ResiduePropertyTable::load(path)?)
        }
        None => Ok(ResiduePropertyTable::hpq()),
    }
}

/// `run_3_structure.csv` for tagged runs, `structure.csv` otherwise.
fn output_path(dir: &Path, tag: Option<&str>, base: &str) -> PathBuf {
    match tag {
        Some(tag) => dir.join(format!("{tag}_{base}")),
        None => dir.join(base),
    }
}

fn write_outputs(app: &AppConfig, result: &FoldingResult) -> Result<()> {
    let tag = result.run_tag.as_deref();

    let structure_path = output_path(&app.output_dir.join(STRUCTURE_DIR), tag, "structure.csv");
    StructureCsv::write_to_path(&result.structure, &structure_path).map_err(|source| {
        CliError::Output {
            path: structure_path.clone(),
            source,
        }
    })?;

    let log_path = output_path(&app.output_dir.join(LOG_DIR), tag, "log.json");
    let log = RunLog {
        sequence: result.sequence.clone(),
        seed: app.folding.seed,
        run_id: result.run_id,
        trajectory: result.trajectory.clone(),
    };
    RunLogJson::write_to_path(&log, &log_path).map_err(|source| CliError::Output {
        path: log_path.clone(),
        source,
    })?;

    info!(
        "Wrote {} and {}",
        structure_path.display(),
        log_path.display()
    );
    Ok(())
}

fn print_run_summary(result: &FoldingResult) {
    match result.run_id {
        Some(id) => println!("Run {id}"),
        None => {
            println!("Sequence: {}", result.sequence);
            println!("Length: {}", result.sequence.len());
        }
    }
    println!("Final Energy: {:.2}", result.final_energy);
    println!("Lowest Energy: {:.2}", result.min_energy);
    let counts: Vec<String> = result
        .move_counts
        .iter()
        .map(|(kind, count)| format!("{kind}: {count}"))
        .collect();
    println!("Move counts: {{{}}}", counts.join(", "));
    println!("Runtime: {:.2} seconds\n", result.runtime.as_secs_f64());
}

fn print_batch_summary(results: &[FoldingResult], run_stats: &[RunStatistics]) {
    let stats = BatchStatistics::aggregate(run_stats);
    let total_runtime: f64 = results.iter().map(|r| r.runtime.as_secs_f64()).sum();

    println!("Runs completed: {}", stats.runs);
    println!(
        "Mean final energy: {:.3} ± {:.3}",
        stats.final_energy.mean, stats.final_energy.std_dev
    );
    println!(
        "Mean minimum energy: {:.3} ± {:.3}",
        stats.min_energy.mean, stats.min_energy.std_dev
    );
    if let Some(best) = stats.best_run.and_then(|i| results.get(i)) {
        println!(
            "Best minimum energy: {:.3} ({})",
            best.min_energy,
            best.run_tag.as_deref().unwrap_or("run")
        );
    }

    let graphs: Vec<_> = results.iter().map(|r| contact_graph(&r.structure)).collect();
    let mut frequent: Vec<_> = consensus(&graphs).into_iter().collect();
    frequent.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
    if !frequent.is_empty() {
        let listed: Vec<String> = frequent
            .iter()
            .take(TOP_CONTACTS)
            .map(|((i, j), f)| format!("{i}-{j} ({:.0}%)", f * 100.0))
            .collect();
        println!("Most frequent contacts: {}", listed.join(", "));
    }
    println!("Runtime: {:.2} seconds\n", total_runtime);
}
