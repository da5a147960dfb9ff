use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "CubeFold Developers",
    version,
    about = "CubeFold CLI - fold HP(Q) peptides on a cubic lattice with Metropolis Monte Carlo and simulated annealing.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Number of threads used for parallel runs.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fold a sequence and write the lowest-energy structure and the run log.
    Fold(FoldArgs),
}

/// Arguments for the `fold` subcommand.
#[derive(Args, Debug, Clone)]
pub struct FoldArgs {
    /// Sequence to fold (e.g. HHPPHH), or the name of an `example_*` file holding one.
    #[arg(short = 's', long, required = true, value_name = "SEQ")]
    pub sequence: String,

    /// Directory receiving `structures/` and `logs/`.
    #[arg(short, long, required = true, value_name = "DIR")]
    pub output: PathBuf,

    /// Run configuration in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Residue property table in TOML format. Defaults to the built-in HPQ alphabet.
    #[arg(short, long, value_name = "PATH")]
    pub residues: Option<PathBuf>,

    // --- Run Overrides ---
    /// Number of Monte Carlo steps per run.
    #[arg(short = 'n', long, value_name = "INT")]
    pub steps: Option<usize>,

    /// Base random seed. Run `i` of a batch uses `seed + i`.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,

    /// Number of independent runs.
    #[arg(long, value_name = "INT")]
    pub runs: Option<u64>,

    // --- Annealing Overrides ---
    /// Temperature at the first step.
    #[arg(long, value_name = "FLOAT")]
    pub t_start: Option<f64>,

    /// Temperature the schedule cools towards.
    #[arg(long, value_name = "FLOAT")]
    pub t_end: Option<f64>,

    // --- Move Overrides ---
    /// Per-step probability of offering pivot moves.
    #[arg(long, value_name = "FLOAT")]
    pub pivot_probability: Option<f64>,

    /// Per-step probability of offering crankshaft moves.
    #[arg(long, value_name = "FLOAT")]
    pub crankshaft_probability: Option<f64>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S energy.eps-hh=1.5
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}
