use crate::error::{CliError, Result};
use std::fs::File;
use std::path::Path;
use tracing::Subscriber;
use tracing_subscriber::{
    EnvFilter, Layer, filter::LevelFilter, fmt, prelude::*, registry::LookupSpan,
};

/// Directive overrides for the console, e.g. `CUBEFOLD_LOG=cubefold::engine=trace`.
const LOG_ENV_VAR: &str = "CUBEFOLD_LOG";

/// Console level for a `-v` count; `--quiet` silences everything.
pub fn level_filter(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::OFF;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// The log file keeps per-run detail even when the console only shows warnings.
fn file_level(verbosity: u8) -> LevelFilter {
    level_filter(verbosity, false).max(LevelFilter::DEBUG)
}

fn console_filter(verbosity: u8, quiet: bool) -> EnvFilter {
    if quiet {
        return EnvFilter::new("off");
    }
    EnvFilter::builder()
        .with_default_directive(level_filter(verbosity, false).into())
        .with_env_var(LOG_ENV_VAR)
        .from_env_lossy()
}

fn file_layer<S>(path: &Path, level: LevelFilter) -> Result<impl Layer<S>>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let file = File::create(path)?;
    Ok(fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_thread_ids(true)
        .with_target(true)
        .with_filter(level))
}

/// Installs the global subscriber: compact stderr output plus an optional plain-text file.
pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<&Path>) -> Result<()> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_filter(console_filter(verbosity, quiet));

    let file = log_file
        .map(|path| file_layer(path, file_level(verbosity)))
        .transpose()?;

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file)
        .try_init()
        .map_err(|e| CliError::Other(e.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::path::PathBuf;
    use std::sync::Once;
    use tracing::{debug, error, info, trace, warn};

    static INIT: Once = Once::new();

    fn ensure_global_logger_is_set() {
        INIT.call_once(|| {
            setup_logging(3, false, None).expect("Failed to set up global logger for tests");
        });
    }

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_filter(0, false), LevelFilter::WARN);
        assert_eq!(level_filter(1, false), LevelFilter::INFO);
        assert_eq!(level_filter(2, false), LevelFilter::DEBUG);
        assert_eq!(level_filter(7, false), LevelFilter::TRACE);
        assert_eq!(level_filter(3, true), LevelFilter::OFF);
    }

    #[test]
    fn file_level_never_drops_below_debug() {
        assert_eq!(file_level(0), LevelFilter::DEBUG);
        assert_eq!(file_level(2), LevelFilter::DEBUG);
        assert_eq!(file_level(3), LevelFilter::TRACE);
    }

    #[test]
    #[serial]
    fn macros_run_under_the_global_logger() {
        ensure_global_logger_is_set();

        error!("error level");
        warn!("warn level");
        info!(step = 1, "info level");
        debug!("debug level");
        trace!("trace level");
    }

    #[test]
    #[serial]
    fn file_layer_records_debug_but_not_trace() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_path = temp_dir.path().join("fold.log");

        let layer = file_layer(&log_path, LevelFilter::DEBUG).unwrap();
        let subscriber = tracing_subscriber::registry().with(layer);
        tracing::subscriber::with_default(subscriber, || {
            debug!(energy = -2.5, "Folding run complete.");
            trace!("Enumerated legal moves.");
        });

        let content = std::fs::read_to_string(log_path).unwrap();
        assert!(content.contains("Folding run complete."));
        assert!(content.contains("energy=-2.5"));
        assert!(!content.contains("Enumerated legal moves."));
    }

    #[test]
    fn unwritable_log_file_is_an_io_error() {
        let invalid_path = PathBuf::from("/");

        if cfg!(unix) && invalid_path.is_dir() {
            let result = file_layer::<tracing_subscriber::Registry>(&invalid_path, LevelFilter::DEBUG);
            assert!(matches!(result, Err(CliError::Io(_))));
        }
    }
}
