use crate::error::{CliError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

const EXAMPLE_PREFIX: &str = "example_";

/// Turns the `--sequence` argument into a sequence string.
///
/// Arguments whose file name starts with `example_` name a file holding the sequence. It is
/// looked up as given, then under `./data/`, then in the data directory shipped with the CLI.
/// Anything else is taken literally.
pub fn resolve_sequence(argument: &str) -> Result<String> {
    let is_example = Path::new(argument)
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with(EXAMPLE_PREFIX));
    if !is_example {
        return Ok(argument.to_string());
    }

    let path = example_candidates(argument)
        .into_iter()
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| {
            CliError::Argument(format!("Example sequence file '{}' not found", argument))
        })?;
    debug!("Reading example sequence from {:?}", path);

    let content = std::fs::read_to_string(&path)?;
    let sequence = content.trim();
    if sequence.is_empty() {
        return Err(CliError::Argument(format!(
            "Example sequence file '{}' is empty",
            path.display()
        )));
    }
    Ok(sequence.to_string())
}

fn example_candidates(argument: &str) -> Vec<PathBuf> {
    vec![
        PathBuf::from(argument),
        Path::new("data").join(argument),
        Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join(argument),
    ]
}
