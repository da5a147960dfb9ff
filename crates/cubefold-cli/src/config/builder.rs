use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::FoldArgs;
use crate::error::{CliError, Result};
use crate::utils::sequence::resolve_sequence;
use cubefold::core::forcefield::params::EnergyParams;
use cubefold::engine::config::FoldingConfigBuilder;
use std::str::FromStr;

pub fn build_config(args: &FoldArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = match &args.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };
    let file_config = apply_set_values(file_config, &args.set_values)?;

    let annealing = file_config.annealing.unwrap_or_default();
    let energy_file = file_config.energy.unwrap_or_default();
    let moves = file_config.moves.unwrap_or_default();

    let runs = args.runs.or(file_config.runs).unwrap_or(defaults.runs);
    if runs == 0 {
        return Err(CliError::Argument("`runs` must be at least 1".to_string()));
    }

    let energy = EnergyParams {
        alpha: energy_file.alpha.unwrap_or(defaults.energy.alpha),
        eps_hh: energy_file.eps_hh.unwrap_or(defaults.energy.eps_hh),
        eps_hp: energy_file.eps_hp.unwrap_or(defaults.energy.eps_hp),
        eps_pp: energy_file.eps_pp.unwrap_or(defaults.energy.eps_pp),
        eps_q: energy_file.eps_q.unwrap_or(defaults.energy.eps_q),
    };

    let folding = FoldingConfigBuilder::new()
        .steps(args.steps.or(file_config.steps).unwrap_or(defaults.steps))
        .seed(args.seed.or(file_config.seed).unwrap_or(defaults.seed))
        .t_start(args.t_start.or(annealing.t_start).unwrap_or(defaults.t_start))
        .t_end(args.t_end.or(annealing.t_end).unwrap_or(defaults.t_end))
        .energy(energy)
        .pivot_probability(
            args.pivot_probability
                .or(moves.pivot_probability)
                .unwrap_or(defaults.moves.pivot_probability),
        )
        .crankshaft_probability(
            args.crankshaft_probability
                .or(moves.crankshaft_probability)
                .unwrap_or(defaults.moves.crankshaft_probability),
        )
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig {
        sequence: resolve_sequence(&args.sequence)?,
        residues_path: args.residues.clone().or(file_config.residues),
        runs,
        output_dir: args.output.clone(),
        folding,
    })
}

fn parse_value<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value)))
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };
        let key = key.trim();

        match key {
            "steps" => config.steps = Some(parse_value(key, value, "integer")?),
            "seed" => config.seed = Some(parse_value(key, value, "integer")?),
            "runs" => config.runs = Some(parse_value(key, value, "integer")?),
            "annealing.t-start" => {
                config.annealing.get_or_insert_with(Default::default).t_start =
                    Some(parse_value(key, value, "float")?);
            }
            "annealing.t-end" => {
                config.annealing.get_or_insert_with(Default::default).t_end =
                    Some(parse_value(key, value, "float")?);
            }
            "energy.alpha" | "energy.eps-hh" | "energy.eps-hp" | "energy.eps-pp" | "energy.eps-q" => {
                let parsed = Some(parse_value(key, value, "float")?);
                let energy = config.energy.get_or_insert_with(Default::default);
                match key {
                    "energy.alpha" => energy.alpha = parsed,
                    "energy.eps-hh" => energy.eps_hh = parsed,
                    "energy.eps-hp" => energy.eps_hp = parsed,
                    "energy.eps-pp" => energy.eps_pp = parsed,
                    _ => energy.eps_q = parsed,
                }
            }
            "moves.pivot-probability" => {
                config.moves.get_or_insert_with(Default::default).pivot_probability =
                    Some(parse_value(key, value, "float")?);
            }
            "moves.crankshaft-probability" => {
                config.moves.get_or_insert_with(Default::default).crankshaft_probability =
                    Some(parse_value(key, value, "float")?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn base_fold_args() -> FoldArgs {
        FoldArgs {
            sequence: "HHPPHH".to_string(),
            output: PathBuf::from("out"),
            config: None,
            residues: None,
            steps: None,
            seed: None,
            runs: None,
            t_start: None,
            t_end: None,
            pivot_probability: None,
            crankshaft_probability: None,
            set_values: vec![],
        }
    }

    #[test]
    fn defaults_fill_every_unset_value() {
        let app = build_config(&base_fold_args()).unwrap();
        assert_eq!(app.sequence, "HHPPHH");
        assert_eq!(app.runs, 1);
        assert_eq!(app.folding.steps, 1000);
        assert_eq!(app.folding.seed, 42);
        assert_eq!(app.folding.annealing.t_start, 2.0);
        assert_eq!(app.folding.energy, EnergyParams::default());
        assert_eq!(app.folding.moves.crankshaft_probability, 0.5);
        assert!(app.residues_path.is_none());
    }

    #[test]
    fn cli_flags_override_set_values_which_override_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("run.toml");
        fs::write(
            &path,
            "steps = 50\nseed = 3\n[energy]\neps-hh = 2.0\neps-hp = 0.7\n[moves]\npivot-probability = 0.9\n",
        )
        .unwrap();

        let mut args = base_fold_args();
        args.config = Some(path);
        args.steps = Some(75);
        args.set_values = vec!["energy.eps-hh=1.5".to_string(), "seed=11".to_string()];

        let app = build_config(&args).unwrap();
        assert_eq!(app.folding.steps, 75);
        assert_eq!(app.folding.seed, 11);
        assert_eq!(app.folding.energy.eps_hh, 1.5);
        assert_eq!(app.folding.energy.eps_hp, 0.7);
        assert_eq!(app.folding.moves.pivot_probability, 0.9);
    }

    #[test]
    fn malformed_set_values_are_rejected() {
        for bad in ["steps", "steps=many", "energy.eps-xx=1.0"] {
            let mut args = base_fold_args();
            args.set_values = vec![bad.to_string()];
            assert!(
                matches!(build_config(&args), Err(CliError::Config(_))),
                "accepted {bad}"
            );
        }
    }

    #[test]
    fn invalid_run_parameters_are_configuration_errors() {
        let mut args = base_fold_args();
        args.t_start = Some(0.1);
        args.t_end = Some(0.5);
        assert!(matches!(build_config(&args), Err(CliError::Config(_))));

        let mut args = base_fold_args();
        args.runs = Some(0);
        assert!(matches!(build_config(&args), Err(CliError::Argument(_))));
    }
}
