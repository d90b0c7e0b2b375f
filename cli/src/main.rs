//! percolation-stats - command-line driver for the threshold estimator
//!
//! ```text
//! percolation-stats <N> <T> [--seed <u64>] [--json]
//! percolation-stats --config <file.json> [--json]
//! ```
//!
//! Exit status: 0 on success, 1 when the estimator rejects its input
//! (zero or negative N or T, from the command line or a config file),
//! 2 on malformed arguments or an unreadable config file.

use percolation_core_rs::{EstimatorConfig, EstimatorError, ThresholdEstimator, DEFAULT_RNG_SEED};
use serde::Deserialize;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

const USAGE: &str = "usage: percolation-stats <N> <T> [--seed <u64>] [--json]\n       percolation-stats --config <file.json> [--json]";

#[derive(Debug)]
struct Args {
    config: EstimatorConfig,
    json: bool,
}

/// Config file contents before sign checks
///
/// Counts are signed so a negative value reaches `InvalidParameters`
/// instead of failing deserialization.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    grid_size: i64,
    trials: i64,
    #[serde(default)]
    rng_seed: Option<u64>,
}

#[derive(Debug)]
enum CliError {
    Usage(String),
    Estimator(EstimatorError),
}

impl From<EstimatorError> for CliError {
    fn from(e: EstimatorError) -> Self {
        CliError::Estimator(e)
    }
}

impl CliError {
    fn exit_status(&self) -> u8 {
        match self {
            CliError::Usage(_) => 2,
            CliError::Estimator(_) => 1,
        }
    }
}

fn main() -> ExitCode {
    let raw: Vec<String> = std::env::args().skip(1).collect();

    let result = parse_args(&raw).and_then(|args| {
        let estimator = ThresholdEstimator::from_config(args.config)?;
        Ok(render(&estimator, args.json)?)
    });

    match result {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            match &e {
                CliError::Usage(msg) => eprintln!("error: {}\n{}", msg, USAGE),
                CliError::Estimator(err) => eprintln!("error: {}", err),
            }
            ExitCode::from(e.exit_status())
        }
    }
}

/// Format a finished run as console text or pretty JSON
///
/// A single-trial run has no standard deviation; the text form prints
/// `NaN` for it and the JSON form writes `null`.
fn render(estimator: &ThresholdEstimator, json: bool) -> Result<String, EstimatorError> {
    if json {
        let summary = estimator.summary()?;
        return serde_json::to_string_pretty(&summary)
            .map_err(|e| EstimatorError::Serialization(e.to_string()));
    }

    let (stddev, lo, hi) = match estimator.confidence_interval() {
        Ok((lo, hi)) => (estimator.stddev()?, lo, hi),
        Err(EstimatorError::InsufficientSamples { .. }) => (f64::NAN, f64::NAN, f64::NAN),
        Err(e) => return Err(e),
    };

    Ok(format!(
        "mean                    = {}\nstddev                  = {}\n95% confidence interval = [{}, {}]",
        estimator.mean(),
        stddev,
        lo,
        hi
    ))
}

fn parse_args(raw: &[String]) -> Result<Args, CliError> {
    let mut positional = Vec::new();
    let mut seed = None;
    let mut config_path = None;
    let mut json = false;

    let mut iter = raw.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--seed" => {
                let value = iter
                    .next()
                    .ok_or_else(|| CliError::Usage("--seed needs a value".to_string()))?;
                let parsed = value
                    .parse::<u64>()
                    .map_err(|_| CliError::Usage(format!("invalid seed '{}'", value)))?;
                seed = Some(parsed);
            }
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| CliError::Usage("--config needs a path".to_string()))?;
                config_path = Some(value.clone());
            }
            flag if flag.starts_with("--") => {
                return Err(CliError::Usage(format!("unknown option '{}'", flag)));
            }
            value => positional.push(value.to_string()),
        }
    }

    let config = match (config_path, positional.as_slice()) {
        (Some(path), []) => {
            let file = load_config(&path)?;
            let seed = seed.or(file.rng_seed).unwrap_or(DEFAULT_RNG_SEED);
            checked_config(file.grid_size, file.trials, seed)?
        }
        (Some(_), _) => {
            return Err(CliError::Usage(
                "--config cannot be combined with N and T".to_string(),
            ))
        }
        (None, [n, t]) => {
            let grid_size = parse_count(n, "N")?;
            let trials = parse_count(t, "T")?;
            checked_config(grid_size, trials, seed.unwrap_or_else(clock_seed))?
        }
        (None, _) => {
            return Err(CliError::Usage(
                "expected exactly two arguments N and T".to_string(),
            ))
        }
    };

    Ok(Args { config, json })
}

/// Shared sign check for command-line and config-file counts
fn checked_config(grid_size: i64, trials: i64, rng_seed: u64) -> Result<EstimatorConfig, CliError> {
    if grid_size <= 0 || trials <= 0 {
        return Err(EstimatorError::InvalidParameters { grid_size, trials }.into());
    }
    Ok(EstimatorConfig {
        grid_size: grid_size as usize,
        trials: trials as usize,
        rng_seed,
    })
}

fn parse_count(value: &str, name: &str) -> Result<i64, CliError> {
    value
        .parse::<i64>()
        .map_err(|_| CliError::Usage(format!("{} must be an integer, got '{}'", name, value)))
}

fn load_config(path: &str) -> Result<ConfigFile, CliError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| CliError::Usage(format!("cannot read '{}': {}", path, e)))?;
    serde_json::from_str(&text)
        .map_err(|e| CliError::Usage(format!("invalid config '{}': {}", path, e)))
}

/// Seed from the wall clock when none is given
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}
