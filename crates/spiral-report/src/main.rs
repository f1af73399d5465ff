//! Run every configuration in a parameter file and print the console report.
//!
//! Usage: `spiral_report [CONFIG_JSON] [RESULTS_JSON]`. A missing config file
//! falls back to the built-in configurations.

use std::fs;
use std::io::ErrorKind;
use std::process::ExitCode;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use spiral_config::{default_parameter_sets, load_parameter_sets, ParameterSet};
use spiral_report::{analyze_all, BatchReport, ReportError};

const DEFAULT_CONFIG: &str = "config.json";

fn load(path: &str) -> Result<Vec<ParameterSet>, ReportError> {
    match fs::read_to_string(path) {
        Ok(json) => Ok(load_parameter_sets(&json)?),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(path, "configuration file not found, using built-in configurations");
            Ok(default_parameter_sets())
        }
        Err(source) => Err(ReportError::Read {
            path: path.to_string(),
            source,
        }),
    }
}

fn run() -> Result<(), ReportError> {
    let mut args = std::env::args().skip(1);
    let config_path = args.next().unwrap_or_else(|| DEFAULT_CONFIG.to_string());
    let results_path = args.next();

    let sets = load(&config_path)?;
    info!(count = sets.len(), path = %config_path, "loaded configurations");

    let report = BatchReport::new(analyze_all(&sets));
    print!("{}", report.to_text());

    if let Some(path) = results_path {
        fs::write(&path, report.to_json()?).map_err(|source| ReportError::Write {
            path: path.clone(),
            source,
        })?;
        info!(path = %path, "wrote results");
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "analysis failed");
            ExitCode::FAILURE
        }
    }
}
