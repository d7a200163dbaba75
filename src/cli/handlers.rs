// src/cli/handlers.rs
//! Command handlers.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use super::args::TallyArgs;
use crate::clock::Clock;
use crate::config::Config;
use crate::error::TallyError;
use crate::exit::TallyExit;
use crate::input::TallyInputs;
use crate::parse::parse_date;
use crate::pipeline::{Pipeline, Tally};
use crate::reporting;
use crate::verification::VerificationReport;

/// Handles the tally command.
///
/// # Errors
/// Returns error if config, clock or output fail.
pub fn handle_tally(config_path: Option<&Path>, args: &TallyArgs) -> Result<TallyExit> {
    let Some(mut tally) = run_pipeline(config_path, &args.input, args.today.as_deref())? else {
        return Ok(TallyExit::InvalidInput);
    };
    if let Some(updated) = &args.updated {
        tally.result.updated.clone_from(updated);
    }

    if args.summary {
        reporting::print_summary(&tally);
    } else {
        reporting::print_json(&tally.result, args.pretty)?;
    }
    Ok(TallyExit::Success)
}

/// Handles the verify command.
///
/// # Errors
/// Returns error if config, clock or output fail.
pub fn handle_verify(
    config_path: Option<&Path>,
    input: &Path,
    today: Option<&str>,
    json: bool,
) -> Result<TallyExit> {
    let Some(tally) = run_pipeline(config_path, input, today)? else {
        return Ok(TallyExit::InvalidInput);
    };

    if json {
        reporting::print_json(&tally.verification, true)?;
    } else {
        reporting::print_verification(&tally.verification);
    }

    Ok(verification_exit(&tally.verification))
}

/// Error findings fail the run; warnings alone do not.
#[must_use]
pub fn verification_exit(report: &VerificationReport) -> TallyExit {
    if report.has_errors() {
        TallyExit::CheckFailed
    } else {
        TallyExit::Success
    }
}

/// Handles the config command.
///
/// # Errors
/// Returns error if the config cannot be loaded or rendered.
pub fn handle_config(config_path: Option<&Path>) -> Result<TallyExit> {
    let config = load_config(config_path)?;
    print!("{}", config.to_toml()?);
    Ok(TallyExit::Success)
}

fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config = Config::load(config_path).context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Runs the pipeline, or returns `None` after reporting an unreadable bundle.
fn run_pipeline(
    config_path: Option<&Path>,
    input: &Path,
    today: Option<&str>,
) -> Result<Option<Tally>> {
    let config = load_config(config_path)?;
    let pipeline = Pipeline::new(&config)?;
    let clock = match today {
        Some(raw) => Clock::fixed(
            parse_date(raw).ok_or_else(|| TallyError::InvalidDate(raw.to_string()))?,
        ),
        None => pipeline.clock()?,
    };

    let inputs = match TallyInputs::load(input) {
        Ok(inputs) => inputs,
        Err(e @ TallyError::InvalidInput { .. }) => {
            eprintln!("{} {e}", "error:".red().bold());
            return Ok(None);
        }
        Err(e) => return Err(e).context("Failed to read input bundle"),
    };

    Ok(Some(pipeline.run(&inputs, &clock)))
}
