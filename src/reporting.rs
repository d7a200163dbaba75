// src/reporting.rs
//! Console and JSON output for tally runs.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use crate::pipeline::Tally;
use crate::verification::{Severity, VerificationReport};

const TOP_REGIONS: usize = 10;

/// Prints any serializable value as JSON on stdout.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}

/// Prints a human-readable summary of a run.
pub fn print_summary(tally: &Tally) {
    let result = &tally.result;

    if let Some(last) = result.daily.last() {
        println!("{} {}", "Latest day:".bold(), last.date);
        println!(
            "  confirmed {} (+{})  deceased {} (+{})  recovered {}  active {}",
            last.confirmed_cumulative.to_string().cyan(),
            last.confirmed,
            last.deceased_cumulative.to_string().red(),
            last.deceased,
            last.recovered_cumulative.to_string().green(),
            last.active_cumulative,
        );
        println!(
            "  7-day average {}  3-day average {}",
            last.confirmed_avg7d, last.confirmed_avg3d
        );
    } else {
        println!("{}", "No daily entries.".dimmed());
    }
    println!();

    println!("{}", "Regions by confirmed:".bold());
    for region in result.regions.iter().take(TOP_REGIONS) {
        let label = if region.pseudo_prefecture {
            format!("{} *", region.name).yellow().to_string()
        } else {
            region.name.clone()
        };
        println!(
            "  {:>7}  {label}  (+{} today)",
            region.confirmed, region.newly_confirmed
        );
    }
    let hidden = result.regions.len().saturating_sub(TOP_REGIONS);
    if hidden > 0 {
        println!("  {}", format!("... {hidden} more").dimmed());
    }
    println!();

    print_verification(&tally.verification);
    if !result.updated.is_empty() {
        println!("{} {}", "Updated:".dimmed(), result.updated.dimmed());
    }
}

/// Prints verification findings followed by a one-line verdict.
pub fn print_verification(report: &VerificationReport) {
    for f in &report.findings {
        let line = format!("{}: [{}] {} {}", f.severity.prefix(), f.check, f.date, f.message);
        match f.severity {
            Severity::Error => println!("{}", line.red().bold()),
            Severity::Warning => println!("{}", line.yellow()),
        }
    }

    let errors = report.error_count();
    let warnings = report.warning_count();
    if errors == 0 && warnings == 0 {
        println!(
            "{} {} days verified, no findings.",
            "OK".green().bold(),
            report.days_checked
        );
    } else if errors > 0 {
        println!(
            "{} {} {}, {} {} across {} days.",
            "X".red().bold(),
            errors,
            pluralize("error", errors),
            warnings,
            pluralize("warning", warnings),
            report.days_checked
        );
    } else {
        println!(
            "{} {} {} across {} days.",
            "~".yellow().bold(),
            warnings,
            pluralize("warning", warnings),
            report.days_checked
        );
    }
}

fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
