// src/verification/checks.rs
use crate::types::{CumulativeField, DailySummaryEntry};

use super::{Finding, Severity, VerificationReport, Verified, Verifier};

/// Columns that should never go down from one day to the next.
const MONOTONIC: [CumulativeField; 4] = [
    CumulativeField::Confirmed,
    CumulativeField::Deceased,
    CumulativeField::Recovered,
    CumulativeField::Tested,
];

/// Flags entries that break the series' own rules. Never edits entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvariantCheck;

impl Verifier for InvariantCheck {
    fn verify(&self, daily: Vec<DailySummaryEntry>) -> Verified {
        let mut findings = Vec::new();
        let mut previous: Option<&DailySummaryEntry> = None;

        for e in &daily {
            check_active(e, &mut findings);
            check_increments(e, previous, &mut findings);
            if let Some(prev) = previous {
                check_order(prev, e, &mut findings);
                check_monotonic(prev, e, &mut findings);
            }
            previous = Some(e);
        }

        for f in &findings {
            match f.severity {
                Severity::Error => tracing::error!(date = %f.date, check = f.check, "{}", f.message),
                Severity::Warning => tracing::warn!(date = %f.date, check = f.check, "{}", f.message),
            }
        }

        Verified {
            report: VerificationReport {
                findings,
                days_checked: daily.len(),
            },
            daily,
        }
    }
}

fn check_active(e: &DailySummaryEntry, out: &mut Vec<Finding>) {
    let expected = e
        .confirmed_cumulative
        .saturating_sub(e.deceased_cumulative)
        .saturating_sub(e.recovered_cumulative);
    if e.active_cumulative != expected {
        out.push(Finding {
            date: e.date,
            check: "active-identity",
            message: format!(
                "activeCumulative is {} but confirmed - deceased - recovered is {expected}",
                e.active_cumulative
            ),
            severity: Severity::Error,
        });
    }
}

fn check_increments(
    e: &DailySummaryEntry,
    previous: Option<&DailySummaryEntry>,
    out: &mut Vec<Finding>,
) {
    for field in CumulativeField::DERIVED_INCREMENTS {
        let before = previous.map_or(0, |p| p.get(field));
        let expected = e.get(field).saturating_sub(before);
        let Some(actual) = e.increment(field) else {
            continue;
        };
        if actual != expected {
            out.push(Finding {
                date: e.date,
                check: "increment-derivation",
                message: format!(
                    "daily value for {} is {actual}, expected {expected}",
                    field.name()
                ),
                severity: Severity::Error,
            });
        }
    }
}

fn check_order(prev: &DailySummaryEntry, e: &DailySummaryEntry, out: &mut Vec<Finding>) {
    if e.date <= prev.date {
        out.push(Finding {
            date: e.date,
            check: "date-order",
            message: format!("entry follows {} but is not later", prev.date),
            severity: Severity::Error,
        });
    }
}

fn check_monotonic(prev: &DailySummaryEntry, e: &DailySummaryEntry, out: &mut Vec<Finding>) {
    for field in MONOTONIC {
        let (before, now) = (prev.get(field), e.get(field));
        if now < before {
            out.push(Finding {
                date: e.date,
                check: "cumulative-decrease",
                message: format!("{} fell from {before} to {now}", field.name()),
                severity: Severity::Warning,
            });
        }
    }
}
