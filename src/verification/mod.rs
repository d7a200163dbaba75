//! Post-aggregation sanity checks on the nationwide series.
//!
//! A [`Verifier`] receives the finished series and hands it back, possibly
//! corrected, together with a report of what it noticed. The aggregation
//! passes never depend on what the verifier does.

mod checks;

use serde::Serialize;

use crate::types::DailySummaryEntry;

pub use checks::InvariantCheck;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Plausible in real data (late corrections, revised totals).
    Warning,
    /// The series contradicts its own derivation rules.
    Error,
}

impl Severity {
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Warning => "warn",
            Self::Error => "error",
        }
    }
}

/// A single thing the verifier noticed.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub date: chrono::NaiveDate,
    pub check: &'static str,
    pub message: String,
    pub severity: Severity,
}

/// Result of running the verification pass.
#[derive(Debug, Clone, Default, Serialize)]
pub struct VerificationReport {
    pub findings: Vec<Finding>,
    pub days_checked: usize,
}

impl VerificationReport {
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    /// Returns `true` if any error findings exist.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    fn count(&self, severity: Severity) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == severity)
            .count()
    }
}

/// The series after verification.
#[derive(Debug, Clone)]
pub struct Verified {
    pub daily: Vec<DailySummaryEntry>,
    pub report: VerificationReport,
}

pub trait Verifier {
    fn verify(&self, daily: Vec<DailySummaryEntry>) -> Verified;
}

/// Hands the series back untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;

impl Verifier for PassThrough {
    fn verify(&self, daily: Vec<DailySummaryEntry>) -> Verified {
        Verified {
            report: VerificationReport {
                findings: Vec::new(),
                days_checked: daily.len(),
            },
            daily,
        }
    }
}
