// src/pipeline.rs
//! Runs both aggregators over one set of inputs and assembles the result.

use crate::clock::Clock;
use crate::config::Config;
use crate::cruise::CruiseSettings;
use crate::daily::aggregate_daily;
use crate::error::Result;
use crate::input::TallyInputs;
use crate::region::{aggregate_regions, RegionCatalog, RegionSettings};
use crate::types::{PatientRecord, TallyResult};
use crate::verification::{InvariantCheck, VerificationReport, Verifier};

/// Output of a run: the artifact plus what verification had to say.
#[derive(Debug, Clone)]
pub struct Tally {
    pub result: TallyResult,
    pub verification: VerificationReport,
}

pub struct Pipeline {
    settings: RegionSettings,
    utc_offset_hours: i32,
    verifier: Box<dyn Verifier>,
}

impl Pipeline {
    /// Validates `config` and prepares a pipeline using [`InvariantCheck`].
    ///
    /// # Errors
    /// Returns error if the configuration is invalid.
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        let settings = RegionSettings {
            start: config.dates.region_start,
            catalog: RegionCatalog::new(config.regions.names.iter().cloned()),
            passenger_pattern: config.passenger_pattern()?,
            cruise: CruiseSettings {
                start: config.dates.cruise_start,
                diamond_princess_name: config.cruise.diamond_princess_name.clone(),
                nagasaki_name: config.cruise.nagasaki_name.clone(),
            },
        };
        Ok(Self {
            settings,
            utc_offset_hours: config.dates.utc_offset_hours,
            verifier: Box::new(InvariantCheck),
        })
    }

    #[must_use]
    pub fn with_verifier<V: Verifier + 'static>(mut self, verifier: V) -> Self {
        self.verifier = Box::new(verifier);
        self
    }

    /// Captures "today" in the configured offset.
    ///
    /// # Errors
    /// Returns error if the offset is rejected by `chrono`.
    pub fn clock(&self) -> Result<Clock> {
        Clock::now(self.utc_offset_hours)
    }

    #[must_use]
    pub fn run(&self, inputs: &TallyInputs, clock: &Clock) -> Tally {
        let patients = sort_by_announcement(&inputs.patients);
        let cruise_rows = inputs.cruise_counts.as_deref();

        let daily = aggregate_daily(
            &patients,
            &inputs.daily_overrides,
            cruise_rows.unwrap_or_default(),
        );
        let verified = self.verifier.verify(daily);

        let regions = aggregate_regions(
            &patients,
            &inputs.region_overrides,
            cruise_rows,
            &self.settings,
            clock,
        );

        tracing::info!(
            patients = patients.len(),
            days = verified.daily.len(),
            regions = regions.len(),
            today = %clock.today(),
            "Tally complete"
        );

        Tally {
            result: TallyResult {
                regions,
                daily: verified.daily,
                updated: inputs.updated.clone(),
            },
            verification: verified.report,
        }
    }
}

/// Stable sort by announcement date; undated records come first.
#[must_use]
pub fn sort_by_announcement(patients: &[PatientRecord]) -> Vec<PatientRecord> {
    let mut sorted = patients.to_vec();
    sorted.sort_by_key(|p| p.date_announced);
    sorted
}
