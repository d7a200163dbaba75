// src/daily/mod.rs
//! Nationwide day-by-day series.
//!
//! Counts confirmed cases and deaths per day from the ledger, layers the
//! manual cumulative totals and cruise totals on top, then derives every
//! remaining column in a fixed sequence of passes over the date-ordered
//! entries.

pub mod fill;
pub mod rolling;

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::parse::safe_parse_int;
use crate::types::{
    CruiseCountRow, CruiseMetric, CumulativeField, DailyOverrideRow, DailySummaryEntry,
    PatientRecord, Ship,
};

pub use fill::{forward_fill, FillPolicy, ZeroMeansMissing};
pub use rolling::RollingWindow;

/// Builds the nationwide series with the default zero-means-missing policy.
#[must_use]
pub fn aggregate_daily(
    patients: &[PatientRecord],
    overrides: &[DailyOverrideRow],
    cruise_rows: &[CruiseCountRow],
) -> Vec<DailySummaryEntry> {
    aggregate_daily_with(patients, overrides, cruise_rows, &ZeroMeansMissing)
}

/// Builds the nationwide series using `policy` to decide which cumulative
/// cells are carried forward.
#[must_use]
pub fn aggregate_daily_with<P: FillPolicy>(
    patients: &[PatientRecord],
    overrides: &[DailyOverrideRow],
    cruise_rows: &[CruiseCountRow],
    policy: &P,
) -> Vec<DailySummaryEntry> {
    let mut by_date = count_patients(patients);
    apply_overrides(&mut by_date, overrides);
    apply_cruise_totals(&mut by_date, cruise_rows);

    // BTreeMap iteration is already date-ascending.
    let mut entries: Vec<DailySummaryEntry> = by_date.into_values().collect();

    accumulate(&mut entries);
    forward_fill(&mut entries, &CumulativeField::FORWARD_FILLED, policy);
    derive_active(&mut entries);
    derive_increments(&mut entries, &CumulativeField::DERIVED_INCREMENTS);
    apply_deaths_alias(&mut entries);
    apply_rolling_averages(&mut entries);

    tracing::debug!(days = entries.len(), "Daily series built");
    entries
}

fn count_patients(patients: &[PatientRecord]) -> BTreeMap<NaiveDate, DailySummaryEntry> {
    let mut by_date: BTreeMap<NaiveDate, DailySummaryEntry> = BTreeMap::new();

    for patient in patients {
        if patient.confirmed_patient {
            if let Some(date) = patient.date_announced {
                entry(&mut by_date, date).confirmed += 1;
            }
        }
        if patient.is_deceased() {
            if let Some(date) = patient.deceased_date {
                entry(&mut by_date, date).deceased += 1;
            }
        }
    }
    by_date
}

fn entry(
    by_date: &mut BTreeMap<NaiveDate, DailySummaryEntry>,
    date: NaiveDate,
) -> &mut DailySummaryEntry {
    by_date
        .entry(date)
        .or_insert_with(|| DailySummaryEntry::new(date))
}

/// Existing entry for `date`; overrides never create days.
fn day_entry(
    by_date: &mut BTreeMap<NaiveDate, DailySummaryEntry>,
    date: Option<NaiveDate>,
) -> Option<&mut DailySummaryEntry> {
    by_date.get_mut(&date?)
}

fn apply_overrides(
    by_date: &mut BTreeMap<NaiveDate, DailySummaryEntry>,
    overrides: &[DailyOverrideRow],
) {
    for row in overrides {
        let Some(e) = day_entry(by_date, row.date) else {
            tracing::debug!(date = ?row.date, "Dropping daily override for unknown day");
            continue;
        };
        e.recovered_cumulative = safe_parse_int(row.recovered.as_deref());
        e.critical_cumulative = safe_parse_int(row.critical.as_deref());
        e.tested_cumulative = safe_parse_int(row.tested.as_deref());
    }
}

fn apply_cruise_totals(
    by_date: &mut BTreeMap<NaiveDate, DailySummaryEntry>,
    cruise_rows: &[CruiseCountRow],
) {
    for row in cruise_rows {
        let Some(e) = day_entry(by_date, row.date) else {
            tracing::debug!(date = ?row.date, "Dropping cruise row for unknown day");
            continue;
        };
        for metric in CruiseMetric::ALL {
            let total = Ship::ALL
                .iter()
                .map(|&ship| safe_parse_int(row.cell(ship, metric)))
                .fold(0_i64, i64::saturating_add);
            e.set(cruise_field(metric), total);
        }
    }
}

fn cruise_field(metric: CruiseMetric) -> CumulativeField {
    match metric {
        CruiseMetric::Confirmed => CumulativeField::CruiseConfirmed,
        CruiseMetric::Recovered => CumulativeField::CruiseRecovered,
        CruiseMetric::Deceased => CumulativeField::CruiseDeceased,
        CruiseMetric::Critical => CumulativeField::CruiseCritical,
        CruiseMetric::Tested => CumulativeField::CruiseTested,
    }
}

fn accumulate(entries: &mut [DailySummaryEntry]) {
    let mut confirmed = 0;
    let mut deceased = 0;
    for e in entries.iter_mut() {
        confirmed = i64::saturating_add(confirmed, e.confirmed);
        deceased = i64::saturating_add(deceased, e.deceased);
        e.confirmed_cumulative = confirmed;
        e.deceased_cumulative = deceased;
    }
}

fn derive_active(entries: &mut [DailySummaryEntry]) {
    for e in entries.iter_mut() {
        e.active_cumulative = e
            .confirmed_cumulative
            .saturating_sub(e.deceased_cumulative)
            .saturating_sub(e.recovered_cumulative);
    }
}

/// Sets each day's increment to its cumulative minus the previous day's.
pub fn derive_increments(entries: &mut [DailySummaryEntry], fields: &[CumulativeField]) {
    for &field in fields {
        let mut previous = 0;
        for e in entries.iter_mut() {
            let current = e.get(field);
            e.set_increment(field, current.saturating_sub(previous));
            previous = current;
        }
    }
}

fn apply_deaths_alias(entries: &mut [DailySummaryEntry]) {
    for e in entries.iter_mut().skip(1) {
        e.deaths = Some(e.deceased);
    }
}

fn apply_rolling_averages(entries: &mut [DailySummaryEntry]) {
    let mut window3 = RollingWindow::new(3);
    let mut window7 = RollingWindow::new(7);
    let mut cumulative3 = 0;
    let mut cumulative7 = 0;

    for e in entries.iter_mut() {
        e.confirmed_avg3d = window3.push(e.confirmed);
        e.confirmed_avg7d = window7.push(e.confirmed);
        cumulative3 += e.confirmed_avg3d;
        cumulative7 += e.confirmed_avg7d;
        e.confirmed_cumulative_avg3d = cumulative3;
        e.confirmed_cumulative_avg7d = cumulative7;
    }
}
