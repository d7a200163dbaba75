// src/region/stats.rs
use std::collections::HashMap;

use chrono::NaiveDate;

use crate::clock::Clock;
use crate::types::PatientRecord;

/// Per-day counts for one region, index 0 being the start date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionDailyStats {
    pub confirmed: Vec<i64>,
    pub deaths: Vec<i64>,
}

/// Counts confirmed announcements and deaths for every day from `start`
/// through today.
///
/// Patients are bucketed by date first so the walk over the day range is a
/// lookup per day rather than a rescan of the list.
#[must_use]
pub fn daily_stats_for_region(
    patients: &[&PatientRecord],
    start: NaiveDate,
    clock: &Clock,
) -> RegionDailyStats {
    let mut confirmed_on: HashMap<NaiveDate, i64> = HashMap::new();
    let mut deceased_on: HashMap<NaiveDate, i64> = HashMap::new();

    for patient in patients {
        if patient.confirmed_patient {
            if let Some(date) = patient.date_announced {
                *confirmed_on.entry(date).or_insert(0) += 1;
            }
        }
        if patient.is_deceased() {
            if let Some(date) = patient.deceased_date {
                *deceased_on.entry(date).or_insert(0) += 1;
            }
        }
    }

    let mut stats = RegionDailyStats::default();
    for day in clock.days_since(start) {
        stats.confirmed.push(confirmed_on.get(&day).copied().unwrap_or(0));
        stats.deaths.push(deceased_on.get(&day).copied().unwrap_or(0));
    }
    stats
}
