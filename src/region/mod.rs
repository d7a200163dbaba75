// src/region/mod.rs
//! Per-region summaries built from the ledger, the manual region sheet and
//! the synthesized cruise-ship entries.

pub mod catalog;
pub mod stats;

use std::collections::HashMap;

use chrono::NaiveDate;
use regex::Regex;

use crate::clock::Clock;
use crate::cruise::{synthesize_cruise_regions, CruiseSettings};
use crate::parse::safe_parse_int;
use crate::types::{CruiseCountRow, PatientRecord, RegionOverrideRow, RegionSummaryEntry};

pub use catalog::RegionCatalog;
pub use stats::{daily_stats_for_region, RegionDailyStats};

/// Everything the region pass needs besides the records themselves.
#[derive(Debug, Clone)]
pub struct RegionSettings {
    pub start: NaiveDate,
    pub catalog: RegionCatalog,
    pub passenger_pattern: Regex,
    pub cruise: CruiseSettings,
}

/// Output records in insertion order, plus the transient patient lists.
/// Only `entries` ever leaves this module.
struct Accumulator<'a> {
    entries: Vec<RegionSummaryEntry>,
    patients: Vec<Vec<&'a PatientRecord>>,
    index: HashMap<String, usize>,
}

impl<'a> Accumulator<'a> {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            patients: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn slot(&mut self, name: &str) -> usize {
        if let Some(&i) = self.index.get(name) {
            return i;
        }
        let i = self.entries.len();
        self.entries.push(RegionSummaryEntry::named(name));
        self.patients.push(Vec::new());
        self.index.insert(name.to_string(), i);
        i
    }

    fn add(&mut self, patient: &'a PatientRecord, passenger_pattern: &Regex) {
        let i = self.slot(&patient.prefecture);
        let entry = &mut self.entries[i];

        if patient.confirmed_patient {
            entry.confirmed += 1;
            if let Some(city) = patient.city() {
                *entry.confirmed_by_city.entry(city.to_string()).or_insert(0) += 1;
            }
            if patient
                .known_cluster
                .as_deref()
                .is_some_and(|c| passenger_pattern.is_match(c))
            {
                entry.cruise_passenger += 1;
            }
        }
        if patient.is_deceased() {
            entry.deceased += 1;
        }
        self.patients[i].push(patient);
    }

    /// Inserts or replaces in place, keeping the original position.
    fn put(&mut self, entry: RegionSummaryEntry) {
        match self.index.get(&entry.name) {
            Some(&i) => self.entries[i] = entry,
            None => {
                self.index.insert(entry.name.clone(), self.entries.len());
                self.entries.push(entry);
                self.patients.push(Vec::new());
            }
        }
    }
}

#[must_use]
pub fn aggregate_regions(
    patients: &[PatientRecord],
    overrides: &[RegionOverrideRow],
    cruise_rows: Option<&[CruiseCountRow]>,
    settings: &RegionSettings,
    clock: &Clock,
) -> Vec<RegionSummaryEntry> {
    let mut acc = Accumulator::new();
    for patient in patients {
        acc.add(patient, &settings.passenger_pattern);
    }

    for (entry, list) in acc.entries.iter_mut().zip(&acc.patients) {
        apply_daily_stats(entry, list, settings.start, clock);
    }

    for row in overrides {
        let Some(&i) = acc.index.get(&row.prefecture) else {
            tracing::debug!(region = %row.prefecture, "Dropping override for unknown region");
            continue;
        };
        let entry = &mut acc.entries[i];
        entry.recovered = safe_parse_int(row.recovered.as_deref());
        entry.name_ja = row.prefecture_ja.clone();
    }

    if let Some(rows) = cruise_rows {
        let ships = synthesize_cruise_regions(rows, &settings.cruise, clock);
        for entry in ships.into_entries() {
            acc.put(entry);
        }
    }

    let mut regions = acc.entries;
    for entry in &mut regions {
        entry.pseudo_prefecture = !settings.catalog.contains(&entry.name);
        entry.deaths = entry.deceased;
    }

    sort_by_confirmed(&mut regions);
    tracing::debug!(regions = regions.len(), "Region summaries built");
    regions
}

fn apply_daily_stats(
    entry: &mut RegionSummaryEntry,
    patients: &[&PatientRecord],
    start: NaiveDate,
    clock: &Clock,
) {
    let stats = daily_stats_for_region(patients, start, clock);

    if let Some(&last) = stats.confirmed.last() {
        entry.newly_confirmed = last;
    }
    if stats.confirmed.len() > 2 {
        entry.yesterday_confirmed = stats.confirmed[stats.confirmed.len() - 2];
    }
    if let Some(&last) = stats.deaths.last() {
        entry.newly_deceased = last;
    }
    if stats.deaths.len() > 2 {
        entry.yesterday_deceased = stats.deaths[stats.deaths.len() - 2];
    }

    entry.daily_confirmed_count = stats.confirmed;
    entry.daily_deceased_count = stats.deaths;
    entry.daily_confirmed_start_date = Some(start);
    entry.daily_deceased_start_date = Some(start);
}

/// Descending by `confirmed`. `sort_by` is stable, so equal counts keep
/// their insertion order.
pub fn sort_by_confirmed(regions: &mut [RegionSummaryEntry]) {
    regions.sort_by(|a, b| b.confirmed.cmp(&a.confirmed));
}
