// src/cruise.rs
//! Turns the hand-entered cruise-ship cumulative counts into two
//! pseudo-region summaries with daily increment vectors.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::clock::Clock;
use crate::parse::{is_present, safe_parse_int};
use crate::types::{CruiseCountRow, CruiseMetric, RegionSummaryEntry, Ship};

#[derive(Debug, Clone)]
pub struct CruiseSettings {
    pub start: NaiveDate,
    pub diamond_princess_name: String,
    pub nagasaki_name: String,
}

impl CruiseSettings {
    #[must_use]
    pub fn name(&self, ship: Ship) -> &str {
        match ship {
            Ship::DiamondPrincess => &self.diamond_princess_name,
            Ship::Nagasaki => &self.nagasaki_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CruiseRegions {
    pub diamond_princess: RegionSummaryEntry,
    pub nagasaki: RegionSummaryEntry,
}

impl CruiseRegions {
    /// Both entries in insertion order.
    #[must_use]
    pub fn into_entries(self) -> [RegionSummaryEntry; 2] {
        [self.diamond_princess, self.nagasaki]
    }
}

#[must_use]
pub fn synthesize_cruise_regions(
    rows: &[CruiseCountRow],
    settings: &CruiseSettings,
    clock: &Clock,
) -> CruiseRegions {
    let mut by_date: HashMap<NaiveDate, &CruiseCountRow> = HashMap::new();
    for row in rows {
        if let Some(date) = row.date {
            by_date.insert(date, row);
        }
    }
    let latest = latest_row(rows);

    let build = |ship| synthesize_ship(ship, &by_date, latest, settings, clock);
    CruiseRegions {
        diamond_princess: build(Ship::DiamondPrincess),
        nagasaki: build(Ship::Nagasaki),
    }
}

/// Latest-dated row; the later one in input order wins on equal dates.
fn latest_row(rows: &[CruiseCountRow]) -> Option<&CruiseCountRow> {
    rows.iter()
        .enumerate()
        .max_by_key(|(i, row)| (row.date, *i))
        .map(|(_, row)| row)
}

fn synthesize_ship(
    ship: Ship,
    by_date: &HashMap<NaiveDate, &CruiseCountRow>,
    latest: Option<&CruiseCountRow>,
    settings: &CruiseSettings,
    clock: &Clock,
) -> RegionSummaryEntry {
    let mut entry = RegionSummaryEntry::named(settings.name(ship));

    if let Some(row) = latest {
        let total = |metric| safe_parse_int(row.cell(ship, metric));
        entry.confirmed = total(CruiseMetric::Confirmed);
        entry.recovered = total(CruiseMetric::Recovered);
        entry.deceased = total(CruiseMetric::Deceased);
        entry.critical = total(CruiseMetric::Critical);
        entry.tested = total(CruiseMetric::Tested);
    }

    entry.daily_confirmed_count =
        daily_increments(ship, CruiseMetric::Confirmed, by_date, settings.start, clock);
    entry.daily_deceased_count =
        daily_increments(ship, CruiseMetric::Deceased, by_date, settings.start, clock);
    entry.daily_confirmed_start_date = Some(settings.start);
    entry.daily_deceased_start_date = Some(settings.start);

    let confirmed = &entry.daily_confirmed_count;
    if let Some(&last) = confirmed.last() {
        entry.newly_confirmed = last;
    }
    if confirmed.len() > 1 {
        entry.yesterday_confirmed = confirmed[confirmed.len() - 2];
    }

    // The published feed overwrites newlyDeceased with the second-to-last
    // day and never fills yesterdayDeceased. Kept until consumers migrate.
    let deceased = &entry.daily_deceased_count;
    if let Some(&last) = deceased.last() {
        entry.newly_deceased = last;
    }
    if deceased.len() > 1 {
        entry.newly_deceased = deceased[deceased.len() - 2];
    }

    entry
}

/// Day-over-day increments of one cumulative metric.
///
/// Days with no row, or a blank cell, contribute 0 and do not move the last
/// seen value, so the full delta lands on the next day that reports.
fn daily_increments(
    ship: Ship,
    metric: CruiseMetric,
    by_date: &HashMap<NaiveDate, &CruiseCountRow>,
    start: NaiveDate,
    clock: &Clock,
) -> Vec<i64> {
    let mut last_seen = 0;
    clock
        .days_since(start)
        .map(|day| {
            let cell = by_date.get(&day).and_then(|row| row.cell(ship, metric));
            if !is_present(cell) {
                return 0;
            }
            let value = safe_parse_int(cell);
            let increment = value.saturating_sub(last_seen);
            last_seen = value;
            increment
        })
        .collect()
}
