//! Derived records: the nationwide daily series and per-region summaries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One day of the nationwide series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySummaryEntry {
    pub date: NaiveDate,
    pub confirmed: i64,
    pub confirmed_cumulative: i64,
    pub deceased: i64,
    pub deceased_cumulative: i64,
    pub recovered: i64,
    pub recovered_cumulative: i64,
    pub critical: i64,
    pub critical_cumulative: i64,
    pub tested: i64,
    pub tested_cumulative: i64,
    pub active: i64,
    pub active_cumulative: i64,
    pub cruise_confirmed_cumulative: i64,
    pub cruise_recovered_cumulative: i64,
    pub cruise_deceased_cumulative: i64,
    pub cruise_critical_cumulative: i64,
    pub cruise_tested_cumulative: i64,
    pub confirmed_avg3d: i64,
    pub confirmed_cumulative_avg3d: i64,
    pub confirmed_avg7d: i64,
    pub confirmed_cumulative_avg7d: i64,
    /// Legacy alias of `deceased`, absent on the first entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deaths: Option<i64>,
}

impl DailySummaryEntry {
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            confirmed: 0,
            confirmed_cumulative: 0,
            deceased: 0,
            deceased_cumulative: 0,
            recovered: 0,
            recovered_cumulative: 0,
            critical: 0,
            critical_cumulative: 0,
            tested: 0,
            tested_cumulative: 0,
            active: 0,
            active_cumulative: 0,
            cruise_confirmed_cumulative: 0,
            cruise_recovered_cumulative: 0,
            cruise_deceased_cumulative: 0,
            cruise_critical_cumulative: 0,
            cruise_tested_cumulative: 0,
            confirmed_avg3d: 0,
            confirmed_cumulative_avg3d: 0,
            confirmed_avg7d: 0,
            confirmed_cumulative_avg7d: 0,
            deaths: None,
        }
    }

    #[must_use]
    pub fn get(&self, field: CumulativeField) -> i64 {
        match field {
            CumulativeField::Confirmed => self.confirmed_cumulative,
            CumulativeField::Deceased => self.deceased_cumulative,
            CumulativeField::Recovered => self.recovered_cumulative,
            CumulativeField::Critical => self.critical_cumulative,
            CumulativeField::Tested => self.tested_cumulative,
            CumulativeField::Active => self.active_cumulative,
            CumulativeField::CruiseConfirmed => self.cruise_confirmed_cumulative,
            CumulativeField::CruiseRecovered => self.cruise_recovered_cumulative,
            CumulativeField::CruiseDeceased => self.cruise_deceased_cumulative,
            CumulativeField::CruiseCritical => self.cruise_critical_cumulative,
            CumulativeField::CruiseTested => self.cruise_tested_cumulative,
        }
    }

    pub fn set(&mut self, field: CumulativeField, value: i64) {
        let slot = match field {
            CumulativeField::Confirmed => &mut self.confirmed_cumulative,
            CumulativeField::Deceased => &mut self.deceased_cumulative,
            CumulativeField::Recovered => &mut self.recovered_cumulative,
            CumulativeField::Critical => &mut self.critical_cumulative,
            CumulativeField::Tested => &mut self.tested_cumulative,
            CumulativeField::Active => &mut self.active_cumulative,
            CumulativeField::CruiseConfirmed => &mut self.cruise_confirmed_cumulative,
            CumulativeField::CruiseRecovered => &mut self.cruise_recovered_cumulative,
            CumulativeField::CruiseDeceased => &mut self.cruise_deceased_cumulative,
            CumulativeField::CruiseCritical => &mut self.cruise_critical_cumulative,
            CumulativeField::CruiseTested => &mut self.cruise_tested_cumulative,
        };
        *slot = value;
    }

    /// Daily increment paired with a cumulative field, where one exists.
    #[must_use]
    pub fn increment(&self, field: CumulativeField) -> Option<i64> {
        match field {
            CumulativeField::Confirmed => Some(self.confirmed),
            CumulativeField::Deceased => Some(self.deceased),
            CumulativeField::Recovered => Some(self.recovered),
            CumulativeField::Critical => Some(self.critical),
            CumulativeField::Tested => Some(self.tested),
            CumulativeField::Active => Some(self.active),
            _ => None,
        }
    }

    pub fn set_increment(&mut self, field: CumulativeField, value: i64) {
        match field {
            CumulativeField::Confirmed => self.confirmed = value,
            CumulativeField::Deceased => self.deceased = value,
            CumulativeField::Recovered => self.recovered = value,
            CumulativeField::Critical => self.critical = value,
            CumulativeField::Tested => self.tested = value,
            CumulativeField::Active => self.active = value,
            _ => {}
        }
    }
}

/// Cumulative columns of a [`DailySummaryEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CumulativeField {
    Confirmed,
    Deceased,
    Recovered,
    Critical,
    Tested,
    Active,
    CruiseConfirmed,
    CruiseRecovered,
    CruiseDeceased,
    CruiseCritical,
    CruiseTested,
}

impl CumulativeField {
    /// Columns carried forward across days that report nothing.
    pub const FORWARD_FILLED: [Self; 9] = [
        Self::Recovered,
        Self::Deceased,
        Self::Critical,
        Self::Tested,
        Self::CruiseConfirmed,
        Self::CruiseRecovered,
        Self::CruiseDeceased,
        Self::CruiseCritical,
        Self::CruiseTested,
    ];

    /// Columns whose daily value is derived from the cumulative one.
    pub const DERIVED_INCREMENTS: [Self; 4] =
        [Self::Tested, Self::Recovered, Self::Critical, Self::Active];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Confirmed => "confirmedCumulative",
            Self::Deceased => "deceasedCumulative",
            Self::Recovered => "recoveredCumulative",
            Self::Critical => "criticalCumulative",
            Self::Tested => "testedCumulative",
            Self::Active => "activeCumulative",
            Self::CruiseConfirmed => "cruiseConfirmedCumulative",
            Self::CruiseRecovered => "cruiseRecoveredCumulative",
            Self::CruiseDeceased => "cruiseDeceasedCumulative",
            Self::CruiseCritical => "cruiseCriticalCumulative",
            Self::CruiseTested => "cruiseTestedCumulative",
        }
    }
}

/// Summary for one region, real or pseudo.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionSummaryEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_ja: Option<String>,
    pub confirmed: i64,
    pub deceased: i64,
    pub recovered: i64,
    pub critical: i64,
    pub tested: i64,
    pub cruise_passenger: i64,
    #[serde(default)]
    pub confirmed_by_city: BTreeMap<String, i64>,
    #[serde(default)]
    pub daily_confirmed_count: Vec<i64>,
    pub daily_confirmed_start_date: Option<NaiveDate>,
    pub newly_confirmed: i64,
    pub yesterday_confirmed: i64,
    #[serde(default)]
    pub daily_deceased_count: Vec<i64>,
    pub daily_deceased_start_date: Option<NaiveDate>,
    pub newly_deceased: i64,
    pub yesterday_deceased: i64,
    #[serde(default, skip_serializing_if = "is_false")]
    pub pseudo_prefecture: bool,
    /// Legacy alias of `deceased`.
    #[serde(default)]
    pub deaths: i64,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(b: &bool) -> bool {
    !*b
}

impl RegionSummaryEntry {
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }
}

/// The combined artifact handed to persistence and rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyResult {
    pub regions: Vec<RegionSummaryEntry>,
    pub daily: Vec<DailySummaryEntry>,
    pub updated: String,
}
