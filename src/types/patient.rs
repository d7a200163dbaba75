//! Input records: the patient ledger and the manually curated sheets.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::parse::{lenient_cell, lenient_date};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PatientStatus {
    Hospitalized,
    Recovered,
    Discharged,
    Deceased,
    #[default]
    #[serde(other)]
    Unknown,
}

/// One row of the per-patient ledger.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    #[serde(default, deserialize_with = "lenient_cell")]
    pub patient_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub date_announced: Option<NaiveDate>,
    /// Region key, used verbatim.
    #[serde(default)]
    pub prefecture: String,
    #[serde(default)]
    pub city_name: Option<String>,
    #[serde(default)]
    pub patient_status: PatientStatus,
    #[serde(default)]
    pub confirmed_patient: bool,
    #[serde(default, deserialize_with = "lenient_date")]
    pub deceased_date: Option<NaiveDate>,
    #[serde(default)]
    pub known_cluster: Option<String>,
    // Display-only fields, carried so a bundle round-trips.
    #[serde(default, deserialize_with = "lenient_cell")]
    pub age: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub residence: Option<String>,
}

impl PatientRecord {
    #[must_use]
    pub fn is_deceased(&self) -> bool {
        self.patient_status == PatientStatus::Deceased
    }

    /// City name if one was recorded.
    #[must_use]
    pub fn city(&self) -> Option<&str> {
        self.city_name.as_deref().filter(|c| !c.trim().is_empty())
    }
}

/// Manual nationwide totals for one day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DailyOverrideRow {
    #[serde(default, deserialize_with = "lenient_date")]
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_cell")]
    pub recovered: Option<String>,
    #[serde(default, deserialize_with = "lenient_cell")]
    pub critical: Option<String>,
    #[serde(default, deserialize_with = "lenient_cell")]
    pub tested: Option<String>,
}

/// Manual per-region totals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionOverrideRow {
    #[serde(default)]
    pub prefecture: String,
    #[serde(default, deserialize_with = "lenient_cell")]
    pub recovered: Option<String>,
    #[serde(default)]
    pub prefecture_ja: Option<String>,
}
