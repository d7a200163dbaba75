//! Cumulative cruise-ship counts as entered by hand.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::parse::{lenient_cell, lenient_date};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ship {
    DiamondPrincess,
    Nagasaki,
}

impl Ship {
    pub const ALL: [Self; 2] = [Self::DiamondPrincess, Self::Nagasaki];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CruiseMetric {
    Confirmed,
    Recovered,
    Deceased,
    Critical,
    Tested,
}

impl CruiseMetric {
    pub const ALL: [Self; 5] = [
        Self::Confirmed,
        Self::Recovered,
        Self::Deceased,
        Self::Critical,
        Self::Tested,
    ];
}

/// Cumulative totals for both ships as of `date`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CruiseCountRow {
    #[serde(default, deserialize_with = "lenient_date")]
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_cell")]
    pub dp_confirmed: Option<String>,
    #[serde(default, deserialize_with = "lenient_cell")]
    pub dp_recovered: Option<String>,
    #[serde(default, deserialize_with = "lenient_cell")]
    pub dp_deceased: Option<String>,
    #[serde(default, deserialize_with = "lenient_cell")]
    pub dp_critical: Option<String>,
    #[serde(default, deserialize_with = "lenient_cell")]
    pub dp_tested: Option<String>,
    #[serde(default, deserialize_with = "lenient_cell")]
    pub nagasaki_confirmed: Option<String>,
    #[serde(default, deserialize_with = "lenient_cell")]
    pub nagasaki_recovered: Option<String>,
    #[serde(default, deserialize_with = "lenient_cell")]
    pub nagasaki_deceased: Option<String>,
    #[serde(default, deserialize_with = "lenient_cell")]
    pub nagasaki_critical: Option<String>,
    #[serde(default, deserialize_with = "lenient_cell")]
    pub nagasaki_tested: Option<String>,
}

impl CruiseCountRow {
    /// Raw cell for one ship and metric.
    #[must_use]
    pub fn cell(&self, ship: Ship, metric: CruiseMetric) -> Option<&str> {
        let cell = match (ship, metric) {
            (Ship::DiamondPrincess, CruiseMetric::Confirmed) => &self.dp_confirmed,
            (Ship::DiamondPrincess, CruiseMetric::Recovered) => &self.dp_recovered,
            (Ship::DiamondPrincess, CruiseMetric::Deceased) => &self.dp_deceased,
            (Ship::DiamondPrincess, CruiseMetric::Critical) => &self.dp_critical,
            (Ship::DiamondPrincess, CruiseMetric::Tested) => &self.dp_tested,
            (Ship::Nagasaki, CruiseMetric::Confirmed) => &self.nagasaki_confirmed,
            (Ship::Nagasaki, CruiseMetric::Recovered) => &self.nagasaki_recovered,
            (Ship::Nagasaki, CruiseMetric::Deceased) => &self.nagasaki_deceased,
            (Ship::Nagasaki, CruiseMetric::Critical) => &self.nagasaki_critical,
            (Ship::Nagasaki, CruiseMetric::Tested) => &self.nagasaki_tested,
        };
        cell.as_deref()
    }
}
