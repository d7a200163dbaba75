// src/input.rs
//! The already-materialized inputs of one aggregation run.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Result, TallyError};
use crate::types::{CruiseCountRow, DailyOverrideRow, PatientRecord, RegionOverrideRow};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TallyInputs {
    #[serde(default)]
    pub patients: Vec<PatientRecord>,
    #[serde(default)]
    pub daily_overrides: Vec<DailyOverrideRow>,
    #[serde(default)]
    pub region_overrides: Vec<RegionOverrideRow>,
    /// `None` disables cruise incorporation entirely.
    #[serde(default)]
    pub cruise_counts: Option<Vec<CruiseCountRow>>,
    /// Last-updated stamp, copied verbatim into the result.
    #[serde(default)]
    pub updated: String,
}

impl TallyInputs {
    /// Reads a JSON input bundle.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or is not a bundle.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| TallyError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        Self::parse(&content, path)
    }

    /// Parses a JSON bundle; `origin` is only used for error messages.
    ///
    /// # Errors
    /// Returns error if the top-level structure is malformed.
    pub fn parse(content: &str, origin: &Path) -> Result<Self> {
        serde_json::from_str(content).map_err(|source| TallyError::InvalidInput {
            source,
            path: origin.to_path_buf(),
        })
    }
}
