// src/config/mod.rs
pub mod types;

pub use self::types::{Config, CruiseConfig, DateConfig, RegionConfig, PREFECTURES};

use crate::error::{Result, TallyError};
use regex::Regex;
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "casetally.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from `path`, or `casetally.toml` in the current
    /// directory. A missing file yields the defaults.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.unwrap_or(Path::new(DEFAULT_CONFIG_FILE));
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path).map_err(|source| TallyError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        Self::parse_toml(&content, path)
    }

    /// Parses a TOML document; `origin` is only used for error messages.
    ///
    /// # Errors
    /// Returns error if the TOML is invalid.
    pub fn parse_toml(content: &str, origin: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|source| TallyError::Config {
            source,
            path: origin.to_path_buf(),
        })
    }

    /// Validates configuration.
    ///
    /// # Errors
    /// Returns error if the UTC offset is out of range or the cruise
    /// passenger pattern does not compile.
    pub fn validate(&self) -> Result<()> {
        if !(-12..=14).contains(&self.dates.utc_offset_hours) {
            return Err(TallyError::Offset(self.dates.utc_offset_hours));
        }
        self.passenger_pattern()?;
        Ok(())
    }

    /// Compiles the cruise passenger pattern.
    ///
    /// # Errors
    /// Returns error if the regex is invalid.
    pub fn passenger_pattern(&self) -> Result<Regex> {
        Ok(Regex::new(&self.cruise.passenger_pattern)?)
    }

    /// Renders the effective configuration as TOML.
    ///
    /// # Errors
    /// Returns error if serialization fails.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
