// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TallyError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Invalid input bundle {path}: {source}")]
    InvalidInput {
        source: serde_json::Error,
        path: PathBuf,
    },

    #[error("Invalid config {path}: {source}")]
    Config {
        source: toml::de::Error,
        path: PathBuf,
    },

    #[error("Invalid cruise passenger pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("UTC offset out of range: {0} hours")]
    Offset(i32),
}

pub type Result<T> = std::result::Result<T, TallyError>;
