// src/parse.rs
//! Lenient parsing for hand-maintained spreadsheet cells.
//!
//! Blank or garbled cells are routine in the manual sheets, so nothing here
//! returns an error: unparsable numbers become 0 and unparsable dates become
//! absent.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Largest magnitude a numeric cell may carry; larger values are clamped.
pub const CELL_LIMIT: i64 = 1_000_000_000_000;

/// Parses the leading integer of a cell, `0` when there is none.
///
/// Accepts leading whitespace and an optional sign, then reads the longest
/// run of ASCII digits: `"12"` and `"12.7"` give 12, `""`, `"abc"` and
/// `None` give 0. Results are clamped to `±CELL_LIMIT`.
#[must_use]
pub fn safe_parse_int(value: Option<&str>) -> i64 {
    let Some(raw) = value else {
        return 0;
    };
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let Ok(n) = digits[..end].parse::<i64>() else {
        return 0;
    };
    let n = n.min(CELL_LIMIT);
    if negative {
        -n
    } else {
        n
    }
}

/// True when a cell carries any value at all.
#[must_use]
pub fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// Parses an ISO `YYYY-MM-DD` date, `None` when blank or malformed.
#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).ok()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Cell {
    Text(String),
    Int(i64),
    Float(f64),
    Flag(bool),
}

/// Serde adapter: spreadsheet cell that may arrive as a string or a number.
/// Numbers are kept in their textual form so `safe_parse_int` sees them the
/// same way it sees typed-in text.
///
/// # Errors
/// Only fails on nested objects or arrays.
pub fn lenient_cell<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let cell: Option<Cell> = Option::deserialize(deserializer)?;
    Ok(cell.map(|c| match c {
        Cell::Text(s) => s,
        Cell::Int(n) => n.to_string(),
        Cell::Float(f) => f.to_string(),
        Cell::Flag(b) => b.to_string(),
    }))
}

/// Serde adapter: optional date field where junk deserializes to `None`.
///
/// # Errors
/// Only fails when the field is not a string or null.
pub fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(|s| {
        let parsed = parse_date(s);
        if parsed.is_none() && !s.trim().is_empty() {
            tracing::debug!(value = s, "Ignoring malformed date");
        }
        parsed
    }))
}
