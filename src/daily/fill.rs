// src/daily/fill.rs
//! Carry cumulative values across days that report nothing.
//!
//! The manual sheets do not distinguish "no entry" from "zero", so the
//! decision of what counts as absent lives behind [`FillPolicy`]. Swapping in
//! an explicit present/absent flag later only means another implementation.

use crate::types::{CumulativeField, DailySummaryEntry};

#[cfg(test)]
#[path = "fill_test.rs"]
mod tests;

/// Decides whether a cumulative cell holds a real value.
pub trait FillPolicy {
    fn is_absent(&self, value: i64) -> bool;
}

/// A zero means no override was supplied for that day.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroMeansMissing;

impl FillPolicy for ZeroMeansMissing {
    fn is_absent(&self, value: i64) -> bool {
        value == 0
    }
}

/// Replaces absent values with the previous entry's value, field by field.
/// The first entry is left as-is.
pub fn forward_fill<P: FillPolicy>(
    entries: &mut [DailySummaryEntry],
    fields: &[CumulativeField],
    policy: &P,
) {
    for &field in fields {
        for i in 1..entries.len() {
            if policy.is_absent(entries[i].get(field)) {
                let previous = entries[i - 1].get(field);
                entries[i].set(field, previous);
            }
        }
    }
}
