// src/clock.rs
//! "Today" as seen from a fixed UTC offset, captured once per run.

use chrono::{Duration, FixedOffset, NaiveDate, Utc};

use crate::error::{Result, TallyError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock {
    today: NaiveDate,
}

impl Clock {
    /// Reads the wall clock once and converts it to the given offset.
    ///
    /// # Errors
    /// Returns error if the offset is outside what `chrono` accepts.
    pub fn now(utc_offset_hours: i32) -> Result<Self> {
        let offset = FixedOffset::east_opt(utc_offset_hours * 3600)
            .ok_or(TallyError::Offset(utc_offset_hours))?;
        Ok(Self {
            today: Utc::now().with_timezone(&offset).date_naive(),
        })
    }

    #[must_use]
    pub fn fixed(today: NaiveDate) -> Self {
        Self { today }
    }

    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Every day from `start` through today, inclusive.
    pub fn days_since(&self, start: NaiveDate) -> impl Iterator<Item = NaiveDate> {
        days_inclusive(start, self.today)
    }
}

/// Calendar days from `start` to `end` inclusive; empty when `start > end`.
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    let len = (end - start).num_days() + 1;
    (0..len.max(0)).map(move |i| start + Duration::days(i))
}
