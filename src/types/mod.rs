mod cruise;
mod patient;
mod summary;

pub use cruise::{CruiseCountRow, CruiseMetric, Ship};
pub use patient::{DailyOverrideRow, PatientRecord, PatientStatus, RegionOverrideRow};
pub use summary::{CumulativeField, DailySummaryEntry, RegionSummaryEntry, TallyResult};
