use crate::fleet::domain::TelemetryRecord;
use std::cmp::Ordering;

/// TelemetrySorter - orders telemetry rows for display
///
/// Model name ascending, then year descending. The sort is stable, so rows
/// sharing model and year keep their arrival order.
pub struct TelemetrySorter;

impl TelemetrySorter {
    pub fn sort(mut records: Vec<TelemetryRecord>) -> Vec<TelemetryRecord> {
        records.sort_by(Self::compare);
        records
    }

    pub fn compare(a: &TelemetryRecord, b: &TelemetryRecord) -> Ordering {
        a.model.cmp(&b.model).then_with(|| b.year.cmp(&a.year))
    }
}
