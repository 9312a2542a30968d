use crate::fleet::domain::TelemetryRecord;

/// TelemetryFilter - linear scans over the sorted telemetry rows
///
/// Results are indices into the scanned slice, in slice order, so a
/// filtered view is always a subset of the full set and keeps its ordering.
pub struct TelemetryFilter;

impl TelemetryFilter {
    /// Every row
    pub fn all(records: &[TelemetryRecord]) -> Vec<usize> {
        (0..records.len()).collect()
    }

    /// Rows whose model equals `model`, ignoring case
    pub fn by_model(records: &[TelemetryRecord], model: &str) -> Vec<usize> {
        Self::matching(records, |r| r.has_model(model))
    }

    /// Rows whose code contains `term`, ignoring case
    ///
    /// When `within_model` is given only that model's rows are considered.
    pub fn by_code(
        records: &[TelemetryRecord],
        term: &str,
        within_model: Option<&str>,
    ) -> Vec<usize> {
        Self::matching(records, |r| {
            within_model.is_none_or(|model| r.has_model(model)) && r.code_contains(term)
        })
    }

    fn matching(records: &[TelemetryRecord], predicate: impl Fn(&TelemetryRecord) -> bool) -> Vec<usize> {
        records
            .iter()
            .enumerate()
            .filter(|(_, r)| predicate(r))
            .map(|(i, _)| i)
            .collect()
    }
}
