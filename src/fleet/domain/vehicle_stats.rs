use super::VehicleSummary;
use serde::Serialize;

/// Aggregate counters shown for the current selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct VehicleStats {
    pub total_sales: u64,
    pub connected: u64,
    pub software_updates: u64,
}

impl VehicleStats {
    pub fn from_summary(summary: &VehicleSummary) -> Self {
        Self {
            total_sales: summary.total_sales(),
            connected: summary.connected(),
            software_updates: summary.software_updates(),
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}
