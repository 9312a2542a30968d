use super::{VehicleDetail, VehicleSummary};

/// The vehicle currently selected on the dashboard
///
/// Detail stays `None` until the follow-up lookup settles, and is cleared
/// again on a full reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedVehicleView {
    summary: VehicleSummary,
    detail: Option<VehicleDetail>,
}

impl SelectedVehicleView {
    pub fn new(summary: VehicleSummary) -> Self {
        Self {
            summary,
            detail: None,
        }
    }

    pub fn summary(&self) -> &VehicleSummary {
        &self.summary
    }

    pub fn model(&self) -> &str {
        self.summary.model()
    }

    pub fn detail(&self) -> Option<&VehicleDetail> {
        self.detail.as_ref()
    }

    pub fn set_detail(&mut self, detail: VehicleDetail) {
        self.detail = Some(detail);
    }

    pub fn clear_detail(&mut self) {
        self.detail = None;
    }
}
