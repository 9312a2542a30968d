//! Builder for constructing DashboardReadModel from a dashboard state

use super::dashboard_read_model::{
    DashboardReadModel, DetailView, ModelView, SearchView, SelectedView, VehicleRow,
};
use crate::application::state::DashboardState;
use crate::fleet::domain::{SelectedVehicleView, TelemetryRecord, VehicleDetail, VehicleSummary};
use crate::fleet::policies::ImageFallback;
use chrono::{DateTime, SecondsFormat, Utc};

/// Builder for constructing DashboardReadModel from a dashboard state
pub struct DashboardReadModelBuilder;

impl DashboardReadModelBuilder {
    /// Builds a snapshot stamped with the current time
    pub fn build(state: &DashboardState, images: &ImageFallback) -> DashboardReadModel {
        Self::build_at(state, images, Utc::now())
    }

    pub fn build_at(
        state: &DashboardState,
        images: &ImageFallback,
        generated_at: DateTime<Utc>,
    ) -> DashboardReadModel {
        DashboardReadModel {
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            search: SearchView {
                model: state.search_model().to_string(),
                code: state.search_code().to_string(),
            },
            stats: state.stats(),
            selected: state.selected().map(|s| Self::build_selected(s, images)),
            models: state.vehicles().iter().map(Self::build_model).collect(),
            vehicles: state.filtered_records().map(Self::build_row).collect(),
            total_vehicles: state.telemetry().len(),
            error: state.error().map(str::to_string),
        }
    }

    fn build_selected(selected: &SelectedVehicleView, images: &ImageFallback) -> SelectedView {
        let summary = selected.summary();
        SelectedView {
            model: summary.model().to_string(),
            image: images.resolve(summary.image(), summary.model()),
            detail: selected.detail().map(Self::build_detail),
        }
    }

    fn build_detail(detail: &VehicleDetail) -> DetailView {
        DetailView {
            code: detail.code.clone(),
            odometer: detail.odometer.clone(),
            fuel_level: detail.fuel_level.clone(),
            status: detail.status.to_string(),
            latitude: detail.latitude.clone(),
            longitude: detail.longitude.clone(),
        }
    }

    fn build_model(summary: &VehicleSummary) -> ModelView {
        ModelView {
            id: summary.id(),
            model: summary.model().to_string(),
            total_sales: summary.total_sales(),
            connected: summary.connected(),
            software_updates: summary.software_updates(),
        }
    }

    fn build_row(record: &TelemetryRecord) -> VehicleRow {
        VehicleRow {
            code: record.code.clone(),
            model: record.model.clone(),
            year: record.year,
            color: record.color.clone(),
            status: record.status.to_string(),
            sales: record.sales,
            connected: record.connected,
            updated: record.updated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fleet::domain::{ConnectionStatus, TelemetryRecord, VehicleSummary};
    use chrono::TimeZone;

    fn state() -> DashboardState {
        let mut state = DashboardState::new();
        state.set_vehicles(vec![VehicleSummary::new(
            1,
            "Bronco Sport".to_string(),
            10,
            5,
            2,
            "/img/bronco.png",
        )]);
        state.set_telemetry(vec![
            TelemetryRecord::new("BR-1", "Bronco Sport", 2022)
                .with_status(ConnectionStatus::Connected)
                .with_color("Azul"),
            TelemetryRecord::new("MS-1", "Mustang", 2021),
        ]);
        state.finish_load();
        state
    }

    fn timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_overview_snapshot() {
        let model = DashboardReadModelBuilder::build_at(&state(), &ImageFallback::default(), timestamp());

        assert_eq!(model.generated_at, "2024-05-01T12:00:00Z");
        assert!(model.selected.is_none());
        assert_eq!(model.models.len(), 1);
        assert_eq!(model.vehicles.len(), 2);
        assert_eq!(model.total_vehicles, 2);
        assert_eq!(model.vehicles[0].status, "Connected");
        assert_eq!(model.vehicles[0].color, "Azul");
        assert!(model.stats.is_zero());
    }

    #[test]
    fn test_selection_uses_placeholder_without_assets() {
        let mut state = state();
        let vehicle = state.find_vehicle("bronco sport").cloned();
        let request = state.select_vehicle(vehicle).unwrap();
        state.apply_detail_failure(&request);

        let model = DashboardReadModelBuilder::build_at(&state, &ImageFallback::default(), timestamp());

        let selected = model.selected.unwrap();
        assert_eq!(
            selected.image,
            "https://via.placeholder.com/300x150?text=Bronco%20Sport"
        );
        let detail = selected.detail.unwrap();
        assert_eq!(detail.code, "BR-1");
        assert_eq!(detail.status, "Disconnected");
        assert_eq!(model.vehicles.len(), 1);
        assert_eq!(model.total_vehicles, 2);
        assert_eq!(model.search.model, "Bronco Sport");
        assert_eq!(model.stats.total_sales, 10);
    }

    #[test]
    fn test_error_is_carried() {
        let mut state = DashboardState::new();
        state.record_error("Failed to load vehicle list");
        state.finish_load();

        let model = DashboardReadModelBuilder::build(&state, &ImageFallback::default());
        assert_eq!(model.error.as_deref(), Some("Failed to load vehicle list"));
    }
}
