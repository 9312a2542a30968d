//! Dashboard read model for rendering operations

use crate::fleet::domain::VehicleStats;
use serde::Serialize;

/// Snapshot of the dashboard as shown to the user
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReadModel {
    /// RFC 3339 timestamp of the snapshot
    pub generated_at: String,
    pub search: SearchView,
    pub stats: VehicleStats,
    pub selected: Option<SelectedView>,
    /// Every model in the summary list, in backend order
    pub models: Vec<ModelView>,
    /// The filtered telemetry rows, in display order
    pub vehicles: Vec<VehicleRow>,
    /// Size of the unfiltered telemetry set
    pub total_vehicles: usize,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchView {
    pub model: String,
    pub code: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SelectedView {
    pub model: String,
    /// Local asset path or placeholder URL
    pub image: String,
    pub detail: Option<DetailView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DetailView {
    pub code: String,
    pub odometer: String,
    pub fuel_level: String,
    pub status: String,
    pub latitude: String,
    pub longitude: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelView {
    pub id: u64,
    pub model: String,
    pub total_sales: u64,
    pub connected: u64,
    pub software_updates: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct VehicleRow {
    pub code: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub status: String,
    pub sales: u64,
    pub connected: u64,
    pub updated: u64,
}
