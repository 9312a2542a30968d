use crate::fleet::domain::{
    SelectedVehicleView, TelemetryRecord, VehicleDetailReading, VehicleStats, VehicleSummary,
};
use crate::fleet::policies::DetailProjection;
use crate::fleet::services::{TelemetryFilter, TelemetrySorter};

/// A detail lookup the state is waiting for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRequest {
    pub code: String,
}

/// DashboardState - the dashboard's view model
///
/// Holds the two independently loaded collections and everything derived
/// from them: the filtered view, the selected vehicle with its detail
/// projection, and the stats.
///
/// # Invariants
/// - `vehicle_data` is sorted (model asc, year desc) and only replaced on load
/// - `filtered` holds ascending indices into `vehicle_data`
/// - a detail result is applied only if it answers the latest request
#[derive(Debug, Clone)]
pub struct DashboardState {
    vehicles: Vec<VehicleSummary>,
    vehicle_data: Vec<TelemetryRecord>,
    filtered: Vec<usize>,
    selected: Option<SelectedVehicleView>,
    stats: VehicleStats,
    search_model: String,
    search_code: String,
    pending_detail: Option<String>,
    loading: bool,
    error: Option<String>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardState {
    /// Creates an empty state in the loading phase
    pub fn new() -> Self {
        Self {
            vehicles: Vec::new(),
            vehicle_data: Vec::new(),
            filtered: Vec::new(),
            selected: None,
            stats: VehicleStats::default(),
            search_model: String::new(),
            search_code: String::new(),
            pending_detail: None,
            loading: true,
            error: None,
        }
    }

    // ---- loading -------------------------------------------------------

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn set_vehicles(&mut self, vehicles: Vec<VehicleSummary>) {
        self.vehicles = vehicles;
        self.update_stats();
    }

    /// Replaces the telemetry rows
    ///
    /// The filtered view is re-derived from the current selection and code
    /// search, so a reload never shows rows outside the selected model.
    pub fn set_telemetry(&mut self, records: Vec<TelemetryRecord>) {
        self.vehicle_data = TelemetrySorter::sort(records);
        self.refilter();
    }

    /// Records a user-facing load error; the first one recorded wins
    pub fn record_error(&mut self, message: &str) {
        if self.error.is_none() {
            self.error = Some(message.to_string());
        }
    }

    pub fn finish_load(&mut self) {
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Both collections arrived and nothing failed
    pub fn is_ready(&self) -> bool {
        !self.loading && self.error.is_none()
    }

    // ---- selection -----------------------------------------------------

    /// First summary whose model matches `model`, ignoring case
    pub fn find_vehicle(&self, model: &str) -> Option<&VehicleSummary> {
        self.vehicles.iter().find(|v| v.has_model(model))
    }

    /// Selects a vehicle (or deselects with `None`)
    ///
    /// Clears the code search. A selection narrows the view to the model's
    /// rows and returns the detail lookup to run for the first of them.
    /// Deselecting resets the view to every row.
    pub fn select_vehicle(&mut self, vehicle: Option<VehicleSummary>) -> Option<DetailRequest> {
        self.search_code.clear();

        match vehicle {
            Some(vehicle) => {
                self.search_model = vehicle.model().to_string();
                self.filtered = TelemetryFilter::by_model(&self.vehicle_data, vehicle.model());
                self.selected = Some(SelectedVehicleView::new(vehicle));
                self.update_stats();
                self.request_first_detail()
            }
            None => {
                self.selected = None;
                self.reset_to_all_vehicles();
                None
            }
        }
    }

    /// Applies an accepted query from the debounced model search
    ///
    /// `query` is expected trimmed and lower-cased. A match behaves like
    /// `select_vehicle`; no match drops the selection and zeroes the stats
    /// while leaving the current view untouched.
    pub fn apply_model_query(&mut self, query: &str) -> Option<DetailRequest> {
        match self.find_vehicle(query).cloned() {
            Some(vehicle) => self.select_vehicle(Some(vehicle)),
            None => {
                self.selected = None;
                self.pending_detail = None;
                self.update_stats();
                None
            }
        }
    }

    /// Applies a successful detail lookup; returns false for stale answers
    pub fn apply_detail(&mut self, request: &DetailRequest, reading: &VehicleDetailReading) -> bool {
        let Some(selected) = self.take_pending(request) else {
            return false;
        };
        selected.set_detail(DetailProjection::from_reading(&request.code, reading));
        true
    }

    /// Applies a failed detail lookup as placeholder values; returns false for stale answers
    pub fn apply_detail_failure(&mut self, request: &DetailRequest) -> bool {
        let Some(selected) = self.take_pending(request) else {
            return false;
        };
        selected.set_detail(DetailProjection::unavailable(&request.code));
        true
    }

    // ---- search --------------------------------------------------------

    /// Free-text code search
    ///
    /// A blank term resets the view to the selected model's rows (or all
    /// rows). Otherwise rows are matched by code substring, within the
    /// selected model when there is one.
    pub fn filter_by_code(&mut self, term: &str) {
        self.search_code = term.to_string();
        self.refilter();
    }

    /// Full reset: no selection, no search, every row, zero stats
    pub fn clear_search(&mut self) {
        self.search_code.clear();
        self.selected = None;
        self.reset_to_all_vehicles();
    }

    // ---- accessors -----------------------------------------------------

    pub fn vehicles(&self) -> &[VehicleSummary] {
        &self.vehicles
    }

    /// Every telemetry row, sorted
    pub fn telemetry(&self) -> &[TelemetryRecord] {
        &self.vehicle_data
    }

    pub fn filtered_indices(&self) -> &[usize] {
        &self.filtered
    }

    pub fn filtered_records(&self) -> impl Iterator<Item = &TelemetryRecord> + '_ {
        self.filtered.iter().map(move |&i| &self.vehicle_data[i])
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn selected(&self) -> Option<&SelectedVehicleView> {
        self.selected.as_ref()
    }

    pub fn stats(&self) -> VehicleStats {
        self.stats
    }

    pub fn search_model(&self) -> &str {
        &self.search_model
    }

    pub fn search_code(&self) -> &str {
        &self.search_code
    }

    pub fn pending_detail(&self) -> Option<&str> {
        self.pending_detail.as_deref()
    }

    // ---- internals -----------------------------------------------------

    /// Rebuilds `filtered` from the selection and the code search
    fn refilter(&mut self) {
        let term = self.search_code.trim();
        let model = self.selected.as_ref().map(|s| s.model());

        self.filtered = if term.is_empty() {
            match model {
                Some(model) => TelemetryFilter::by_model(&self.vehicle_data, model),
                None => TelemetryFilter::all(&self.vehicle_data),
            }
        } else {
            TelemetryFilter::by_code(&self.vehicle_data, term, model)
        };

        self.update_stats();
    }

    fn reset_to_all_vehicles(&mut self) {
        self.search_model.clear();
        self.filtered = TelemetryFilter::all(&self.vehicle_data);
        self.pending_detail = None;
        if let Some(selected) = self.selected.as_mut() {
            selected.clear_detail();
        }
        self.update_stats();
    }

    fn request_first_detail(&mut self) -> Option<DetailRequest> {
        let code = self
            .filtered_records()
            .next()
            .map(|r| r.code.clone())
            .filter(|code| !code.is_empty());
        self.pending_detail = code.clone();
        code.map(|code| DetailRequest { code })
    }

    fn take_pending(&mut self, request: &DetailRequest) -> Option<&mut SelectedVehicleView> {
        if self.pending_detail.as_deref() != Some(request.code.as_str()) {
            return None;
        }
        self.pending_detail = None;
        self.selected.as_mut()
    }

    /// Stats follow the selected model's summary while its view is non-empty
    fn update_stats(&mut self) {
        self.stats = match &self.selected {
            Some(selected) if !self.filtered.is_empty() => self
                .vehicles
                .iter()
                .find(|v| v.model() == selected.model())
                .map(VehicleStats::from_summary)
                .unwrap_or_default(),
            _ => VehicleStats::default(),
        };
    }
}
