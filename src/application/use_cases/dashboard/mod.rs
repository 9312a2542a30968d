use crate::application::dto::DashboardRequest;
use crate::application::search::{
    SearchDebouncer, SearchEvent, SearchInput, SearchSubscription, ViewCommand,
};
use crate::application::state::{DashboardState, DetailRequest};
use crate::ports::outbound::{ProgressReporter, VehicleRepository};
use crate::shared::error::FleetError;
use crate::shared::messages::{
    DASHBOARD_LOAD_FAILED, VEHICLE_DATA_LOAD_FAILED, VEHICLE_LIST_LOAD_FAILED,
};
use crate::shared::Result;
use std::time::Duration;

#[cfg(test)]
mod tests;

/// DashboardUseCase - Drives a `DashboardState` against the fleet backend
///
/// Owns no state itself: every operation takes the state it works on, so a
/// single task can keep the state and call in here between user inputs.
///
/// # Type Parameters
/// * `R` - VehicleRepository implementation
/// * `P` - ProgressReporter implementation
pub struct DashboardUseCase<R, P> {
    repository: R,
    progress_reporter: P,
}

impl<R, P> DashboardUseCase<R, P>
where
    R: VehicleRepository,
    P: ProgressReporter,
{
    /// Creates a new DashboardUseCase with injected dependencies
    pub fn new(repository: R, progress_reporter: P) -> Self {
        Self {
            repository,
            progress_reporter,
        }
    }

    /// Loads a fresh dashboard state
    pub async fn load(&self) -> DashboardState {
        let mut state = DashboardState::new();
        self.reload(&mut state).await;
        state
    }

    /// Fetches both collections concurrently into `state`
    ///
    /// Failures never escape: each one is logged and recorded as the
    /// state's user-facing error, and whatever arrived is kept.
    pub async fn reload(&self, state: &mut DashboardState) {
        state.begin_load();
        self.progress_reporter.begin_activity("🚗 Loading fleet data...");

        let (summaries, telemetry) = tokio::join!(
            self.repository.fetch_vehicle_summaries(),
            self.repository.fetch_telemetry()
        );

        self.progress_reporter.end_activity();

        match summaries {
            Ok(summaries) => state.set_vehicles(summaries),
            Err(e) => {
                tracing::error!(error = %format!("{:#}", e), "failed to load vehicle list");
                state.record_error(VEHICLE_LIST_LOAD_FAILED);
            }
        }

        match telemetry {
            Ok(records) => state.set_telemetry(records),
            Err(e) => {
                tracing::error!(error = %format!("{:#}", e), "failed to load vehicle data");
                state.record_error(VEHICLE_DATA_LOAD_FAILED);
            }
        }

        state.finish_load();

        match state.error() {
            Some(message) => self.progress_reporter.report_error(&format!("❌ {}", message)),
            None => self.progress_reporter.report_completion(&format!(
                "✅ Loaded {} model(s) and {} vehicle(s)",
                state.vehicles().len(),
                state.telemetry().len()
            )),
        }
    }

    /// Selects `model` and fetches the detail of its first row
    ///
    /// # Errors
    /// `FleetError::UnknownModel` when no summary carries that model name
    pub async fn select_model(&self, state: &mut DashboardState, model: &str) -> Result<()> {
        let vehicle = state
            .find_vehicle(model)
            .cloned()
            .ok_or_else(|| FleetError::UnknownModel {
                model: model.to_string(),
            })?;

        if let Some(request) = state.select_vehicle(Some(vehicle)) {
            self.load_detail(state, &request).await;
        }
        Ok(())
    }

    /// Applies one accepted query from the search pipeline
    ///
    /// Returns whether a vehicle ended up selected.
    pub async fn apply_search_query(&self, state: &mut DashboardState, query: &str) -> bool {
        if let Some(request) = state.apply_model_query(query) {
            self.load_detail(state, &request).await;
        }
        state.selected().is_some()
    }

    /// Applies an immediate view command
    pub fn apply_command(&self, state: &mut DashboardState, command: &ViewCommand) {
        match command {
            ViewCommand::FilterCode(term) => state.filter_by_code(term),
            ViewCommand::Clear => state.clear_search(),
            ViewCommand::Deselect => {
                state.select_vehicle(None);
            }
        }
    }

    /// Runs a detail lookup and folds the outcome into `state`
    pub async fn load_detail(&self, state: &mut DashboardState, request: &DetailRequest) {
        match self.repository.fetch_vehicle_detail(&request.code).await {
            Ok(reading) => {
                if !state.apply_detail(request, &reading) {
                    tracing::debug!(code = %request.code, "discarding stale vehicle detail");
                }
            }
            Err(e) => {
                tracing::warn!(
                    code = %request.code,
                    error = %format!("{:#}", e),
                    "failed to load vehicle detail"
                );
                state.apply_detail_failure(request);
            }
        }
    }

    /// Starts the debounced model search over a loaded state
    ///
    /// # Errors
    /// `FleetError::DashboardUnavailable` unless both collections loaded
    pub fn start_search(
        &self,
        state: &DashboardState,
        interval: Duration,
    ) -> Result<(SearchInput, SearchSubscription)> {
        ensure_ready(state)?;
        Ok(SearchDebouncer::spawn(interval))
    }

    /// Feeds every search event into `state` until the input closes
    ///
    /// `on_update` is called after each event with the resulting state.
    pub async fn run_search<F>(
        &self,
        state: &mut DashboardState,
        mut subscription: SearchSubscription,
        mut on_update: F,
    ) -> Result<()>
    where
        F: FnMut(&DashboardState, &SearchEvent) -> Result<()>,
    {
        while let Some(event) = subscription.next().await {
            match &event {
                SearchEvent::Query(query) => {
                    if !self.apply_search_query(state, query).await {
                        self.progress_reporter
                            .report_error(&format!("⚠️  No vehicle model matches '{}'", query));
                    }
                }
                SearchEvent::Command(command) => self.apply_command(state, command),
            }
            if let Err(e) = on_update(state, &event) {
                subscription.shutdown().await;
                return Err(e);
            }
        }
        subscription.shutdown().await;
        Ok(())
    }

    /// Loads the dashboard and applies the requested selection
    ///
    /// # Errors
    /// `FleetError::DashboardUnavailable` when a load failed,
    /// `FleetError::UnknownModel` for a model nobody sells
    pub async fn execute(&self, request: DashboardRequest) -> Result<DashboardState> {
        let mut state = self.load().await;
        ensure_ready(&state)?;

        if let Some(model) = request.model.as_deref() {
            self.select_model(&mut state, model.trim()).await?;
        }
        if let Some(code) = request.code.as_deref() {
            state.filter_by_code(code);
        }

        Ok(state)
    }
}

fn ensure_ready(state: &DashboardState) -> Result<()> {
    if state.is_ready() {
        return Ok(());
    }
    Err(FleetError::DashboardUnavailable {
        message: state.error().unwrap_or(DASHBOARD_LOAD_FAILED).to_string(),
    }
    .into())
}
