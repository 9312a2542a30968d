use super::*;
use crate::fleet::domain::{
    ConnectionStatus, TelemetryRecord, VehicleDetailReading, VehicleSummary,
};
use std::collections::HashMap;
use std::sync::Mutex;

// Mock implementations for testing
#[derive(Default)]
struct MockVehicleRepository {
    summaries: Option<Vec<VehicleSummary>>,
    telemetry: Option<Vec<TelemetryRecord>>,
    details: HashMap<String, VehicleDetailReading>,
    detail_requests: Mutex<Vec<String>>,
}

impl MockVehicleRepository {
    fn fleet() -> Self {
        Self {
            summaries: Some(vec![
                VehicleSummary::new(1, "Ranger".to_string(), 145_760, 70_000, 27_550, "/img/ranger.png"),
                VehicleSummary::new(2, "Mustang".to_string(), 1_500, 500, 750, "/img/mustang.png"),
                VehicleSummary::new(3, "Territory".to_string(), 4_560, 4_000, 3_050, "/img/territory.png"),
            ]),
            telemetry: Some(vec![
                TelemetryRecord::new("RG-2021", "Ranger", 2021),
                TelemetryRecord::new("RG-2023", "Ranger", 2023)
                    .with_status(ConnectionStatus::Connected),
                TelemetryRecord::new("MS-2022", "Mustang", 2022),
            ]),
            ..Self::default()
        }
    }

    fn with_detail(mut self, code: &str, reading: VehicleDetailReading) -> Self {
        self.details.insert(code.to_string(), reading);
        self
    }

    fn requested_codes(&self) -> Vec<String> {
        self.detail_requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl VehicleRepository for MockVehicleRepository {
    async fn fetch_vehicle_summaries(&self) -> Result<Vec<VehicleSummary>> {
        self.summaries
            .clone()
            .ok_or_else(|| anyhow::anyhow!("summaries unavailable"))
    }

    async fn fetch_telemetry(&self) -> Result<Vec<TelemetryRecord>> {
        self.telemetry
            .clone()
            .ok_or_else(|| anyhow::anyhow!("telemetry unavailable"))
    }

    async fn fetch_vehicle_detail(&self, code: &str) -> Result<VehicleDetailReading> {
        self.detail_requests.lock().unwrap().push(code.to_string());
        self.details
            .get(code)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no detail for {}", code))
    }
}

#[derive(Default)]
struct MockProgressReporter {
    errors: Mutex<Vec<String>>,
    completions: Mutex<Vec<String>>,
}

impl ProgressReporter for &MockProgressReporter {
    fn report(&self, _message: &str) {}
    fn report_error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
    fn report_completion(&self, message: &str) {
        self.completions.lock().unwrap().push(message.to_string());
    }
}

fn ranger_reading() -> VehicleDetailReading {
    VehicleDetailReading {
        odometer: Some("23344".to_string()),
        fuel_level: Some("76".to_string()),
        status: ConnectionStatus::Connected,
        latitude: Some("-12.2322".to_string()),
        longitude: Some("-35.2314".to_string()),
    }
}

#[tokio::test]
async fn test_load_populates_both_collections() {
    let reporter = MockProgressReporter::default();
    let use_case = DashboardUseCase::new(MockVehicleRepository::fleet(), &reporter);

    let state = use_case.load().await;

    assert!(state.is_ready());
    assert_eq!(state.vehicles().len(), 3);
    assert_eq!(state.filtered_len(), 3);
    assert_eq!(state.telemetry()[0].model, "Mustang");
    assert_eq!(reporter.completions.lock().unwrap().len(), 1);
    assert!(reporter.errors.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_load_keeps_partial_results_on_failure() {
    let reporter = MockProgressReporter::default();
    let repository = MockVehicleRepository {
        telemetry: None,
        ..MockVehicleRepository::fleet()
    };
    let use_case = DashboardUseCase::new(repository, &reporter);

    let state = use_case.load().await;

    assert!(!state.is_loading());
    assert_eq!(state.error(), Some(VEHICLE_DATA_LOAD_FAILED));
    assert_eq!(state.vehicles().len(), 3);
    assert_eq!(state.telemetry().len(), 0);
    assert_eq!(reporter.errors.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_load_failure_of_both_reports_vehicle_list_first() {
    let reporter = MockProgressReporter::default();
    let use_case = DashboardUseCase::new(MockVehicleRepository::default(), &reporter);

    let state = use_case.load().await;

    assert_eq!(state.error(), Some(VEHICLE_LIST_LOAD_FAILED));
    assert!(!state.is_loading());
}

#[tokio::test]
async fn test_select_model_fetches_first_row_detail() {
    let reporter = MockProgressReporter::default();
    let repository = MockVehicleRepository::fleet().with_detail("RG-2023", ranger_reading());
    let use_case = DashboardUseCase::new(repository, &reporter);
    let mut state = use_case.load().await;

    use_case.select_model(&mut state, "RANGER").await.unwrap();

    let selected = state.selected().unwrap();
    assert_eq!(selected.model(), "Ranger");
    let detail = selected.detail().unwrap();
    assert_eq!(detail.code, "RG-2023");
    assert_eq!(detail.odometer, "23344 Km");
    assert_eq!(detail.fuel_level, "76%");
    assert_eq!(detail.latitude, "-12.2322");
    assert_eq!(detail.longitude, "-35.2314");
    assert_eq!(state.stats().total_sales, 145_760);
    assert_eq!(use_case.repository.requested_codes(), vec!["RG-2023"]);
}

#[tokio::test]
async fn test_select_unknown_model_is_an_error() {
    let reporter = MockProgressReporter::default();
    let use_case = DashboardUseCase::new(MockVehicleRepository::fleet(), &reporter);
    let mut state = use_case.load().await;

    let err = use_case.select_model(&mut state, "Model T").await.unwrap_err();

    assert!(matches!(
        err.downcast_ref::<FleetError>(),
        Some(FleetError::UnknownModel { .. })
    ));
    assert!(state.selected().is_none());
}

#[tokio::test]
async fn test_select_model_without_rows_skips_detail_fetch() {
    let reporter = MockProgressReporter::default();
    let use_case = DashboardUseCase::new(MockVehicleRepository::fleet(), &reporter);
    let mut state = use_case.load().await;

    use_case.select_model(&mut state, "Territory").await.unwrap();

    assert_eq!(state.filtered_len(), 0);
    assert!(state.stats().is_zero());
    assert!(use_case.repository.requested_codes().is_empty());
}

#[tokio::test]
async fn test_failed_detail_degrades_to_placeholders() {
    let reporter = MockProgressReporter::default();
    let use_case = DashboardUseCase::new(MockVehicleRepository::fleet(), &reporter);
    let mut state = use_case.load().await;

    use_case.select_model(&mut state, "Mustang").await.unwrap();

    let detail = state.selected().unwrap().detail().unwrap();
    assert_eq!(detail.code, "MS-2022");
    assert_eq!(detail.odometer, "N/A");
    assert_eq!(detail.fuel_level, "N/A");
    assert_eq!(detail.latitude, "N/A");
    assert_eq!(detail.longitude, "N/A");
    assert_eq!(detail.status, ConnectionStatus::Disconnected);
}

#[tokio::test]
async fn test_search_query_selects_and_fetches_detail() {
    let reporter = MockProgressReporter::default();
    let repository = MockVehicleRepository::fleet().with_detail("RG-2023", ranger_reading());
    let use_case = DashboardUseCase::new(repository, &reporter);
    let mut state = use_case.load().await;

    assert!(use_case.apply_search_query(&mut state, "ranger").await);
    assert_eq!(state.selected().unwrap().detail().unwrap().code, "RG-2023");

    assert!(!use_case.apply_search_query(&mut state, "bronco").await);
    assert!(state.selected().is_none());
    assert!(state.stats().is_zero());
}

#[tokio::test]
async fn test_execute_applies_model_and_code() {
    let reporter = MockProgressReporter::default();
    let use_case = DashboardUseCase::new(MockVehicleRepository::fleet(), &reporter);

    let request = DashboardRequest::new(Some("ranger".to_string()), Some("2021".to_string()));
    let state = use_case.execute(request).await.unwrap();

    let codes: Vec<_> = state.filtered_records().map(|r| r.code.as_str()).collect();
    assert_eq!(codes, vec!["RG-2021"]);
    assert_eq!(state.stats().connected, 70_000);
}

#[tokio::test]
async fn test_execute_fails_when_load_failed() {
    let reporter = MockProgressReporter::default();
    let repository = MockVehicleRepository {
        summaries: None,
        ..MockVehicleRepository::fleet()
    };
    let use_case = DashboardUseCase::new(repository, &reporter);

    let err = use_case
        .execute(DashboardRequest::default())
        .await
        .unwrap_err();

    match err.downcast_ref::<FleetError>() {
        Some(FleetError::DashboardUnavailable { message }) => {
            assert_eq!(message, VEHICLE_LIST_LOAD_FAILED)
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_search_is_not_started_after_failed_load() {
    let reporter = MockProgressReporter::default();
    let repository = MockVehicleRepository {
        telemetry: None,
        ..MockVehicleRepository::fleet()
    };
    let use_case = DashboardUseCase::new(repository, &reporter);
    let state = use_case.load().await;

    assert!(use_case
        .start_search(&state, Duration::from_millis(300))
        .is_err());
}

#[tokio::test(start_paused = true)]
async fn test_run_search_applies_debounced_queries() {
    let reporter = MockProgressReporter::default();
    let repository = MockVehicleRepository::fleet().with_detail("RG-2023", ranger_reading());
    let use_case = DashboardUseCase::new(repository, &reporter);
    let mut state = use_case.load().await;

    let (input, subscription) = use_case
        .start_search(&state, Duration::from_millis(300))
        .unwrap();
    input.push("Ran");
    input.push("Ranger");
    drop(input);

    let mut seen = Vec::new();
    use_case
        .run_search(&mut state, subscription, |state, event| {
            seen.push((event.clone(), state.selected().map(|s| s.model().to_string())));
            Ok(())
        })
        .await
        .unwrap();

    assert_eq!(
        seen,
        vec![(
            SearchEvent::Query("ranger".to_string()),
            Some("Ranger".to_string())
        )]
    );
    assert_eq!(use_case.repository.requested_codes(), vec!["RG-2023"]);
}

#[tokio::test(start_paused = true)]
async fn test_run_search_reports_unmatched_query() {
    let reporter = MockProgressReporter::default();
    let use_case = DashboardUseCase::new(MockVehicleRepository::fleet(), &reporter);
    let mut state = use_case.load().await;

    let (input, subscription) = use_case
        .start_search(&state, Duration::from_millis(300))
        .unwrap();
    input.push("Model T");
    drop(input);

    use_case
        .run_search(&mut state, subscription, |_, _| Ok(()))
        .await
        .unwrap();

    let errors = reporter.errors.lock().unwrap();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("model t"));
}

#[tokio::test]
async fn test_apply_command_routes_to_state() {
    let reporter = MockProgressReporter::default();
    let use_case = DashboardUseCase::new(MockVehicleRepository::fleet(), &reporter);
    let mut state = use_case.load().await;
    use_case.select_model(&mut state, "Ranger").await.unwrap();

    use_case.apply_command(&mut state, &ViewCommand::FilterCode("2021".to_string()));
    let codes: Vec<_> = state.filtered_records().map(|r| r.code.as_str()).collect();
    assert_eq!(codes, vec!["RG-2021"]);
    assert_eq!(state.search_code(), "2021");

    use_case.apply_command(&mut state, &ViewCommand::Deselect);
    assert!(state.selected().is_none());
    assert_eq!(state.search_code(), "");
    assert_eq!(state.filtered_len(), state.telemetry().len());

    use_case.select_model(&mut state, "Mustang").await.unwrap();
    use_case.apply_command(&mut state, &ViewCommand::Clear);
    assert!(state.selected().is_none());
    assert_eq!(state.search_model(), "");
    assert!(state.stats().is_zero());
}

#[tokio::test(start_paused = true)]
async fn test_run_search_applies_commands_in_input_order() {
    let reporter = MockProgressReporter::default();
    let use_case = DashboardUseCase::new(MockVehicleRepository::fleet(), &reporter);
    let mut state = use_case.load().await;

    let (input, subscription) = use_case
        .start_search(&state, Duration::from_millis(300))
        .unwrap();
    input.push("ranger");
    input.command(ViewCommand::FilterCode("2021".to_string()));
    input.command(ViewCommand::Clear);
    drop(input);

    let mut views = Vec::new();
    use_case
        .run_search(&mut state, subscription, |state, _| {
            views.push((
                state.selected().map(|s| s.model().to_string()),
                state.filtered_len(),
            ));
            Ok(())
        })
        .await
        .unwrap();

    let all = state.telemetry().len();
    assert_eq!(
        views,
        vec![
            (Some("Ranger".to_string()), 2),
            (Some("Ranger".to_string()), 1),
            (None, all),
        ]
    );
    assert!(reporter.errors.lock().unwrap().is_empty());
}
