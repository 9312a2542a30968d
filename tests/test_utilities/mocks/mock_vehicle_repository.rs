use async_trait::async_trait;
use fleet_dashboard::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock VehicleRepository for testing
///
/// A collection left as `None` fails to load. Detail lookups are recorded
/// so tests can assert which codes were requested.
#[derive(Default, Clone)]
pub struct MockVehicleRepository {
    summaries: Option<Vec<VehicleSummary>>,
    telemetry: Option<Vec<TelemetryRecord>>,
    details: HashMap<String, VehicleDetailReading>,
    detail_requests: Arc<Mutex<Vec<String>>>,
}

impl MockVehicleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Three models, five telemetry rows, detail for the newest Ranger
    pub fn sample_fleet() -> Self {
        Self::new()
            .with_summaries(vec![
                VehicleSummary::new(1, "Ranger".to_string(), 145_760, 70_000, 27_550, "/img/ranger.png"),
                VehicleSummary::new(2, "Mustang".to_string(), 1_500, 500, 750, "/img/mustang.png"),
                VehicleSummary::new(3, "Territory".to_string(), 4_560, 4_000, 3_050, "/img/territory.png"),
            ])
            .with_telemetry(vec![
                TelemetryRecord::new("2FRHDUYS2Y63NHD22454", "Ranger", 2021)
                    .with_color("Azul")
                    .with_status(ConnectionStatus::Connected)
                    .with_counters(145_760, 70_000, 27_550),
                TelemetryRecord::new("2RFAASDY54E4HDU34874", "Ranger", 2023)
                    .with_color("Preto")
                    .with_counters(1, 0, 0),
                TelemetryRecord::new("2FRHDUYS2Y63NHD22455", "Mustang", 2022)
                    .with_color("Vermelho")
                    .with_status(ConnectionStatus::Connected),
                TelemetryRecord::new("2RFAASDY54E4HDU34875", "Territory", 2022),
                TelemetryRecord::new("2FRHDUYS2Y63NHD22654", "Territory", 2020),
            ])
            .with_detail(
                "2RFAASDY54E4HDU34874",
                VehicleDetailReading {
                    odometer: Some("23344".to_string()),
                    fuel_level: Some("76".to_string()),
                    status: ConnectionStatus::Connected,
                    latitude: Some("-12.2322".to_string()),
                    longitude: Some("-35.2314".to_string()),
                },
            )
    }

    pub fn with_summaries(mut self, summaries: Vec<VehicleSummary>) -> Self {
        self.summaries = Some(summaries);
        self
    }

    pub fn with_telemetry(mut self, telemetry: Vec<TelemetryRecord>) -> Self {
        self.telemetry = Some(telemetry);
        self
    }

    pub fn without_summaries(mut self) -> Self {
        self.summaries = None;
        self
    }

    pub fn without_telemetry(mut self) -> Self {
        self.telemetry = None;
        self
    }

    pub fn with_detail(mut self, code: &str, reading: VehicleDetailReading) -> Self {
        self.details.insert(code.to_string(), reading);
        self
    }

    pub fn requested_codes(&self) -> Vec<String> {
        self.detail_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl VehicleRepository for MockVehicleRepository {
    async fn fetch_vehicle_summaries(&self) -> Result<Vec<VehicleSummary>> {
        self.summaries
            .clone()
            .ok_or_else(|| anyhow::anyhow!("GET /vehicles failed"))
    }

    async fn fetch_telemetry(&self) -> Result<Vec<TelemetryRecord>> {
        self.telemetry
            .clone()
            .ok_or_else(|| anyhow::anyhow!("GET /vehicleData failed"))
    }

    async fn fetch_vehicle_detail(&self, code: &str) -> Result<VehicleDetailReading> {
        self.detail_requests.lock().unwrap().push(code.to_string());
        self.details
            .get(code)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no detail for {}", code))
    }
}
