use super::ConnectionStatus;

/// One vehicle's telemetry row as served by the fleet API
///
/// `status` is already canonical: normalization happens when the row is
/// decoded and the record is never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryRecord {
    /// Vehicle identifier code (VIN)
    pub code: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub status: ConnectionStatus,
    pub sales: u64,
    pub connected: u64,
    pub updated: u64,
    pub odometer: Option<String>,
    pub fuel_level: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

impl TelemetryRecord {
    /// Creates a record with zeroed counters and no live readings
    pub fn new(code: impl Into<String>, model: impl Into<String>, year: i32) -> Self {
        Self {
            code: code.into(),
            model: model.into(),
            year,
            color: String::new(),
            status: ConnectionStatus::Disconnected,
            sales: 0,
            connected: 0,
            updated: 0,
            odometer: None,
            fuel_level: None,
            latitude: None,
            longitude: None,
        }
    }

    pub fn with_status(mut self, status: ConnectionStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_counters(mut self, sales: u64, connected: u64, updated: u64) -> Self {
        self.sales = sales;
        self.connected = connected;
        self.updated = updated;
        self
    }

    /// Case-insensitive exact model comparison
    pub fn has_model(&self, model: &str) -> bool {
        self.model.to_lowercase() == model.to_lowercase()
    }

    /// Case-insensitive substring match on the vehicle code
    pub fn code_contains(&self, term: &str) -> bool {
        self.code.to_lowercase().contains(&term.to_lowercase())
    }
}
