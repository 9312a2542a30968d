use super::ConnectionStatus;

/// Live reading returned by the detail lookup for a single vehicle code
///
/// Every reading keeps the text the backend sent, whether it arrived as a
/// JSON string or a number.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VehicleDetailReading {
    pub odometer: Option<String>,
    pub fuel_level: Option<String>,
    pub status: ConnectionStatus,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

/// Display-ready detail fields of the selected vehicle
///
/// Every field is always populated; missing readings carry the "N/A" placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleDetail {
    pub code: String,
    pub odometer: String,
    pub fuel_level: String,
    pub status: ConnectionStatus,
    pub latitude: String,
    pub longitude: String,
}
