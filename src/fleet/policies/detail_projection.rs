use crate::fleet::domain::{ConnectionStatus, VehicleDetail, VehicleDetailReading};
use crate::shared::messages::NOT_AVAILABLE;

/// DetailProjection policy turning a detail reading into display fields
///
/// Rules:
/// - odometer is suffixed with " Km", fuel level with "%"
/// - absent or empty readings become "N/A"
/// - a failed lookup yields "N/A" everywhere and a disconnected status
pub struct DetailProjection;

impl DetailProjection {
    pub fn from_reading(code: &str, reading: &VehicleDetailReading) -> VehicleDetail {
        VehicleDetail {
            code: code.to_string(),
            odometer: Self::with_unit(reading.odometer.as_deref(), " Km"),
            fuel_level: Self::with_unit(reading.fuel_level.as_deref(), "%"),
            status: reading.status,
            latitude: Self::with_unit(reading.latitude.as_deref(), ""),
            longitude: Self::with_unit(reading.longitude.as_deref(), ""),
        }
    }

    pub fn unavailable(code: &str) -> VehicleDetail {
        VehicleDetail {
            code: code.to_string(),
            odometer: NOT_AVAILABLE.to_string(),
            fuel_level: NOT_AVAILABLE.to_string(),
            status: ConnectionStatus::Disconnected,
            latitude: NOT_AVAILABLE.to_string(),
            longitude: NOT_AVAILABLE.to_string(),
        }
    }

    fn with_unit(value: Option<&str>, unit: &str) -> String {
        match value.map(str::trim) {
            Some(v) if !v.is_empty() => format!("{}{}", v, unit),
            _ => NOT_AVAILABLE.to_string(),
        }
    }
}
