//! Wire shapes of the fleet REST API.
//!
//! Field names follow the backend verbatim; conversion into domain types
//! happens here so nothing outside the network adapter sees them.

use crate::fleet::domain::{TelemetryRecord, VehicleDetailReading, VehicleSummary};
use crate::fleet::policies::StatusNormalization;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub(super) struct VehiclesEnvelope {
    pub vehicles: Vec<VehiclePayload>,
}

#[derive(Debug, Deserialize)]
pub(super) struct VehiclePayload {
    id: u64,
    vehicle: String,
    #[serde(default)]
    volumetotal: u64,
    #[serde(default)]
    connected: u64,
    #[serde(default, rename = "softwareUpdates")]
    software_updates: u64,
    #[serde(default)]
    img: String,
}

impl From<VehiclePayload> for VehicleSummary {
    fn from(payload: VehiclePayload) -> Self {
        VehicleSummary::new(
            payload.id,
            payload.vehicle,
            payload.volumetotal,
            payload.connected,
            payload.software_updates,
            &payload.img,
        )
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct TelemetryPayload {
    codigo: String,
    modelo: String,
    ano: i32,
    #[serde(default)]
    cor: String,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    vendas: u64,
    #[serde(default)]
    conectados: u64,
    #[serde(default)]
    atualizados: u64,
    #[serde(default, deserialize_with = "string_or_number")]
    odometro: Option<String>,
    #[serde(default, rename = "nivelCombustivel", deserialize_with = "string_or_number")]
    nivel_combustivel: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    latitude: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    longitude: Option<String>,
}

impl From<TelemetryPayload> for TelemetryRecord {
    fn from(payload: TelemetryPayload) -> Self {
        TelemetryRecord {
            code: payload.codigo,
            model: payload.modelo,
            year: payload.ano,
            color: payload.cor,
            status: StatusNormalization::normalize_opt(payload.status.as_deref()),
            sales: payload.vendas,
            connected: payload.conectados,
            updated: payload.atualizados,
            odometer: payload.odometro,
            fuel_level: payload.nivel_combustivel,
            latitude: payload.latitude,
            longitude: payload.longitude,
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct DetailQuery<'a> {
    pub vin: &'a str,
}

#[derive(Debug, Deserialize)]
pub(super) struct DetailPayload {
    #[serde(default, deserialize_with = "gauge_reading")]
    odometro: Option<String>,
    #[serde(default, rename = "nivelCombustivel", deserialize_with = "gauge_reading")]
    nivel_combustivel: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    lat: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    long: Option<String>,
}

impl From<DetailPayload> for VehicleDetailReading {
    fn from(payload: DetailPayload) -> Self {
        VehicleDetailReading {
            odometer: payload.odometro,
            fuel_level: payload.nivel_combustivel,
            status: StatusNormalization::normalize_detail(payload.status.as_deref()),
            latitude: payload.lat,
            longitude: payload.long,
        }
    }
}

/// Readings arrive as strings from some firmware and as numbers from others
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(other) => Some(other.to_string()),
    })
}

/// Odometer and fuel gauges: a numeric zero means no reading, the string "0" is kept
fn gauge_reading<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => None,
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::String(s)) => Some(s),
        None | Some(Value::Null) => None,
        Some(other) => Some(other.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fleet::domain::ConnectionStatus;
    use serde_json::json;

    #[test]
    fn test_vehicle_payload_into_summary() {
        let envelope: VehiclesEnvelope = serde_json::from_value(json!({
            "vehicles": [{
                "id": 1,
                "vehicle": "Ranger",
                "volumetotal": 145760,
                "connected": 70000,
                "softwareUpdates": 27550,
                "img": "/img/ranger.png"
            }]
        }))
        .unwrap();
        let summary: VehicleSummary = envelope.vehicles.into_iter().next().unwrap().into();
        assert_eq!(summary.model(), "Ranger");
        assert_eq!(summary.software_updates(), 27550);
        assert_eq!(summary.image(), "ranger.png");
    }

    #[test]
    fn test_telemetry_payload_normalizes_status() {
        let rows: Vec<TelemetryPayload> = serde_json::from_value(json!([
            {"codigo": "A1", "modelo": "Ranger", "ano": 2022, "status": "on"},
            {"codigo": "A2", "modelo": "Ranger", "ano": 2021, "status": "Conectado"},
            {"codigo": "A3", "modelo": "Ranger", "ano": 2020, "status": "off"},
            {"codigo": "A4", "modelo": "Ranger", "ano": 2019}
        ]))
        .unwrap();
        let statuses: Vec<ConnectionStatus> = rows
            .into_iter()
            .map(|row| TelemetryRecord::from(row).status)
            .collect();
        assert_eq!(
            statuses,
            vec![
                ConnectionStatus::Connected,
                ConnectionStatus::Connected,
                ConnectionStatus::Disconnected,
                ConnectionStatus::Disconnected,
            ]
        );
    }

    #[test]
    fn test_telemetry_payload_full_row() {
        let row: TelemetryPayload = serde_json::from_value(json!({
            "codigo": "2FRHDUYS2Y63NHD22454",
            "modelo": "Ranger",
            "ano": 2022,
            "cor": "Azul",
            "status": "Conectado",
            "vendas": 145760,
            "conectados": 70000,
            "atualizados": 27550,
            "odometro": 23344,
            "nivelCombustivel": "76",
            "latitude": -12.2322,
            "longitude": "-35.2314"
        }))
        .unwrap();
        let record = TelemetryRecord::from(row);
        assert_eq!(record.color, "Azul");
        assert_eq!(record.sales, 145760);
        assert_eq!(record.odometer.as_deref(), Some("23344"));
        assert_eq!(record.fuel_level.as_deref(), Some("76"));
        assert_eq!(record.latitude.as_deref(), Some("-12.2322"));
        assert_eq!(record.longitude.as_deref(), Some("-35.2314"));
    }

    #[test]
    fn test_detail_payload_accepts_numbers_and_nulls() {
        let payload: DetailPayload = serde_json::from_value(json!({
            "odometro": 230000,
            "nivelCombustivel": null,
            "status": "on",
            "lat": -12.2322,
            "long": -35.2314
        }))
        .unwrap();
        let reading = VehicleDetailReading::from(payload);
        assert_eq!(reading.odometer.as_deref(), Some("230000"));
        assert!(reading.fuel_level.is_none());
        assert_eq!(reading.status, ConnectionStatus::Connected);
        assert_eq!(reading.latitude.as_deref(), Some("-12.2322"));
        assert_eq!(reading.longitude.as_deref(), Some("-35.2314"));
    }

    #[test]
    fn test_detail_payload_accepts_string_coordinates() {
        let payload: DetailPayload = serde_json::from_value(json!({
            "odometro": "23344",
            "nivelCombustivel": "76",
            "status": "on",
            "lat": "-12.2322",
            "long": "-35.2314"
        }))
        .unwrap();
        let reading = VehicleDetailReading::from(payload);
        assert_eq!(reading.odometer.as_deref(), Some("23344"));
        assert_eq!(reading.latitude.as_deref(), Some("-12.2322"));
        assert_eq!(reading.longitude.as_deref(), Some("-35.2314"));
    }

    #[test]
    fn test_detail_payload_only_on_means_connected() {
        let payload: DetailPayload =
            serde_json::from_value(json!({"status": "Conectado"})).unwrap();
        assert_eq!(
            VehicleDetailReading::from(payload).status,
            ConnectionStatus::Disconnected
        );
    }

    #[test]
    fn test_detail_payload_numeric_zero_gauges_are_missing() {
        let payload: DetailPayload = serde_json::from_value(json!({
            "odometro": 0,
            "nivelCombustivel": "0",
            "status": "off",
            "lat": 0,
            "long": 0.0
        }))
        .unwrap();
        let reading = VehicleDetailReading::from(payload);
        assert!(reading.odometer.is_none());
        assert_eq!(reading.fuel_level.as_deref(), Some("0"));
        assert_eq!(reading.latitude.as_deref(), Some("0"));
        assert_eq!(reading.longitude.as_deref(), Some("0.0"));
    }

    #[test]
    fn test_detail_query_shape() {
        let body = serde_json::to_value(DetailQuery { vin: "A1" }).unwrap();
        assert_eq!(body, json!({"vin": "A1"}));
    }
}
