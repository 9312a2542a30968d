use super::payloads::{DetailPayload, DetailQuery, TelemetryPayload, VehiclesEnvelope};
use crate::fleet::domain::{
    Credentials, TelemetryRecord, User, VehicleDetailReading, VehicleSummary,
};
use crate::ports::outbound::{AuthGateway, VehicleRepository};
use crate::shared::error::FleetError;
use crate::shared::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

const VEHICLES_PATH: &str = "/vehicles";
const VEHICLE_DATA_PATH: &str = "/vehicleData";
const LOGIN_PATH: &str = "/login";

/// FleetApiClient adapter for the fleet REST backend
///
/// Implements both the `VehicleRepository` and the `AuthGateway` ports over
/// one shared reqwest client. Requests are issued once: there is no retry
/// and no backoff, failures are returned to the caller as `FleetError`.
pub struct FleetApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl FleetApiClient {
    /// Creates a client for `base_url` (e.g. `http://localhost:3001`)
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("fleet-dashboard/{}", version);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        tracing::debug!(endpoint = path, "GET");
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| transport_error(path, e))?;
        Self::decode(path, response).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!(endpoint = path, "POST");
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| transport_error(path, e))?;
        Self::decode(path, response).await
    }

    async fn decode<T: DeserializeOwned>(path: &str, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(FleetError::HttpStatus {
                endpoint: path.to_string(),
                status: status.as_u16(),
            }
            .into());
        }

        response
            .json::<T>()
            .await
            .map_err(|e| transport_error(path, e))
    }
}

fn transport_error(path: &str, error: reqwest::Error) -> anyhow::Error {
    FleetError::Transport {
        endpoint: path.to_string(),
        details: error.to_string(),
    }
    .into()
}

#[async_trait]
impl VehicleRepository for FleetApiClient {
    async fn fetch_vehicle_summaries(&self) -> Result<Vec<VehicleSummary>> {
        let envelope: VehiclesEnvelope = self.get_json(VEHICLES_PATH).await?;
        Ok(envelope.vehicles.into_iter().map(Into::into).collect())
    }

    async fn fetch_telemetry(&self) -> Result<Vec<TelemetryRecord>> {
        let rows: Vec<TelemetryPayload> = self.get_json(VEHICLE_DATA_PATH).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn fetch_vehicle_detail(&self, code: &str) -> Result<VehicleDetailReading> {
        let payload: DetailPayload = self
            .post_json(VEHICLE_DATA_PATH, &DetailQuery { vin: code })
            .await?;
        Ok(payload.into())
    }
}

#[async_trait]
impl AuthGateway for FleetApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<User> {
        self.post_json(LOGIN_PATH, credentials).await
    }
}
