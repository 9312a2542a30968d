use crate::fleet::domain::{TelemetryRecord, VehicleDetailReading, VehicleSummary};
use crate::shared::Result;
use async_trait::async_trait;

/// VehicleRepository port for reading fleet data
///
/// This port abstracts the fleet REST backend. Implementations must be
/// `Send + Sync` so the two startup loads can run concurrently.
#[async_trait]
pub trait VehicleRepository: Send + Sync {
    /// Fetches the per-model summary list
    ///
    /// # Errors
    /// Returns an error if the request fails, the backend answers with a
    /// non-success status, or the body cannot be decoded
    async fn fetch_vehicle_summaries(&self) -> Result<Vec<VehicleSummary>>;

    /// Fetches every telemetry row, with status already normalized
    ///
    /// # Errors
    /// Same conditions as `fetch_vehicle_summaries`
    async fn fetch_telemetry(&self) -> Result<Vec<TelemetryRecord>>;

    /// Fetches the live detail reading for one vehicle code
    ///
    /// # Errors
    /// Same conditions as `fetch_vehicle_summaries`
    async fn fetch_vehicle_detail(&self, code: &str) -> Result<VehicleDetailReading>;
}
