pub mod connection_status;
pub mod selected_vehicle;
pub mod telemetry_record;
pub mod user;
pub mod vehicle_detail;
pub mod vehicle_stats;
pub mod vehicle_summary;

pub use connection_status::ConnectionStatus;
pub use selected_vehicle::SelectedVehicleView;
pub use telemetry_record::TelemetryRecord;
pub use user::{Credentials, User};
pub use vehicle_detail::{VehicleDetail, VehicleDetailReading};
pub use vehicle_stats::VehicleStats;
pub use vehicle_summary::VehicleSummary;
