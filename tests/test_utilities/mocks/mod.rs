/// Mock implementations for testing
mod mock_auth_gateway;
mod mock_progress_reporter;
mod mock_vehicle_repository;

pub use mock_auth_gateway::MockAuthGateway;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_vehicle_repository::MockVehicleRepository;
