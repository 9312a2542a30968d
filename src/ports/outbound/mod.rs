/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (fleet API, storage, console, etc.).
pub mod auth_gateway;
pub mod formatter;
pub mod key_value_storage;
pub mod output_presenter;
pub mod progress_reporter;
pub mod vehicle_repository;

pub use auth_gateway::AuthGateway;
pub use formatter::DashboardFormatter;
pub use key_value_storage::KeyValueStorage;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use vehicle_repository::VehicleRepository;
