//! fleet-dashboard - client for a fleet sales and telemetry REST backend
//!
//! Authenticates a user, loads the per-model vehicle summaries and the flat
//! telemetry rows, and keeps a dashboard view (filtered rows, selected
//! vehicle with live detail, aggregate stats) consistent as the user
//! searches and selects.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`fleet`): Vehicle models, policies and pure services
//! - **Application Layer** (`application`): Use cases, view state, search and session
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use fleet_dashboard::prelude::*;
//! use std::time::Duration;
//!
//! # async fn example() -> Result<()> {
//! let client = FleetApiClient::new("http://localhost:3001", Duration::from_secs(10))?;
//! let use_case = DashboardUseCase::new(client, StderrProgressReporter::new());
//!
//! let request = DashboardRequest::new(Some("Ranger".to_string()), None);
//! let state = use_case.execute(request).await?;
//!
//! let model = DashboardReadModelBuilder::build(&state, &ImageFallback::default());
//! println!("{}", MarkdownFormatter::new().format(&model)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod fleet;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{
        JsonFormatter, MarkdownFormatter, TextFormatter,
    };
    pub use crate::adapters::outbound::network::FleetApiClient;
    pub use crate::adapters::outbound::storage::{InMemoryStorage, JsonFileStorage};
    pub use crate::application::dto::{DashboardRequest, OutputFormat};
    pub use crate::application::read_models::{DashboardReadModel, DashboardReadModelBuilder};
    pub use crate::application::search::{
        SearchDebouncer, SearchEvent, SearchInput, SearchLine, SearchSubscription, ViewCommand,
    };
    pub use crate::application::session::{GuardDecision, Route, SessionService};
    pub use crate::application::state::{DashboardState, DetailRequest};
    pub use crate::application::use_cases::{
        DashboardUseCase, LoginFailure, LoginOutcome, LoginUseCase,
    };
    pub use crate::fleet::domain::{
        ConnectionStatus, Credentials, SelectedVehicleView, TelemetryRecord, User, VehicleDetail,
        VehicleDetailReading, VehicleStats, VehicleSummary,
    };
    pub use crate::fleet::policies::{DetailProjection, ImageFallback, StatusNormalization};
    pub use crate::fleet::services::{TelemetryFilter, TelemetrySorter};
    pub use crate::ports::outbound::{
        AuthGateway, DashboardFormatter, KeyValueStorage, OutputPresenter, ProgressReporter,
        VehicleRepository,
    };
    pub use crate::shared::Result;
}
