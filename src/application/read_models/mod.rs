//! Read models for rendering
//!
//! View-optimized, serializable snapshots of a `DashboardState`. Formatters
//! only ever see these.

mod dashboard_read_model;
mod dashboard_read_model_builder;

pub use dashboard_read_model::{
    DashboardReadModel, DetailView, ModelView, SearchView, SelectedView, VehicleRow,
};
pub use dashboard_read_model_builder::DashboardReadModelBuilder;
