use crate::application::read_models::DashboardReadModel;
use crate::shared::Result;

/// DashboardFormatter port for rendering the dashboard
///
/// This port abstracts the rendering of a dashboard snapshot into a
/// concrete representation (terminal text, Markdown, JSON, ...).
pub trait DashboardFormatter {
    /// Renders the dashboard read model
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &DashboardReadModel) -> Result<String>;
}
