use crate::application::read_models::{DashboardReadModel, ModelView, SelectedView, VehicleRow};
use crate::fleet::domain::VehicleStats;
use crate::ports::outbound::DashboardFormatter;
use crate::shared::Result;

/// Markdown table header for the model overview
const MODELS_TABLE_HEADER: &str = "| Model | Total Sales | Connected | Software Updates |\n";

/// Markdown table separator line for the model overview
const MODELS_TABLE_SEPARATOR: &str = "|-------|-------------|-----------|------------------|\n";

/// Markdown table header for the telemetry rows
const VEHICLES_TABLE_HEADER: &str =
    "| Code | Model | Year | Color | Status | Sales | Connected | Updated |\n";

/// Markdown table separator line for the telemetry rows
const VEHICLES_TABLE_SEPARATOR: &str =
    "|------|-------|------|-------|--------|-------|-----------|---------|\n";

/// MarkdownFormatter adapter for rendering the dashboard as Markdown
///
/// Sections: header, error (if any), selected vehicle with stats and detail,
/// model overview, and the filtered vehicle table.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, model: &DashboardReadModel) {
        output.push_str("# Fleet Dashboard\n\n");
        output.push_str(&format!("_Generated at {}_\n\n", model.generated_at));
    }

    fn render_error(&self, output: &mut String, error: &str) {
        output.push_str(&format!("> **Error:** {}\n\n", error));
    }

    fn render_selection(&self, output: &mut String, selected: &SelectedView, stats: &VehicleStats) {
        output.push_str(&format!(
            "## {}\n\n",
            Self::escape_markdown_table_cell(&selected.model)
        ));
        output.push_str(&format!(
            "![{}]({})\n\n",
            Self::escape_markdown_table_cell(&selected.model),
            selected.image
        ));

        output.push_str("| Total Sales | Connected | Software Updates |\n");
        output.push_str("|-------------|-----------|------------------|\n");
        output.push_str(&format!(
            "| {} | {} | {} |\n\n",
            stats.total_sales, stats.connected, stats.software_updates
        ));

        if let Some(detail) = &selected.detail {
            output.push_str("### Live Detail\n\n");
            output.push_str(&format!("- **Code:** {}\n", detail.code));
            output.push_str(&format!("- **Status:** {}\n", detail.status));
            output.push_str(&format!("- **Odometer:** {}\n", detail.odometer));
            output.push_str(&format!("- **Fuel Level:** {}\n", detail.fuel_level));
            output.push_str(&format!(
                "- **Position:** {}, {}\n\n",
                detail.latitude, detail.longitude
            ));
        }
    }

    fn render_models(&self, output: &mut String, models: &[ModelView]) {
        output.push_str("## Models\n\n");
        output.push_str(MODELS_TABLE_HEADER);
        output.push_str(MODELS_TABLE_SEPARATOR);

        for model in models {
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&model.model),
                model.total_sales,
                model.connected,
                model.software_updates
            ));
        }
        output.push('\n');
    }

    fn render_vehicles(&self, output: &mut String, vehicles: &[VehicleRow], total: usize) {
        output.push_str("## Vehicles\n\n");
        output.push_str(&format!("Showing {} of {} vehicle(s).\n\n", vehicles.len(), total));

        if vehicles.is_empty() {
            output.push_str("*No vehicles match the current search.*\n");
            return;
        }

        output.push_str(VEHICLES_TABLE_HEADER);
        output.push_str(VEHICLES_TABLE_SEPARATOR);

        for row in vehicles {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&row.code),
                Self::escape_markdown_table_cell(&row.model),
                row.year,
                Self::escape_markdown_table_cell(&row.color),
                row.status,
                row.sales,
                row.connected,
                row.updated
            ));
        }
    }
}

impl DashboardFormatter for MarkdownFormatter {
    fn format(&self, model: &DashboardReadModel) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, model);

        if let Some(error) = &model.error {
            self.render_error(&mut output, error);
        }

        if let Some(selected) = &model.selected {
            self.render_selection(&mut output, selected, &model.stats);
        }

        self.render_models(&mut output, &model.models);
        self.render_vehicles(&mut output, &model.vehicles, model.total_vehicles);

        Ok(output)
    }
}
