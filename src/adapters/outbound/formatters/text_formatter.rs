use crate::application::read_models::{DashboardReadModel, SelectedView, VehicleRow};
use crate::fleet::domain::VehicleStats;
use crate::ports::outbound::DashboardFormatter;
use crate::shared::Result;
use owo_colors::OwoColorize;
use std::fmt::Write;

/// TextFormatter adapter for terminal output
///
/// Plain aligned columns; with colors enabled the connection status is
/// green/red and headings are bold.
pub struct TextFormatter {
    colored: bool,
}

impl TextFormatter {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    fn heading(&self, text: &str) -> String {
        if self.colored {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn status(&self, status: &str, width: usize) -> String {
        let padded = format!("{:<width$}", status, width = width);
        if !self.colored {
            return padded;
        }
        if status == "Connected" {
            padded.green().to_string()
        } else {
            padded.red().to_string()
        }
    }

    fn render_selection(&self, out: &mut String, selected: &SelectedView, stats: &VehicleStats) -> std::fmt::Result {
        writeln!(out, "{}", self.heading(&format!("Selected: {}", selected.model)))?;
        writeln!(out, "  Image:            {}", selected.image)?;
        writeln!(out, "  Total sales:      {}", stats.total_sales)?;
        writeln!(out, "  Connected:        {}", stats.connected)?;
        writeln!(out, "  Software updates: {}", stats.software_updates)?;

        if let Some(detail) = &selected.detail {
            writeln!(out, "  Code:             {}", detail.code)?;
            writeln!(out, "  Status:           {}", self.status(&detail.status, 0))?;
            writeln!(out, "  Odometer:         {}", detail.odometer)?;
            writeln!(out, "  Fuel level:       {}", detail.fuel_level)?;
            writeln!(out, "  Latitude:         {}", detail.latitude)?;
            writeln!(out, "  Longitude:        {}", detail.longitude)?;
        }
        writeln!(out)
    }

    fn render_vehicles(&self, out: &mut String, rows: &[VehicleRow], total: usize) -> std::fmt::Result {
        writeln!(
            out,
            "{}",
            self.heading(&format!("Vehicles ({} of {})", rows.len(), total))
        )?;

        if rows.is_empty() {
            return writeln!(out, "  No vehicles match the current search.");
        }

        let code_width = rows.iter().map(|r| r.code.len()).max().unwrap_or(0).max(4);
        let model_width = rows.iter().map(|r| r.model.len()).max().unwrap_or(0).max(5);

        writeln!(
            out,
            "  {:<cw$}  {:<mw$}  {:<4}  {:<12}  {:>8}  {:>9}  {:>7}",
            "Code",
            "Model",
            "Year",
            "Status",
            "Sales",
            "Connected",
            "Updated",
            cw = code_width,
            mw = model_width
        )?;

        for row in rows {
            writeln!(
                out,
                "  {:<cw$}  {:<mw$}  {:<4}  {}  {:>8}  {:>9}  {:>7}",
                row.code,
                row.model,
                row.year,
                self.status(&row.status, 12),
                row.sales,
                row.connected,
                row.updated,
                cw = code_width,
                mw = model_width
            )?;
        }
        Ok(())
    }

    fn render(&self, model: &DashboardReadModel) -> std::result::Result<String, std::fmt::Error> {
        let mut out = String::new();

        writeln!(out, "{}", self.heading("Fleet Dashboard"))?;
        writeln!(out)?;

        if let Some(error) = &model.error {
            writeln!(out, "Error: {}", error)?;
            writeln!(out)?;
        }

        if let Some(selected) = &model.selected {
            self.render_selection(&mut out, selected, &model.stats)?;
        } else {
            let names: Vec<&str> = model.models.iter().map(|m| m.model.as_str()).collect();
            writeln!(out, "Models: {}", names.join(", "))?;
            writeln!(out)?;
        }

        self.render_vehicles(&mut out, &model.vehicles, model.total_vehicles)?;
        Ok(out)
    }
}

impl DashboardFormatter for TextFormatter {
    fn format(&self, model: &DashboardReadModel) -> Result<String> {
        Ok(self.render(model)?)
    }
}
