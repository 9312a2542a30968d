mod telemetry_filter;
mod telemetry_sorter;

pub use telemetry_filter::TelemetryFilter;
pub use telemetry_sorter::TelemetrySorter;
