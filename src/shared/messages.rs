//! User-facing strings.
//!
//! Every caught failure is reduced to one of these before it reaches the
//! person in front of the terminal. Diagnostic detail goes to `tracing`.

pub const DASHBOARD_LOAD_FAILED: &str = "Failed to load dashboard data";
pub const VEHICLE_LIST_LOAD_FAILED: &str = "Failed to load vehicle list";
pub const VEHICLE_DATA_LOAD_FAILED: &str = "Failed to load vehicle data";

pub const LOGIN_SUCCEEDED: &str = "Login successful!";
pub const LOGIN_FIELDS_REQUIRED: &str = "Please fill in all fields.";
pub const LOGIN_INVALID_CREDENTIALS: &str = "Invalid credentials.";
pub const LOGIN_SERVER_UNREACHABLE: &str = "Unable to reach the server. Please try again.";

/// Placeholder shown for a detail field the backend did not provide
pub const NOT_AVAILABLE: &str = "N/A";
