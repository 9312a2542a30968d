/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports (driven ports) describe everything the dashboard core
/// needs from the outside world: the fleet API, persistent storage,
/// progress output and rendering.
pub mod outbound;
