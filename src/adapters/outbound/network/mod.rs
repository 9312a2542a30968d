/// Network adapters for the fleet REST backend
mod fleet_api_client;
mod payloads;

pub use fleet_api_client::FleetApiClient;
