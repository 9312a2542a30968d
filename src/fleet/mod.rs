//! Fleet domain: value objects, policies and stateless services.
pub mod domain;
pub mod policies;
pub mod services;
