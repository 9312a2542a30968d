use crate::fleet::domain::{Credentials, User};
use crate::shared::Result;
use async_trait::async_trait;

/// AuthGateway port for authenticating against the fleet backend
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchanges credentials for the user record
    ///
    /// # Errors
    /// A rejected login surfaces as `FleetError::HttpStatus` with status 401;
    /// transport problems as `FleetError::Transport`.
    async fn login(&self, credentials: &Credentials) -> Result<User>;
}
