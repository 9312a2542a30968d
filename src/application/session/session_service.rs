use super::{GuardDecision, Route, RouteGuard};
use crate::fleet::domain::User;
use crate::ports::outbound::KeyValueStorage;
use crate::shared::Result;

pub const LOGGED_IN_KEY: &str = "isLoggedIn";
pub const USER_KEY: &str = "usuario";
/// Never written by this client; cleared on logout for sessions created elsewhere
pub const TOKEN_KEY: &str = "token";

const LOGGED_IN_VALUE: &str = "true";

/// SessionService - the "logged in" flag plus the cached user record
///
/// # Type Parameters
/// * `S` - KeyValueStorage implementation
pub struct SessionService<S> {
    storage: S,
}

impl<S: KeyValueStorage> SessionService<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Only the exact value `"true"` counts as logged in
    pub fn is_logged_in(&self) -> Result<bool> {
        Ok(self.storage.get_item(LOGGED_IN_KEY)?.as_deref() == Some(LOGGED_IN_VALUE))
    }

    /// Cached user record, if one is stored and readable
    ///
    /// A record that no longer parses is treated as absent.
    pub fn current_user(&self) -> Result<Option<User>> {
        let Some(raw) = self.storage.get_item(USER_KEY)? else {
            return Ok(None);
        };

        match serde_json::from_str::<User>(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring unreadable cached user record");
                Ok(None)
            }
        }
    }

    /// Marks the session as logged in and caches the user (minus its password)
    pub fn start_session(&self, user: &User) -> Result<()> {
        let record = serde_json::to_string(&user.without_secrets())?;
        self.storage.set_item(LOGGED_IN_KEY, LOGGED_IN_VALUE)?;
        self.storage.set_item(USER_KEY, &record)?;
        tracing::debug!(user = %user.name, "session started");
        Ok(())
    }

    pub fn end_session(&self) -> Result<()> {
        self.storage.remove_item(LOGGED_IN_KEY)?;
        self.storage.remove_item(TOKEN_KEY)?;
        self.storage.remove_item(USER_KEY)?;
        tracing::debug!("session cleared");
        Ok(())
    }

    /// Clears the session and returns where to go next
    pub fn logout(&self) -> Result<Route> {
        self.end_session()?;
        Ok(Route::Login)
    }

    pub fn guard(&self, route: Route) -> Result<GuardDecision> {
        Ok(RouteGuard::check(route, self.is_logged_in()?))
    }
}
