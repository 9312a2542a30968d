//! Login session persistence and route guarding.
mod route_guard;
mod session_service;

pub use route_guard::{GuardDecision, Route, RouteGuard};
pub use session_service::{SessionService, LOGGED_IN_KEY, TOKEN_KEY, USER_KEY};
