use std::fmt;

/// Screens of the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Home,
    Dashboard,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Login => write!(f, "login"),
            Route::Home => write!(f, "home"),
            Route::Dashboard => write!(f, "dashboard"),
        }
    }
}

/// Outcome of a guard check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(Route),
}

/// RouteGuard - decides whether a route may be entered
///
/// The login screen is only for anonymous users; the dashboard only for
/// logged-in ones. Home is always reachable.
pub struct RouteGuard;

impl RouteGuard {
    pub fn check(route: Route, logged_in: bool) -> GuardDecision {
        match (route, logged_in) {
            (Route::Login, true) => GuardDecision::Redirect(Route::Home),
            (Route::Dashboard, false) => GuardDecision::Redirect(Route::Login),
            _ => GuardDecision::Allow,
        }
    }
}
