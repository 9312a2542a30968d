use crate::application::session::{GuardDecision, Route, SessionService};
use crate::fleet::domain::{Credentials, User};
use crate::ports::outbound::{AuthGateway, KeyValueStorage, ProgressReporter};
use crate::shared::error::FleetError;
use crate::shared::messages::{
    LOGIN_FIELDS_REQUIRED, LOGIN_INVALID_CREDENTIALS, LOGIN_SERVER_UNREACHABLE, LOGIN_SUCCEEDED,
};
use crate::shared::Result;

const UNAUTHORIZED: u16 = 401;

/// Why a login attempt did not produce a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginFailure {
    MissingFields,
    InvalidCredentials,
    ServerUnreachable,
}

impl LoginFailure {
    pub fn message(&self) -> &'static str {
        match self {
            LoginFailure::MissingFields => LOGIN_FIELDS_REQUIRED,
            LoginFailure::InvalidCredentials => LOGIN_INVALID_CREDENTIALS,
            LoginFailure::ServerUnreachable => LOGIN_SERVER_UNREACHABLE,
        }
    }

    fn from_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<FleetError>() {
            Some(e) if e.http_status() == Some(UNAUTHORIZED) => LoginFailure::InvalidCredentials,
            _ => LoginFailure::ServerUnreachable,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    Success { user: User, next: Route },
    Rejected(LoginFailure),
    /// The login screen was guarded away: a session already exists
    AlreadyLoggedIn { next: Route },
}

/// LoginUseCase - Exchanges credentials for a persisted session
///
/// # Type Parameters
/// * `G` - AuthGateway implementation
/// * `S` - KeyValueStorage implementation backing the session
/// * `P` - ProgressReporter implementation
pub struct LoginUseCase<G, S, P> {
    gateway: G,
    session: SessionService<S>,
    progress_reporter: P,
}

impl<G, S, P> LoginUseCase<G, S, P>
where
    G: AuthGateway,
    S: KeyValueStorage,
    P: ProgressReporter,
{
    pub fn new(gateway: G, session: SessionService<S>, progress_reporter: P) -> Self {
        Self {
            gateway,
            session,
            progress_reporter,
        }
    }

    pub fn session(&self) -> &SessionService<S> {
        &self.session
    }

    /// Attempts a login
    ///
    /// Rejections are outcomes, not errors; only storage failures are
    /// returned as `Err`.
    pub async fn execute(&self, credentials: &Credentials) -> Result<LoginOutcome> {
        if let GuardDecision::Redirect(next) = self.session.guard(Route::Login)? {
            return Ok(LoginOutcome::AlreadyLoggedIn { next });
        }

        if !credentials.is_complete() {
            return Ok(self.reject(LoginFailure::MissingFields));
        }

        self.progress_reporter
            .begin_activity(&format!("🔑 Signing in as {}...", credentials.name()));
        let result = self.gateway.login(credentials).await;
        self.progress_reporter.end_activity();

        match result {
            Ok(user) => {
                self.session.start_session(&user)?;
                self.progress_reporter
                    .report_completion(&format!("✅ {}", LOGIN_SUCCEEDED));
                Ok(LoginOutcome::Success {
                    user,
                    next: Route::Home,
                })
            }
            Err(e) => {
                tracing::warn!(user = credentials.name(), error = %format!("{:#}", e), "login failed");
                Ok(self.reject(LoginFailure::from_error(&e)))
            }
        }
    }

    fn reject(&self, failure: LoginFailure) -> LoginOutcome {
        self.progress_reporter
            .report_error(&format!("❌ {}", failure.message()));
        LoginOutcome::Rejected(failure)
    }
}
