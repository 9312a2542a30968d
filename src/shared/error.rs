use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Scripts wrapping the client can tell a rejected login apart from
/// a broken backend or a bad invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// The backend rejected the supplied credentials
    LoginRejected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (network error, storage error, not logged in, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::LoginRejected => write!(f, "Login Rejected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the fleet dashboard client.
#[derive(Debug, Error)]
pub enum FleetError {
    /// The backend answered with a non-success status code
    #[error("Request to {endpoint} failed with HTTP status {status}")]
    HttpStatus { endpoint: String, status: u16 },

    /// The request never produced a response (DNS, refused connection, timeout, bad body)
    #[error("Request to {endpoint} failed: {details}\n\n💡 Hint: Check that the fleet API is running and reachable")]
    Transport { endpoint: String, details: String },

    #[error("Not logged in\n\n💡 Hint: Run `fleet-dashboard login` first")]
    NotAuthenticated,

    #[error("Dashboard unavailable: {message}")]
    DashboardUnavailable { message: String },

    #[error("Unknown vehicle model: {model}\n\n💡 Hint: Run `fleet-dashboard dashboard` to list the available models")]
    UnknownModel { model: String },

    #[error("Failed to access session storage: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    StorageError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for builders and configuration
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl FleetError {
    /// Returns the HTTP status carried by this error, if any
    pub fn http_status(&self) -> Option<u16> {
        match self {
            FleetError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
