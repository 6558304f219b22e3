use std::fmt;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts and CI systems to distinguish between
/// different types of failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the command completed
    Success = 0,
    /// Application error (API error, network error, session error, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
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
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Errors surfaced by the API client.
///
/// The taxonomy is deliberately flat: every failed call boils down to a
/// human-readable message sourced from the server's error body when one is
/// present, otherwise a generic default. Uses thiserror to derive Display
/// and Error traits automatically.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The request never produced a response (DNS, connect, timeout).
    #[error("Network error: {0}")]
    Transport(String),

    /// The response body could not be decoded into the expected shape.
    #[error("Failed to decode server response: {0}")]
    Decode(String),

    /// An authenticated endpoint was called without a session.
    #[error("Not logged in\n\n💡 Hint: Run 'grc-console login' to start a session")]
    NotAuthenticated,
}

impl ApiError {
    /// True for HTTP 401 responses, which are eligible for the one-shot
    /// refresh-and-retry path.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Api { status: 401, .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}
