//! Error types for Vultr API operations.
//!
//! The taxonomy separates local failures (missing key, missing parameter),
//! transport failures (connection, timeout), and remote failures classified
//! by HTTP status range. Local failures surface before any request is sent.

use std::fmt;
use thiserror::Error;

/// Classification of a remote API failure by status range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// 4xx: the request was wrong and retrying it unchanged will not help.
    Client,
    /// 5xx: the service failed; the same request may succeed later.
    Server,
}

impl ApiErrorKind {
    /// Returns the kind as a lowercase string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Server => "server",
        }
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main error type for Vultr API operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No API key was configured for an operation that requires one
    #[error("API key is missing; configure one before calling the API")]
    MissingApiKey,

    /// A required call parameter was absent or null
    #[error("Missing required parameter `{0}`")]
    MissingParameter(String),

    /// A parameter not declared by the endpoint was rejected by policy
    #[error("Unknown parameter `{0}`")]
    UnknownParameter(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The endpoint path or base URL could not form a valid request URL
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Connection could not be established (refused, DNS failure)
    #[error("Connection failed: {0}")]
    Connection(String),

    /// The request exceeded the configured timeout
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Other transport-level failure
    #[error("Network error: {0}")]
    Network(String),

    /// A success status carried a body that was not valid JSON
    #[error("Malformed response body: {0}")]
    MalformedResponse(String),

    /// The remote API reported a failure status
    #[error("API {kind} error {status}: {message}")]
    Api {
        /// Client (4xx) or server (5xx) classification
        kind: ApiErrorKind,
        /// HTTP status code as returned by the API
        status: u16,
        /// Message extracted from the response, or a documented default
        message: String,
    },

    /// A status outside the 2xx/4xx/5xx ranges
    #[error("Unexpected HTTP status {status}")]
    UnexpectedStatus {
        /// The status code that could not be classified
        status: u16,
    },
}

/// Specialized result type for Vultr API operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the error code for this error type.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MissingApiKey => "MISSING_API_KEY",
            Self::MissingParameter(_) => "MISSING_PARAMETER",
            Self::UnknownParameter(_) => "UNKNOWN_PARAMETER",
            Self::ConfigError(_) => "CONFIG_ERROR",
            Self::InvalidEndpoint(_) => "INVALID_ENDPOINT",
            Self::Connection(_) => "CONNECTION_FAILED",
            Self::Timeout(_) => "TIMEOUT",
            Self::Network(_) => "NETWORK_ERROR",
            Self::MalformedResponse(_) => "MALFORMED_RESPONSE",
            Self::Api {
                kind: ApiErrorKind::Client,
                ..
            } => "CLIENT_ERROR",
            Self::Api {
                kind: ApiErrorKind::Server,
                ..
            } => "SERVER_ERROR",
            Self::UnexpectedStatus { .. } => "UNEXPECTED_STATUS",
        }
    }

    /// Returns the HTTP status carried by this error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } | Self::UnexpectedStatus { status } => Some(*status),
            _ => None,
        }
    }

    /// Returns true when retrying the identical call could succeed.
    ///
    /// Transport failures and 5xx responses qualify; validation failures and
    /// 4xx responses do not.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Connection(_)
                | Self::Timeout(_)
                | Self::Network(_)
                | Self::Api {
                    kind: ApiErrorKind::Server,
                    ..
                }
        )
    }
}

// Conversions from external error types
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::Connection(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidEndpoint(err.to_string())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::ConfigError(err.to_string())
    }
}
