//! Unified error handling for the mulgyeol crate
//!
//! Two layers: [`ApiError`] covers everything that can go wrong talking to
//! the Naver Open API endpoints, and [`Error`] wraps it together with the
//! local failure modes (configuration, input validation, missing
//! credentials). Both carry an [`ErrorCategory`] and a user-facing message
//! so the dashboard can decide how to present a failure without matching on
//! every variant.

use chrono::NaiveDate;
use std::io;
use thiserror::Error;

/// Classification of errors for presentation strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Authentication/authorization rejected by the API
    Auth,
    /// Network-related errors (HTTP status, timeout, transport)
    Network,
    /// Response did not match the expected schema
    Schema,
    /// Configuration and credential errors
    Config,
    /// Invalid user input (dates, keywords, filters)
    Input,
    /// Other/unknown errors
    Other,
}

/// Errors from a single Naver Open API call
///
/// Every client call returns exactly one of these; no variant is ever
/// retried automatically. 401/403 map to [`ApiError::Auth`] so the caller
/// can point the user at their credentials, everything else that the server
/// answered maps to [`ApiError::Status`].
#[derive(Error, Debug)]
pub enum ApiError {
    /// Authentication failure (HTTP 401/403)
    #[error("authentication rejected (HTTP {0})")]
    Auth(u16),

    /// Any other non-success HTTP status
    #[error("request failed with HTTP {0}")]
    Status(u16),

    /// Request timed out
    #[error("request timed out")]
    Timeout,

    /// Transport-level failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body did not match the expected schema
    #[error("unexpected response schema: {0}")]
    Schema(String),

    /// Credential values cannot be sent as HTTP headers
    #[error("credentials contain characters not allowed in a header")]
    InvalidCredentials,
}

impl ApiError {
    /// Map a reqwest transport error, folding timeouts into their own variant
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Http(err)
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Auth(_) => ErrorCategory::Auth,
            Self::Status(_) | Self::Timeout | Self::Http(_) => ErrorCategory::Network,
            Self::Schema(_) => ErrorCategory::Schema,
            Self::InvalidCredentials => ErrorCategory::Config,
        }
    }

    /// Short instruction shown next to the raw error in the dashboard
    pub fn user_message(&self) -> String {
        match self {
            Self::Auth(status) => {
                format!("Authentication failed (HTTP {status}). Check your Client ID/Secret.")
            }
            Self::Status(status) => format!("The API returned HTTP {status}."),
            Self::Timeout => "The request timed out. Try again.".to_string(),
            Self::Http(e) => format!("Network error: {e}"),
            Self::Schema(detail) => format!("The API response was not understood: {detail}"),
            Self::InvalidCredentials => {
                "Credentials contain invalid characters. Re-enter them.".to_string()
            }
        }
    }
}

/// Unified error type for the mulgyeol crate
#[derive(Error, Debug)]
pub enum Error {
    /// Naver Open API call failure
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// A query was attempted without a complete credential pair
    #[error("Client ID/Secret are not configured")]
    MissingCredentials,

    /// Start date after end date
    #[error("invalid date range: {start} is after {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    /// No usable keywords after parsing the input
    #[error("no keywords given")]
    NoKeywords,

    /// Invalid user input with a description
    #[error("invalid input: {0}")]
    Input(String),

    /// Configuration errors
    #[error("config error: {0}")]
    Config(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an input validation error
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Api(e) => e.category(),
            Self::MissingCredentials | Self::Config(_) => ErrorCategory::Config,
            Self::InvalidDateRange { .. } | Self::NoKeywords | Self::Input(_) => {
                ErrorCategory::Input
            }
            Self::Json(_) => ErrorCategory::Schema,
            Self::Io(_) => ErrorCategory::Other,
        }
    }

    /// Message suitable for the dashboard status line
    pub fn user_message(&self) -> String {
        match self {
            Self::Api(e) => e.user_message(),
            Self::MissingCredentials => {
                "Client ID/Secret required. Set them in the secrets file, via \
                 NAVER_CLIENT_ID/NAVER_CLIENT_SECRET, or in the sidebar."
                    .to_string()
            }
            Self::InvalidDateRange { start, end } => {
                format!("Start date {start} must not be after end date {end}.")
            }
            Self::NoKeywords => "Enter at least one keyword.".to_string(),
            Self::Input(msg) | Self::Config(msg) => msg.clone(),
            Self::Io(e) => format!("I/O error: {e}"),
            Self::Json(e) => format!("JSON error: {e}"),
        }
    }
}

/// Result type alias using the unified Error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_category() {
        let err = Error::Api(ApiError::Auth(401));
        assert_eq!(err.category(), ErrorCategory::Auth);
    }

    #[test]
    fn test_status_is_network() {
        let err = Error::Api(ApiError::Status(500));
        assert_eq!(err.category(), ErrorCategory::Network);

        let err = Error::Api(ApiError::Timeout);
        assert_eq!(err.category(), ErrorCategory::Network);
    }

    #[test]
    fn test_missing_credentials_message_names_sources() {
        let msg = Error::MissingCredentials.user_message();
        assert!(msg.contains("NAVER_CLIENT_ID"));
        assert!(msg.contains("secrets"));
    }

    #[test]
    fn test_config_error() {
        let err = Error::config("bad timeout");
        assert_eq!(err.category(), ErrorCategory::Config);
    }

    #[test]
    fn test_date_range_message() {
        let err = Error::InvalidDateRange {
            start: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };
        assert!(err.user_message().contains("2024-02-01"));
    }

    #[test]
    fn test_api_error_conversion() {
        let api = ApiError::Auth(403);
        let unified: Error = api.into();
        assert!(matches!(unified, Error::Api(ApiError::Auth(403))));
    }
}
