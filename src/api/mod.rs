//! HTTP clients for the Naver Open API
//!
//! Two endpoints are consumed: the DataLab search-trend endpoint
//! ([`trend`]) and the news-search endpoint ([`news`]). Both authenticate
//! with the same custom header pair and share one [`ApiClient`] carrying
//! the configured timeout. Every call returns a typed
//! [`ApiError`](crate::error::ApiError); no status code is ever surfaced
//! as a panic or a generic error, and nothing is retried.

pub mod news;
pub mod trend;

use crate::config::ApiConfig;
use crate::credentials::Credentials;
use crate::error::ApiError;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Response};
use std::time::Duration;

const CLIENT_ID_HEADER: &str = "X-Naver-Client-Id";
const CLIENT_SECRET_HEADER: &str = "X-Naver-Client-Secret";

/// Shared HTTP plumbing for both Naver Open API clients
pub struct ApiClient {
    client: Client,
    trend_url: String,
    news_url: String,
}

impl ApiClient {
    /// Create a client from the configured endpoints and timeout
    ///
    /// The timeout bounds every request end to end; a hung upstream fails
    /// as [`ApiError::Timeout`] instead of blocking the dashboard.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        Self::with_timeout(config, Duration::from_secs(config.timeout_secs))
    }

    /// Create a client with an explicit timeout (used by tests)
    pub fn with_timeout(config: &ApiConfig, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(timeout).gzip(true).build()?;

        Ok(Self {
            client,
            trend_url: config.trend_url.clone(),
            news_url: config.news_url.clone(),
        })
    }

    pub(crate) fn http(&self) -> &Client {
        &self.client
    }

    pub(crate) fn trend_url(&self) -> &str {
        &self.trend_url
    }

    pub(crate) fn news_url(&self) -> &str {
        &self.news_url
    }

    /// Build the auth header pair both endpoints expect
    pub(crate) fn auth_headers(credentials: &Credentials) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();

        let id = HeaderValue::from_str(&credentials.client_id)
            .map_err(|_| ApiError::InvalidCredentials)?;
        let secret = HeaderValue::from_str(&credentials.client_secret)
            .map_err(|_| ApiError::InvalidCredentials)?;

        headers.insert(CLIENT_ID_HEADER, id);
        headers.insert(CLIENT_SECRET_HEADER, secret);

        Ok(headers)
    }

    /// Map the response status to the error taxonomy
    ///
    /// 401/403 are authentication failures; any other non-success status is
    /// a request failure. Success passes the response through for parsing.
    pub(crate) fn check_status(response: Response) -> Result<Response, ApiError> {
        let status = response.status();

        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(ApiError::Auth(status.as_u16()));
        }
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        Ok(response)
    }

    /// Parse a success response body against a strict schema
    ///
    /// Missing required fields fail with [`ApiError::Schema`] rather than
    /// a generic decode error, so the dashboard can say what went wrong.
    pub(crate) async fn parse_json<T: serde::de::DeserializeOwned>(
        response: Response,
    ) -> Result<T, ApiError> {
        let body = response.text().await.map_err(ApiError::from_transport)?;
        serde_json::from_str(&body).map_err(|e| ApiError::Schema(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_headers_carry_both_values() {
        let creds = Credentials::new("my-id", "my-secret");
        let headers = ApiClient::auth_headers(&creds).unwrap();

        assert_eq!(headers.get(CLIENT_ID_HEADER).unwrap(), "my-id");
        assert_eq!(headers.get(CLIENT_SECRET_HEADER).unwrap(), "my-secret");
    }

    #[test]
    fn test_control_chars_rejected() {
        let creds = Credentials::new("bad\nid", "secret");
        assert!(matches!(
            ApiClient::auth_headers(&creds),
            Err(ApiError::InvalidCredentials)
        ));
    }
}
