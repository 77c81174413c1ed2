//! Bookstore backend REST client.
//!
//! # Architecture
//!
//! - One `reqwest::Client` shared behind an `Arc`, cheap to clone
//! - The backend is the source of truth - nothing is cached client-side
//! - Every call checks the HTTP status; error bodies are mined for a
//!   `message` (or `error`) field so the user sees the backend's reason
//! - No retries, no client-side timeout
//!
//! # Endpoints
//!
//! - `books` - catalog CRUD under `/api/books`
//! - `cart` - line items under `/api/cart/{userId}`
//! - `orders` - checkout and order history under `/api/orders`
//! - `recommendations` - `/api/recommendations/{userId}`

mod books;
mod cart;
mod orders;
mod recommendations;

pub use books::BookQuery;

use std::sync::Arc;

use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

/// Longest slice of a response body included in logs.
const LOG_BODY_LIMIT: usize = 500;

/// Errors that can occur when talking to the bookstore backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connection refused, DNS, TLS, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Response body was not the expected JSON.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The configured base URL cannot carry API paths.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Message reported by the backend, if it sent a non-empty one.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } if !message.trim().is_empty() => Some(message),
            _ => None,
        }
    }

    /// HTTP status of a backend-reported failure.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Build an error from a non-success response body.
    ///
    /// Only a string `message` (or `error`) field of a JSON body becomes the
    /// server message. Other bodies (HTML pages, plain text, JSON without
    /// those fields) leave it empty.
    #[must_use]
    pub fn from_response_body(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|json| {
                json.get("message")
                    .and_then(serde_json::Value::as_str)
                    .or_else(|| json.get("error").and_then(serde_json::Value::as_str))
                    .map(str::to_string)
            })
            .unwrap_or_default();

        Self::Api {
            status: status.as_u16(),
            message,
        }
    }
}

// =============================================================================
// BookstoreClient
// =============================================================================

/// Client for the bookstore REST API.
#[derive(Clone)]
pub struct BookstoreClient {
    inner: Arc<BookstoreClientInner>,
}

struct BookstoreClientInner {
    client: reqwest::Client,
    base_url: Url,
}

impl std::fmt::Debug for BookstoreClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookstoreClient")
            .field("base_url", &self.inner.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl BookstoreClient {
    /// Create a new client for the backend at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot carry a path or the HTTP client
    /// fails to build.
    pub fn new(base_url: &Url) -> Result<Self, ApiError> {
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(base_url.to_string()));
        }

        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            inner: Arc::new(BookstoreClientInner {
                client,
                base_url: base_url.clone(),
            }),
        })
    }

    /// Base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Build `{base}/api/{segments...}` with each segment percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.inner.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidUrl(self.inner.base_url.to_string()))?
            .pop_if_empty()
            .push("api")
            .extend(segments);
        Ok(url)
    }

    fn http(&self) -> &reqwest::Client {
        &self.inner.client
    }

    /// Send a request and decode a JSON body.
    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(log_failure(status, &body));
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %truncate(&body),
                "Failed to parse bookstore API response"
            );
            ApiError::Parse(e.to_string())
        })
    }

    /// Send a request whose response body is ignored.
    async fn send_empty(&self, request: RequestBuilder) -> Result<(), ApiError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(log_failure(status, &body))
    }
}

fn log_failure(status: StatusCode, body: &str) -> ApiError {
    tracing::error!(
        status = %status,
        body = %truncate(body),
        "Bookstore API returned non-success status"
    );
    ApiError::from_response_body(status, body)
}

fn truncate(body: &str) -> String {
    body.chars().take(LOG_BODY_LIMIT).collect()
}
