//! Lookup transport
//!
//! `Lookup` abstracts the remote record search so the worker can be driven
//! by a fake in tests. `HttpLookup` is the reqwest-backed implementation.

use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur during a lookup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Connection, DNS, TLS or timeout failure
    #[error("Network error: {0}")]
    Network(String),

    /// Service answered with a non-success status
    #[error("Lookup failed with status {0}")]
    Status(u16),

    /// Body was not valid JSON
    #[error("Parse error: {0}")]
    Parse(String),

    /// Request was superseded or the fetcher was dropped
    #[error("Request cancelled")]
    Cancelled,
}

/// A remote record search
pub trait Lookup: Send + Sync + 'static {
    /// Fetch and parse the JSON body at `url`
    fn get(&self, url: &str) -> BoxFuture<'static, Result<Value, FetchError>>;
}

/// Lookup over HTTP GET
#[derive(Debug, Clone)]
pub struct HttpLookup {
    client: reqwest::Client,
}

impl HttpLookup {
    /// Create a client, optionally bounding each request by `timeout`
    pub fn new(timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(Self { client })
    }
}

impl Lookup for HttpLookup {
    fn get(&self, url: &str) -> BoxFuture<'static, Result<Value, FetchError>> {
        let request = self.client.get(url);
        async move {
            let response = request.send().await.map_err(map_reqwest_error)?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status(status.as_u16()));
            }

            response
                .json::<Value>()
                .await
                .map_err(|e| FetchError::Parse(e.to_string()))
        }
        .boxed()
    }
}

fn map_reqwest_error(e: reqwest::Error) -> FetchError {
    if e.is_decode() {
        FetchError::Parse(e.to_string())
    } else {
        FetchError::Network(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(FetchError::Status(503).to_string(), "Lookup failed with status 503");
        assert_eq!(
            FetchError::Network("connection refused".to_string()).to_string(),
            "Network error: connection refused"
        );
        assert_eq!(FetchError::Cancelled.to_string(), "Request cancelled");
    }

    #[test]
    fn test_http_lookup_builds() {
        assert!(HttpLookup::new(None).is_ok());
        assert!(HttpLookup::new(Some(Duration::from_secs(5))).is_ok());
    }
}
