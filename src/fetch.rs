//! Cancellable lookups
//!
//! The UI thread owns a [`Fetcher`] which tracks `{data, error, loading}` for
//! the current key. Requests run on a background worker thread and come back
//! tagged with their request id; only the latest in-flight id may update
//! state.

mod fetcher;
mod lookup;
mod worker;

pub use fetcher::{FetchStatus, Fetcher};
pub use lookup::{FetchError, HttpLookup, Lookup};
pub use worker::spawn_worker;

use serde_json::Value;

/// Request messages sent to the fetch worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    /// Fetch the given URL
    Fetch {
        url: String,
        /// Unique ID for this request, used to filter stale responses
        request_id: u64,
    },
    /// Cancel the request with the given ID
    Cancel { request_id: u64 },
}

/// Response messages received from the fetch worker
#[derive(Debug, Clone, PartialEq)]
pub enum FetchResponse {
    /// Parsed response body
    Loaded { request_id: u64, body: Value },
    /// Network, status or parse failure
    Failed { request_id: u64, message: String },
    /// The request was cancelled before completing
    Cancelled { request_id: u64 },
}

impl FetchResponse {
    pub fn request_id(&self) -> u64 {
        match self {
            FetchResponse::Loaded { request_id, .. }
            | FetchResponse::Failed { request_id, .. }
            | FetchResponse::Cancelled { request_id } => *request_id,
        }
    }
}
