//! Fetch state owned by the UI thread

use std::sync::mpsc::{self, Receiver, TryRecvError};

use serde_json::Value;
use tokio::sync::mpsc::UnboundedSender;

use super::lookup::Lookup;
use super::worker::spawn_worker;
use super::{FetchRequest, FetchResponse};

/// Lifecycle of the current key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    /// No key, nothing requested
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Cancellable fetch keyed on a URL
///
/// Changing the key supersedes the in-flight request. Responses carry the id
/// of the request they answer and are dropped unless that id is still the
/// in-flight one, so a slow stale response can never overwrite a newer
/// result.
pub struct Fetcher {
    key: String,
    status: FetchStatus,
    data: Option<Value>,
    error: Option<String>,
    loading: bool,
    /// Incremented for each new request
    request_id: u64,
    /// ID of the request allowed to update state, if any
    in_flight_request_id: Option<u64>,
    request_tx: Option<UnboundedSender<FetchRequest>>,
    response_rx: Option<Receiver<FetchResponse>>,
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher {
    /// Create a fetcher with no worker attached
    pub fn new() -> Self {
        Self {
            key: String::new(),
            status: FetchStatus::Idle,
            data: None,
            error: None,
            loading: false,
            request_id: 0,
            in_flight_request_id: None,
            request_tx: None,
            response_rx: None,
        }
    }

    /// Create a fetcher backed by a fresh worker thread running `lookup`
    pub fn spawn<L: Lookup>(lookup: L) -> Self {
        let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel();
        let (response_tx, response_rx) = mpsc::channel();
        spawn_worker(lookup, request_rx, response_tx);

        let mut fetcher = Self::new();
        fetcher.set_channels(request_tx, response_rx);
        fetcher
    }

    /// Set the channel handles for communication with the worker
    pub fn set_channels(
        &mut self,
        request_tx: UnboundedSender<FetchRequest>,
        response_rx: Receiver<FetchResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    /// Point the fetcher at `key`
    ///
    /// The same key is a no-op. An empty key cancels and clears `data` and
    /// `error` without a request. Any other key cancels the previous request
    /// and starts a new one.
    pub fn fetch(&mut self, key: &str) {
        if key == self.key {
            return;
        }
        self.key = key.to_string();
        self.cancel_in_flight_request();

        if key.is_empty() {
            self.data = None;
            self.error = None;
            self.status = FetchStatus::Idle;
            return;
        }

        self.request_id = self.request_id.wrapping_add(1);
        let request_id = self.request_id;

        let sent = self.request_tx.as_ref().is_some_and(|tx| {
            tx.send(FetchRequest::Fetch {
                url: key.to_string(),
                request_id,
            })
            .is_ok()
        });

        if sent {
            log::debug!("Fetching {} (request {})", key, request_id);
            self.loading = true;
            self.status = FetchStatus::Loading;
            self.in_flight_request_id = Some(request_id);
        } else {
            self.error = Some("Lookup worker is not running".to_string());
            self.status = FetchStatus::Failed;
        }
    }

    /// Drain worker responses; returns true if `data` changed
    pub fn poll(&mut self) -> bool {
        let mut data_changed = false;

        loop {
            let Some(rx) = self.response_rx.as_ref() else {
                return data_changed;
            };
            let response = match rx.try_recv() {
                Ok(response) => response,
                Err(TryRecvError::Empty) => return data_changed,
                Err(TryRecvError::Disconnected) => {
                    self.response_rx = None;
                    if self.in_flight_request_id.take().is_some() {
                        self.loading = false;
                        self.error = Some("Lookup worker stopped".to_string());
                        self.status = FetchStatus::Failed;
                    }
                    return data_changed;
                }
            };
            data_changed |= self.handle_response(response);
        }
    }

    /// Apply one response if it belongs to the in-flight request
    fn handle_response(&mut self, response: FetchResponse) -> bool {
        if self.in_flight_request_id != Some(response.request_id()) {
            log::debug!("Discarding stale response for request {}", response.request_id());
            return false;
        }
        self.in_flight_request_id = None;
        self.loading = false;

        match response {
            FetchResponse::Loaded { body, .. } => {
                self.data = Some(body);
                self.error = None;
                self.status = FetchStatus::Succeeded;
                true
            }
            FetchResponse::Failed { message, .. } => {
                self.error = Some(message);
                self.status = FetchStatus::Failed;
                false
            }
            // Only reachable if the worker cancelled on its own
            FetchResponse::Cancelled { .. } => {
                self.status = if self.data.is_some() {
                    FetchStatus::Succeeded
                } else {
                    FetchStatus::Idle
                };
                false
            }
        }
    }

    /// Cancel any in-flight request
    ///
    /// The cancelled attempt ends here: `loading` drops to false and its
    /// eventual response is ignored. Returns true if a request was cancelled.
    pub fn cancel_in_flight_request(&mut self) -> bool {
        let Some(request_id) = self.in_flight_request_id.take() else {
            return false;
        };
        self.loading = false;
        if let Some(ref tx) = self.request_tx {
            let _ = tx.send(FetchRequest::Cancel { request_id });
        }
        log::debug!("Sent cancel for request {}", request_id);
        true
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Current request ID, used to match incoming responses
    pub fn current_request_id(&self) -> u64 {
        self.request_id
    }

    pub fn has_in_flight_request(&self) -> bool {
        self.in_flight_request_id.is_some()
    }
}

impl Drop for Fetcher {
    fn drop(&mut self) {
        self.cancel_in_flight_request();
    }
}

#[cfg(test)]
#[path = "fetcher_tests.rs"]
mod fetcher_tests;
