//! Fetch Worker Thread
//!
//! Runs lookups on a background thread with its own current-thread tokio
//! runtime so the UI loop never blocks on the network. Requests arrive over
//! an unbounded channel; results go back over a std channel that the UI
//! drains without blocking.

use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread::JoinHandle;

use tokio::sync::mpsc::UnboundedReceiver;
use tokio_util::sync::CancellationToken;

use super::lookup::{FetchError, Lookup};
use super::{FetchRequest, FetchResponse};

/// Spawn the fetch worker thread
///
/// The thread exits once every sender for `request_rx` has been dropped.
pub fn spawn_worker<L: Lookup>(
    lookup: L,
    request_rx: UnboundedReceiver<FetchRequest>,
    response_tx: Sender<FetchResponse>,
) -> JoinHandle<()> {
    std::thread::spawn(move || worker_loop(Arc::new(lookup), request_rx, response_tx))
}

fn worker_loop<L: Lookup>(
    lookup: Arc<L>,
    request_rx: UnboundedReceiver<FetchRequest>,
    response_tx: Sender<FetchResponse>,
) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            log::warn!("Fetch worker could not start a runtime: {}", e);
            return;
        }
    };

    runtime.block_on(process_requests(lookup, request_rx, response_tx));
    log::debug!("Fetch worker thread shutting down");
}

/// Dispatch requests until the channel closes
///
/// Only one request is tracked at a time: a new `Fetch` cancels whatever was
/// still running.
async fn process_requests<L: Lookup>(
    lookup: Arc<L>,
    mut request_rx: UnboundedReceiver<FetchRequest>,
    response_tx: Sender<FetchResponse>,
) {
    let mut active: Option<(u64, CancellationToken)> = None;

    while let Some(request) = request_rx.recv().await {
        match request {
            FetchRequest::Fetch { url, request_id } => {
                if let Some((previous_id, token)) = active.take() {
                    log::debug!("Request {} superseded by {}", previous_id, request_id);
                    token.cancel();
                }

                let token = CancellationToken::new();
                active = Some((request_id, token.clone()));

                let lookup = Arc::clone(&lookup);
                let response_tx = response_tx.clone();
                tokio::spawn(async move {
                    let response = run_request(lookup.as_ref(), &url, request_id, token).await;
                    // Receiver gone means the fetcher was dropped
                    let _ = response_tx.send(response);
                });
            }
            FetchRequest::Cancel { request_id } => match active.take() {
                Some((active_id, token)) if active_id == request_id => {
                    log::debug!("Cancelled request {}", request_id);
                    token.cancel();
                }
                other => {
                    log::debug!("Ignoring cancel for request {} (not active)", request_id);
                    active = other;
                }
            },
        }
    }

    if let Some((request_id, token)) = active {
        log::debug!("Cancelling request {} on shutdown", request_id);
        token.cancel();
    }
}

/// Run one lookup, racing it against its cancellation token
async fn run_request<L: Lookup + ?Sized>(
    lookup: &L,
    url: &str,
    request_id: u64,
    token: CancellationToken,
) -> FetchResponse {
    let result = tokio::select! {
        biased;
        _ = token.cancelled() => Err(FetchError::Cancelled),
        result = lookup.get(url) => result,
    };

    match result {
        Ok(body) => FetchResponse::Loaded { request_id, body },
        Err(FetchError::Cancelled) => FetchResponse::Cancelled { request_id },
        Err(e) => {
            log::warn!("Request {} failed: {}", request_id, e);
            FetchResponse::Failed {
                request_id,
                message: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
