//! Suggestion fetch worker thread
//!
//! Runs HTTP requests in a background thread so the UI loop never blocks.
//! Receives requests via channel and sends results back tagged with the
//! request id they answer, letting the UI drop stale responses.

use std::sync::mpsc::{Receiver, Sender};

use super::client::SuggestClient;
use super::types::Suggestion;

/// A fetch dispatched when the input debouncer fires
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub query: String,
    pub request_id: u64,
}

/// Worker reply for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResponse {
    /// Endpoint answered; the list may be empty
    Loaded {
        request_id: u64,
        suggestions: Vec<Suggestion>,
    },
    /// Fetch failed; the error was already logged and absorbed
    Failed { request_id: u64 },
}

/// Spawn the suggestion fetch worker thread
///
/// The thread exits when the request channel closes.
pub fn spawn_worker(
    client: SuggestClient,
    request_rx: Receiver<FetchRequest>,
    response_tx: Sender<FetchResponse>,
) {
    std::thread::spawn(move || {
        worker_loop(&client, request_rx, response_tx);
    });
}

/// Main worker loop - processes requests until the channel is closed
fn worker_loop(
    client: &SuggestClient,
    request_rx: Receiver<FetchRequest>,
    response_tx: Sender<FetchResponse>,
) {
    while let Ok(request) = request_rx.recv() {
        let response = match client.fetch(&request.query) {
            Ok(suggestions) => FetchResponse::Loaded {
                request_id: request.request_id,
                suggestions,
            },
            Err(e) => {
                // The single diagnostic for a failed fetch; no retry, the
                // next keystroke naturally issues a new request
                log::warn!("suggestion fetch for {:?} failed: {}", request.query, e);
                FetchResponse::Failed {
                    request_id: request.request_id,
                }
            }
        };

        if response_tx.send(response).is_err() {
            break;
        }
    }

    log::debug!("suggestion worker shutting down");
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
