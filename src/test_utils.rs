//! Shared test helpers

use std::sync::mpsc;

use crate::app::App;
use crate::config::Config;
use crate::suggest::{FetchRequest, FetchResponse};

/// An app with default configuration and no worker attached
pub fn test_app() -> App {
    App::new(&Config::default())
}

/// An app whose worker channels are held by the test
///
/// The test plays the worker: it reads dispatched fetches from the returned
/// receiver and injects responses through the returned sender.
pub fn connected_test_app() -> (
    App,
    mpsc::Receiver<FetchRequest>,
    mpsc::Sender<FetchResponse>,
) {
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();

    let mut app = test_app();
    app.suggest.connect(request_tx, response_rx);

    (app, request_rx, response_tx)
}
