//! HTTP access to the published catalog feed.

use std::cell::Cell;
use std::rc::Rc;

use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::AbortController;

use super::error::CatalogError;

/// Published CSV export of the catalog spreadsheet. Header row + one product
/// per row; no query parameters, no auth.
pub const CATALOG_CSV_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vQm3yFkwKQoQZbV6S0cV5T4kq5aXo0yCzm9f5aWQp4h8VhG/pub?gid=0&single=true&output=csv";

/// Bound on the catalog fetch. The request is aborted when it elapses.
pub const FETCH_TIMEOUT_MS: u32 = 15_000;

/// GET the raw CSV body, aborting after [`FETCH_TIMEOUT_MS`].
pub async fn fetch_catalog_csv() -> Result<String, CatalogError> {
    let controller =
        AbortController::new().map_err(|e| CatalogError::Network(format!("{e:?}")))?;
    let signal = controller.signal();

    // The timer flags the timeout before aborting so the fetch error below
    // can be told apart from an ordinary network failure. Aborting after the
    // request already finished is a no-op.
    let timed_out = Rc::new(Cell::new(false));
    {
        let timed_out = timed_out.clone();
        spawn_local(async move {
            TimeoutFuture::new(FETCH_TIMEOUT_MS).await;
            timed_out.set(true);
            controller.abort();
        });
    }

    let response = Request::get(CATALOG_CSV_URL)
        .abort_signal(Some(&signal))
        .send()
        .await
        .map_err(|e| {
            if timed_out.get() {
                CatalogError::Timeout
            } else {
                CatalogError::Network(e.to_string())
            }
        })?;

    if !response.ok() {
        return Err(CatalogError::Network(format!("HTTP {}", response.status())));
    }

    response
        .text()
        .await
        .map_err(|e| {
            if timed_out.get() {
                CatalogError::Timeout
            } else {
                CatalogError::Parse(e.to_string())
            }
        })
}
