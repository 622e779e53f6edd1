//! Cache-first catalog loading.
//!
//! Phases: `Idle -> ShowingCached (optional) -> Fetching -> ShowingFresh`,
//! or `Fetching -> ShowingFallback` on failure. The loader guarantees the
//! view always ends up with a non-empty product list: fresh feed, stale
//! cache, or the bundled sample catalog.

use std::rc::Rc;

use contracts::catalog::cache::CacheEntry;
use contracts::catalog::sample::sample_catalog;
use contracts::catalog::{csv, normalize, Catalog};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::api;
use super::error::CatalogError;
use super::storage::CatalogStore;
use crate::state::{LoadPhase, StorefrontContext};

fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

/// Page-load entry point. A fresh cache entry is displayed immediately and
/// the feed is refreshed in the background; otherwise the refresh is the
/// only way to get content on screen and runs with the `Fetching` phase.
pub fn start(ctx: StorefrontContext, store: Rc<dyn CatalogStore>) {
    if let Some(entry) = store.read() {
        if entry.is_fresh(now_ms()) {
            log::info!("catalog: showing cached copy, refreshing in background");
            ctx.catalog.set(entry.catalog);
            ctx.phase.set(LoadPhase::ShowingCached);
        }
    }
    spawn_local(refresh(ctx, store));
}

/// Manual retry: drops the cached entry, then re-fetches. Runs behind the
/// same single-flight guard as the background refresh.
pub fn retry(ctx: StorefrontContext, store: Rc<dyn CatalogStore>) {
    store.clear();
    ctx.load_error.set(None);
    ctx.phase.set(LoadPhase::Idle);
    spawn_local(refresh(ctx, store));
}

/// Checked set of the in-flight flag. Returns `false` when a load is
/// already running, in which case the caller must back off without touching
/// any other state.
fn try_begin_load(ctx: StorefrontContext) -> bool {
    if ctx.load_in_flight.get_untracked() {
        return false;
    }
    ctx.load_in_flight.set(true);
    true
}

async fn refresh(ctx: StorefrontContext, store: Rc<dyn CatalogStore>) {
    if !try_begin_load(ctx) {
        log::info!("catalog: load already in flight, skipping");
        return;
    }

    if ctx.phase.get_untracked() != LoadPhase::ShowingCached {
        ctx.phase.set(LoadPhase::Fetching);
    }

    match fetch_catalog().await {
        Ok(catalog) => {
            store.write(&CacheEntry::new(catalog.clone(), now_ms()));
            log::info!("catalog: refreshed, {} products", catalog.products.len());
            ctx.catalog.set(catalog);
            ctx.phase.set(LoadPhase::ShowingFresh);
            ctx.load_error.set(None);
        }
        Err(e) => {
            // EmptyFeed lands here too, before anything was written, so a
            // stale but non-empty cache survives an empty export.
            log::warn!("catalog: load failed ({e}), showing fallback");
            ctx.catalog.set(fallback_catalog(store.as_ref()));
            ctx.phase.set(LoadPhase::ShowingFallback);
            ctx.load_error.set(Some(e.to_string()));
        }
    }

    ctx.load_in_flight.set(false);
}

async fn fetch_catalog() -> Result<Catalog, CatalogError> {
    let text = api::fetch_catalog_csv().await?;
    catalog_from_csv(&text)
}

/// Parse and normalize a feed body. A feed with zero products is a failure:
/// a valid-looking empty export must never replace a non-empty cache.
pub fn catalog_from_csv(text: &str) -> Result<Catalog, CatalogError> {
    let records = csv::parse_records(text);
    let products = normalize::normalize_rows(&records);
    if products.is_empty() {
        return Err(CatalogError::EmptyFeed);
    }
    Ok(Catalog::from_products(products))
}

/// What to display after a failed load: the newest cache entry regardless of
/// freshness when it still has products, else the sample catalog.
pub fn fallback_catalog(store: &dyn CatalogStore) -> Catalog {
    match store.read() {
        Some(entry) if !entry.catalog.is_empty() => entry.catalog,
        _ => sample_catalog(),
    }
}
