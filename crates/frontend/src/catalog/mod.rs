//! Catalog loading: fetch, persistence and the cache-first state machine.

pub mod api;
pub mod error;
pub mod loader;
pub mod storage;
pub mod ui;
