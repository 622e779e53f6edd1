//! Shared types and pure domain logic for the storefront client.
//!
//! Everything in this crate is plain Rust with no browser dependencies so it
//! can be unit-tested with `cargo test` on the host.

pub mod catalog;
pub mod order;
