//! Catalog load failures. All of these are downgraded to a fallback display
//! inside the loader; none of them can take the page down.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("could not reach the catalog: {0}")]
    Network(String),

    #[error("the catalog took too long to respond")]
    Timeout,

    #[error("the catalog feed contained no products")]
    EmptyFeed,

    #[error("could not read the catalog feed: {0}")]
    Parse(String),
}
