//! Application-wide state, provided once via Leptos context.
//!
//! Replaces scattered globals with a single store: the current catalog, the
//! loader phase, the selected category filter and the product being ordered.

use contracts::catalog::Catalog;
use leptos::prelude::*;

/// Category filter value meaning "no filter".
pub const ALL_CATEGORIES: &str = "all";

/// Where the catalog loader currently is. See `catalog::loader` for the
/// transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    /// A fresh cache entry is on screen; a background refresh is running.
    ShowingCached,
    Fetching,
    ShowingFresh,
    /// A fetch failed; stale cache or the sample catalog is on screen.
    ShowingFallback,
}

/// The product/size selection an order form is opened for.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderTarget {
    pub product_name: String,
    pub size: String,
    pub price: Option<f64>,
}

#[derive(Clone, Copy)]
pub struct StorefrontContext {
    pub catalog: RwSignal<Catalog>,
    pub phase: RwSignal<LoadPhase>,
    /// Inline banner text shown when the loader fell back to stale/sample
    /// data. `None` hides the banner.
    pub load_error: RwSignal<Option<String>>,
    /// Single-flight guard: true while a catalog fetch is in flight. Both the
    /// background refresh and manual retry check it before starting.
    pub load_in_flight: RwSignal<bool>,
    pub selected_category: RwSignal<String>,
    /// `Some` while the order modal is open.
    pub order_target: RwSignal<Option<OrderTarget>>,
}

impl StorefrontContext {
    pub fn new() -> Self {
        Self {
            catalog: RwSignal::new(Catalog::default()),
            phase: RwSignal::new(LoadPhase::Idle),
            load_error: RwSignal::new(None),
            load_in_flight: RwSignal::new(false),
            selected_category: RwSignal::new(ALL_CATEGORIES.to_string()),
            order_target: RwSignal::new(None),
        }
    }
}

impl Default for StorefrontContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_storefront() -> StorefrontContext {
    use_context::<StorefrontContext>().expect("StorefrontContext not found")
}
